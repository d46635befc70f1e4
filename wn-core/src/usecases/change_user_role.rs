use super::prelude::*;

pub fn change_user_role<D: Db>(
    db: &D,
    account_email: &EmailAddress,
    user_email: &EmailAddress,
    role: Role,
) -> Result<()> {
    log::info!("Changing role to {:?} for {}", role, user_email);
    let account = db
        .try_get_user_by_email(account_email)?
        .ok_or(Error::UserDoesNotExist)?;
    let mut user = db
        .try_get_user_by_email(user_email)?
        .ok_or(Error::UserDoesNotExist)?;
    // An account may only assign roles below its own to users below its
    // own role.
    if account.role > user.role && role < account.role {
        user.role = role;
        db.update_user(&user)?;
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use wn_entities::builders::Builder;

    fn email(addr: &str) -> EmailAddress {
        EmailAddress::new_unchecked(addr.into())
    }

    fn fixture() -> MockDb {
        let db = MockDb::default();
        db.users.borrow_mut().push(
            User::build()
                .email("admin@bar.tld")
                .role(Role::Admin)
                .finish(),
        );
        db.users
            .borrow_mut()
            .push(User::build().email("user@bar.tld").role(Role::Guest).finish());
        db
    }

    #[test]
    fn admin_promotes_guest_to_user() {
        let db = fixture();
        assert!(
            change_user_role(&db, &email("admin@bar.tld"), &email("user@bar.tld"), Role::User)
                .is_ok()
        );
        assert_eq!(
            Role::User,
            db.get_user_by_email(&email("user@bar.tld")).unwrap().role
        );
    }

    #[test]
    fn user_cannot_promote_to_admin_level() {
        let db = fixture();
        // Raising someone to one's own level is not allowed.
        assert!(matches!(
            change_user_role(
                &db,
                &email("admin@bar.tld"),
                &email("user@bar.tld"),
                Role::Admin
            ),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn non_admin_cannot_change_peers() {
        let db = fixture();
        db.users
            .borrow_mut()
            .push(User::build().email("peer@bar.tld").role(Role::User).finish());
        db.users.borrow_mut().iter_mut().for_each(|u| {
            if u.email.as_str() == "user@bar.tld" {
                u.role = Role::User;
            }
        });
        assert!(matches!(
            change_user_role(
                &db,
                &email("user@bar.tld"),
                &email("peer@bar.tld"),
                Role::Guest
            ),
            Err(Error::Forbidden)
        ));
    }
}
