use super::prelude::*;

pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

pub fn login_with_email<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    repo.try_get_user_by_email(login.email)
        .map_err(Error::Repo)
        .and_then(|user| {
            if let Some(u) = user {
                if u.password.verify(login.password) {
                    Ok(u)
                } else {
                    Err(Error::Credentials)
                }
            } else {
                Err(Error::Credentials)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use wn_entities::builders::Builder;

    #[test]
    fn login_with_valid_credentials() {
        let db = MockDb::default();
        db.users.borrow_mut().push(
            User::build()
                .email("foo@bar.tld")
                .password("secret1")
                .role(Role::Admin)
                .finish(),
        );
        let email = EmailAddress::new_unchecked("foo@bar.tld".into());
        let user = login_with_email(
            &db,
            &Credentials {
                email: &email,
                password: "secret1",
            },
        )
        .unwrap();
        assert_eq!(Role::Admin, user.role);
    }

    #[test]
    fn reject_unknown_email_and_wrong_password() {
        let db = MockDb::default();
        db.users
            .borrow_mut()
            .push(User::build().email("foo@bar.tld").password("secret1").finish());
        let known = EmailAddress::new_unchecked("foo@bar.tld".into());
        let unknown = EmailAddress::new_unchecked("who@bar.tld".into());
        assert!(matches!(
            login_with_email(
                &db,
                &Credentials {
                    email: &known,
                    password: "wrong",
                }
            ),
            Err(Error::Credentials)
        ));
        assert!(matches!(
            login_with_email(
                &db,
                &Credentials {
                    email: &unknown,
                    password: "secret1",
                }
            ),
            Err(Error::Credentials)
        ));
    }
}
