use super::prelude::*;

/// Resolves the caller's account and checks the required role.
///
/// The single authorization guard for all mutating operations. It runs
/// before any target record is touched, so unauthorized callers learn
/// nothing about the existence of other records.
pub fn authorize_user_by_email<R: UserRepo>(
    repo: &R,
    email: &EmailAddress,
    min_required_role: Role,
) -> Result<User> {
    if let Some(user) = repo.try_get_user_by_email(email)? {
        return crate::authorization::authorize_role(&user, min_required_role)
            .map(|()| user)
            .map_err(|_| Error::Unauthorized);
    }
    Err(Error::Unauthorized)
}

// Checks if the account may edit or delete the given place.
// Admins may edit any place, other users only their own submissions.
pub fn authorize_place_edit(account: &User, place: &Place) -> Result<()> {
    if account.role == Role::Admin {
        return Ok(());
    }
    if place.submitter.as_ref() == Some(&account.id) {
        return Ok(());
    }
    Err(Error::Forbidden)
}
