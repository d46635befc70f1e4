use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub display_name: String,
    pub password: String,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    let password = u.password.parse::<Password>()?;
    if !validate::email(&u.email) {
        return Err(Error::EmailAddress);
    }
    if !validate::display_name(&u.display_name) {
        return Err(Error::DisplayName);
    }
    if repo.try_get_user_by_email(&u.email)?.is_some() {
        return Err(Error::UserExists);
    }
    let new_user = User {
        id: Id::new(),
        email: u.email,
        display_name: u.display_name.trim().to_string(),
        password,
        role: Role::User,
        created_at: Timestamp::now(),
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    repo.create_user(&new_user)?;
    Ok(new_user)
}
