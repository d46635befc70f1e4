mod authorize;
mod change_user_role;
mod create_new_user;
mod create_place;
mod delete_place;
mod error;
mod list_users;
mod list_verifications;
mod load_places;
mod login;
mod moderate_verification;
mod set_place_status;
mod submit_verification;
mod update_place;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*, change_user_role::*, create_new_user::*, create_place::*, delete_place::*,
    error::Error, list_users::*, list_verifications::*, load_places::*, login::*,
    moderate_verification::*, set_place_status::*, submit_verification::*, update_place::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        db::*,
        entities::*,
        repositories::{Error as RepoError, *},
    };
}
