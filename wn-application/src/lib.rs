mod change_user_role;
mod create_place;
mod delete_place;
mod moderate_verification;
mod register_user;
mod set_place_status;
mod submit_verification;
mod update_place;

pub mod prelude {
    pub use super::{
        change_user_role::*, create_place::*, delete_place::*, moderate_verification::*,
        register_user::*, set_place_status::*, submit_verification::*, update_place::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use wn_core::{
    entities::*,
    gateways::{notify::*, revalidate::*},
    repositories::*,
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use wn_db_sqlite::Connections;
}
