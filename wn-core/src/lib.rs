pub mod authorization;
pub mod db;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use wn_entities::{
        email::*, geo::*, id::*, password::*, place::*, time::*, user::*, verification::*,
    };
}

pub use repositories::Error as RepoError;
