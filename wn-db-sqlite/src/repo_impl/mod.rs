use diesel::prelude::*;

use wn_core::{
    entities::*,
    repositories::{Error as RepoError, *},
};

use super::*;

mod place;
mod user;
mod verification;

type Result<T> = std::result::Result<T, RepoError>;

fn from_diesel_err(err: diesel::result::Error) -> RepoError {
    match err {
        diesel::result::Error::NotFound => RepoError::NotFound,
        _ => RepoError::Other(err.into()),
    }
}
