use std::io;
use thiserror::Error;
use wn_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

pub use wn_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<wn_core::usecases::Error> for AppError {
    fn from(err: wn_core::usecases::Error) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for BError {
    fn from(s: String) -> Self {
        Self::Internal(s)
    }
}

impl From<wn_entities::password::ParseError> for AppError {
    fn from(_: wn_entities::password::ParseError) -> Self {
        BError::from(ParameterError::Password).into()
    }
}

impl From<wn_entities::email::EmailAddressParseError> for AppError {
    fn from(_: wn_entities::email::EmailAddressParseError) -> Self {
        BError::from(ParameterError::EmailAddress).into()
    }
}
