use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is invalid")]
    Title,
    #[error("The display name is invalid")]
    DisplayName,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("Invalid password")]
    Password,
    #[error("Invalid credentials")]
    Credentials,
    #[error("The user already exists")]
    UserExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("The proof link must not be empty")]
    EmptyProofLink,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid radius")]
    InvalidRadius,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<wn_entities::password::ParseError> for Error {
    fn from(_: wn_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<wn_entities::email::EmailAddressParseError> for Error {
    fn from(_: wn_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}
