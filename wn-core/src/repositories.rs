// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub trait PlaceRepo {
    fn create_place(&self, place: &Place, status: PlaceStatus) -> Result<()>;
    fn update_place(&self, place: &Place) -> Result<()>;
    fn delete_place(&self, id: &str) -> Result<()>;

    fn get_place(&self, id: &str) -> Result<(Place, PlaceStatus)>;
    fn all_places(&self, pagination: &Pagination) -> Result<Vec<(Place, PlaceStatus)>>;
    fn count_places(&self) -> Result<usize>;

    fn places_within_radius(
        &self,
        center: MapPoint,
        radius: Distance,
    ) -> Result<Vec<(Place, PlaceStatus)>>;

    // Returns the number of affected places (0 or 1).
    fn update_place_status(&self, id: &str, status: PlaceStatus) -> Result<usize>;
}

pub trait VerificationRepo {
    fn create_verification(&self, verification: &Verification) -> Result<()>;
    fn update_verification(&self, verification: &Verification) -> Result<()>;

    fn get_verification(&self, id: &str) -> Result<Verification>;
    fn all_verifications(&self) -> Result<Vec<Verification>>;
    fn verifications_of_place(&self, place_id: &str) -> Result<Vec<Verification>>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn delete_user_by_email(&self, email: &EmailAddress) -> Result<()>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;

    fn get_user_by_id(&self, id: &str) -> Result<User>;
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
}
