use crate::repositories::*;

pub trait Db: PlaceRepo + VerificationRepo + UserRepo {}

impl<T> Db for T where T: PlaceRepo + VerificationRepo + UserRepo {}
