use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::*;
use strum::{EnumCount, EnumIter, EnumString};
use thiserror::Error;

use crate::{id::Id, time::Timestamp};

pub type PlaceStatusPrimitive = i16;

/// Verification status of a place.
///
/// Also used for the status of a single [`Verification`] record, which is
/// restricted to the subset `{Pending, VerifiedUser, VerifiedAdmin,
/// Rejected}`.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumIter, EnumCount, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum PlaceStatus {
    Rejected      = -1,
    Unverified    =  0,
    Pending       =  1,
    VerifiedUser  =  2,
    VerifiedAdmin =  3,
}

impl PlaceStatus {
    pub fn is_verified(self) -> bool {
        self >= Self::VerifiedUser
    }

    pub const fn default() -> Self {
        Self::Unverified
    }
}

#[derive(Debug, Error)]
#[error("Invalid place status primitive: {0}")]
pub struct InvalidPlaceStatusPrimitive(PlaceStatusPrimitive);

impl TryFrom<i16> for PlaceStatus {
    type Error = InvalidPlaceStatusPrimitive;
    fn try_from(from: PlaceStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidPlaceStatusPrimitive(from))
    }
}

impl From<PlaceStatus> for PlaceStatusPrimitive {
    fn from(from: PlaceStatus) -> Self {
        from.to_i16().expect("Place status primitive")
    }
}

/// A single user's claim, with proof, that a place's information is accurate.
///
/// Records form an append-only audit trail: created `Pending`, decided at
/// most once by a moderator, and never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub id: Id,
    pub place_id: Id,
    pub submitter_id: Id,
    pub proof_link: String,
    pub admin_notes: Option<String>,
    pub status: PlaceStatus,
    pub created_at: Timestamp,
}
