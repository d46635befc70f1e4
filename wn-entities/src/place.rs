use num_derive::{FromPrimitive, ToPrimitive};
use strum::EnumString;

use crate::{geo::MapPoint, id::Id, time::Timestamp};

/// A venue subject to verification.
///
/// The descriptive attributes are immutable with respect to the verification
/// workflow. The current [`PlaceStatus`](crate::verification::PlaceStatus) is
/// carried alongside the place by the persistence layer and mutated only
/// through the workflow (or a direct admin edit).
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: Id,
    pub created_at: Timestamp,
    /// Weak reference to the submitting user; the place outlives the account.
    pub submitter: Option<Id>,
    pub title: String,
    pub description: String,
    pub address: String,
    pub pos: MapPoint,
    pub amenities: Amenities,
    pub opening_hours: Option<String>,
}

/// Work-friendliness attributes of a place.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Amenities {
    pub wifi_available: bool,
    pub power_outlets: bool,
    pub laptop_friendly: bool,
    pub noise_level: Option<NoiseLevel>,
}

pub type NoiseLevelPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum NoiseLevel {
    Quiet    = 0,
    Moderate = 1,
    Loud     = 2,
}
