use std::fmt;

const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MAX: f64 = 180.0;

/// Mean earth radius in meters.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A point on the map with latitude/longitude in degrees.
///
/// Out-of-range coordinates are rejected by the checked constructor.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat_deg: f64,
    lng_deg: f64,
}

impl MapPoint {
    pub fn try_from_lat_lng_deg(lat_deg: f64, lng_deg: f64) -> Option<Self> {
        if !lat_deg.is_finite() || lat_deg.abs() > LAT_DEG_MAX {
            return None;
        }
        if !lng_deg.is_finite() || lng_deg.abs() > LNG_DEG_MAX {
            return None;
        }
        Some(Self { lat_deg, lng_deg })
    }

    pub fn from_lat_lng_deg(lat_deg: f64, lng_deg: f64) -> Self {
        let res = Self::try_from_lat_lng_deg(lat_deg, lng_deg);
        debug_assert!(res.is_some());
        res.unwrap_or(Self { lat_deg, lng_deg })
    }

    pub const fn lat_deg(&self) -> f64 {
        self.lat_deg
    }

    pub const fn lng_deg(&self) -> f64 {
        self.lng_deg
    }

    /// Great-circle distance (haversine).
    pub fn distance(&self, other: &Self) -> Distance {
        let lat1 = self.lat_deg.to_radians();
        let lat2 = other.lat_deg.to_radians();
        let d_lat = (other.lat_deg - self.lat_deg).to_radians();
        let d_lng = (other.lng_deg - self.lng_deg).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();
        Distance::from_meters(EARTH_RADIUS_METERS * c)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat_deg, self.lng_deg)
    }
}

/// A non-negative distance in meters.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub fn from_kilometers(kilometers: f64) -> Self {
        Self(kilometers * 1_000.0)
    }

    pub const fn as_meters(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}
