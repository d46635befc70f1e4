use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewPlace {
    pub title: String,
    pub description: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub amenities: Amenities,
    pub opening_hours: Option<String>,
    /// Requested initial status; only honored for admin submitters.
    pub status: Option<PlaceStatus>,
}

pub fn create_place<D>(
    db: &D,
    submitter: Option<&User>,
    new_place: NewPlace,
) -> Result<(Place, PlaceStatus)>
where
    D: PlaceRepo,
{
    let NewPlace {
        title,
        description,
        address,
        lat,
        lng,
        amenities,
        opening_hours,
        status,
    } = new_place;
    if !validate::place_title(&title) {
        return Err(Error::Title);
    }
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?;
    let status = match submitter {
        Some(user) if user.role == Role::Admin => status.unwrap_or(PlaceStatus::Unverified),
        _ => PlaceStatus::Unverified,
    };
    let place = Place {
        id: Id::new(),
        created_at: Timestamp::now(),
        submitter: submitter.map(|u| u.id.clone()),
        title,
        description,
        address,
        pos,
        amenities,
        opening_hours,
    };
    log::debug!("Creating new place: {} ({})", place.title, place.id);
    db.create_place(&place, status)?;
    Ok((place, status))
}
