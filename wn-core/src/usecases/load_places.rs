use std::cmp::Ordering;

use super::prelude::*;

pub fn get_place<D: PlaceRepo>(db: &D, id: &str) -> Result<(Place, PlaceStatus)> {
    Ok(db.get_place(id)?)
}

pub fn load_places<D: PlaceRepo>(
    db: &D,
    pagination: &Pagination,
) -> Result<Vec<(Place, PlaceStatus)>> {
    Ok(db.all_places(pagination)?)
}

/// All places within the given great-circle radius around `center`,
/// optionally restricted to the given statuses, closest first.
pub fn nearby_places<D: PlaceRepo>(
    db: &D,
    center: MapPoint,
    radius: Distance,
    status: Option<&[PlaceStatus]>,
) -> Result<Vec<(Place, PlaceStatus)>> {
    if !radius.is_valid() {
        return Err(Error::InvalidRadius);
    }
    let mut places = db.places_within_radius(center, radius)?;
    if let Some(status) = status {
        places.retain(|(_, s)| status.contains(s));
    }
    places.sort_by(|(a, _), (b, _)| {
        a.pos
            .distance(&center)
            .partial_cmp(&b.pos.distance(&center))
            .unwrap_or(Ordering::Equal)
    });
    Ok(places)
}
