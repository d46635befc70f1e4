use super::{authorize::authorize_place_edit, prelude::*};
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct UpdatePlace {
    pub title: String,
    pub description: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub amenities: Amenities,
    pub opening_hours: Option<String>,
}

/// Updates the descriptive attributes of a place.
///
/// The status is not touched; changing it is reserved for the verification
/// workflow and the direct admin edit.
pub fn update_place<D>(db: &D, account: &User, id: &str, update: UpdatePlace) -> Result<Place>
where
    D: PlaceRepo,
{
    let (place, _) = db.get_place(id)?;
    authorize_place_edit(account, &place)?;
    let UpdatePlace {
        title,
        description,
        address,
        lat,
        lng,
        amenities,
        opening_hours,
    } = update;
    if !validate::place_title(&title) {
        return Err(Error::Title);
    }
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?;
    let place = Place {
        title,
        description,
        address,
        pos,
        amenities,
        opening_hours,
        ..place
    };
    db.update_place(&place)?;
    Ok(place)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use wn_entities::builders::Builder;

    fn update() -> UpdatePlace {
        UpdatePlace {
            title: "Kopi Tuku (renamed)".into(),
            description: "".into(),
            address: "Jl. Braga 2".into(),
            lat: -6.9,
            lng: 107.6,
            amenities: Amenities {
                wifi_available: true,
                ..Amenities::default()
            },
            opening_hours: None,
        }
    }

    #[test]
    fn owner_updates_own_place() {
        let db = MockDb::default();
        let owner = User::build().id("u1").role(Role::User).finish();
        db.places.borrow_mut().push((
            Place::build().id("p1").submitter(Some("u1".into())).finish(),
            PlaceStatus::VerifiedUser,
        ));
        let place = update_place(&db, &owner, "p1", update()).unwrap();
        assert_eq!("Kopi Tuku (renamed)", place.title);
        assert!(db.places.borrow()[0].0.amenities.wifi_available);
        // Status is preserved.
        assert_eq!(PlaceStatus::VerifiedUser, db.places.borrow()[0].1);
    }

    #[test]
    fn other_users_are_forbidden() {
        let db = MockDb::default();
        let other = User::build().id("u2").role(Role::User).finish();
        db.places.borrow_mut().push((
            Place::build().id("p1").submitter(Some("u1".into())).finish(),
            PlaceStatus::Unverified,
        ));
        assert!(matches!(
            update_place(&db, &other, "p1", update()),
            Err(Error::Forbidden)
        ));
    }
}
