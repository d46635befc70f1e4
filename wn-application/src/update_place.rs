use super::*;

pub fn update_place(
    connections: &sqlite::Connections,
    revalidate: &dyn RevalidationGateway,
    account_email: &EmailAddress,
    id: &str,
    update: usecases::UpdatePlace,
) -> Result<Place> {
    let place = connections.exclusive()?.transaction(|conn| {
        let account = usecases::authorize_user_by_email(conn, account_email, Role::Guest)?;
        usecases::update_place(conn, &account, id, update).map_err(|err| {
            log::warn!("Failed to update place {id}: {err}");
            err
        })
    })?;
    revalidate.views_changed(&[
        StaleView::Map,
        StaleView::Dashboard,
        StaleView::Place(place.id.clone()),
    ]);
    Ok(place)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn owner_updates_the_description() {
        let fixture = BackendFixture::new();
        let user = fixture.create_user("user@bar.tld", None);
        let (place, _) = fixture.create_place("Kopi Tuku", Some(&user));
        let updated = flows::update_place(
            &fixture.db_connections,
            &fixture.revalidate,
            &user.email,
            place.id.as_str(),
            usecases::UpdatePlace {
                title: place.title.clone(),
                description: "Third-wave coffee, fast wifi".into(),
                address: place.address.clone(),
                lat: place.pos.lat_deg(),
                lng: place.pos.lng_deg(),
                amenities: place.amenities,
                opening_hours: None,
            },
        )
        .unwrap();
        assert_eq!("Third-wave coffee, fast wifi", updated.description);
        assert_eq!(
            "Third-wave coffee, fast wifi",
            fixture.get_place(place.id.as_str()).0.description
        );
    }

    #[test]
    fn foreign_place_is_forbidden() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user("owner@bar.tld", None);
        let other = fixture.create_user("other@bar.tld", None);
        let (place, _) = fixture.create_place("Kopi Tuku", Some(&owner));
        let res = flows::update_place(
            &fixture.db_connections,
            &fixture.revalidate,
            &other.email,
            place.id.as_str(),
            usecases::UpdatePlace {
                title: "Hijacked".into(),
                description: "".into(),
                address: "".into(),
                lat: 0.0,
                lng: 0.0,
                amenities: Default::default(),
                opening_hours: None,
            },
        );
        assert!(matches!(
            res,
            Err(AppError::Business(BError::Parameter(
                usecases::Error::Forbidden
            )))
        ));
        assert_eq!("Kopi Tuku", fixture.get_place(place.id.as_str()).0.title);
    }
}
