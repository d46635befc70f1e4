use super::*;

pub fn submit_verification(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    revalidate: &dyn RevalidationGateway,
    account_email: &EmailAddress,
    new_verification: usecases::NewVerification,
) -> Result<Verification> {
    let place_id = new_verification.place_id.clone();
    let (verification, place) = connections.exclusive()?.transaction(|conn| {
        // Any authenticated account may submit a claim.
        let submitter = usecases::authorize_user_by_email(conn, account_email, Role::Guest)?;
        let verification = usecases::submit_verification(conn, &submitter, new_verification)
            .map_err(|err| {
                log::warn!("Failed to submit verification for place {place_id}: {err}");
                err
            })?;
        let (place, _) = usecases::get_place(conn, verification.place_id.as_str())?;
        Ok::<_, usecases::Error>((verification, place))
    })?;
    notify.notify(NotificationEvent::VerificationSubmitted {
        place: &place,
        verification: &verification,
    });
    revalidate.views_changed(&[
        StaleView::Map,
        StaleView::Dashboard,
        StaleView::Place(place.id.clone()),
    ]);
    Ok(verification)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn pending_claim_with_stale_views() {
        let fixture = BackendFixture::new();
        let user = fixture.create_user("user@bar.tld", None);
        let (place, _) = fixture.create_place("Kopi Tuku", None);

        let verification = fixture
            .submit_verification(&user, place.id.as_str(), "https://proof.example/1")
            .unwrap();

        assert_eq!(PlaceStatus::Pending, verification.status);
        assert_eq!(
            PlaceStatus::Pending,
            fixture.get_verification(verification.id.as_str()).status
        );
        // The place itself is not touched by the submission.
        assert_eq!(PlaceStatus::Unverified, fixture.get_place(place.id.as_str()).1);
        assert!(fixture
            .revalidate
            .stale
            .borrow()
            .contains(&StaleView::Place(place.id.clone())));
    }

    #[test]
    fn unknown_account_is_unauthorized() {
        let fixture = BackendFixture::new();
        let (place, _) = fixture.create_place("Kopi Tuku", None);
        let ghost = EmailAddress::new_unchecked("ghost@bar.tld".into());
        let res = flows::submit_verification(
            &fixture.db_connections,
            &fixture.notify,
            &fixture.revalidate,
            &ghost,
            usecases::NewVerification {
                place_id: place.id.clone(),
                proof_link: "https://proof.example/1".into(),
                admin_notes: None,
            },
        );
        assert!(matches!(
            res,
            Err(AppError::Business(BError::Parameter(
                usecases::Error::Unauthorized
            )))
        ));
    }

    #[test]
    fn blank_proof_link_creates_nothing() {
        let fixture = BackendFixture::new();
        let user = fixture.create_user("user@bar.tld", None);
        let (place, _) = fixture.create_place("Kopi Tuku", None);

        let res = fixture.submit_verification(&user, place.id.as_str(), "  ");
        assert!(matches!(
            res,
            Err(AppError::Business(BError::Parameter(
                usecases::Error::EmptyProofLink
            )))
        ));
        assert!(fixture
            .db_connections
            .shared()
            .unwrap()
            .all_verifications()
            .unwrap()
            .is_empty());
    }
}
