use super::*;

pub fn moderate_verification(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    revalidate: &dyn RevalidationGateway,
    account_email: &EmailAddress,
    verification_id: &str,
    moderation: usecases::Moderation,
) -> Result<Verification> {
    let verification = connections.exclusive()?.transaction(|conn| {
        // The admin gate runs before the record is even read, so
        // non-admins cannot probe for the existence of records.
        usecases::authorize_user_by_email(conn, account_email, Role::Admin)?;
        usecases::moderate_verification(conn, verification_id, moderation).map_err(|err| {
            log::warn!("Failed to moderate verification {verification_id}: {err}");
            err
        })
    })?;

    // Post-processing on a shared connection after the transaction has
    // been committed. Failures no longer affect the decision itself.
    let db = connections.shared()?;
    match (
        db.get_user_by_id(verification.submitter_id.as_str()),
        db.get_place(verification.place_id.as_str()),
    ) {
        (Ok(submitter), Ok((place, _))) => {
            notify.notify(NotificationEvent::VerificationModerated {
                verification: &verification,
                submitter: &submitter,
                place_title: &place.title,
            });
        }
        (submitter, place) => {
            if let Err(err) = submitter {
                log::warn!(
                    "Failed to load submitter of verification {} after moderating: {err}",
                    verification.id
                );
            }
            if let Err(err) = place {
                log::warn!(
                    "Failed to load place of verification {} after moderating: {err}",
                    verification.id
                );
            }
        }
    }
    revalidate.views_changed(&[
        StaleView::AdminPlaces,
        StaleView::Dashboard,
        StaleView::Place(verification.place_id.clone()),
    ]);
    Ok(verification)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn non_admin_is_rejected_before_any_lookup() {
        let fixture = BackendFixture::new();
        let user = fixture.create_user("user@bar.tld", None);
        // A nonexistent record still yields Unauthorized, not NotFound.
        let res = fixture.moderate(&user.email, "no-such-id", usecases::Decision::Approve);
        assert!(matches!(
            res,
            Err(AppError::Business(BError::Parameter(
                usecases::Error::Unauthorized
            )))
        ));
    }

    #[test]
    fn admin_gets_not_found_for_unknown_record() {
        let fixture = BackendFixture::new();
        let admin = fixture.create_user("admin@bar.tld", Some(Role::Admin));
        let res = fixture.moderate(&admin.email, "no-such-id", usecases::Decision::Approve);
        assert!(matches!(
            res,
            Err(AppError::Business(BError::Parameter(usecases::Error::Repo(
                RepoError::NotFound
            ))))
        ));
    }
}
