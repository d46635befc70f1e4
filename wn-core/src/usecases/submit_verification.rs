use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewVerification {
    pub place_id: Id,
    pub proof_link: String,
    pub admin_notes: Option<String>,
}

/// Records a new verification claim for a place.
///
/// The claim starts out `Pending`; the place status is not touched until a
/// moderator decides on the claim.
pub fn submit_verification<D>(
    db: &D,
    submitter: &User,
    new_verification: NewVerification,
) -> Result<Verification>
where
    D: PlaceRepo + VerificationRepo,
{
    let NewVerification {
        place_id,
        proof_link,
        admin_notes,
    } = new_verification;
    if proof_link.trim().is_empty() {
        return Err(Error::EmptyProofLink);
    }
    let (place, _) = db.get_place(place_id.as_str())?;
    let verification = Verification {
        id: Id::new(),
        place_id: place.id,
        submitter_id: submitter.id.clone(),
        proof_link,
        admin_notes,
        status: PlaceStatus::Pending,
        created_at: Timestamp::now(),
    };
    log::info!(
        "Recording verification claim {} for place {} by {}",
        verification.id,
        verification.place_id,
        submitter.email
    );
    db.create_verification(&verification)?;
    Ok(verification)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use wn_entities::builders::Builder;

    fn fixture() -> (MockDb, User) {
        let db = MockDb::default();
        let submitter = User::build().id("u1").email("u1@bar.tld").finish();
        db.users.borrow_mut().push(submitter.clone());
        db.places
            .borrow_mut()
            .push((Place::build().id("p1").finish(), PlaceStatus::Unverified));
        (db, submitter)
    }

    #[test]
    fn create_pending_claim() {
        let (db, submitter) = fixture();
        let verification = submit_verification(
            &db,
            &submitter,
            NewVerification {
                place_id: "p1".into(),
                proof_link: "https://proof.example/1".into(),
                admin_notes: None,
            },
        )
        .unwrap();
        assert_eq!(PlaceStatus::Pending, verification.status);
        assert_eq!(Id::from("u1"), verification.submitter_id);
        assert_eq!(1, db.verifications.borrow().len());
        // The place itself stays unverified.
        assert_eq!(PlaceStatus::Unverified, db.places.borrow()[0].1);
    }

    #[test]
    fn reject_blank_proof_link() {
        let (db, submitter) = fixture();
        for proof_link in ["", "   "] {
            let res = submit_verification(
                &db,
                &submitter,
                NewVerification {
                    place_id: "p1".into(),
                    proof_link: proof_link.into(),
                    admin_notes: None,
                },
            );
            assert!(matches!(res, Err(Error::EmptyProofLink)));
        }
        assert!(db.verifications.borrow().is_empty());
    }

    #[test]
    fn reject_unknown_place() {
        let (db, submitter) = fixture();
        let res = submit_verification(
            &db,
            &submitter,
            NewVerification {
                place_id: "p2".into(),
                proof_link: "https://proof.example/1".into(),
                admin_notes: None,
            },
        );
        assert!(matches!(res, Err(Error::Repo(RepoError::NotFound))));
        assert!(db.verifications.borrow().is_empty());
    }
}
