use super::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

#[derive(Debug, Clone)]
pub struct Moderation {
    pub decision: Decision,
    pub admin_notes: Option<String>,
}

/// Applies a moderator's decision to a verification claim.
///
/// Must run inside a single transaction: on approval both the claim and its
/// subject place change status together, and the submitter's role is
/// resolved within the same transaction so a concurrent role change cannot
/// yield a stale target status.
///
/// A rejection judges the claim only. The place keeps its current status
/// even if an earlier approved claim verified it.
pub fn moderate_verification<D>(
    db: &D,
    verification_id: &str,
    moderation: Moderation,
) -> Result<Verification>
where
    D: PlaceRepo + VerificationRepo + UserRepo,
{
    let Moderation {
        decision,
        admin_notes,
    } = moderation;
    let mut verification = db.get_verification(verification_id)?;
    match decision {
        Decision::Reject => {
            verification.status = PlaceStatus::Rejected;
            verification.admin_notes = admin_notes;
            db.update_verification(&verification)?;
            log::info!(
                "Rejected verification {} for place {}",
                verification.id,
                verification.place_id
            );
        }
        Decision::Approve => {
            let submitter = db.get_user_by_id(verification.submitter_id.as_str())?;
            let target = if submitter.role == Role::Admin {
                PlaceStatus::VerifiedAdmin
            } else {
                PlaceStatus::VerifiedUser
            };
            verification.status = target;
            verification.admin_notes = admin_notes;
            db.update_verification(&verification)?;
            let place_count =
                db.update_place_status(verification.place_id.as_str(), target)?;
            if place_count == 0 {
                // The place vanished concurrently. Fail the whole unit so
                // the claim update above is rolled back as well.
                return Err(Error::Repo(RepoError::NotFound));
            }
            debug_assert_eq!(place_count, 1);
            log::info!(
                "Approved verification {}: place {} is now {:?}",
                verification.id,
                verification.place_id,
                target
            );
        }
    }
    Ok(verification)
}
