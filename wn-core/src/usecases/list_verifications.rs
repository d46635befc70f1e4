use super::prelude::*;

/// A verification claim joined with the minimal identity fields of its
/// submitter and the title of the subject place.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationEntry {
    pub verification: Verification,
    pub submitter_name: String,
    pub submitter_email: EmailAddress,
    pub place_title: String,
}

pub fn list_verifications<D>(db: &D, place_id: Option<&str>) -> Result<Vec<VerificationEntry>>
where
    D: PlaceRepo + VerificationRepo + UserRepo,
{
    let mut verifications = match place_id {
        Some(place_id) => db.verifications_of_place(place_id)?,
        None => db.all_verifications()?,
    };
    verifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let mut entries = Vec::with_capacity(verifications.len());
    for verification in verifications {
        let submitter = db.get_user_by_id(verification.submitter_id.as_str())?;
        let (place, _) = db.get_place(verification.place_id.as_str())?;
        entries.push(VerificationEntry {
            verification,
            submitter_name: submitter.display_name,
            submitter_email: submitter.email,
            place_title: place.title,
        });
    }
    Ok(entries)
}
