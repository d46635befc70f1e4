use super::{authorize::authorize_place_edit, prelude::*};

/// Deletes a place. Not part of the verification workflow; gated on
/// admin-or-owner.
///
/// Verification records are weak references and remain as audit trail.
pub fn delete_place<D>(db: &D, account: &User, id: &str) -> Result<()>
where
    D: PlaceRepo,
{
    let (place, _) = db.get_place(id)?;
    authorize_place_edit(account, &place)?;
    log::info!("Deleting place {} ({})", place.title, place.id);
    db.delete_place(id)?;
    Ok(())
}
