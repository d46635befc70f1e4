use super::prelude::*;

/// Direct status edit, bypassing the verification records.
///
/// Authorization (admin only) is enforced by the calling flow.
pub fn set_place_status<D>(db: &D, id: &str, status: PlaceStatus) -> Result<()>
where
    D: PlaceRepo,
{
    let place_count = db.update_place_status(id, status)?;
    if place_count == 0 {
        return Err(Error::Repo(RepoError::NotFound));
    }
    debug_assert_eq!(place_count, 1);
    log::info!("Changed status of place {id} to {status:?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use wn_entities::builders::Builder;

    #[test]
    fn change_status_of_existing_place() {
        let db = MockDb::default();
        db.places
            .borrow_mut()
            .push((Place::build().id("p1").finish(), PlaceStatus::Unverified));
        assert!(set_place_status(&db, "p1", PlaceStatus::Rejected).is_ok());
        assert_eq!(PlaceStatus::Rejected, db.places.borrow()[0].1);
        assert!(matches!(
            set_place_status(&db, "p2", PlaceStatus::Rejected),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
