use super::*;

/// Direct admin edit of a place's status, bypassing verification records.
pub fn set_place_status(
    connections: &sqlite::Connections,
    revalidate: &dyn RevalidationGateway,
    account_email: &EmailAddress,
    id: &str,
    status: PlaceStatus,
) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::authorize_user_by_email(conn, account_email, Role::Admin)?;
        usecases::set_place_status(conn, id, status).map_err(|err| {
            log::warn!("Failed to change status of place {id}: {err}");
            err
        })
    })?;
    revalidate.views_changed(&[
        StaleView::AdminPlaces,
        StaleView::Dashboard,
        StaleView::Place(id.into()),
    ]);
    Ok(())
}
