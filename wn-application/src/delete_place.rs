use super::*;

pub fn delete_place(
    connections: &sqlite::Connections,
    revalidate: &dyn RevalidationGateway,
    account_email: &EmailAddress,
    id: &str,
) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        let account = usecases::authorize_user_by_email(conn, account_email, Role::Guest)?;
        usecases::delete_place(conn, &account, id).map_err(|err| {
            log::warn!("Failed to delete place {id}: {err}");
            err
        })
    })?;
    revalidate.views_changed(&[StaleView::Map, StaleView::Dashboard, StaleView::AdminPlaces]);
    Ok(())
}
