use super::*;

pub fn create_place(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    revalidate: &dyn RevalidationGateway,
    account_email: Option<&EmailAddress>,
    new_place: usecases::NewPlace,
) -> Result<(Place, PlaceStatus)> {
    let (place, status) = connections.exclusive()?.transaction(|conn| {
        let submitter = account_email
            .map(|email| usecases::authorize_user_by_email(conn, email, Role::Guest))
            .transpose()?;
        usecases::create_place(conn, submitter.as_ref(), new_place).map_err(|err| {
            log::warn!("Failed to create place: {err}");
            err
        })
    })?;
    notify.notify(NotificationEvent::PlaceAdded { place: &place });
    revalidate.views_changed(&[StaleView::Map, StaleView::Dashboard, StaleView::AdminPlaces]);
    Ok((place, status))
}
