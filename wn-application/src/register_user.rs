use super::*;

pub fn register_user(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    new_user: usecases::NewUser,
) -> Result<User> {
    let email = new_user.email.clone();
    let user = connections.exclusive()?.transaction(|conn| {
        usecases::create_new_user(conn, new_user).map_err(|err| {
            log::warn!("Failed to register user {email}: {err}");
            err
        })
    })?;
    notify.notify(NotificationEvent::UserRegistered { user: &user });
    Ok(user)
}
