use super::prelude::*;

/// Authorization (admin only) is enforced by the calling flow.
pub fn list_users<R: UserRepo>(repo: &R) -> Result<Vec<User>> {
    let mut users = repo.all_users()?;
    users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(users)
}
