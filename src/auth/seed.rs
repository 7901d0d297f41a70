use anyhow::Context;
use tracing::{debug, info};

use crate::state::AppState;

use super::{password::hash_password, repo::User};

/// One-time bootstrap: if the store holds no users and both admin
/// credentials are configured, create the admin account. Anything else is a
/// no-op so restarts never duplicate or overwrite it.
pub async fn seed_admin(state: &AppState) -> anyhow::Result<()> {
    let auth = &state.config.auth;
    let (email, password) = match (&auth.admin_email, &auth.admin_password) {
        (Some(e), Some(p)) => (e, p),
        _ => {
            debug!("admin credentials not configured; skipping seed");
            return Ok(());
        }
    };

    if User::count(&state.db).await.context("count users")? > 0 {
        debug!("users already present; skipping seed");
        return Ok(());
    }

    let hash = hash_password(password)?;
    let user = User::create(&state.db, email, &hash)
        .await
        .context("insert admin user")?;
    info!(user_id = %user.id, email = %user.email, "admin user seeded");
    Ok(())
}
