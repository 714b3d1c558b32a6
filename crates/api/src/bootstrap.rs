//! First-run provisioning of the initial admin user.

use anyhow::Context;
use courseware_db::repositories::UserRepo;
use courseware_db::DbPool;

use crate::auth::password::hash_password;

/// Create the initial admin user when the users table is empty.
///
/// Reads `ADMIN_USERNAME` and `ADMIN_PASSWORD` from the environment. If
/// users already exist this is a no-op; if none exist and the variables
/// are unset, a warning is logged and the admin panel stays unreachable
/// until one is provisioned.
pub async fn ensure_admin_user(pool: &DbPool) -> anyhow::Result<()> {
    let existing = UserRepo::count(pool)
        .await
        .context("counting users during admin bootstrap")?;
    if existing > 0 {
        return Ok(());
    }

    let (username, password) = match (
        std::env::var("ADMIN_USERNAME"),
        std::env::var("ADMIN_PASSWORD"),
    ) {
        (Ok(u), Ok(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => {
            tracing::warn!(
                "No users exist and ADMIN_USERNAME/ADMIN_PASSWORD are not set; \
                 admin login will be unavailable"
            );
            return Ok(());
        }
    };

    let password_hash = hash_password(&password)
        .map_err(|e| anyhow::anyhow!("hashing bootstrap admin password: {e}"))?;

    let user = UserRepo::create(pool, &username, &password_hash)
        .await
        .context("creating bootstrap admin user")?;

    tracing::info!(user_id = user.id, username = %user.username, "Bootstrap admin user created");
    Ok(())
}
