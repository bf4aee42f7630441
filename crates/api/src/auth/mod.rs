//! Authentication: JWT tokens, password hashing, and admin bootstrap.

pub mod jwt;
pub mod password;

use ceiba_db::repositories::UsuarioRepo;
use ceiba_db::DbPool;

/// Create the initial admin user if the `usuario` table is empty and
/// `ADMIN_EMAIL` / `ADMIN_PASSWORD` are set. The hash is computed at
/// startup so no credential material lives in migrations.
pub async fn bootstrap_admin(pool: &DbPool) -> Result<(), sqlx::Error> {
    if UsuarioRepo::count(pool).await? > 0 {
        return Ok(());
    }

    let (Ok(correo), Ok(pass)) = (
        std::env::var("ADMIN_EMAIL"),
        std::env::var("ADMIN_PASSWORD"),
    ) else {
        tracing::warn!("No users exist and ADMIN_EMAIL/ADMIN_PASSWORD are unset; login disabled");
        return Ok(());
    };

    let hash = password::hash_password(&pass)
        .unwrap_or_else(|e| panic!("Failed to hash ADMIN_PASSWORD: {e}"));
    UsuarioRepo::create(pool, "Administrador", &correo, &hash).await?;
    tracing::info!(%correo, "Bootstrapped initial admin user");
    Ok(())
}
