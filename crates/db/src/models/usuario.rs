//! API user model (login only).

use ceiba_core::types::DbId;
use sqlx::FromRow;

/// A user row from the `usuario` table.
///
/// Deliberately not `Serialize`: the password hash must never reach the
/// wire. Handlers expose a separate public-info struct.
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: DbId,
    pub nombre: String,
    pub correo: String,
    pub password_hash: String,
}
