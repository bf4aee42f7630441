//! Repository for the `usuario` table.

use sqlx::PgPool;

use crate::models::usuario::Usuario;

const COLUMNS: &str = "id, nombre, correo, password_hash";

pub struct UsuarioRepo;

impl UsuarioRepo {
    pub async fn find_by_correo(
        pool: &PgPool,
        correo: &str,
    ) -> Result<Option<Usuario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM usuario WHERE correo = $1");
        sqlx::query_as(&query).bind(correo).fetch_optional(pool).await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM usuario")
            .fetch_one(pool)
            .await
    }

    /// Insert a user with an already-computed Argon2id PHC hash.
    pub async fn create(
        pool: &PgPool,
        nombre: &str,
        correo: &str,
        password_hash: &str,
    ) -> Result<Usuario, sqlx::Error> {
        let query = format!(
            "INSERT INTO usuario (nombre, correo, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as(&query)
            .bind(nombre)
            .bind(correo)
            .bind(password_hash)
            .fetch_one(pool)
            .await
    }
}
