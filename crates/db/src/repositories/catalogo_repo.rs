//! Read access and existence checks for the six catalog tables.
//!
//! The existence checks back the explicit reference-set validation done
//! at the API boundary: a referenced code is accepted only if present in
//! the corresponding catalog, producing precise field-level messages
//! instead of deferred FK constraint errors.

use sqlx::PgPool;

use crate::models::catalogo::{
    Estado, Estamento, Facultad, GrupoInvestigacion, Modulo, TipoProyecto,
};

pub struct CatalogoRepo;

impl CatalogoRepo {
    pub async fn list_estamentos(pool: &PgPool) -> Result<Vec<Estamento>, sqlx::Error> {
        sqlx::query_as("SELECT id_estamento, nombre_estamento FROM estamento ORDER BY nombre_estamento")
            .fetch_all(pool)
            .await
    }

    pub async fn list_facultades(pool: &PgPool) -> Result<Vec<Facultad>, sqlx::Error> {
        sqlx::query_as("SELECT id_facultad, nombre_facultad FROM facultad ORDER BY nombre_facultad")
            .fetch_all(pool)
            .await
    }

    pub async fn list_modulos(pool: &PgPool) -> Result<Vec<Modulo>, sqlx::Error> {
        sqlx::query_as("SELECT id_modulo, nombre_modulo FROM modulo ORDER BY nombre_modulo")
            .fetch_all(pool)
            .await
    }

    pub async fn list_grupos(pool: &PgPool) -> Result<Vec<GrupoInvestigacion>, sqlx::Error> {
        sqlx::query_as("SELECT id_grupo, nombre_grupo FROM grupo_investigacion ORDER BY nombre_grupo")
            .fetch_all(pool)
            .await
    }

    pub async fn list_tipos_proyecto(pool: &PgPool) -> Result<Vec<TipoProyecto>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id_tipo_proyecto, nombre_tipo_proyecto FROM tipo_proyecto
             ORDER BY nombre_tipo_proyecto",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn list_estados(pool: &PgPool) -> Result<Vec<Estado>, sqlx::Error> {
        sqlx::query_as("SELECT id_estado, nombre_estado FROM estado ORDER BY nombre_estado")
            .fetch_all(pool)
            .await
    }

    pub async fn estamento_exists(pool: &PgPool, code: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM estamento WHERE id_estamento = $1)")
            .bind(code)
            .fetch_one(pool)
            .await
    }

    pub async fn facultad_exists(pool: &PgPool, code: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM facultad WHERE id_facultad = $1)")
            .bind(code)
            .fetch_one(pool)
            .await
    }

    pub async fn tipo_proyecto_exists(pool: &PgPool, code: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM tipo_proyecto WHERE id_tipo_proyecto = $1)")
            .bind(code)
            .fetch_one(pool)
            .await
    }

    pub async fn estado_exists(pool: &PgPool, code: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM estado WHERE id_estado = $1)")
            .bind(code)
            .fetch_one(pool)
            .await
    }

    /// Return the subset of `codes` that do not exist in `modulo`.
    pub async fn missing_modulos(
        pool: &PgPool,
        codes: &[String],
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT c FROM unnest($1::text[]) AS c
             WHERE NOT EXISTS (SELECT 1 FROM modulo WHERE id_modulo = c)",
        )
        .bind(codes)
        .fetch_all(pool)
        .await
    }

    /// Return the subset of `codes` that do not exist in `grupo_investigacion`.
    pub async fn missing_grupos(
        pool: &PgPool,
        codes: &[String],
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT c FROM unnest($1::text[]) AS c
             WHERE NOT EXISTS (SELECT 1 FROM grupo_investigacion WHERE id_grupo = c)",
        )
        .bind(codes)
        .fetch_all(pool)
        .await
    }
}
