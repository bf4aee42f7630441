//! Read-only grouped counts for the statistics endpoints.
//!
//! Grouping is pushed down to Postgres (GROUP BY + COUNT) instead of
//! loading rows into memory: the result sets are small catalog-cardinality
//! breakdowns, and the grouping key and join direction are what matter.

use sqlx::PgPool;

use crate::models::estadisticas::{ConteoAnio, ConteoCategoria, Totales};

pub struct EstadisticasRepo;

impl EstadisticasRepo {
    /// Independent scalar counts, one round-trip.
    pub async fn totales(pool: &PgPool) -> Result<Totales, sqlx::Error> {
        sqlx::query_as(
            "SELECT (SELECT COUNT(*) FROM investigador)   AS total_investigadores,
                    (SELECT COUNT(*) FROM proyecto)       AS total_proyectos,
                    (SELECT COUNT(*) FROM modulo)         AS total_modulos,
                    (SELECT COUNT(*) FROM facultad)       AS total_facultades,
                    (SELECT COUNT(*) FROM estamento)      AS total_estamentos,
                    (SELECT COUNT(*) FROM tipo_proyecto)  AS total_tipos_proyecto",
        )
        .fetch_one(pool)
        .await
    }

    /// Researchers grouped by estamento. Categories with no researchers
    /// are omitted (inner join).
    pub async fn investigadores_por_estamento(
        pool: &PgPool,
    ) -> Result<Vec<ConteoCategoria>, sqlx::Error> {
        sqlx::query_as(
            "SELECT e.nombre_estamento AS nombre, COUNT(*) AS total
             FROM investigador i
             JOIN estamento e ON i.id_estamento = e.id_estamento
             GROUP BY e.nombre_estamento
             ORDER BY e.nombre_estamento",
        )
        .fetch_all(pool)
        .await
    }

    /// Researchers grouped by facultad. Categories with no researchers
    /// are omitted (inner join).
    pub async fn investigadores_por_facultad(
        pool: &PgPool,
    ) -> Result<Vec<ConteoCategoria>, sqlx::Error> {
        sqlx::query_as(
            "SELECT f.nombre_facultad AS nombre, COUNT(*) AS total
             FROM investigador i
             JOIN facultad f ON i.id_facultad = f.id_facultad
             GROUP BY f.nombre_facultad
             ORDER BY f.nombre_facultad",
        )
        .fetch_all(pool)
        .await
    }

    /// Researchers grouped by module, counted per association: a researcher
    /// in two modules contributes to both counts, so these totals may sum
    /// to more than the researcher total. Every module appears, including
    /// those with zero researchers (left join).
    pub async fn investigadores_por_modulo(
        pool: &PgPool,
    ) -> Result<Vec<ConteoCategoria>, sqlx::Error> {
        sqlx::query_as(
            "SELECT m.nombre_modulo AS nombre, COUNT(im.id_investigador) AS total
             FROM modulo m
             LEFT JOIN investigador_modulo im ON m.id_modulo = im.id_modulo
             GROUP BY m.id_modulo, m.nombre_modulo
             ORDER BY m.nombre_modulo",
        )
        .fetch_all(pool)
        .await
    }

    /// Projects grouped by type. Types with no projects are omitted.
    pub async fn proyectos_por_tipo(pool: &PgPool) -> Result<Vec<ConteoCategoria>, sqlx::Error> {
        sqlx::query_as(
            "SELECT t.nombre_tipo_proyecto AS nombre, COUNT(*) AS total
             FROM proyecto p
             JOIN tipo_proyecto t ON p.id_tipo_proyecto = t.id_tipo_proyecto
             GROUP BY t.nombre_tipo_proyecto
             ORDER BY t.nombre_tipo_proyecto",
        )
        .fetch_all(pool)
        .await
    }

    /// Projects grouped by status. Statuses with no projects are omitted.
    pub async fn proyectos_por_estado(pool: &PgPool) -> Result<Vec<ConteoCategoria>, sqlx::Error> {
        sqlx::query_as(
            "SELECT s.nombre_estado AS nombre, COUNT(*) AS total
             FROM proyecto p
             JOIN estado s ON p.id_estado = s.id_estado
             GROUP BY s.nombre_estado
             ORDER BY s.nombre_estado",
        )
        .fetch_all(pool)
        .await
    }

    /// Projects grouped by start year, ascending. One row per distinct
    /// year present in the data; years with zero projects are omitted,
    /// not zero-filled.
    pub async fn proyectos_por_anio(pool: &PgPool) -> Result<Vec<ConteoAnio>, sqlx::Error> {
        sqlx::query_as(
            "SELECT fecha_inicio AS anio, COUNT(*) AS total
             FROM proyecto
             GROUP BY fecha_inicio
             ORDER BY fecha_inicio",
        )
        .fetch_all(pool)
        .await
    }

    /// Same grouping as [`Self::proyectos_por_anio`], restricted to start
    /// years in `desde..=hasta`. Bound validation happens at the handler
    /// boundary.
    pub async fn proyectos_por_rango(
        pool: &PgPool,
        desde: i32,
        hasta: i32,
    ) -> Result<Vec<ConteoAnio>, sqlx::Error> {
        sqlx::query_as(
            "SELECT fecha_inicio AS anio, COUNT(*) AS total
             FROM proyecto
             WHERE fecha_inicio BETWEEN $1 AND $2
             GROUP BY fecha_inicio
             ORDER BY fecha_inicio",
        )
        .bind(desde)
        .bind(hasta)
        .fetch_all(pool)
        .await
    }
}
