//! Read-only aggregation result rows for the statistics endpoints.

use serde::Serialize;
use sqlx::FromRow;

/// Independent scalar counts for the dashboard header.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Totales {
    pub total_investigadores: i64,
    pub total_proyectos: i64,
    pub total_modulos: i64,
    pub total_facultades: i64,
    pub total_estamentos: i64,
    pub total_tipos_proyecto: i64,
}

/// One `(category name, count)` row of a grouped breakdown.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ConteoCategoria {
    pub nombre: String,
    pub total: i64,
}

/// One `(start year, count)` row of the projects-by-year breakdown.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ConteoAnio {
    pub anio: i32,
    pub total: i64,
}
