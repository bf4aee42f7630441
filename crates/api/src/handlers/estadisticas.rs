//! Handlers for the `/stats` resource. All are side-effect-free reads.

use axum::extract::{Query, State};
use axum::Json;
use ceiba_core::validation::{validate_year, FieldErrors};
use ceiba_db::models::estadisticas::{ConteoAnio, ConteoCategoria, Totales};
use ceiba_db::repositories::EstadisticasRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/stats/totals
pub async fn totals(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Totales>>> {
    let totales = EstadisticasRepo::totales(&state.pool).await?;
    Ok(Json(ApiResponse::ok(totales)))
}

/// GET /api/stats/researchers-by-role
pub async fn researchers_by_role(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<ConteoCategoria>>>> {
    let rows = EstadisticasRepo::investigadores_por_estamento(&state.pool).await?;
    Ok(Json(ApiResponse::ok(rows)))
}

/// GET /api/stats/researchers-by-faculty
pub async fn researchers_by_faculty(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<ConteoCategoria>>>> {
    let rows = EstadisticasRepo::investigadores_por_facultad(&state.pool).await?;
    Ok(Json(ApiResponse::ok(rows)))
}

/// GET /api/stats/researchers-by-module
///
/// Per-association counting: the totals may sum to more than the number
/// of researchers.
pub async fn researchers_by_module(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<ConteoCategoria>>>> {
    let rows = EstadisticasRepo::investigadores_por_modulo(&state.pool).await?;
    Ok(Json(ApiResponse::ok(rows)))
}

/// GET /api/stats/projects-by-type
pub async fn projects_by_type(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<ConteoCategoria>>>> {
    let rows = EstadisticasRepo::proyectos_por_tipo(&state.pool).await?;
    Ok(Json(ApiResponse::ok(rows)))
}

/// GET /api/stats/projects-by-status
pub async fn projects_by_status(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<ConteoCategoria>>>> {
    let rows = EstadisticasRepo::proyectos_por_estado(&state.pool).await?;
    Ok(Json(ApiResponse::ok(rows)))
}

/// GET /api/stats/projects-by-year
pub async fn projects_by_year(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<ConteoAnio>>>> {
    let rows = EstadisticasRepo::proyectos_por_anio(&state.pool).await?;
    Ok(Json(ApiResponse::ok(rows)))
}

/// Query parameters for `/stats/projects-by-year-range`.
#[derive(Debug, Deserialize)]
pub struct RangoParams {
    pub desde: Option<i32>,
    pub hasta: Option<i32>,
}

/// GET /api/stats/projects-by-year-range?desde=&hasta=
///
/// Both bounds are required and `desde` must not exceed `hasta`.
pub async fn projects_by_year_range(
    State(state): State<AppState>,
    Query(params): Query<RangoParams>,
) -> AppResult<Json<ApiResponse<Vec<ConteoAnio>>>> {
    let (desde, hasta) = validate_rango(&params)?;
    let rows = EstadisticasRepo::proyectos_por_rango(&state.pool, desde, hasta).await?;
    Ok(Json(ApiResponse::ok(rows)))
}

fn validate_rango(params: &RangoParams) -> Result<(i32, i32), AppError> {
    let mut errors = FieldErrors::new();

    match params.desde {
        Some(desde) => validate_year("desde", desde, &mut errors),
        None => errors.push("desde", "is required"),
    }
    match params.hasta {
        Some(hasta) => validate_year("hasta", hasta, &mut errors),
        None => errors.push("hasta", "is required"),
    }
    if let (Some(desde), Some(hasta)) = (params.desde, params.hasta) {
        if desde > hasta {
            errors.push("desde", "must not be greater than 'hasta'");
        }
    }

    errors.into_result()?;
    // Both bounds are present when no errors were recorded.
    Ok((params.desde.unwrap_or_default(), params.hasta.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rango_requires_both_bounds() {
        assert!(validate_rango(&RangoParams {
            desde: Some(2020),
            hasta: None
        })
        .is_err());
        assert!(validate_rango(&RangoParams {
            desde: None,
            hasta: Some(2021)
        })
        .is_err());
    }

    #[test]
    fn rango_rejects_inverted_bounds() {
        assert!(validate_rango(&RangoParams {
            desde: Some(2022),
            hasta: Some(2020)
        })
        .is_err());
    }

    #[test]
    fn rango_accepts_equal_bounds() {
        let (desde, hasta) = validate_rango(&RangoParams {
            desde: Some(2020),
            hasta: Some(2020),
        })
        .unwrap();
        assert_eq!((desde, hasta), (2020, 2020));
    }
}
