//! Handlers for the six catalog listings. Read-only; catalog rows are
//! seed data and are never written through the API.

use axum::extract::State;
use axum::Json;
use ceiba_db::models::catalogo::{
    Estado, Estamento, Facultad, GrupoInvestigacion, Modulo, TipoProyecto,
};
use ceiba_db::repositories::CatalogoRepo;

use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/faculties
pub async fn list_faculties(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Facultad>>>> {
    Ok(Json(ApiResponse::ok(
        CatalogoRepo::list_facultades(&state.pool).await?,
    )))
}

/// GET /api/roles
pub async fn list_roles(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Estamento>>>> {
    Ok(Json(ApiResponse::ok(
        CatalogoRepo::list_estamentos(&state.pool).await?,
    )))
}

/// GET /api/modules
pub async fn list_modules(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Modulo>>>> {
    Ok(Json(ApiResponse::ok(
        CatalogoRepo::list_modulos(&state.pool).await?,
    )))
}

/// GET /api/groups
pub async fn list_groups(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<GrupoInvestigacion>>>> {
    Ok(Json(ApiResponse::ok(
        CatalogoRepo::list_grupos(&state.pool).await?,
    )))
}

/// GET /api/project-types
pub async fn list_project_types(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<TipoProyecto>>>> {
    Ok(Json(ApiResponse::ok(
        CatalogoRepo::list_tipos_proyecto(&state.pool).await?,
    )))
}

/// GET /api/statuses
pub async fn list_statuses(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Estado>>>> {
    Ok(Json(ApiResponse::ok(
        CatalogoRepo::list_estados(&state.pool).await?,
    )))
}
