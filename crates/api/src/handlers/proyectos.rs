//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ceiba_core::error::CoreError;
use ceiba_core::types::DbId;
use ceiba_core::validation::{require_non_empty, validate_year, FieldErrors};
use ceiba_db::models::proyecto::{CreateProyecto, ProyectoDetalle, UpdateProyecto};
use ceiba_db::repositories::{CatalogoRepo, InvestigadorRepo, ProyectoRepo};
use ceiba_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<ProyectoDetalle>>>> {
    let proyectos = ProyectoRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(proyectos)))
}

/// GET /api/projects/by-module/{id_modulo}
///
/// Projects having at least one researcher in the module. An unknown or
/// empty module yields `data: []`, not an error.
pub async fn list_by_modulo(
    State(state): State<AppState>,
    Path(id_modulo): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<ProyectoDetalle>>>> {
    let proyectos = ProyectoRepo::list_by_modulo(&state.pool, &id_modulo).await?;
    Ok(Json(ApiResponse::ok(proyectos)))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<ProyectoDetalle>>> {
    let proyecto = ProyectoRepo::find_detalle(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Proyecto", id)))?;
    Ok(Json(ApiResponse::ok(proyecto)))
}

/// POST /api/projects
pub async fn create(
    _user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateProyecto>,
) -> AppResult<(StatusCode, Json<ApiResponse<ProyectoDetalle>>)> {
    validate_create(&state.pool, &input).await?;
    let proyecto = ProyectoRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(proyecto, "Project created")),
    ))
}

/// PUT /api/projects/{id}
pub async fn update(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProyecto>,
) -> AppResult<Json<ApiResponse<ProyectoDetalle>>> {
    validate_update(&state.pool, &input).await?;
    let proyecto = ProyectoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Proyecto", id)))?;
    Ok(Json(ApiResponse::with_message(proyecto, "Project updated")))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = ProyectoRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::message_only("Project deleted")))
    } else {
        Err(AppError::Core(CoreError::not_found("Proyecto", id)))
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

async fn validate_create(pool: &DbPool, input: &CreateProyecto) -> AppResult<()> {
    let mut errors = FieldErrors::new();

    require_non_empty("nombre_proyecto", &input.nombre_proyecto, &mut errors);
    validate_year("fecha_inicio", input.fecha_inicio, &mut errors);
    if let Some(fin) = input.fecha_finalizacion {
        validate_year("fecha_finalizacion", fin, &mut errors);
    }

    if !CatalogoRepo::tipo_proyecto_exists(pool, &input.id_tipo_proyecto).await? {
        errors.push(
            "id_tipo_proyecto",
            format!("project type '{}' does not exist", input.id_tipo_proyecto),
        );
    }
    if !CatalogoRepo::estado_exists(pool, &input.id_estado).await? {
        errors.push(
            "id_estado",
            format!("status '{}' does not exist", input.id_estado),
        );
    }

    check_investigadores(pool, &input.investigadores, &mut errors).await?;

    errors.into_result().map_err(AppError::from)
}

async fn validate_update(pool: &DbPool, input: &UpdateProyecto) -> AppResult<()> {
    let mut errors = FieldErrors::new();

    if let Some(nombre) = &input.nombre_proyecto {
        require_non_empty("nombre_proyecto", nombre, &mut errors);
    }
    if let Some(inicio) = input.fecha_inicio {
        validate_year("fecha_inicio", inicio, &mut errors);
    }
    if let Some(fin) = input.fecha_finalizacion {
        validate_year("fecha_finalizacion", fin, &mut errors);
    }
    if let Some(tipo) = &input.id_tipo_proyecto {
        if !CatalogoRepo::tipo_proyecto_exists(pool, tipo).await? {
            errors.push(
                "id_tipo_proyecto",
                format!("project type '{tipo}' does not exist"),
            );
        }
    }
    if let Some(estado) = &input.id_estado {
        if !CatalogoRepo::estado_exists(pool, estado).await? {
            errors.push("id_estado", format!("status '{estado}' does not exist"));
        }
    }
    if let Some(investigadores) = &input.investigadores {
        check_investigadores(pool, investigadores, &mut errors).await?;
    }

    errors.into_result().map_err(AppError::from)
}

async fn check_investigadores(
    pool: &DbPool,
    ids: &[DbId],
    errors: &mut FieldErrors,
) -> AppResult<()> {
    for missing in InvestigadorRepo::missing_ids(pool, ids).await? {
        errors.push(
            "investigadores",
            format!("researcher {missing} does not exist"),
        );
    }
    Ok(())
}
