//! Handlers for the `/researchers` resource.
//!
//! Writes validate referenced catalog codes explicitly before any row is
//! touched, so a 422 response carries precise field-level messages and the
//! store is left unchanged.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ceiba_core::error::CoreError;
use ceiba_core::types::DbId;
use ceiba_core::validation::{require_non_empty, validate_email, FieldErrors};
use ceiba_db::models::investigador::{
    CreateInvestigador, GrupoModuloRow, InvestigadorDetalle, UpdateInvestigador,
};
use ceiba_db::repositories::{CatalogoRepo, InvestigadorRepo};
use ceiba_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/researchers
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<InvestigadorDetalle>>>> {
    let investigadores = InvestigadorRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(investigadores)))
}

/// GET /api/researchers/group-module-view
pub async fn grupo_modulo_view(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<GrupoModuloRow>>>> {
    let rows = InvestigadorRepo::grupo_modulo_view(&state.pool).await?;
    Ok(Json(ApiResponse::ok(rows)))
}

/// GET /api/researchers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<InvestigadorDetalle>>> {
    let investigador = InvestigadorRepo::find_detalle(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Investigador", id)))?;
    Ok(Json(ApiResponse::ok(investigador)))
}

/// POST /api/researchers
pub async fn create(
    _user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateInvestigador>,
) -> AppResult<(StatusCode, Json<ApiResponse<InvestigadorDetalle>>)> {
    validate_create(&state.pool, &input).await?;
    let investigador = InvestigadorRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(investigador, "Researcher created")),
    ))
}

/// PUT /api/researchers/{id}
pub async fn update(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInvestigador>,
) -> AppResult<Json<ApiResponse<InvestigadorDetalle>>> {
    validate_update(&state.pool, &input).await?;
    let investigador = InvestigadorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Investigador", id)))?;
    Ok(Json(ApiResponse::with_message(
        investigador,
        "Researcher updated",
    )))
}

/// DELETE /api/researchers/{id}
pub async fn delete(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = InvestigadorRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::message_only("Researcher deleted")))
    } else {
        Err(AppError::Core(CoreError::not_found("Investigador", id)))
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

async fn validate_create(pool: &DbPool, input: &CreateInvestigador) -> AppResult<()> {
    let mut errors = FieldErrors::new();

    require_non_empty("nombre_completo", &input.nombre_completo, &mut errors);
    if let Some(correo) = &input.correo {
        validate_email("correo", correo, &mut errors);
    }

    if !CatalogoRepo::estamento_exists(pool, &input.id_estamento).await? {
        errors.push(
            "id_estamento",
            format!("role '{}' does not exist", input.id_estamento),
        );
    }
    if !CatalogoRepo::facultad_exists(pool, &input.id_facultad).await? {
        errors.push(
            "id_facultad",
            format!("faculty '{}' does not exist", input.id_facultad),
        );
    }

    check_modulos(pool, &input.modulos, &mut errors).await?;
    check_grupos(pool, &input.grupos, &mut errors).await?;

    errors.into_result().map_err(AppError::from)
}

async fn validate_update(pool: &DbPool, input: &UpdateInvestigador) -> AppResult<()> {
    let mut errors = FieldErrors::new();

    if let Some(nombre) = &input.nombre_completo {
        require_non_empty("nombre_completo", nombre, &mut errors);
    }
    if let Some(correo) = &input.correo {
        validate_email("correo", correo, &mut errors);
    }
    if let Some(id_estamento) = &input.id_estamento {
        if !CatalogoRepo::estamento_exists(pool, id_estamento).await? {
            errors.push(
                "id_estamento",
                format!("role '{id_estamento}' does not exist"),
            );
        }
    }
    if let Some(id_facultad) = &input.id_facultad {
        if !CatalogoRepo::facultad_exists(pool, id_facultad).await? {
            errors.push(
                "id_facultad",
                format!("faculty '{id_facultad}' does not exist"),
            );
        }
    }
    if let Some(modulos) = &input.modulos {
        check_modulos(pool, modulos, &mut errors).await?;
    }
    if let Some(grupos) = &input.grupos {
        check_grupos(pool, grupos, &mut errors).await?;
    }

    errors.into_result().map_err(AppError::from)
}

async fn check_modulos(
    pool: &DbPool,
    modulos: &[String],
    errors: &mut FieldErrors,
) -> AppResult<()> {
    for missing in CatalogoRepo::missing_modulos(pool, modulos).await? {
        errors.push("modulos", format!("module '{missing}' does not exist"));
    }
    Ok(())
}

async fn check_grupos(pool: &DbPool, grupos: &[String], errors: &mut FieldErrors) -> AppResult<()> {
    for missing in CatalogoRepo::missing_grupos(pool, grupos).await? {
        errors.push("grupos", format!("group '{missing}' does not exist"));
    }
    Ok(())
}
