//! Handler for `POST /login`.

use axum::extract::State;
use axum::Json;
use ceiba_core::error::CoreError;
use ceiba_core::types::DbId;
use ceiba_db::repositories::UsuarioRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub correo: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Serialize)]
pub struct LoginData {
    pub token: String,
    pub usuario: UsuarioInfo,
}

/// Public user info embedded in [`LoginData`]. Never includes the hash.
#[derive(Debug, Serialize)]
pub struct UsuarioInfo {
    pub id: DbId,
    pub nombre: String,
    pub correo: String,
}

/// POST /api/login
///
/// Authenticate with email + password; returns a bearer token. Failures
/// deliberately share one generic message and never expose internals.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginData>>> {
    let invalid =
        || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let usuario = UsuarioRepo::find_by_correo(&state.pool, &input.correo)
        .await?
        .ok_or_else(invalid)?;

    let verified = verify_password(&input.password, &usuario.password_hash).map_err(|e| {
        AppError::Core(CoreError::Internal(format!(
            "Stored password hash is malformed: {e}"
        )))
    })?;
    if !verified {
        return Err(invalid());
    }

    let token = generate_token(usuario.id, &usuario.correo, &state.config.jwt)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("Token generation failed: {e}"))))?;

    Ok(Json(ApiResponse::ok(LoginData {
        token,
        usuario: UsuarioInfo {
            id: usuario.id,
            nombre: usuario.nombre,
            correo: usuario.correo,
        },
    })))
}
