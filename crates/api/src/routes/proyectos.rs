//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::proyectos;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create (token)
/// GET    /by-module/{id_modulo}     -> list_by_modulo
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update (token)
/// DELETE /{id}                      -> delete (token)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(proyectos::list).post(proyectos::create))
        .route("/by-module/{id_modulo}", get(proyectos::list_by_modulo))
        .route(
            "/{id}",
            get(proyectos::get_by_id)
                .put(proyectos::update)
                .delete(proyectos::delete),
        )
}
