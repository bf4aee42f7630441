//! Route definitions for the `/researchers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::investigadores;
use crate::state::AppState;

/// Routes mounted at `/researchers`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create (token)
/// GET    /group-module-view   -> grupo_modulo_view
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update (token)
/// DELETE /{id}                -> delete (token)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(investigadores::list).post(investigadores::create),
        )
        .route(
            "/group-module-view",
            get(investigadores::grupo_modulo_view),
        )
        .route(
            "/{id}",
            get(investigadores::get_by_id)
                .put(investigadores::update)
                .delete(investigadores::delete),
        )
}
