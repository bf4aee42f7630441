//! Route definitions for the six catalog listings (public reads).

use axum::routing::get;
use axum::Router;

use crate::handlers::catalogos;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/faculties", get(catalogos::list_faculties))
        .route("/roles", get(catalogos::list_roles))
        .route("/modules", get(catalogos::list_modules))
        .route("/groups", get(catalogos::list_groups))
        .route("/project-types", get(catalogos::list_project_types))
        .route("/statuses", get(catalogos::list_statuses))
}
