//! Route definitions for the `/stats` resource (all public reads).

use axum::routing::get;
use axum::Router;

use crate::handlers::estadisticas;
use crate::state::AppState;

/// Routes mounted at `/stats`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/totals", get(estadisticas::totals))
        .route("/researchers-by-role", get(estadisticas::researchers_by_role))
        .route(
            "/researchers-by-faculty",
            get(estadisticas::researchers_by_faculty),
        )
        .route(
            "/researchers-by-module",
            get(estadisticas::researchers_by_module),
        )
        .route("/projects-by-type", get(estadisticas::projects_by_type))
        .route("/projects-by-status", get(estadisticas::projects_by_status))
        .route("/projects-by-year", get(estadisticas::projects_by_year))
        .route(
            "/projects-by-year-range",
            get(estadisticas::projects_by_year_range),
        )
}
