pub mod catalogos;
pub mod estadisticas;
pub mod health;
pub mod investigadores;
pub mod proyectos;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /login                               login (public)
///
/// /researchers                         list, create
/// /researchers/group-module-view       flattened projection
/// /researchers/{id}                    get, update, delete
///
/// /projects                            list, create
/// /projects/by-module/{id_modulo}      projects with a researcher in module
/// /projects/{id}                       get, update, delete
///
/// /faculties, /roles, /modules,
/// /groups, /project-types, /statuses   catalog listings
///
/// /stats/...                           aggregation reads
/// ```
///
/// Reads are public; POST/PUT/DELETE require a Bearer token (enforced by
/// the `AuthUser` extractor on the handlers).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .nest("/researchers", investigadores::router())
        .nest("/projects", proyectos::router())
        .nest("/stats", estadisticas::router())
        .merge(catalogos::router())
}
