//! HTTP-level integration tests for the `/api/stats` endpoints and the
//! catalog listings.

mod common;

use axum::http::StatusCode;
use common::{auth_token, body_json, get, post_json_auth};
use sqlx::PgPool;

async fn seed_researcher(pool: PgPool, nombre: &str, estamento: &str, modulos: &[&str]) {
    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "nombre_completo": nombre,
        "id_estamento": estamento,
        "id_facultad": "ING",
        "modulos": modulos,
    });
    let response = post_json_auth(app, "/api/researchers", body, &auth_token()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

async fn seed_project(pool: PgPool, nombre: &str, anio: i32) {
    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "nombre_proyecto": nombre,
        "fecha_inicio": anio,
        "id_tipo_proyecto": "INV",
        "id_estado": "ACT",
    });
    let response = post_json_auth(app, "/api/projects", body, &auth_token()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn totals_include_catalog_sizes(pool: PgPool) {
    seed_researcher(pool.clone(), "Ana Gomez", "DOC", &[]).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/stats/totals").await).await;

    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["total_investigadores"], 1);
    assert_eq!(json["data"]["total_proyectos"], 0);
    assert_eq!(json["data"]["total_modulos"], 4);
    assert_eq!(json["data"]["total_facultades"], 5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn researchers_by_role_groups_counts(pool: PgPool) {
    seed_researcher(pool.clone(), "Ana", "DOC", &[]).await;
    seed_researcher(pool.clone(), "Luis", "DOC", &[]).await;
    seed_researcher(pool.clone(), "Zoe", "EST", &[]).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/stats/researchers-by-role").await).await;

    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    let docentes = rows.iter().find(|r| r["nombre"] == "Docente").unwrap();
    assert_eq!(docentes["total"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn researchers_by_module_includes_empty_modules(pool: PgPool) {
    seed_researcher(pool.clone(), "Ana", "DOC", &["INN", "APO"]).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/stats/researchers-by-module").await).await;

    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    let total_for = |nombre: &str| {
        rows.iter()
            .find(|r| r["nombre"] == nombre)
            .unwrap()["total"]
            .as_i64()
            .unwrap()
    };
    assert_eq!(total_for("Innovación"), 1);
    assert_eq!(total_for("Formación Investigativa"), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn projects_by_year_is_ascending(pool: PgPool) {
    seed_project(pool.clone(), "P1", 2021).await;
    seed_project(pool.clone(), "P2", 2020).await;
    seed_project(pool.clone(), "P3", 2020).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/stats/projects-by-year").await).await;

    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["anio"], 2020);
    assert_eq!(rows[0]["total"], 2);
    assert_eq!(rows[1]["anio"], 2021);
    assert_eq!(rows[1]["total"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn year_range_filters_inclusively(pool: PgPool) {
    seed_project(pool.clone(), "P1", 2019).await;
    seed_project(pool.clone(), "P2", 2020).await;
    seed_project(pool.clone(), "P3", 2022).await;

    let app = common::build_test_app(pool);
    let json = body_json(
        get(app, "/api/stats/projects-by-year-range?desde=2020&hasta=2022").await,
    )
    .await;

    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["anio"], 2020);
    assert_eq!(rows[1]["anio"], 2022);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn year_range_requires_both_bounds(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/stats/projects-by-year-range?desde=2020").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json["errors"]["hasta"].is_array());

    let app = common::build_test_app(pool);
    let response = get(app, "/api/stats/projects-by-year-range").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn year_range_rejects_inverted_bounds(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/stats/projects-by-year-range?desde=2022&hasta=2020").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["errors"]["desde"].is_array());
}

// ---------------------------------------------------------------------------
// Catalog listings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn catalog_listings_return_seeded_rows(pool: PgPool) {
    let cases = [
        ("/api/faculties", 5, "id_facultad"),
        ("/api/roles", 4, "id_estamento"),
        ("/api/modules", 4, "id_modulo"),
        ("/api/groups", 3, "id_grupo"),
        ("/api/project-types", 4, "id_tipo_proyecto"),
        ("/api/statuses", 4, "id_estado"),
    ];

    for (uri, expected_len, key) in cases {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");

        let json = body_json(response).await;
        let rows = json["data"].as_array().unwrap();
        assert_eq!(rows.len(), expected_len, "GET {uri}");
        assert!(rows[0][key].is_string(), "GET {uri} rows carry {key}");
    }
}
