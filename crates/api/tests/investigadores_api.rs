//! HTTP-level integration tests for the `/api/researchers` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{
    auth_token, body_json, delete, delete_auth, get, post_json, post_json_auth, put_json_auth,
};
use sqlx::PgPool;

async fn create_researcher(pool: PgPool, body: serde_json::Value) -> serde_json::Value {
    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/api/researchers", body, &auth_token()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_researcher_returns_201_with_associations(pool: PgPool) {
    let json = create_researcher(
        pool,
        serde_json::json!({
            "nombre_completo": "Ana Gomez",
            "correo": "ana.gomez@unicol.edu.co",
            "id_estamento": "DOC",
            "id_facultad": "ING",
            "modulos": ["INN", "APO"],
        }),
    )
    .await;

    assert_eq!(json["success"], true);
    assert!(json["data"]["id"].is_number());
    assert_eq!(json["data"]["nombre_completo"], "Ana Gomez");
    assert_eq!(json["data"]["estamento"]["nombre_estamento"], "Docente");
    assert_eq!(json["data"]["facultad"]["id_facultad"], "ING");
    assert_eq!(json["data"]["modulos"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["grupos"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["proyectos"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_without_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "nombre_completo": "Ana Gomez",
        "id_estamento": "DOC",
        "id_facultad": "ING",
    });
    let response = post_json(app, "/api/researchers", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);

    // No row was written.
    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/researchers").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_unknown_codes_returns_422_and_writes_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "nombre_completo": "Bad Codes",
        "id_estamento": "XXX",
        "id_facultad": "ING",
        "modulos": ["INN", "NOPE"],
    });
    let response = post_json_auth(app, "/api/researchers", body, &auth_token()).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["errors"]["id_estamento"][0]
        .as_str()
        .unwrap()
        .contains("XXX"));
    assert!(json["errors"]["modulos"][0].as_str().unwrap().contains("NOPE"));
    assert!(json["errors"]["id_facultad"].is_null());

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/researchers").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_blank_name_and_bad_email_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "nombre_completo": "   ",
        "correo": "not-an-email",
        "id_estamento": "DOC",
        "id_facultad": "ING",
    });
    let response = post_json_auth(app, "/api/researchers", body, &auth_token()).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json["errors"]["nombre_completo"].is_array());
    assert!(json["errors"]["correo"].is_array());
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_researcher_by_id(pool: PgPool) {
    let created = create_researcher(
        pool.clone(),
        serde_json::json!({
            "nombre_completo": "Luis Rojas",
            "id_estamento": "EST",
            "id_facultad": "CSB",
        }),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/researchers/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["nombre_completo"], "Luis Rojas");
    assert_eq!(json["data"]["estamento"]["id_estamento"], "EST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_researcher_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/researchers/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn group_module_view_lists_one_row_per_pair(pool: PgPool) {
    create_researcher(
        pool.clone(),
        serde_json::json!({
            "nombre_completo": "Ana Gomez",
            "id_estamento": "DOC",
            "id_facultad": "ING",
            "modulos": ["INN", "APO"],
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/researchers/group-module-view").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert_eq!(row["investigador"], "Ana Gomez");
        assert_eq!(row["estamento"], "Docente");
        assert!(row["grupo_investigacion"].is_null());
        assert!(row["modulo"].is_string());
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn partial_update_preserves_unmentioned_fields_and_modules(pool: PgPool) {
    let created = create_researcher(
        pool.clone(),
        serde_json::json!({
            "nombre_completo": "Ana Gomez",
            "correo": "ana@unicol.edu.co",
            "id_estamento": "DOC",
            "id_facultad": "ING",
            "modulos": ["INN"],
        }),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/researchers/{id}"),
        serde_json::json!({ "telefono": "3001234567" }),
        &auth_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["telefono"], "3001234567");
    assert_eq!(json["data"]["nombre_completo"], "Ana Gomez");
    assert_eq!(json["data"]["correo"], "ana@unicol.edu.co");
    let modulos = json["data"]["modulos"].as_array().unwrap();
    assert_eq!(modulos.len(), 1);
    assert_eq!(modulos[0]["id_modulo"], "INN");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_with_modules_replaces_the_set(pool: PgPool) {
    let created = create_researcher(
        pool.clone(),
        serde_json::json!({
            "nombre_completo": "Ana Gomez",
            "id_estamento": "DOC",
            "id_facultad": "ING",
            "modulos": ["INN", "APO"],
        }),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/researchers/{id}"),
        serde_json::json!({ "modulos": ["FOR"] }),
        &auth_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let modulos = json["data"]["modulos"].as_array().unwrap();
    assert_eq!(modulos.len(), 1);
    assert_eq!(modulos[0]["id_modulo"], "FOR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_nonexistent_researcher_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/researchers/999999",
        serde_json::json!({ "telefono": "123" }),
        &auth_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_researcher_removes_it(pool: PgPool) {
    let created = create_researcher(
        pool.clone(),
        serde_json::json!({
            "nombre_completo": "Temporal",
            "id_estamento": "DOC",
            "id_facultad": "ING",
        }),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/researchers/{id}"), &auth_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/researchers/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_without_token_returns_401(pool: PgPool) {
    let created = create_researcher(
        pool.clone(),
        serde_json::json!({
            "nombre_completo": "Protegida",
            "id_estamento": "DOC",
            "id_facultad": "ING",
        }),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/researchers/{id}")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/researchers/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}
