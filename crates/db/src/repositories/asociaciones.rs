//! Join-table write primitives for the three many-to-many relations.
//!
//! Two distinct write modes exist and must not be collapsed:
//!
//! - **sync** (replace-set): the stored set becomes exactly the submitted
//!   set -- links not in the new set are removed, missing ones are added,
//!   unchanged ones are left alone.
//! - **attach** (additive): only adds links, never removes. Used on the
//!   create path for groups and project researchers.
//!
//! All functions take `&mut PgConnection` so they run inside the caller's
//! transaction: the owning-row write and the join-table writes commit or
//! roll back as one unit. Callers validate referenced codes/ids before
//! starting the transaction; the FK constraints are only a backstop.

use ceiba_core::types::DbId;
use sqlx::PgConnection;

/// Replace a researcher's module set with exactly `modulos`.
pub async fn sync_modulos(
    conn: &mut PgConnection,
    id_investigador: DbId,
    modulos: &[String],
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "DELETE FROM investigador_modulo
         WHERE id_investigador = $1 AND NOT (id_modulo = ANY($2))",
    )
    .bind(id_investigador)
    .bind(modulos)
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        "INSERT INTO investigador_modulo (id_investigador, id_modulo)
         SELECT $1, m FROM unnest($2::text[]) AS m
         ON CONFLICT DO NOTHING",
    )
    .bind(id_investigador)
    .bind(modulos)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Add group links for a researcher without touching existing ones.
pub async fn attach_grupos(
    conn: &mut PgConnection,
    id_investigador: DbId,
    grupos: &[String],
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO investigador_grupo (id_investigador, id_grupo)
         SELECT $1, g FROM unnest($2::text[]) AS g
         ON CONFLICT DO NOTHING",
    )
    .bind(id_investigador)
    .bind(grupos)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Replace a researcher's group set with exactly `grupos`.
pub async fn sync_grupos(
    conn: &mut PgConnection,
    id_investigador: DbId,
    grupos: &[String],
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "DELETE FROM investigador_grupo
         WHERE id_investigador = $1 AND NOT (id_grupo = ANY($2))",
    )
    .bind(id_investigador)
    .bind(grupos)
    .execute(&mut *conn)
    .await?;

    attach_grupos(conn, id_investigador, grupos).await
}

/// Add researcher links for a project without touching existing ones.
pub async fn attach_investigadores(
    conn: &mut PgConnection,
    id_proyecto: DbId,
    investigadores: &[DbId],
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO investigador_proyecto (id_investigador, id_proyecto)
         SELECT i, $1 FROM unnest($2::bigint[]) AS i
         ON CONFLICT DO NOTHING",
    )
    .bind(id_proyecto)
    .bind(investigadores)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Replace a project's researcher set with exactly `investigadores`.
pub async fn sync_investigadores(
    conn: &mut PgConnection,
    id_proyecto: DbId,
    investigadores: &[DbId],
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "DELETE FROM investigador_proyecto
         WHERE id_proyecto = $1 AND NOT (id_investigador = ANY($2))",
    )
    .bind(id_proyecto)
    .bind(investigadores)
    .execute(&mut *conn)
    .await?;

    attach_investigadores(conn, id_proyecto, investigadores).await
}

/// Remove every join row referencing a researcher (modules, groups,
/// projects). Must run before deleting the researcher row itself.
pub async fn detach_investigador(
    conn: &mut PgConnection,
    id_investigador: DbId,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM investigador_modulo WHERE id_investigador = $1")
        .bind(id_investigador)
        .execute(&mut *conn)
        .await?;
    sqlx::query("DELETE FROM investigador_grupo WHERE id_investigador = $1")
        .bind(id_investigador)
        .execute(&mut *conn)
        .await?;
    sqlx::query("DELETE FROM investigador_proyecto WHERE id_investigador = $1")
        .bind(id_investigador)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// Remove every researcher link for a project. Must run before deleting
/// the project row itself.
pub async fn detach_proyecto(
    conn: &mut PgConnection,
    id_proyecto: DbId,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM investigador_proyecto WHERE id_proyecto = $1")
        .bind(id_proyecto)
        .execute(&mut *conn)
        .await?;
    Ok(())
}
