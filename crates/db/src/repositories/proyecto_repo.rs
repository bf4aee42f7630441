//! Repository for the `proyecto` table and its researcher associations.

use std::collections::HashMap;

use ceiba_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::models::catalogo::{Estado, TipoProyecto};
use crate::models::investigador::Investigador;
use crate::models::proyecto::{CreateProyecto, Proyecto, ProyectoDetalle, UpdateProyecto};
use crate::repositories::asociaciones;

const COLUMNS: &str = "id, nombre_proyecto, fecha_inicio, fecha_finalizacion, enlace, \
                       recursos_utilizados, anexo, id_tipo_proyecto, id_estado";

/// Project row joined to its type and status names.
#[derive(Debug, FromRow)]
struct BaseRow {
    #[sqlx(flatten)]
    proyecto: Proyecto,
    nombre_tipo_proyecto: String,
    nombre_estado: String,
}

#[derive(Debug, FromRow)]
struct InvestigadorRow {
    id_proyecto: DbId,
    #[sqlx(flatten)]
    investigador: Investigador,
}

const BASE_SELECT: &str = "SELECT p.id, p.nombre_proyecto, p.fecha_inicio, p.fecha_finalizacion,
            p.enlace, p.recursos_utilizados, p.anexo, p.id_tipo_proyecto, p.id_estado,
            t.nombre_tipo_proyecto, s.nombre_estado
     FROM proyecto p
     JOIN tipo_proyecto t ON p.id_tipo_proyecto = t.id_tipo_proyecto
     JOIN estado s ON p.id_estado = s.id_estado";

/// Provides CRUD and hydration queries for projects.
pub struct ProyectoRepo;

impl ProyectoRepo {
    /// Insert a project and attach its initial researchers in one
    /// transaction. Returns the hydrated row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProyecto,
    ) -> Result<ProyectoDetalle, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO proyecto
                 (nombre_proyecto, fecha_inicio, fecha_finalizacion, enlace,
                  recursos_utilizados, anexo, id_tipo_proyecto, id_estado)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        let proyecto: Proyecto = sqlx::query_as(&query)
            .bind(&input.nombre_proyecto)
            .bind(input.fecha_inicio)
            .bind(input.fecha_finalizacion)
            .bind(&input.enlace)
            .bind(&input.recursos_utilizados)
            .bind(&input.anexo)
            .bind(&input.id_tipo_proyecto)
            .bind(&input.id_estado)
            .fetch_one(&mut *tx)
            .await?;

        asociaciones::attach_investigadores(&mut tx, proyecto.id, &input.investigadores).await?;

        tx.commit().await?;

        Self::find_detalle(pool, proyecto.id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Update a project. Only non-`None` fields are applied; a supplied
    /// `investigadores` list fully replaces the stored set. Returns `None`
    /// if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProyecto,
    ) -> Result<Option<ProyectoDetalle>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE proyecto SET
                nombre_proyecto = COALESCE($2, nombre_proyecto),
                fecha_inicio = COALESCE($3, fecha_inicio),
                fecha_finalizacion = COALESCE($4, fecha_finalizacion),
                enlace = COALESCE($5, enlace),
                recursos_utilizados = COALESCE($6, recursos_utilizados),
                anexo = COALESCE($7, anexo),
                id_tipo_proyecto = COALESCE($8, id_tipo_proyecto),
                id_estado = COALESCE($9, id_estado)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated: Option<Proyecto> = sqlx::query_as(&query)
            .bind(id)
            .bind(&input.nombre_proyecto)
            .bind(input.fecha_inicio)
            .bind(input.fecha_finalizacion)
            .bind(&input.enlace)
            .bind(&input.recursos_utilizados)
            .bind(&input.anexo)
            .bind(&input.id_tipo_proyecto)
            .bind(&input.id_estado)
            .fetch_optional(&mut *tx)
            .await?;

        if updated.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        if let Some(investigadores) = &input.investigadores {
            asociaciones::sync_investigadores(&mut tx, id, investigadores).await?;
        }

        tx.commit().await?;

        Self::find_detalle(pool, id).await
    }

    /// Delete a project, detaching its researcher links first (same
    /// transaction). Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        asociaciones::detach_proyecto(&mut tx, id).await?;
        let result = sqlx::query("DELETE FROM proyecto WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// List every project hydrated with type, status, and researchers.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProyectoDetalle>, sqlx::Error> {
        let base: Vec<BaseRow> =
            sqlx::query_as(&format!("{BASE_SELECT} ORDER BY p.nombre_proyecto"))
                .fetch_all(pool)
                .await?;
        Self::hydrate(pool, base).await
    }

    /// Find one project with the same hydration as [`Self::list`].
    pub async fn find_detalle(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProyectoDetalle>, sqlx::Error> {
        let base: Option<BaseRow> = sqlx::query_as(&format!("{BASE_SELECT} WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await?;

        let Some(row) = base else { return Ok(None) };
        let mut hydrated = Self::hydrate(pool, vec![row]).await?;
        Ok(hydrated.pop())
    }

    /// Projects having at least one researcher in the given module.
    ///
    /// Two-hop join (project → researcher → module) with DISTINCT so a
    /// project with several researchers in the module appears once. No
    /// match yields an empty list, not an error.
    pub async fn list_by_modulo(
        pool: &PgPool,
        id_modulo: &str,
    ) -> Result<Vec<ProyectoDetalle>, sqlx::Error> {
        let base: Vec<BaseRow> = sqlx::query_as(&format!(
            "{BASE_SELECT}
             WHERE p.id IN (
                 SELECT DISTINCT ip.id_proyecto
                 FROM investigador_proyecto ip
                 JOIN investigador_modulo im ON ip.id_investigador = im.id_investigador
                 WHERE im.id_modulo = $1
             )
             ORDER BY p.nombre_proyecto"
        ))
        .bind(id_modulo)
        .fetch_all(pool)
        .await?;
        Self::hydrate(pool, base).await
    }

    /// Count of researcher links for a project. Used by tests to verify
    /// detach-on-delete leaves no orphaned join rows.
    pub async fn count_investigadores(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM investigador_proyecto WHERE id_proyecto = $1")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Attach linked researchers to a set of base rows with one bulk query.
    async fn hydrate(
        pool: &PgPool,
        base: Vec<BaseRow>,
    ) -> Result<Vec<ProyectoDetalle>, sqlx::Error> {
        if base.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<DbId> = base.iter().map(|row| row.proyecto.id).collect();

        let investigador_rows: Vec<InvestigadorRow> = sqlx::query_as(
            "SELECT ip.id_proyecto,
                    i.id, i.nombre_completo, i.correo, i.telefono, i.observaciones,
                    i.id_estamento, i.id_facultad
             FROM investigador_proyecto ip
             JOIN investigador i ON ip.id_investigador = i.id
             WHERE ip.id_proyecto = ANY($1)
             ORDER BY i.nombre_completo",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let mut investigadores: HashMap<DbId, Vec<Investigador>> = HashMap::new();
        for row in investigador_rows {
            investigadores
                .entry(row.id_proyecto)
                .or_default()
                .push(row.investigador);
        }

        Ok(base
            .into_iter()
            .map(|row| {
                let id = row.proyecto.id;
                ProyectoDetalle {
                    tipo_proyecto: TipoProyecto {
                        id_tipo_proyecto: row.proyecto.id_tipo_proyecto.clone(),
                        nombre_tipo_proyecto: row.nombre_tipo_proyecto,
                    },
                    estado: Estado {
                        id_estado: row.proyecto.id_estado.clone(),
                        nombre_estado: row.nombre_estado,
                    },
                    investigadores: investigadores.remove(&id).unwrap_or_default(),
                    proyecto: row.proyecto,
                }
            })
            .collect())
    }
}
