//! Repository for the `investigador` table and its associations.

use std::collections::HashMap;

use ceiba_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::models::catalogo::{Estamento, Facultad, GrupoInvestigacion, Modulo};
use crate::models::investigador::{
    CreateInvestigador, GrupoModuloRow, Investigador, InvestigadorDetalle, UpdateInvestigador,
};
use crate::models::proyecto::Proyecto;
use crate::repositories::asociaciones;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nombre_completo, correo, telefono, observaciones, id_estamento, id_facultad";

/// Researcher row joined to its estamento and facultad names.
#[derive(Debug, FromRow)]
struct BaseRow {
    #[sqlx(flatten)]
    investigador: Investigador,
    nombre_estamento: String,
    nombre_facultad: String,
}

#[derive(Debug, FromRow)]
struct ModuloRow {
    id_investigador: DbId,
    #[sqlx(flatten)]
    modulo: Modulo,
}

#[derive(Debug, FromRow)]
struct GrupoRow {
    id_investigador: DbId,
    #[sqlx(flatten)]
    grupo: GrupoInvestigacion,
}

#[derive(Debug, FromRow)]
struct ProyectoRow {
    id_investigador: DbId,
    #[sqlx(flatten)]
    proyecto: Proyecto,
}

/// Provides CRUD and hydration queries for researchers.
pub struct InvestigadorRepo;

impl InvestigadorRepo {
    /// Insert a researcher and its initial associations in one transaction.
    ///
    /// Modules use replace-set semantics, groups additive attach. Returns
    /// the hydrated row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInvestigador,
    ) -> Result<InvestigadorDetalle, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO investigador
                 (nombre_completo, correo, telefono, observaciones, id_estamento, id_facultad)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let investigador: Investigador = sqlx::query_as(&query)
            .bind(&input.nombre_completo)
            .bind(&input.correo)
            .bind(&input.telefono)
            .bind(&input.observaciones)
            .bind(&input.id_estamento)
            .bind(&input.id_facultad)
            .fetch_one(&mut *tx)
            .await?;

        asociaciones::sync_modulos(&mut tx, investigador.id, &input.modulos).await?;
        asociaciones::attach_grupos(&mut tx, investigador.id, &input.grupos).await?;

        tx.commit().await?;

        Self::find_detalle(pool, investigador.id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Update a researcher. Only non-`None` fields are applied; a supplied
    /// `modulos`/`grupos` list fully replaces the stored set, an omitted one
    /// is left untouched. Field update and association writes share one
    /// transaction.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInvestigador,
    ) -> Result<Option<InvestigadorDetalle>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE investigador SET
                nombre_completo = COALESCE($2, nombre_completo),
                correo = COALESCE($3, correo),
                telefono = COALESCE($4, telefono),
                observaciones = COALESCE($5, observaciones),
                id_estamento = COALESCE($6, id_estamento),
                id_facultad = COALESCE($7, id_facultad)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated: Option<Investigador> = sqlx::query_as(&query)
            .bind(id)
            .bind(&input.nombre_completo)
            .bind(&input.correo)
            .bind(&input.telefono)
            .bind(&input.observaciones)
            .bind(&input.id_estamento)
            .bind(&input.id_facultad)
            .fetch_optional(&mut *tx)
            .await?;

        if updated.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        if let Some(modulos) = &input.modulos {
            asociaciones::sync_modulos(&mut tx, id, modulos).await?;
        }
        if let Some(grupos) = &input.grupos {
            asociaciones::sync_grupos(&mut tx, id, grupos).await?;
        }

        tx.commit().await?;

        Self::find_detalle(pool, id).await
    }

    /// Delete a researcher, detaching every join row first (same
    /// transaction). Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        asociaciones::detach_investigador(&mut tx, id).await?;
        let result = sqlx::query("DELETE FROM investigador WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// List every researcher hydrated with estamento, facultad, modules,
    /// groups, and projects. Three bulk relation queries regardless of row
    /// count.
    pub async fn list(pool: &PgPool) -> Result<Vec<InvestigadorDetalle>, sqlx::Error> {
        let base: Vec<BaseRow> = sqlx::query_as(
            "SELECT i.id, i.nombre_completo, i.correo, i.telefono, i.observaciones,
                    i.id_estamento, i.id_facultad,
                    e.nombre_estamento, f.nombre_facultad
             FROM investigador i
             JOIN estamento e ON i.id_estamento = e.id_estamento
             JOIN facultad f ON i.id_facultad = f.id_facultad
             ORDER BY i.nombre_completo",
        )
        .fetch_all(pool)
        .await?;

        Self::hydrate(pool, base).await
    }

    /// Find one researcher with the same hydration as [`Self::list`].
    pub async fn find_detalle(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InvestigadorDetalle>, sqlx::Error> {
        let base: Option<BaseRow> = sqlx::query_as(
            "SELECT i.id, i.nombre_completo, i.correo, i.telefono, i.observaciones,
                    i.id_estamento, i.id_facultad,
                    e.nombre_estamento, f.nombre_facultad
             FROM investigador i
             JOIN estamento e ON i.id_estamento = e.id_estamento
             JOIN facultad f ON i.id_facultad = f.id_facultad
             WHERE i.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        let Some(row) = base else { return Ok(None) };
        let mut hydrated = Self::hydrate(pool, vec![row]).await?;
        Ok(hydrated.pop())
    }

    /// Return the subset of `ids` that do not exist in `investigador`.
    pub async fn missing_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT i FROM unnest($1::bigint[]) AS i
             WHERE NOT EXISTS (SELECT 1 FROM investigador WHERE id = i)",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }

    /// Flattened (researcher × group × module) projection for the tabular
    /// view. Left joins keep researchers with no group or module, one row
    /// per combination otherwise.
    pub async fn grupo_modulo_view(pool: &PgPool) -> Result<Vec<GrupoModuloRow>, sqlx::Error> {
        sqlx::query_as(
            "SELECT i.nombre_completo AS investigador,
                    e.nombre_estamento AS estamento,
                    g.nombre_grupo AS grupo_investigacion,
                    m.nombre_modulo AS modulo
             FROM investigador i
             JOIN estamento e ON i.id_estamento = e.id_estamento
             LEFT JOIN investigador_grupo ig ON i.id = ig.id_investigador
             LEFT JOIN grupo_investigacion g ON ig.id_grupo = g.id_grupo
             LEFT JOIN investigador_modulo im ON i.id = im.id_investigador
             LEFT JOIN modulo m ON im.id_modulo = m.id_modulo
             ORDER BY i.nombre_completo, g.nombre_grupo, m.nombre_modulo",
        )
        .fetch_all(pool)
        .await
    }

    /// Attach the M:N relations to a set of base rows with one bulk query
    /// per relation.
    async fn hydrate(
        pool: &PgPool,
        base: Vec<BaseRow>,
    ) -> Result<Vec<InvestigadorDetalle>, sqlx::Error> {
        if base.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<DbId> = base.iter().map(|row| row.investigador.id).collect();

        let modulo_rows: Vec<ModuloRow> = sqlx::query_as(
            "SELECT im.id_investigador, m.id_modulo, m.nombre_modulo
             FROM investigador_modulo im
             JOIN modulo m ON im.id_modulo = m.id_modulo
             WHERE im.id_investigador = ANY($1)
             ORDER BY m.id_modulo",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let grupo_rows: Vec<GrupoRow> = sqlx::query_as(
            "SELECT ig.id_investigador, g.id_grupo, g.nombre_grupo
             FROM investigador_grupo ig
             JOIN grupo_investigacion g ON ig.id_grupo = g.id_grupo
             WHERE ig.id_investigador = ANY($1)
             ORDER BY g.id_grupo",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let proyecto_rows: Vec<ProyectoRow> = sqlx::query_as(
            "SELECT ip.id_investigador,
                    p.id, p.nombre_proyecto, p.fecha_inicio, p.fecha_finalizacion,
                    p.enlace, p.recursos_utilizados, p.anexo, p.id_tipo_proyecto, p.id_estado
             FROM investigador_proyecto ip
             JOIN proyecto p ON ip.id_proyecto = p.id
             WHERE ip.id_investigador = ANY($1)
             ORDER BY p.nombre_proyecto",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let mut modulos: HashMap<DbId, Vec<Modulo>> = HashMap::new();
        for row in modulo_rows {
            modulos.entry(row.id_investigador).or_default().push(row.modulo);
        }
        let mut grupos: HashMap<DbId, Vec<GrupoInvestigacion>> = HashMap::new();
        for row in grupo_rows {
            grupos.entry(row.id_investigador).or_default().push(row.grupo);
        }
        let mut proyectos: HashMap<DbId, Vec<Proyecto>> = HashMap::new();
        for row in proyecto_rows {
            proyectos
                .entry(row.id_investigador)
                .or_default()
                .push(row.proyecto);
        }

        Ok(base
            .into_iter()
            .map(|row| {
                let id = row.investigador.id;
                InvestigadorDetalle {
                    estamento: Estamento {
                        id_estamento: row.investigador.id_estamento.clone(),
                        nombre_estamento: row.nombre_estamento,
                    },
                    facultad: Facultad {
                        id_facultad: row.investigador.id_facultad.clone(),
                        nombre_facultad: row.nombre_facultad,
                    },
                    modulos: modulos.remove(&id).unwrap_or_default(),
                    grupos: grupos.remove(&id).unwrap_or_default(),
                    proyectos: proyectos.remove(&id).unwrap_or_default(),
                    investigador: row.investigador,
                }
            })
            .collect())
    }
}
