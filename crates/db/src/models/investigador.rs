//! Researcher entity model and DTOs.

use ceiba_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::catalogo::{Estamento, Facultad, GrupoInvestigacion, Modulo};
use crate::models::proyecto::Proyecto;

/// A researcher row from the `investigador` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Investigador {
    pub id: DbId,
    pub nombre_completo: String,
    pub correo: Option<String>,
    pub telefono: Option<String>,
    pub observaciones: Option<String>,
    pub id_estamento: String,
    pub id_facultad: String,
}

/// DTO for creating a researcher, including initial associations.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvestigador {
    pub nombre_completo: String,
    pub correo: Option<String>,
    pub telefono: Option<String>,
    pub observaciones: Option<String>,
    pub id_estamento: String,
    pub id_facultad: String,
    /// Module codes to link. Replace-set semantics.
    #[serde(default)]
    pub modulos: Vec<String>,
    /// Group codes to link. Additive semantics on the create path.
    #[serde(default)]
    pub grupos: Vec<String>,
}

/// DTO for updating a researcher. Only supplied fields overwrite existing
/// values; omitted `modulos`/`grupos` leave the stored sets untouched,
/// supplied ones fully replace them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInvestigador {
    pub nombre_completo: Option<String>,
    pub correo: Option<String>,
    pub telefono: Option<String>,
    pub observaciones: Option<String>,
    pub id_estamento: Option<String>,
    pub id_facultad: Option<String>,
    pub modulos: Option<Vec<String>>,
    pub grupos: Option<Vec<String>>,
}

/// A researcher hydrated with every directly related entity, as returned
/// by list and detail endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct InvestigadorDetalle {
    #[serde(flatten)]
    pub investigador: Investigador,
    pub estamento: Estamento,
    pub facultad: Facultad,
    pub modulos: Vec<Modulo>,
    pub grupos: Vec<GrupoInvestigacion>,
    pub proyectos: Vec<Proyecto>,
}

/// One row of the flattened (researcher × group × module) projection.
///
/// Produced by left joins, so a researcher with no group or module still
/// appears once with the corresponding field null.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GrupoModuloRow {
    pub investigador: String,
    pub estamento: String,
    pub grupo_investigacion: Option<String>,
    pub modulo: Option<String>,
}
