//! Project entity model and DTOs.

use ceiba_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::catalogo::{Estado, TipoProyecto};
use crate::models::investigador::Investigador;

/// A project row from the `proyecto` table.
///
/// `fecha_inicio` / `fecha_finalizacion` hold years, not dates; a null
/// `fecha_finalizacion` means the project is ongoing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Proyecto {
    pub id: DbId,
    pub nombre_proyecto: String,
    pub fecha_inicio: i32,
    pub fecha_finalizacion: Option<i32>,
    pub enlace: Option<String>,
    pub recursos_utilizados: Option<String>,
    pub anexo: Option<String>,
    pub id_tipo_proyecto: String,
    pub id_estado: String,
}

/// DTO for creating a project, including initial researcher links.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProyecto {
    pub nombre_proyecto: String,
    pub fecha_inicio: i32,
    pub fecha_finalizacion: Option<i32>,
    pub enlace: Option<String>,
    pub recursos_utilizados: Option<String>,
    pub anexo: Option<String>,
    pub id_tipo_proyecto: String,
    pub id_estado: String,
    /// Researcher ids to link. Additive semantics on the create path.
    #[serde(default)]
    pub investigadores: Vec<DbId>,
}

/// DTO for updating a project. Only supplied fields overwrite existing
/// values; an omitted `investigadores` leaves the stored set untouched,
/// a supplied one fully replaces it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProyecto {
    pub nombre_proyecto: Option<String>,
    pub fecha_inicio: Option<i32>,
    pub fecha_finalizacion: Option<i32>,
    pub enlace: Option<String>,
    pub recursos_utilizados: Option<String>,
    pub anexo: Option<String>,
    pub id_tipo_proyecto: Option<String>,
    pub id_estado: Option<String>,
    pub investigadores: Option<Vec<DbId>>,
}

/// A project hydrated with its type, status, and linked researchers.
#[derive(Debug, Clone, Serialize)]
pub struct ProyectoDetalle {
    #[serde(flatten)]
    pub proyecto: Proyecto,
    pub tipo_proyecto: TipoProyecto,
    pub estado: Estado,
    pub investigadores: Vec<Investigador>,
}
