//! Catalog (reference) entities. All are `(code, name)` pairs keyed by a
//! short immutable VARCHAR code; rows come from seed migrations.

use serde::Serialize;
use sqlx::FromRow;

/// A researcher's institutional category (e.g. faculty member, student).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Estamento {
    pub id_estamento: String,
    pub nombre_estamento: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Facultad {
    pub id_facultad: String,
    pub nombre_facultad: String,
}

/// A thematic program track a researcher can belong to.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Modulo {
    pub id_modulo: String,
    pub nombre_modulo: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GrupoInvestigacion {
    pub id_grupo: String,
    pub nombre_grupo: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TipoProyecto {
    pub id_tipo_proyecto: String,
    pub nombre_tipo_proyecto: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Estado {
    pub id_estado: String,
    pub nombre_estado: String,
}
