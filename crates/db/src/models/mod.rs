//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates
//!
//! Field names are the Spanish wire names: they double as the JSON contract
//! and the database column names.

pub mod catalogo;
pub mod estadisticas;
pub mod investigador;
pub mod proyecto;
pub mod usuario;
