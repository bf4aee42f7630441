/// Primary keys for researchers, projects, and users are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Catalog tables (estamento, facultad, modulo, grupo_investigacion,
/// tipo_proyecto, estado) are keyed by short immutable VARCHAR codes.
pub type Codigo = String;
