//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Multi-statement writes (owning
//! row + join rows) run inside a single transaction; the association
//! primitives in [`asociaciones`] take `&mut PgConnection` so they always
//! participate in the caller's transaction.

pub mod asociaciones;
pub mod catalogo_repo;
pub mod estadisticas_repo;
pub mod investigador_repo;
pub mod proyecto_repo;
pub mod usuario_repo;

pub use catalogo_repo::CatalogoRepo;
pub use estadisticas_repo::EstadisticasRepo;
pub use investigador_repo::InvestigadorRepo;
pub use proyecto_repo::ProyectoRepo;
pub use usuario_repo::UsuarioRepo;
