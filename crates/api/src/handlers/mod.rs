pub mod auth;
pub mod catalogos;
pub mod estadisticas;
pub mod investigadores;
pub mod proyectos;
