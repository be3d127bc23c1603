//! Domain models for the equipment assignment registry

pub mod asignacion;
pub mod cliente;
pub mod equipo;
pub mod estado;
pub mod referencia;
pub mod usuario;
