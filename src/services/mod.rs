//! Business logic services

pub mod asignaciones;
pub mod clientes;
pub mod dashboard;
pub mod equipos;
pub mod estados;
pub mod usuarios;

use crate::store::Store;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub clientes: clientes::ClientesService,
    pub equipos: equipos::EquiposService,
    pub usuarios: usuarios::UsuariosService,
    pub asignaciones: asignaciones::AsignacionesService,
    pub estados: estados::EstadosService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services over the given store
    pub fn new(store: Store) -> Self {
        Self {
            clientes: clientes::ClientesService::new(store.clone()),
            equipos: equipos::EquiposService::new(store.clone()),
            usuarios: usuarios::UsuariosService::new(store.clone()),
            asignaciones: asignaciones::AsignacionesService::new(store.clone()),
            estados: estados::EstadosService::new(store.clone()),
            dashboard: dashboard::DashboardService::new(store),
        }
    }
}
