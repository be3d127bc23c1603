//! Assignment management service

use crate::{
    error::AppResult,
    models::{
        asignacion::{Asignacion, AsignacionDetalle, CreateAsignacion},
        estado::EstadoEquipo,
    },
    store::Store,
};

#[derive(Clone)]
pub struct AsignacionesService {
    store: Store,
}

impl AsignacionesService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Active assignments enriched with equipment and client labels
    pub async fn list(&self) -> AppResult<Vec<AsignacionDetalle>> {
        self.store.asignaciones_list_detalle()
    }

    /// Assign equipment to a client. The seed status record ("pending
    /// review") is created in the same atomic write.
    pub async fn create(&self, data: CreateAsignacion) -> AppResult<(Asignacion, EstadoEquipo)> {
        self.store.asignaciones_create(&data)
    }

    /// Retire an assignment; the equipment becomes assignable again
    pub async fn retirar(&self, id: i32) -> AppResult<Asignacion> {
        self.store.asignaciones_retirar(id)
    }
}
