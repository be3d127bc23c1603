//! Status record service

use crate::{
    error::AppResult,
    models::estado::{CreateEstado, EstadoDetalle, EstadoEquipo, EstadoQuery},
    store::Store,
};

#[derive(Clone)]
pub struct EstadosService {
    store: Store,
}

impl EstadosService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Enriched status listing, optionally filtered
    pub async fn list(&self, filtro: &EstadoQuery) -> AppResult<Vec<EstadoDetalle>> {
        self.store.estados_list_detalle(filtro)
    }

    /// Record a field observation against an existing assignment
    pub async fn record(&self, data: CreateEstado) -> AppResult<EstadoEquipo> {
        self.store.estados_create(&data)
    }
}
