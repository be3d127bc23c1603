//! Equipment management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        equipo::{CreateEquipo, Equipo, EquipoDetalle},
        referencia::{Logo, Marca, Modelo},
    },
    store::Store,
};

#[derive(Clone)]
pub struct EquiposService {
    store: Store,
}

impl EquiposService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Equipment list enriched with assignment and latest status
    pub async fn list_detalle(&self) -> AppResult<Vec<EquipoDetalle>> {
        self.store.equipos_list_detalle()
    }

    /// Search equipment by barcode, brand or model. An empty query matches
    /// everything.
    pub async fn search(&self, q: Option<&str>) -> AppResult<Vec<Equipo>> {
        self.store.equipos_search(q.unwrap_or(""))
    }

    /// Register an equipment unit
    pub async fn register(&self, mut data: CreateEquipo) -> AppResult<Equipo> {
        data.cod_barras = data.cod_barras.map(|s| s.trim().to_string());
        data.marca = data.marca.map(|s| s.trim().to_string());
        data.modelo = data.modelo.map(|s| s.trim().to_string());
        data.tipo_equipo = data.tipo_equipo.map(|s| s.trim().to_string());
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.store.equipos_create(&data)
    }

    pub async fn marcas(&self) -> AppResult<Vec<Marca>> {
        self.store.marcas_list()
    }

    pub async fn modelos(&self) -> AppResult<Vec<Modelo>> {
        self.store.modelos_list()
    }

    pub async fn logos(&self) -> AppResult<Vec<Logo>> {
        self.store.logos_list()
    }
}
