//! In-memory entity store
//!
//! The store owns every collection and is the sole writer of identifiers
//! and timestamps. Tables are insertion-ordered maps keyed by id; secondary
//! indexes are maintained on write so read-side joins avoid linear scans.
//!
//! A single lock covers all tables: writers are serialized (multi-table
//! mutations such as assignment + seed status are atomic for any observer)
//! and readers never see a partially constructed record.

pub mod asignaciones;
pub mod clientes;
pub mod equipos;
pub mod estados;
pub mod referencias;
pub mod seed;
pub mod usuarios;

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::{
        asignacion::Asignacion,
        cliente::Cliente,
        equipo::Equipo,
        estado::EstadoEquipo,
        referencia::{Logo, Marca, Modelo},
        usuario::{Usuario, UsuarioCliente},
    },
};

/// All collections plus the secondary indexes derived from them
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub clientes: IndexMap<i32, Cliente>,
    pub equipos: IndexMap<i32, Equipo>,
    pub usuarios: IndexMap<i32, Usuario>,
    pub asignaciones: IndexMap<i32, Asignacion>,
    pub estados: IndexMap<i32, EstadoEquipo>,
    pub marcas: IndexMap<i32, Marca>,
    pub modelos: IndexMap<i32, Modelo>,
    pub logos: IndexMap<i32, Logo>,
    pub usuario_clientes: IndexMap<i32, UsuarioCliente>,

    /// cod_barras → equipment id (uniqueness + O(1) lookup)
    pub barcode_index: HashMap<String, i32>,
    /// equipment id → its single active assignment id
    pub asignacion_activa: HashMap<i32, i32>,
    /// equipment id → status record ids, in creation order
    pub estados_por_equipo: HashMap<i32, Vec<i32>>,
    /// assignment id → status record ids, in creation order
    pub estados_por_asignacion: HashMap<i32, Vec<i32>>,
}

impl Tables {
    /// Recompute every secondary index from the primary tables.
    /// Used after bulk seeding; incremental writes maintain them in place.
    pub(crate) fn rebuild_indexes(&mut self) {
        self.barcode_index = self
            .equipos
            .values()
            .map(|e| (e.cod_barras.clone(), e.id))
            .collect();

        self.asignacion_activa = self
            .asignaciones
            .values()
            .filter(|a| a.activo)
            .map(|a| (a.equipo_id, a.id))
            .collect();

        self.estados_por_equipo.clear();
        self.estados_por_asignacion.clear();
        for estado in self.estados.values() {
            self.estados_por_equipo
                .entry(estado.equipo_id)
                .or_default()
                .push(estado.id);
            self.estados_por_asignacion
                .entry(estado.asignacion_id)
                .or_default()
                .push(estado.id);
        }
    }
}

/// Next identifier for a collection: max existing + 1, or 1 when empty.
/// Ids are monotonically increasing and never reused (deletion is logical).
pub(crate) fn next_id<T>(map: &IndexMap<i32, T>) -> i32 {
    map.keys().max().copied().unwrap_or(0) + 1
}

/// Aggregate counts for the dashboard, computed under one read lock
#[derive(Debug, Clone, Copy)]
pub struct DashboardSnapshot {
    pub clientes_total: usize,
    pub clientes_activos: usize,
    pub equipos_total: usize,
    pub equipos_asignados: usize,
    pub equipos_funcionando: usize,
    pub equipos_en_reparacion: usize,
    pub usuarios_total: usize,
}

/// Handle to the shared entity store
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Tables>>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> AppResult<RwLockReadGuard<'_, Tables>> {
        self.inner
            .read()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))
    }

    pub(crate) fn write(&self) -> AppResult<RwLockWriteGuard<'_, Tables>> {
        self.inner
            .write()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))
    }

    /// Aggregate counts over all collections. Operational/faulty equipment
    /// counts follow the latest status record per unit; units without any
    /// record count in neither bucket.
    pub fn dashboard_snapshot(&self) -> AppResult<DashboardSnapshot> {
        let tables = self.read()?;

        let mut funcionando = 0;
        let mut en_reparacion = 0;
        for equipo in tables.equipos.values() {
            let ultimo = tables
                .estados_por_equipo
                .get(&equipo.id)
                .and_then(|ids| ids.last())
                .and_then(|id| tables.estados.get(id));
            match ultimo {
                Some(e) if e.funcionando => funcionando += 1,
                Some(_) => en_reparacion += 1,
                None => {}
            }
        }

        Ok(DashboardSnapshot {
            clientes_total: tables.clientes.len(),
            clientes_activos: tables.clientes.values().filter(|c| c.activo).count(),
            equipos_total: tables.equipos.len(),
            equipos_asignados: tables.asignacion_activa.len(),
            equipos_funcionando: funcionando,
            equipos_en_reparacion: en_reparacion,
            usuarios_total: tables.usuarios.len(),
        })
    }
}
