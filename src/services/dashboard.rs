//! Dashboard aggregation service
//!
//! Pure read-side aggregation, recomputed on every request.

use chrono::Utc;

use crate::{
    api::dashboard::{ClientesStats, DashboardResponse, RefrigeradoresStats, UsuariosStats},
    error::AppResult,
    store::Store,
};

#[derive(Clone)]
pub struct DashboardService {
    store: Store,
}

impl DashboardService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn summary(&self) -> AppResult<DashboardResponse> {
        let s = self.store.dashboard_snapshot()?;
        Ok(DashboardResponse {
            clientes: ClientesStats {
                total: s.clientes_total,
                activos: s.clientes_activos,
            },
            refrigeradores: RefrigeradoresStats {
                total: s.equipos_total,
                asignados: s.equipos_asignados,
                libres: s.equipos_total - s.equipos_asignados,
                funcionando: s.equipos_funcionando,
                en_reparacion: s.equipos_en_reparacion,
            },
            usuarios: UsuariosStats {
                total: s.usuarios_total,
            },
            timestamp: Utc::now(),
        })
    }
}
