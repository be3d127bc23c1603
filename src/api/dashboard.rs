//! Dashboard endpoint

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

#[derive(Serialize, ToSchema)]
pub struct ClientesStats {
    pub total: usize,
    pub activos: usize,
}

#[derive(Serialize, ToSchema)]
pub struct RefrigeradoresStats {
    pub total: usize,
    pub asignados: usize,
    pub libres: usize,
    pub funcionando: usize,
    pub en_reparacion: usize,
}

#[derive(Serialize, ToSchema)]
pub struct UsuariosStats {
    pub total: usize,
}

#[derive(Serialize, ToSchema)]
pub struct DashboardResponse {
    pub clientes: ClientesStats,
    pub refrigeradores: RefrigeradoresStats,
    pub usuarios: UsuariosStats,
    pub timestamp: DateTime<Utc>,
}

/// Aggregate counters, recomputed per request
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "Aggregate counters", body = DashboardResponse)
    )
)]
pub async fn dashboard(
    State(state): State<crate::AppState>,
) -> AppResult<Json<DashboardResponse>> {
    let resumen = state.services.dashboard.summary().await?;
    Ok(Json(resumen))
}
