//! Assignment (equipment ↔ client link) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Assignment lifecycle: active until retired. A retired row is terminal;
/// re-assigning the equipment creates a new row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Asignacion {
    pub id: i32,
    pub equipo_id: i32,
    pub cliente_id: i32,
    /// User who registered the assignment, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usuario_id: Option<i32>,
    pub fecha_asignacion: DateTime<Utc>,
    pub fecha_retiro: Option<DateTime<Utc>>,
    pub activo: bool,
    /// Status label: "activa" or "retirada"
    pub estado: String,
}

/// Create assignment request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAsignacion {
    pub equipo_id: Option<i32>,
    pub cliente_id: Option<i32>,
    pub usuario_id: Option<i32>,
}

/// Active assignment enriched with equipment, client and latest status
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AsignacionDetalle {
    pub id: i32,
    /// Equipment label, "marca modelo"
    pub refrigerador: String,
    pub cliente: String,
    pub equipo_id: i32,
    pub cliente_id: i32,
    pub fecha_asignacion: DateTime<Utc>,
    pub estado_actual: String,
    pub funcionando: Option<bool>,
    pub temperatura_actual: Option<f64>,
}
