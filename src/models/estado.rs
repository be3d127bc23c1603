//! Status record model: point-in-time equipment condition observations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Default geolocation when the field device reports none (Asunción)
pub const LATITUD_DEFECTO: f64 = -25.2637;
pub const LONGITUD_DEFECTO: f64 = -57.5759;

/// Condition used for the seed record created alongside a new assignment
pub const ESTADO_PENDIENTE_REVISION: &str = "Asignado - Pendiente revisión";

/// Sync reconciliation state of a status record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EstadoCenso {
    /// Registered, awaiting census reconciliation
    Pendiente,
    /// Reconciled with the census
    Migrado,
}

/// Point-in-time observation of an equipment unit's condition
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EstadoEquipo {
    pub id: i32,
    pub asignacion_id: i32,
    pub equipo_id: i32,
    pub cliente_id: i32,
    pub usuario_id: i32,
    pub funcionando: bool,
    pub estado_general: String,
    pub temperatura_actual: Option<f64>,
    pub temperatura_freezer: Option<f64>,
    pub latitud: f64,
    pub longitud: f64,
    pub fecha_revision: DateTime<Utc>,
    /// True once the record reached the server
    pub sincronizado: bool,
    pub estado_censo: EstadoCenso,
}

/// Create status record request.
///
/// The record may reference the assignment directly or name the
/// equipment+client pair, which resolves through the active assignment.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEstado {
    pub asignacion_id: Option<i32>,
    pub equipo_id: Option<i32>,
    pub cliente_id: Option<i32>,
    pub usuario_id: Option<i32>,
    pub funcionando: Option<bool>,
    pub estado_general: Option<String>,
    pub temperatura_actual: Option<f64>,
    pub temperatura_freezer: Option<f64>,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
}

/// Status list filters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct EstadoQuery {
    pub asignacion_id: Option<i32>,
    pub equipo_id: Option<i32>,
    pub cliente_id: Option<i32>,
}

/// Status record enriched with equipment, client and user names
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EstadoDetalle {
    #[serde(flatten)]
    pub estado: EstadoEquipo,
    pub refrigerador_info: String,
    pub cliente_nombre: String,
    pub usuario_nombre: String,
}
