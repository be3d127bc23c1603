//! Equipment model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Refrigeration equipment unit.
///
/// `cod_barras` is globally unique, enforced at creation. `marca_id` and
/// `modelo_id` link the reference tables when the display strings match a
/// seeded row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Equipo {
    pub id: i32,
    pub cod_barras: String,
    pub marca: String,
    pub modelo: String,
    pub tipo_equipo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_serie: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marca_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modelo_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_id: Option<i32>,
    pub fecha_creacion: DateTime<Utc>,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipo {
    pub cod_barras: Option<String>,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub tipo_equipo: Option<String>,
    pub numero_serie: Option<String>,
    pub logo_id: Option<i32>,
}

/// Equipment search query
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct EquipoQuery {
    /// Case-insensitive substring over cod_barras, marca and modelo
    pub q: Option<String>,
}

/// Equipment enriched with its current assignment and latest known status
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipoDetalle {
    #[serde(flatten)]
    pub equipo: Equipo,
    /// Name of the client currently holding the unit, if assigned
    pub asignado_a: Option<String>,
    pub cliente_id: Option<i32>,
    /// Condition text of the latest status record ("Sin revisar" when none)
    pub estado_actual: String,
    pub funcionando: Option<bool>,
    pub temperatura_actual: Option<f64>,
    pub temperatura_freezer: Option<f64>,
}
