//! Reference tables: brands, models and branding logos
//!
//! Seeded at startup and read-only afterwards. Equipment rows keep the
//! display strings and link the matching reference ids when one exists.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Equipment brand
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Marca {
    pub id: i32,
    pub nombre: String,
}

/// Equipment model, linked to its brand
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Modelo {
    pub id: i32,
    pub nombre: String,
    pub marca_id: Option<i32>,
}

/// Branding logo displayed on an equipment unit
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Logo {
    pub id: i32,
    pub nombre: String,
}
