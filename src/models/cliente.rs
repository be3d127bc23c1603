//! Client model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Client record. Clients are never hard-deleted; `activo` is toggled instead.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Cliente {
    pub id: i32,
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub direccion: String,
    /// Tax identification number (RUC), when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruc: Option<String>,
    pub activo: bool,
    pub fecha_creacion: DateTime<Utc>,
}

/// Client list query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ClienteQuery {
    /// Case-insensitive substring over nombre, email and direccion
    pub q: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

/// Create client request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCliente {
    pub nombre: Option<String>,
    #[validate(email(message = "Formato de email inválido"))]
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub ruc: Option<String>,
}

/// Toggle request for the logical-deletion flag
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetActivo {
    pub activo: bool,
}

/// Paged client listing
#[derive(Debug, Serialize, ToSchema)]
pub struct ClientesPage {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub clientes: Vec<Cliente>,
}
