//! API handlers for the FrioTrack REST endpoints

pub mod asignaciones;
pub mod clientes;
pub mod dashboard;
pub mod equipos;
pub mod estados;
pub mod health;
pub mod openapi;
pub mod usuarios;

use axum::{
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    Json,
};

use crate::error::ErrorResponse;

/// Fallback for unmatched routes
pub async fn fallback(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            message: format!("Ruta no encontrada: {} {}", method, uri),
        }),
    )
}
