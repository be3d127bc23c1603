//! Assignment endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        asignacion::{Asignacion, AsignacionDetalle, CreateAsignacion},
        estado::EstadoEquipo,
    },
};

#[derive(Serialize, ToSchema)]
pub struct AsignacionCreada {
    pub success: bool,
    pub message: String,
    pub asignacion: Asignacion,
    /// Seed status record created together with the assignment
    pub estado: EstadoEquipo,
}

#[derive(Serialize, ToSchema)]
pub struct AsignacionRetirada {
    pub success: bool,
    pub message: String,
    pub asignacion: Asignacion,
}

/// List active assignments
#[utoipa::path(
    get,
    path = "/asignaciones",
    tag = "asignaciones",
    responses(
        (status = 200, description = "Active assignments", body = Vec<AsignacionDetalle>)
    )
)]
pub async fn list_asignaciones(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<AsignacionDetalle>>> {
    let asignaciones = state.services.asignaciones.list().await?;
    Ok(Json(asignaciones))
}

/// Assign equipment to a client
#[utoipa::path(
    post,
    path = "/asignaciones",
    tag = "asignaciones",
    request_body = CreateAsignacion,
    responses(
        (status = 201, description = "Assignment created", body = AsignacionCreada),
        (status = 400, description = "Missing or unknown IDs, or equipment already assigned")
    )
)]
pub async fn create_asignacion(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateAsignacion>,
) -> AppResult<(StatusCode, Json<AsignacionCreada>)> {
    let (asignacion, estado) = state.services.asignaciones.create(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(AsignacionCreada {
            success: true,
            message: "Asignación creada correctamente".to_string(),
            asignacion,
            estado,
        }),
    ))
}

/// Retire an assignment, freeing the equipment
#[utoipa::path(
    post,
    path = "/asignaciones/{id}/retirar",
    tag = "asignaciones",
    params(("id" = i32, Path, description = "Assignment ID")),
    responses(
        (status = 200, description = "Assignment retired", body = AsignacionRetirada),
        (status = 400, description = "Already retired"),
        (status = 404, description = "Assignment not found")
    )
)]
pub async fn retirar_asignacion(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AsignacionRetirada>> {
    let asignacion = state.services.asignaciones.retirar(id).await?;
    Ok(Json(AsignacionRetirada {
        success: true,
        message: "Asignación retirada correctamente".to_string(),
        asignacion,
    }))
}
