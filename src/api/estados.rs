//! Equipment status endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::estado::{CreateEstado, EstadoDetalle, EstadoEquipo, EstadoQuery},
};

#[derive(Serialize, ToSchema)]
pub struct EstadoCreado {
    pub success: bool,
    pub message: String,
    pub estado: EstadoEquipo,
}

/// List status records, optionally filtered by assignment, equipment or client
#[utoipa::path(
    get,
    path = "/estados",
    tag = "estados",
    params(EstadoQuery),
    responses(
        (status = 200, description = "Status history", body = Vec<EstadoDetalle>)
    )
)]
pub async fn list_estados(
    State(state): State<crate::AppState>,
    Query(query): Query<EstadoQuery>,
) -> AppResult<Json<Vec<EstadoDetalle>>> {
    let estados = state.services.estados.list(&query).await?;
    Ok(Json(estados))
}

/// Record a field observation for an assignment
#[utoipa::path(
    post,
    path = "/estados",
    tag = "estados",
    request_body = CreateEstado,
    responses(
        (status = 201, description = "Status recorded", body = EstadoCreado),
        (status = 400, description = "Incomplete data"),
        (status = 404, description = "Assignment or user not found")
    )
)]
pub async fn create_estado(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateEstado>,
) -> AppResult<(StatusCode, Json<EstadoCreado>)> {
    let estado = state.services.estados.record(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(EstadoCreado {
            success: true,
            message: "Estado actualizado correctamente".to_string(),
            estado,
        }),
    ))
}
