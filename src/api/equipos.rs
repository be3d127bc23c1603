//! Equipment endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        equipo::{CreateEquipo, Equipo, EquipoDetalle, EquipoQuery},
        referencia::{Logo, Marca, Modelo},
    },
};

#[derive(Serialize, ToSchema)]
pub struct EquipoResponse {
    pub success: bool,
    pub message: String,
    pub equipo: Equipo,
}

#[derive(Serialize, ToSchema)]
pub struct BusquedaEquipos {
    pub success: bool,
    pub equipos: Vec<Equipo>,
    pub total: usize,
}

/// List equipment with current assignment and latest status
#[utoipa::path(
    get,
    path = "/equipos",
    tag = "equipos",
    responses(
        (status = 200, description = "Equipment list", body = Vec<EquipoDetalle>)
    )
)]
pub async fn list_equipos(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<EquipoDetalle>>> {
    let equipos = state.services.equipos.list_detalle().await?;
    Ok(Json(equipos))
}

/// Search equipment by barcode, brand or model
#[utoipa::path(
    get,
    path = "/equipos/buscar",
    tag = "equipos",
    params(EquipoQuery),
    responses(
        (status = 200, description = "Matching equipment", body = BusquedaEquipos)
    )
)]
pub async fn buscar_equipos(
    State(state): State<crate::AppState>,
    Query(query): Query<EquipoQuery>,
) -> AppResult<Json<BusquedaEquipos>> {
    let equipos = state.services.equipos.search(query.q.as_deref()).await?;
    let total = equipos.len();
    Ok(Json(BusquedaEquipos {
        success: true,
        equipos,
        total,
    }))
}

/// Register a new piece of equipment
#[utoipa::path(
    post,
    path = "/equipos",
    tag = "equipos",
    request_body = CreateEquipo,
    responses(
        (status = 201, description = "Equipment created", body = EquipoResponse),
        (status = 400, description = "Missing fields or duplicate barcode")
    )
)]
pub async fn create_equipo(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateEquipo>,
) -> AppResult<(StatusCode, Json<EquipoResponse>)> {
    let equipo = state.services.equipos.register(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(EquipoResponse {
            success: true,
            message: "Equipo creado correctamente".to_string(),
            equipo,
        }),
    ))
}

/// List known brands
#[utoipa::path(
    get,
    path = "/marcas",
    tag = "equipos",
    responses(
        (status = 200, description = "Brand catalogue", body = Vec<Marca>)
    )
)]
pub async fn list_marcas(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Marca>>> {
    let marcas = state.services.equipos.marcas().await?;
    Ok(Json(marcas))
}

/// List known models
#[utoipa::path(
    get,
    path = "/modelos",
    tag = "equipos",
    responses(
        (status = 200, description = "Model catalogue", body = Vec<Modelo>)
    )
)]
pub async fn list_modelos(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Modelo>>> {
    let modelos = state.services.equipos.modelos().await?;
    Ok(Json(modelos))
}

/// List branding logos
#[utoipa::path(
    get,
    path = "/logos",
    tag = "equipos",
    responses(
        (status = 200, description = "Logo catalogue", body = Vec<Logo>)
    )
)]
pub async fn list_logos(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Logo>>> {
    let logos = state.services.equipos.logos().await?;
    Ok(Json(logos))
}
