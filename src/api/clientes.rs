//! Client endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::cliente::{Cliente, ClienteQuery, ClientesPage, CreateCliente, SetActivo},
};

/// Client listing: the plain array when unpaged, the paging envelope when
/// `page` or `limit` is present
#[derive(Serialize, ToSchema)]
#[serde(untagged)]
pub enum ClientesResponse {
    Paged(ClientesPage),
    Plain(Vec<Cliente>),
}

/// Mutation response carrying the affected client
#[derive(Serialize, ToSchema)]
pub struct ClienteResponse {
    pub success: bool,
    pub message: String,
    pub cliente: Cliente,
}

/// List clients
#[utoipa::path(
    get,
    path = "/clientes",
    tag = "clientes",
    params(ClienteQuery),
    responses(
        (status = 200, description = "Client list", body = ClientesResponse)
    )
)]
pub async fn list_clientes(
    State(state): State<crate::AppState>,
    Query(query): Query<ClienteQuery>,
) -> AppResult<Json<ClientesResponse>> {
    if query.page.is_some() || query.limit.is_some() {
        let page = state.services.clientes.page(&query).await?;
        Ok(Json(ClientesResponse::Paged(page)))
    } else {
        let clientes = state.services.clientes.list().await?;
        Ok(Json(ClientesResponse::Plain(clientes)))
    }
}

/// Search clients by name, email or address
#[utoipa::path(
    get,
    path = "/clientes/buscar",
    tag = "clientes",
    params(ClienteQuery),
    responses(
        (status = 200, description = "Filtered client list with total", body = ClientesPage)
    )
)]
pub async fn buscar_clientes(
    State(state): State<crate::AppState>,
    Query(query): Query<ClienteQuery>,
) -> AppResult<Json<ClientesPage>> {
    let page = state.services.clientes.page(&query).await?;
    Ok(Json(page))
}

/// Register a new client
#[utoipa::path(
    post,
    path = "/clientes",
    tag = "clientes",
    request_body = CreateCliente,
    responses(
        (status = 201, description = "Client created", body = ClienteResponse),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn create_cliente(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateCliente>,
) -> AppResult<(StatusCode, Json<ClienteResponse>)> {
    let cliente = state.services.clientes.register(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(ClienteResponse {
            success: true,
            message: "Cliente creado correctamente".to_string(),
            cliente,
        }),
    ))
}

/// Toggle the client's active flag (logical deletion)
#[utoipa::path(
    put,
    path = "/clientes/{id}/activo",
    tag = "clientes",
    params(("id" = i32, Path, description = "Client ID")),
    request_body = SetActivo,
    responses(
        (status = 200, description = "Flag updated", body = ClienteResponse),
        (status = 404, description = "Client not found")
    )
)]
pub async fn set_cliente_activo(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<SetActivo>,
) -> AppResult<Json<ClienteResponse>> {
    let cliente = state.services.clientes.set_activo(id, data.activo).await?;
    Ok(Json(ClienteResponse {
        success: true,
        message: "Cliente actualizado correctamente".to_string(),
        cliente,
    }))
}
