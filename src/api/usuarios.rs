//! User and authentication endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::usuario::{
        CreateUsuario, CreateUsuarioCliente, LoginRequest, PerfilUsuario, UsuarioCliente,
        UsuarioPublico,
    },
};

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub usuario: PerfilUsuario,
}

#[derive(Serialize, ToSchema)]
pub struct UsuarioResponse {
    pub success: bool,
    pub message: String,
    pub usuario: UsuarioPublico,
}

#[derive(Serialize, ToSchema)]
pub struct VinculoResponse {
    pub success: bool,
    pub message: String,
    pub vinculo: UsuarioCliente,
}

/// List users, credentials stripped
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "usuarios",
    responses(
        (status = 200, description = "User list", body = Vec<UsuarioPublico>)
    )
)]
pub async fn list_usuarios(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<UsuarioPublico>>> {
    let usuarios = state.services.usuarios.list().await?;
    Ok(Json(usuarios))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "usuarios",
    request_body = CreateUsuario,
    responses(
        (status = 201, description = "User created", body = UsuarioResponse),
        (status = 400, description = "Missing fields or duplicate email")
    )
)]
pub async fn create_usuario(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateUsuario>,
) -> AppResult<(StatusCode, Json<UsuarioResponse>)> {
    let usuario = state.services.usuarios.create(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(UsuarioResponse {
            success: true,
            message: "Usuario creado correctamente".to_string(),
            usuario,
        }),
    ))
}

/// Authenticate with email and password
#[utoipa::path(
    post,
    path = "/usuarios/login",
    tag = "usuarios",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(data): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let usuario = state
        .services
        .usuarios
        .authenticate(data.email.as_deref(), data.contrasena.as_deref())
        .await?;
    Ok(Json(LoginResponse {
        success: true,
        message: "Login exitoso".to_string(),
        usuario,
    }))
}

/// Clients in a user's portfolio
#[utoipa::path(
    get,
    path = "/usuarios/{id}/clientes",
    tag = "usuarios",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Portfolio clients", body = Vec<crate::models::cliente::Cliente>),
        (status = 404, description = "User not found")
    )
)]
pub async fn clientes_de_usuario(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<crate::models::cliente::Cliente>>> {
    let clientes = state.services.usuarios.clientes_de(id).await?;
    Ok(Json(clientes))
}

/// Link a client to a user's portfolio
#[utoipa::path(
    post,
    path = "/usuarios/{id}/clientes",
    tag = "usuarios",
    params(("id" = i32, Path, description = "User ID")),
    request_body = CreateUsuarioCliente,
    responses(
        (status = 201, description = "Client linked", body = VinculoResponse),
        (status = 400, description = "Client already linked"),
        (status = 404, description = "User or client not found")
    )
)]
pub async fn vincular_cliente(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<CreateUsuarioCliente>,
) -> AppResult<(StatusCode, Json<VinculoResponse>)> {
    let vinculo = state.services.usuarios.vincular_cliente(id, data).await?;
    Ok((
        StatusCode::CREATED,
        Json(VinculoResponse {
            success: true,
            message: "Cliente vinculado correctamente".to_string(),
            vinculo,
        }),
    ))
}
