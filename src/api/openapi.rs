//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{asignaciones, clientes, dashboard, equipos, estados, health, usuarios};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FrioTrack API",
        version = "1.0.0",
        description = "Refrigeration equipment assignment registry REST API"
    ),
    paths(
        // Health
        health::ping,
        // Clientes
        clientes::list_clientes,
        clientes::buscar_clientes,
        clientes::create_cliente,
        clientes::set_cliente_activo,
        // Equipos
        equipos::list_equipos,
        equipos::buscar_equipos,
        equipos::create_equipo,
        equipos::list_marcas,
        equipos::list_modelos,
        equipos::list_logos,
        // Usuarios
        usuarios::list_usuarios,
        usuarios::create_usuario,
        usuarios::login,
        usuarios::clientes_de_usuario,
        usuarios::vincular_cliente,
        // Asignaciones
        asignaciones::list_asignaciones,
        asignaciones::create_asignacion,
        asignaciones::retirar_asignacion,
        // Estados
        estados::list_estados,
        estados::create_estado,
        // Dashboard
        dashboard::dashboard,
    ),
    components(
        schemas(
            // Clientes
            crate::models::cliente::Cliente,
            crate::models::cliente::CreateCliente,
            crate::models::cliente::SetActivo,
            crate::models::cliente::ClientesPage,
            clientes::ClientesResponse,
            clientes::ClienteResponse,
            // Equipos
            crate::models::equipo::Equipo,
            crate::models::equipo::EquipoDetalle,
            crate::models::equipo::CreateEquipo,
            crate::models::referencia::Marca,
            crate::models::referencia::Modelo,
            crate::models::referencia::Logo,
            equipos::EquipoResponse,
            equipos::BusquedaEquipos,
            // Usuarios
            crate::models::usuario::Rol,
            crate::models::usuario::UsuarioPublico,
            crate::models::usuario::PerfilUsuario,
            crate::models::usuario::CreateUsuario,
            crate::models::usuario::LoginRequest,
            crate::models::usuario::UsuarioCliente,
            crate::models::usuario::CreateUsuarioCliente,
            usuarios::LoginResponse,
            usuarios::UsuarioResponse,
            usuarios::VinculoResponse,
            // Asignaciones
            crate::models::asignacion::Asignacion,
            crate::models::asignacion::AsignacionDetalle,
            crate::models::asignacion::CreateAsignacion,
            asignaciones::AsignacionCreada,
            asignaciones::AsignacionRetirada,
            // Estados
            crate::models::estado::EstadoEquipo,
            crate::models::estado::EstadoDetalle,
            crate::models::estado::CreateEstado,
            crate::models::estado::EstadoCenso,
            estados::EstadoCreado,
            // Dashboard
            dashboard::DashboardResponse,
            dashboard::ClientesStats,
            dashboard::RefrigeradoresStats,
            dashboard::UsuariosStats,
            // Health
            health::PingResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "clientes", description = "Client management"),
        (name = "equipos", description = "Equipment and reference catalogues"),
        (name = "usuarios", description = "Users, authentication and portfolios"),
        (name = "asignaciones", description = "Equipment assignments"),
        (name = "estados", description = "Field status records"),
        (name = "dashboard", description = "Aggregate counters")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
