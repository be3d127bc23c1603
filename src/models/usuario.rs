//! User model, roles and authentication types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Rol {
    Administrador,
    Supervisor,
    Tecnico,
    Vendedor,
    Operador,
    Soporte,
    Auditor,
    Invitado,
}

/// Stored user record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Usuario {
    pub id: i32,
    pub nombre: String,
    pub email: String,
    /// Argon2 hash of the credential; never serialized
    #[serde(skip_serializing)]
    pub contrasena: String,
    pub rol: Rol,
    pub fecha_creacion: DateTime<Utc>,
}

impl Usuario {
    /// Public projection with the credential stripped
    pub fn publico(&self) -> UsuarioPublico {
        UsuarioPublico {
            id: self.id,
            nombre: self.nombre.clone(),
            email: self.email.clone(),
            rol: self.rol,
            fecha_creacion: self.fecha_creacion,
        }
    }

    /// Reduced profile returned by a successful login
    pub fn perfil(&self) -> PerfilUsuario {
        PerfilUsuario {
            id: self.id,
            nombre: self.nombre.clone(),
            email: self.email.clone(),
            rol: self.rol,
        }
    }
}

/// User representation for list endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UsuarioPublico {
    pub id: i32,
    pub nombre: String,
    pub email: String,
    pub rol: Rol,
    pub fecha_creacion: DateTime<Utc>,
}

/// Reduced profile returned on authentication
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PerfilUsuario {
    pub id: i32,
    pub nombre: String,
    pub email: String,
    pub rol: Rol,
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUsuario {
    pub nombre: Option<String>,
    #[validate(email(message = "Formato de email inválido"))]
    pub email: Option<String>,
    #[serde(rename = "contraseña", alias = "contrasena", alias = "password")]
    #[validate(length(min = 4, message = "La contraseña debe tener al menos 4 caracteres"))]
    pub contrasena: Option<String>,
    pub rol: Option<Rol>,
}

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    #[serde(rename = "contraseña", alias = "contrasena", alias = "password")]
    pub contrasena: Option<String>,
}

/// Sales-territory link between a vendor user and a client
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsuarioCliente {
    pub id: i32,
    pub usuario_id: i32,
    pub cliente_id: i32,
}

/// Link a client to a vendor's territory
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUsuarioCliente {
    pub cliente_id: Option<i32>,
}
