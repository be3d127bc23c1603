//! Authentication and user management service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        cliente::Cliente,
        usuario::{
            CreateUsuario, CreateUsuarioCliente, PerfilUsuario, UsuarioCliente, UsuarioPublico,
        },
    },
    store::Store,
};

/// Hash a credential with argon2. Every stored credential goes through
/// this, seeds included; comparison never branches on format.
pub fn hash_password(plain: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(format!("Error al procesar la contraseña: {}", e)))
}

/// Verify a credential against its stored argon2 hash
pub fn verify_password(hash: &str, plain: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("Hash de contraseña inválido: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[derive(Clone)]
pub struct UsuariosService {
    store: Store,
}

impl UsuariosService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// User listing with credentials stripped
    pub async fn list(&self) -> AppResult<Vec<UsuarioPublico>> {
        Ok(self
            .store
            .usuarios_list()?
            .iter()
            .map(|u| u.publico())
            .collect())
    }

    /// Create a user, hashing the credential
    pub async fn create(&self, data: CreateUsuario) -> AppResult<UsuarioPublico> {
        let nombre = data.nombre.as_deref().map(str::trim).unwrap_or_default();
        let email = data
            .email
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();
        if nombre.is_empty()
            || email.is_empty()
            || data.contrasena.as_deref().unwrap_or("").is_empty()
            || data.rol.is_none()
        {
            return Err(AppError::Validation(
                "Nombre, email, contraseña y rol son requeridos".to_string(),
            ));
        }
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let hash = hash_password(data.contrasena.as_deref().unwrap_or_default())?;
        let usuario = self.store.usuarios_create(
            nombre.to_string(),
            email,
            hash,
            data.rol.unwrap_or(crate::models::usuario::Rol::Invitado),
        )?;
        Ok(usuario.publico())
    }

    /// Authenticate by email and return the reduced profile. The stored
    /// credential never appears in the result.
    pub async fn authenticate(
        &self,
        email: Option<&str>,
        contrasena: Option<&str>,
    ) -> AppResult<PerfilUsuario> {
        let (email, contrasena) = match (email, contrasena) {
            (Some(e), Some(c)) if !e.trim().is_empty() && !c.is_empty() => (e, c),
            _ => {
                return Err(AppError::Validation(
                    "Email y contraseña son requeridos".to_string(),
                ))
            }
        };
        let usuario = self
            .store
            .usuarios_find_by_email(email.trim())?
            .ok_or_else(|| AppError::Authentication("Credenciales incorrectas".to_string()))?;

        if !verify_password(&usuario.contrasena, contrasena)? {
            return Err(AppError::Authentication(
                "Credenciales incorrectas".to_string(),
            ));
        }
        Ok(usuario.perfil())
    }

    /// Clients in a vendor's territory
    pub async fn clientes_de(&self, usuario_id: i32) -> AppResult<Vec<Cliente>> {
        self.store.usuario_clientes_list(usuario_id)
    }

    /// Add a client to a vendor's territory
    pub async fn vincular_cliente(
        &self,
        usuario_id: i32,
        data: CreateUsuarioCliente,
    ) -> AppResult<UsuarioCliente> {
        let cliente_id = data
            .cliente_id
            .ok_or_else(|| AppError::Validation("cliente_id es requerido".to_string()))?;
        self.store.usuario_clientes_link(usuario_id, cliente_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::usuario::Rol;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password("secreto").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password(&hash, "secreto").unwrap());
        assert!(!verify_password(&hash, "otro").unwrap());
    }

    fn service_with_user(contrasena: &str) -> UsuariosService {
        let store = Store::new();
        store
            .usuarios_create(
                "Admin".to_string(),
                "admin@test.com".to_string(),
                hash_password(contrasena).unwrap(),
                Rol::Administrador,
            )
            .unwrap();
        UsuariosService::new(store)
    }

    #[tokio::test]
    async fn authenticate_returns_profile_without_credential() {
        let service = service_with_user("admin123");
        let perfil = service
            .authenticate(Some("admin@test.com"), Some("admin123"))
            .await
            .unwrap();
        assert_eq!(perfil.email, "admin@test.com");

        let json = serde_json::to_value(&perfil).unwrap();
        assert!(json.get("contrasena").is_none());
        assert!(json.get("contraseña").is_none());
    }

    #[tokio::test]
    async fn authenticate_rejects_wrong_password_and_unknown_user() {
        let service = service_with_user("admin123");
        let mala = service
            .authenticate(Some("admin@test.com"), Some("incorrecta"))
            .await;
        assert!(matches!(mala, Err(AppError::Authentication(_))));

        let desconocido = service
            .authenticate(Some("nadie@test.com"), Some("admin123"))
            .await;
        assert!(matches!(desconocido, Err(AppError::Authentication(_))));
    }

    #[tokio::test]
    async fn authenticate_requires_both_fields() {
        let service = service_with_user("admin123");
        let result = service.authenticate(Some("admin@test.com"), None).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn create_rejects_duplicate_email() {
        let service = service_with_user("admin123");
        let result = service
            .create(CreateUsuario {
                nombre: Some("Otro".to_string()),
                email: Some("ADMIN@test.com".to_string()),
                contrasena: Some("clave123".to_string()),
                rol: Some(Rol::Operador),
            })
            .await;
        assert!(matches!(result, Err(AppError::Duplicate(_))));
    }
}
