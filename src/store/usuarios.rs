//! User and sales-territory methods on Store

use chrono::Utc;

use super::{next_id, Store};
use crate::{
    error::{AppError, AppResult},
    models::{
        cliente::Cliente,
        usuario::{Rol, Usuario, UsuarioCliente},
    },
};

impl Store {
    /// List all users in insertion order
    pub fn usuarios_list(&self) -> AppResult<Vec<Usuario>> {
        Ok(self.read()?.usuarios.values().cloned().collect())
    }

    /// Get user by ID
    pub fn usuarios_get(&self, id: i32) -> AppResult<Usuario> {
        self.read()?
            .usuarios
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Usuario {} no encontrado", id)))
    }

    /// Find a user by email, case-insensitive
    pub fn usuarios_find_by_email(&self, email: &str) -> AppResult<Option<Usuario>> {
        Ok(self
            .read()?
            .usuarios
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    /// Create a user. The credential must already be hashed; email is
    /// unique across users.
    pub fn usuarios_create(
        &self,
        nombre: String,
        email: String,
        contrasena_hash: String,
        rol: Rol,
    ) -> AppResult<Usuario> {
        let mut tables = self.write()?;
        if tables
            .usuarios
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&email))
        {
            return Err(AppError::Duplicate("El email ya está registrado".to_string()));
        }

        let id = next_id(&tables.usuarios);
        let usuario = Usuario {
            id,
            nombre,
            email,
            contrasena: contrasena_hash,
            rol,
            fecha_creacion: Utc::now(),
        };
        tables.usuarios.insert(id, usuario.clone());
        Ok(usuario)
    }

    /// Clients in a vendor's territory, in link insertion order
    pub fn usuario_clientes_list(&self, usuario_id: i32) -> AppResult<Vec<Cliente>> {
        let tables = self.read()?;
        if !tables.usuarios.contains_key(&usuario_id) {
            return Err(AppError::NotFound(format!(
                "Usuario {} no encontrado",
                usuario_id
            )));
        }
        Ok(tables
            .usuario_clientes
            .values()
            .filter(|uc| uc.usuario_id == usuario_id)
            .filter_map(|uc| tables.clientes.get(&uc.cliente_id))
            .cloned()
            .collect())
    }

    /// Link a client to a vendor's territory. Both references must exist;
    /// an existing link is a duplicate.
    pub fn usuario_clientes_link(
        &self,
        usuario_id: i32,
        cliente_id: i32,
    ) -> AppResult<UsuarioCliente> {
        let mut tables = self.write()?;
        if !tables.usuarios.contains_key(&usuario_id) {
            return Err(AppError::NotFound(format!(
                "Usuario {} no encontrado",
                usuario_id
            )));
        }
        if !tables.clientes.contains_key(&cliente_id) {
            return Err(AppError::NotFound(format!(
                "Cliente {} no encontrado",
                cliente_id
            )));
        }
        if tables
            .usuario_clientes
            .values()
            .any(|uc| uc.usuario_id == usuario_id && uc.cliente_id == cliente_id)
        {
            return Err(AppError::Duplicate(
                "El cliente ya pertenece a la cartera del usuario".to_string(),
            ));
        }

        let id = next_id(&tables.usuario_clientes);
        let link = UsuarioCliente {
            id,
            usuario_id,
            cliente_id,
        };
        tables.usuario_clientes.insert(id, link.clone());
        Ok(link)
    }
}
