//! Client domain methods on Store

use chrono::Utc;

use super::{next_id, Store};
use crate::{
    error::{AppError, AppResult},
    models::cliente::{Cliente, CreateCliente},
};

impl Store {
    /// List all clients in insertion order
    pub fn clientes_list(&self) -> AppResult<Vec<Cliente>> {
        Ok(self.read()?.clientes.values().cloned().collect())
    }

    /// List clients matching an optional case-insensitive substring
    /// (nombre, email or direccion), in insertion order
    pub fn clientes_filtered(&self, q: Option<&str>) -> AppResult<Vec<Cliente>> {
        let tables = self.read()?;
        let q = q.map(|s| s.to_lowercase()).unwrap_or_default();
        Ok(tables
            .clientes
            .values()
            .filter(|c| {
                q.is_empty()
                    || c.nombre.to_lowercase().contains(&q)
                    || c.email.to_lowercase().contains(&q)
                    || c.direccion.to_lowercase().contains(&q)
            })
            .cloned()
            .collect())
    }

    /// Get client by ID
    pub fn clientes_get(&self, id: i32) -> AppResult<Cliente> {
        self.read()?
            .clientes
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Cliente {} no encontrado", id)))
    }

    /// Create a client. Requires nombre and email; the store assigns the id
    /// and creation timestamp.
    pub fn clientes_create(&self, data: &CreateCliente) -> AppResult<Cliente> {
        let (nombre, email) = match (&data.nombre, &data.email) {
            (Some(n), Some(e)) if !n.trim().is_empty() && !e.trim().is_empty() => (n, e),
            _ => {
                return Err(AppError::Validation(
                    "Nombre y email son requeridos".to_string(),
                ))
            }
        };

        let mut tables = self.write()?;
        let id = next_id(&tables.clientes);
        let cliente = Cliente {
            id,
            nombre: nombre.clone(),
            email: email.clone(),
            telefono: data.telefono.clone().unwrap_or_default(),
            direccion: data.direccion.clone().unwrap_or_default(),
            ruc: data.ruc.clone(),
            activo: true,
            fecha_creacion: Utc::now(),
        };
        tables.clientes.insert(id, cliente.clone());
        Ok(cliente)
    }

    /// Toggle the logical-deletion flag. Clients are never removed.
    pub fn clientes_set_activo(&self, id: i32, activo: bool) -> AppResult<Cliente> {
        let mut tables = self.write()?;
        let cliente = tables
            .clientes
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Cliente {} no encontrado", id)))?;
        cliente.activo = activo;
        Ok(cliente.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nuevo_cliente(nombre: &str, email: &str) -> CreateCliente {
        CreateCliente {
            nombre: Some(nombre.to_string()),
            email: Some(email.to_string()),
            telefono: None,
            direccion: None,
            ruc: None,
        }
    }

    #[test]
    fn create_assigns_sequential_ids_and_activo() {
        let store = Store::new();
        let a = store
            .clientes_create(&nuevo_cliente("Uno", "uno@test.com"))
            .unwrap();
        let b = store
            .clientes_create(&nuevo_cliente("Dos", "dos@test.com"))
            .unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert!(a.activo);
    }

    #[test]
    fn create_requires_nombre_and_email() {
        let store = Store::new();
        let result = store.clientes_create(&CreateCliente {
            nombre: Some("Solo nombre".to_string()),
            email: None,
            telefono: None,
            direccion: None,
            ruc: None,
        });
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(store.clientes_list().unwrap().is_empty());
    }

    #[test]
    fn set_activo_toggles_without_removal() {
        let store = Store::new();
        let cliente = store
            .clientes_create(&nuevo_cliente("Uno", "uno@test.com"))
            .unwrap();
        let apagado = store.clientes_set_activo(cliente.id, false).unwrap();
        assert!(!apagado.activo);
        assert_eq!(store.clientes_list().unwrap().len(), 1);
    }

    #[test]
    fn set_activo_unknown_id_is_not_found() {
        let store = Store::new();
        let result = store.clientes_set_activo(99, false);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn filtered_matches_nombre_email_and_direccion() {
        let store = Store::new();
        store
            .clientes_create(&nuevo_cliente("Juan Pérez", "juan@test.com"))
            .unwrap();
        store
            .clientes_create(&nuevo_cliente("María", "maria@test.com"))
            .unwrap();

        let por_nombre = store.clientes_filtered(Some("juan")).unwrap();
        assert_eq!(por_nombre.len(), 1);
        let por_email = store.clientes_filtered(Some("MARIA@")).unwrap();
        assert_eq!(por_email.len(), 1);
        let todos = store.clientes_filtered(None).unwrap();
        assert_eq!(todos.len(), 2);
    }
}
