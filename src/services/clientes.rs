//! Client management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::cliente::{Cliente, ClienteQuery, ClientesPage, CreateCliente},
    store::Store,
};

const LIMITE_DEFECTO: usize = 50;

#[derive(Clone)]
pub struct ClientesService {
    store: Store,
}

impl ClientesService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Full client listing, insertion order
    pub async fn list(&self) -> AppResult<Vec<Cliente>> {
        self.store.clientes_list()
    }

    /// Filtered + paged client listing
    pub async fn page(&self, query: &ClienteQuery) -> AppResult<ClientesPage> {
        let filtrados = self.store.clientes_filtered(query.q.as_deref())?;
        let total = filtrados.len();
        let page = query.page.unwrap_or(1).max(1);
        let limit = query.limit.unwrap_or(LIMITE_DEFECTO).max(1);
        // page is caller-supplied; the offset must not overflow
        let clientes = filtrados
            .into_iter()
            .skip((page - 1).saturating_mul(limit))
            .take(limit)
            .collect();
        Ok(ClientesPage {
            total,
            page,
            limit,
            clientes,
        })
    }

    /// Register a client: normalize (trim, lowercase email) and insert
    pub async fn register(&self, mut data: CreateCliente) -> AppResult<Cliente> {
        data.nombre = data.nombre.map(|s| s.trim().to_string());
        data.email = data.email.map(|s| s.trim().to_lowercase());
        data.telefono = data.telefono.map(|s| s.trim().to_string());
        data.direccion = data.direccion.map(|s| s.trim().to_string());
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.store.clientes_create(&data)
    }

    /// Toggle the logical-deletion flag
    pub async fn set_activo(&self, id: i32, activo: bool) -> AppResult<Cliente> {
        self.store.clientes_set_activo(id, activo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with_clients(n: usize) -> ClientesService {
        let store = Store::new();
        for i in 1..=n {
            store
                .clientes_create(&CreateCliente {
                    nombre: Some(format!("Cliente {}", i)),
                    email: Some(format!("cliente{}@test.com", i)),
                    telefono: None,
                    direccion: None,
                    ruc: None,
                })
                .unwrap();
        }
        ClientesService::new(store)
    }

    #[tokio::test]
    async fn page_slices_the_filtered_listing() {
        let service = service_with_clients(5);
        let pagina = service
            .page(&ClienteQuery {
                q: None,
                page: Some(2),
                limit: Some(2),
            })
            .await
            .unwrap();
        assert_eq!(pagina.total, 5);
        assert_eq!(pagina.page, 2);
        assert_eq!(pagina.limit, 2);
        assert_eq!(
            pagina.clientes.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![3, 4]
        );
    }

    #[tokio::test]
    async fn page_far_past_the_end_is_empty() {
        let service = service_with_clients(3);
        let pagina = service
            .page(&ClienteQuery {
                q: None,
                page: Some(usize::MAX),
                limit: Some(50),
            })
            .await
            .unwrap();
        assert_eq!(pagina.total, 3);
        assert!(pagina.clientes.is_empty());
    }

    #[tokio::test]
    async fn page_defaults_and_clamps() {
        let service = service_with_clients(3);
        let pagina = service
            .page(&ClienteQuery {
                q: None,
                page: Some(0),
                limit: None,
            })
            .await
            .unwrap();
        assert_eq!(pagina.page, 1);
        assert_eq!(pagina.limit, LIMITE_DEFECTO);
        assert_eq!(pagina.clientes.len(), 3);
    }

    #[tokio::test]
    async fn register_normalizes_and_validates_email() {
        let service = service_with_clients(0);
        let cliente = service
            .register(CreateCliente {
                nombre: Some("  Juan  ".to_string()),
                email: Some(" JUAN@Test.com ".to_string()),
                telefono: None,
                direccion: None,
                ruc: None,
            })
            .await
            .unwrap();
        assert_eq!(cliente.nombre, "Juan");
        assert_eq!(cliente.email, "juan@test.com");

        let invalido = service
            .register(CreateCliente {
                nombre: Some("Mal".to_string()),
                email: Some("no-es-email".to_string()),
                telefono: None,
                direccion: None,
                ruc: None,
            })
            .await;
        assert!(matches!(invalido, Err(AppError::Validation(_))));
    }
}
