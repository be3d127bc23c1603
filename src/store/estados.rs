//! Status record domain methods on Store

use chrono::Utc;

use super::{next_id, Store};
use crate::{
    error::{AppError, AppResult},
    models::estado::{
        CreateEstado, EstadoCenso, EstadoDetalle, EstadoEquipo, EstadoQuery, LATITUD_DEFECTO,
        LONGITUD_DEFECTO,
    },
};

impl Store {
    /// Create a status record against an existing assignment.
    ///
    /// The caller may name the assignment directly or give the
    /// equipment+client pair, which resolves through the equipment's active
    /// assignment. Unresolvable references fail before any write. The server
    /// stamps the revision time; a record reaching the server counts as
    /// synced from the field device's perspective.
    pub fn estados_create(&self, data: &CreateEstado) -> AppResult<EstadoEquipo> {
        let (usuario_id, funcionando, estado_general) =
            match (data.usuario_id, data.funcionando, &data.estado_general) {
                (Some(u), Some(f), Some(eg)) if !eg.trim().is_empty() => (u, f, eg.clone()),
                _ => return Err(AppError::Validation("Datos incompletos".to_string())),
            };

        let mut tables = self.write()?;
        if !tables.usuarios.contains_key(&usuario_id) {
            return Err(AppError::NotFound(format!(
                "Usuario {} no encontrado",
                usuario_id
            )));
        }

        let asignacion = match data.asignacion_id {
            Some(id) => tables
                .asignaciones
                .get(&id)
                .ok_or_else(|| AppError::NotFound(format!("Asignación {} no encontrada", id)))?,
            None => {
                let equipo_id = data.equipo_id.ok_or_else(|| {
                    AppError::Validation("Datos incompletos".to_string())
                })?;
                let asignacion = tables
                    .asignacion_activa
                    .get(&equipo_id)
                    .and_then(|aid| tables.asignaciones.get(aid))
                    .ok_or_else(|| {
                        AppError::NotFound(format!(
                            "No existe asignación activa para el equipo {}",
                            equipo_id
                        ))
                    })?;
                if let Some(cliente_id) = data.cliente_id {
                    if asignacion.cliente_id != cliente_id {
                        return Err(AppError::NotFound(format!(
                            "El equipo {} no está asignado al cliente {}",
                            equipo_id, cliente_id
                        )));
                    }
                }
                asignacion
            }
        };
        let (asignacion_id, equipo_id, cliente_id) =
            (asignacion.id, asignacion.equipo_id, asignacion.cliente_id);

        let id = next_id(&tables.estados);
        let estado = EstadoEquipo {
            id,
            asignacion_id,
            equipo_id,
            cliente_id,
            usuario_id,
            funcionando,
            estado_general,
            temperatura_actual: data.temperatura_actual,
            temperatura_freezer: data.temperatura_freezer,
            latitud: data.latitud.unwrap_or(LATITUD_DEFECTO),
            longitud: data.longitud.unwrap_or(LONGITUD_DEFECTO),
            fecha_revision: Utc::now(),
            sincronizado: true,
            estado_censo: EstadoCenso::Pendiente,
        };

        tables.estados.insert(id, estado.clone());
        tables
            .estados_por_equipo
            .entry(equipo_id)
            .or_default()
            .push(id);
        tables
            .estados_por_asignacion
            .entry(asignacion_id)
            .or_default()
            .push(id);
        Ok(estado)
    }

    /// Status records for one assignment, in creation order
    pub fn estados_por_asignacion(&self, asignacion_id: i32) -> AppResult<Vec<EstadoEquipo>> {
        let tables = self.read()?;
        Ok(tables
            .estados_por_asignacion
            .get(&asignacion_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| tables.estados.get(id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Status records enriched with equipment, client and user names,
    /// optionally filtered
    pub fn estados_list_detalle(&self, filtro: &EstadoQuery) -> AppResult<Vec<EstadoDetalle>> {
        let tables = self.read()?;
        Ok(tables
            .estados
            .values()
            .filter(|e| {
                filtro.asignacion_id.map_or(true, |id| e.asignacion_id == id)
                    && filtro.equipo_id.map_or(true, |id| e.equipo_id == id)
                    && filtro.cliente_id.map_or(true, |id| e.cliente_id == id)
            })
            .map(|e| EstadoDetalle {
                estado: e.clone(),
                refrigerador_info: tables
                    .equipos
                    .get(&e.equipo_id)
                    .map(|eq| format!("{} {}", eq.marca, eq.modelo))
                    .unwrap_or_else(|| "No encontrado".to_string()),
                cliente_nombre: tables
                    .clientes
                    .get(&e.cliente_id)
                    .map(|c| c.nombre.clone())
                    .unwrap_or_else(|| "No encontrado".to_string()),
                usuario_nombre: tables
                    .usuarios
                    .get(&e.usuario_id)
                    .map(|u| u.nombre.clone())
                    .unwrap_or_else(|| "No encontrado".to_string()),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        asignacion::CreateAsignacion, cliente::CreateCliente, equipo::CreateEquipo, usuario::Rol,
    };

    /// Store with equipment, client, user and an active assignment (all id 1)
    fn store_asignado() -> Store {
        let store = Store::new();
        store
            .equipos_create(&CreateEquipo {
                cod_barras: Some("REF001".to_string()),
                marca: Some("Samsung".to_string()),
                modelo: Some("RT38".to_string()),
                tipo_equipo: Some("Refrigerador".to_string()),
                numero_serie: None,
                logo_id: None,
            })
            .unwrap();
        store
            .clientes_create(&CreateCliente {
                nombre: Some("Juan".to_string()),
                email: Some("juan@test.com".to_string()),
                telefono: None,
                direccion: None,
                ruc: None,
            })
            .unwrap();
        store
            .usuarios_create(
                "Tec".to_string(),
                "tec@test.com".to_string(),
                "hash".to_string(),
                Rol::Tecnico,
            )
            .unwrap();
        store
            .asignaciones_create(&CreateAsignacion {
                equipo_id: Some(1),
                cliente_id: Some(1),
                usuario_id: Some(1),
            })
            .unwrap();
        store
    }

    fn nuevo_estado() -> CreateEstado {
        CreateEstado {
            asignacion_id: Some(1),
            equipo_id: None,
            cliente_id: None,
            usuario_id: Some(1),
            funcionando: Some(true),
            estado_general: Some("Operativo".to_string()),
            temperatura_actual: Some(4.0),
            temperatura_freezer: Some(-18.0),
            latitud: None,
            longitud: None,
        }
    }

    #[test]
    fn create_against_missing_assignment_fails() {
        let store = store_asignado();
        let result = store.estados_create(&CreateEstado {
            asignacion_id: Some(99),
            ..nuevo_estado()
        });
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn create_resolves_assignment_from_equipment() {
        let store = store_asignado();
        let estado = store
            .estados_create(&CreateEstado {
                asignacion_id: None,
                equipo_id: Some(1),
                ..nuevo_estado()
            })
            .unwrap();
        assert_eq!(estado.asignacion_id, 1);
        assert_eq!(estado.cliente_id, 1);
    }

    #[test]
    fn create_rejects_mismatched_client() {
        let store = store_asignado();
        let result = store.estados_create(&CreateEstado {
            asignacion_id: None,
            equipo_id: Some(1),
            cliente_id: Some(42),
            ..nuevo_estado()
        });
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn create_requires_user_condition_and_text() {
        let store = store_asignado();
        let result = store.estados_create(&CreateEstado {
            funcionando: None,
            ..nuevo_estado()
        });
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn missing_coordinates_fall_back_to_defaults() {
        let store = store_asignado();
        let estado = store.estados_create(&nuevo_estado()).unwrap();
        assert_eq!(estado.latitud, LATITUD_DEFECTO);
        assert_eq!(estado.longitud, LONGITUD_DEFECTO);
        assert!(estado.sincronizado);
    }

    #[test]
    fn history_per_assignment_keeps_creation_order() {
        let store = store_asignado();
        let a = store.estados_create(&nuevo_estado()).unwrap();
        let b = store.estados_create(&nuevo_estado()).unwrap();
        let historia = store.estados_por_asignacion(1).unwrap();
        // the assignment itself seeded the first record
        assert_eq!(
            historia.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![1, a.id, b.id]
        );
    }

    #[test]
    fn detalle_filters_by_assignment() {
        let store = store_asignado();
        store.estados_create(&nuevo_estado()).unwrap();
        let filtrado = store
            .estados_list_detalle(&EstadoQuery {
                asignacion_id: Some(1),
                ..EstadoQuery::default()
            })
            .unwrap();
        assert_eq!(filtrado.len(), 2);
        let vacio = store
            .estados_list_detalle(&EstadoQuery {
                asignacion_id: Some(9),
                ..EstadoQuery::default()
            })
            .unwrap();
        assert!(vacio.is_empty());
    }
}
