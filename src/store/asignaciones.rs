//! Assignment domain methods on Store

use chrono::Utc;

use super::{next_id, Store};
use crate::{
    error::{AppError, AppResult},
    models::{
        asignacion::{Asignacion, AsignacionDetalle, CreateAsignacion},
        estado::{
            EstadoCenso, EstadoEquipo, ESTADO_PENDIENTE_REVISION, LATITUD_DEFECTO,
            LONGITUD_DEFECTO,
        },
    },
};

impl Store {
    /// Get assignment by ID
    pub fn asignaciones_get(&self, id: i32) -> AppResult<Asignacion> {
        self.read()?
            .asignaciones
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Asignación {} no encontrada", id)))
    }

    /// Create an assignment and its seed status record in one atomic write.
    ///
    /// All three references must exist and the equipment must not already
    /// have an active assignment. Nothing is inserted when a check fails.
    pub fn asignaciones_create(
        &self,
        data: &CreateAsignacion,
    ) -> AppResult<(Asignacion, EstadoEquipo)> {
        let (equipo_id, cliente_id, usuario_id) =
            match (data.equipo_id, data.cliente_id, data.usuario_id) {
                (Some(e), Some(c), Some(u)) => (e, c, u),
                _ => {
                    return Err(AppError::Validation(
                        "Todos los IDs son requeridos".to_string(),
                    ))
                }
            };

        let mut tables = self.write()?;
        // Dangling references answer 400 here, not 404
        if !tables.equipos.contains_key(&equipo_id)
            || !tables.clientes.contains_key(&cliente_id)
            || !tables.usuarios.contains_key(&usuario_id)
        {
            return Err(AppError::Validation(
                "Equipo, cliente o usuario no encontrado".to_string(),
            ));
        }
        if tables.asignacion_activa.contains_key(&equipo_id) {
            return Err(AppError::Conflict("El equipo ya está asignado".to_string()));
        }

        let now = Utc::now();
        let asignacion_id = next_id(&tables.asignaciones);
        let asignacion = Asignacion {
            id: asignacion_id,
            equipo_id,
            cliente_id,
            usuario_id: Some(usuario_id),
            fecha_asignacion: now,
            fecha_retiro: None,
            activo: true,
            estado: "activa".to_string(),
        };

        let estado_id = next_id(&tables.estados);
        let estado = EstadoEquipo {
            id: estado_id,
            asignacion_id,
            equipo_id,
            cliente_id,
            usuario_id,
            funcionando: true,
            estado_general: ESTADO_PENDIENTE_REVISION.to_string(),
            temperatura_actual: None,
            temperatura_freezer: None,
            latitud: LATITUD_DEFECTO,
            longitud: LONGITUD_DEFECTO,
            fecha_revision: now,
            sincronizado: true,
            estado_censo: EstadoCenso::Pendiente,
        };

        tables.asignaciones.insert(asignacion_id, asignacion.clone());
        tables.estados.insert(estado_id, estado.clone());
        tables.asignacion_activa.insert(equipo_id, asignacion_id);
        tables
            .estados_por_equipo
            .entry(equipo_id)
            .or_default()
            .push(estado_id);
        tables
            .estados_por_asignacion
            .entry(asignacion_id)
            .or_default()
            .push(estado_id);

        Ok((asignacion, estado))
    }

    /// Retire an assignment. Terminal for the row; the equipment becomes
    /// assignable again.
    pub fn asignaciones_retirar(&self, id: i32) -> AppResult<Asignacion> {
        let mut tables = self.write()?;
        let asignacion = tables
            .asignaciones
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Asignación {} no encontrada", id)))?;
        if !asignacion.activo {
            return Err(AppError::Conflict(
                "La asignación ya fue retirada".to_string(),
            ));
        }
        asignacion.activo = false;
        asignacion.fecha_retiro = Some(Utc::now());
        asignacion.estado = "retirada".to_string();
        let retirada = asignacion.clone();
        tables.asignacion_activa.remove(&retirada.equipo_id);
        Ok(retirada)
    }

    /// Active assignments enriched with equipment label, client name and
    /// the latest status summary for the equipment
    pub fn asignaciones_list_detalle(&self) -> AppResult<Vec<AsignacionDetalle>> {
        let tables = self.read()?;
        Ok(tables
            .asignaciones
            .values()
            .filter(|a| a.activo)
            .map(|a| {
                let equipo = tables.equipos.get(&a.equipo_id);
                let cliente = tables.clientes.get(&a.cliente_id);
                let estado = tables
                    .estados_por_equipo
                    .get(&a.equipo_id)
                    .and_then(|ids| ids.last())
                    .and_then(|id| tables.estados.get(id));

                AsignacionDetalle {
                    id: a.id,
                    refrigerador: equipo
                        .map(|e| format!("{} {}", e.marca, e.modelo))
                        .unwrap_or_else(|| "No encontrado".to_string()),
                    cliente: cliente
                        .map(|c| c.nombre.clone())
                        .unwrap_or_else(|| "No encontrado".to_string()),
                    equipo_id: a.equipo_id,
                    cliente_id: a.cliente_id,
                    fecha_asignacion: a.fecha_asignacion,
                    estado_actual: estado
                        .map(|e| e.estado_general.clone())
                        .unwrap_or_else(|| "Sin estado".to_string()),
                    funcionando: estado.map(|e| e.funcionando),
                    temperatura_actual: estado.and_then(|e| e.temperatura_actual),
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{cliente::CreateCliente, equipo::CreateEquipo, usuario::Rol};

    /// Store with one equipment unit, one client and one user, all id 1
    fn store_base() -> Store {
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
    }

    fn nueva_asignacion() -> CreateAsignacion {
        CreateAsignacion {
            equipo_id: Some(1),
            cliente_id: Some(1),
            usuario_id: Some(1),
        }
    }

    #[test]
    fn create_seeds_a_pending_review_status() {
        let store = store_base();
        let (asignacion, estado) = store.asignaciones_create(&nueva_asignacion()).unwrap();
        assert!(asignacion.activo);
        assert_eq!(asignacion.estado, "activa");
        assert_eq!(estado.asignacion_id, asignacion.id);
        assert_eq!(estado.estado_general, ESTADO_PENDIENTE_REVISION);
        assert!(estado.funcionando);
        assert_eq!(estado.latitud, LATITUD_DEFECTO);
        assert_eq!(estado.longitud, LONGITUD_DEFECTO);
    }

    #[test]
    fn second_active_assignment_for_same_equipment_conflicts() {
        let store = store_base();
        store.asignaciones_create(&nueva_asignacion()).unwrap();
        let result = store.asignaciones_create(&nueva_asignacion());
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[test]
    fn create_requires_all_ids() {
        let store = store_base();
        let result = store.asignaciones_create(&CreateAsignacion {
            equipo_id: Some(1),
            cliente_id: None,
            usuario_id: Some(1),
        });
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn create_checks_referenced_records() {
        let store = store_base();
        let result = store.asignaciones_create(&CreateAsignacion {
            equipo_id: Some(99),
            cliente_id: Some(1),
            usuario_id: Some(1),
        });
        assert!(matches!(result, Err(AppError::Validation(_))));
        // nothing was written
        assert!(store.asignaciones_list_detalle().unwrap().is_empty());
    }

    #[test]
    fn retired_equipment_can_be_reassigned() {
        let store = store_base();
        let (primera, _) = store.asignaciones_create(&nueva_asignacion()).unwrap();
        let retirada = store.asignaciones_retirar(primera.id).unwrap();
        assert!(!retirada.activo);
        assert_eq!(retirada.estado, "retirada");
        assert!(retirada.fecha_retiro.is_some());

        let (segunda, _) = store.asignaciones_create(&nueva_asignacion()).unwrap();
        assert!(segunda.id > primera.id);
    }

    #[test]
    fn retiring_twice_conflicts() {
        let store = store_base();
        let (asignacion, _) = store.asignaciones_create(&nueva_asignacion()).unwrap();
        store.asignaciones_retirar(asignacion.id).unwrap();
        let result = store.asignaciones_retirar(asignacion.id);
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[test]
    fn detalle_lists_only_active_assignments() {
        let store = store_base();
        let (asignacion, _) = store.asignaciones_create(&nueva_asignacion()).unwrap();
        assert_eq!(store.asignaciones_list_detalle().unwrap().len(), 1);
        store.asignaciones_retirar(asignacion.id).unwrap();
        assert!(store.asignaciones_list_detalle().unwrap().is_empty());
    }
}
