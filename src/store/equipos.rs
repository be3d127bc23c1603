//! Equipment domain methods on Store

use chrono::Utc;

use super::{next_id, Store};
use crate::{
    error::{AppError, AppResult},
    models::equipo::{CreateEquipo, Equipo, EquipoDetalle},
};

impl Store {
    /// List all equipment in insertion order
    pub fn equipos_list(&self) -> AppResult<Vec<Equipo>> {
        Ok(self.read()?.equipos.values().cloned().collect())
    }

    /// Get equipment by ID
    pub fn equipos_get(&self, id: i32) -> AppResult<Equipo> {
        self.read()?
            .equipos
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Equipo {} no encontrado", id)))
    }

    /// Case-insensitive substring search over cod_barras, marca and modelo.
    /// All matches are returned, no ranking.
    pub fn equipos_search(&self, q: &str) -> AppResult<Vec<Equipo>> {
        let q = q.to_lowercase();
        Ok(self
            .read()?
            .equipos
            .values()
            .filter(|e| {
                e.cod_barras.to_lowercase().contains(&q)
                    || e.marca.to_lowercase().contains(&q)
                    || e.modelo.to_lowercase().contains(&q)
            })
            .cloned()
            .collect())
    }

    /// Create equipment. Requires cod_barras, marca, modelo and tipo_equipo;
    /// the barcode must not already exist. Brand/model reference rows are
    /// linked by name when a seeded row matches.
    pub fn equipos_create(&self, data: &CreateEquipo) -> AppResult<Equipo> {
        let (cod_barras, marca, modelo, tipo_equipo) = match (
            &data.cod_barras,
            &data.marca,
            &data.modelo,
            &data.tipo_equipo,
        ) {
            (Some(cb), Some(ma), Some(mo), Some(te))
                if ![cb, ma, mo, te].iter().any(|s| s.trim().is_empty()) =>
            {
                (cb, ma, mo, te)
            }
            _ => {
                return Err(AppError::Validation(
                    "Todos los campos son requeridos".to_string(),
                ))
            }
        };

        let mut tables = self.write()?;
        if tables.barcode_index.contains_key(cod_barras.as_str()) {
            return Err(AppError::Duplicate(
                "El código de barras ya existe".to_string(),
            ));
        }
        if let Some(logo_id) = data.logo_id {
            if !tables.logos.contains_key(&logo_id) {
                return Err(AppError::NotFound(format!("Logo {} no encontrado", logo_id)));
            }
        }

        let marca_id = tables
            .marcas
            .values()
            .find(|m| m.nombre.eq_ignore_ascii_case(marca))
            .map(|m| m.id);
        let modelo_id = tables
            .modelos
            .values()
            .find(|m| m.nombre.eq_ignore_ascii_case(modelo))
            .map(|m| m.id);

        let id = next_id(&tables.equipos);
        let equipo = Equipo {
            id,
            cod_barras: cod_barras.clone(),
            marca: marca.clone(),
            modelo: modelo.clone(),
            tipo_equipo: tipo_equipo.clone(),
            numero_serie: data.numero_serie.clone(),
            marca_id,
            modelo_id,
            logo_id: data.logo_id,
            fecha_creacion: Utc::now(),
        };
        tables.barcode_index.insert(equipo.cod_barras.clone(), id);
        tables.equipos.insert(id, equipo.clone());
        Ok(equipo)
    }

    /// Equipment enriched with the active assignment's client and the
    /// latest status record. When several records exist for one unit the
    /// most recently created wins (last index entry; ids are monotonic).
    pub fn equipos_list_detalle(&self) -> AppResult<Vec<EquipoDetalle>> {
        let tables = self.read()?;
        Ok(tables
            .equipos
            .values()
            .map(|equipo| {
                let cliente = tables
                    .asignacion_activa
                    .get(&equipo.id)
                    .and_then(|aid| tables.asignaciones.get(aid))
                    .and_then(|a| tables.clientes.get(&a.cliente_id));
                let estado = tables
                    .estados_por_equipo
                    .get(&equipo.id)
                    .and_then(|ids| ids.last())
                    .and_then(|id| tables.estados.get(id));

                EquipoDetalle {
                    equipo: equipo.clone(),
                    asignado_a: cliente.map(|c| c.nombre.clone()),
                    cliente_id: cliente.map(|c| c.id),
                    estado_actual: estado
                        .map(|e| e.estado_general.clone())
                        .unwrap_or_else(|| "Sin revisar".to_string()),
                    funcionando: estado.map(|e| e.funcionando),
                    temperatura_actual: estado.and_then(|e| e.temperatura_actual),
                    temperatura_freezer: estado.and_then(|e| e.temperatura_freezer),
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nuevo_equipo(cod_barras: &str) -> CreateEquipo {
        CreateEquipo {
            cod_barras: Some(cod_barras.to_string()),
            marca: Some("Samsung".to_string()),
            modelo: Some("RT38".to_string()),
            tipo_equipo: Some("Refrigerador".to_string()),
            numero_serie: None,
            logo_id: None,
        }
    }

    #[test]
    fn create_rejects_duplicate_barcode_without_side_effects() {
        let store = Store::new();
        store.equipos_create(&nuevo_equipo("REF100")).unwrap();

        let result = store.equipos_create(&nuevo_equipo("REF100"));
        assert!(matches!(result, Err(AppError::Duplicate(_))));
        assert_eq!(store.equipos_list().unwrap().len(), 1);
    }

    #[test]
    fn create_requires_all_fields() {
        let store = Store::new();
        let result = store.equipos_create(&CreateEquipo {
            cod_barras: Some("REF200".to_string()),
            marca: None,
            modelo: Some("X".to_string()),
            tipo_equipo: Some("Freezer".to_string()),
            numero_serie: None,
            logo_id: None,
        });
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn ids_are_monotonic_and_list_keeps_insertion_order() {
        let store = Store::new();
        let a = store.equipos_create(&nuevo_equipo("REF001")).unwrap();
        let b = store.equipos_create(&nuevo_equipo("REF002")).unwrap();
        assert_eq!(a.id + 1, b.id);

        let lista = store.equipos_list().unwrap();
        assert_eq!(
            lista.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![a.id, b.id]
        );
    }

    #[test]
    fn search_is_case_insensitive_over_barcode_brand_and_model() {
        let store = Store::new();
        store.equipos_create(&nuevo_equipo("REF001")).unwrap();
        assert_eq!(store.equipos_search("ref001").unwrap().len(), 1);
        assert_eq!(store.equipos_search("samsung").unwrap().len(), 1);
        assert_eq!(store.equipos_search("rt38").unwrap().len(), 1);
        assert!(store.equipos_search("bosch").unwrap().is_empty());
    }

    #[test]
    fn unassigned_equipment_reports_sin_revisar() {
        let store = Store::new();
        store.equipos_create(&nuevo_equipo("REF001")).unwrap();
        let detalle = store.equipos_list_detalle().unwrap();
        assert_eq!(detalle[0].estado_actual, "Sin revisar");
        assert!(detalle[0].asignado_a.is_none());
        assert!(detalle[0].funcionando.is_none());
    }
}
