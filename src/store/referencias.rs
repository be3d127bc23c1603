//! Reference table methods on Store (read-only after seeding)

use super::Store;
use crate::{
    error::AppResult,
    models::referencia::{Logo, Marca, Modelo},
};

impl Store {
    /// List all brands
    pub fn marcas_list(&self) -> AppResult<Vec<Marca>> {
        Ok(self.read()?.marcas.values().cloned().collect())
    }

    /// List all models
    pub fn modelos_list(&self) -> AppResult<Vec<Modelo>> {
        Ok(self.read()?.modelos.values().cloned().collect())
    }

    /// List all branding logos
    pub fn logos_list(&self) -> AppResult<Vec<Logo>> {
        Ok(self.read()?.logos.values().cloned().collect())
    }
}
