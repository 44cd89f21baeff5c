use std::collections::HashSet;

use crate::constants::*;
use crate::error::DrawError;
use crate::prize::{default_catalog, Prize, PrizeId};

/// Immutable settings a draw session runs against.
///
/// The page builds one at startup; tests substitute their own catalog or code.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawConfig {
    pub access_code: String,
    pub form_endpoint: String,
    pub catalog: Vec<Prize>,
    pub spin_delay_ms: u32,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            access_code: DEFAULT_ACCESS_CODE.to_string(),
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            catalog: default_catalog(),
            spin_delay_ms: SPIN_DELAY_MS,
        }
    }
}

impl DrawConfig {
    pub fn with_access_code(mut self, code: impl Into<String>) -> Self {
        self.access_code = code.into();
        self
    }

    pub fn with_form_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.form_endpoint = endpoint.into();
        self
    }

    pub fn with_catalog(mut self, catalog: Vec<Prize>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn prize(&self, id: PrizeId) -> Option<&Prize> {
        self.catalog.iter().find(|p| p.id == id)
    }

    pub fn validate(&self) -> Result<(), DrawError> {
        if self.access_code.is_empty() {
            return Err(DrawError::InvalidConfig("access code is empty".to_string()));
        }
        if self.catalog.len() != CATALOG_SIZE {
            return Err(DrawError::InvalidConfig(format!(
                "catalog must hold {} prizes, found {}",
                CATALOG_SIZE,
                self.catalog.len()
            )));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = self.catalog.iter().find(|p| !seen.insert(p.id)) {
            return Err(DrawError::InvalidConfig(format!("duplicate prize id {}", dup.id)));
        }

        Ok(())
    }
}
