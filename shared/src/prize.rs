use serde::{Deserialize, Serialize};

use crate::constants::CATALOG_SIZE;

pub type PrizeId = u32;

/// A prize that can appear on the wheel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prize {
    pub id: PrizeId,
    pub name: String,
    pub color: String,  // CSS color used for the wheel slot
}

impl Prize {
    pub fn new(id: PrizeId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }
}

const SLOT_COLORS: [&str; 4] = ["#FF6B6B", "#FF8E99", "#FF92AE", "#FFB3BA"];

/// The eight prizes offered on the promotional page
pub fn default_catalog() -> Vec<Prize> {
    (1..=CATALOG_SIZE as PrizeId)
        .map(|id| {
            let color = SLOT_COLORS[(id as usize - 1) % SLOT_COLORS.len()];
            Prize::new(id, format!("Prize {}", id), color)
        })
        .collect()
}
