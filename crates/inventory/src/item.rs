use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::category::Category;
use crate::quality::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};

/// A sellable item.
///
/// The record shape is fixed: name, days left to sell, quality. The category
/// is derived from `name` and is not part of the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn category(&self) -> Category {
        Category::of(&self.name)
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Check that an item is well-formed before it enters an inventory.
///
/// Seeding-time check only; the update engine assumes its input already passes.
pub fn validate_item(item: &Item) -> DomainResult<()> {
    if item.name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }

    if item.category().is_legendary() {
        if item.quality != LEGENDARY_QUALITY {
            return Err(DomainError::invariant(format!(
                "legendary item {:?} must have quality {LEGENDARY_QUALITY}, got {}",
                item.name, item.quality
            )));
        }
        return Ok(());
    }

    if !(MIN_QUALITY..=MAX_QUALITY).contains(&item.quality) {
        return Err(DomainError::invariant(format!(
            "quality of {:?} must be within {MIN_QUALITY}..={MAX_QUALITY}, got {}",
            item.name, item.quality
        )));
    }

    Ok(())
}
