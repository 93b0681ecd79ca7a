//! Owned stock of items, seeded once.

use serde::{Deserialize, Serialize};
use tracing::info;

use gildedrose_core::{DomainError, DomainResult};

use crate::engine::UpdateEngine;
use crate::item::{Item, validate_item};

/// The inn's stock: an ordered, fixed set of items.
///
/// Items are never added or removed after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Build an inventory without checking the items.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Build an inventory, rejecting the first malformed item.
    pub fn try_new(items: Vec<Item>) -> DomainResult<Self> {
        for item in &items {
            validate_item(item)?;
        }
        info!(items = items.len(), "inventory seeded");
        Ok(Self { items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item with exactly this name.
    pub fn find(&self, name: &str) -> DomainResult<&Item> {
        self.items
            .iter()
            .find(|item| item.name == name)
            .ok_or_else(|| DomainError::not_found(name))
    }

    /// Lend the items to an [`UpdateEngine`].
    pub fn engine(&mut self) -> UpdateEngine<'_> {
        UpdateEngine::new(&mut self.items)
    }

    pub fn advance_one_day(&mut self) {
        self.engine().advance_one_day();
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}
