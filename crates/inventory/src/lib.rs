//! Inventory domain module.
//!
//! This crate contains the nightly quality update rules for the inn's stock,
//! implemented purely as deterministic domain logic (no IO, no storage).
//! Callers own the items; [`UpdateEngine`] borrows them mutably for the
//! duration of each advance.

pub mod category;
pub mod engine;
pub mod item;
pub mod quality;
pub mod stock;

pub use category::Category;
pub use engine::{UpdateEngine, update_item};
pub use item::{Item, validate_item};
pub use quality::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY, clamped_adjust};
pub use stock::Inventory;
