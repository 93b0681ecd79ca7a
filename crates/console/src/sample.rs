//! The inn's sample stock.

use gildedrose_core::DomainResult;
use gildedrose_inventory::{Category, Inventory, Item};

pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(Category::AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(Category::SULFURAS, 0, 80),
        Item::new(Category::BACKSTAGE_PASS, 15, 20),
        Item::new(Category::CONJURED, 3, 6),
    ]
}

/// Sample stock, validated.
pub fn sample_inventory() -> DomainResult<Inventory> {
    Inventory::try_new(sample_items())
}
