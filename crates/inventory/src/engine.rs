//! Nightly update engine.
//!
//! Each item goes through three phases, in this order:
//!
//! 1. quality moves according to its category, using the current `sell_in`;
//! 2. `sell_in` drops by one (legendary items excepted);
//! 3. if `sell_in` is now negative, the post-sell-date rule applies.
//!
//! Phase 3 depends on the already-decremented `sell_in`, so the order is fixed.

use tracing::{debug, info};

use crate::category::Category;
use crate::item::Item;
use crate::quality::clamped_adjust;

/// Backstage passes gain an extra point while `sell_in` is below this (10 days or less).
const BACKSTAGE_SECOND_TIER: i32 = 11;

/// Backstage passes gain a third point while `sell_in` is below this (5 days or less).
const BACKSTAGE_THIRD_TIER: i32 = 6;

/// Advances a caller-owned collection of items one day at a time.
///
/// Holds exclusive access to the items for as long as it lives; dropping it
/// hands them back to the owner with every mutation visible.
#[derive(Debug)]
pub struct UpdateEngine<'a> {
    items: &'a mut [Item],
}

impl<'a> UpdateEngine<'a> {
    pub fn new(items: &'a mut [Item]) -> Self {
        Self { items }
    }

    /// Items in construction order.
    pub fn items(&self) -> &[Item] {
        self.items
    }

    /// Advance every item by exactly one day.
    pub fn advance_one_day(&mut self) {
        for item in self.items.iter_mut() {
            update_item(item);
        }
        info!(items = self.items.len(), "advanced inventory by one day");
    }
}

/// Apply one day's rules to a single item.
pub fn update_item(item: &mut Item) {
    let category = Category::of(&item.name);
    let (sell_in_before, quality_before) = (item.sell_in, item.quality);

    adjust_before_sell_date(item, category);

    if !category.is_legendary() {
        item.sell_in = item.sell_in.saturating_sub(1);
    }

    if item.sell_in < 0 {
        adjust_after_sell_date(item, category);
    }

    debug!(
        name = %item.name,
        %category,
        sell_in_before,
        sell_in = item.sell_in,
        quality_before,
        quality = item.quality,
        "item updated"
    );
}

fn adjust_before_sell_date(item: &mut Item, category: Category) {
    match category {
        Category::Ordinary | Category::Conjured => degrade(item, category),
        Category::AgesWell => item.quality = clamped_adjust(item.quality, 1),
        Category::BackstagePass => {
            item.quality = clamped_adjust(item.quality, 1);
            if item.sell_in < BACKSTAGE_SECOND_TIER {
                item.quality = clamped_adjust(item.quality, 1);
            }
            if item.sell_in < BACKSTAGE_THIRD_TIER {
                item.quality = clamped_adjust(item.quality, 1);
            }
        }
        Category::Legendary => {}
    }
}

fn adjust_after_sell_date(item: &mut Item, category: Category) {
    match category {
        Category::Ordinary | Category::Conjured => degrade(item, category),
        Category::AgesWell => item.quality = clamped_adjust(item.quality, 1),
        Category::BackstagePass => item.quality = 0,
        Category::Legendary => {}
    }
}

// Separate unit steps, each floored on its own.
fn degrade(item: &mut Item, category: Category) {
    for _ in 0..category.degradation() {
        item.quality = clamped_adjust(item.quality, -1);
    }
}
