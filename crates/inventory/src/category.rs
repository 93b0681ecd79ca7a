//! Item categories, derived from the item name.

use serde::{Deserialize, Serialize};

/// Quality curve an item follows.
///
/// Never stored on [`crate::Item`]; always recomputed from the name with
/// [`Category::of`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Loses 1 quality per day, 2 after the sell date.
    Ordinary,
    /// Loses quality twice as fast as ordinary items.
    Conjured,
    /// Gains 1 quality per day, 2 after the sell date.
    AgesWell,
    /// Gains more quality as the concert approaches, worthless afterwards.
    BackstagePass,
    /// Never sold, never changes.
    Legendary,
}

impl Category {
    pub const AGED_BRIE: &'static str = "Aged Brie";
    pub const BACKSTAGE_PASS: &'static str = "Backstage passes to a TAFKAL80ETC concert";
    pub const CONJURED: &'static str = "Conjured Mana Cake";
    pub const SULFURAS: &'static str = "Sulfuras, Hand of Ragnaros";

    /// Classify an item by exact, case-sensitive name match.
    ///
    /// Any name without a special rule is [`Category::Ordinary`].
    pub fn of(name: &str) -> Self {
        match name {
            Self::AGED_BRIE => Category::AgesWell,
            Self::BACKSTAGE_PASS => Category::BackstagePass,
            Self::CONJURED => Category::Conjured,
            Self::SULFURAS => Category::Legendary,
            _ => Category::Ordinary,
        }
    }

    pub fn is_legendary(self) -> bool {
        matches!(self, Category::Legendary)
    }

    /// Quality lost per degradation step (before the sell date; applied again after it).
    pub(crate) fn degradation(self) -> u8 {
        match self {
            Category::Ordinary => 1,
            Category::Conjured => 2,
            Category::AgesWell | Category::BackstagePass | Category::Legendary => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Ordinary => "ordinary",
            Category::Conjured => "conjured",
            Category::AgesWell => "ages_well",
            Category::BackstagePass => "backstage_pass",
            Category::Legendary => "legendary",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
