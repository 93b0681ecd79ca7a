//! End-to-end runs of the console library surface: seed, advance, render.

use gildedrose_console::{ConsoleConfig, ReportFormat, run};
use gildedrose_inventory::{Item, MAX_QUALITY, MIN_QUALITY};

fn config(days: u32, report_format: ReportFormat) -> ConsoleConfig {
    ConsoleConfig {
        days,
        report_format,
        ..ConsoleConfig::default()
    }
}

fn squash(s: &str) -> String {
    s.chars().filter(|c| *c != ' ' && *c != '\n').collect()
}

#[test]
fn one_day_table_matches_reference_output() {
    let report = run(&config(1, ReportFormat::Table)).unwrap();

    assert_eq!(
        squash(&report),
        "OMGHAI!Name-SellIn-Quality\
         +5DexterityVest-9-19\
         AgedBrie-1-1\
         ElixiroftheMongoose-4-6\
         Sulfuras,HandofRagnaros-0-80\
         BackstagepassestoaTAFKAL80ETCconcert-14-21\
         ConjuredManaCake-2-4"
    );
}

#[test]
fn zero_days_reports_seeded_stock() {
    let report = run(&config(0, ReportFormat::Json)).unwrap();
    let items: Vec<Item> = serde_json::from_str(&report).unwrap();
    assert_eq!(items, gildedrose_console::sample::sample_items());
}

#[test]
fn fourteen_days_json() {
    let report = run(&config(14, ReportFormat::Json)).unwrap();
    let items: Vec<Item> = serde_json::from_str(&report).unwrap();

    let qualities: Vec<i32> = items.iter().map(|i| i.quality).collect();
    assert_eq!(qualities, vec![2, 26, 0, 80, 47, 0]);

    let sulfuras = &items[3];
    assert_eq!((sulfuras.sell_in, sulfuras.quality), (0, 80));
}

#[test]
fn long_runs_keep_invariants() {
    let report = run(&config(50, ReportFormat::Json)).unwrap();
    let items: Vec<Item> = serde_json::from_str(&report).unwrap();

    for item in &items {
        if item.category().is_legendary() {
            assert_eq!((item.sell_in, item.quality), (0, 80));
        } else {
            assert!((MIN_QUALITY..=MAX_QUALITY).contains(&item.quality), "{item}");
        }
    }
    assert_eq!(items[1].quality, 50);
    assert_eq!(items[4].quality, 0);
}

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 64,
            ..ProptestConfig::default()
        })]

        /// Property: the table always has the banner, a header and one row per item.
        #[test]
        fn table_shape_is_stable(days in 0u32..60) {
            let report = run(&config(days, ReportFormat::Table)).unwrap();
            let lines: Vec<&str> = report.lines().collect();
            prop_assert_eq!(lines.len(), 2 + 6);
            prop_assert_eq!(lines[0], "OMGHAI!");
        }
    }
}
