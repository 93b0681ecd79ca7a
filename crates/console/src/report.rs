//! Report rendering for the console.

use gildedrose_inventory::Item;

use crate::config::ReportFormat;

/// First line of every table report.
pub const BANNER: &str = "OMGHAI!";

const NAME_WIDTH: usize = 50;
const NUMBER_WIDTH: usize = 7;

pub fn render(items: &[Item], format: ReportFormat) -> serde_json::Result<String> {
    match format {
        ReportFormat::Table => Ok(render_table(items)),
        ReportFormat::Json => render_json(items),
    }
}

/// Banner, header, then one right-aligned row per item.
pub fn render_table(items: &[Item]) -> String {
    let mut out = String::new();
    out.push_str(BANNER);
    out.push('\n');
    push_row(&mut out, "Name", "SellIn", "Quality");
    for item in items {
        push_row(
            &mut out,
            &item.name,
            &item.sell_in.to_string(),
            &item.quality.to_string(),
        );
    }
    out
}

pub fn render_json(items: &[Item]) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(items)?;
    out.push('\n');
    Ok(out)
}

fn push_row(out: &mut String, name: &str, sell_in: &str, quality: &str) {
    out.push_str(&format!(
        "{name:>w$} - {sell_in:>n$} - {quality:>n$}\n",
        w = NAME_WIDTH,
        n = NUMBER_WIDTH,
    ));
}
