//! Ratio listing command implementation.

use crate::output::{OutputFormat, banner, print_json};
use anyhow::Result;
use greenblatt::ratios::registry::{RatioCategory, RatioInfo, ratios_by_category};

const CATEGORIES: [(RatioCategory, &str); 3] = [
    (RatioCategory::Value, "Value"),
    (RatioCategory::Quality, "Quality"),
    (RatioCategory::Price, "Price"),
];

/// List available ratios, optionally filtered by category.
pub(crate) fn list_ratios(category: Option<&str>, format: OutputFormat) -> Result<()> {
    let selected: Vec<(RatioCategory, &str, Vec<RatioInfo>)> = CATEGORIES
        .into_iter()
        .filter(|(_, name)| matches_category(name, category))
        .map(|(cat, name)| (cat, name, ratios_by_category(cat)))
        .collect();

    if format == OutputFormat::Json {
        let ratios: Vec<&RatioInfo> = selected.iter().flat_map(|(_, _, infos)| infos).collect();
        return print_json(&ratios);
    }

    banner("Available Ratios");

    for (cat, cat_name, infos) in &selected {
        if infos.is_empty() {
            continue;
        }

        println!("{cat_name}: {}", cat.description());
        println!("{}", "-".repeat(60));
        for info in infos {
            println!("  {:28} ({})", info.name, info.alias);
            println!("      {}", info.description);
            println!("      {}", info.formula);
        }
        println!();
    }

    println!("Ratios are reported in percent; a zero denominator reads as undefined.\n");
    Ok(())
}

fn matches_category(name: &str, filter: Option<&str>) -> bool {
    filter.is_none_or(|f| name.to_lowercase().contains(&f.trim().to_lowercase()))
}
