//! Unit reference and about-screen content

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};

use crate::convert::{
    Unit, GRAMS_TO_OUNCES, KG_TO_LBS, LBS_TO_KG, OUNCES_TO_GRAMS, STONES_TO_KG,
};

/// Table of unit names and what they measure
pub fn unit_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Unit").add_attribute(Attribute::Bold),
        Cell::new("Definition").add_attribute(Attribute::Bold),
    ]);

    for unit in Unit::ALL {
        table.add_row(vec![
            Cell::new(unit.name()).fg(Color::Cyan),
            Cell::new(unit.description()),
        ]);
    }

    table
}

/// Conversion factor lines, each printed at its own fixed precision
pub fn factor_lines() -> Vec<String> {
    vec![
        format!("1 lb = {:.6} kg", LBS_TO_KG),
        format!("1 kg = {:.5} lbs", KG_TO_LBS),
        format!("1 oz = {:.4} g", OUNCES_TO_GRAMS),
        format!("1 g = {:.5} oz", GRAMS_TO_OUNCES),
        format!("1 stone = {:.5} kg", STONES_TO_KG),
    ]
}

pub const FEATURES: [&str; 6] = [
    "Multiple unit conversions",
    "Input validation",
    "Conversion history",
    "Batch processing",
    "Quick convert mode",
    "Adjustable precision",
];
