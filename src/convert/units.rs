//! Mass units, the fixed conversion factor table, and the converter itself

use std::fmt;

/// Pounds to kilograms
pub const LBS_TO_KG: f64 = 0.453592;
/// Kilograms to pounds
pub const KG_TO_LBS: f64 = 2.20462;
/// Ounces to grams
pub const OUNCES_TO_GRAMS: f64 = 28.3495;
/// Grams to ounces
pub const GRAMS_TO_OUNCES: f64 = 0.035274;
/// Stones to kilograms
pub const STONES_TO_KG: f64 = 6.35029;
/// Kilograms to stones
pub const KG_TO_STONES: f64 = 0.157473;

/// Apply a conversion factor to a value.
///
/// Multiplies when `multiply` is set, otherwise divides. Factors are fixed
/// non-zero constants so there is no failure case.
pub fn convert(value: f64, factor: f64, multiply: bool) -> f64 {
    if multiply {
        value * factor
    } else {
        value / factor
    }
}

/// Render a single conversion as `"<value> <unit> = <value> <unit>"`
pub fn format_conversion(
    value: f64,
    from: Unit,
    converted: f64,
    to: Unit,
    decimals: usize,
) -> String {
    format!(
        "{:.*} {} = {:.*} {}",
        decimals, value, from, decimals, converted, to
    )
}

/// A unit of mass understood by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Pounds,
    Kilograms,
    Ounces,
    Grams,
    Stones,
}

impl Unit {
    /// Every unit, in reference display order
    pub const ALL: [Unit; 5] = [
        Unit::Pounds,
        Unit::Kilograms,
        Unit::Ounces,
        Unit::Grams,
        Unit::Stones,
    ];

    /// Short label used in results and history entries
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Pounds => "lbs",
            Unit::Kilograms => "kg",
            Unit::Ounces => "oz",
            Unit::Grams => "g",
            Unit::Stones => "stones",
        }
    }

    /// Long name shown in the unit reference
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Pounds => "lbs (pounds)",
            Unit::Kilograms => "kg (kilograms)",
            Unit::Ounces => "oz (ounces)",
            Unit::Grams => "g (grams)",
            Unit::Stones => "stones",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Unit::Pounds => "Imperial unit of mass",
            Unit::Kilograms => "SI unit of mass",
            Unit::Ounces => "1/16 of a pound",
            Unit::Grams => "1/1000 of a kilogram",
            Unit::Stones => "Imperial unit, equal to 14 pounds",
        }
    }

    /// Match a free-form unit token against the accepted synonyms.
    ///
    /// Matching is case-insensitive; `None` means the token is not a known unit.
    pub fn from_token(token: &str) -> Option<Unit> {
        match token.to_lowercase().as_str() {
            "lbs" | "lb" | "pounds" => Some(Unit::Pounds),
            "kg" | "kilograms" | "kilos" => Some(Unit::Kilograms),
            "oz" | "ounces" => Some(Unit::Ounces),
            "g" | "grams" => Some(Unit::Grams),
            "stones" | "stone" => Some(Unit::Stones),
            _ => None,
        }
    }

    /// The conversion Quick Convert applies to a value given in this unit
    pub fn quick_pair(&self) -> ConversionPair {
        match self {
            Unit::Pounds => ConversionPair::LBS_KG,
            Unit::Kilograms => ConversionPair::KG_LBS,
            Unit::Ounces => ConversionPair::OZ_G,
            Unit::Grams => ConversionPair::G_OZ,
            Unit::Stones => ConversionPair::STONES_KG,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A directed conversion between two units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionPair {
    pub from: Unit,
    pub to: Unit,
    pub factor: f64,
    pub multiply: bool,
}

impl ConversionPair {
    pub const LBS_KG: ConversionPair = Self::new(Unit::Pounds, Unit::Kilograms, LBS_TO_KG);
    pub const KG_LBS: ConversionPair = Self::new(Unit::Kilograms, Unit::Pounds, KG_TO_LBS);
    pub const OZ_G: ConversionPair = Self::new(Unit::Ounces, Unit::Grams, OUNCES_TO_GRAMS);
    pub const G_OZ: ConversionPair = Self::new(Unit::Grams, Unit::Ounces, GRAMS_TO_OUNCES);
    pub const STONES_KG: ConversionPair = Self::new(Unit::Stones, Unit::Kilograms, STONES_TO_KG);
    pub const KG_STONES: ConversionPair = Self::new(Unit::Kilograms, Unit::Stones, KG_TO_STONES);

    /// The six standard conversions, in submenu order (choices 1-6)
    pub const STANDARD: [ConversionPair; 6] = [
        ConversionPair::LBS_KG,
        ConversionPair::KG_LBS,
        ConversionPair::OZ_G,
        ConversionPair::G_OZ,
        ConversionPair::STONES_KG,
        ConversionPair::KG_STONES,
    ];

    const fn new(from: Unit, to: Unit, factor: f64) -> Self {
        Self {
            from,
            to,
            factor,
            multiply: true,
        }
    }

    /// Look up a standard conversion by its 1-based submenu choice
    pub fn from_choice(choice: i32) -> Option<ConversionPair> {
        usize::try_from(choice)
            .ok()
            .and_then(|c| c.checked_sub(1))
            .and_then(|i| Self::STANDARD.get(i).copied())
    }

    pub fn apply(&self, value: f64) -> f64 {
        convert(value, self.factor, self.multiply)
    }

    /// Menu text, e.g. "Convert lbs to kg"
    pub fn menu_label(&self) -> String {
        let name = |u: Unit| match u {
            Unit::Ounces => "ounces",
            Unit::Grams => "grams",
            other => other.label(),
        };
        format!("Convert {} to {}", name(self.from), name(self.to))
    }

    /// Short description used in the "convert another?" prompt
    pub fn describe(&self) -> String {
        format!("{} to {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_multiply_and_divide() {
        assert!((convert(150.0, LBS_TO_KG, true) - 68.0388).abs() < 1e-9);
        assert!((convert(68.0388, LBS_TO_KG, false) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_unit_synonyms() {
        assert_eq!(Unit::from_token("LB"), Some(Unit::Pounds));
        assert_eq!(Unit::from_token("Kilos"), Some(Unit::Kilograms));
        assert_eq!(Unit::from_token("ounces"), Some(Unit::Ounces));
        assert_eq!(Unit::from_token("g"), Some(Unit::Grams));
        assert_eq!(Unit::from_token("stone"), Some(Unit::Stones));
        assert_eq!(Unit::from_token("tons"), None);
    }

    #[test]
    fn test_standard_pairs_by_choice() {
        assert_eq!(ConversionPair::from_choice(1), Some(ConversionPair::LBS_KG));
        assert_eq!(ConversionPair::from_choice(6), Some(ConversionPair::KG_STONES));
        assert_eq!(ConversionPair::from_choice(0), None);
        assert_eq!(ConversionPair::from_choice(7), None);
        assert_eq!(ConversionPair::from_choice(-1), None);
    }

    #[test]
    fn test_menu_labels() {
        assert_eq!(ConversionPair::OZ_G.menu_label(), "Convert ounces to grams");
        assert_eq!(ConversionPair::KG_STONES.menu_label(), "Convert kg to stones");
        assert_eq!(ConversionPair::G_OZ.describe(), "g to oz");
    }

    #[test]
    fn test_format_conversion_rounds() {
        let converted = ConversionPair::LBS_KG.apply(150.0);
        assert_eq!(
            format_conversion(150.0, Unit::Pounds, converted, Unit::Kilograms, 2),
            "150.00 lbs = 68.04 kg"
        );
        assert_eq!(
            format_conversion(150.0, Unit::Pounds, converted, Unit::Kilograms, 0),
            "150 lbs = 68 kg"
        );
    }
}
