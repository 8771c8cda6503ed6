//! Handlers behind each menu option

use std::io::Write;

use anyhow::Result;

use super::menu::Session;
use super::prompts::LineSource;
use crate::convert::{
    batch_summary, format_conversion, is_back_command, parse_batch, parse_quick_entry,
    BatchDirection, BatchToken, ConversionPair, Precision, QuickEntryError,
};
use crate::report::{factor_lines, unit_table, FEATURES};
use crate::utils::{dim, error, heading, menu_option, result, rule, success, warning};

impl<S: LineSource, W: Write> Session<S, W> {
    /// Convert weights for one fixed pair until the user declines another
    pub(crate) fn convert_standard(&mut self, pair: ConversionPair) -> Result<()> {
        loop {
            let weight = self
                .console
                .read_weight(&format!("Enter weight in {}: ", pair.from))?;
            let converted = pair.apply(weight);
            let places = self.precision.places();

            self.console.say(result(&format!(
                "{} in {}: {:.*}",
                pair.from, pair.to, places, converted
            )))?;
            self.record(format_conversion(weight, pair.from, converted, pair.to, places));
            self.console.say(dim("(Added to history)"))?;

            self.console.blank()?;
            let again = self
                .console
                .ask_yes_no(&format!("Convert another {}? (y/n): ", pair.describe()))?;
            if !again {
                return Ok(());
            }
        }
    }

    /// Free-form "<value> <unit>" entry until the user types `back`
    pub(crate) fn quick_convert(&mut self) -> Result<()> {
        self.console.blank()?;
        self.console.say(heading("Quick Convert Mode"))?;
        self.console
            .say("Enter value and unit (e.g., '150 lbs' or '68.5 kg')")?;
        self.console.say("Supported units: lbs, kg, oz, g, stones")?;
        self.console.say(dim("Type 'back' to return to main menu"))?;

        loop {
            self.console.blank()?;
            let line = self.console.prompt("Enter conversion: ")?;
            if is_back_command(&line) {
                return Ok(());
            }

            let entry = match parse_quick_entry(&line) {
                Ok(entry) => entry,
                Err(e @ QuickEntryError::InvalidNumber(_)) => {
                    self.console.say(error(&e.to_string()))?;
                    continue;
                }
                Err(e) => {
                    self.console.say(warning(&e.to_string()))?;
                    continue;
                }
            };

            if !self.console.is_valid_weight(entry.value)? {
                continue;
            }

            let pair = entry.unit.quick_pair();
            let converted = pair.apply(entry.value);
            let text = format_conversion(
                entry.value,
                pair.from,
                converted,
                pair.to,
                self.precision.places(),
            );
            self.console.say(result(&text))?;
            self.record(text);
        }
    }

    /// Convert a comma-separated list of weights in one direction
    pub(crate) fn batch_convert(&mut self) -> Result<()> {
        self.console.blank()?;
        self.console.say(heading("Batch Conversion"))?;
        self.console.say("Enter multiple weights separated by commas")?;
        self.console.say(dim("Example: 150, 165, 180"))?;
        self.console.blank()?;
        let line = self.console.prompt("Enter weights: ")?;

        self.console.blank()?;
        self.console.say("Select conversion type:")?;
        self.console.say(menu_option(1, "lbs to kg"))?;
        self.console.say(menu_option(2, "kg to lbs"))?;
        let choice = self.console.read_int("Enter choice (1-2): ")?;

        let Some(direction) = BatchDirection::from_choice(choice) else {
            self.console
                .say(error("Invalid choice. Returning to menu."))?;
            return Ok(());
        };
        let pair = direction.pair();
        let places = self.precision.places();

        self.console.blank()?;
        self.console
            .say(format!("Converting {} to {}:", pair.from, pair.to))?;
        self.console.say(rule(21))?;

        let tokens = parse_batch(&line);
        let mut converted_count = 0;
        for token in &tokens {
            match token {
                BatchToken::Invalid(text) => {
                    self.console
                        .say(warning(&format!("Skipping invalid value: '{}'", text)))?;
                }
                BatchToken::Value(weight) => {
                    if self.console.is_valid_weight(*weight)? {
                        let converted = pair.apply(*weight);
                        self.console.say(format_conversion(
                            *weight, pair.from, converted, pair.to, places,
                        ))?;
                        converted_count += 1;
                    }
                }
            }
        }
        log::debug!(
            "batch {:?}: {} of {} tokens converted",
            direction,
            converted_count,
            tokens.len()
        );

        if converted_count > 0 {
            self.record(batch_summary(converted_count, pair.from, pair.to));
            self.console.blank()?;
            self.console
                .say(success("Batch conversion added to history."))?;
        }
        Ok(())
    }

    pub(crate) fn view_history(&mut self) -> Result<()> {
        self.console.blank()?;
        if self.history.is_empty() {
            self.console
                .say(dim("No conversions yet. Try converting some weights first!"))?;
            return Ok(());
        }

        self.console.say(heading("Conversion History"))?;
        self.console
            .say(format!("Total conversions: {}", self.history.len()))?;
        self.console.say(rule(25))?;
        for line in self.history.numbered() {
            self.console.say(line)?;
        }
        Ok(())
    }

    pub(crate) fn clear_history(&mut self) -> Result<()> {
        self.console.blank()?;
        if self.history.is_empty() {
            self.console.say("History is already empty.")?;
            return Ok(());
        }

        if self
            .console
            .confirm("Are you sure you want to clear all history? (y/n): ")?
        {
            self.history.clear();
            self.console.say(success("History cleared successfully."))?;
        } else {
            self.console.say("Clear history cancelled.")?;
        }
        Ok(())
    }

    pub(crate) fn precision_settings(&mut self) -> Result<()> {
        self.console.blank()?;
        self.console.say(heading("Precision Settings"))?;
        self.console.say(format!(
            "Current default precision: {} decimal places",
            self.precision
        ))?;
        self.console
            .say(dim("Note: Applies to every conversion in this session"))?;

        self.console.blank()?;
        if !self.console.confirm("Change default precision? (y/n): ")? {
            return Ok(());
        }

        let requested = self
            .console
            .read_int(&format!("Enter default precision (0-{}): ", Precision::MAX))?;
        match Precision::new(requested) {
            Ok(precision) => {
                log::debug!("precision {} -> {}", self.precision, precision);
                self.precision = precision;
                self.console.say(success(&format!(
                    "Default precision set to {} decimal places.",
                    precision
                )))?;
                self.console
                    .say(dim("(Note: This setting persists for this session only)"))?;
            }
            Err(e) => {
                self.console
                    .say(error(&format!("{}. Keeping current setting.", e)))?;
            }
        }
        Ok(())
    }

    pub(crate) fn unit_reference(&mut self) -> Result<()> {
        self.console.blank()?;
        self.console.say(heading("Unit Reference"))?;
        for line in unit_table().to_string().lines() {
            self.console.say(format!("  {}", line))?;
        }

        self.console.blank()?;
        self.console.say("Conversion Factors:")?;
        for line in factor_lines() {
            self.console.say(line)?;
        }
        Ok(())
    }

    pub(crate) fn about(&mut self) -> Result<()> {
        self.console.blank()?;
        self.console.say(heading("About Weight Converter"))?;
        self.console
            .say(format!("Version: {}", env!("CARGO_PKG_VERSION")))?;
        self.console.say("Features:")?;
        for feature in FEATURES {
            self.console.say(format!("- {}", feature))?;
        }
        self.console.blank()?;
        self.console
            .say(dim("A self-contained interactive tool; nothing is saved between runs."))?;
        Ok(())
    }

    fn record(&mut self, entry: String) {
        log::debug!("converted: {}", entry);
        self.history.push(entry);
    }
}
