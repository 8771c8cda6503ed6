//! Weight plausibility checks

/// Largest weight accepted without complaint
pub const MAX_WEIGHT: f64 = 10_000.0;

/// Outcome of checking a weight before conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightCheck {
    Valid,
    Negative,
    Unrealistic,
    /// Exactly zero; only valid once the user confirms it
    Zero,
}

impl WeightCheck {
    pub fn classify(weight: f64) -> Self {
        if weight < 0.0 {
            WeightCheck::Negative
        } else if weight > MAX_WEIGHT {
            WeightCheck::Unrealistic
        } else if weight == 0.0 {
            WeightCheck::Zero
        } else {
            WeightCheck::Valid
        }
    }

    /// Text shown for this outcome; for `Zero` it is the confirmation question
    pub fn message(&self) -> &'static str {
        match self {
            WeightCheck::Valid => "Weight accepted.",
            WeightCheck::Negative => "Weight cannot be negative. Please enter a positive number.",
            WeightCheck::Unrealistic => {
                "Weight seems unrealistic (>10,000). Please verify your input."
            }
            WeightCheck::Zero => {
                "Weight is zero. Is this correct? (Enter 'y' to confirm, 'n' to re-enter): "
            }
        }
    }
}

/// Parse a number typed by the user. Non-finite values count as parse failures.
pub fn parse_weight(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// True for a trimmed, case-insensitive "y" or "yes"
pub fn is_affirmative(response: &str) -> bool {
    matches!(response.trim().to_lowercase().as_str(), "y" | "yes")
}
