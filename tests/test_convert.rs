//! Property checks for the converter and the weight validator

use rand::Rng;
use weightconv::cli::{Console, ScriptedLines};
use weightconv::convert::{convert, ConversionPair, WeightCheck, KG_TO_LBS, LBS_TO_KG, MAX_WEIGHT};

const SAMPLES: usize = 1000;

fn random_valid_weight(rng: &mut impl Rng) -> f64 {
    rng.gen_range(1e-6..=MAX_WEIGHT)
}

fn empty_console() -> Console<ScriptedLines, Vec<u8>> {
    Console::new(ScriptedLines::default(), Vec::new())
}

#[test]
fn test_lbs_to_kg_is_plain_multiplication() {
    let mut rng = rand::thread_rng();
    for _ in 0..SAMPLES {
        let w = random_valid_weight(&mut rng);
        assert_eq!(convert(w, LBS_TO_KG, true), w * 0.453592);
    }
}

#[test]
fn test_round_trip_lbs_kg_stays_close() {
    // The two published factors are not exact inverses, so allow a small relative drift
    let mut rng = rand::thread_rng();
    for _ in 0..SAMPLES {
        let w = random_valid_weight(&mut rng);
        let back = convert(convert(w, LBS_TO_KG, true), KG_TO_LBS, true);
        assert!(
            (back - w).abs() <= w * 1e-5,
            "round trip of {} drifted to {}",
            w,
            back
        );
    }
}

#[test]
fn test_standard_pairs_agree_with_reverse_pairs() {
    let pairs = ConversionPair::STANDARD;
    for (forward, reverse) in [(pairs[0], pairs[1]), (pairs[2], pairs[3]), (pairs[4], pairs[5])] {
        assert_eq!(forward.from, reverse.to);
        assert_eq!(forward.to, reverse.from);
        let back = reverse.apply(forward.apply(100.0));
        assert!((back - 100.0).abs() < 0.01, "{:?} -> {:?} gave {}", forward, reverse, back);
    }
}

#[test]
fn test_validator_accepts_every_weight_in_range() {
    let mut rng = rand::thread_rng();
    let mut console = empty_console();
    for _ in 0..SAMPLES {
        let w = random_valid_weight(&mut rng);
        assert!(console.is_valid_weight(w).unwrap(), "{} should be valid", w);
    }
    assert!(console.writer().is_empty(), "valid weights print nothing");
}

#[test]
fn test_validator_rejects_negative_and_unrealistic() {
    let mut rng = rand::thread_rng();
    let mut console = empty_console();
    for _ in 0..SAMPLES {
        let negative = -rng.gen_range(1e-6..1e6);
        let huge = MAX_WEIGHT + rng.gen_range(1e-3..1e6);
        assert_eq!(WeightCheck::classify(negative), WeightCheck::Negative);
        assert!(!console.is_valid_weight(negative).unwrap());
        assert!(!console.is_valid_weight(huge).unwrap());
    }
}

#[test]
fn test_validator_zero_depends_only_on_confirmation() {
    for (answer, expected) in [
        ("y", true),
        ("YES", true),
        (" yes ", true),
        ("n", false),
        ("no", false),
        ("", false),
        ("sure", false),
    ] {
        let mut console = Console::new(ScriptedLines::new([answer]), Vec::new());
        assert_eq!(
            console.is_valid_weight(0.0).unwrap(),
            expected,
            "answer {:?}",
            answer
        );
        assert_eq!(console.source().remaining(), 0);
    }
}
