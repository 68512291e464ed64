//! Momentum thresholds written right after the family name.
//!
//! Single-object seeds carry one threshold (`L1_SingleMu22`). Multi-object
//! seeds carry either one threshold shared by all legs (`L1_DoubleMu0_SQ`)
//! or one per leg (`L1_DoubleMu_15_7`, `L1_TripleMu_5_3p5_2p5`). A leading
//! `_` before the first threshold is optional. The threshold block must be
//! followed by the end of the name or by `_<letters>`; thresholds with
//! something glued to them (`L1_SingleMu6er1p5`) are not recognised.

use super::shared_family;
use crate::seed::decode_number;
use once_cell::sync::Lazy;
use regex::Regex;

static SINGLE_PATTERN: Lazy<Regex> = Lazy::new(|| threshold_pattern(1));
static DOUBLE_PATTERN: Lazy<Regex> = Lazy::new(|| threshold_pattern(2));
static TRIPLE_PATTERN: Lazy<Regex> = Lazy::new(|| threshold_pattern(3));
static QUAD_PATTERN: Lazy<Regex> = Lazy::new(|| threshold_pattern(4));

const NUMBER: &str = r"(\d+p\d+|\d+)";

/// Pattern for the text following the family name.
fn threshold_pattern(legs: usize) -> Regex {
    let per_leg: String = (1..legs).map(|_| format!("_{NUMBER}")).collect();
    let tail = if per_leg.is_empty() {
        r"(?:$|_[a-zA-Z]+)".to_string()
    } else {
        format!(r"(?:$|{per_leg}|_[a-zA-Z]+)")
    };
    Regex::new(&format!(r"^_*?{NUMBER}{tail}")).expect("valid threshold pattern")
}

/// Number of trigger objects a seed family requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplicity {
    Single,
    Double,
    Triple,
    Quad,
}

impl Multiplicity {
    /// Detected from the family name, e.g. `L1_DoubleEG` or `L1_QuadJet`.
    pub fn of_family(family: &str) -> Self {
        let lowered = family.to_lowercase();
        if lowered.contains("double") {
            Self::Double
        } else if lowered.contains("triple") {
            Self::Triple
        } else if lowered.contains("quad") {
            Self::Quad
        } else {
            Self::Single
        }
    }

    pub fn legs(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
            Self::Quad => 4,
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Single => &SINGLE_PATTERN,
            Self::Double => &DOUBLE_PATTERN,
            Self::Triple => &TRIPLE_PATTERN,
            Self::Quad => &QUAD_PATTERN,
        }
    }
}

/// Thresholds found after the family name.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    /// One entry per leg; legs not written in the name are `None`.
    pub values: Vec<Option<f64>>,
    /// Byte offset where the threshold block ends.
    end: usize,
}

enum Shape {
    /// Only the first threshold is given.
    Shared(f64),
    /// Every leg has its own threshold.
    PerLeg(Vec<f64>),
}

impl Thresholds {
    fn shape(&self) -> Option<Shape> {
        let (first, rest) = self.values.split_first()?;
        let first = (*first)?;
        if rest.iter().all(Option::is_none) {
            Some(Shape::Shared(first))
        } else if rest.iter().all(Option::is_some) {
            let mut per_leg = vec![first];
            per_leg.extend(rest.iter().flatten());
            Some(Shape::PerLeg(per_leg))
        } else {
            None
        }
    }
}

/// Parse the thresholds of `name`, which must start with `family`.
pub fn parse_thresholds(name: &str, family: &str) -> Option<Thresholds> {
    let multiplicity = Multiplicity::of_family(family);
    let suffix = name.strip_prefix(family)?;
    let captures = multiplicity.pattern().captures(suffix)?;

    let mut values = Vec::with_capacity(multiplicity.legs());
    let mut end = family.len();
    for group in 1..=multiplicity.legs() {
        match captures.get(group) {
            Some(found) => {
                values.push(decode_number(found.as_str()));
                end = family.len() + found.end();
            }
            None => values.push(None),
        }
    }

    Some(Thresholds { values, end })
}

/// The name with its threshold block removed.
fn remainder(name: &str, family: &str, thresholds: Option<&Thresholds>) -> String {
    match thresholds {
        Some(thresholds) => format!("{family}{}", &name[thresholds.end..]),
        None => name.to_string(),
    }
}

/// Every leg at least as high and one leg strictly higher.
fn dominates(seed: &[f64], other: &[f64]) -> bool {
    seed.len() == other.len()
        && seed.iter().zip(other).all(|(s, o)| s >= o)
        && seed.iter().zip(other).any(|(s, o)| s > o)
}

pub(super) fn is_tighter(seed: &str, other: &str) -> bool {
    let Some(family) = shared_family(seed, other) else {
        return false;
    };

    let seed_thresholds = parse_thresholds(seed, &family);
    let other_thresholds = parse_thresholds(other, &family);
    if remainder(seed, &family, seed_thresholds.as_ref())
        != remainder(other, &family, other_thresholds.as_ref())
    {
        return false;
    }

    let (Some(seed_thresholds), Some(other_thresholds)) = (seed_thresholds, other_thresholds)
    else {
        return false;
    };

    if Multiplicity::of_family(&family) == Multiplicity::Single {
        return match (seed_thresholds.values[0], other_thresholds.values[0]) {
            (Some(seed_pt), Some(other_pt)) => seed_pt > other_pt,
            _ => false,
        };
    }

    match (seed_thresholds.shape(), other_thresholds.shape()) {
        (Some(Shape::Shared(seed_pt)), Some(Shape::Shared(other_pt))) => seed_pt > other_pt,
        (Some(Shape::PerLeg(seed_pts)), Some(Shape::PerLeg(other_pts))) => {
            dominates(&seed_pts, &other_pts)
        }
        _ => false,
    }
}
