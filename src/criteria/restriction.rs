use super::{shared_family, single_match, whole_match, Cut, Token};
use crate::seed::decode_number;
use once_cell::sync::Lazy;
use regex::Regex;

static ETA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"er(\d+p\d+|\d+)").expect("valid eta restriction pattern"));
static MAX_SEPARATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"dR_Max(\d+p\d+|\d+)").expect("valid dR_Max pattern"));
static MIN_SEPARATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"dR_Min(\d+p\d+|\d+)").expect("valid dR_Min pattern"));

/// Single-valued restrictions: `er<value>`, `dR_Max<value>`, `dR_Min<value>`.
///
/// An explicit, positive restriction is always tighter than none at all.
/// Between two explicit values, eta and dR_Max tighten downwards while
/// dR_Min tightens upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restriction {
    Eta,
    MaxSeparation,
    MinSeparation,
}

impl Restriction {
    fn pattern(self) -> &'static Regex {
        match self {
            Self::Eta => &ETA_PATTERN,
            Self::MaxSeparation => &MAX_SEPARATION_PATTERN,
            Self::MinSeparation => &MIN_SEPARATION_PATTERN,
        }
    }

    /// Locate this restriction in `name`. A malformed value parses as `None`.
    pub fn parse(self, name: &str) -> Cut<Token<Option<f64>>> {
        single_match(self.pattern(), name).map(|captures| Token {
            range: whole_match(&captures),
            value: captures.get(1).and_then(|value| decode_number(value.as_str())),
        })
    }

    fn value_is_tighter(self, seed: f64, other: f64) -> bool {
        match self {
            Self::Eta | Self::MaxSeparation => seed < other,
            Self::MinSeparation => seed > other,
        }
    }

    pub fn is_tighter(self, seed: &str, other: &str) -> bool {
        if shared_family(seed, other).is_none() {
            return false;
        }

        let seed_cut = self.parse(seed);
        let other_cut = self.parse(other);
        if seed_cut.is_ambiguous() || other_cut.is_ambiguous() {
            return false;
        }
        if seed_cut.is_absent() && other_cut.is_absent() {
            return false;
        }
        if seed_cut.remainder(seed) != other_cut.remainder(other) {
            return false;
        }

        match (seed_cut.value().copied().flatten(), other_cut.value().copied().flatten()) {
            (Some(seed_value), Some(other_value)) => self.value_is_tighter(seed_value, other_value),
            (Some(seed_value), None) => other_cut.is_absent() && seed_value > 0.0,
            _ => false,
        }
    }
}
