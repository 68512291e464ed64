use super::{shared_family, single_match, whole_match, Cut, Token};
use crate::seed::decode_number;
use once_cell::sync::Lazy;
use regex::Regex;

static MASS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Mass_*?(\d+p\d+|\d+)to(\d+p\d+|\d+)").expect("valid mass window pattern")
});

/// Invariant-mass window `Mass<low>to<high>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassWindow {
    pub low: f64,
    pub high: f64,
}

impl MassWindow {
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// Locate the mass window in `name`. Bounds that fail to decode give `None`.
pub fn parse_mass_window(name: &str) -> Cut<Token<Option<MassWindow>>> {
    single_match(&MASS_PATTERN, name).map(|captures| {
        let bound = |group: usize| captures.get(group).and_then(|m| decode_number(m.as_str()));
        let window = match (bound(1), bound(2)) {
            (Some(low), Some(high)) => Some(MassWindow { low, high }),
            _ => None,
        };
        Token {
            range: whole_match(&captures),
            value: window,
        }
    })
}

/// A narrower window is tighter; any window is tighter than none.
pub(super) fn is_tighter(seed: &str, other: &str) -> bool {
    if shared_family(seed, other).is_none() {
        return false;
    }

    let seed_cut = parse_mass_window(seed);
    let other_cut = parse_mass_window(other);
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
        (Some(seed_window), Some(other_window)) => seed_window.width() < other_window.width(),
        (Some(_), None) => other_cut.is_absent(),
        _ => false,
    }
}
