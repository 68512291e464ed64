use super::{shared_family, single_match, whole_match, Cut, Token};
use once_cell::sync::Lazy;
use regex::Regex;

static ISOLATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Iso|LooseIso").expect("valid isolation pattern"));

/// Isolation requirement, ordered loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IsolationLevel {
    None,
    Loose,
    Tight,
}

/// Locate the isolation token in `name`.
pub fn parse_isolation(name: &str) -> Cut<Token<IsolationLevel>> {
    single_match(&ISOLATION_PATTERN, name).map(|captures| {
        let value = match &captures[0] {
            "LooseIso" => IsolationLevel::Loose,
            _ => IsolationLevel::Tight,
        };
        Token {
            range: whole_match(&captures),
            value,
        }
    })
}

/// Isolation is written inside the family name (`L1_SingleIsoEG28`), so the
/// family check runs on the names with the token already removed.
pub(super) fn is_tighter(seed: &str, other: &str) -> bool {
    let seed_cut = parse_isolation(seed);
    let other_cut = parse_isolation(other);
    if seed_cut.is_ambiguous() || other_cut.is_ambiguous() {
        return false;
    }
    if seed_cut.is_absent() && other_cut.is_absent() {
        return false;
    }

    let seed_rest = seed_cut.remainder(seed);
    let other_rest = other_cut.remainder(other);
    if shared_family(&seed_rest, &other_rest).is_none() || seed_rest != other_rest {
        return false;
    }

    let level = |cut: &Cut<Token<IsolationLevel>>| {
        cut.value().copied().unwrap_or(IsolationLevel::None)
    };
    level(&seed_cut) > level(&other_cut)
}
