//! Backup-seed criteria.
//!
//! Each criterion answers one question for an ordered pair of seeds: is
//! `seed` a strictly tighter variant of `other` along this one cut, with
//! everything else in the two names identical? The set of criteria is
//! closed, so it is modelled as an enum and evaluated from [`ALL_CRITERIA`]
//! in a fixed order.
//!
//! The cuts live inside the seed names as small embedded grammars:
//!
//! | criterion        | token in the name              | tighter when          |
//! |------------------|--------------------------------|-----------------------|
//! | prescale         | (prescale column)              | higher prescale       |
//! | pT               | `SingleMu7`, `DoubleMu_15_7`   | higher threshold(s)   |
//! | eta restriction  | `er2p1`                        | smaller value         |
//! | dR_Max           | `dR_Max1p6`                    | smaller value         |
//! | dR_Min           | `dR_Min0p4`                    | larger value          |
//! | MassXtoY         | `Mass8to14`                    | narrower window       |
//! | muon quality     | `_SQ`, `_DQ`, `_OQ`            | SQ > DQ > OQ          |
//! | isolation        | `Iso`, `LooseIso`              | Iso > LooseIso > none |
//!
//! None of the criteria ever fail: ambiguous names, malformed numbers and
//! mismatched shapes all produce a negative result.

mod isolation;
mod mass;
mod quality;
mod restriction;
mod threshold;

pub use isolation::{parse_isolation, IsolationLevel};
pub use mass::{parse_mass_window, MassWindow};
pub use quality::{parse_quality, MuonFamily, Quality};
pub use restriction::Restriction;
pub use threshold::{parse_thresholds, Multiplicity, Thresholds};

use crate::seed::{basename, strip_token};
use regex::{Captures, Regex};
use std::fmt;
use std::ops::Range;

/// A single backup-seed criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Prescale,
    Threshold,
    EtaRestriction,
    MaxSeparation,
    MinSeparation,
    MassWindow,
    MuonQuality,
    Isolation,
}

/// Every criterion, in evaluation order.
pub const ALL_CRITERIA: [Criterion; 8] = [
    Criterion::Prescale,
    Criterion::Threshold,
    Criterion::EtaRestriction,
    Criterion::MaxSeparation,
    Criterion::MinSeparation,
    Criterion::MassWindow,
    Criterion::MuonQuality,
    Criterion::Isolation,
];

impl Criterion {
    /// Label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Prescale => "prescale",
            Self::Threshold => "pT",
            Self::EtaRestriction => "eta restriction",
            Self::MaxSeparation => "dR_Max",
            Self::MinSeparation => "dR_Min",
            Self::MassWindow => "MassXtoY",
            Self::MuonQuality => "muon quality",
            Self::Isolation => "isolation",
        }
    }

    /// Check whether `seed` is a backup to `other` under this criterion.
    ///
    /// A missing prescale on either side only disables [`Criterion::Prescale`].
    pub fn evaluate(
        self,
        seed: &str,
        seed_prescale: Option<u64>,
        other: &str,
        other_prescale: Option<u64>,
    ) -> CriterionResult {
        let is_backup = match self {
            Self::Prescale => {
                seed == other
                    && matches!(
                        (seed_prescale, other_prescale),
                        (Some(seed_ps), Some(other_ps)) if seed_ps > other_ps
                    )
            }
            Self::Threshold => threshold::is_tighter(seed, other),
            Self::EtaRestriction => Restriction::Eta.is_tighter(seed, other),
            Self::MaxSeparation => Restriction::MaxSeparation.is_tighter(seed, other),
            Self::MinSeparation => Restriction::MinSeparation.is_tighter(seed, other),
            Self::MassWindow => mass::is_tighter(seed, other),
            Self::MuonQuality => quality::is_tighter(seed, other),
            Self::Isolation => isolation::is_tighter(seed, other),
        };

        if is_backup {
            CriterionResult::backup_to(other, self)
        } else {
            CriterionResult::negative()
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one criterion for one ordered pair of seeds.
///
/// `signal_seed` and `criterion` are set exactly when `is_backup` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriterionResult {
    pub is_backup: bool,
    pub signal_seed: Option<String>,
    pub criterion: Option<Criterion>,
}

impl CriterionResult {
    pub fn negative() -> Self {
        Self {
            is_backup: false,
            signal_seed: None,
            criterion: None,
        }
    }

    pub fn backup_to(signal_seed: &str, criterion: Criterion) -> Self {
        Self {
            is_backup: true,
            signal_seed: Some(signal_seed.to_string()),
            criterion: Some(criterion),
        }
    }
}

/// Parse state of a cut that may appear at most once in a name.
#[derive(Debug, Clone, PartialEq)]
pub enum Cut<T> {
    /// The name carries no such token, i.e. the default applies.
    Absent,
    Explicit(T),
    /// The token occurs more than once; the pair is not evaluated.
    Ambiguous,
}

impl<T> Cut<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Cut<U> {
        match self {
            Self::Absent => Cut::Absent,
            Self::Explicit(value) => Cut::Explicit(f(value)),
            Self::Ambiguous => Cut::Ambiguous,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous)
    }
}

/// A parsed token and where it sits in the name.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<T> {
    pub range: Range<usize>,
    pub value: T,
}

impl<T> Cut<Token<T>> {
    /// The name with this token removed.
    ///
    /// Ambiguous cuts are never stripped; callers reject them first.
    pub fn remainder(&self, name: &str) -> String {
        match self {
            Self::Explicit(token) => strip_token(name, token.range.clone()),
            Self::Absent | Self::Ambiguous => name.to_string(),
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Explicit(token) => Some(&token.value),
            Self::Absent | Self::Ambiguous => None,
        }
    }
}

/// Find the single occurrence of `pattern` in `name`.
pub(crate) fn single_match<'h>(pattern: &Regex, name: &'h str) -> Cut<Captures<'h>> {
    let mut found = pattern.captures_iter(name);
    match (found.next(), found.next()) {
        (None, _) => Cut::Absent,
        (Some(captures), None) => Cut::Explicit(captures),
        (Some(_), Some(_)) => Cut::Ambiguous,
    }
}

pub(crate) fn whole_match(captures: &Captures<'_>) -> Range<usize> {
    captures.get(0).map(|m| m.range()).unwrap_or_default()
}

/// The family both names belong to, if they share one.
pub(crate) fn shared_family(seed: &str, other: &str) -> Option<String> {
    let family = basename(seed)?;
    (basename(other)? == family).then_some(family)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<_> = ALL_CRITERIA.iter().map(|c| c.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), ALL_CRITERIA.len());
    }

    #[test]
    fn test_prescale_requires_identical_names() {
        let result =
            Criterion::Prescale.evaluate("L1_SingleMu5", Some(10), "L1_SingleMu5", Some(5));
        assert_eq!(
            result,
            CriterionResult::backup_to("L1_SingleMu5", Criterion::Prescale)
        );

        let reverse =
            Criterion::Prescale.evaluate("L1_SingleMu5", Some(5), "L1_SingleMu5", Some(10));
        assert!(!reverse.is_backup);

        let renamed =
            Criterion::Prescale.evaluate("L1_SingleMu5", Some(10), "L1_SingleMu7", Some(5));
        assert!(!renamed.is_backup);
    }

    #[test]
    fn test_missing_prescale_only_disables_prescale() {
        for (seed_prescale, other_prescale) in [(None, Some(5)), (Some(10), None), (None, None)] {
            let result = Criterion::Prescale.evaluate(
                "L1_SingleMu5",
                seed_prescale,
                "L1_SingleMu5",
                other_prescale,
            );
            assert!(!result.is_backup);
        }

        let threshold =
            Criterion::Threshold.evaluate("L1_SingleMu7", None, "L1_SingleMu5", Some(1));
        assert_eq!(
            threshold,
            CriterionResult::backup_to("L1_SingleMu5", Criterion::Threshold)
        );
    }

    #[test]
    fn test_negative_result_has_no_evidence() {
        let result =
            Criterion::Threshold.evaluate("L1_SingleMu5", Some(1), "L1_SingleMu7", Some(1));
        assert_eq!(result, CriterionResult::negative());
        assert!(result.signal_seed.is_none());
        assert!(result.criterion.is_none());
    }

    #[test]
    fn test_no_criterion_fires_on_self() {
        for name in [
            "L1_SingleMu7",
            "L1_SingleMu5_er1p5",
            "L1_DoubleMu_15_7_SQ",
            "L1_DoubleMu0_dR_Max1p6",
            "L1_DoubleMu4_OS_dR_Min0p4",
            "L1_DoubleMu0_Mass8to14",
            "L1_SingleIsoMu5",
            "L1_SingleMu7_OQ",
        ] {
            for criterion in ALL_CRITERIA {
                let result = criterion.evaluate(name, Some(3), name, Some(3));
                assert!(!result.is_backup, "{criterion} fired for {name} against itself");
            }
        }
    }

    #[test]
    fn test_different_families_never_compared() {
        for criterion in ALL_CRITERIA {
            let result =
                criterion.evaluate("L1_SingleEG30", Some(1), "L1_SingleMu5", Some(1));
            assert!(!result.is_backup);
        }
    }

    #[test]
    fn test_single_match_detects_ambiguity() {
        let pattern = Regex::new(r"er(\d+)").unwrap();
        assert!(single_match(&pattern, "L1_SingleMu5").is_absent());
        assert!(matches!(
            single_match(&pattern, "L1_SingleMu5er2"),
            Cut::Explicit(_)
        ));
        assert!(single_match(&pattern, "L1_Mu5er2_Tau5er2").is_ambiguous());
    }

    #[test]
    fn test_shared_family() {
        assert_eq!(
            shared_family("L1_SingleMu5", "L1_SingleMu7_OQ").as_deref(),
            Some("L1_SingleMu")
        );
        assert_eq!(shared_family("L1_SingleMu5", "L1_DoubleMu5"), None);
        assert_eq!(shared_family("SingleMu5", "SingleMu5"), None);
    }
}
