use super::shared_family;

/// Muon reconstruction quality tier, ordered loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quality {
    Open,
    Double,
    Single,
}

const QUALITY_TOKENS: [(&str, Quality); 3] = [
    ("_SQ", Quality::Single),
    ("_DQ", Quality::Double),
    ("_OQ", Quality::Open),
];

/// Muon seed families the quality criterion applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuonFamily {
    Single,
    Multi,
}

impl MuonFamily {
    pub fn of_family(family: &str) -> Option<Self> {
        let lowered = family.to_lowercase();
        if lowered.contains("singlemu") {
            Some(Self::Single)
        } else if ["doublemu", "triplemu", "quadmu"]
            .iter()
            .any(|kind| lowered.contains(kind))
        {
            Some(Self::Multi)
        } else {
            None
        }
    }

    /// Quality implied when the name carries no quality token.
    pub fn default_quality(self) -> Quality {
        match self {
            Self::Single => Quality::Single,
            Self::Multi => Quality::Double,
        }
    }

    /// Tiers `name` carries, falling back to the family default.
    fn tiers(self, name: &str) -> Vec<Quality> {
        let explicit = parse_quality(name);
        if explicit.is_empty() {
            vec![self.default_quality()]
        } else {
            explicit
        }
    }
}

/// Quality tokens carried by `name`, tightest first.
///
/// Tokens are plain substrings and a name may mention several tiers
/// (`_SQ_OQ`). Each tier counts: such a name backs up anything looser than
/// its tightest tier and is backed up by anything tighter than its loosest.
pub fn parse_quality(name: &str) -> Vec<Quality> {
    QUALITY_TOKENS
        .iter()
        .filter(|(token, _)| name.contains(token))
        .map(|(_, quality)| *quality)
        .collect()
}

/// `name` without its family name and without any quality token.
fn residual(name: &str, family: &str) -> String {
    QUALITY_TOKENS
        .iter()
        .fold(name.replace(family, ""), |rest, (token, _)| rest.replace(token, ""))
}

pub(super) fn is_tighter(seed: &str, other: &str) -> bool {
    let Some(family) = shared_family(seed, other) else {
        return false;
    };
    let Some(muons) = MuonFamily::of_family(&family) else {
        return false;
    };

    let seed_tiers = muons.tiers(seed);
    let other_tiers = muons.tiers(other);
    if seed_tiers == other_tiers {
        return false;
    }

    let (Some(tightest), Some(loosest)) = (seed_tiers.iter().max(), other_tiers.iter().min())
    else {
        return false;
    };

    tightest > loosest && residual(seed, &family) == residual(other, &family)
}
