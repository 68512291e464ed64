/// Literal prefix carried by every seed name.
pub const SEED_PREFIX: &str = "L1_";

/// Reduce a seed name to its family name.
///
/// The prefix is removed, everything from the first `_` on is dropped, the
/// rest is cut at its first digit and the prefix is put back:
/// `L1_DoubleMu4p5_SQ_OS` becomes `L1_DoubleMu`. Names without the prefix
/// have no family.
pub fn basename(name: &str) -> Option<String> {
    let rest = name.strip_prefix(SEED_PREFIX)?;
    let family = rest.split('_').next().unwrap_or_default();
    let family = match family.find(|c: char| c.is_ascii_digit()) {
        Some(idx) => &family[..idx],
        None => family,
    };
    Some(format!("{SEED_PREFIX}{family}"))
}
