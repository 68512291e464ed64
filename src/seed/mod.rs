//! Seed records and the name-level helpers every criterion builds on.
//!
//! A seed is one row of a prescale table: a trigger name such as
//! `L1_DoubleMu_15_7_SQ` together with its prescale value. The helpers in
//! this module are small and pure:
//!
//! - [`basename`] reduces a name to its family (`L1_DoubleMu`), the gate
//!   that decides whether two seeds are compared at all
//! - [`decode_number`] reads the `6p5`-style numeric literals embedded in names
//! - [`strip_token`] removes a cut's substring and the separator it leaves behind

mod basename;
mod number;

pub use basename::{basename, SEED_PREFIX};
pub use number::decode_number;

use std::ops::Range;

/// One row of a prescale table.
///
/// `name` is `None` when the table cell holding the name was empty; such
/// rows are never compared against anything and always end up as signal
/// seeds. `prescale` is `None` when the cell was blank or not a number; the
/// row still takes part in every name-based criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub row: usize,
    pub name: Option<String>,
    pub prescale: Option<u64>,
}

impl Seed {
    pub fn new(row: usize, name: impl Into<String>, prescale: u64) -> Self {
        Self {
            row,
            name: Some(name.into()),
            prescale: Some(prescale),
        }
    }

    /// A row whose name cell could not be read as a seed name.
    pub fn unnamed(row: usize, prescale: Option<u64>) -> Self {
        Self {
            row,
            name: None,
            prescale,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Build seeds from `(name, prescale)` pairs, numbering rows from zero.
pub fn seeds_from_pairs<'a, I>(pairs: I) -> Vec<Seed>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    pairs
        .into_iter()
        .enumerate()
        .map(|(row, (name, prescale))| Seed::new(row, name, prescale))
        .collect()
}

/// Remove `range` from `name` and tidy the separator left behind.
///
/// Removing `er1p5` from `L1_SingleMu5_er1p5` leaves a dangling `_`, and
/// removing it from `L1_DoubleMu0_er1p5_SQ` leaves `__`. Both are collapsed
/// so the remainder can be compared with a name that never had the token.
pub fn strip_token(name: &str, range: Range<usize>) -> String {
    let mut stripped = String::with_capacity(name.len());
    stripped.push_str(&name[..range.start]);
    let tail = &name[range.end..];
    if stripped.ends_with('_') && (tail.starts_with('_') || tail.is_empty()) {
        stripped.pop();
    }
    stripped.push_str(tail);
    stripped
}
