//! Judgment value object for the fundamental AHP scale (1/9 to 9).

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fundamental scale in canonical ascending order.
const SCALE: [f64; 17] = [
    1.0 / 9.0,
    1.0 / 8.0,
    1.0 / 7.0,
    1.0 / 6.0,
    1.0 / 5.0,
    1.0 / 4.0,
    1.0 / 3.0,
    1.0 / 2.0,
    1.0,
    2.0,
    3.0,
    4.0,
    5.0,
    6.0,
    7.0,
    8.0,
    9.0,
];

const SCALE_LABELS: [&str; 17] = [
    "1/9", "1/8", "1/7", "1/6", "1/5", "1/4", "1/3", "1/2", "1", "2", "3", "4", "5", "6", "7",
    "8", "9",
];

/// A pairwise judgment: one of the 17 fixed magnitudes of the fundamental
/// scale. Values below 1 express inferiority of the row criterion, 1 equal
/// importance, values above 1 superiority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct JudgmentValue {
    index: usize,
}

impl JudgmentValue {
    /// Equal importance (the scale value 1).
    pub const EQUAL: Self = Self { index: 8 };

    /// Number of members in the fundamental scale.
    pub const COUNT: usize = 17;

    /// Returns the scale member closest to `raw`.
    ///
    /// Ties resolve to the earlier member scanning the scale in ascending
    /// order. Total over all inputs; a non-finite `raw` snaps to the first
    /// member.
    pub fn nearest(raw: f64) -> Self {
        let mut index = 0;
        let mut best = (SCALE[0] - raw).abs();
        for (i, member) in SCALE.iter().enumerate().skip(1) {
            let diff = (member - raw).abs();
            if diff < best {
                best = diff;
                index = i;
            }
        }
        Self { index }
    }

    /// Returns the scale member closest to the exact reciprocal of this value.
    pub fn reciprocal(&self) -> Self {
        Self::nearest(1.0 / self.value())
    }

    /// Returns the numeric magnitude.
    pub fn value(&self) -> f64 {
        SCALE[self.index]
    }

    /// Returns the display label, using fraction notation below 1.
    pub fn label(&self) -> &'static str {
        SCALE_LABELS[self.index]
    }

    /// Returns all scale members in canonical ascending order.
    pub fn all() -> [Self; Self::COUNT] {
        std::array::from_fn(|index| Self { index })
    }

    /// Returns true if the row criterion is judged more important.
    pub fn is_superior(&self) -> bool {
        self.index > 8
    }

    /// Returns true if the row criterion is judged less important.
    pub fn is_inferior(&self) -> bool {
        self.index < 8
    }
}

impl Default for JudgmentValue {
    fn default() -> Self {
        Self::EQUAL
    }
}

impl From<f64> for JudgmentValue {
    fn from(raw: f64) -> Self {
        Self::nearest(raw)
    }
}

impl From<JudgmentValue> for f64 {
    fn from(judgment: JudgmentValue) -> f64 {
        judgment.value()
    }
}

impl fmt::Display for JudgmentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
