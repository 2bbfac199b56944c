//! The duration table: a fixed, ordered mapping from a duration enumerant to
//! a seconds value and a fade-out class name.
//!
//! The enumerant's ordinal position is the sole key into both parallel tables
//! and into the base-transition class name (`"TransitionBase" + index`), so
//! the paired stylesheet can define one rule set per duration slot. Reordering
//! or inserting variants changes those class names and breaks paired
//! stylesheets; see `docs/stylesheet-contract.md`.

use serde::{Deserialize, Serialize};
use static_assertions::const_assert_eq;

/// Number of supported transition durations.
pub const DURATION_COUNT: usize = 12;

/// Prefix of the per-duration base transition class.
pub const TRANSITION_BASE_CLASS: &str = "TransitionBase";

/// Seconds value for each duration, indexed by ordinal.
const SECONDS: &[f32] = &[
    0.05, 0.1, 0.25, 0.5, 0.75, 1.0, 1.5, 2.0, 2.5, 3.0, 5.0, 10.0,
];

/// Fade-out class for each duration, indexed by ordinal.
const FADE_OUT_CLASSES: &[&str] = &[
    "FadeOut0_05",
    "FadeOut0_1",
    "FadeOut0_25",
    "FadeOut0_5",
    "FadeOut0_75",
    "FadeOut1",
    "FadeOut1_5",
    "FadeOut2",
    "FadeOut2_5",
    "FadeOut3",
    "FadeOut5",
    "FadeOut10",
];

// Adding a duration variant requires adding one entry to each table at the
// same index. Enforced here rather than at lookup time.
const_assert_eq!(SECONDS.len(), DURATION_COUNT);
const_assert_eq!(FADE_OUT_CLASSES.len(), DURATION_COUNT);
const_assert_eq!(TransitionDuration::ALL.len(), DURATION_COUNT);

/// One of the twelve supported transition durations, 0.05 s through 10 s.
///
/// Ordinal order is part of the wire contract with the stylesheet and must
/// never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionDuration {
    Ms50,
    Ms100,
    Ms250,
    Ms500,
    Ms750,
    Ms1000,
    Ms1500,
    Ms2000,
    Ms2500,
    Ms3000,
    Ms5000,
    Ms10000,
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self::Ms500
    }
}

impl TransitionDuration {
    /// All durations in ordinal order.
    pub const ALL: [TransitionDuration; DURATION_COUNT] = [
        Self::Ms50,
        Self::Ms100,
        Self::Ms250,
        Self::Ms500,
        Self::Ms750,
        Self::Ms1000,
        Self::Ms1500,
        Self::Ms2000,
        Self::Ms2500,
        Self::Ms3000,
        Self::Ms5000,
        Self::Ms10000,
    ];

    /// Zero-based ordinal of this duration.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wall-clock length of this duration in seconds.
    pub fn seconds(self) -> f32 {
        SECONDS[self.index()]
    }

    /// The fade-out class paired with this duration.
    pub fn fade_out_class(self) -> &'static str {
        FADE_OUT_CLASSES[self.index()]
    }

    /// The base transition class for this duration slot,
    /// e.g. index 3 yields `"TransitionBase3"`.
    pub fn base_class(self) -> String {
        format!("{TRANSITION_BASE_CLASS}{}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_index_resolves_in_both_tables() {
        for (i, duration) in TransitionDuration::ALL.iter().enumerate() {
            assert_eq!(duration.index(), i);
            assert!(duration.seconds() > 0.0);
            assert!(!duration.fade_out_class().is_empty());
            assert_eq!(duration.base_class(), format!("TransitionBase{i}"));
        }
    }

    #[test]
    fn test_tables_are_ordered_ascending() {
        for pair in SECONDS.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(TransitionDuration::Ms50.seconds(), 0.05);
        assert_eq!(TransitionDuration::Ms50.fade_out_class(), "FadeOut0_05");
        assert_eq!(TransitionDuration::Ms1000.index(), 5);
        assert_eq!(TransitionDuration::Ms1000.seconds(), 1.0);
        assert_eq!(TransitionDuration::Ms1000.fade_out_class(), "FadeOut1");
        assert_eq!(TransitionDuration::Ms10000.seconds(), 10.0);
        assert_eq!(TransitionDuration::Ms10000.fade_out_class(), "FadeOut10");
    }

    #[test]
    fn test_default_is_half_second() {
        assert_eq!(TransitionDuration::default(), TransitionDuration::Ms500);
        assert_eq!(TransitionDuration::default().seconds(), 0.5);
    }
}
