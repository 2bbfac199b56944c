//! Core types for the transition system:
//! - `TransitionState`: Enum of marker classes describing an element's initial visual state
//! - `PlaybackState`: Current state of a scheduler's main track

use serde::{Deserialize, Serialize};

/// A single visual-state marker that can be applied as an initial transition state.
///
/// Each variant maps to exactly one stylesheet class whose name equals the
/// variant's symbolic name with no transformation. The paired stylesheet is
/// expected to define the corresponding opacity/translate/scale/rotate rule
/// for every class listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionState {
    Opacity0,
    Opacity1,
    Translate0,
    TranslateLeft,
    TranslateLeftX,
    TranslateUp,
    TranslateUpX,
    TranslateRight,
    TranslateRightX,
    TranslateDown,
    TranslateDownX,
    Scale0,
    Scale0_5,
    Scale0_9,
    Scale1,
    Scale1_01,
    Scale1_1,
    Scale1_5,
    Scale2,
    Rotate0,
    Rotate45,
    Rotate90,
    RotateMinus45,
    RotateMinus90,
    Rotate180,
}

impl TransitionState {
    /// The stylesheet class this state toggles.
    ///
    /// A compact total match rather than any name introspection, so renaming a
    /// variant without updating this table is a compile error, not a silent
    /// class-name change.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Opacity0 => "Opacity0",
            Self::Opacity1 => "Opacity1",
            Self::Translate0 => "Translate0",
            Self::TranslateLeft => "TranslateLeft",
            Self::TranslateLeftX => "TranslateLeftX",
            Self::TranslateUp => "TranslateUp",
            Self::TranslateUpX => "TranslateUpX",
            Self::TranslateRight => "TranslateRight",
            Self::TranslateRightX => "TranslateRightX",
            Self::TranslateDown => "TranslateDown",
            Self::TranslateDownX => "TranslateDownX",
            Self::Scale0 => "Scale0",
            Self::Scale0_5 => "Scale0_5",
            Self::Scale0_9 => "Scale0_9",
            Self::Scale1 => "Scale1",
            Self::Scale1_01 => "Scale1_01",
            Self::Scale1_1 => "Scale1_1",
            Self::Scale1_5 => "Scale1_5",
            Self::Scale2 => "Scale2",
            Self::Rotate0 => "Rotate0",
            Self::Rotate45 => "Rotate45",
            Self::Rotate90 => "Rotate90",
            Self::RotateMinus45 => "RotateMinus45",
            Self::RotateMinus90 => "RotateMinus90",
            Self::Rotate180 => "Rotate180",
        }
    }
}

/// Current state of a scheduler's main transition track.
///
/// This is the entire state-machine memory: exactly one delayed swap plus its
/// cleanup timer may be outstanding while `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// No main-track sequence is in flight; no marker classes are applied.
    Idle,
    /// Initial-state classes (and after the delay, the base class) are applied.
    Playing,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Idle
    }
}

impl PlaybackState {
    /// Check whether the main track is in flight.
    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_equals_symbolic_name() {
        assert_eq!(TransitionState::Opacity0.class_name(), "Opacity0");
        assert_eq!(TransitionState::TranslateLeft.class_name(), "TranslateLeft");
        assert_eq!(TransitionState::Scale0_5.class_name(), "Scale0_5");
        assert_eq!(TransitionState::Scale1_01.class_name(), "Scale1_01");
        assert_eq!(TransitionState::RotateMinus90.class_name(), "RotateMinus90");
        assert_eq!(TransitionState::Rotate180.class_name(), "Rotate180");
    }

    #[test]
    fn test_playback_state_default_is_idle() {
        assert_eq!(PlaybackState::default(), PlaybackState::Idle);
        assert!(!PlaybackState::Idle.is_playing());
        assert!(PlaybackState::Playing.is_playing());
    }

    #[test]
    fn test_transition_state_serialization() {
        let json = serde_json::to_string(&TransitionState::TranslateLeftX).unwrap();
        assert_eq!(json, "\"translate_left_x\"");

        let parsed: TransitionState = serde_json::from_str("\"opacity0\"").unwrap();
        assert_eq!(parsed, TransitionState::Opacity0);
    }
}
