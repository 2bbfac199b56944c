//! Transition configuration.
//!
//! A `TransitionConfig` is fixed for the lifetime of the scheduler it is bound
//! to: the initial-state classes to apply, the duration slot, the pre-swap
//! delay, and whether an independent fade-out track runs alongside.
//!
//! Configs can be built in code or loaded from TOML:
//!
//! ```toml
//! initial_states = ["opacity0", "translate_left"]
//! duration = "ms1000"
//! delay_s = 0.2
//! fade_out = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::duration::TransitionDuration;
use crate::error::ConfigError;
use crate::types::TransitionState;

/// Configuration for one transition scheduler instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Initial-state classes applied at the start of the main track.
    /// May be empty, which makes the main track a no-op (fade-out-only usage).
    pub initial_states: Vec<TransitionState>,
    /// Duration slot; selects the seconds value, the base class and the
    /// fade-out class.
    pub duration: TransitionDuration,
    /// Delay in seconds before the base-class swap (and before the fade-out
    /// class is applied). Zero is valid.
    pub delay_s: f32,
    /// Whether to run the independent fade-out track on every `play()`.
    pub fade_out: bool,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            initial_states: vec![TransitionState::Opacity0],
            duration: TransitionDuration::default(),
            delay_s: 0.0,
            fade_out: false,
        }
    }
}

impl TransitionConfig {
    /// Create a config with the given initial states and defaults otherwise.
    pub fn new(initial_states: Vec<TransitionState>) -> Self {
        Self {
            initial_states,
            ..Self::default()
        }
    }

    /// Set the duration slot.
    pub fn with_duration(mut self, duration: TransitionDuration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the pre-swap delay in seconds.
    pub fn with_delay_s(mut self, delay_s: f32) -> Self {
        self.delay_s = delay_s;
        self
    }

    /// Enable or disable the fade-out track.
    pub fn with_fade_out(mut self, fade_out: bool) -> Self {
        self.fade_out = fade_out;
        self
    }

    /// Parse a config from a TOML string. Missing fields take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_component_defaults() {
        let config = TransitionConfig::default();
        assert_eq!(config.initial_states, vec![TransitionState::Opacity0]);
        assert_eq!(config.duration, TransitionDuration::Ms500);
        assert_eq!(config.delay_s, 0.0);
        assert!(!config.fade_out);
    }

    #[test]
    fn test_builders() {
        let config = TransitionConfig::new(vec![
            TransitionState::Opacity0,
            TransitionState::TranslateLeft,
        ])
        .with_duration(TransitionDuration::Ms1000)
        .with_delay_s(0.2)
        .with_fade_out(true);

        assert_eq!(config.initial_states.len(), 2);
        assert_eq!(config.duration, TransitionDuration::Ms1000);
        assert_eq!(config.delay_s, 0.2);
        assert!(config.fade_out);
    }

    #[test]
    fn test_from_toml_str() {
        let config = TransitionConfig::from_toml_str(
            r#"
            initial_states = ["opacity0", "translate_left"]
            duration = "ms1000"
            delay_s = 0.2
            "#,
        )
        .unwrap();

        assert_eq!(
            config.initial_states,
            vec![TransitionState::Opacity0, TransitionState::TranslateLeft]
        );
        assert_eq!(config.duration, TransitionDuration::Ms1000);
        assert_eq!(config.delay_s, 0.2);
        assert!(!config.fade_out);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TransitionConfig::from_toml_str("").unwrap();
        assert_eq!(config, TransitionConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let err = TransitionConfig::from_toml_str("duration = \"forever\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
