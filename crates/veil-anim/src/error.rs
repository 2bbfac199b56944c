//! Error types for configuration loading and stylesheet attachment.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a transition configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read transition config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for `TransitionConfig`.
    #[error("failed to parse transition config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors reported by a [`StylesheetHost`](crate::component::StylesheetHost)
/// when attaching the transition stylesheet.
#[derive(Error, Debug)]
pub enum StylesheetError {
    /// No stylesheet resource with the given name exists.
    #[error("stylesheet {0:?} not found")]
    NotFound(String),

    /// The stylesheet exists but could not be attached to the document.
    #[error("failed to attach stylesheet {name:?}: {reason}")]
    Attach { name: String, reason: String },
}
