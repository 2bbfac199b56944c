//! Class-driven UI transitions.
//!
//! This crate drives declarative visual transitions by mutating stylesheet
//! classes on linked UI elements over time: apply initial-state marker
//! classes, swap in a per-duration base class after a delay, and clean
//! everything up once the duration elapses, with an optional independent
//! fade-out timeline alongside.
//!
//! # Architecture
//!
//! ```text
//! TransitionScheduler (per element group)
//!   ├── main track: apply-initial → wait → apply-base → wait → remove-all
//!   ├── fade-out track: remove fade class → wait → apply fade class
//!   └── TimerLane: cooperative timers, cancelled as one group
//!
//! TransitionDuration
//!   └── ordinal-indexed tables: seconds, fade-out class, base class name
//! ```
//!
//! The actual rendering of the transitions is the stylesheet's business; this
//! crate only guarantees the class-mutation timeline, including that elements
//! never end up in a half-applied state across restarts and teardown.

pub mod component;
pub mod config;
pub mod duration;
pub mod elements;
pub mod error;
pub mod events;
pub mod lane;
pub mod scheduler;
pub mod types;

pub use component::{StylesheetHost, TRANSITION_STYLESHEET, UiAnimation};
pub use config::TransitionConfig;
pub use duration::{DURATION_COUNT, TRANSITION_BASE_CLASS, TransitionDuration};
pub use elements::{ClassList, ClassSet, LinkedElements};
pub use error::{ConfigError, StylesheetError};
pub use events::{EventQueue, PlaybackEvent};
pub use lane::TimerLane;
pub use scheduler::TransitionScheduler;
pub use types::{PlaybackState, TransitionState};
