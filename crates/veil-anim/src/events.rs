//! Playback events for observing the class-mutation timeline.
//!
//! The scheduler pushes an event for each step of a run. Observers poll the
//! queue after driving the lane:
//!
//! ```ignore
//! scheduler.play();
//! scheduler.update(0.2);
//! for event in scheduler.drain_events() {
//!     if let PlaybackEvent::BaseClassApplied { class } = event {
//!         println!("swapped to {class}");
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Event emitted when a scheduler's class-mutation timeline advances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaybackEvent {
    /// The main track applied its initial-state classes and began playing.
    Started,
    /// The delayed swap fired and the per-duration base class was applied.
    BaseClassApplied {
        /// The base class that was added, e.g. `"TransitionBase5"`.
        class: String,
    },
    /// The cleanup timer fired; all applied classes were removed.
    Completed,
    /// The run was cancelled and its classes reverted before completion.
    Stopped,
    /// The fade-out track applied its class after the configured delay.
    FadeOutApplied {
        /// The duration-paired fade-out class, e.g. `"FadeOut0_5"`.
        class: String,
    },
}

impl PlaybackEvent {
    /// The class this event added, if it added one.
    pub fn applied_class(&self) -> Option<&str> {
        match self {
            Self::BaseClassApplied { class } | Self::FadeOutApplied { class } => Some(class),
            _ => None,
        }
    }

    /// Check if this event ends a main-track run (naturally or by cancellation).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Stopped)
    }
}

/// Queue for collecting playback events during update cycles.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<PlaybackEvent>,
}

impl EventQueue {
    /// Create a new empty event queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event onto the queue.
    pub fn push(&mut self, event: PlaybackEvent) {
        self.events.push_back(event);
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get the number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Pop the next event from the queue.
    pub fn pop(&mut self) -> Option<PlaybackEvent> {
        self.events.pop_front()
    }

    /// Peek at the next event without removing it.
    pub fn peek(&self) -> Option<&PlaybackEvent> {
        self.events.front()
    }

    /// Drain all events from the queue, returning an iterator.
    pub fn drain(&mut self) -> impl Iterator<Item = PlaybackEvent> + '_ {
        self.events.drain(..)
    }

    /// Clear all pending events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
