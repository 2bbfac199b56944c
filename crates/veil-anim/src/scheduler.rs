//! The transition scheduler: a per-element-group state machine that turns a
//! fixed configuration into a timed sequence of class mutations.
//!
//! The main track runs apply-initial → wait(delay) → apply-base →
//! wait(duration) → remove-all. The fade-out track is independent: it has no
//! playback flag and runs alongside the main track on the same timer lane.
//! Callers never block; `play()` and `stop()` return immediately and the
//! timed steps land on subsequent [`update`](TransitionScheduler::update)
//! ticks.
//!
//! # Usage
//!
//! ```ignore
//! use veil_anim::{ClassSet, TransitionConfig, TransitionScheduler};
//!
//! let elements = vec![ClassSet::new()];
//! let mut scheduler = TransitionScheduler::new(TransitionConfig::default(), elements);
//!
//! scheduler.play();
//! scheduler.update(0.016); // once per frame
//! ```

use tracing::debug;

use crate::config::TransitionConfig;
use crate::elements::{ClassSet, LinkedElements};
use crate::events::{EventQueue, PlaybackEvent};
use crate::lane::TimerLane;
use crate::types::PlaybackState;

/// Timed step on a scheduler's lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerTask {
    /// Main track: the pre-swap delay elapsed; apply the base class.
    SwapToBase,
    /// Main track: the duration elapsed; remove every applied class.
    Cleanup,
    /// Fade-out track: the delay elapsed; apply the fade-out class.
    ApplyFadeOut,
}

/// Scheduler for one linked element group, bound to a fixed configuration.
///
/// At most one main-track sequence is in flight at a time; a `play()` that
/// finds one running cancels and reverts it synchronously before starting
/// over, so classes never accumulate across overlapping runs.
pub struct TransitionScheduler<L: LinkedElements> {
    config: TransitionConfig,
    elements: L,
    lane: TimerLane<TimerTask>,
    state: PlaybackState,
    events: EventQueue,
}

impl<L: LinkedElements> TransitionScheduler<L> {
    /// Create a scheduler bound to `config` and the given element group.
    pub fn new(config: TransitionConfig, elements: L) -> Self {
        Self {
            config,
            elements,
            lane: TimerLane::new(),
            state: PlaybackState::Idle,
            events: EventQueue::new(),
        }
    }

    /// The configuration this scheduler was created with.
    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// Whether the main track is in flight.
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Current playback state of the main track.
    pub fn playback_state(&self) -> PlaybackState {
        self.state
    }

    /// The bound element group.
    pub fn elements(&self) -> &L {
        &self.elements
    }

    /// Mutable access to the bound element group.
    pub fn elements_mut(&mut self) -> &mut L {
        &mut self.elements
    }

    /// Number of timers outstanding on this scheduler's lane.
    pub fn pending_timers(&self) -> usize {
        self.lane.pending()
    }

    /// Drain all pending playback events.
    pub fn drain_events(&mut self) -> impl Iterator<Item = PlaybackEvent> + '_ {
        self.events.drain()
    }

    /// Start (or restart) the transition.
    ///
    /// With no elements bound this is a silent no-op: a transition with
    /// nothing to animate is not an error. With an empty initial-state list
    /// only the fade-out track runs. A call that finds the main track playing
    /// stops it synchronously first, cancelling every outstanding timer on
    /// the lane and reverting its classes, so no window exists where the old
    /// and new runs' timers are both alive.
    pub fn play(&mut self) {
        if self.elements.is_empty() {
            debug!("play with no linked elements, nothing to animate");
            return;
        }

        if self.config.fade_out {
            // Clean starting point even when the class was never applied; the
            // stray remove is kept so mutation traces stay stable.
            let fade_class = self.config.duration.fade_out_class();
            self.elements.for_each(&mut |el| el.remove_class(fade_class));
            self.lane.schedule(self.config.delay_s, TimerTask::ApplyFadeOut);
        }

        if self.config.initial_states.is_empty() {
            return;
        }

        if self.state.is_playing() {
            self.stop();
        }

        for initial in &self.config.initial_states {
            let class = initial.class_name();
            self.elements.for_each(&mut |el| el.add_class(class));
        }
        self.state = PlaybackState::Playing;
        self.lane.schedule(self.config.delay_s, TimerTask::SwapToBase);
        self.events.push(PlaybackEvent::Started);
        debug!(
            delay_s = self.config.delay_s,
            duration_s = self.config.duration.seconds(),
            "transition started"
        );
    }

    /// Cancel an in-flight run and revert its classes immediately.
    ///
    /// No-op when idle. Cancels every timer on this scheduler's lane, the
    /// fade-out apply included, since a fade-out and a cleanup timer may be
    /// concurrently alive under the same group. By the time this returns no
    /// element carries any of this scheduler's initial or base classes.
    pub fn stop(&mut self) {
        if !self.state.is_playing() {
            return;
        }

        self.lane.cancel_all();
        remove_applied_classes(&self.config, &mut self.elements);
        self.state = PlaybackState::Idle;
        self.events.push(PlaybackEvent::Stopped);
        debug!("transition stopped");
    }

    /// Advance the scheduler's lane by `dt_s` seconds, firing any steps that
    /// fall due. Call once per tick of the surrounding loop.
    pub fn update(&mut self, dt_s: f32) {
        let Self {
            config,
            elements,
            lane,
            state,
            events,
        } = self;

        lane.advance(dt_s, |lane, task| match task {
            TimerTask::SwapToBase => {
                let class = config.duration.base_class();
                elements.for_each(&mut |el| el.add_class(&class));
                lane.schedule(config.duration.seconds(), TimerTask::Cleanup);
                events.push(PlaybackEvent::BaseClassApplied { class });
            }
            TimerTask::Cleanup => {
                remove_applied_classes(config, &mut *elements);
                *state = PlaybackState::Idle;
                events.push(PlaybackEvent::Completed);
            }
            TimerTask::ApplyFadeOut => {
                let class = config.duration.fade_out_class();
                elements.for_each(&mut |el| el.add_class(class));
                events.push(PlaybackEvent::FadeOutApplied {
                    class: class.to_string(),
                });
            }
        });
    }
}

impl<L: LinkedElements> Drop for TransitionScheduler<L> {
    /// Teardown cancels outstanding timers and reverts classes so elements
    /// never leak stale markers past the scheduler's lifetime.
    fn drop(&mut self) {
        self.lane.cancel_all();
        if self.state.is_playing() {
            remove_applied_classes(&self.config, &mut self.elements);
            self.state = PlaybackState::Idle;
        }
    }
}

/// Remove every initial-state class and the base class from every element.
/// Safe even when the base class was never added; removes are idempotent.
fn remove_applied_classes(config: &TransitionConfig, elements: &mut dyn LinkedElements) {
    for initial in &config.initial_states {
        let class = initial.class_name();
        elements.for_each(&mut |el| el.remove_class(class));
    }
    let base = config.duration.base_class();
    elements.for_each(&mut |el| el.remove_class(&base));
}

static_assertions::assert_impl_all!(TransitionScheduler<Vec<ClassSet>>: Send);
