//! Component-level surface: setup, stylesheet attachment and the trigger
//! action.
//!
//! `UiAnimation` is the piece the surrounding framework talks to. On setup it
//! attaches the shared transition stylesheet to the owning document (once),
//! then plays; afterwards the parameterless trigger replays on demand. The
//! stylesheet itself is opaque here; this crate only guarantees it is present
//! before the first play and never touches it again.

use crate::config::TransitionConfig;
use crate::elements::LinkedElements;
use crate::error::StylesheetError;
use crate::events::PlaybackEvent;
use crate::scheduler::TransitionScheduler;

/// Name of the shared stylesheet defining the `TransitionBase*`, `FadeOut*`
/// and initial-state class rules.
pub const TRANSITION_STYLESHEET: &str = "VeilTransition";

/// Document-side collaborator that can attach a named stylesheet resource.
pub trait StylesheetHost {
    /// Attach the stylesheet with the given resource name to the document.
    /// Attaching an already-attached stylesheet should be a no-op.
    fn attach_stylesheet(&mut self, name: &str) -> Result<(), StylesheetError>;
}

/// A configured transition bound to an element group, with its setup and
/// trigger surface.
pub struct UiAnimation<L: LinkedElements> {
    scheduler: TransitionScheduler<L>,
    stylesheet_attached: bool,
}

impl<L: LinkedElements> UiAnimation<L> {
    /// Bind a configuration to an element group.
    pub fn new(config: TransitionConfig, elements: L) -> Self {
        Self {
            scheduler: TransitionScheduler::new(config, elements),
            stylesheet_attached: false,
        }
    }

    /// Setup-time entry point: attach the transition stylesheet (once) and
    /// play. A missing stylesheet is logged and tolerated; the class timeline
    /// still runs, it just has no rules to trigger. With no elements bound
    /// this does nothing.
    pub fn start(&mut self, host: &mut dyn StylesheetHost) {
        if self.scheduler.elements().is_empty() {
            return;
        }

        if !self.stylesheet_attached {
            match host.attach_stylesheet(TRANSITION_STYLESHEET) {
                Ok(()) => self.stylesheet_attached = true,
                Err(err) => log::warn!("transition stylesheet unavailable: {err}"),
            }
        }

        self.scheduler.play();
    }

    /// The parameterless "Play Animation" trigger.
    pub fn trigger_play(&mut self) {
        self.scheduler.play();
    }

    /// Cancel an in-flight run and revert its classes.
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// Advance timed steps by `dt_s` seconds.
    pub fn update(&mut self, dt_s: f32) {
        self.scheduler.update(dt_s);
    }

    /// Whether the main track is in flight.
    pub fn is_playing(&self) -> bool {
        self.scheduler.is_playing()
    }

    /// Drain all pending playback events.
    pub fn drain_events(&mut self) -> impl Iterator<Item = PlaybackEvent> + '_ {
        self.scheduler.drain_events()
    }

    /// The underlying scheduler.
    pub fn scheduler(&self) -> &TransitionScheduler<L> {
        &self.scheduler
    }

    /// Mutable access to the underlying scheduler.
    pub fn scheduler_mut(&mut self) -> &mut TransitionScheduler<L> {
        &mut self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::ClassSet;

    #[derive(Default)]
    struct FakeHost {
        attached: Vec<String>,
        missing: bool,
    }

    impl StylesheetHost for FakeHost {
        fn attach_stylesheet(&mut self, name: &str) -> Result<(), StylesheetError> {
            if self.missing {
                return Err(StylesheetError::NotFound(name.to_string()));
            }
            self.attached.push(name.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_start_attaches_stylesheet_once() {
        let mut host = FakeHost::default();
        let mut anim = UiAnimation::new(TransitionConfig::default(), vec![ClassSet::new()]);

        anim.start(&mut host);
        anim.update(1.0);
        anim.start(&mut host);

        assert_eq!(host.attached, [TRANSITION_STYLESHEET.to_string()]);
        assert!(anim.is_playing());
    }

    #[test]
    fn test_missing_stylesheet_still_plays() {
        let mut host = FakeHost {
            missing: true,
            ..FakeHost::default()
        };
        let mut anim = UiAnimation::new(TransitionConfig::default(), vec![ClassSet::new()]);

        anim.start(&mut host);
        assert!(anim.is_playing());
        assert!(host.attached.is_empty());
    }

    #[test]
    fn test_start_with_no_elements_does_nothing() {
        let mut host = FakeHost::default();
        let mut anim = UiAnimation::new(TransitionConfig::default(), Vec::<ClassSet>::new());

        anim.start(&mut host);
        assert!(host.attached.is_empty());
        assert!(!anim.is_playing());
    }

    #[test]
    fn test_trigger_replays() {
        let mut host = FakeHost::default();
        let mut anim = UiAnimation::new(TransitionConfig::default(), vec![ClassSet::new()]);

        anim.start(&mut host);
        anim.update(1.0);
        assert!(!anim.is_playing());

        anim.trigger_play();
        assert!(anim.is_playing());
    }
}
