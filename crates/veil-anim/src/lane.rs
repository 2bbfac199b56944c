//! Cooperative timer lane.
//!
//! A `TimerLane` is a single-threaded stand-in for a coroutine handle group:
//! every timed step a scheduler owns is an entry on its lane, and cancelling
//! the lane cancels all of them as one atomic operation. Nothing here blocks;
//! callers schedule entries and later drive the lane from their tick with
//! [`TimerLane::advance`].
//!
//! Entries fire in `(due time, scheduling order)` order. A fire callback may
//! schedule follow-up entries, and follow-ups that fall due within the same
//! `advance` window fire during that same call, so zero-delay chains still
//! traverse every step.

use tracing::trace;

#[derive(Debug, Clone)]
struct TimerEntry<T> {
    seq: u64,
    due: f32,
    task: T,
}

/// A cancellable group of pending cooperative timers on one logical lane.
#[derive(Debug, Default)]
pub struct TimerLane<T> {
    now: f32,
    next_seq: u64,
    entries: Vec<TimerEntry<T>>,
}

impl<T> TimerLane<T> {
    /// Create an empty lane with its clock at zero.
    pub fn new() -> Self {
        Self {
            now: 0.0,
            next_seq: 0,
            entries: Vec::new(),
        }
    }

    /// Current lane time in seconds.
    pub fn now(&self) -> f32 {
        self.now
    }

    /// Number of pending entries.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are pending.
    pub fn is_idle(&self) -> bool {
        self.entries.is_empty()
    }

    /// Schedule `task` to fire `delay_s` seconds from the lane's current time.
    /// Negative delays are clamped to zero; a zero delay fires on the next
    /// `advance`, never synchronously.
    pub fn schedule(&mut self, delay_s: f32, task: T) {
        let due = self.now + delay_s.max(0.0);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(TimerEntry { seq, due, task });
    }

    /// Cancel every pending entry on this lane. No-op when the lane is idle.
    pub fn cancel_all(&mut self) {
        if !self.entries.is_empty() {
            trace!(cancelled = self.entries.len(), "cancelling timer lane");
        }
        self.entries.clear();
    }

    /// Advance the lane clock by `dt` seconds, firing every entry that falls
    /// due, in order. `on_fire` receives the lane itself so it can schedule
    /// follow-up entries; follow-ups due within the window also fire.
    pub fn advance<F>(&mut self, dt: f32, mut on_fire: F)
    where
        F: FnMut(&mut Self, T),
    {
        let target = self.now + dt.max(0.0);
        loop {
            let next = self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.due <= target)
                .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)))
                .map(|(i, _)| i);
            let Some(index) = next else { break };
            let entry = self.entries.remove(index);
            // Entries scheduled from on_fire are relative to the fire time,
            // not the start of the window.
            self.now = self.now.max(entry.due);
            on_fire(self, entry.task);
        }
        self.now = self.now.max(target);
    }
}
