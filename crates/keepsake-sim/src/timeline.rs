//! Tick timeline for deferred steps.
//!
//! Every wait in the experience (exit animations, swing, projectile flight,
//! settle, barrage pauses, confetti repeats) is a step scheduled for a future
//! tick. Steps fire in `(due_tick, scheduling order)` order. Owners stamp
//! their steps with a [`Generation`] and drop any step whose generation is no
//! longer current, so a reset can never be undone by a timer that was already
//! in flight.

/// Stamp identifying the owner state a step was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Generation(u64);

/// Per-owner generation source.
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter {
    current: u64,
}

impl GenerationCounter {
    pub fn current(&self) -> Generation {
        Generation(self.current)
    }

    /// Invalidate every outstanding step and return the new stamp.
    pub fn advance(&mut self) -> Generation {
        self.current += 1;
        Generation(self.current)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.current
    }
}

/// Handle for a scheduled step, usable to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Entry<S> {
    due_tick: u64,
    seq: u64,
    handle: TaskHandle,
    step: S,
}

/// Ordered set of pending steps.
#[derive(Debug)]
pub struct Timeline<S> {
    entries: Vec<Entry<S>>,
    next_seq: u64,
}

impl<S> Default for Timeline<S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<S> Timeline<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `step` to fire at `due_tick` under a fresh handle.
    pub fn schedule(&mut self, due_tick: u64, step: S) -> TaskHandle {
        let handle = TaskHandle(self.next_seq);
        self.schedule_as(handle, due_tick, step);
        handle
    }

    /// Schedule `step` under an existing handle. Repeating tasks use this to
    /// keep one handle for their whole life.
    pub fn schedule_as(&mut self, handle: TaskHandle, due_tick: u64, step: S) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            due_tick,
            seq,
            handle,
            step,
        });
    }

    /// Remove every pending step with `handle`. Returns whether any was removed.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Take the earliest step due at or before `now`.
    pub fn pop_due(&mut self, now: u64) -> Option<(TaskHandle, S)> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_tick <= now)
            .min_by_key(|(_, e)| (e.due_tick, e.seq))
            .map(|(i, _)| i)?;
        let entry = self.entries.swap_remove(idx);
        Some((entry.handle, entry.step))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_fire_in_due_order() {
        let mut timeline = Timeline::new();
        timeline.schedule(10, "late");
        timeline.schedule(5, "early");
        timeline.schedule(5, "early-second");

        assert!(timeline.pop_due(4).is_none());
        assert_eq!(timeline.pop_due(10).map(|(_, s)| s), Some("early"));
        assert_eq!(timeline.pop_due(10).map(|(_, s)| s), Some("early-second"));
        assert_eq!(timeline.pop_due(10).map(|(_, s)| s), Some("late"));
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_cancel_removes_repeating_handle() {
        let mut timeline = Timeline::new();
        let handle = timeline.schedule(3, 1);
        timeline.schedule(4, 2);
        assert!(timeline.is_scheduled(handle));

        let (fired, _) = timeline.pop_due(3).unwrap();
        assert_eq!(fired, handle);
        timeline.schedule_as(handle, 6, 1);
        assert!(timeline.cancel(handle));
        assert!(!timeline.is_scheduled(handle));
        assert!(!timeline.cancel(handle));
        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn test_generation_invalidates_old_stamps() {
        let mut counter = GenerationCounter::default();
        let stamp = counter.current();
        assert!(counter.is_current(stamp));
        let fresh = counter.advance();
        assert!(!counter.is_current(stamp));
        assert!(counter.is_current(fresh));
    }
}
