//! Scheduler - uniform handle-based interval/timeout abstraction
//!
//! The session never touches wall-clock time. Timers are registered here and
//! the main loop drives them by calling [`Scheduler::advance`] with elapsed
//! milliseconds; tests drive them the same way with fake time.
//!
//! Timers fire plain event values rather than callbacks. A fired event may be
//! stale by the time it is handled (its timer was cleared by an earlier event
//! in the same batch), so every consumer re-validates its owning state before
//! acting.

use arrayvec::ArrayVec;

/// Maximum number of concurrently armed timers.
///
/// Gameplay needs at most three (round interval, countdown interval, flash
/// timeout). `set_interval`/`set_timeout` return `None` when the table is
/// full and callers degrade gracefully.
pub const MAX_TIMERS: usize = 8;

/// Opaque handle to an armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct Timer<E> {
    id: u64,
    event: E,
    period_ms: u32,
    remaining_ms: u32,
    repeating: bool,
}

/// Bounded timer table producing events of type `E`.
#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    timers: ArrayVec<Timer<E>, MAX_TIMERS>,
    next_id: u64,
    limit: usize,
}

impl<E: Copy> Scheduler<E> {
    pub fn new() -> Self {
        Self::with_limit(MAX_TIMERS)
    }

    /// Scheduler that refuses to arm more than `limit` timers at once.
    ///
    /// `with_limit(0)` models a platform without timers; used by tests for
    /// the degraded-mode paths.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            timers: ArrayVec::new(),
            next_id: 0,
            limit: limit.min(MAX_TIMERS),
        }
    }

    /// Arm a repeating timer firing `event` every `period_ms`.
    ///
    /// Returns `None` when no timer slot is available; the caller must
    /// detect that and fall back to manual progression.
    pub fn set_interval(&mut self, event: E, period_ms: u32) -> Option<TimerHandle> {
        self.arm(event, period_ms, true)
    }

    /// Arm a one-shot timer firing `event` once after `delay_ms`.
    pub fn set_timeout(&mut self, event: E, delay_ms: u32) -> Option<TimerHandle> {
        self.arm(event, delay_ms, false)
    }

    fn arm(&mut self, event: E, period_ms: u32, repeating: bool) -> Option<TimerHandle> {
        if self.timers.len() >= self.limit {
            return None;
        }
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        // A zero period would fire unboundedly within a single advance.
        let period_ms = period_ms.max(1);

        self.timers.push(Timer {
            id,
            event,
            period_ms,
            remaining_ms: period_ms,
            repeating,
        });
        Some(TimerHandle(id))
    }

    /// Disarm a timer.
    ///
    /// Idempotent: `None` and already-cleared handles are no-ops. Once
    /// cleared, a timer never fires again.
    pub fn clear(&mut self, handle: Option<TimerHandle>) {
        if let Some(TimerHandle(id)) = handle {
            self.timers.retain(|t| t.id != id);
        }
    }

    /// Advance fake time by `elapsed_ms`, collecting fired events in
    /// chronological order across all timers.
    ///
    /// An interval fires once per elapsed period, so a large advance yields
    /// multiple events. Events due at the same instant keep arming order.
    /// One-shot timers are disarmed after firing.
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<E> {
        // (due offset, timer id, event); ids are monotonic, so sorting by
        // (due, id) is chronological with arming order as the tiebreak.
        let mut fired: Vec<(u64, u64, E)> = Vec::new();
        let elapsed = elapsed_ms as u64;

        for timer in self.timers.iter_mut() {
            let mut due = timer.remaining_ms as u64;
            while due <= elapsed {
                fired.push((due, timer.id, timer.event));
                if !timer.repeating {
                    // Mark for removal below.
                    timer.remaining_ms = u32::MAX;
                    break;
                }
                due += timer.period_ms as u64;
            }
            if timer.remaining_ms != u32::MAX {
                timer.remaining_ms = (due - elapsed) as u32;
            }
        }

        self.timers.retain(|t| t.remaining_ms != u32::MAX);
        fired.sort_by_key(|&(due, id, _)| (due, id));
        fired.into_iter().map(|(_, _, event)| event).collect()
    }

    /// Number of armed timers.
    pub fn armed(&self) -> usize {
        self.timers.len()
    }
}

impl<E: Copy> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Ev {
        Tick,
        Once,
    }

    #[test]
    fn interval_fires_once_per_period() {
        let mut sched = Scheduler::new();
        sched.set_interval(Ev::Tick, 1000);

        assert!(sched.advance(999).is_empty());
        assert_eq!(sched.advance(1), vec![Ev::Tick]);
        assert_eq!(sched.advance(3000), vec![Ev::Tick, Ev::Tick, Ev::Tick]);
    }

    #[test]
    fn timeout_fires_exactly_once() {
        let mut sched = Scheduler::new();
        sched.set_timeout(Ev::Once, 500);

        assert_eq!(sched.advance(500), vec![Ev::Once]);
        assert!(sched.advance(10_000).is_empty());
        assert_eq!(sched.armed(), 0);
    }

    #[test]
    fn clear_is_idempotent_and_none_is_a_noop() {
        let mut sched = Scheduler::new();
        let handle = sched.set_interval(Ev::Tick, 100);

        sched.clear(handle);
        sched.clear(handle); // already cleared
        sched.clear(None);

        assert!(sched.advance(1000).is_empty());
    }

    #[test]
    fn cleared_timer_never_fires() {
        let mut sched = Scheduler::new();
        let handle = sched.set_timeout(Ev::Once, 1);
        sched.clear(handle);
        assert!(sched.advance(100).is_empty());
    }

    #[test]
    fn full_table_yields_none() {
        let mut sched = Scheduler::with_limit(1);
        assert!(sched.set_interval(Ev::Tick, 100).is_some());
        assert!(sched.set_interval(Ev::Tick, 100).is_none());
        assert!(sched.set_timeout(Ev::Once, 100).is_none());

        let mut none = Scheduler::with_limit(0);
        assert!(none.set_interval(Ev::Tick, 100).is_none());
    }

    #[test]
    fn large_advance_interleaves_timers_chronologically() {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Tag {
            A,
            B,
        }

        let mut sched = Scheduler::new();
        sched.set_interval(Tag::A, 700);
        sched.set_interval(Tag::B, 500);

        // Due times: B at 500, 1000, 1500; A at 700, 1400.
        assert_eq!(
            sched.advance(1500),
            vec![Tag::B, Tag::A, Tag::B, Tag::A, Tag::B]
        );
    }

    #[test]
    fn simultaneous_events_keep_arming_order() {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Tag {
            First,
            Second,
        }

        let mut sched = Scheduler::new();
        sched.set_interval(Tag::First, 1000);
        sched.set_interval(Tag::Second, 1000);

        assert_eq!(
            sched.advance(2000),
            vec![Tag::First, Tag::Second, Tag::First, Tag::Second]
        );
    }

    #[test]
    fn partial_advances_accumulate() {
        let mut sched = Scheduler::new();
        sched.set_interval(Ev::Tick, 1000);

        let mut fired = 0;
        for _ in 0..40 {
            fired += sched.advance(50).len();
        }
        assert_eq!(fired, 2);
    }
}
