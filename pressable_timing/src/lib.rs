// Copyright 2026 the Pressable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pressable Timing: Host-agnostic cancelable deadline primitives for UI runtimes.
//!
//! UI interactions that hold a visual state for a minimum duration need one
//! cancelable timer per control, driven by whatever clock and wake mechanism
//! the host runtime already has. This crate provides [`DeadlineSlot`], a
//! single-slot deadline with generation-counted [`TimerToken`] handles:
//!
//! - Scheduling a new deadline replaces (and thereby cancels) any pending one.
//! - A token is produced at most once by [`DeadlineSlot::fire`], so a
//!   replaced or cancelled deadline can never clear state that belongs to a
//!   newer interaction.
//! - Time is a plain millisecond `u64` supplied by the host on every call;
//!   there are no threads, no OS timers, and no global clock.
//!
//! ## Minimal example
//!
//! ```
//! use pressable_timing::DeadlineSlot;
//!
//! let mut slot = DeadlineSlot::new();
//!
//! // Schedule a deadline 90ms from now (now = 10).
//! let token = slot.schedule(10, 90);
//! assert_eq!(slot.deadline(), Some(100));
//!
//! // Too early: nothing fires.
//! assert_eq!(slot.fire(99), None);
//!
//! // At (or after) the deadline the token fires exactly once.
//! assert_eq!(slot.fire(100), Some(token));
//! assert_eq!(slot.fire(100), None);
//! ```
//!
//! ## Replacement cancels
//!
//! ```
//! use pressable_timing::DeadlineSlot;
//!
//! let mut slot = DeadlineSlot::new();
//! let stale = slot.schedule(0, 100);
//! let fresh = slot.schedule(50, 100);
//! assert_ne!(stale, fresh);
//!
//! // Only the fresh token can ever fire, and only at its own deadline.
//! assert_eq!(slot.fire(100), None);
//! assert_eq!(slot.fire(150), Some(fresh));
//! ```

#![no_std]

/// A generation-counted handle for one scheduled deadline.
///
/// Tokens are only meaningful to the [`DeadlineSlot`] that issued them.
/// Each call to [`DeadlineSlot::schedule`] issues a token from a fresh
/// generation, so tokens from superseded schedules compare unequal to the
/// token an eventual [`DeadlineSlot::fire`] returns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(u64);

/// At most one pending deadline, cancelable and replaceable.
///
/// The host owns the clock: it passes the current time (in milliseconds) to
/// [`schedule`](Self::schedule) and [`fire`](Self::fire), and wakes itself at
/// [`deadline`](Self::deadline) however its event loop prefers.
#[derive(Clone, Debug, Default)]
pub struct DeadlineSlot {
    /// Absolute time at which the pending deadline elapses, if any.
    deadline: Option<u64>,
    /// Generation of the most recent schedule; identifies the live token.
    generation: u64,
}

impl DeadlineSlot {
    /// Creates an empty slot with no pending deadline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a deadline `delay_millis` from `now_millis`, replacing any
    /// pending one.
    ///
    /// Returns the token that [`fire`](Self::fire) will yield once the
    /// deadline elapses. A `delay_millis` of zero is valid: the deadline is
    /// due immediately and fires on the next [`fire`](Self::fire) call whose
    /// `now` has not gone backwards.
    pub fn schedule(&mut self, now_millis: u64, delay_millis: u64) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        self.deadline = Some(now_millis.saturating_add(delay_millis));
        TimerToken(self.generation)
    }

    /// Cancels the pending deadline, if any.
    ///
    /// The previously issued token becomes permanently unobservable.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns the absolute time the pending deadline elapses, if one is set.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Returns the token of the pending deadline, if one is set.
    #[must_use]
    pub fn pending(&self) -> Option<TimerToken> {
        self.deadline.map(|_| TimerToken(self.generation))
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fires the pending deadline if it has elapsed at `now_millis`.
    ///
    /// Returns the token of the elapsed deadline and clears the slot, or
    /// `None` if nothing is pending or the deadline lies in the future. Each
    /// scheduled deadline fires at most once.
    pub fn fire(&mut self, now_millis: u64) -> Option<TimerToken> {
        match self.deadline {
            Some(deadline) if now_millis >= deadline => {
                self.deadline = None;
                Some(TimerToken(self.generation))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_slot_is_empty() {
        let slot = DeadlineSlot::new();
        assert!(!slot.is_pending());
        assert_eq!(slot.deadline(), None);
        assert_eq!(slot.pending(), None);
    }

    #[test]
    fn schedule_sets_absolute_deadline() {
        let mut slot = DeadlineSlot::new();
        let token = slot.schedule(10, 90);

        assert!(slot.is_pending());
        assert_eq!(slot.deadline(), Some(100));
        assert_eq!(slot.pending(), Some(token));
    }

    #[test]
    fn fire_before_deadline_returns_none() {
        let mut slot = DeadlineSlot::new();
        slot.schedule(0, 100);

        assert_eq!(slot.fire(99), None);
        assert!(slot.is_pending());
    }

    #[test]
    fn fire_at_deadline_returns_token_once() {
        let mut slot = DeadlineSlot::new();
        let token = slot.schedule(0, 100);

        assert_eq!(slot.fire(100), Some(token));
        assert!(!slot.is_pending());
        assert_eq!(slot.fire(100), None);
        assert_eq!(slot.fire(200), None);
    }

    #[test]
    fn fire_after_deadline_still_fires() {
        let mut slot = DeadlineSlot::new();
        let token = slot.schedule(0, 100);

        assert_eq!(slot.fire(5000), Some(token));
    }

    #[test]
    fn zero_delay_fires_immediately() {
        let mut slot = DeadlineSlot::new();
        let token = slot.schedule(42, 0);

        assert_eq!(slot.deadline(), Some(42));
        assert_eq!(slot.fire(42), Some(token));
    }

    #[test]
    fn cancel_clears_pending_deadline() {
        let mut slot = DeadlineSlot::new();
        slot.schedule(0, 100);
        slot.cancel();

        assert!(!slot.is_pending());
        assert_eq!(slot.fire(1000), None);
    }

    #[test]
    fn cancel_on_empty_slot_is_safe() {
        let mut slot = DeadlineSlot::new();
        slot.cancel();
        assert!(!slot.is_pending());
    }

    #[test]
    fn reschedule_replaces_deadline_and_token() {
        let mut slot = DeadlineSlot::new();
        let stale = slot.schedule(0, 100);
        let fresh = slot.schedule(50, 100);

        assert_ne!(stale, fresh);
        assert_eq!(slot.deadline(), Some(150));

        // The stale deadline (due at 100) must not fire.
        assert_eq!(slot.fire(100), None);
        assert_eq!(slot.fire(150), Some(fresh));
    }

    #[test]
    fn schedule_after_cancel_issues_fresh_token() {
        let mut slot = DeadlineSlot::new();
        let first = slot.schedule(0, 10);
        slot.cancel();
        let second = slot.schedule(0, 10);

        assert_ne!(first, second);
        assert_eq!(slot.fire(10), Some(second));
    }

    #[test]
    fn deadline_saturates_instead_of_overflowing() {
        let mut slot = DeadlineSlot::new();
        let token = slot.schedule(u64::MAX - 5, 100);

        assert_eq!(slot.deadline(), Some(u64::MAX));
        assert_eq!(slot.fire(u64::MAX), Some(token));
    }
}
