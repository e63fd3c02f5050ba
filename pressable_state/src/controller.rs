// Copyright 2026 the Pressable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction controller: pointer and lifecycle events in, state
//! transitions and effects out.
//!
//! [`PressController`] owns the whole interaction state of one control. Each
//! handler runs to completion, mutates the owned state, and returns an
//! ordered [`Effects`] list the host interprets (trigger the ripple, invoke
//! the action callback, suppress default handling). Nothing in here touches
//! a clock or a real timer: the host supplies millisecond timestamps and
//! wakes the controller via [`PressController::on_deadline`] when
//! [`PressController::next_deadline`] elapses.
//!
//! ## The release floor
//!
//! The action callback fires immediately on release, but the pressed visual
//! is held for at least the configured minimum duration from press-down. A
//! release before the floor elapses schedules the clear for the remainder; a
//! release after it schedules a zero-delay clear. Only a normal release is
//! floored: pointer leave and programmatic deactivation clear immediately.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use smallvec::SmallVec;

use pressable_class::{ClassInputs, ModuleMap, compose, resolve};
use pressable_timing::DeadlineSlot;

use crate::config::PressConfig;
use crate::zone::{PressZone, zone_at};

/// Which pointer device button an event reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The primary button (usually left).
    Primary,
    /// The auxiliary button (usually middle/wheel).
    Auxiliary,
    /// The secondary button (usually right).
    Secondary,
}

/// A host-agnostic snapshot of one pointer event.
///
/// Both fields are optional: events with missing data are treated as
/// non-primary and ignored by the handlers that need the missing part.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerInput {
    /// Pointer position, in the same coordinate space as the control bounds.
    pub position: Option<Point>,
    /// The button the event reports, if any.
    pub button: Option<PointerButton>,
}

impl PointerInput {
    /// A primary-button event at `position`.
    #[must_use]
    pub fn primary(position: Point) -> Self {
        Self {
            position: Some(position),
            button: Some(PointerButton::Primary),
        }
    }

    /// An event carrying no position or button data.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            position: None,
            button: None,
        }
    }
}

/// A side effect the host must perform after a handler returns.
///
/// Effects are ordered; hosts perform them in sequence.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Effect {
    /// Trigger the ripple/bubble collaborator at the release point.
    /// Fire-and-forget; not gated by the release floor.
    Ripple {
        /// Release position, when the event carried one.
        origin: Option<Point>,
    },
    /// Dispatch the custom `action` lifecycle notification on the control
    /// element.
    Notify,
    /// Invoke the external action callback with the control's container.
    /// A host without a callback treats this as a silent no-op.
    Action,
    /// Suppress default handling and propagation of the event (release on a
    /// disabled or blocked control).
    Suppress,
}

/// Ordered effect list returned by each handler.
pub type Effects = SmallVec<[Effect; 4]>;

/// Owns the interaction state of one pressable control.
///
/// See the crate docs for a full walk-through. All handlers are infallible:
/// malformed input is absorbed as a no-op, never an error.
#[derive(Clone, Debug)]
pub struct PressController {
    config: PressConfig,
    /// Derived disabled state; recomputed on every configuration change.
    disabled: bool,
    zone: PressZone,
    /// Timestamp of the in-progress press, cleared once release processing
    /// completes.
    press_started_at: Option<u64>,
    /// The single pending release-floor deadline.
    release_timer: DeadlineSlot,
}

impl PressController {
    /// Creates a controller at rest for the given configuration.
    #[must_use]
    pub fn new(config: PressConfig) -> Self {
        let disabled = config.derived_disabled();
        Self {
            config,
            disabled,
            zone: PressZone::None,
            press_started_at: None,
            release_timer: DeadlineSlot::new(),
        }
    }

    /// Replaces the configuration, recomputing the derived disabled state
    /// and handling `active` flag edges.
    ///
    /// A false→true `active` edge presses the visual without involving the
    /// release floor; a true→false edge clears the press state immediately,
    /// floor ignored, and cancels any pending release deadline. Becoming
    /// disabled clears all press state.
    pub fn set_config(&mut self, config: PressConfig) {
        let was_active = self.config.active;
        self.config = config;
        self.disabled = self.config.derived_disabled();
        if self.disabled {
            // No zone is ever held while disabled.
            self.zone = PressZone::None;
            self.press_started_at = None;
            self.release_timer.cancel();
            return;
        }
        if self.config.active && !was_active {
            self.zone = PressZone::Active;
        } else if !self.config.active && was_active {
            // Explicit deactivation is unconditional: no floor, no deadline.
            self.release_timer.cancel();
            self.press_started_at = None;
            self.clear_press(true);
        }
    }

    /// Handles a pointer press.
    ///
    /// Ignored while disabled or blocked, and for anything but a primary
    /// button press with position data (events missing either are treated
    /// as non-primary). A press landing before a previous release floor
    /// elapsed cancels that deadline so the stale clear can't strip the new
    /// press.
    pub fn on_pointer_down(&mut self, now_millis: u64, input: &PointerInput) -> Effects {
        let effects = Effects::new();
        if self.disabled || self.config.blocked {
            return effects;
        }
        if input.button != Some(PointerButton::Primary) || input.position.is_none() {
            return effects;
        }
        self.release_timer.cancel();
        self.press_started_at = Some(now_millis);
        self.zone = PressZone::Active;
        effects
    }

    /// Handles continuous pointer movement over the control.
    ///
    /// Only runs when `move_events` is on; hover zones never replace press
    /// feedback, so the handler is a no-op while the zone is `Active`.
    /// Events without a position and degenerate bounds are ignored.
    pub fn on_pointer_move(&mut self, input: &PointerInput, bounds: Rect) -> Effects {
        let effects = Effects::new();
        if self.disabled || !self.config.move_events {
            return effects;
        }
        if self.zone == PressZone::Active {
            return effects;
        }
        let Some(position) = input.position else {
            return effects;
        };
        let Some(zone) = zone_at(position, bounds) else {
            return effects;
        };
        self.zone = zone;
        effects
    }

    /// Handles pointer enter when continuous tracking is off.
    ///
    /// Applies the single coarse middle zone instead of per-move tracking.
    /// A no-op when `move_events` is on (the move handler owns the zone
    /// then), while disabled, or while pressed.
    pub fn on_pointer_enter(&mut self) -> Effects {
        let effects = Effects::new();
        if self.disabled || self.config.move_events {
            return effects;
        }
        if self.zone == PressZone::Active {
            return effects;
        }
        self.zone = PressZone::Middle;
        effects
    }

    /// Handles a pointer release.
    ///
    /// Disabled or blocked controls yield a single [`Effect::Suppress`] and
    /// nothing else. Otherwise the ripple (when `bubbles` is on), the
    /// lifecycle notification, and the action callback all fire immediately,
    /// and the pressed visual is scheduled to clear once the release floor
    /// has elapsed: `min_press_millis` minus the time already spent pressed.
    pub fn on_pointer_up(&mut self, now_millis: u64, input: &PointerInput) -> Effects {
        let mut effects = Effects::new();
        if self.disabled || self.config.blocked {
            effects.push(Effect::Suppress);
            return effects;
        }
        self.release_timer.cancel();
        let elapsed = self
            .press_started_at
            .map_or(0, |started| now_millis.saturating_sub(started));
        if self.config.bubbles {
            effects.push(Effect::Ripple {
                origin: input.position,
            });
        }
        effects.push(Effect::Notify);
        effects.push(Effect::Action);
        let delay = self.config.min_press_millis.saturating_sub(elapsed);
        self.release_timer.schedule(now_millis, delay);
        self.press_started_at = None;
        effects
    }

    /// Handles the pointer leaving the control.
    ///
    /// Clears the visual immediately, floor ignored, but leaves a release
    /// deadline already scheduled by a completed release untouched. While
    /// the configuration holds `active`, the zone falls back to `Active`
    /// instead of `None`.
    pub fn on_pointer_leave(&mut self) -> Effects {
        let effects = Effects::new();
        if self.disabled {
            return effects;
        }
        self.clear_press(false);
        effects
    }

    /// Fires the release deadline if it has elapsed at `now_millis`.
    ///
    /// The host calls this when the wake time from
    /// [`next_deadline`](Self::next_deadline) arrives. A stale or
    /// already-cancelled deadline does nothing.
    pub fn on_deadline(&mut self, now_millis: u64) {
        if self.release_timer.fire(now_millis).is_some() {
            self.clear_press(false);
        }
    }

    /// Returns the absolute time the host should call
    /// [`on_deadline`](Self::on_deadline), if a release clear is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.release_timer.deadline()
    }

    /// Tears the controller down, cancelling any pending deadline.
    pub fn unmount(&mut self) {
        self.release_timer.cancel();
    }

    /// Returns the current press zone.
    #[must_use]
    pub fn zone(&self) -> PressZone {
        self.zone
    }

    /// Returns the derived disabled state.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns `true` while a press is in progress (down seen, release not
    /// yet processed).
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press_started_at.is_some()
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &PressConfig {
        &self.config
    }

    /// Composes the class-token sequence for the current state.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        let zone = self.zone.token(&self.config.root);
        let extra: Vec<&str> = self
            .config
            .extra_classes
            .iter()
            .map(String::as_str)
            .collect();
        compose(&ClassInputs {
            root: &self.config.root,
            variant: self.config.variant.as_deref(),
            size: self.config.size.as_deref(),
            visible: self.config.visible,
            placeholder: self.config.placeholder,
            has_content: self.config.has_content,
            disabled: self.disabled,
            zone: zone.as_deref(),
            extra: &extra,
        })
    }

    /// Resolves the class-token sequence into the final class value,
    /// optionally through a module map (unmapped tokens dropped).
    #[must_use]
    pub fn class_value(&self, map: Option<&ModuleMap>) -> String {
        resolve(&self.classes(), map)
    }

    /// Clears the press visual. While the configuration holds `active` and
    /// the clear is not forced, the zone falls back to `Active`.
    fn clear_press(&mut self, force: bool) {
        self.zone = if self.config.active && !force {
            PressZone::Active
        } else {
            PressZone::None
        };
    }
}
