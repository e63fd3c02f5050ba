// Copyright 2026 the Pressable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pressable State: Interaction state machine for pressable UI controls.
//!
//! A pressable control tracks pointer interaction over its lifetime, derives
//! a symbolic visual state from pointer position and press duration, and
//! fires a ripple effect plus an application action on release. This crate
//! owns the hard part of that: the state machine deciding what state the
//! control is in at any instant and which side effects must fire when,
//! correct under interrupted gestures and re-entrant presses.
//!
//! The crate is host-agnostic: no DOM, no event loop, no clock. The host
//! feeds [`PressController`] pointer snapshots with millisecond timestamps,
//! performs the returned [`Effect`]s, paints with
//! [`PressController::classes`] (or [`PressController::render_props`]), and
//! wakes the controller at [`PressController::next_deadline`].
//!
//! ## Design
//!
//! - **One owner for interaction state.** Press timestamps, the pending
//!   release deadline, and the current [`PressZone`] live in one value,
//!   mutated only by the controller's named transition handlers.
//! - **Effects as data.** Each handler returns an ordered effect list
//!   instead of calling collaborators directly, so every transition is unit
//!   testable without a UI.
//! - **The release floor.** The action fires immediately on release, but the
//!   pressed visual holds for at least the configured minimum duration from
//!   press-down, via one cancelable deadline
//!   ([`pressable_timing::DeadlineSlot`]). Pointer leave and programmatic
//!   deactivation clear immediately; only a normal release is floored.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use pressable_state::{Effect, PointerInput, PressConfigBuilder, PressController, PressZone};
//!
//! let config = PressConfigBuilder::new().bubbles(true).build();
//! let mut control = PressController::new(config);
//!
//! // Press at t=0.
//! control.on_pointer_down(0, &PointerInput::primary(Point::new(12.0, 8.0)));
//! assert_eq!(control.zone(), PressZone::Active);
//!
//! // Release at t=10: ripple, notification, and action fire now, but the
//! // pressed look is held until the 100ms floor elapses.
//! let effects = control.on_pointer_up(10, &PointerInput::primary(Point::new(12.0, 8.0)));
//! assert!(effects.contains(&Effect::Action));
//! assert_eq!(control.next_deadline(), Some(100));
//! assert_eq!(control.zone(), PressZone::Active);
//!
//! control.on_deadline(100);
//! assert_eq!(control.zone(), PressZone::None);
//! ```
//!
//! ## Hover zones
//!
//! ```
//! use kurbo::{Point, Rect};
//! use pressable_state::{PointerInput, PressConfig, PressController, PressZone};
//!
//! let mut control = PressController::new(PressConfig::default());
//! let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);
//!
//! control.on_pointer_move(&PointerInput::primary(Point::new(20.0, 10.0)), bounds);
//! assert_eq!(control.zone(), PressZone::Left);
//!
//! control.on_pointer_move(&PointerInput::primary(Point::new(80.0, 10.0)), bounds);
//! assert_eq!(control.zone(), PressZone::Right);
//!
//! control.on_pointer_leave();
//! assert_eq!(control.zone(), PressZone::None);
//! ```

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod render;
mod zone;

pub use config::{
    DEFAULT_MIN_PRESS_MILLIS, DEFAULT_ROOT, DEFAULT_VARIANT, PressConfig, PressConfigBuilder,
};
pub use controller::{Effect, Effects, PointerButton, PointerInput, PressController};
pub use render::{ElementKind, RenderProps, bubble_token, content_token, wrapper_token};
pub use zone::{PressZone, zone_at};
