// Copyright 2026 the Pressable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press zones: the symbolic visual feedback state of a pressable control.

use alloc::format;
use alloc::string::String;
use kurbo::{Point, Rect};

/// Fraction of the control width left of which the pointer is in the left zone.
const LEFT_FRACTION: f64 = 0.30;
/// Fraction of the control width right of which the pointer is in the right zone.
const RIGHT_FRACTION: f64 = 0.65;

/// The visual feedback state of a pressable control.
///
/// At most one zone is active at a time. `Active` is press feedback (pointer
/// down or programmatic activation); `Left`/`Middle`/`Right` are hover
/// feedback derived from the pointer's horizontal position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PressZone {
    /// No feedback; the control is at rest.
    #[default]
    None,
    /// Pressed (or programmatically activated).
    Active,
    /// Pointer hovering over the left portion of the control.
    Left,
    /// Pointer hovering over the middle portion of the control.
    Middle,
    /// Pointer hovering over the right portion of the control.
    Right,
}

impl PressZone {
    /// Returns the modifier suffix for this zone, or `None` at rest.
    #[must_use]
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Active => Some("active"),
            Self::Left => Some("left"),
            Self::Middle => Some("middle"),
            Self::Right => Some("right"),
        }
    }

    /// Renders this zone as a class token under `root` (e.g. `root--active`).
    #[must_use]
    pub fn token(self, root: &str) -> Option<String> {
        self.suffix().map(|suffix| format!("{root}--{suffix}"))
    }
}

/// Computes the hover zone for a pointer position within the control bounds.
///
/// The horizontal fraction of `position` across `bounds` selects the zone:
/// strictly below 0.30 is [`PressZone::Left`], strictly above 0.65 is
/// [`PressZone::Right`], everything else (the boundary values included) is
/// [`PressZone::Middle`]. Degenerate bounds (zero or negative width) yield
/// `None`; the caller ignores the event.
#[must_use]
pub fn zone_at(position: Point, bounds: Rect) -> Option<PressZone> {
    let width = bounds.width();
    if width <= 0.0 {
        return None;
    }
    let fraction = (position.x - bounds.x0) / width;
    Some(if fraction < LEFT_FRACTION {
        PressZone::Left
    } else if fraction > RIGHT_FRACTION {
        PressZone::Right
    } else {
        PressZone::Middle
    })
}
