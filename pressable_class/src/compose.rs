// Copyright 2026 the Pressable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class-token composition: configuration + interaction snapshot → token sequence.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// A borrowed snapshot of everything class composition depends on.
///
/// `zone` is the already-rendered press-zone token (e.g. `pressable--active`)
/// or `None` when the control is at rest; `pressable_state` renders it from
/// its `PressZone`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClassInputs<'a> {
    /// Root token every derived token is prefixed with.
    pub root: &'a str,
    /// Visual variant (e.g. `primary`, `secondary`), if any.
    pub variant: Option<&'a str>,
    /// Size modifier (e.g. `small`, `large`), if any.
    pub size: Option<&'a str>,
    /// Whether the control is visible.
    pub visible: bool,
    /// Whether the control is in placeholder mode.
    pub placeholder: bool,
    /// Whether the control currently has content.
    pub has_content: bool,
    /// Derived disabled state (explicit flag or placeholder-without-content).
    pub disabled: bool,
    /// Rendered press-zone token, if the zone is anything but `None`.
    pub zone: Option<&'a str>,
    /// User-supplied tokens, appended after all derived tokens.
    pub extra: &'a [&'a str],
}

/// Composes the ordered class-token sequence for one control state.
///
/// The sequence is order-stable and deduplicated (first occurrence wins):
/// root token first, then the guarded modifier tokens in a fixed order, then
/// the zone token, then the extra user tokens. Guarded tokens appear only
/// when their condition holds:
///
/// - `{root}--{variant}` and `{root}--{size}` when configured;
/// - `{root}--visible` when visible;
/// - `{root}--placeholder` only while placeholder mode has no content;
/// - `{root}--disabled` only while disabled.
///
/// Pure: identical inputs always produce the identical sequence.
#[must_use]
pub fn compose(inputs: &ClassInputs<'_>) -> Vec<String> {
    let root = inputs.root;
    let mut tokens: Vec<String> = Vec::with_capacity(8);
    push_unique(&mut tokens, root.to_string());
    if let Some(variant) = inputs.variant {
        push_unique(&mut tokens, format!("{root}--{variant}"));
    }
    if let Some(size) = inputs.size {
        push_unique(&mut tokens, format!("{root}--{size}"));
    }
    if inputs.visible {
        push_unique(&mut tokens, format!("{root}--visible"));
    }
    if inputs.placeholder && !inputs.has_content {
        push_unique(&mut tokens, format!("{root}--placeholder"));
    }
    if inputs.disabled {
        push_unique(&mut tokens, format!("{root}--disabled"));
    }
    if let Some(zone) = inputs.zone {
        push_unique(&mut tokens, zone.to_string());
    }
    for extra in inputs.extra {
        push_unique(&mut tokens, (*extra).to_string());
    }
    tokens
}

fn push_unique(tokens: &mut Vec<String>, token: String) {
    if !tokens.iter().any(|t| *t == token) {
        tokens.push(token);
    }
}
