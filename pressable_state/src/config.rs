// Copyright 2026 the Pressable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control configuration and the derived disabled rule.
//!
//! Configuration is immutable per update: the host builds a [`PressConfig`]
//! (usually via [`PressConfigBuilder`]) and hands it to the controller, which
//! recomputes the derived disabled state in exactly one place. The
//! placeholder rule lives here and nowhere else: a placeholder control with
//! no content is disabled no matter what the explicit flag says.

use alloc::string::String;
use alloc::vec::Vec;

/// Default root class token.
pub const DEFAULT_ROOT: &str = "pressable";

/// Default minimum duration, in milliseconds, the pressed visual is held.
pub const DEFAULT_MIN_PRESS_MILLIS: u64 = 100;

/// Default visual variant.
pub const DEFAULT_VARIANT: &str = "primary";

/// Immutable configuration for one pressable control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PressConfig {
    /// Root class token every derived token is prefixed with.
    pub root: String,
    /// Visual variant (e.g. `primary`, `secondary`), if any.
    pub variant: Option<String>,
    /// Size modifier (e.g. `small`, `large`), if any.
    pub size: Option<String>,
    /// Whether the control is visible.
    pub visible: bool,
    /// Blocked controls ignore presses and suppress releases without
    /// presenting as disabled.
    pub blocked: bool,
    /// Explicit disabled flag. The effective state also accounts for
    /// placeholder mode; see [`PressConfig::derived_disabled`].
    pub disabled: bool,
    /// Placeholder mode: the control renders in a content-pending state.
    pub placeholder: bool,
    /// Whether the control currently has content.
    pub has_content: bool,
    /// Whether hover zones track the pointer continuously. When off, a
    /// single coarse middle zone is applied on pointer enter instead.
    pub move_events: bool,
    /// Whether releases trigger the ripple/bubble effect collaborator.
    pub bubbles: bool,
    /// Programmatic activation flag. Edges are handled by the controller:
    /// false→true presses the visual, true→false clears it unconditionally.
    pub active: bool,
    /// Minimum duration, in milliseconds, the pressed visual is held after
    /// press-down on a normal release.
    pub min_press_millis: u64,
    /// Tooltip text passed through to the rendering collaborator.
    pub title: Option<String>,
    /// Anchor target URL; its presence selects anchor semantics.
    pub href: Option<String>,
    /// Router destination passed through to the rendering collaborator.
    pub to: Option<String>,
    /// Anchor target window/frame passed through to the rendering collaborator.
    pub target: Option<String>,
    /// User-supplied class tokens, appended after all derived tokens.
    pub extra_classes: Vec<String>,
}

impl Default for PressConfig {
    fn default() -> Self {
        Self {
            root: String::from(DEFAULT_ROOT),
            variant: Some(String::from(DEFAULT_VARIANT)),
            size: None,
            visible: true,
            blocked: false,
            disabled: false,
            placeholder: false,
            has_content: false,
            move_events: true,
            bubbles: false,
            active: false,
            min_press_millis: DEFAULT_MIN_PRESS_MILLIS,
            title: None,
            href: None,
            to: None,
            target: None,
            extra_classes: Vec::new(),
        }
    }
}

impl PressConfig {
    /// Returns the effective disabled state.
    ///
    /// Placeholder-without-content always overrides to disabled, regardless
    /// of the explicit `disabled` input.
    #[must_use]
    pub fn derived_disabled(&self) -> bool {
        self.disabled || (self.placeholder && !self.has_content)
    }
}

/// Builder for [`PressConfig`].
///
/// # Example
///
/// ```rust
/// use pressable_state::PressConfigBuilder;
///
/// let config = PressConfigBuilder::new()
///     .variant("secondary")
///     .size("large")
///     .bubbles(true)
///     .extra_class("rounded")
///     .build();
///
/// assert_eq!(config.variant.as_deref(), Some("secondary"));
/// assert_eq!(config.min_press_millis, 100);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PressConfigBuilder {
    config: PressConfig,
}

impl PressConfigBuilder {
    /// Creates a builder seeded with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root class token.
    #[must_use]
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.config.root = root.into();
        self
    }

    /// Sets the visual variant.
    #[must_use]
    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.config.variant = Some(variant.into());
        self
    }

    /// Clears the visual variant.
    #[must_use]
    pub fn no_variant(mut self) -> Self {
        self.config.variant = None;
        self
    }

    /// Sets the size modifier.
    #[must_use]
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.config.size = Some(size.into());
        self
    }

    /// Sets visibility.
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.config.visible = visible;
        self
    }

    /// Sets the blocked flag.
    #[must_use]
    pub fn blocked(mut self, blocked: bool) -> Self {
        self.config.blocked = blocked;
        self
    }

    /// Sets the explicit disabled flag.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Sets placeholder mode.
    #[must_use]
    pub fn placeholder(mut self, placeholder: bool) -> Self {
        self.config.placeholder = placeholder;
        self
    }

    /// Sets whether the control currently has content.
    #[must_use]
    pub fn has_content(mut self, has_content: bool) -> Self {
        self.config.has_content = has_content;
        self
    }

    /// Sets whether hover zones track the pointer continuously.
    #[must_use]
    pub fn move_events(mut self, move_events: bool) -> Self {
        self.config.move_events = move_events;
        self
    }

    /// Sets whether releases trigger the ripple effect.
    #[must_use]
    pub fn bubbles(mut self, bubbles: bool) -> Self {
        self.config.bubbles = bubbles;
        self
    }

    /// Sets the programmatic activation flag.
    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.config.active = active;
        self
    }

    /// Sets the minimum pressed-visual duration in milliseconds.
    #[must_use]
    pub fn min_press_millis(mut self, millis: u64) -> Self {
        self.config.min_press_millis = millis;
        self
    }

    /// Sets the tooltip text.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    /// Sets the anchor URL, selecting anchor semantics for rendering.
    #[must_use]
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.config.href = Some(href.into());
        self
    }

    /// Sets the router destination passthrough.
    #[must_use]
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.config.to = Some(to.into());
        self
    }

    /// Sets the anchor target passthrough.
    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.config.target = Some(target.into());
        self
    }

    /// Appends a user class token.
    #[must_use]
    pub fn extra_class(mut self, token: impl Into<String>) -> Self {
        self.config.extra_classes.push(token.into());
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> PressConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let config = PressConfig::default();
        assert_eq!(config.root, "pressable");
        assert_eq!(config.variant.as_deref(), Some("primary"));
        assert!(config.visible);
        assert!(config.move_events);
        assert!(!config.bubbles);
        assert_eq!(config.min_press_millis, 100);
    }

    #[test]
    fn placeholder_without_content_overrides_explicit_disabled() {
        for explicit in [false, true] {
            let config = PressConfigBuilder::new()
                .placeholder(true)
                .has_content(false)
                .disabled(explicit)
                .build();
            assert!(config.derived_disabled());
        }
    }

    #[test]
    fn placeholder_with_content_falls_back_to_explicit_flag() {
        let enabled = PressConfigBuilder::new()
            .placeholder(true)
            .has_content(true)
            .build();
        assert!(!enabled.derived_disabled());

        let disabled = PressConfigBuilder::new()
            .placeholder(true)
            .has_content(true)
            .disabled(true)
            .build();
        assert!(disabled.derived_disabled());
    }

    #[test]
    fn explicit_disabled_without_placeholder() {
        let config = PressConfigBuilder::new().disabled(true).build();
        assert!(config.derived_disabled());
        assert!(!PressConfig::default().derived_disabled());
    }
}
