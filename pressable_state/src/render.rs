// Copyright 2026 the Pressable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The snapshot the rendering collaborator consumes.
//!
//! Rendering itself is external; this module only derives what the renderer
//! needs: anchor-vs-button semantics (an `href` selects the anchor), the
//! resolved class value, and the passthrough attributes. Child part tokens
//! (`root__wrapper`, `root__content`, `root__bubble`) are rendered here so
//! hosts can resolve them through the same module map as the main class
//! value, silent-drop included.

use alloc::format;
use alloc::string::String;

use pressable_class::ModuleMap;

use crate::controller::PressController;

/// Which element the rendering collaborator should produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A plain button element.
    Button,
    /// An anchor element (the configuration carries an `href`).
    Anchor,
}

/// Everything the rendering collaborator needs for one paint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderProps<'a> {
    /// Anchor or button semantics.
    pub kind: ElementKind,
    /// The resolved class value for the control element.
    pub class_value: String,
    /// Tooltip text.
    pub title: Option<&'a str>,
    /// Anchor URL passthrough.
    pub href: Option<&'a str>,
    /// Router destination passthrough.
    pub to: Option<&'a str>,
    /// Anchor target passthrough.
    pub target: Option<&'a str>,
}

impl PressController {
    /// Derives the render snapshot for the current state.
    #[must_use]
    pub fn render_props(&self, map: Option<&ModuleMap>) -> RenderProps<'_> {
        let config = self.config();
        RenderProps {
            kind: if config.href.is_some() {
                ElementKind::Anchor
            } else {
                ElementKind::Button
            },
            class_value: self.class_value(map),
            title: config.title.as_deref(),
            href: config.href.as_deref(),
            to: config.to.as_deref(),
            target: config.target.as_deref(),
        }
    }
}

/// The wrapper part token under `root` (e.g. `pressable__wrapper`).
#[must_use]
pub fn wrapper_token(root: &str) -> String {
    format!("{root}__wrapper")
}

/// The content part token under `root` (e.g. `pressable__content`).
#[must_use]
pub fn content_token(root: &str) -> String {
    format!("{root}__content")
}

/// The bubble part token under `root` (e.g. `pressable__bubble`), the style
/// token handed to the ripple collaborator.
#[must_use]
pub fn bubble_token(root: &str) -> String {
    format!("{root}__bubble")
}
