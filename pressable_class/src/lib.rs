// Copyright 2026 the Pressable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pressable Class: Pure class-token composition for pressable controls.
//!
//! A pressable control presents its state to an external style layer as an
//! ordered sequence of symbolic class tokens (`pressable`,
//! `pressable--primary`, `pressable--active`, ...). This crate owns the two
//! pure halves of that pipeline:
//!
//! - [`compose`]: configuration + interaction snapshot → deduplicated,
//!   order-stable token sequence. Referentially transparent, so callers can
//!   memoize on inputs and skip class churn when nothing changed.
//! - [`resolve`]: token sequence → final presentation value, either joined
//!   into a whitespace-normalized string or substituted through a
//!   [`ModuleMap`] (CSS-modules style).
//!
//! Neither half has side effects or timers; all stateful interaction logic
//! lives in `pressable_state`.
//!
//! ## Minimal example
//!
//! ```
//! use pressable_class::{ClassInputs, compose, resolve};
//!
//! let inputs = ClassInputs {
//!     root: "pressable",
//!     variant: Some("primary"),
//!     size: None,
//!     visible: true,
//!     placeholder: false,
//!     has_content: true,
//!     disabled: false,
//!     zone: Some("pressable--active"),
//!     extra: &["foo", "bar"],
//! };
//!
//! let tokens = compose(&inputs);
//! assert_eq!(
//!     tokens,
//!     vec![
//!         "pressable",
//!         "pressable--primary",
//!         "pressable--visible",
//!         "pressable--active",
//!         "foo",
//!         "bar",
//!     ],
//! );
//! assert_eq!(
//!     resolve(&tokens, None),
//!     "pressable pressable--primary pressable--visible pressable--active foo bar",
//! );
//! ```
//!
//! ## Module-map resolution
//!
//! When a [`ModuleMap`] is supplied, every token is substituted through it.
//! Tokens absent from the map are dropped, not passed through raw:
//!
//! ```
//! use pressable_class::{ModuleMap, resolve};
//!
//! let map = ModuleMap::from_iter([("pressable", "p_x91"), ("pressable--active", "a_j02")]);
//! let tokens = ["pressable", "pressable--active", "unmapped"];
//! assert_eq!(resolve(&tokens, Some(&map)), "p_x91 a_j02");
//! ```

#![no_std]

extern crate alloc;

mod compose;
mod resolve;

pub use compose::{ClassInputs, compose};
pub use resolve::{ModuleMap, resolve, resolve_one};
