// SPDX-License-Identifier: LGPL-3.0-only

#![warn(missing_docs)]

//! Core library for portalkit => See `portalkit` crate.
//!
//! Contains the reactive inputs and the theme provider that keeps the
//! published portal theme in step with them.

pub use portalkit_theme as theme;

/// Contains the [reference::Ref] for representing a reference to a value.
pub mod reference;

/// Contains the signal system the provider observes.
pub mod signal;

/// Contains the [provider::ThemeProvider] and its [provider::PortalTheme] handle.
pub mod provider;

/// Contains the [context::ThemeContext] for reaching the provider in scope.
pub mod context;
