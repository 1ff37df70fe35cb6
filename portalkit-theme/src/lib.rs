#![warn(missing_docs)]

//! # Portal Theme Resolution
//!
//! Derives a complete, mode-aware visual theme for each portal of a
//! multi-portal web application and publishes it as CSS custom properties.
//!
//! ## Overview
//!
//! - **[catalog]**: one authored [PortalProfile](catalog::PortalProfile) per
//!   [PortalId](id::PortalId): primary scale, accent, sidebar style,
//!   metadata, typography, spacing and motion
//! - **[color]**: HSL lightness algebra deriving dark-mode palettes
//! - **[routing]**: ordered prefix classification of paths into portals
//! - **[theme_resolver]**: `(portal, mode)` to [ThemeDescriptor](theme_resolver::ThemeDescriptor)
//! - **[publisher]**: writes descriptors into an injectable style sink and
//!   removes them again
//! - **[config]**: defaults, TOML files and environment overrides
//!
//! Everything except the publisher is pure.
//!
//! ## Quick Start
//!
//! ```rust
//! use portalkit_theme::id::ColorMode;
//! use portalkit_theme::routing::classify;
//! use portalkit_theme::theme_resolver::resolve;
//!
//! let portal = classify("/customer-portal/billing");
//! let theme = resolve(portal, ColorMode::Light);
//! assert_eq!(theme.metadata.name, "Customer Portal");
//! ```

/// Contains the [catalog::PortalProfile] registry.
pub mod catalog;
/// Contains HSL color derivation.
pub mod color;
/// Contains the [config::ThemeConfig] struct for theme configuration.
pub mod config;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains the [id::PortalId] and [id::ColorMode] enums.
pub mod id;
/// Contains typography, spacing and animation scales.
pub mod metrics;
/// Contains color scales and surface palettes.
pub mod palette;
/// Contains the style sink abstraction and publisher.
pub mod publisher;
/// Contains the [routing::RouteClassifier].
pub mod routing;
/// Contains [theme_resolver::resolve] and the [theme_resolver::ThemeDescriptor].
pub mod theme_resolver;
/// Contains the [variables::ThemeVariables] map.
pub mod variables;
