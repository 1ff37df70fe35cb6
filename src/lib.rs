#![warn(missing_docs)]

//! Portal-aware theming for multi-portal web applications.
//!
//! Classifies a navigation path into one of six portals, resolves that
//! portal's visual identity for the current color mode and publishes it as
//! namespaced style variables.

pub use portalkit_core as core;
pub use portalkit_theme as theme;

/// A "prelude" for users of portalkit.
///
/// Importing this module brings into scope the most common types
/// needed to mount a theme provider.
///
/// ```rust
/// use portalkit::prelude::*;
///
/// let path = StateSignal::new(String::from("/reseller/orders"));
/// let mode = FixedSignal::new(ColorMode::Dark);
/// let provider = ThemeProvider::mount(&path, &mode, StyleTarget::new(StyleRegistry::new())).unwrap();
/// assert_eq!(provider.current_portal(), PortalId::IspReseller);
/// ```
pub mod prelude {
    pub use crate::core::context::ThemeContext;
    pub use crate::core::provider::{PortalTheme, ThemeProvider};
    pub use crate::core::reference::Ref;
    pub use crate::core::signal::{fixed::FixedSignal, state::StateSignal, *};

    pub use crate::theme::catalog::{get_profile, PortalProfile};
    pub use crate::theme::config::ThemeConfig;
    pub use crate::theme::error::{ThemeError, ThemeResult};
    pub use crate::theme::id::{ColorMode, PortalId};
    pub use crate::theme::publisher::{StylePublisher, StyleRegistry, StyleSink, StyleTarget};
    pub use crate::theme::routing::{classify, RouteClassifier};
    pub use crate::theme::theme_resolver::{resolve, ThemeDescriptor};
}
