// SPDX-License-Identifier: LGPL-3.0-only

use portalkit_theme::error::{ThemeError, ThemeResult};

use crate::provider::{PortalTheme, ThemeProvider};

/// Scope through which descendants reach the theme provider.
///
/// A context is cheap to clone and can be handed down the component tree.
/// Consumers outside any provider get [ThemeError::MissingProvider] instead of
/// a silent default.
#[derive(Clone, Default)]
pub struct ThemeContext {
    theme: Option<PortalTheme>,
}

impl ThemeContext {
    /// Create a context with no provider in scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context scoped to the given provider.
    pub fn with_provider(provider: &ThemeProvider) -> Self {
        Self {
            theme: Some(provider.handle()),
        }
    }

    /// Whether a provider was ever placed in this scope.
    pub fn has_provider(&self) -> bool {
        self.theme.is_some()
    }

    /// Get the portal theme of the enclosing provider.
    pub fn portal_theme(&self) -> ThemeResult<PortalTheme> {
        let theme = self.theme.clone().ok_or(ThemeError::MissingProvider)?;
        theme.current_portal()?;
        Ok(theme)
    }
}
