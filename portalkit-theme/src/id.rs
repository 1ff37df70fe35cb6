//! # Portal Identifiers
//!
//! The closed set of portals the application serves, and the light/dark
//! [ColorMode] supplied by the host.
//!
//! ```rust
//! use portalkit_theme::id::PortalId;
//!
//! let portal: PortalId = "ispCustomer".parse().unwrap();
//! assert_eq!(portal, PortalId::IspCustomer);
//! assert_eq!(portal.as_str(), "ispCustomer");
//! assert!("billingDesk".parse::<PortalId>().is_err());
//! ```

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, ThemeResult};

/// Implements `as_str()` / `from_key()` for closed key enums.
#[macro_export]
macro_rules! impl_key_conversion {
    ($enum_name:ident, { $($variant:ident => $str:literal),* $(,)? }) => {
        impl $enum_name {
            /// Get the string key of the value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)*
                }
            }

            /// Parse a value from its string key.
            pub fn from_key(s: &str) -> Option<Self> {
                match s {
                    $($str => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

/// Identifier of one portal (application surface / audience).
///
/// This is a closed set known at build time; every variant has exactly one
/// profile in the [catalog](crate::catalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PortalId {
    /// Platform operators managing the whole deployment.
    PlatformAdmin,
    /// Channel partners reselling the platform.
    PlatformResellers,
    /// Tenant organisations hosted on the platform.
    PlatformTenants,
    /// Staff of an ISP tenant.
    IspAdmin,
    /// Resellers working under an ISP.
    IspReseller,
    /// End customers of an ISP.
    IspCustomer,
}

impl_key_conversion!(PortalId, {
    PlatformAdmin => "platformAdmin",
    PlatformResellers => "platformResellers",
    PlatformTenants => "platformTenants",
    IspAdmin => "ispAdmin",
    IspReseller => "ispReseller",
    IspCustomer => "ispCustomer",
});

impl PortalId {
    /// Every portal, in catalog order.
    pub const ALL: [PortalId; 6] = [
        PortalId::PlatformAdmin,
        PortalId::PlatformResellers,
        PortalId::PlatformTenants,
        PortalId::IspAdmin,
        PortalId::IspReseller,
        PortalId::IspCustomer,
    ];

    /// Parse a portal key, failing loudly for keys outside the closed set.
    pub fn parse_key(key: &str) -> ThemeResult<Self> {
        Self::from_key(key).ok_or_else(|| ThemeError::unknown_portal(key))
    }
}

impl Display for PortalId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PortalId {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_key(s)
    }
}

/// Light or dark display preference. Owned by the host, never decided here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Light appearance.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl_key_conversion!(ColorMode, {
    Light => "light",
    Dark => "dark",
});

impl ColorMode {
    /// Whether this is the dark mode.
    pub fn is_dark(&self) -> bool {
        matches!(self, ColorMode::Dark)
    }
}

impl Display for ColorMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(&s.trim().to_lowercase()).ok_or_else(|| ThemeError::InvalidMode(s.to_string()))
    }
}
