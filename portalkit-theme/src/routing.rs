//! # Route Classifier
//!
//! Maps a navigation path to the portal that owns it. Rules are evaluated top
//! to bottom and the first prefix that matches wins, so more specific prefixes
//! must precede the general prefixes that would shadow them. A path no rule
//! matches belongs to the default portal: classification never fails.
//!
//! ```rust
//! use portalkit_theme::id::PortalId;
//! use portalkit_theme::routing::RouteClassifier;
//!
//! let classifier = RouteClassifier::new();
//! assert_eq!(classifier.classify("/dashboard/platform-admin/users"), PortalId::PlatformAdmin);
//! assert_eq!(classifier.classify("/dashboard/subscribers"), PortalId::IspAdmin);
//! ```

use serde::{Deserialize, Serialize};

use crate::id::PortalId;

/// Portal used when no rule matches.
pub const DEFAULT_PORTAL: PortalId = PortalId::IspAdmin;

/// Built-in rules, most specific first.
const BUILTIN_ROUTES: &[(&str, PortalId)] = &[
    ("/dashboard/platform-admin", PortalId::PlatformAdmin),
    ("/dashboard/partners", PortalId::PlatformResellers),
    ("/dashboard/tenants", PortalId::PlatformTenants),
    ("/platform-admin", PortalId::PlatformAdmin),
    ("/partner", PortalId::PlatformResellers),
    ("/tenant", PortalId::PlatformTenants),
    ("/reseller", PortalId::IspReseller),
    ("/customer-portal", PortalId::IspCustomer),
    ("/customer", PortalId::IspCustomer),
    ("/dashboard", PortalId::IspAdmin),
];

/// A `(prefix, portal)` classification rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRule {
    /// Path prefix, matched with plain `starts_with`.
    pub prefix: String,
    /// Portal owning paths under the prefix.
    pub portal: PortalId,
}

impl RouteRule {
    /// Create a new rule.
    pub fn new(prefix: impl Into<String>, portal: PortalId) -> Self {
        Self {
            prefix: prefix.into(),
            portal,
        }
    }
}

/// Ordered first-match-wins path classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteClassifier {
    rules: Vec<RouteRule>,
    default_portal: PortalId,
}

impl RouteClassifier {
    /// Create a classifier with the built-in rule table and [DEFAULT_PORTAL].
    pub fn new() -> Self {
        Self {
            rules: BUILTIN_ROUTES
                .iter()
                .map(|(prefix, portal)| RouteRule::new(*prefix, *portal))
                .collect(),
            default_portal: DEFAULT_PORTAL,
        }
    }

    /// Create a classifier from an explicit rule list, without built-ins.
    pub fn from_rules(rules: Vec<RouteRule>, default_portal: PortalId) -> Self {
        Self {
            rules,
            default_portal,
        }
    }

    /// Put extra rules ahead of the existing ones, keeping their relative order.
    pub fn with_leading_rules(mut self, rules: impl IntoIterator<Item = RouteRule>) -> Self {
        let mut leading: Vec<RouteRule> = rules.into_iter().collect();
        leading.append(&mut self.rules);
        self.rules = leading;
        self
    }

    /// Change the fallback portal.
    pub fn with_default_portal(mut self, portal: PortalId) -> Self {
        self.default_portal = portal;
        self
    }

    /// The fallback portal.
    pub fn default_portal(&self) -> PortalId {
        self.default_portal
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    /// Classify a path. Total: unmatched paths map to the default portal.
    pub fn classify(&self, path: &str) -> PortalId {
        match self.rules.iter().find(|rule| path.starts_with(rule.prefix.as_str())) {
            Some(rule) => {
                log::trace!("Path '{}' matched '{}' -> {}", path, rule.prefix, rule.portal);
                rule.portal
            },
            None => {
                log::trace!("Path '{}' matched no rule -> {}", path, self.default_portal);
                self.default_portal
            },
        }
    }
}

impl Default for RouteClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a path with the built-in rules.
pub fn classify(path: &str) -> PortalId {
    RouteClassifier::new().classify(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specific_prefix_wins_over_general() {
        assert_eq!(classify("/dashboard/platform-admin/users"), PortalId::PlatformAdmin);
        assert_eq!(classify("/dashboard/partners/42"), PortalId::PlatformResellers);
        assert_eq!(classify("/dashboard/tenants"), PortalId::PlatformTenants);
        assert_eq!(classify("/dashboard"), PortalId::IspAdmin);
    }

    #[test]
    fn test_portal_prefixes() {
        assert_eq!(classify("/customer-portal/billing"), PortalId::IspCustomer);
        assert_eq!(classify("/partner/dashboard"), PortalId::PlatformResellers);
        assert_eq!(classify("/reseller/customers/new"), PortalId::IspReseller);
        assert_eq!(classify("/tenant/settings"), PortalId::PlatformTenants);
    }

    #[test]
    fn test_unmatched_paths_use_default() {
        assert_eq!(classify("/completely/unknown/path"), DEFAULT_PORTAL);
        assert_eq!(classify(""), DEFAULT_PORTAL);
        assert_eq!(classify("dashboard"), DEFAULT_PORTAL);
    }

    #[test]
    fn test_every_builtin_rule_is_reachable() {
        let classifier = RouteClassifier::new();
        for (index, rule) in classifier.rules().iter().enumerate() {
            let shadowed = classifier.rules()[..index]
                .iter()
                .any(|earlier| rule.prefix.starts_with(earlier.prefix.as_str()) && earlier.portal != rule.portal);
            assert!(!shadowed, "rule '{}' is shadowed", rule.prefix);
        }
    }

    #[test]
    fn test_leading_rules_take_precedence() {
        let classifier = RouteClassifier::new()
            .with_leading_rules([RouteRule::new("/dashboard/support", PortalId::IspReseller)])
            .with_default_portal(PortalId::IspCustomer);

        assert_eq!(classifier.classify("/dashboard/support/tickets"), PortalId::IspReseller);
        assert_eq!(classifier.classify("/dashboard/other"), PortalId::IspAdmin);
        assert_eq!(classifier.classify("/nowhere"), PortalId::IspCustomer);
    }
}
