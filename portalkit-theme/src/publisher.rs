//! # Style Variable Publisher
//!
//! The only code that mutates shared presentation state. A resolved
//! [ThemeDescriptor] is written into a [StyleSink] together with a portal tag,
//! and the returned [Publication] removes exactly what it wrote.
//!
//! Sinks are injected rather than global: a [StyleTarget] wraps one sink and
//! admits a single [StylePublisher] at a time, so two theme providers can
//! never interleave their variables in the same registry.
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use portalkit_theme::id::{ColorMode, PortalId};
//! use portalkit_theme::publisher::{StylePublisher, StyleRegistry, StyleTarget};
//! use portalkit_theme::theme_resolver::resolve;
//!
//! let registry = Rc::new(RefCell::new(StyleRegistry::new()));
//! let publisher = StylePublisher::acquire(StyleTarget::new(registry.clone())).unwrap();
//!
//! let publication = publisher.publish(&resolve(PortalId::IspCustomer, ColorMode::Light));
//! assert_eq!(registry.borrow().portal_tag(), Some(PortalId::IspCustomer));
//!
//! publication.cleanup();
//! assert!(registry.borrow().is_empty());
//! ```

use std::cell::{Cell, RefCell};
use std::fmt::Write;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::{ThemeError, ThemeResult};
use crate::id::PortalId;
use crate::theme_resolver::ThemeDescriptor;
use crate::variables::ThemeVariables;

/// Destination for published style variables.
pub trait StyleSink {
    /// Write every variable, overwriting existing values.
    fn set_many(&mut self, vars: &ThemeVariables);

    /// Remove the named variables. Unknown names are ignored.
    fn remove_many(&mut self, names: &[String]);

    /// Set the current portal tag.
    fn set_portal_tag(&mut self, portal: PortalId);

    /// Clear the current portal tag.
    fn clear_portal_tag(&mut self);
}

impl<S: StyleSink> StyleSink for Rc<RefCell<S>> {
    fn set_many(&mut self, vars: &ThemeVariables) {
        self.borrow_mut().set_many(vars);
    }

    fn remove_many(&mut self, names: &[String]) {
        self.borrow_mut().remove_many(names);
    }

    fn set_portal_tag(&mut self, portal: PortalId) {
        self.borrow_mut().set_portal_tag(portal);
    }

    fn clear_portal_tag(&mut self) {
        self.borrow_mut().clear_portal_tag();
    }
}

/// In-memory root style registry.
///
/// Stands in for the document root: a flat variable map plus a `data-portal`
/// style tag. [StyleRegistry::to_css] renders it for server-side injection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRegistry {
    vars: IndexMap<String, String>,
    portal_tag: Option<PortalId>,
}

impl StyleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Check if a variable is set.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Number of set variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether neither variables nor a portal tag are set.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty() && self.portal_tag.is_none()
    }

    /// The current portal tag.
    pub fn portal_tag(&self) -> Option<PortalId> {
        self.portal_tag
    }

    /// Remove every variable and the portal tag.
    pub fn clear(&mut self) {
        self.vars.clear();
        self.portal_tag = None;
    }

    /// Render the registry as a root-scoped CSS rule.
    pub fn to_css(&self) -> String {
        let mut css = match self.portal_tag {
            Some(portal) => format!(":root[data-portal=\"{}\"] {{\n", portal),
            None => ":root {\n".to_string(),
        };
        for (name, value) in &self.vars {
            // Writing into a String cannot fail.
            let _ = writeln!(css, "  {}: {};", name, value);
        }
        css.push_str("}\n");
        css
    }
}

impl StyleSink for StyleRegistry {
    fn set_many(&mut self, vars: &ThemeVariables) {
        for (name, value) in vars.iter() {
            self.vars.insert(name.to_string(), value.to_string());
        }
    }

    fn remove_many(&mut self, names: &[String]) {
        for name in names {
            self.vars.shift_remove(name);
        }
    }

    fn set_portal_tag(&mut self, portal: PortalId) {
        self.portal_tag = Some(portal);
    }

    fn clear_portal_tag(&mut self) {
        self.portal_tag = None;
    }
}

/// A style sink shared by whoever publishes into it, with a single-owner claim.
pub struct StyleTarget {
    sink: RefCell<Box<dyn StyleSink>>,
    claimed: Cell<bool>,
}

impl StyleTarget {
    /// Wrap a sink into a shareable target.
    pub fn new(sink: impl StyleSink + 'static) -> Rc<Self> {
        Rc::new(Self {
            sink: RefCell::new(Box::new(sink)),
            claimed: Cell::new(false),
        })
    }

    /// Whether a publisher currently owns this target.
    pub fn is_claimed(&self) -> bool {
        self.claimed.get()
    }

    fn with_sink<R>(&self, op: impl FnOnce(&mut dyn StyleSink) -> R) -> R {
        op(self.sink.borrow_mut().as_mut())
    }
}

/// Exclusive publishing lease over a [StyleTarget].
///
/// Dropping the publisher releases the target for the next owner.
pub struct StylePublisher {
    target: Rc<StyleTarget>,
}

impl StylePublisher {
    /// Claim a target. Fails if another publisher holds it.
    pub fn acquire(target: Rc<StyleTarget>) -> ThemeResult<Self> {
        if target.claimed.replace(true) {
            return Err(ThemeError::SinkAlreadyClaimed);
        }
        Ok(Self { target })
    }

    /// The target this publisher writes to.
    pub fn target(&self) -> &Rc<StyleTarget> {
        &self.target
    }

    /// Write a descriptor's variables and portal tag.
    ///
    /// The caller must clean up the previous [Publication] first; the theme
    /// provider does this on every transition.
    pub fn publish(&self, descriptor: &ThemeDescriptor) -> Publication {
        self.target.with_sink(|sink| {
            sink.set_many(&descriptor.css_vars);
            sink.set_portal_tag(descriptor.portal);
        });
        log::debug!(
            "Published {} style variables for {}",
            descriptor.css_vars.len(),
            descriptor.portal
        );

        Publication {
            target: self.target.clone(),
            names: descriptor.css_vars.names().map(str::to_string).collect(),
            portal: descriptor.portal,
            live: true,
        }
    }
}

impl Drop for StylePublisher {
    fn drop(&mut self) {
        self.target.claimed.set(false);
    }
}

/// A live set of published variables. Cleaning up removes exactly those keys
/// and clears the portal tag; dropping a live publication cleans it up too.
#[must_use = "dropping a publication immediately removes its variables"]
pub struct Publication {
    target: Rc<StyleTarget>,
    names: Vec<String>,
    portal: PortalId,
    live: bool,
}

impl Publication {
    /// The portal this publication tagged.
    pub fn portal(&self) -> PortalId {
        self.portal
    }

    /// The variable names this publication wrote.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Remove the published variables and the portal tag.
    pub fn cleanup(mut self) {
        self.retract();
    }

    fn retract(&mut self) {
        if !self.live {
            return;
        }
        self.live = false;
        self.target.with_sink(|sink| {
            sink.remove_many(&self.names);
            sink.clear_portal_tag();
        });
        log::debug!("Removed {} style variables for {}", self.names.len(), self.portal);
    }
}

impl Drop for Publication {
    fn drop(&mut self) {
        self.retract();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ColorMode;
    use crate::theme_resolver::resolve;

    fn setup() -> (Rc<RefCell<StyleRegistry>>, StylePublisher) {
        let registry = Rc::new(RefCell::new(StyleRegistry::new()));
        let publisher = StylePublisher::acquire(StyleTarget::new(registry.clone())).unwrap();
        (registry, publisher)
    }

    #[test]
    fn test_publish_writes_vars_and_tag() {
        let (registry, publisher) = setup();
        let theme = resolve(PortalId::PlatformAdmin, ColorMode::Dark);
        let publication = publisher.publish(&theme);

        let registry_ref = registry.borrow();
        assert_eq!(registry_ref.len(), theme.css_vars.len());
        assert_eq!(registry_ref.portal_tag(), Some(PortalId::PlatformAdmin));
        for (name, value) in theme.css_vars.iter() {
            assert_eq!(registry_ref.get(name), Some(value));
        }
        assert_eq!(publication.names().len(), theme.css_vars.len());
    }

    #[test]
    fn test_cleanup_leaves_foreign_keys_alone() {
        let (registry, publisher) = setup();
        let mut host_vars = ThemeVariables::new();
        host_vars.set("--host-gutter", "12px");
        registry.borrow_mut().set_many(&host_vars);

        let publication = publisher.publish(&resolve(PortalId::IspReseller, ColorMode::Light));
        publication.cleanup();

        let registry_ref = registry.borrow();
        assert_eq!(registry_ref.len(), 1);
        assert_eq!(registry_ref.get("--host-gutter"), Some("12px"));
        assert_eq!(registry_ref.portal_tag(), None);
    }

    #[test]
    fn test_no_stale_keys_after_switch() {
        let (registry, publisher) = setup();
        let a = resolve(PortalId::IspCustomer, ColorMode::Light);
        let b = resolve(PortalId::PlatformResellers, ColorMode::Light);

        publisher.publish(&a).cleanup();
        let _live = publisher.publish(&b);

        let registry_ref = registry.borrow();
        assert_eq!(registry_ref.portal_tag(), Some(PortalId::PlatformResellers));
        for (name, _) in a.css_vars.iter() {
            assert_eq!(registry_ref.get(name), b.css_vars.get(name));
        }
        assert_eq!(registry_ref.len(), b.css_vars.len());
    }

    #[test]
    fn test_drop_cleans_up() {
        let (registry, publisher) = setup();
        {
            let _publication = publisher.publish(&resolve(PortalId::IspAdmin, ColorMode::Light));
            assert!(!registry.borrow().is_empty());
        }
        assert!(registry.borrow().is_empty());
    }

    #[test]
    fn test_target_admits_one_publisher() {
        let target = StyleTarget::new(StyleRegistry::new());
        let first = StylePublisher::acquire(target.clone()).unwrap();
        assert!(matches!(
            StylePublisher::acquire(target.clone()),
            Err(ThemeError::SinkAlreadyClaimed)
        ));

        drop(first);
        assert!(!target.is_claimed());
        assert!(StylePublisher::acquire(target).is_ok());
    }

    #[test]
    fn test_to_css() {
        let mut registry = StyleRegistry::new();
        let mut vars = ThemeVariables::new();
        vars.set("--portal-accent", "hsl(1, 2%, 3%)");
        registry.set_many(&vars);
        registry.set_portal_tag(PortalId::IspCustomer);

        assert_eq!(
            registry.to_css(),
            ":root[data-portal=\"ispCustomer\"] {\n  --portal-accent: hsl(1, 2%, 3%);\n}\n"
        );

        registry.clear();
        assert_eq!(registry.to_css(), ":root {\n}\n");
    }
}
