// SPDX-License-Identifier: LGPL-3.0-only

//! Theme provider: keeps the published portal theme in step with the host's
//! navigation path and color mode.
//!
//! ## Lifecycle
//!
//! - **Mount**: classify the current path, resolve `(portal, mode)`, publish.
//! - **Path change**: re-classify; only a different portal re-resolves.
//! - **Mode change**: re-resolve the current portal in the new mode.
//! - **Manual override**: [ThemeProvider::set_portal] forces a portal until
//!   the next path change classifies again.
//! - **Teardown**: remove the publication and stop observing the inputs.
//!
//! Every transition cleans up the previous publication before publishing the
//! next one, so no variable of an old portal survives a switch.
//!
//! ## Usage
//!
//! ```rust
//! use portalkit_core::provider::ThemeProvider;
//! use portalkit_core::signal::{state::StateSignal, Signal};
//! use portalkit_theme::id::{ColorMode, PortalId};
//! use portalkit_theme::publisher::{StyleRegistry, StyleTarget};
//!
//! let path = StateSignal::new(String::from("/customer-portal/billing"));
//! let mode = StateSignal::new(ColorMode::Light);
//! let provider = ThemeProvider::mount(&path, &mode, StyleTarget::new(StyleRegistry::new())).unwrap();
//! assert_eq!(provider.current_portal(), PortalId::IspCustomer);
//!
//! path.set(String::from("/partner/dashboard"));
//! assert_eq!(provider.theme().metadata.name, "Partner Portal");
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use portalkit_theme::config::ThemeConfig;
use portalkit_theme::error::{ThemeError, ThemeResult};
use portalkit_theme::id::{ColorMode, PortalId};
use portalkit_theme::publisher::{Publication, StylePublisher, StyleTarget};
use portalkit_theme::routing::RouteClassifier;
use portalkit_theme::theme_resolver::{resolve, ThemeDescriptor};

use crate::signal::fixed::FixedSignal;
use crate::signal::{BoxedSignal, ListenerId, Signal};

/// What triggered a theme transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cause {
    Path,
    Mode,
    Manual,
}

struct ProviderState {
    classifier: RouteClassifier,
    publisher: Rc<StylePublisher>,
    portal: PortalId,
    mode: ColorMode,
    theme: Rc<ThemeDescriptor>,
    publication: Option<Publication>,
    publishing: bool,
    active: bool,
}

impl ProviderState {
    fn new(classifier: RouteClassifier, publisher: StylePublisher, path: &str, mode: ColorMode) -> Self {
        let portal = classifier.classify(path);
        let theme = Rc::new(resolve(portal, mode));
        let publication = Some(publisher.publish(&theme));
        log::info!("Theme provider mounted on {} ({} mode) for '{}'", portal, mode, path);

        Self {
            classifier,
            publisher: Rc::new(publisher),
            portal,
            mode,
            theme,
            publication,
            publishing: false,
            active: true,
        }
    }
}

/// Switch to `(portal, mode)` if it differs from the current pair.
///
/// The state is updated first and the sink is written with no borrow held, so
/// a sink may read the provider through a [PortalTheme] while publishing.
/// Transitions requested from inside a sink are ignored.
fn transition(state: &RefCell<ProviderState>, portal: PortalId, mode: ColorMode, cause: Cause) -> bool {
    let (publisher, previous, theme) = {
        let mut state = state.borrow_mut();
        if !state.active || (portal == state.portal && mode == state.mode) {
            return false;
        }
        if state.publishing {
            log::warn!("Ignoring {:?} switch to {} requested while publishing", cause, portal);
            return false;
        }

        let theme = Rc::new(resolve(portal, mode));
        log::info!(
            "Portal theme {} ({}) -> {} ({}) on {:?}",
            state.portal,
            state.mode,
            portal,
            mode,
            cause
        );
        state.portal = portal;
        state.mode = mode;
        state.theme = theme.clone();
        state.publishing = true;
        (state.publisher.clone(), state.publication.take(), theme)
    };

    if let Some(previous) = previous {
        previous.cleanup();
    }
    let publication = publisher.publish(&theme);

    let mut state = state.borrow_mut();
    state.publication = Some(publication);
    state.publishing = false;
    true
}

fn on_path(state: &RefCell<ProviderState>, path: &str) {
    let (portal, mode) = {
        let state = state.borrow();
        (state.classifier.classify(path), state.mode)
    };
    transition(state, portal, mode, Cause::Path);
}

fn on_mode(state: &RefCell<ProviderState>, mode: ColorMode) {
    let portal = state.borrow().portal;
    transition(state, portal, mode, Cause::Mode);
}

fn set_portal(state: &RefCell<ProviderState>, portal: PortalId) -> bool {
    let mode = state.borrow().mode;
    transition(state, portal, mode, Cause::Manual)
}

fn shutdown(state: &RefCell<ProviderState>) {
    let publication = {
        let mut state = state.borrow_mut();
        if !state.active {
            return;
        }
        state.active = false;
        log::info!("Theme provider for {} torn down", state.portal);
        state.publication.take()
    };
    if let Some(publication) = publication {
        publication.cleanup();
    }
}

/// Owner of the active portal theme for one scope.
///
/// At most one provider may publish into a given [StyleTarget]; mounting a
/// second one fails with [ThemeError::SinkAlreadyClaimed] until the first is
/// torn down or dropped.
pub struct ThemeProvider {
    state: Rc<RefCell<ProviderState>>,
    path: BoxedSignal<String>,
    mode: BoxedSignal<ColorMode>,
    path_listener: ListenerId,
    mode_listener: ListenerId,
}

impl ThemeProvider {
    /// Mount a provider using the built-in route table.
    pub fn mount(
        path: &dyn Signal<String>,
        mode: &dyn Signal<ColorMode>,
        target: Rc<StyleTarget>,
    ) -> ThemeResult<Self> {
        Self::mount_with_classifier(path, mode, target, RouteClassifier::new())
    }

    /// Mount a provider using the routes and default portal of a [ThemeConfig].
    pub fn mount_with_config(
        path: &dyn Signal<String>,
        mode: &dyn Signal<ColorMode>,
        target: Rc<StyleTarget>,
        config: &ThemeConfig,
    ) -> ThemeResult<Self> {
        Self::mount_with_classifier(path, mode, target, config.classifier())
    }

    /// Mount a provider for a host without a mode switch, using the routes,
    /// default portal and color mode of a [ThemeConfig].
    pub fn mount_configured(
        path: &dyn Signal<String>,
        target: Rc<StyleTarget>,
        config: &ThemeConfig,
    ) -> ThemeResult<Self> {
        Self::mount_with_config(path, &FixedSignal::new(config.mode), target, config)
    }

    /// Mount a provider using a custom classifier.
    pub fn mount_with_classifier(
        path: &dyn Signal<String>,
        mode: &dyn Signal<ColorMode>,
        target: Rc<StyleTarget>,
        classifier: RouteClassifier,
    ) -> ThemeResult<Self> {
        let publisher = StylePublisher::acquire(target)?;
        let state = Rc::new(RefCell::new(ProviderState::new(
            classifier,
            publisher,
            &path.get(),
            *mode.get(),
        )));

        let weak = Rc::downgrade(&state);
        let path_listener = path.listen(Box::new(move |path: &String| {
            if let Some(state) = weak.upgrade() {
                on_path(&state, path);
            }
        }));

        let weak = Rc::downgrade(&state);
        let mode_listener = mode.listen(Box::new(move |mode: &ColorMode| {
            if let Some(state) = weak.upgrade() {
                on_mode(&state, *mode);
            }
        }));

        Ok(Self {
            state,
            path: path.dyn_clone(),
            mode: mode.dyn_clone(),
            path_listener,
            mode_listener,
        })
    }

    /// The active portal.
    pub fn current_portal(&self) -> PortalId {
        self.state.borrow().portal
    }

    /// The active color mode.
    pub fn mode(&self) -> ColorMode {
        self.state.borrow().mode
    }

    /// The active theme. A new descriptor is allocated on every transition.
    pub fn theme(&self) -> Rc<ThemeDescriptor> {
        self.state.borrow().theme.clone()
    }

    /// Force a portal, bypassing classification until the next path change.
    ///
    /// Returns whether the portal changed.
    pub fn set_portal(&self, portal: PortalId) -> bool {
        set_portal(&self.state, portal)
    }

    /// A consumer handle that stays valid until this provider is torn down.
    pub fn handle(&self) -> PortalTheme {
        PortalTheme {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Remove the publication, stop observing inputs and release the target.
    pub fn teardown(self) {
        // Drop does the work.
    }

    fn shutdown(&mut self) {
        self.path.unlisten(self.path_listener);
        self.mode.unlisten(self.mode_listener);
        shutdown(&self.state);
    }
}

impl Drop for ThemeProvider {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Consumer view of a provider: current portal, theme and manual override.
///
/// Every accessor fails with [ThemeError::ProviderDropped] once the provider
/// has been torn down.
#[derive(Clone)]
pub struct PortalTheme {
    state: Weak<RefCell<ProviderState>>,
}

impl PortalTheme {
    fn live_state(&self) -> ThemeResult<Rc<RefCell<ProviderState>>> {
        let state = self.state.upgrade().ok_or(ThemeError::ProviderDropped)?;
        if !state.borrow().active {
            return Err(ThemeError::ProviderDropped);
        }
        Ok(state)
    }

    fn with_state<R>(&self, op: impl FnOnce(&ProviderState) -> R) -> ThemeResult<R> {
        let state = self.live_state()?;
        let result = op(&state.borrow());
        Ok(result)
    }

    /// The active portal.
    pub fn current_portal(&self) -> ThemeResult<PortalId> {
        self.with_state(|state| state.portal)
    }

    /// The active color mode.
    pub fn mode(&self) -> ThemeResult<ColorMode> {
        self.with_state(|state| state.mode)
    }

    /// The active theme.
    pub fn theme(&self) -> ThemeResult<Rc<ThemeDescriptor>> {
        self.with_state(|state| state.theme.clone())
    }

    /// Force a portal. Returns whether the portal changed.
    pub fn set_portal(&self, portal: PortalId) -> ThemeResult<bool> {
        let state = self.live_state()?;
        Ok(set_portal(&state, portal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::state::StateSignal;
    use portalkit_theme::publisher::{StyleRegistry, StyleSink};
    use portalkit_theme::variables::ThemeVariables;

    /// Sink that consults the provider through a handle while being written.
    #[derive(Default)]
    struct ObservingSink {
        handle: Option<PortalTheme>,
        override_to: Option<PortalId>,
        seen: Vec<PortalId>,
        overrides: Vec<bool>,
    }

    impl StyleSink for ObservingSink {
        fn set_many(&mut self, _vars: &ThemeVariables) {
            if let (Some(handle), Some(portal)) = (&self.handle, self.override_to) {
                self.overrides.push(handle.set_portal(portal).unwrap());
            }
        }

        fn remove_many(&mut self, _names: &[String]) {}

        fn set_portal_tag(&mut self, _portal: PortalId) {
            if let Some(handle) = &self.handle {
                self.seen.push(handle.theme().unwrap().portal);
            }
        }

        fn clear_portal_tag(&mut self) {}
    }

    struct Harness {
        path: StateSignal<String>,
        mode: StateSignal<ColorMode>,
        registry: Rc<RefCell<StyleRegistry>>,
        target: Rc<StyleTarget>,
    }

    impl Harness {
        fn new(path: &str, mode: ColorMode) -> Self {
            let registry = Rc::new(RefCell::new(StyleRegistry::new()));
            Self {
                path: StateSignal::new(path.to_string()),
                mode: StateSignal::new(mode),
                target: StyleTarget::new(registry.clone()),
                registry,
            }
        }

        fn mount(&self) -> ThemeProvider {
            ThemeProvider::mount(&self.path, &self.mode, self.target.clone()).unwrap()
        }

        fn published_tag(&self) -> Option<PortalId> {
            self.registry.borrow().portal_tag()
        }
    }

    #[test]
    fn test_mount_classifies_and_publishes() {
        let h = Harness::new("/dashboard/platform-admin/users", ColorMode::Light);
        let provider = h.mount();

        assert_eq!(provider.current_portal(), PortalId::PlatformAdmin);
        assert_eq!(h.published_tag(), Some(PortalId::PlatformAdmin));
        assert_eq!(h.registry.borrow().len(), provider.theme().css_vars.len());
    }

    #[test]
    fn test_same_portal_path_change_keeps_descriptor() {
        let h = Harness::new("/customer-portal/billing", ColorMode::Light);
        let provider = h.mount();
        let before = provider.theme();

        h.path.set("/customer-portal/usage".to_string());
        assert!(Rc::ptr_eq(&before, &provider.theme()));
    }

    #[test]
    fn test_mode_change_re_resolves() {
        let h = Harness::new("/tenant", ColorMode::Light);
        let provider = h.mount();
        let light = provider.theme();

        h.mode.set(ColorMode::Dark);
        let dark = provider.theme();

        assert!(!Rc::ptr_eq(&light, &dark));
        assert_eq!(dark.mode, ColorMode::Dark);
        assert_eq!(dark.portal, PortalId::PlatformTenants);
        assert_eq!(
            h.registry.borrow().get("--portal-primary-500"),
            dark.css_vars.get("--portal-primary-500")
        );
    }

    #[test]
    fn test_manual_override_is_not_sticky() {
        let h = Harness::new("/reseller", ColorMode::Light);
        let provider = h.mount();

        assert!(provider.set_portal(PortalId::IspCustomer));
        assert!(!provider.set_portal(PortalId::IspCustomer));
        assert_eq!(h.published_tag(), Some(PortalId::IspCustomer));

        h.path.set("/reseller/customers".to_string());
        assert_eq!(provider.current_portal(), PortalId::IspReseller);
        assert_eq!(h.published_tag(), Some(PortalId::IspReseller));
    }

    #[test]
    fn test_teardown_cleans_up_and_unsubscribes() {
        let h = Harness::new("/partner", ColorMode::Dark);
        let provider = h.mount();
        let handle = provider.handle();
        assert_eq!(h.path.listener_count(), 1);

        provider.teardown();

        assert!(h.registry.borrow().is_empty());
        assert_eq!(h.path.listener_count(), 0);
        assert_eq!(h.mode.listener_count(), 0);
        assert!(!h.target.is_claimed());
        assert!(matches!(handle.theme(), Err(ThemeError::ProviderDropped)));
    }

    #[test]
    fn test_second_provider_is_rejected() {
        let h = Harness::new("/partner", ColorMode::Light);
        let _first = h.mount();

        let second = ThemeProvider::mount(&h.path, &h.mode, h.target.clone());
        assert!(matches!(second, Err(ThemeError::SinkAlreadyClaimed)));
        assert_eq!(h.published_tag(), Some(PortalId::PlatformResellers));
    }

    #[test]
    fn test_fixed_mode_signal() {
        let path = StateSignal::new("/customer".to_string());
        let mode = FixedSignal::new(ColorMode::Dark);
        let provider = ThemeProvider::mount(&path, &mode, StyleTarget::new(StyleRegistry::new())).unwrap();

        assert_eq!(provider.mode(), ColorMode::Dark);
        assert_eq!(provider.current_portal(), PortalId::IspCustomer);
    }

    #[test]
    fn test_handle_override() {
        let h = Harness::new("/dashboard", ColorMode::Light);
        let provider = h.mount();
        let handle = provider.handle();

        assert_eq!(handle.current_portal().unwrap(), PortalId::IspAdmin);
        assert!(handle.set_portal(PortalId::PlatformAdmin).unwrap());
        assert_eq!(provider.current_portal(), PortalId::PlatformAdmin);
        assert_eq!(handle.theme().unwrap().metadata.name, "Platform Admin");
    }

    #[test]
    fn test_sink_reads_handle_while_publishing() {
        let sink = Rc::new(RefCell::new(ObservingSink::default()));
        let path = StateSignal::new("/dashboard".to_string());
        let mode = StateSignal::new(ColorMode::Light);
        let provider = ThemeProvider::mount(&path, &mode, StyleTarget::new(sink.clone())).unwrap();
        sink.borrow_mut().handle = Some(provider.handle());

        path.set("/tenant".to_string());
        mode.set(ColorMode::Dark);
        assert!(provider.set_portal(PortalId::IspReseller));

        assert_eq!(
            sink.borrow().seen,
            vec![PortalId::PlatformTenants, PortalId::PlatformTenants, PortalId::IspReseller]
        );
    }

    #[test]
    fn test_switch_requested_by_sink_is_ignored() {
        let sink = Rc::new(RefCell::new(ObservingSink::default()));
        let path = StateSignal::new("/dashboard".to_string());
        let mode = StateSignal::new(ColorMode::Light);
        let provider = ThemeProvider::mount(&path, &mode, StyleTarget::new(sink.clone())).unwrap();
        {
            let mut sink = sink.borrow_mut();
            sink.handle = Some(provider.handle());
            sink.override_to = Some(PortalId::IspCustomer);
        }

        path.set("/partner".to_string());

        assert_eq!(sink.borrow().overrides, vec![false]);
        assert_eq!(provider.current_portal(), PortalId::PlatformResellers);
    }

    #[test]
    fn test_configured_mode_without_mode_signal() {
        let config = ThemeConfig::new().with_mode(ColorMode::Dark);
        let path = StateSignal::new("/reseller".to_string());
        let provider =
            ThemeProvider::mount_configured(&path, StyleTarget::new(StyleRegistry::new()), &config).unwrap();

        assert_eq!(provider.mode(), ColorMode::Dark);
        assert_eq!(provider.theme().mode, ColorMode::Dark);
    }
}
