// SPDX-License-Identifier: LGPL-3.0-only

//! Observable values the theme provider reacts to.
//!
//! The host owns the navigation path and the color mode; it exposes them as
//! signals and the provider subscribes to their change notifications.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::reference::Ref;

/// Contains the [fixed::FixedSignal].
pub mod fixed;
/// Contains the [state::StateSignal].
pub mod state;

/// Callback invoked with the new value whenever a signal changes.
pub type Listener<T> = Box<dyn Fn(&T)>;

/// A boxed signal.
pub type BoxedSignal<T> = Box<dyn Signal<T>>;

/// Handle returned by [Signal::listen], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// An observable value.
pub trait Signal<T: 'static> {
    /// Get the current value.
    fn get(&self) -> Ref<'_, T>;

    /// Replace the value and notify listeners.
    fn set_value(&self, value: T);

    /// Subscribe to changes.
    fn listen(&self, listener: Listener<T>) -> ListenerId;

    /// Remove a subscription. Unknown ids are ignored.
    fn unlisten(&self, id: ListenerId);

    /// Invoke every listener with the current value.
    fn notify(&self);

    /// Clone the signal into a box. Clones share value and listeners.
    fn dyn_clone(&self) -> BoxedSignal<T>;

    /// Set the value. Alias of [Signal::set_value].
    fn set(&self, value: T) {
        self.set_value(value);
    }
}
