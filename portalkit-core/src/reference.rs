// SPDX-License-Identifier: LGPL-3.0-only

//! Borrowed-or-shared access to signal values.

use std::ops::Deref;
use std::rc::Rc;

/// A reference to a signal value.
///
/// The built-in signals hand out a shared [Rc] snapshot, so holding one never
/// blocks a later set. Custom signals may borrow straight from a `RefCell`.
pub enum Ref<'a, T> {
    /// Borrow of a value inside a `RefCell`.
    Borrow(std::cell::Ref<'a, T>),
    /// Shared pointer to an immutable value.
    Rc(Rc<T>),
}

impl<T> Deref for Ref<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        match self {
            Ref::Borrow(value) => value,
            Ref::Rc(value) => value,
        }
    }
}
