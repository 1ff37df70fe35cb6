use crate::reference::Ref;
use crate::signal::{BoxedSignal, Listener, ListenerId, Signal};
use std::cell::RefCell;
use std::rc::Rc;

type SharedListener<T> = Rc<dyn Fn(&T)>;

/// Simple signal implementation based on [Rc] and [RefCell] to get/set a value and notify listeners when it changes.
///
/// Clones share both the value and the listener list, so a host can keep one
/// clone for writing while the theme provider listens on another.
///
/// Listeners may set the signal again while being notified (e.g. a redirect).
/// The nested update reaches every listener, and the outer dispatch stops
/// instead of delivering the superseded value.
pub struct StateSignal<T: 'static> {
    value: Rc<RefCell<Rc<T>>>,
    listeners: Rc<RefCell<Vec<(ListenerId, SharedListener<T>)>>>,
}

impl<T: 'static> StateSignal<T> {
    /// Creates a new signal with the given value.
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(Rc::new(value))),
            listeners: Rc::new(RefCell::new(Vec::with_capacity(1))),
        }
    }

    /// Number of active listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl<T: Clone + 'static> StateSignal<T> {
    /// Mutate the inner value in a set scope. This scope is needed in order to notify listeners of changes.
    pub fn mutate(&self, op: impl FnOnce(&mut T)) {
        op(Rc::make_mut(&mut self.value.borrow_mut()));
        self.notify();
    }
}

impl<T: 'static> Signal<T> for StateSignal<T> {
    fn get(&self) -> Ref<'_, T> {
        Ref::Rc(self.value.borrow().clone())
    }

    fn set_value(&self, value: T) {
        *self.value.borrow_mut() = Rc::new(value);
        self.notify();
    }

    fn listen(&self, listener: Listener<T>) -> ListenerId {
        let id = ListenerId::next();
        self.listeners.borrow_mut().push((id, Rc::from(listener)));
        id
    }

    fn unlisten(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(listener_id, _)| *listener_id != id);
    }

    fn notify(&self) {
        // Snapshot so listeners may (un)subscribe or set while being notified.
        let listeners: Vec<SharedListener<T>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        let value = self.value.borrow().clone();
        for listener in listeners {
            if !Rc::ptr_eq(&value, &self.value.borrow()) {
                // A listener set a newer value and it was dispatched already.
                break;
            }
            listener(&value);
        }
    }

    fn dyn_clone(&self) -> BoxedSignal<T> {
        Box::new(self.clone())
    }
}

impl<T: 'static> Clone for StateSignal<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            listeners: self.listeners.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_listeners_see_new_value() {
        let signal = StateSignal::new(1);
        let seen = Rc::new(Cell::new(0));
        let seen_in = seen.clone();
        signal.listen(Box::new(move |v: &i32| seen_in.set(*v)));

        signal.set(7);
        assert_eq!(seen.get(), 7);
        assert_eq!(*signal.get(), 7);
    }

    #[test]
    fn test_clones_share_listeners() {
        let host = StateSignal::new(String::from("/"));
        let observed = host.clone();
        let calls = Rc::new(Cell::new(0));
        let calls_in = calls.clone();
        observed.listen(Box::new(move |_: &String| calls_in.set(calls_in.get() + 1)));

        host.set("/partner".to_string());
        assert_eq!(calls.get(), 1);
        assert_eq!(*observed.get(), "/partner");
    }

    #[test]
    fn test_unlisten() {
        let signal = StateSignal::new(0);
        let calls = Rc::new(Cell::new(0));
        let calls_in = calls.clone();
        let id = signal.listen(Box::new(move |_: &i32| calls_in.set(calls_in.get() + 1)));

        signal.set(1);
        signal.unlisten(id);
        signal.set(2);

        assert_eq!(calls.get(), 1);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn test_set_from_listener() {
        let path = StateSignal::new(String::from("/"));
        let redirect = path.clone();
        path.listen(Box::new(move |p: &String| {
            if p == "/old-home" {
                redirect.set("/customer".to_string());
            }
        }));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_in = seen.clone();
        path.listen(Box::new(move |p: &String| seen_in.borrow_mut().push(p.clone())));

        path.set("/old-home".to_string());

        assert_eq!(*path.get(), "/customer");
        assert_eq!(*seen.borrow(), vec!["/customer".to_string()]);
    }

    #[test]
    fn test_mutate_in_place() {
        let signal = StateSignal::new(vec![1]);
        let held = signal.get();
        signal.mutate(|v| v.push(2));

        assert_eq!(*held, vec![1]);
        assert_eq!(*signal.get(), vec![1, 2]);
    }
}
