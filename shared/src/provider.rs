//! Capabilities the gate consumes: a session provider to observe and a
//! router to redirect with.
//!
//! Both are traits so the gate can be driven by the browser (HTTP polling,
//! yew-router) or by a scripted store in tests.

use crate::session::SessionSnapshot;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Source of session status, readable now and observable over time.
pub trait SessionProvider {
    /// The latest snapshot, read synchronously
    fn current(&self) -> SessionSnapshot;

    /// Register a listener for future changes. Delivery stops when the
    /// returned [`Subscription`] is dropped.
    fn subscribe(&self, listener: Box<dyn Fn(&SessionSnapshot)>) -> Subscription;
}

/// Navigation capability used for the unauthenticated redirect.
pub trait Router {
    /// Navigate without pushing a history entry
    fn replace_navigation(&self, path: &str);
}

/// Guard for a provider subscription. Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

type Listener = Rc<dyn Fn(&SessionSnapshot)>;

#[derive(Default)]
struct StoreInner {
    current: SessionSnapshot,
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
    // Bumped on every published change
    generation: u64,
}

/// In-process session provider.
///
/// Holds the current snapshot and notifies subscribers when it changes.
/// Setting an equal snapshot again is a no-op. Cloning shares the store.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: SessionSnapshot) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().current = snapshot;
        store
    }

    /// Publish a snapshot. Returns whether listeners were notified.
    ///
    /// A listener may publish again from inside its callback. The nested
    /// call delivers the newer snapshot to everyone, and this call stops
    /// so no remaining listener receives the older one afterwards.
    pub fn set(&self, snapshot: SessionSnapshot) -> bool {
        let (generation, listeners) = {
            let mut inner = self.inner.borrow_mut();
            if inner.current == snapshot {
                return false;
            }
            inner.current = snapshot.clone();
            inner.generation += 1;
            let listeners: Vec<Listener> =
                inner.listeners.iter().map(|(_, l)| l.clone()).collect();
            (inner.generation, listeners)
        };

        // Borrow released so listeners can read, unsubscribe or publish re-entrantly
        for listener in listeners {
            if self.inner.borrow().generation != generation {
                break;
            }
            listener(&snapshot);
        }
        true
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Identity comparison, for use as a component property
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SessionStore")
            .field("status", &inner.current.status)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl SessionProvider for SessionStore {
    fn current(&self) -> SessionSnapshot {
        self.inner.borrow().current.clone()
    }

    fn subscribe(&self, listener: Box<dyn Fn(&SessionSnapshot)>) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::from(listener)));
            id
        };

        let weak: Weak<RefCell<StoreInner>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{AuthStatus, Session, SessionUser};
    use std::cell::Cell;

    fn counting_listener(count: &Rc<Cell<usize>>) -> Box<dyn Fn(&SessionSnapshot)> {
        let count = count.clone();
        Box::new(move |_: &SessionSnapshot| count.set(count.get() + 1))
    }

    #[test]
    fn store_starts_loading() {
        let store = SessionStore::new();
        assert_eq!(store.current(), SessionSnapshot::loading());
    }

    #[test]
    fn notifies_only_on_change() {
        let store = SessionStore::new();
        let count = Rc::new(Cell::new(0));
        let _sub = store.subscribe(counting_listener(&count));

        assert!(!store.set(SessionSnapshot::loading()));
        assert!(store.set(SessionSnapshot::unauthenticated()));
        assert!(!store.set(SessionSnapshot::unauthenticated()));
        assert_eq!(count.get(), 1);

        let data = Session {
            user: Some(SessionUser::default()),
            expires: None,
        };
        assert!(store.set(SessionSnapshot::authenticated(data)));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn dropping_subscription_stops_delivery() {
        let store = SessionStore::new();
        let count = Rc::new(Cell::new(0));
        let sub = store.subscribe(counting_listener(&count));
        assert_eq!(store.listener_count(), 1);

        drop(sub);
        assert_eq!(store.listener_count(), 0);

        store.set(SessionSnapshot::unauthenticated());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn listener_can_unsubscribe_during_notification() {
        let store = SessionStore::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let sub = {
            let slot = slot.clone();
            store.subscribe(Box::new(move |_: &SessionSnapshot| {
                slot.borrow_mut().take();
            }))
        };
        *slot.borrow_mut() = Some(sub);

        store.set(SessionSnapshot::unauthenticated());
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn republish_during_notification_wins_for_every_listener() {
        let store = SessionStore::new();
        let seen: Rc<RefCell<Vec<AuthStatus>>> = Rc::default();

        // First listener invalidates the session as soon as it sees it authenticated
        let _first = {
            let publisher = store.clone();
            store.subscribe(Box::new(move |snapshot: &SessionSnapshot| {
                if snapshot.status == AuthStatus::Authenticated {
                    publisher.set(SessionSnapshot::unauthenticated());
                }
            }))
        };
        let _second = {
            let seen = seen.clone();
            store.subscribe(Box::new(move |snapshot: &SessionSnapshot| {
                seen.borrow_mut().push(snapshot.status);
            }))
        };

        let data = Session {
            user: Some(SessionUser::default()),
            expires: None,
        };
        assert!(store.set(SessionSnapshot::authenticated(data)));

        assert_eq!(store.current(), SessionSnapshot::unauthenticated());
        assert_eq!(*seen.borrow(), vec![AuthStatus::Unauthenticated]);
    }

    #[test]
    fn subscription_outliving_store_is_harmless() {
        let store = SessionStore::new();
        let sub = store.subscribe(Box::new(|_: &SessionSnapshot| {}));
        drop(store);
        drop(sub);
    }

    #[test]
    fn clones_share_state() {
        let store = SessionStore::new();
        let other = store.clone();
        other.set(SessionSnapshot::unauthenticated());

        assert_eq!(store.current(), SessionSnapshot::unauthenticated());
        assert_eq!(store, other);
        assert_ne!(store, SessionStore::new());
    }
}
