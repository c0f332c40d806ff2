//! # Events emitted by the API client
//!
//! The client never shows UI or touches the session itself. Instead it emits
//! [`ApiEvent`]s on an [`EventHub`]:
//!
//! | Event | When |
//! |-------|------|
//! | [`ApiEvent::Notice`] with [`NoticeLevel::Error`] | Once for every failed request. |
//! | [`ApiEvent::Notice`] with [`NoticeLevel::Success`] | After a product is created, updated or deleted. |
//! | [`ApiEvent::AuthRejected`] | After any 401 response, in addition to the error notice. |
//!
//! Listeners run synchronously, in subscription order, before the failing call
//! returns to its caller. The storefront runs on a single thread, so the hub uses
//! `Rc`/`RefCell` rather than locks.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient user-facing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiEvent {
    Notice(Notice),
    /// The server answered 401; stored credentials are no longer valid.
    AuthRejected,
}

/// Handle returned by [`EventHub::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener = Rc<dyn Fn(&ApiEvent)>;

/// Listener registry shared by every clone of an `ApiClient`.
#[derive(Clone, Default)]
pub struct EventHub {
    listeners: Rc<RefCell<Vec<(Subscription, Listener)>>>,
    next_id: Rc<Cell<u64>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(&ApiEvent) + 'static) -> Subscription {
        let id = Subscription(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != subscription);
        listeners.len() != before
    }

    pub fn emit(&self, event: &ApiEvent) {
        // Snapshot so listeners may subscribe or unsubscribe while handling.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
