//! The observer side of the subscription.
//!
//! Subjects hold observers through `ObserverHandle`, a weak reference, so a
//! subject can never call into an observer that has been dropped.

pub mod identity;
pub mod message_observer;

use std::rc::{Rc, Weak};

pub use identity::{IdentitySource, ObserverId};
pub use message_observer::{MessageObserver, ObserverState};

/// Receives the subject's message each time the subject notifies.
pub trait Observer {
    fn update(&self, message: &str);
}

/// Non-owning reference a subject keeps to one of its observers.
pub type ObserverHandle = Weak<dyn Observer>;

/// Build the handle to attach `observer` to a subject.
pub fn handle<O: Observer + 'static>(observer: &Rc<O>) -> ObserverHandle {
    let weak: Weak<O> = Rc::downgrade(observer);
    weak
}
