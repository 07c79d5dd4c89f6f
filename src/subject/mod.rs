//! The subject side of the subscription: the `Subject` trait and the
//! message-holding `MessageSubject` that broadcasts to its observers.

pub mod engine;

pub use engine::MessageSubject;

use crate::observer::ObserverHandle;

/// Subscription management for anything that can be observed.
///
/// Implementations are single-threaded and synchronous: every call runs to
/// completion on the caller's thread before returning.
pub trait Subject {
    /// Append `observer` to the notification list. Attaching the same handle
    /// twice registers it twice.
    fn attach(&self, observer: ObserverHandle);

    /// Remove the first entry matching `observer`. Absent handles are ignored.
    fn detach(&self, observer: &ObserverHandle);

    /// Call `update` on every registered observer, in registration order.
    fn notify(&self);
}
