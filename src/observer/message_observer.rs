use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::{debug, info, warn};

use super::{IdentitySource, Observer, ObserverHandle, ObserverId};
use crate::subject::MessageSubject;
use crate::utils::error::SubscriptionError;

/// Where an observer is in its subscription lifecycle.
///
/// `Detached` is terminal: there is no way to attach the same instance again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverState {
    Unattached,
    Attached,
    Detached,
}

/// An observer bound to one `MessageSubject` for its whole lifetime.
///
/// It caches the last message it was sent and can take itself off the
/// subject's list. Dropping it does not detach it.
#[derive(Debug)]
pub struct MessageObserver {
    id: ObserverId,
    last_message: RefCell<String>,
    subject: Weak<MessageSubject>,
    handle: ObserverHandle,
    state: Cell<ObserverState>,
}

impl MessageObserver {
    /// Create an observer with the next id from `ids` and attach it to
    /// `subject` before returning it.
    pub fn new(subject: &Rc<MessageSubject>, ids: &IdentitySource) -> Rc<Self> {
        let id = ids.next_id();
        let observer = Rc::new_cyclic(|me: &Weak<Self>| {
            let handle: ObserverHandle = me.clone();
            let state = match subject.try_attach(handle.clone()) {
                Ok(()) => ObserverState::Attached,
                Err(e) => {
                    warn!("Observer \"{}\" could not attach: {}", id, e);
                    ObserverState::Unattached
                }
            };
            Self {
                id,
                last_message: RefCell::new(String::new()),
                subject: Rc::downgrade(subject),
                handle,
                state: Cell::new(state),
            }
        });
        info!("Hi, I'm the Observer \"{}\".", id);
        observer
    }

    pub fn id(&self) -> ObserverId {
        self.id
    }

    pub fn state(&self) -> ObserverState {
        self.state.get()
    }

    pub fn last_message(&self) -> String {
        self.last_message.borrow().clone()
    }

    /// The handle this observer registered with, for use with `Subject`
    /// operations directly.
    pub fn handle(&self) -> ObserverHandle {
        self.handle.clone()
    }

    /// Detach from the bound subject. Not guarded: each call performs a
    /// detach, and a call with nothing left to remove changes nothing.
    ///
    /// The observer becomes `Detached` once no entry for it is left. From
    /// then on it ignores deliveries, even if its handle is attached again.
    pub fn remove_me_from_list(&self) {
        let Some(subject) = self.subject.upgrade() else {
            debug!("Observer \"{}\": subject already gone", self.id);
            self.state.set(ObserverState::Detached);
            return;
        };
        match subject.try_detach(&self.handle) {
            Ok(()) | Err(SubscriptionError::NotFound) if subject.is_attached(&self.handle) => {
                info!("Observer \"{}\" is still attached through a duplicate entry.", self.id);
            }
            Ok(()) | Err(SubscriptionError::NotFound) => {
                self.state.set(ObserverState::Detached);
                info!("Observer \"{}\" removed from the list.", self.id);
            }
            Err(e) => warn!("Observer \"{}\" could not detach: {}", self.id, e),
        }
    }
}

impl Observer for MessageObserver {
    fn update(&self, message: &str) {
        match self.state.get() {
            ObserverState::Detached => {
                debug!("Observer \"{}\" is detached, ignoring update", self.id);
                return;
            }
            // attached by hand after the subject refused it at construction
            ObserverState::Unattached => self.state.set(ObserverState::Attached),
            ObserverState::Attached => {}
        }
        let mut last = self.last_message.borrow_mut();
        last.clear();
        last.push_str(message);
        info!(
            "Observer \"{}\": a new message is available --> {}",
            self.id, last
        );
    }
}

impl Drop for MessageObserver {
    fn drop(&mut self) {
        info!("Goodbye, I was the Observer \"{}\".", self.id);
    }
}
