//! Subject engine
//!
//! `MessageSubject` owns a message and an ordered list of weak observer
//! handles. It never owns an observer: the client keeps the `Rc`s, and an
//! observer dropped while still attached is skipped and pruned on the next
//! notification.
//!
//! Concurrency and usage notes:
//! - The type is built on `Rc` and `RefCell`, so it is neither `Send` nor
//!   `Sync`. Sharing a subject across threads needs a different type with
//!   a lock around both the message and the observer list.
//! - Changing the subject from inside an observer's `update` is not
//!   supported. While a notification is running, every mutating call on the
//!   same subject is rejected and logged, and the state is left untouched.

use std::cell::{Cell, RefCell};

use tracing::{debug, error, info, warn};

use super::Subject;
use crate::config::SubjectSettings;
use crate::observer::ObserverHandle;
use crate::utils::error::SubscriptionError;

#[derive(Debug)]
pub struct MessageSubject {
    message: RefCell<String>,
    observers: RefCell<Vec<ObserverHandle>>,
    notifying: Cell<bool>,
    settings: SubjectSettings,
}

/// Clears the notifying flag when a notification finishes, including when
/// an observer panics.
struct NotifyingGuard<'a>(&'a Cell<bool>);

impl Drop for NotifyingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl Default for MessageSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageSubject {
    pub fn new() -> Self {
        Self::with_settings(SubjectSettings::default())
    }

    pub fn with_settings(settings: SubjectSettings) -> Self {
        Self {
            message: RefCell::new(String::new()),
            observers: RefCell::new(Vec::new()),
            notifying: Cell::new(false),
            settings,
        }
    }

    pub fn settings(&self) -> &SubjectSettings {
        &self.settings
    }

    /// A copy of the current message.
    pub fn message(&self) -> String {
        self.message.borrow().clone()
    }

    /// Store `text` as the new message and notify every observer.
    pub fn create_message(&self, text: impl Into<String>) {
        if let Err(e) = self.set_message(text.into()) {
            error!("{}", e);
            return;
        }
        self.notify();
    }

    /// Publish the configured default message (`"empty"` unless overridden).
    pub fn create_default_message(&self) {
        let text = self.settings.default_message.clone();
        self.create_message(text);
    }

    /// Stand-in for the work a real subject does: it changes its state,
    /// notifies, and then carries on.
    pub fn some_business_logic(&self) {
        let text = self.settings.business_message.clone();
        if let Err(e) = self.set_message(text) {
            error!("{}", e);
            return;
        }
        self.notify();
        info!("I'm about to do something important.");
    }

    /// Number of live observers currently registered, duplicates included.
    pub fn how_many_observer(&self) -> usize {
        let count = self
            .observers
            .borrow()
            .iter()
            .filter(|o| o.strong_count() > 0)
            .count();
        info!("There are {} observers in the list.", count);
        count
    }

    /// Whether `observer` has at least one entry in the list.
    pub fn is_attached(&self, observer: &ObserverHandle) -> bool {
        self.observers.borrow().iter().any(|o| o.ptr_eq(observer))
    }

    /// Attach, rejecting a handle that is already registered.
    pub fn try_attach(&self, observer: ObserverHandle) -> Result<(), SubscriptionError> {
        self.push(observer, true)
    }

    /// Detach, reporting a handle that is not registered.
    pub fn try_detach(&self, observer: &ObserverHandle) -> Result<(), SubscriptionError> {
        self.remove(observer, true)
    }

    fn ensure_idle(&self, operation: &'static str) -> Result<(), SubscriptionError> {
        if self.notifying.get() {
            return Err(SubscriptionError::ReentrantMutation { operation });
        }
        Ok(())
    }

    fn set_message(&self, text: String) -> Result<(), SubscriptionError> {
        self.ensure_idle("change the message")?;
        *self.message.borrow_mut() = text;
        Ok(())
    }

    fn push(
        &self,
        observer: ObserverHandle,
        reject_duplicate: bool,
    ) -> Result<(), SubscriptionError> {
        self.ensure_idle("attach")?;
        let mut observers = self.observers.borrow_mut();
        if reject_duplicate && observers.iter().any(|o| o.ptr_eq(&observer)) {
            return Err(SubscriptionError::DuplicateSubscription);
        }
        observers.push(observer);
        Ok(())
    }

    fn remove(
        &self,
        observer: &ObserverHandle,
        require_present: bool,
    ) -> Result<(), SubscriptionError> {
        self.ensure_idle("detach")?;
        let mut observers = self.observers.borrow_mut();
        match observers.iter().position(|o| o.ptr_eq(observer)) {
            Some(index) => {
                observers.remove(index);
                Ok(())
            }
            None if require_present => Err(SubscriptionError::NotFound),
            None => Ok(()),
        }
    }

    fn prune(&self) {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|o| o.strong_count() > 0);
        let pruned = before - observers.len();
        if pruned > 0 {
            debug!("Pruned {} dropped observers", pruned);
        }
    }
}

impl Subject for MessageSubject {
    fn attach(&self, observer: ObserverHandle) {
        match self.push(observer, self.settings.strict_subscriptions) {
            Ok(()) => {}
            Err(e @ SubscriptionError::ReentrantMutation { .. }) => error!("{}", e),
            Err(e) => warn!("Attach rejected: {}", e),
        }
    }

    fn detach(&self, observer: &ObserverHandle) {
        match self.remove(observer, self.settings.strict_subscriptions) {
            Ok(()) => {}
            Err(e @ SubscriptionError::ReentrantMutation { .. }) => error!("{}", e),
            Err(e) => warn!("Detach rejected: {}", e),
        }
    }

    fn notify(&self) {
        if let Err(e) = self.ensure_idle("notify") {
            error!("{}", e);
            return;
        }
        self.prune();
        self.how_many_observer();

        self.notifying.set(true);
        let _guard = NotifyingGuard(&self.notifying);
        let message = self.message.borrow();
        let observers = self.observers.borrow();
        for entry in observers.iter() {
            match entry.upgrade() {
                Some(observer) => observer.update(&message),
                // dropped by an earlier callback in this round
                None => debug!("Skipping dropped observer"),
            }
        }
    }
}

impl Drop for MessageSubject {
    fn drop(&mut self) {
        info!("Goodbye, I was the Subject.");
    }
}
