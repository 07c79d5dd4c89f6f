//! Walkthroughs that drive a subject and its observers end to end.
//!
//! `run` replays the classic attach/detach sequence; `broadcast` publishes
//! caller-supplied messages to a fixed set of observers.

use std::rc::Rc;

use tracing::info;

use crate::config::SubjectSettings;
use crate::observer::{IdentitySource, MessageObserver, ObserverId};
use crate::subject::MessageSubject;

/// What each observer last heard, captured before teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub last_messages: Vec<(ObserverId, String)>,
    pub remaining_observers: usize,
}

impl DemoReport {
    fn capture(subject: &MessageSubject, observers: &[Rc<MessageObserver>]) -> Self {
        Self {
            last_messages: observers
                .iter()
                .map(|o| (o.id(), o.last_message()))
                .collect(),
            remaining_observers: subject.how_many_observer(),
        }
    }

    pub fn last_message_of(&self, id: u64) -> Option<&str> {
        self.last_messages
            .iter()
            .find(|(observer, _)| observer.get() == id)
            .map(|(_, message)| message.as_str())
    }
}

pub fn run(settings: &SubjectSettings) -> DemoReport {
    let subject = Rc::new(MessageSubject::with_settings(settings.clone()));
    let ids = IdentitySource::new();

    let observer1 = MessageObserver::new(&subject, &ids);
    let observer2 = MessageObserver::new(&subject, &ids);
    let observer3 = MessageObserver::new(&subject, &ids);

    subject.create_message("hello world");
    observer3.remove_me_from_list();

    subject.create_message("The weather is hot today! :p");
    let observer4 = MessageObserver::new(&subject, &ids);

    observer2.remove_me_from_list();
    let observer5 = MessageObserver::new(&subject, &ids);

    subject.create_message("My new car is great! ;)");
    observer5.remove_me_from_list();

    observer4.remove_me_from_list();
    observer1.remove_me_from_list();

    let observers = [observer1, observer2, observer3, observer4, observer5];
    let report = DemoReport::capture(&subject, &observers);

    drop(observers);
    drop(subject);
    report
}

/// Attach `observers` fresh observers, publish each of `messages`, optionally
/// run the business-logic trigger, then detach everyone.
pub fn broadcast(
    settings: &SubjectSettings,
    observers: usize,
    messages: &[String],
    business_logic: bool,
) -> DemoReport {
    let subject = Rc::new(MessageSubject::with_settings(settings.clone()));
    let ids = IdentitySource::new();

    let attached: Vec<_> = (0..observers)
        .map(|_| MessageObserver::new(&subject, &ids))
        .collect();

    if messages.is_empty() && !business_logic {
        subject.create_default_message();
    }
    for message in messages {
        subject.create_message(message.as_str());
    }
    if business_logic {
        subject.some_business_logic();
    }

    let report = DemoReport::capture(&subject, &attached);
    info!(
        "Broadcast {} messages to {} observers",
        messages.len(),
        attached.len()
    );

    for observer in &attached {
        observer.remove_me_from_list();
    }
    report
}

#[cfg(test)]
mod tests;
