use std::rc::Rc;

use crate::observer::{IdentitySource, MessageObserver, ObserverState, handle};
use crate::subject::{MessageSubject, Subject};
use crate::tests::support::{RecordingObserver, new_log};

#[test]
fn attach_detach_sequence_delivers_to_current_observers() {
    let subject = MessageSubject::new();
    let log = new_log();
    let o1 = RecordingObserver::new("o1", &log);
    let o2 = RecordingObserver::new("o2", &log);
    let o3 = RecordingObserver::new("o3", &log);
    let o4 = RecordingObserver::new("o4", &log);
    let o5 = RecordingObserver::new("o5", &log);

    subject.attach(handle(&o1));
    subject.attach(handle(&o2));
    subject.attach(handle(&o3));
    subject.create_message("hello world");

    subject.detach(&handle(&o3));
    subject.create_message("weather");

    subject.attach(handle(&o4));
    subject.detach(&handle(&o2));
    subject.attach(handle(&o5));
    subject.create_message("car");

    let expected: Vec<(&str, String)> = [
        ("o1", "hello world"),
        ("o2", "hello world"),
        ("o3", "hello world"),
        ("o1", "weather"),
        ("o2", "weather"),
        ("o1", "car"),
        ("o4", "car"),
        ("o5", "car"),
    ]
    .into_iter()
    .map(|(name, message)| (name, message.to_string()))
    .collect();
    assert_eq!(*log.borrow(), expected);
}

#[test]
fn count_tracks_attaches_minus_detaches() {
    let subject = MessageSubject::new();
    let log = new_log();
    let observers: Vec<_> = ["a", "b", "c", "d"]
        .into_iter()
        .map(|name| RecordingObserver::new(name, &log))
        .collect();

    for o in &observers {
        subject.attach(handle(o));
    }
    subject.attach(handle(&observers[0]));
    assert_eq!(subject.how_many_observer(), 5);

    subject.detach(&handle(&observers[0]));
    subject.detach(&handle(&observers[3]));
    subject.detach(&handle(&observers[3]));
    assert_eq!(subject.how_many_observer(), 3);
}

#[test]
fn self_detaching_observers_follow_the_lifecycle() {
    let subject = Rc::new(MessageSubject::new());
    let ids = IdentitySource::new();
    let o1 = MessageObserver::new(&subject, &ids);
    let o2 = MessageObserver::new(&subject, &ids);

    subject.create_message("hello");
    o2.remove_me_from_list();
    subject.create_message("bye");

    assert_eq!(o1.last_message(), "bye");
    assert_eq!(o2.last_message(), "hello");
    assert_eq!(o1.state(), ObserverState::Attached);
    assert_eq!(o2.state(), ObserverState::Detached);
}
