use super::{broadcast, run};
use crate::config::SubjectSettings;

#[test]
fn run_reports_what_each_observer_heard() {
    let report = run(&SubjectSettings::default());

    assert_eq!(report.last_messages.len(), 5);
    assert_eq!(report.last_message_of(1), Some("My new car is great! ;)"));
    assert_eq!(report.last_message_of(2), Some("The weather is hot today! :p"));
    assert_eq!(report.last_message_of(3), Some("hello world"));
    assert_eq!(report.last_message_of(4), Some("My new car is great! ;)"));
    assert_eq!(report.last_message_of(5), Some("My new car is great! ;)"));
    assert_eq!(report.remaining_observers, 0);
}

#[test]
fn broadcast_reaches_every_observer() {
    let messages = vec!["one".to_string(), "two".to_string()];
    let report = broadcast(&SubjectSettings::default(), 3, &messages, false);

    assert_eq!(report.remaining_observers, 3);
    assert!(report.last_messages.iter().all(|(_, m)| m == "two"));
}

#[test]
fn broadcast_without_messages_sends_the_default() {
    let report = broadcast(&SubjectSettings::default(), 2, &[], false);
    assert_eq!(report.last_message_of(2), Some("empty"));
}

#[test]
fn broadcast_runs_business_logic_last() {
    let messages = vec!["first".to_string()];
    let report = broadcast(&SubjectSettings::default(), 1, &messages, true);
    assert_eq!(report.last_message_of(1), Some("change message message"));
}

#[test]
fn broadcast_with_no_observers() {
    let report = broadcast(&SubjectSettings::default(), 0, &["x".to_string()], false);
    assert!(report.last_messages.is_empty());
    assert_eq!(report.remaining_observers, 0);
}
