use std::cell::RefCell;
use std::rc::Rc;

use crate::observer::Observer;

pub(crate) type DeliveryLog = Rc<RefCell<Vec<(&'static str, String)>>>;

/// Test observer that appends every delivery to a shared log.
pub(crate) struct RecordingObserver {
    pub name: &'static str,
    log: DeliveryLog,
}

impl RecordingObserver {
    pub fn new(name: &'static str, log: &DeliveryLog) -> Rc<Self> {
        Rc::new(Self {
            name,
            log: Rc::clone(log),
        })
    }
}

impl Observer for RecordingObserver {
    fn update(&self, message: &str) {
        self.log.borrow_mut().push((self.name, message.to_string()));
    }
}

pub(crate) fn new_log() -> DeliveryLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub(crate) fn names(log: &DeliveryLog) -> Vec<&'static str> {
    log.borrow().iter().map(|(name, _)| *name).collect()
}
