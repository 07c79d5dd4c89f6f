use std::cell::Cell;
use std::fmt;

/// Display identity of an observer, unique within one `IdentitySource`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(u64);

impl ObserverId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out increasing observer ids, starting at 1.
///
/// Pass the same source to every observer that should share a numbering.
#[derive(Debug, Default)]
pub struct IdentitySource {
    last: Cell<u64>,
}

impl IdentitySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> ObserverId {
        let next = self.last.get() + 1;
        self.last.set(next);
        ObserverId(next)
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.last.get()
    }
}
