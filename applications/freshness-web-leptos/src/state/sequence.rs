use std::cell::Cell;
use std::rc::Rc;

/// Orders the responses of one poller.
///
/// Each request takes a ticket from [`RequestSequence::issue`] before it is
/// sent; [`RequestSequence::accept`] lets a response through only when its
/// ticket is newer than the last one applied. A slow response that resolves
/// after a newer one is dropped instead of overwriting fresher data.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    inner: Rc<SequenceState>,
}

#[derive(Debug, Default)]
struct SequenceState {
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        let next = self.inner.issued.get() + 1;
        self.inner.issued.set(next);
        next
    }

    /// Mark `ticket` as applied if it is newer than the last applied ticket
    pub fn accept(&self, ticket: u64) -> bool {
        if ticket <= self.inner.applied.get() {
            return false;
        }
        self.inner.applied.set(ticket);
        true
    }

    pub fn last_applied(&self) -> u64 {
        self.inner.applied.get()
    }
}
