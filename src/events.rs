use std::cell::RefCell;
use std::rc::Rc;

use crate::container::VertexCallbacks;

/// One notification emitted by a [`VertexContainer`](crate::container::VertexContainer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexEvent {
    /// A vertex was appended or inserted at this index.
    Added(usize),
    /// The vertex at this (pre-removal) index was removed.
    Removed(usize),
    Updated,
    Set,
    Cleared,
}

/// Observer that records every notification it receives, in order.
///
/// Clones share the same log, so one handle can be wired into a container
/// while another is kept by the host to inspect what happened.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    log: Rc<RefCell<Vec<VertexEvent>>>,
}

impl EventRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a full set of hooks that append to this recorder's log.
    #[must_use]
    pub fn callbacks(&self) -> VertexCallbacks {
        let add = self.clone();
        let remove = self.clone();
        let update = self.clone();
        let set = self.clone();
        let clear = self.clone();
        VertexCallbacks::new()
            .on_add(move |i| add.push(VertexEvent::Added(i)))
            .on_remove(move |i| remove.push(VertexEvent::Removed(i)))
            .on_update(move || update.push(VertexEvent::Updated))
            .on_set(move || set.push(VertexEvent::Set))
            .on_clear(move || clear.push(VertexEvent::Cleared))
    }

    /// Records an event.
    pub fn push(&self, event: VertexEvent) {
        self.log.borrow_mut().push(event);
    }

    /// Returns a snapshot of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<VertexEvent> {
        self.log.borrow().clone()
    }

    /// Drains and returns the recorded events.
    #[must_use]
    pub fn take(&self) -> Vec<VertexEvent> {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callbacks_record_in_order() {
        let recorder = EventRecorder::new();
        let mut callbacks = recorder.callbacks();

        callbacks.notify_add(0);
        callbacks.notify_update();
        callbacks.notify_remove(0);
        callbacks.notify_set();
        callbacks.notify_clear();

        assert_eq!(
            recorder.take(),
            vec![
                VertexEvent::Added(0),
                VertexEvent::Updated,
                VertexEvent::Removed(0),
                VertexEvent::Set,
                VertexEvent::Cleared,
            ]
        );
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn clones_share_the_log() {
        let recorder = EventRecorder::new();
        let handle = recorder.clone();
        handle.push(VertexEvent::Set);
        assert_eq!(recorder.events(), vec![VertexEvent::Set]);
        recorder.clear();
        assert!(handle.events().is_empty());
    }
}
