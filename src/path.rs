use std::cell::Cell;
use std::rc::Rc;

use crate::container::{VertexCallbacks, VertexContainer};
use crate::events::{EventRecorder, VertexEvent};
use crate::math::Vertex;

/// An editable open or closed path backed by a [`VertexContainer`].
///
/// The path is the owner the container's hooks point back into: every
/// notification bumps a revision counter that dependent caches compare
/// against, and is forwarded to an optional [`EventRecorder`].
///
/// Only the vertices and the `closed` flag are persisted. A deserialized path
/// is silent until [`rewire`](Self::rewire) is called.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditablePath<V> {
    vertices: VertexContainer<V>,
    closed: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    revision: Rc<Cell<u64>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    observer: Option<EventRecorder>,
}

/// Shared state captured by each of the path's hooks.
#[derive(Clone)]
struct Notifier {
    revision: Rc<Cell<u64>>,
    observer: Option<EventRecorder>,
}

impl Notifier {
    fn emit(&self, event: VertexEvent) {
        self.revision.set(self.revision.get() + 1);
        if let Some(observer) = &self.observer {
            observer.push(event);
        }
    }
}

impl<V: Vertex> EditablePath<V> {
    /// Creates an empty path.
    #[must_use]
    pub fn new(closed: bool) -> Self {
        Self::from_vertices(std::iter::empty(), closed)
    }

    /// Creates a path from `vertices`.
    pub fn from_vertices<I>(vertices: I, closed: bool) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut path = Self {
            vertices: VertexContainer::from_vertices(vertices),
            closed,
            revision: Rc::default(),
            observer: None,
        };
        path.rewire();
        path
    }

    /// Installs the path's hooks on its container.
    ///
    /// Must be called after deserialization before edits are tracked.
    pub fn rewire(&mut self) {
        let notifier = Notifier {
            revision: Rc::clone(&self.revision),
            observer: self.observer.clone(),
        };
        let (add, remove, update, set, clear) = (
            notifier.clone(),
            notifier.clone(),
            notifier.clone(),
            notifier.clone(),
            notifier,
        );
        self.vertices.set_callbacks(
            VertexCallbacks::new()
                .on_add(move |i| add.emit(VertexEvent::Added(i)))
                .on_remove(move |i| remove.emit(VertexEvent::Removed(i)))
                .on_update(move || update.emit(VertexEvent::Updated))
                .on_set(move || set.emit(VertexEvent::Set))
                .on_clear(move || clear.emit(VertexEvent::Cleared)),
        );
        tracing::debug!(
            len = self.vertices.len(),
            observed = self.observer.is_some(),
            "path rewired"
        );
    }

    /// Forwards every subsequent notification to `recorder`.
    pub fn observe(&mut self, recorder: EventRecorder) {
        self.observer = Some(recorder);
        self.rewire();
    }

    /// Counter bumped by every notification and by changes to `closed`.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    #[must_use]
    pub fn vertices(&self) -> &[V] {
        self.vertices.vertices()
    }

    #[must_use]
    pub fn container(&self) -> &VertexContainer<V> {
        &self.vertices
    }

    /// Mutable access for editing through the container's operations.
    ///
    /// Replacing the container's callbacks through this handle detaches the
    /// path until the next [`rewire`](Self::rewire).
    pub fn container_mut(&mut self) -> &mut VertexContainer<V> {
        &mut self.vertices
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn set_closed(&mut self, closed: bool) {
        if self.closed != closed {
            self.closed = closed;
            self.revision.set(self.revision.get() + 1);
        }
    }

    /// Returns the number of segments in this path.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.vertices.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Reverses the vertex order as a single bulk set.
    pub fn reverse(&mut self) {
        let reversed: Vec<V> = self.vertices.vertices().iter().rev().copied().collect();
        self.vertices.set_vertices(reversed);
    }
}
