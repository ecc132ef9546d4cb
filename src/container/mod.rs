mod callbacks;
mod editor;

pub use callbacks::{IndexFn, VertexCallbacks, VoidFn};
pub use editor::ListEditor;

use crate::error::VertexError;
use crate::math::Vertex;

/// An ordered sequence of vertices that notifies observers of every change.
///
/// Indices are always contiguous in `[0, len)`. Removing a vertex shifts all
/// later vertices down by one, so an index is a position, never an identity.
///
/// Every successful mutation invokes the matching hook of the installed
/// [`VertexCallbacks`] before returning. Rejected requests leave the sequence
/// unchanged and invoke nothing.
///
/// Hooks are not `Send`, so a container is confined to the thread that owns it.
#[derive(Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct VertexContainer<V> {
    vertices: Vec<V>,
    #[cfg_attr(feature = "serde", serde(skip))]
    callbacks: VertexCallbacks,
}

impl<V: Vertex> VertexContainer<V> {
    /// Creates an empty container with no hooks installed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty container with the given hooks installed.
    #[must_use]
    pub fn with_callbacks(callbacks: VertexCallbacks) -> Self {
        Self {
            vertices: Vec::new(),
            callbacks,
        }
    }

    /// Creates a pre-populated container with no hooks installed.
    ///
    /// Nothing is notified since nothing can be observing yet.
    pub fn from_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self {
            vertices: vertices.into_iter().collect(),
            callbacks: VertexCallbacks::default(),
        }
    }

    /// Replaces all five hooks at once.
    ///
    /// Used when hooks were unavailable at construction, e.g. after the
    /// container was deserialized.
    pub fn set_callbacks(&mut self, callbacks: VertexCallbacks) {
        tracing::debug!(wired = callbacks.is_wired(), "vertex callbacks installed");
        self.callbacks = callbacks;
    }

    /// Appends a vertex at the end and notifies `on_add` with its index.
    pub fn add_vertex(&mut self, vertex: V) {
        self.vertices.push(vertex);
        let index = self.vertices.len() - 1;
        tracing::trace!(index, "vertex added");
        self.callbacks.notify_add(index);
    }

    /// Overwrites the vertex at `index` and notifies `on_update`.
    ///
    /// # Errors
    ///
    /// Returns [`VertexError::IndexOutOfRange`] if `index >= len`.
    pub fn update_vertex(&mut self, index: usize, vertex: V) -> Result<(), VertexError> {
        let len = self.vertices.len();
        let Some(slot) = self.vertices.get_mut(index) else {
            tracing::debug!(index, len, "update rejected");
            return Err(VertexError::IndexOutOfRange { index, len });
        };
        *slot = vertex;
        tracing::trace!(index, "vertex updated");
        self.callbacks.notify_update();
        Ok(())
    }

    /// Inserts a vertex so that it ends up at `index`, shifting later vertices
    /// right, and notifies `on_add` with `index`.
    ///
    /// Inserting at `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`VertexError::IndexOutOfRange`] if `index > len`.
    pub fn insert_vertex(&mut self, index: usize, vertex: V) -> Result<(), VertexError> {
        let len = self.vertices.len();
        if index > len {
            tracing::debug!(index, len, "insert rejected");
            return Err(VertexError::IndexOutOfRange { index, len });
        }
        self.vertices.insert(index, vertex);
        tracing::trace!(index, "vertex inserted");
        self.callbacks.notify_add(index);
        Ok(())
    }

    /// Removes the vertex at `index`, shifting later vertices left, and
    /// notifies `on_remove` with the index the removed vertex had.
    ///
    /// The hook runs after the shift.
    ///
    /// # Errors
    ///
    /// Returns [`VertexError::IndexOutOfRange`] if `index >= len`.
    pub fn remove_vertex(&mut self, index: usize) -> Result<V, VertexError> {
        let len = self.vertices.len();
        if index >= len {
            tracing::debug!(index, len, "remove rejected");
            return Err(VertexError::IndexOutOfRange { index, len });
        }
        let removed = self.vertices.remove(index);
        tracing::trace!(index, "vertex removed");
        self.callbacks.notify_remove(index);
        Ok(removed)
    }

    /// Replaces the whole sequence and notifies `on_set`.
    ///
    /// Accepts any ordered sequence of vertices, not only a `Vec`.
    pub fn set_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = V>,
    {
        self.vertices.clear();
        self.vertices.extend(vertices);
        tracing::trace!(len = self.vertices.len(), "vertices set");
        self.callbacks.notify_set();
    }

    /// Empties the sequence and notifies `on_clear`.
    ///
    /// The hook fires even if the container was already empty.
    pub fn clear(&mut self) {
        self.vertices.clear();
        tracing::trace!("vertices cleared");
        self.callbacks.notify_clear();
    }

    /// Returns a copy of the vertex at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`VertexError::IndexOutOfRange`] if `index >= len`.
    pub fn vertex(&self, index: usize) -> Result<V, VertexError> {
        let len = self.vertices.len();
        self.vertices.get(index).copied().ok_or_else(|| {
            tracing::debug!(index, len, "vertex lookup rejected");
            VertexError::IndexOutOfRange { index, len }
        })
    }

    /// Returns a copy of the last vertex.
    ///
    /// # Errors
    ///
    /// Returns [`VertexError::EmptyContainer`] if there are no vertices.
    pub fn last_vertex(&self) -> Result<V, VertexError> {
        self.vertices.last().copied().ok_or_else(|| {
            tracing::debug!("last vertex lookup rejected");
            VertexError::EmptyContainer
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if there are no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Read-only view of the ordered vertices.
    ///
    /// Mutation goes through the container's operations so hooks fire.
    #[must_use]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Returns the indexed list editor overlay for this container.
    pub fn editor(&mut self) -> ListEditor<'_, V> {
        ListEditor::new(self)
    }
}

impl<V> Default for VertexContainer<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            callbacks: VertexCallbacks::default(),
        }
    }
}

impl<V: Vertex> FromIterator<V> for VertexContainer<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_vertices(iter)
    }
}

impl<'a, V> IntoIterator for &'a VertexContainer<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
