use super::VertexContainer;
use crate::error::VertexError;
use crate::math::Vertex;

/// Indexed list editor overlay over a [`VertexContainer`].
///
/// This is the surface a property grid drives: it addresses elements by index
/// and may append without a value, in which case the container picks the
/// seed. Removal and in-place edits take the same notification path as the
/// programmatic operations.
pub struct ListEditor<'a, V> {
    container: &'a mut VertexContainer<V>,
}

impl<'a, V: Vertex> ListEditor<'a, V> {
    pub(super) fn new(container: &'a mut VertexContainer<V>) -> Self {
        Self { container }
    }

    /// Seed used when an element is appended without a value.
    ///
    /// The origin for an empty container, otherwise a copy of the last vertex,
    /// so that extending a path starts from where it currently ends.
    #[must_use]
    pub fn default_seed(&self) -> V {
        self.container.last_vertex().unwrap_or_else(|_| V::origin())
    }

    /// Appends an element, using `seed` or the default seed, and returns its index.
    pub fn add_element(&mut self, seed: Option<V>) -> usize {
        let vertex = seed.unwrap_or_else(|| self.default_seed());
        self.container.add_vertex(vertex);
        self.container.len() - 1
    }

    /// Removes the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`VertexError::IndexOutOfRange`] if `index >= len`.
    pub fn remove_element(&mut self, index: usize) -> Result<V, VertexError> {
        self.container.remove_vertex(index)
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`VertexError::IndexOutOfRange`] if `index >= len`.
    pub fn change_element(&mut self, index: usize, vertex: V) -> Result<(), VertexError> {
        self.container.update_vertex(index, vertex)
    }

    /// Number of elements shown by the editor.
    #[must_use]
    pub fn len(&self) -> usize {
        self.container.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }
}
