use slotmap::SlotMap;

use crate::error::PathError;
use crate::math::Point3;
use crate::path::EditablePath;

slotmap::new_key_type! {
    /// Unique identifier for a path in the path store.
    pub struct PathId;
}

/// Central arena that owns the editable paths of a document.
///
/// Paths are addressed by generational ids, so an id held by a UI panel
/// becomes stale rather than dangling once its path is removed.
#[derive(Debug, Default)]
pub struct PathStore {
    paths: SlotMap<PathId, EditablePath<Point3>>,
}

impl PathStore {
    /// Creates a new, empty path store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a path and returns its ID.
    pub fn add_path(&mut self, path: EditablePath<Point3>) -> PathId {
        self.paths.insert(path)
    }

    /// Returns a reference to the path, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::NotFound`] if the id is stale or unknown.
    pub fn path(&self, id: PathId) -> Result<&EditablePath<Point3>, PathError> {
        self.paths.get(id).ok_or(PathError::NotFound)
    }

    /// Returns a mutable reference to the path, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::NotFound`] if the id is stale or unknown.
    pub fn path_mut(&mut self, id: PathId) -> Result<&mut EditablePath<Point3>, PathError> {
        self.paths.get_mut(id).ok_or(PathError::NotFound)
    }

    /// Removes and returns the path.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::NotFound`] if the id is stale or unknown.
    pub fn remove_path(&mut self, id: PathId) -> Result<EditablePath<Point3>, PathError> {
        self.paths.remove(id).ok_or(PathError::NotFound)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Re-installs the hooks of every path, e.g. after loading a document.
    pub fn rewire_all(&mut self) {
        for (_, path) in &mut self.paths {
            path.rewire();
        }
        tracing::debug!(paths = self.paths.len(), "path store rewired");
    }

    /// Iterates over all paths with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (PathId, &EditablePath<Point3>)> {
        self.paths.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};

    fn line() -> EditablePath<Point3> {
        EditablePath::from_vertices(
            [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
            false,
        )
    }

    fn append_to(store: &mut PathStore, id: PathId, point: Point3) -> Result<usize> {
        let path = store.path_mut(id)?;
        let index = path.vertices().len();
        path.container_mut().insert_vertex(index, point)?;
        Ok(index)
    }

    #[test]
    fn add_and_edit_path() {
        let mut store = PathStore::new();
        let id = store.add_path(line());
        assert_eq!(store.len(), 1);

        let index = append_to(&mut store, id, Point3::new(2.0, 0.0, 0.0)).unwrap();
        assert_eq!(index, 2);
        assert_eq!(store.path(id).unwrap().revision(), 1);
        assert_eq!(store.path(id).unwrap().segment_count(), 2);
    }

    #[test]
    fn stale_id_is_not_found() {
        let mut store = PathStore::new();
        let id = store.add_path(line());
        store.remove_path(id).unwrap();

        assert!(store.is_empty());
        assert_eq!(store.path(id).err(), Some(PathError::NotFound));
        assert_eq!(
            append_to(&mut store, id, Point3::origin()),
            Err(Error::Path(PathError::NotFound))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rewire_all_after_load() {
        let json = serde_json::to_string(&line()).unwrap();

        let mut store = PathStore::new();
        let a = store.add_path(serde_json::from_str(&json).unwrap());
        let b = store.add_path(serde_json::from_str(&json).unwrap());

        store.path_mut(a).unwrap().container_mut().clear();
        assert_eq!(store.path(a).unwrap().revision(), 0);

        store.rewire_all();
        store.path_mut(a).unwrap().container_mut().clear();
        store
            .path_mut(b)
            .unwrap()
            .container_mut()
            .update_vertex(1, Point3::new(0.0, 3.0, 0.0))
            .unwrap();

        assert_eq!(store.path(a).unwrap().revision(), 1);
        assert_eq!(store.path(b).unwrap().revision(), 1);
        assert_eq!(store.iter().count(), 2);
    }
}
