use std::fmt;

/// Hook invoked with the index of an added or removed vertex.
pub type IndexFn = Box<dyn FnMut(usize)>;

/// Hook invoked without arguments.
pub type VoidFn = Box<dyn FnMut()>;

/// The five optional notification hooks of a
/// [`VertexContainer`](super::VertexContainer).
///
/// Every hook is independently optional; an absent hook is a no-op. Hooks are
/// supplied by the owning object and are never persisted.
#[derive(Default)]
pub struct VertexCallbacks {
    add: Option<IndexFn>,
    remove: Option<IndexFn>,
    update: Option<VoidFn>,
    set: Option<VoidFn>,
    clear: Option<VoidFn>,
}

impl VertexCallbacks {
    /// Creates a set of callbacks with every hook absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hook called with the index of an added or inserted vertex.
    #[must_use]
    pub fn on_add(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.add = Some(Box::new(f));
        self
    }

    /// Sets the hook called with the pre-removal index of a removed vertex.
    #[must_use]
    pub fn on_remove(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.remove = Some(Box::new(f));
        self
    }

    /// Sets the hook called after a single vertex is overwritten in place.
    #[must_use]
    pub fn on_update(mut self, f: impl FnMut() + 'static) -> Self {
        self.update = Some(Box::new(f));
        self
    }

    /// Sets the hook called after the whole sequence is replaced.
    #[must_use]
    pub fn on_set(mut self, f: impl FnMut() + 'static) -> Self {
        self.set = Some(Box::new(f));
        self
    }

    /// Sets the hook called after the sequence is emptied.
    #[must_use]
    pub fn on_clear(mut self, f: impl FnMut() + 'static) -> Self {
        self.clear = Some(Box::new(f));
        self
    }

    /// Returns `true` if at least one hook is present.
    #[must_use]
    pub fn is_wired(&self) -> bool {
        self.add.is_some()
            || self.remove.is_some()
            || self.update.is_some()
            || self.set.is_some()
            || self.clear.is_some()
    }

    /// Invokes the add hook, if present.
    pub(crate) fn notify_add(&mut self, index: usize) {
        if let Some(f) = self.add.as_mut() {
            f(index);
        }
    }

    /// Invokes the remove hook, if present.
    pub(crate) fn notify_remove(&mut self, index: usize) {
        if let Some(f) = self.remove.as_mut() {
            f(index);
        }
    }

    /// Invokes the update hook, if present.
    pub(crate) fn notify_update(&mut self) {
        if let Some(f) = self.update.as_mut() {
            f();
        }
    }

    /// Invokes the set hook, if present.
    pub(crate) fn notify_set(&mut self) {
        if let Some(f) = self.set.as_mut() {
            f();
        }
    }

    /// Invokes the clear hook, if present.
    pub(crate) fn notify_clear(&mut self) {
        if let Some(f) = self.clear.as_mut() {
            f();
        }
    }
}

impl fmt::Debug for VertexCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexCallbacks")
            .field("add", &self.add.is_some())
            .field("remove", &self.remove.is_some())
            .field("update", &self.update.is_some())
            .field("set", &self.set.is_some())
            .field("clear", &self.clear.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn absent_hooks_are_noops() {
        let mut callbacks = VertexCallbacks::new();
        assert!(!callbacks.is_wired());
        callbacks.notify_add(0);
        callbacks.notify_remove(0);
        callbacks.notify_update();
        callbacks.notify_set();
        callbacks.notify_clear();
    }

    #[test]
    fn present_hooks_receive_index() {
        let seen = Rc::new(Cell::new(usize::MAX));
        let seen_add = Rc::clone(&seen);
        let mut callbacks = VertexCallbacks::new().on_add(move |i| seen_add.set(i));
        assert!(callbacks.is_wired());

        callbacks.notify_add(7);
        assert_eq!(seen.get(), 7);

        // Removal has no hook, the add hook must not fire for it.
        callbacks.notify_remove(3);
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn debug_reports_present_hooks() {
        let callbacks = VertexCallbacks::new().on_clear(|| {});
        let text = format!("{callbacks:?}");
        assert!(text.contains("clear: true"), "{text}");
        assert!(text.contains("add: false"), "{text}");
    }
}
