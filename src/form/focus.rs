//! Selection change detection.

/// Reports when the host's current selection changes.
///
/// The host polls it once per frame with whatever widget currently has
/// focus; `None` means nothing is selected.
#[derive(Debug, Clone)]
pub struct FocusTracker<T> {
    current: Option<T>,
}

impl<T> Default for FocusTracker<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T: Clone + PartialEq> FocusTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Returns `Some(selection)` when the selection differs from the last poll.
    pub fn poll(&mut self, selected: Option<&T>) -> Option<Option<T>> {
        if self.current.as_ref() == selected {
            return None;
        }
        self.current = selected.cloned();
        Some(self.current.clone())
    }
}
