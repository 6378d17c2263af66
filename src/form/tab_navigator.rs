//! Tab / Shift+Tab cycling through a fixed widget order.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone)]
struct Neighbours<T> {
    prev: T,
    next: T,
}

/// Cyclic keyboard navigation over a list of selectables.
///
/// The navigator never selects anything itself: [`on_tab`](Self::on_tab)
/// returns the widget the host should focus, and the host reports the
/// resulting focus change back through [`on_focus_changed`](Self::on_focus_changed).
#[derive(Debug, Clone)]
pub struct TabNavigator<T> {
    navigation: HashMap<T, Neighbours<T>>,
    first: Option<T>,
    focused: Option<T>,
    last: Option<T>,
}

impl<T: Clone + Eq + Hash + Debug> TabNavigator<T> {
    /// Build the neighbour table. The order wraps around at both ends.
    pub fn new(order: &[T]) -> Result<Self> {
        let count = order.len();
        let mut navigation = HashMap::with_capacity(count);

        for (i, current) in order.iter().enumerate() {
            let neighbours = Neighbours {
                prev: order[(i + count - 1) % count].clone(),
                next: order[(i + 1) % count].clone(),
            };
            if navigation.insert(current.clone(), neighbours).is_some() {
                return Err(Error::DuplicateSelectable(format!("{current:?}")));
            }
        }

        Ok(Self {
            navigation,
            first: order.first().cloned(),
            focused: None,
            last: None,
        })
    }

    pub fn focused(&self) -> Option<&T> {
        self.focused.as_ref()
    }

    pub fn on_focus_changed(&mut self, selected: Option<T>) {
        self.last = std::mem::replace(&mut self.focused, selected);
    }

    /// Widget to select for a Tab press (`shift` for Shift+Tab).
    ///
    /// With nothing focused, focus returns to the previously focused widget,
    /// or the first one. A focused widget outside the order yields `None`.
    pub fn on_tab(&self, shift: bool) -> Option<T> {
        let Some(focused) = &self.focused else {
            return self.last.clone().or_else(|| self.first.clone());
        };

        match self.navigation.get(focused) {
            Some(neighbours) if shift => Some(neighbours.prev.clone()),
            Some(neighbours) => Some(neighbours.next.clone()),
            None => {
                log::trace!("tab: {focused:?} is not part of the tab order");
                None
            }
        }
    }
}
