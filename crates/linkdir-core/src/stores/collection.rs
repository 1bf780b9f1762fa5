// SPDX-License-Identifier: AGPL-3.0
// Linkdir Core - Observable list shared by the stores
//
// Every write goes through the watch channel in a single step, so a reader
// holding a snapshot or a receiver never sees a half-applied update.

use tokio::sync::watch;

/// An in-memory list whose changes can be observed
#[derive(Debug)]
pub struct Collection<T> {
    items: watch::Sender<Vec<T>>,
}

impl<T: Clone> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: watch::Sender::new(Vec::new()),
        }
    }

    /// Copy of the current items
    pub fn snapshot(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    /// Receiver notified after every change
    pub fn subscribe(&self) -> watch::Receiver<Vec<T>> {
        self.items.subscribe()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// First item matching the predicate
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<T> {
        self.items.borrow().iter().find(|item| predicate(item)).cloned()
    }

    /// Replace the whole list
    pub fn replace(&self, items: Vec<T>) {
        self.items.send_replace(items);
    }

    /// Append one item
    pub fn push(&self, item: T) {
        self.items.send_modify(|items| items.push(item));
    }

    /// Mutate the first matching item in place. Observers are only notified
    /// when an item matched; the closure's return value is passed through.
    pub fn update_first<R>(
        &self,
        mut predicate: impl FnMut(&T) -> bool,
        update: impl FnOnce(&mut T) -> R,
    ) -> Option<R> {
        let mut result = None;
        self.items.send_if_modified(|items| match items.iter_mut().find(|item| predicate(&**item)) {
            Some(item) => {
                result = Some(update(item));
                true
            }
            None => false,
        });
        result
    }
}

impl<T: Clone> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
