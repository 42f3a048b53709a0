// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use indexmap::IndexSet;

use crate::scene::SceneHandle;

/// An ordered, duplicate-free selection. Construction modes address
/// entries by slot: slot 0 is the first endpoint of whatever is being
/// built, slot 1 the second, and so on.
#[derive(Clone, Debug, Default)]
pub struct SelectionList {
    items: IndexSet<SceneHandle>,
}

impl SelectionList {
    pub fn new() -> Self {
        SelectionList::default()
    }

    /// Appends `handle` to the selection. Re-selecting an already
    /// selected object moves it to the end.
    pub fn select(&mut self, handle: SceneHandle) {
        self.items.shift_remove(&handle);
        self.items.insert(handle);
    }

    /// Makes `handle` the selection's entry at `slot`, discarding that
    /// slot and everything after it first.
    pub fn select_into(&mut self, slot: usize, handle: SceneHandle) {
        while self.items.len() > slot {
            self.items.pop();
        }
        self.items.insert(handle);
    }

    pub fn unselect(&mut self, handle: SceneHandle) -> bool {
        self.items.shift_remove(&handle)
    }

    pub fn unselect_last(&mut self) -> Option<SceneHandle> {
        self.items.pop()
    }

    pub fn unselect_all(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, handle: SceneHandle) -> bool {
        self.items.contains(&handle)
    }

    pub fn get(&self, slot: usize) -> Option<SceneHandle> {
        self.items.get_index(slot).copied()
    }

    pub fn first(&self) -> Option<SceneHandle> {
        self.get(0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SceneHandle> + '_ {
        self.items.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<SceneHandle> {
        self.items.iter().copied().collect()
    }
}


// End of File
