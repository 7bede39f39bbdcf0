//! Component reports derived from the current forest state.
//!
//! Reports are rebuilt on every call. Resolving each slot compresses its path,
//! so a second report without intervening merges walks only direct links.

use std::collections::{HashMap, HashSet};

use crate::Element;

use super::Forest;

impl<T: Element> Forest<T> {
    /// Groups every registered element under the element at its root.
    pub(crate) fn components(&mut self) -> HashMap<T, HashSet<T>> {
        let mut groups: HashMap<T, HashSet<T>> = HashMap::with_capacity(self.component_count());
        for slot in 0..self.len() {
            let root = self.find_root(slot);
            groups
                .entry(self.elements[root].clone())
                .or_default()
                .insert(self.elements[slot].clone());
        }
        groups
    }

    /// Maps the element at each root to the number of elements in its tree.
    pub(crate) fn component_sizes(&mut self) -> HashMap<T, usize> {
        let mut sizes = HashMap::with_capacity(self.component_count());
        for slot in 0..self.len() {
            let root = self.find_root(slot);
            if root == slot {
                sizes.insert(self.elements[slot].clone(), self.size[slot]);
            }
        }
        sizes
    }
}
