//! Forest-of-parents core shared by every disjoint-set variant.
//!
//! Elements are interned into dense slots on registration. The parent, rank
//! and size tables are indexed by slot, which keeps `find` and `union` working
//! on plain integers once an element has been resolved. The variants differ
//! only in how they resolve an element that has no slot yet.

mod reporting;

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::Element;

#[derive(Clone, Debug)]
pub(crate) struct Forest<T> {
    slots: HashMap<T, usize>,
    elements: Vec<T>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    size: Vec<usize>,
    components: usize,
}

impl<T> Default for Forest<T> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            elements: Vec::new(),
            parent: Vec::new(),
            rank: Vec::new(),
            size: Vec::new(),
            components: 0,
        }
    }
}

impl<T: Element> Forest<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: HashMap::with_capacity(capacity),
            elements: Vec::with_capacity(capacity),
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
            size: Vec::with_capacity(capacity),
            components: 0,
        }
    }

    /// Registers `element` as a singleton unless it already has a slot.
    ///
    /// Returns the element's slot and whether a new entry was created.
    pub(crate) fn register(&mut self, element: T) -> (usize, bool) {
        if let Some(&slot) = self.slots.get(&element) {
            return (slot, false);
        }
        let slot = self.elements.len();
        self.slots.insert(element.clone(), slot);
        self.elements.push(element);
        self.parent.push(slot);
        self.rank.push(0);
        self.size.push(1);
        self.components += 1;
        (slot, true)
    }

    pub(crate) fn slot(&self, element: &T) -> Option<usize> {
        self.slots.get(element).copied()
    }

    pub(crate) fn slot_or_register(&mut self, element: &T) -> usize {
        match self.slot(element) {
            Some(slot) => slot,
            None => self.register(element.clone()).0,
        }
    }

    /// Resolves `node` to its root, repointing every visited slot at the root.
    pub(crate) fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Returns the element stored at the root of `node`'s tree.
    pub(crate) fn root_element(&mut self, node: usize) -> T {
        let root = self.find_root(node);
        self.elements[root].clone()
    }

    /// Merges the trees containing `left` and `right` by rank.
    ///
    /// On equal ranks the root of `left` survives. Returns `false` when both
    /// slots already share a root.
    pub(crate) fn link(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find_root(left);
        let mut right = self.find_root(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.size[left] += self.size[right];
        self.components -= 1;
        trace!(
            root = left,
            absorbed = right,
            rank = self.rank[left],
            size = self.size[left],
            "merged components"
        );
        true
    }

    pub(crate) fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find_root(left) == self.find_root(right)
    }

    pub(crate) fn contains(&self, element: &T) -> bool {
        self.slots.contains_key(element)
    }

    pub(crate) fn parent_of(&self, element: &T) -> Option<&T> {
        let slot = self.slot(element)?;
        self.parent
            .get(slot)
            .and_then(|&parent| self.elements.get(parent))
    }

    pub(crate) fn rank_of(&self, element: &T) -> Option<u8> {
        let slot = self.slot(element)?;
        self.rank.get(slot).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub(crate) const fn component_count(&self) -> usize {
        self.components
    }

    pub(crate) fn clear(&mut self) {
        let discarded = self.elements.len();
        self.slots.clear();
        self.elements.clear();
        self.parent.clear();
        self.rank.clear();
        self.size.clear();
        self.components = 0;
        debug!(discarded, "cleared disjoint-set forest");
    }
}
