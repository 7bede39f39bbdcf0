//! Open-world union-find that registers elements on first use.

use std::{
    collections::{HashMap, HashSet},
    convert::Infallible,
};

use crate::{DisjointSet, Element, forest::Forest};

/// Disjoint sets over a universe that grows on demand.
///
/// The structure starts empty. [`DynamicUnionFind::find`] and
/// [`DynamicUnionFind::union`] register any element they have not seen as a
/// singleton before resolving it, so neither operation can fail. Compression
/// and union-by-rank behave exactly as in [`crate::UnionFind`].
///
/// # Examples
/// ```
/// use cputils_core::DynamicUnionFind;
///
/// let mut dsu = DynamicUnionFind::new();
/// dsu.union(&1, &2);
/// dsu.union(&2, &3);
/// dsu.union(&4, &5);
///
/// assert_eq!(dsu.len(), 5);
/// assert_eq!(dsu.find(&1), dsu.find(&3));
/// assert!(!dsu.connected(&1, &4));
/// ```
#[derive(Clone, Debug)]
pub struct DynamicUnionFind<T> {
    forest: Forest<T>,
}

impl<T> Default for DynamicUnionFind<T> {
    fn default() -> Self {
        Self {
            forest: Forest::default(),
        }
    }
}

impl<T: Element> DynamicUnionFind<T> {
    /// Creates an empty structure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty structure with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            forest: Forest::with_capacity(capacity),
        }
    }

    /// Creates a structure by merging each `(left, right)` pair in order.
    ///
    /// # Examples
    /// ```
    /// use cputils_core::DynamicUnionFind;
    ///
    /// let mut dsu = DynamicUnionFind::from_pairs([("a", "b"), ("c", "d"), ("b", "d")]);
    /// assert_eq!(dsu.find(&"a"), dsu.find(&"d"));
    /// assert_eq!(dsu.component_count(), 1);
    /// ```
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let mut dsu = Self::new();
        dsu.extend(pairs);
        dsu
    }

    /// Resolves `element` to the representative of its component.
    ///
    /// An unseen element is registered as a singleton and returned as its own
    /// representative.
    pub fn find(&mut self, element: &T) -> T {
        let slot = self.forest.slot_or_register(element);
        self.forest.root_element(slot)
    }

    /// Merges the components containing `left` and `right` by rank,
    /// registering either element if unseen.
    ///
    /// Returns `true` when a merge happened and `false` when both elements
    /// already shared a component, including `left == right`.
    pub fn union(&mut self, left: &T, right: &T) -> bool {
        let left = self.forest.slot_or_register(left);
        let right = self.forest.slot_or_register(right);
        self.forest.link(left, right)
    }

    /// Reports whether `left` and `right` share a representative,
    /// registering either element if unseen.
    pub fn connected(&mut self, left: &T, right: &T) -> bool {
        let left = self.forest.slot_or_register(left);
        let right = self.forest.slot_or_register(right);
        self.forest.connected(left, right)
    }

    /// Registers `element` as a singleton if unseen.
    ///
    /// Returns `true` when a new entry was created.
    pub fn insert(&mut self, element: T) -> bool {
        self.forest.register(element).1
    }

    /// Reports whether `element` has an entry. Never registers anything.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.forest.contains(element)
    }

    /// Number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forest.len()
    }

    /// Whether no element is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forest.is_empty()
    }

    /// Number of components currently in the forest.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.forest.component_count()
    }

    /// Discards every entry.
    pub fn clear(&mut self) {
        self.forest.clear();
    }

    /// Returns the element `element` currently points to, without compressing.
    ///
    /// Roots point to themselves. Returns `None` for unseen elements.
    #[must_use]
    pub fn parent_of(&self, element: &T) -> Option<&T> {
        self.forest.parent_of(element)
    }

    /// Returns the rank recorded for `element`, or `None` if unseen.
    #[must_use]
    pub fn rank_of(&self, element: &T) -> Option<u8> {
        self.forest.rank_of(element)
    }

    /// Maps each representative to the elements of its component.
    #[must_use]
    pub fn components(&mut self) -> HashMap<T, HashSet<T>> {
        self.forest.components()
    }

    /// Alias of [`DynamicUnionFind::components`].
    #[must_use]
    pub fn sets(&mut self) -> HashMap<T, HashSet<T>> {
        self.components()
    }

    /// Maps each representative to the number of elements in its component.
    #[must_use]
    pub fn component_sizes(&mut self) -> HashMap<T, usize> {
        self.forest.component_sizes()
    }

    /// Alias of [`DynamicUnionFind::component_sizes`].
    #[must_use]
    pub fn set_sizes(&mut self) -> HashMap<T, usize> {
        self.component_sizes()
    }
}

impl<T: Element> Extend<(T, T)> for DynamicUnionFind<T> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, pairs: I) {
        for (left, right) in pairs {
            self.union(&left, &right);
        }
    }
}

impl<T: Element> FromIterator<(T, T)> for DynamicUnionFind<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(pairs: I) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<T: Element> DisjointSet<T> for DynamicUnionFind<T> {
    type Error = Infallible;

    fn find(&mut self, element: &T) -> Result<T, Infallible> {
        Ok(Self::find(self, element))
    }

    fn union(&mut self, left: &T, right: &T) -> Result<bool, Infallible> {
        Ok(Self::union(self, left, right))
    }

    fn connected(&mut self, left: &T, right: &T) -> Result<bool, Infallible> {
        Ok(Self::connected(self, left, right))
    }

    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn components(&mut self) -> HashMap<T, HashSet<T>> {
        Self::components(self)
    }

    fn component_sizes(&mut self) -> HashMap<T, usize> {
        Self::component_sizes(self)
    }
}
