//! Closed-world union-find over a universe fixed at construction.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::{
    DisjointSet, Element,
    error::{DisjointSetError, Result},
    forest::Forest,
};

/// Disjoint sets over a fixed universe of elements.
///
/// Every element is registered once by [`UnionFind::new`]. Touching any other
/// element through [`UnionFind::find`], [`UnionFind::union`] or
/// [`UnionFind::connected`] fails with
/// [`DisjointSetError::UnregisteredElement`]. Roots are found with full path
/// compression and merged by rank.
///
/// Cloning produces an independent copy: merges applied to one side are never
/// observed by the other.
///
/// # Examples
/// ```
/// use cputils_core::{DisjointSetError, UnionFind};
///
/// let mut dsu = UnionFind::new([1, 2, 3, 4, 5]);
/// dsu.union(&1, &2)?;
/// dsu.union(&2, &3)?;
/// dsu.union(&4, &5)?;
///
/// assert_eq!(dsu.find(&1)?, dsu.find(&3)?);
/// assert!(!dsu.connected(&1, &4)?);
/// assert_eq!(
///     dsu.find(&6),
///     Err(DisjointSetError::UnregisteredElement { element: 6 })
/// );
/// # Ok::<(), DisjointSetError<i32>>(())
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind<T> {
    forest: Forest<T>,
}

impl<T: Element> UnionFind<T> {
    /// Registers every element of `elements` as its own singleton component.
    ///
    /// Repeated elements collapse onto a single entry.
    ///
    /// # Examples
    /// ```
    /// use cputils_core::UnionFind;
    ///
    /// let dsu = UnionFind::new(["a", "b", "a"]);
    /// assert_eq!(dsu.len(), 2);
    /// assert_eq!(dsu.component_count(), 2);
    /// ```
    #[must_use]
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let elements = elements.into_iter();
        let mut forest = Forest::with_capacity(elements.size_hint().0);
        for element in elements {
            forest.register(element);
        }
        debug!(elements = forest.len(), "registered closed-world universe");
        Self { forest }
    }

    fn slot(&self, element: &T) -> Result<usize, T> {
        self.forest.slot(element).ok_or_else(|| {
            debug!("rejected lookup of unregistered element");
            DisjointSetError::UnregisteredElement {
                element: element.clone(),
            }
        })
    }

    /// Resolves `element` to the representative of its component.
    ///
    /// Every entry visited on the way is repointed at the representative.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnregisteredElement`] when `element` was not
    /// supplied at construction.
    pub fn find(&mut self, element: &T) -> Result<T, T> {
        let slot = self.slot(element)?;
        Ok(self.forest.root_element(slot))
    }

    /// Merges the components containing `left` and `right` by rank.
    ///
    /// Returns `true` when a merge happened and `false` when both elements
    /// already shared a component, including `left == right`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnregisteredElement`] naming the first
    /// operand without an entry. Both operands are checked before anything is
    /// merged.
    pub fn union(&mut self, left: &T, right: &T) -> Result<bool, T> {
        let left = self.slot(left)?;
        let right = self.slot(right)?;
        Ok(self.forest.link(left, right))
    }

    /// Reports whether `left` and `right` share a representative.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnregisteredElement`] naming the first
    /// operand without an entry.
    pub fn connected(&mut self, left: &T, right: &T) -> Result<bool, T> {
        let left = self.slot(left)?;
        let right = self.slot(right)?;
        Ok(self.forest.connected(left, right))
    }

    /// Admits `element` through the registration path.
    ///
    /// The universe is fixed, so this only succeeds for elements that already
    /// have an entry, in which case it returns `Ok(false)`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::InvalidMutation`] for any element that was
    /// not supplied at construction.
    ///
    /// # Examples
    /// ```
    /// use cputils_core::{DisjointSetErrorCode, UnionFind};
    ///
    /// let mut dsu = UnionFind::new([1, 2]);
    /// assert_eq!(dsu.insert(1), Ok(false));
    ///
    /// let err = dsu.insert(3).expect_err("closed universe");
    /// assert_eq!(err.code(), DisjointSetErrorCode::InvalidMutation);
    /// assert_eq!(dsu.len(), 2);
    /// ```
    pub fn insert(&mut self, element: T) -> Result<bool, T> {
        if self.forest.contains(&element) {
            return Ok(false);
        }
        debug!("rejected registration outside the closed-world universe");
        Err(DisjointSetError::InvalidMutation { element })
    }

    /// Reports whether `element` has an entry.
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

    /// Discards every entry, leaving an empty universe.
    pub fn clear(&mut self) {
        self.forest.clear();
    }

    /// Returns the element `element` currently points to, without compressing.
    ///
    /// Roots point to themselves. Returns `None` for unregistered elements.
    #[must_use]
    pub fn parent_of(&self, element: &T) -> Option<&T> {
        self.forest.parent_of(element)
    }

    /// Returns the rank recorded for `element`, or `None` if unregistered.
    #[must_use]
    pub fn rank_of(&self, element: &T) -> Option<u8> {
        self.forest.rank_of(element)
    }

    /// Maps each representative to the elements of its component.
    #[must_use]
    pub fn components(&mut self) -> HashMap<T, HashSet<T>> {
        self.forest.components()
    }

    /// Alias of [`UnionFind::components`].
    #[must_use]
    pub fn sets(&mut self) -> HashMap<T, HashSet<T>> {
        self.components()
    }

    /// Maps each representative to the number of elements in its component.
    #[must_use]
    pub fn component_sizes(&mut self) -> HashMap<T, usize> {
        self.forest.component_sizes()
    }

    /// Alias of [`UnionFind::component_sizes`].
    #[must_use]
    pub fn set_sizes(&mut self) -> HashMap<T, usize> {
        self.component_sizes()
    }
}

impl<T: Element> FromIterator<T> for UnionFind<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: Element> DisjointSet<T> for UnionFind<T> {
    type Error = DisjointSetError<T>;

    fn find(&mut self, element: &T) -> Result<T, T> {
        Self::find(self, element)
    }

    fn union(&mut self, left: &T, right: &T) -> Result<bool, T> {
        Self::union(self, left, right)
    }

    fn connected(&mut self, left: &T, right: &T) -> Result<bool, T> {
        Self::connected(self, left, right)
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
