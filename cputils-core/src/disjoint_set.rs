//! Common interface implemented by every disjoint-set variant.

use std::collections::{HashMap, HashSet};

use crate::Element;

/// Operations shared by the closed-world [`crate::UnionFind`] and the
/// open-world [`crate::DynamicUnionFind`].
///
/// The variants differ only in how an unregistered element is handled, which
/// shows up in [`DisjointSet::Error`]: the closed world rejects it with
/// [`crate::DisjointSetError`], the open world registers it and uses
/// [`std::convert::Infallible`].
///
/// Queries take `&mut self` because resolving a root compresses the path that
/// was walked.
///
/// # Examples
/// ```
/// use cputils_core::{DisjointSet, DynamicUnionFind, UnionFind};
///
/// fn chain<D: DisjointSet<u32>>(set: &mut D) -> Result<bool, D::Error> {
///     set.union(&1, &2)?;
///     set.union(&2, &3)?;
///     set.connected(&1, &3)
/// }
///
/// let mut closed = UnionFind::new([1, 2, 3]);
/// assert_eq!(chain(&mut closed), Ok(true));
///
/// let mut open = DynamicUnionFind::new();
/// assert_eq!(chain(&mut open), Ok(true));
/// ```
pub trait DisjointSet<T: Element> {
    /// Error raised when an operation touches an element the variant cannot
    /// resolve.
    type Error;

    /// Resolves `element` to the representative of its component.
    ///
    /// # Errors
    /// Returns [`DisjointSet::Error`] when the variant refuses the element.
    fn find(&mut self, element: &T) -> Result<T, Self::Error>;

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `true` when a merge happened and `false` when both elements
    /// already shared a component.
    ///
    /// # Errors
    /// Returns [`DisjointSet::Error`] when the variant refuses either element.
    /// Nothing is merged in that case.
    fn union(&mut self, left: &T, right: &T) -> Result<bool, Self::Error>;

    /// Reports whether `left` and `right` share a representative.
    ///
    /// # Errors
    /// Returns [`DisjointSet::Error`] when the variant refuses either element.
    fn connected(&mut self, left: &T, right: &T) -> Result<bool, Self::Error> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Reports whether `element` has an entry. Never registers anything.
    fn contains(&self, element: &T) -> bool;

    /// Number of registered elements.
    fn len(&self) -> usize;

    /// Whether no element is registered.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discards every entry.
    fn clear(&mut self);

    /// Maps each representative to the elements of its component.
    fn components(&mut self) -> HashMap<T, HashSet<T>>;

    /// Alias of [`DisjointSet::components`].
    fn sets(&mut self) -> HashMap<T, HashSet<T>> {
        self.components()
    }

    /// Maps each representative to the number of elements in its component.
    fn component_sizes(&mut self) -> HashMap<T, usize>;

    /// Alias of [`DisjointSet::component_sizes`].
    fn set_sizes(&mut self) -> HashMap<T, usize> {
        self.component_sizes()
    }
}
