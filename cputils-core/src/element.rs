//! Identity contract for disjoint-set members.

use std::hash::Hash;

/// Capability required of every value stored in a disjoint-set structure.
///
/// Members are keyed by equality and hashing. Roots are reported by value, so
/// the structure keeps its own clone of each registered element and never
/// touches the caller's copy. The trait is implemented for every type meeting
/// the bounds and is never implemented by hand.
///
/// # Examples
/// ```
/// use cputils_core::Element;
///
/// fn accepts<T: Element>(_value: T) {}
///
/// accepts(7_u32);
/// accepts((0_i64, 1_i64));
/// accepts(String::from("a"));
/// ```
pub trait Element: Clone + Eq + Hash {}

impl<T> Element for T where T: Clone + Eq + Hash {}
