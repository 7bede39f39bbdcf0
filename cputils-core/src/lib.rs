//! Disjoint-set structures for algorithmic problem solving.
//!
//! Two variants share one forest core with full path compression and
//! union-by-rank:
//!
//! - [`UnionFind`] works over a universe fixed at construction and rejects
//!   unknown elements with [`DisjointSetError::UnregisteredElement`].
//! - [`DynamicUnionFind`] starts empty and registers elements the first time
//!   they are seen.
//!
//! Both implement [`DisjointSet`] so generic code can drive either one.
//! Elements only need to satisfy [`Element`] (`Clone + Eq + Hash`).
//!
//! The structures are single-threaded. Queries take `&mut self` because they
//! compress paths, and sharing a structure across threads needs external
//! synchronisation.

mod disjoint_set;
mod dynamic;
mod element;
mod error;
mod forest;
#[cfg(test)]
mod test_utils;
mod union_find;

pub use crate::{
    disjoint_set::DisjointSet,
    dynamic::DynamicUnionFind,
    element::Element,
    error::{DisjointSetError, DisjointSetErrorCode, Result},
    union_find::UnionFind,
};
