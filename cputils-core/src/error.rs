//! Error types for the disjoint-set structures.
//!
//! Defines the error enum surfaced by the closed-world [`crate::UnionFind`],
//! its stable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident<$Gen:ident> {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl<$Gen> $ErrTy<$Gen> {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by a disjoint-set operation.
///
/// Every variant carries the offending element so callers can report which
/// key was rejected.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError<T> {
    /// The element was never registered with a closed-world structure.
    #[error("element {element:?} is not registered")]
    UnregisteredElement {
        /// The element that has no entry.
        element: T,
    },
    /// A new entry was requested outside the structure's registration path.
    #[error("cannot register {element:?}: the element universe is fixed at construction")]
    InvalidMutation {
        /// The element whose entry was rejected.
        element: T,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError<T> {
        /// The element was never registered with a closed-world structure.
        UnregisteredElement => UnregisteredElement { .. } => "DSU_UNREGISTERED_ELEMENT",
        /// A new entry was requested outside the structure's registration path.
        InvalidMutation => InvalidMutation { .. } => "DSU_INVALID_MUTATION",
    }
}

impl<T> DisjointSetError<T> {
    /// Borrow the element that caused the failure.
    ///
    /// # Examples
    /// ```
    /// use cputils_core::DisjointSetError;
    ///
    /// let err = DisjointSetError::UnregisteredElement { element: 6 };
    /// assert_eq!(err.element(), &6);
    /// ```
    #[must_use]
    pub const fn element(&self) -> &T {
        match self {
            Self::UnregisteredElement { element } | Self::InvalidMutation { element } => element,
        }
    }

    /// Consume the error and return the element that caused the failure.
    #[must_use]
    pub fn into_element(self) -> T {
        match self {
            Self::UnregisteredElement { element } | Self::InvalidMutation { element } => element,
        }
    }
}

/// Convenient alias for results returned by the closed-world API.
pub type Result<R, T> = core::result::Result<R, DisjointSetError<T>>;
