//! Tag and tagged-error types.
//!
//! This module provides the storage side of the crate: the [`Tag`] bound,
//! the type-erased [`TagKey`], the ordered [`TagSet`] and the
//! [`TaggedError`] that pairs a set with one cause.
//!
//! # Examples
//!
//! ```
//! use error_tags::TaggedError;
//!
//! let err = TaggedError::new("database connection failed")
//!     .with_tag("db")
//!     .with_tag(503_u16);
//!
//! assert_eq!(err.to_string(), "[503 | db] @ database connection failed");
//! ```
use core::error::Error;

use smallvec::SmallVec;

pub mod alloc_type;
pub mod tag;
pub mod tag_set;
pub mod tagged_error;

pub use tag::*;
pub use tag_set::*;
pub use tagged_error::*;

/// Boxed, thread-safe error: the currency of the attach operations.
pub type BoxError = alloc_type::Box<dyn Error + Send + Sync + 'static>;

/// Result alias carrying a [`BoxError`].
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type BoxResult<T> = Result<T, BoxError>;

/// SmallVec-backed storage for the tags of one error.
///
/// Uses inline storage for up to 2 tags to avoid heap allocations
/// in the common case of one or two labels per layer.
pub type TagVec = SmallVec<[TagKey; 2]>;
