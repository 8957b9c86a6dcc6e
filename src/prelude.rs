//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use error_tags::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`tags!`]
//! - **Functions**: [`with_tag`], [`with_tags`], [`has_tag`], [`deep_has_tag`]
//! - **Types**: [`TaggedError`], [`BoxError`], [`BoxResult`]
//! - **Traits**: [`Tag`], [`TagResultExt`]
//!
//! # Examples
//!
//! ```
//! use error_tags::prelude::*;
//!
//! fn connect() -> BoxResult<()> {
//!     Err::<(), _>("connection refused").tag2("network", 111_i32)
//! }
//!
//! let err = connect().unwrap_err();
//! assert!(deep_has_tag(&*err, &"network"));
//! ```

// Macros
pub use crate::tags;

// Functions
pub use crate::tagging::{deep_has_tag, has_tag, with_tag, with_tags};

// Core types
pub use crate::types::{BoxError, BoxResult, TaggedError};

// Traits
pub use crate::traits::TagResultExt;
pub use crate::types::Tag;
