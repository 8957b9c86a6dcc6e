//! Ergonomic macros for tagging errors.
//!
//! - [`macro@crate::tags`] - Attaches any number of tags, each of its own
//!   type, in one call. It generalises [`with_tag2`](crate::with_tag2) and
//!   [`with_tag3`](crate::with_tag3) to arbitrary arity.
//!
//! # Examples
//!
//! ```
//! use error_tags::{has_tag, tags};
//!
//! let err = tags!("quota exceeded", "billing", 429_u16, 'Q', "retry-later");
//!
//! assert!(has_tag(&*err, &429_u16));
//! assert_eq!(err.to_string(), "[retry-later | Q | 429 | billing] @ quota exceeded");
//! ```

/// Attaches each tag to an error, left to right, and returns a
/// [`BoxError`](crate::BoxError).
///
/// The tags may all have different types. With no tags the error is
/// converted into a `BoxError` and returned unwrapped.
///
/// # Syntax
///
/// - `tags!(err)` - Boxes `err` without tagging it
/// - `tags!(err, tag1, tag2, ...)` - Attaches every tag in order
///
/// # Examples
///
/// ```
/// use error_tags::{tags, TaggedError};
///
/// let plain = tags!("boom");
/// assert!(!plain.is::<TaggedError>());
/// assert_eq!(plain.to_string(), "boom");
///
/// let tagged = tags!(plain, "a", 1_u8, "a");
/// assert_eq!(tagged.to_string(), "[1 | a] @ boom");
/// ```
#[macro_export]
macro_rules! tags {
    ($err:expr $(, $tag:expr)* $(,)?) => {{
        let err: $crate::BoxError = ::core::convert::Into::into($err);
        $(
            let err = $crate::tagging::with_tag(err, $tag);
        )*
        err
    }};
}
