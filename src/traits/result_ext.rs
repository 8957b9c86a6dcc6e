//! Extension trait for ergonomic tagging of `Result` errors.
//!
//! This module provides [`TagResultExt`], which tags the error side of a
//! `Result` without a `.map_err()` closure at every call site. An `Ok` value
//! is the absent-error case and passes through untouched.
//!
//! # Examples
//!
//! ```
//! use error_tags::traits::TagResultExt;
//!
//! fn load_config() -> error_tags::BoxResult<String> {
//!     Err::<String, _>("config.toml not found").tag("config")
//! }
//!
//! assert_eq!(load_config().unwrap_err().to_string(), "[config] @ config.toml not found");
//! ```

use crate::tagging;
use crate::types::{BoxError, Tag, TextTag};

/// Extension trait for attaching tags to the error of a `Result`.
///
/// Every method boxes the error into a [`BoxError`] and follows the same
/// rules as the free functions in [`crate::tagging`]: an error that is
/// already tagged grows its existing set.
///
/// # Examples
///
/// ## Chaining tags across layers
///
/// ```
/// use error_tags::traits::TagResultExt;
/// use error_tags::{deep_has_tag, has_tag};
///
/// let result: Result<(), &str> = Err("refused");
/// let err = result.tag("tcp").tag2("connect", 111_i32).unwrap_err();
///
/// assert!(has_tag(&*err, &"tcp"));
/// assert!(deep_has_tag(&*err, &111_i32));
/// assert_eq!(err.to_string(), "[111 | connect | tcp] @ refused");
/// ```
///
/// ## Lazy tags
///
/// ```
/// use error_tags::traits::TagResultExt;
///
/// let ok: Result<u8, &str> = Ok(1);
/// let tagged = ok.tag_with(|| -> &'static str { unreachable!("never built on Ok") });
/// assert_eq!(tagged.unwrap(), 1);
/// ```
pub trait TagResultExt<T> {
    /// Attaches a single tag to the error.
    fn tag<G: Tag>(self, tag: G) -> Result<T, BoxError>;

    /// Attaches two tags of independent types, `tag1` first.
    fn tag2<G1: Tag, G2: Tag>(self, tag1: G1, tag2: G2) -> Result<T, BoxError>;

    /// Attaches three tags of independent types, in argument order.
    fn tag3<G1: Tag, G2: Tag, G3: Tag>(self, tag1: G1, tag2: G2, tag3: G3)
        -> Result<T, BoxError>;

    /// Attaches every text tag of `tags`; with no tags the error is only boxed.
    fn tags<I>(self, tags: I) -> Result<T, BoxError>
    where
        I: IntoIterator,
        I::Item: TextTag;

    /// Attaches a tag produced by `f`, called only on `Err`.
    fn tag_with<G, F>(self, f: F) -> Result<T, BoxError>
    where
        G: Tag,
        F: FnOnce() -> G;
}

impl<T, E> TagResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline]
    fn tag<G: Tag>(self, tag: G) -> Result<T, BoxError> {
        self.map_err(|e| tagging::with_tag(e, tag))
    }

    #[inline]
    fn tag2<G1: Tag, G2: Tag>(self, tag1: G1, tag2: G2) -> Result<T, BoxError> {
        self.map_err(|e| tagging::with_tag2(e, tag1, tag2))
    }

    #[inline]
    fn tag3<G1: Tag, G2: Tag, G3: Tag>(
        self,
        tag1: G1,
        tag2: G2,
        tag3: G3,
    ) -> Result<T, BoxError> {
        self.map_err(|e| tagging::with_tag3(e, tag1, tag2, tag3))
    }

    #[inline]
    fn tags<I>(self, tags: I) -> Result<T, BoxError>
    where
        I: IntoIterator,
        I::Item: TextTag,
    {
        self.map_err(|e| tagging::with_tags(e, tags))
    }

    #[inline]
    fn tag_with<G, F>(self, f: F) -> Result<T, BoxError>
    where
        G: Tag,
        F: FnOnce() -> G,
    {
        self.map_err(|e| tagging::with_tag(e, f()))
    }
}
