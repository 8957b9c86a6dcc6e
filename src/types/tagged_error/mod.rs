//! Error wrapper carrying an ordered set of tags.
//!
//! [`TaggedError`] pairs a [`TagSet`] with exactly one cause. Tags are
//! strictly per layer: the cause's own tags are never merged into this set,
//! so a chain of wrappers keeps each layer's labels where they were attached.

use core::error::Error;

use crate::types::alloc_type::Box;
use crate::types::{BoxError, Tag, TagSet, TextTag};

mod traits;

/// Error wrapper that stores a cause plus the tags attached to it.
///
/// Rendering lists the tags most recent first, then the cause:
/// `[tag2 | tag1] @ cause`. With no tags it renders exactly as the cause.
///
/// A `TaggedError` only grows: tags are appended through the by-value
/// builders, never removed, and the cause is fixed at construction. Growth
/// needs ownership, so a shared `&TaggedError` can be read from any number
/// of threads.
///
/// # Examples
///
/// ```
/// use error_tags::TaggedError;
///
/// let err = TaggedError::new("foobar error")
///     .with_tags(["buzz tag", "another tag"]);
///
/// assert!(err.has_tag(&"buzz tag"));
/// assert_eq!(err.to_string(), "[another tag | buzz tag] @ foobar error");
/// ```
#[must_use]
#[derive(Debug)]
pub struct TaggedError {
    pub(crate) tags: TagSet,
    pub(crate) cause: BoxError,
}

impl TaggedError {
    /// Wraps `cause` with an empty tag set.
    ///
    /// This always creates a new layer, even when `cause` is itself a
    /// `TaggedError`; use [`with_tag`](crate::with_tag) to extend an existing
    /// layer instead.
    #[inline]
    pub fn new<E>(cause: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self { tags: TagSet::new(), cause: cause.into() }
    }

    /// Attaches a single tag. Re-attaching a present tag is a no-op.
    #[inline]
    pub fn with_tag<T: Tag>(mut self, tag: T) -> Self {
        self.tags.insert(tag);
        self
    }

    /// Attaches every text tag of `tags` in iteration order.
    #[inline]
    pub fn with_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: TextTag,
    {
        self.extend_tags(tags);
        self
    }

    pub(crate) fn extend_tags<I>(&mut self, tags: I)
    where
        I: IntoIterator,
        I::Item: TextTag,
    {
        for tag in tags {
            self.tags.insert(tag);
        }
    }

    /// Returns `true` if this layer carries `tag`.
    #[inline]
    pub fn has_tag<T: Tag>(&self, tag: &T) -> bool {
        self.tags.contains(tag)
    }

    /// Returns this layer's tags.
    #[inline]
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Returns a reference to the wrapped error.
    #[inline]
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.cause
    }

    /// Consumes the wrapper, returning the wrapped error.
    #[inline]
    pub fn into_cause(self) -> BoxError {
        self.cause
    }

    /// Extends an existing tagged layer or starts a new one around `err`.
    ///
    /// A `Box<TaggedError>` converted into a `BoxError` arrives boxed twice;
    /// the inner box is the layer to extend.
    pub(crate) fn wrap(err: BoxError) -> Box<Self> {
        match err.downcast::<Self>() {
            Ok(tagged) => tagged,
            Err(err) => match err.downcast::<Box<Self>>() {
                Ok(boxed) => *boxed,
                Err(err) => Box::new(Self::new(err)),
            },
        }
    }
}
