//! Attaching tags to errors and looking them up again.
//!
//! Key features:
//! - [`with_tag`], [`with_tag2`], [`with_tag3`] attach one to three tags of
//!   independent types; [`with_tags`] attaches any number of text tags.
//! - [`has_tag`] looks at the outermost layer only, while [`deep_has_tag`]
//!   walks the `source()` chain and checks every tagged layer it meets.
//! - [`tagged_layers`] and [`deep_tags`] expose that walk directly.
//!
//! Attaching to an error that is already a [`TaggedError`] grows its set in
//! place; any other error becomes the cause of a fresh layer. A plain error
//! wrapped by some other type in between therefore starts a new layer, and
//! its tags are only visible to the deep lookups.
//!
//! # Examples
//!
//! ```
//! use error_tags::{deep_has_tag, has_tag, with_tags};
//!
//! #[derive(Debug)]
//! struct Wrapped(error_tags::BoxError);
//!
//! impl std::fmt::Display for Wrapped {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "wrapping error: {}", self.0)
//!     }
//! }
//!
//! impl std::error::Error for Wrapped {
//!     fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
//!         Some(&*self.0)
//!     }
//! }
//!
//! let inner = with_tags("foobar error", ["a"]);
//! let outer = with_tags(Wrapped(inner), ["b"]);
//!
//! assert!(!has_tag(&*outer, &"a"));
//! assert!(has_tag(&*outer, &"b"));
//! assert!(deep_has_tag(&*outer, &"a"));
//! assert_eq!(outer.to_string(), "[b] @ wrapping error: [a] @ foobar error");
//! ```

use core::error::Error;
use core::iter::FusedIterator;

use crate::types::alloc_type::{Box, String, ToString, Vec};
use crate::types::{BoxError, Tag, TaggedError, TextTag};

/// Attaches a single tag to `err`.
///
/// # Examples
///
/// ```
/// use error_tags::{has_tag, with_tag};
///
/// let err = with_tag("timeout", "network");
/// assert!(has_tag(&*err, &"network"));
/// ```
#[inline]
pub fn with_tag<E, T>(err: E, tag: T) -> BoxError
where
    E: Into<BoxError>,
    T: Tag,
{
    let mut tagged = TaggedError::wrap(err.into());
    tagged.tags.insert(tag);
    tagged
}

/// Attaches two tags of independent types, `tag1` first.
#[inline]
pub fn with_tag2<E, T1, T2>(err: E, tag1: T1, tag2: T2) -> BoxError
where
    E: Into<BoxError>,
    T1: Tag,
    T2: Tag,
{
    let mut tagged = TaggedError::wrap(err.into());
    tagged.tags.insert(tag1);
    tagged.tags.insert(tag2);
    tagged
}

/// Attaches three tags of independent types, in argument order.
///
/// # Examples
///
/// ```
/// use error_tags::with_tag3;
///
/// let err = with_tag3("disk full", "storage", 507_u16, 'W');
/// assert_eq!(err.to_string(), "[W | 507 | storage] @ disk full");
/// ```
#[inline]
pub fn with_tag3<E, T1, T2, T3>(err: E, tag1: T1, tag2: T2, tag3: T3) -> BoxError
where
    E: Into<BoxError>,
    T1: Tag,
    T2: Tag,
    T3: Tag,
{
    let mut tagged = TaggedError::wrap(err.into());
    tagged.tags.insert(tag1);
    tagged.tags.insert(tag2);
    tagged.tags.insert(tag3);
    tagged
}

/// Attaches every text tag of `tags` in iteration order.
///
/// An empty `tags` returns `err` unchanged rather than wrapping it, so a
/// plain error round-trips through a zero-tag call.
///
/// # Examples
///
/// ```
/// use error_tags::{with_tags, TaggedError};
///
/// let err = with_tags("foobar error", ["buzz tag", "another tag"]);
/// assert_eq!(err.to_string(), "[another tag | buzz tag] @ foobar error");
///
/// let untouched = with_tags("foobar error", Vec::<&str>::new());
/// assert!(!untouched.is::<TaggedError>());
/// ```
pub fn with_tags<E, I>(err: E, tags: I) -> BoxError
where
    E: Into<BoxError>,
    I: IntoIterator,
    I::Item: TextTag,
{
    let err = err.into();
    let mut tags = tags.into_iter().peekable();
    if tags.peek().is_none() {
        return err;
    }

    let mut tagged = TaggedError::wrap(err);
    tagged.extend_tags(tags);
    tagged
}

/// Attaches a tag to an optional error; `None` stays `None`.
#[inline]
pub fn with_tag_opt<T: Tag>(err: Option<BoxError>, tag: T) -> Option<BoxError> {
    err.map(|err| with_tag(err, tag))
}

/// [`with_tag2`] for an optional error; `None` stays `None`.
#[inline]
pub fn with_tag2_opt<T1, T2>(err: Option<BoxError>, tag1: T1, tag2: T2) -> Option<BoxError>
where
    T1: Tag,
    T2: Tag,
{
    err.map(|err| with_tag2(err, tag1, tag2))
}

/// [`with_tag3`] for an optional error; `None` stays `None`.
#[inline]
pub fn with_tag3_opt<T1, T2, T3>(
    err: Option<BoxError>,
    tag1: T1,
    tag2: T2,
    tag3: T3,
) -> Option<BoxError>
where
    T1: Tag,
    T2: Tag,
    T3: Tag,
{
    err.map(|err| with_tag3(err, tag1, tag2, tag3))
}

/// [`with_tags`] for an optional error; `None` stays `None`.
#[inline]
pub fn with_tags_opt<I>(err: Option<BoxError>, tags: I) -> Option<BoxError>
where
    I: IntoIterator,
    I::Item: TextTag,
{
    err.map(|err| with_tags(err, tags))
}

/// Returns `true` if `err` itself is a [`TaggedError`] carrying `tag`.
///
/// Tags of layers further down the chain are not consulted; see
/// [`deep_has_tag`].
#[inline]
pub fn has_tag<T: Tag>(err: &(dyn Error + 'static), tag: &T) -> bool {
    as_tagged(err).is_some_and(|tagged| tagged.has_tag(tag))
}

/// Returns `true` if any tagged layer in the `source()` chain of `err`,
/// `err` included, carries `tag`.
#[inline]
pub fn deep_has_tag<T: Tag>(err: &(dyn Error + 'static), tag: &T) -> bool {
    tagged_layers(err).any(|tagged| tagged.has_tag(tag))
}

/// Iterates every [`TaggedError`] in the `source()` chain of `err`,
/// outermost first.
#[inline]
pub fn tagged_layers<'a>(err: &'a (dyn Error + 'static)) -> TaggedLayers<'a> {
    TaggedLayers { next: Some(err) }
}

/// Renders the tags of every tagged layer, outermost layer first and each
/// layer most recent first.
///
/// # Examples
///
/// ```
/// use error_tags::{deep_tags, with_tags, TaggedError};
///
/// let inner = with_tags("foobar error", ["tag1", "tag2"]);
/// let outer = TaggedError::new(inner).with_tag("outer");
///
/// assert_eq!(deep_tags(&outer), ["outer", "tag2", "tag1"]);
/// ```
pub fn deep_tags(err: &(dyn Error + 'static)) -> Vec<String> {
    tagged_layers(err)
        .flat_map(|tagged| tagged.tags().iter().map(|tag| tag.to_string()))
        .collect()
}

/// Views `err` as a tagged layer, looking through one `Box` indirection.
///
/// `Box<T>` forwards `source()` to `T`, so a boxed layer held by value in a
/// chain would otherwise be skipped.
fn as_tagged<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a TaggedError> {
    err.downcast_ref::<TaggedError>()
        .or_else(|| err.downcast_ref::<Box<TaggedError>>().map(|boxed| &**boxed))
}

/// Iterator returned by [`tagged_layers`].
#[derive(Debug, Clone)]
pub struct TaggedLayers<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for TaggedLayers<'a> {
    type Item = &'a TaggedError;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(err) = self.next.take() {
            self.next = err.source();
            if let Some(tagged) = as_tagged(err) {
                return Some(tagged);
            }
        }
        None
    }
}

impl FusedIterator for TaggedLayers<'_> {}
