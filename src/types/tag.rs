//! Tag values and their type-erased storage key.
//!
//! Any `'static` value that is comparable, printable and thread-safe can be
//! used as a tag. Tags of different concrete types live side by side in one
//! [`TagSet`](crate::types::TagSet) through [`TagKey`], which remembers the
//! concrete type so that equality stays type-sensitive.
//!
//! The plain string types (`&'static str`, `String`, `Box<str>` and
//! `Cow<'static, str>`) all collapse to one text key, so a tag attached as a
//! literal is found again through an owned `String` and vice versa. A user
//! type that merely *renders* like a string is still its own tag.

use core::any::Any;
use core::fmt::{Debug, Display};

use crate::types::alloc_type::{Box, Cow, String};

/// A value that can be attached to an error as a tag.
///
/// Implemented for every `'static` type that is `Eq + Display + Debug` and
/// `Send + Sync`. Two tags are the same tag iff they have the same concrete
/// type and compare equal.
///
/// # Examples
///
/// ```
/// use core::fmt;
/// use error_tags::{has_tag, with_tag};
///
/// #[derive(Debug, PartialEq, Eq)]
/// struct Shard(u16);
///
/// impl fmt::Display for Shard {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "shard-{}", self.0)
///     }
/// }
///
/// let err = with_tag("replica lagging", Shard(7));
/// assert!(has_tag(&*err, &Shard(7)));
/// assert!(!has_tag(&*err, &"shard-7"));
/// assert_eq!(err.to_string(), "[shard-7] @ replica lagging");
/// ```
pub trait Tag: Any + Eq + Display + Debug + Send + Sync {}

impl<T> Tag for T where T: Any + Eq + Display + Debug + Send + Sync {}

/// A tag whose value is text, used by the variadic attach operations.
///
/// Plain strings qualify, as do string-like enums that implement
/// `AsRef<str>` next to `Display`.
pub trait TextTag: Tag + AsRef<str> {}

impl<T> TextTag for T where T: Tag + AsRef<str> {}

/// Object-safe view of a [`Tag`].
trait DynTag: Display + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Tag> DynTag for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Type-erased storage for a single tag.
pub struct TagKey(Repr);

enum Repr {
    Text(String),
    Typed(Box<dyn DynTag>),
}

impl TagKey {
    /// Erases `tag`, normalising plain string types to a text key.
    pub fn new<T: Tag>(tag: T) -> Self {
        match text_of(&tag) {
            Some(text) => Self(Repr::Text(String::from(text))),
            None => Self(Repr::Typed(Box::new(tag))),
        }
    }

    /// Returns `true` if this key holds the same tag as `tag`.
    pub fn matches<T: Tag>(&self, tag: &T) -> bool {
        match (&self.0, text_of(tag)) {
            (Repr::Text(stored), Some(text)) => stored == text,
            (Repr::Typed(stored), None) => {
                stored.as_any().downcast_ref::<T>().is_some_and(|value| value == tag)
            }
            _ => false,
        }
    }

    /// Returns the text of a plain string tag.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match &self.0 {
            Repr::Text(text) => Some(text.as_str()),
            Repr::Typed(_) => None,
        }
    }

    /// Returns the stored value if it is a non-string tag of type `T`.
    #[inline]
    pub fn downcast_ref<T: Tag>(&self) -> Option<&T> {
        match &self.0 {
            Repr::Text(_) => None,
            Repr::Typed(stored) => stored.as_any().downcast_ref::<T>(),
        }
    }
}

impl Display for TagKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.0 {
            Repr::Text(text) => f.write_str(text),
            Repr::Typed(stored) => Display::fmt(stored, f),
        }
    }
}

impl Debug for TagKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.0 {
            Repr::Text(text) => Debug::fmt(text, f),
            Repr::Typed(stored) => Debug::fmt(stored, f),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TagKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn text_of<T: Tag>(tag: &T) -> Option<&str> {
    let any = tag as &dyn Any;
    if let Some(text) = any.downcast_ref::<&'static str>() {
        return Some(*text);
    }
    if let Some(text) = any.downcast_ref::<String>() {
        return Some(text.as_str());
    }
    if let Some(text) = any.downcast_ref::<Box<str>>() {
        return Some(&**text);
    }
    any.downcast_ref::<Cow<'static, str>>().map(|text| &**text)
}
