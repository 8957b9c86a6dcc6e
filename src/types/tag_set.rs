//! Ordered, de-duplicated collection of tags.

use core::iter::Rev;
use core::slice::Iter;

use crate::types::{Tag, TagKey, TagVec};

/// Ordered set of tags keyed by type and value.
///
/// A tag's rank is its position at first insertion, so the ranks of a set
/// with `n` tags are exactly `0..n`. Inserting a tag that is already present
/// leaves the set untouched: no duplicate, no reordering.
///
/// # Examples
///
/// ```
/// use error_tags::TagSet;
///
/// let mut tags = TagSet::new();
/// assert!(tags.insert("retryable"));
/// assert!(tags.insert(404_u16));
/// assert!(!tags.insert("retryable"));
///
/// assert_eq!(tags.rank_of(&"retryable"), Some(0));
/// assert_eq!(tags.rank_of(&404_u16), Some(1));
/// assert!(!tags.contains(&404_u32));
///
/// let rendered: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
/// assert_eq!(rendered, ["404", "retryable"]);
/// ```
#[derive(Debug, Default)]
pub struct TagSet {
    entries: TagVec,
}

impl TagSet {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self { entries: TagVec::new() }
    }

    /// Adds `tag` with the next rank unless it is already present.
    ///
    /// Returns `true` if the tag was new.
    pub fn insert<T: Tag>(&mut self, tag: T) -> bool {
        if self.contains(&tag) {
            return false;
        }
        self.entries.push(TagKey::new(tag));
        true
    }

    /// Returns `true` if a tag of the same type and value is present.
    #[inline]
    pub fn contains<T: Tag>(&self, tag: &T) -> bool {
        self.rank_of(tag).is_some()
    }

    /// Returns the insertion rank of `tag`, if present.
    #[inline]
    pub fn rank_of<T: Tag>(&self, tag: &T) -> Option<usize> {
        self.entries.iter().position(|entry| entry.matches(tag))
    }

    /// Returns the number of distinct tags.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no tag has been inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the tags most recently inserted first.
    #[inline]
    pub fn iter(&self) -> Rev<Iter<'_, TagKey>> {
        self.entries.iter().rev()
    }

    /// Iterates the tags in insertion order.
    #[inline]
    pub fn iter_ascending(&self) -> Iter<'_, TagKey> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a TagKey;
    type IntoIter = Rev<Iter<'a, TagKey>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TagSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
