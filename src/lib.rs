//! Attach ordered, de-duplicated tags to errors without losing their chain.
//!
//! A tag is any comparable, printable value: a string, a number, an enum or
//! your own struct. Tags are stored per layer in a [`TaggedError`], which
//! wraps exactly one cause and keeps `source()` pointing at it, so the rest
//! of the error ecosystem sees an ordinary error chain.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_tags::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Tagging an Error
//!
//! ```
//! use error_tags::{has_tag, with_tag, with_tags};
//!
//! let err = with_tags("foobar error", ["buzz tag", "another tag"]);
//! let err = with_tag(err, 42_u32);
//!
//! assert!(has_tag(&*err, &"buzz tag"));
//! assert!(has_tag(&*err, &42_u32));
//! assert!(!has_tag(&*err, &42_i64));
//!
//! // The most recently added tag comes first.
//! assert_eq!(err.to_string(), "[42 | another tag | buzz tag] @ foobar error");
//! ```
//!
//! ## Shallow and Deep Lookup
//!
//! ```
//! use error_tags::{deep_has_tag, has_tag, with_tags, BoxError};
//!
//! #[derive(Debug)]
//! struct Context(BoxError);
//!
//! impl core::fmt::Display for Context {
//!     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
//!         write!(f, "loading profile: {}", self.0)
//!     }
//! }
//!
//! impl core::error::Error for Context {
//!     fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
//!         Some(&*self.0)
//!     }
//! }
//!
//! let err = with_tags(Context(with_tags("not found", ["db"])), ["http"]);
//!
//! assert!(has_tag(&*err, &"http"));
//! assert!(!has_tag(&*err, &"db"));
//! assert!(deep_has_tag(&*err, &"db"));
//! ```
//!
//! ## Tagging Results
//!
//! ```
//! use error_tags::prelude::*;
//!
//! fn read_settings() -> BoxResult<String> {
//!     Err::<String, _>("permission denied").tags(["fs", "settings"])
//! }
//!
//! let err = read_settings().unwrap_err();
//! assert_eq!(err.to_string(), "[settings | fs] @ permission denied");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Tagging macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Attach and lookup operations
pub mod tagging;
/// Extension traits for `Result`
pub mod traits;
/// Tag storage and the tagged error type
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use tagging::*;
pub use traits::*;
pub use types::{BoxError, BoxResult, Tag, TagKey, TagSet, TaggedError, TextTag};
