//! Extension traits for tagging errors where they are produced.
//!
//! - [`TagResultExt`]: attach tags to the error side of any `Result`
//!
//! # Examples
//!
//! ```
//! use error_tags::traits::TagResultExt;
//! use error_tags::has_tag;
//!
//! let result: Result<(), &str> = Err("connection reset");
//! let err = result.tag("network").unwrap_err();
//! assert!(has_tag(&*err, &"network"));
//! ```

pub mod result_ext;

pub use result_ext::TagResultExt;
