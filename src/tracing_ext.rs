//! Tracing integration for error-tags.
//!
//! Emits tagged errors as `tracing` events, with every tag found along the
//! `source()` chain recorded in a `tags` field so subscribers can filter on
//! them.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-tags = { version = "0.1", features = ["tracing"] }
//! ```

use core::error::Error;

use crate::tagging::deep_tags;
use crate::types::BoxError;

/// Records `err` as a `WARN` event.
///
/// The event carries two fields: `tags`, the deep tags joined by `", "`,
/// and `error`, the full rendering of `err`.
///
/// # Example
///
/// ```rust,ignore
/// use error_tags::tracing_ext::log_tagged;
///
/// let err = error_tags::with_tags("disk full", ["storage"]);
/// log_tagged(&*err);
/// // WARN tagged error tags="storage" error=[storage] @ disk full
/// ```
pub fn log_tagged(err: &(dyn Error + 'static)) {
    let tags = deep_tags(err).join(", ");
    tracing::warn!(tags = %tags, error = %err, "tagged error");
}

/// Extension trait that logs the error of a tagged `Result` and hands the
/// `Result` back unchanged.
pub trait TracingResultExt: Sized {
    /// Logs the error through [`log_tagged`]; `Ok` values are not logged.
    fn log_tags(self) -> Self;
}

impl<T> TracingResultExt for Result<T, BoxError> {
    #[inline]
    fn log_tags(self) -> Self {
        if let Err(err) = &self {
            log_tagged(&**err);
        }
        self
    }
}
