use super::TaggedError;
use core::error::Error;
use core::fmt::{Display, Write};

impl Display for TaggedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if f.alternate() {
            return self.fmt_report(f);
        }
        if self.tags.is_empty() {
            return Display::fmt(&self.cause, f);
        }

        f.write_char('[')?;
        for (i, tag) in self.tags.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{tag}")?;
        }
        write!(f, "] @ {}", self.cause)
    }
}

impl TaggedError {
    /// Multi-line form used by `{:#}`.
    fn fmt_report(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Error: {}", self.cause)?;
        if self.tags.is_empty() {
            return Ok(());
        }
        f.write_str("\nTags:")?;
        for tag in &self.tags {
            write!(f, "\n  - {tag}")?;
        }
        Ok(())
    }
}

impl Error for TaggedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.cause)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TaggedError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("TaggedError", 2)?;
        state.serialize_field("tags", &self.tags)?;
        state.serialize_field("cause", &CauseText(&*self.cause))?;
        state.end()
    }
}

#[cfg(feature = "serde")]
struct CauseText<'a>(&'a (dyn Error + Send + Sync + 'static));

#[cfg(feature = "serde")]
impl serde::Serialize for CauseText<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self.0)
    }
}
