use core::{fmt, panic::Location};
use std::path::Path;

/// Where a check was called from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    location: &'static Location<'static>,
}
impl CallSite {
    /// Capture the location of the outermost `#[track_caller]` frame
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        Self {
            location: Location::caller(),
        }
    }

    /// The last component of the source path
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        let path = self.location.file();
        Path::new(path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(path)
    }
    #[must_use]
    pub fn path(&self) -> &'static str {
        self.location.file()
    }
    #[must_use]
    pub fn line(&self) -> u32 {
        self.location.line()
    }
}
impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{})", self.file_name(), self.line())
    }
}
