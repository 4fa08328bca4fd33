use core::fmt;

/// Which precondition a failed check was guarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    Boolean,
    Integer,
    String,
    Object,
}
impl CheckKind {
    /// The tag written in front of the offending value, as in `[number=0]`
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "number",
            Self::String => "string",
            Self::Object => "obj",
        }
    }

    /// Compose the detail text of a failure of this kind.
    ///
    /// The integer kind separates the user message with a space; every other
    /// kind appends it directly.
    #[must_use]
    pub fn detail(self, value: impl fmt::Display, message: Option<&str>) -> String {
        let tag = self.tag();
        match (self, message) {
            (_, None) => format!("[{tag}={value}]"),
            (Self::Integer, Some(message)) => format!("[{tag}={value}] {message}"),
            (_, Some(message)) => format!("[{tag}={value}]{message}"),
        }
    }
}
impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
