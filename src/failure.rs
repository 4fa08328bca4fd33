use core::{any::Any, panic::Location};
use std::{panic, sync::Once, thread};

use thiserror::Error;

use crate::{call_site::CallSite, kind::CheckKind};

/// A failed check.
///
/// Displays as `(<file>:<line>)[<tag>=<value>]<message>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{call_site}{detail}")]
pub struct CheckFailure {
    kind: CheckKind,
    call_site: CallSite,
    detail: String,
}
impl CheckFailure {
    /// The call site is taken from the caller of the outermost `#[track_caller]` frame
    #[track_caller]
    #[must_use]
    pub fn new(kind: CheckKind, detail: String) -> Self {
        Self::at(kind, CallSite::caller(), detail)
    }
    #[must_use]
    const fn at(kind: CheckKind, call_site: CallSite, detail: String) -> Self {
        Self {
            kind,
            call_site,
            detail,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> CheckKind {
        self.kind
    }
    #[must_use]
    pub const fn call_site(&self) -> &CallSite {
        &self.call_site
    }
    /// The message without the call-site prefix
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    #[must_use]
    pub fn is_boolean(&self) -> bool {
        self.kind == CheckKind::Boolean
    }
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.kind == CheckKind::Integer
    }
    #[must_use]
    pub fn is_string(&self) -> bool {
        self.kind == CheckKind::String
    }
    #[must_use]
    pub fn is_object(&self) -> bool {
        self.kind == CheckKind::Object
    }

    /// Unwind with `self` as the panic payload.
    ///
    /// The panic is located at the caller, and an uncaught failure is
    /// reported through its `Display` form.
    #[track_caller]
    pub fn raise(self) -> ! {
        tracing::error!(
            kind = %self.kind,
            file = self.call_site.file_name(),
            line = self.call_site.line(),
            "{self}"
        );
        install_panic_hook();
        panic::panic_any(self)
    }

    /// Recover a failure from a payload caught by [`std::panic::catch_unwind`]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Result<Self, Box<dyn Any + Send>> {
        payload.downcast::<Self>().map(|failure| *failure)
    }

    fn report(&self, thread: &str, location: Option<&Location<'_>>) -> String {
        match location {
            Some(location) => format!("thread '{thread}' panicked at {location}:\n{self}"),
            None => format!("thread '{thread}' panicked:\n{self}"),
        }
    }
}

static PANIC_HOOK: Once = Once::new();

/// Chain a hook printing [`CheckFailure`] payloads in front of the current one
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let prev = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let Some(failure) = info.payload().downcast_ref::<CheckFailure>() else {
                prev(info);
                return;
            };
            let thread = thread::current();
            let name = thread.name().unwrap_or("<unnamed>");
            eprintln!("{}", failure.report(name, info.location()));
        }));
    });
}
