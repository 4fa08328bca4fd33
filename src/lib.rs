//! Runtime precondition checks.
//!
//! A check either returns silently or fails with a [`CheckFailure`] that
//! names the calling file and line:
//!
//! ```
//! use checker::{Checker, Mode};
//!
//! let checker = Checker::new(Mode::Debug);
//! let failure = checker.require_positive(0, Some("empty batch")).unwrap_err();
//! assert!(failure.is_integer());
//! assert_eq!(failure.detail(), "[number=0] empty batch");
//! assert!(failure.to_string().ends_with(")[number=0] empty batch"));
//! ```
//!
//! [`check_true`] and friends do the same against the process-wide mode and
//! unwind with the failure instead of returning it.

pub mod call_site;
pub mod checker;
pub mod failure;
pub mod global;
pub mod kind;
pub mod mode;

pub use call_site::CallSite;
pub use checker::Checker;
pub use failure::CheckFailure;
pub use global::{
    check_non_empty, check_non_null, check_positive, check_true, dcheck_non_empty,
    dcheck_non_null, dcheck_positive, dcheck_true, debug, global, is_debug, release,
};
pub use kind::CheckKind;
pub use mode::{AtomicMode, Mode, ModeSource};
