//! Process-wide checks.
//!
//! Every `check_*` and `dcheck_*` here raises the [`CheckFailure`] by
//! unwinding with it as the panic payload. The `dcheck_*` family reads one
//! process-wide [`Mode`] flipped by [`debug`] and [`release`].

use core::{any::Any, fmt::Display};

use num_traits::PrimInt;

use crate::{
    checker::Checker,
    failure::CheckFailure,
    mode::{AtomicMode, Mode},
};

static MODE: AtomicMode = AtomicMode::new(Mode::Debug);

/// Enable the `dcheck_*` family
pub fn debug() {
    MODE.set(Mode::Debug);
}
/// Disable the `dcheck_*` family
pub fn release() {
    MODE.set(Mode::Release);
}
#[must_use]
pub fn is_debug() -> bool {
    MODE.get().is_debug()
}
/// A [`Checker`] following the process-wide mode
#[must_use]
pub fn global() -> Checker<&'static AtomicMode> {
    Checker::new(&MODE)
}

#[track_caller]
pub fn check_true(condition: bool, message: Option<&str>) {
    if let Err(failure) = global().require_true(condition, message) {
        failure.raise();
    }
}
#[track_caller]
pub fn check_positive<N>(number: N, message: Option<&str>)
where
    N: PrimInt + Display,
{
    if let Err(failure) = global().require_positive(number, message) {
        failure.raise();
    }
}
#[track_caller]
pub fn check_non_null<T: Any>(obj: Option<&T>, message: Option<&str>) {
    if let Err(failure) = global().require_non_null(obj, message) {
        failure.raise();
    }
}
#[track_caller]
pub fn check_non_empty(text: Option<&str>, message: Option<&str>) {
    if let Err(failure) = global().require_non_empty(text, message) {
        failure.raise();
    }
}

#[track_caller]
pub fn dcheck_true(condition: bool, message: Option<&str>) {
    if let Err(failure) = global().debug_require_true(condition, message) {
        failure.raise();
    }
}
#[track_caller]
pub fn dcheck_positive<N>(number: N, message: Option<&str>)
where
    N: PrimInt + Display,
{
    if let Err(failure) = global().debug_require_positive(number, message) {
        failure.raise();
    }
}
#[track_caller]
pub fn dcheck_non_null<T: Any>(obj: Option<&T>, message: Option<&str>) {
    if let Err(failure) = global().debug_require_non_null(obj, message) {
        failure.raise();
    }
}
#[track_caller]
pub fn dcheck_non_empty(text: Option<&str>, message: Option<&str>) {
    if let Err(failure) = global().debug_require_non_empty(text, message) {
        failure.raise();
    }
}

/// Raise a boolean [`CheckFailure`] unless the condition holds.
///
/// The message is only formatted on failure.
///
/// ```should_panic
/// let retries = 0;
/// checker::check!(retries < 3);
/// checker::check!(retries == 1, "unexpected retries: {retries}");
/// ```
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        $crate::global::check_true($cond, ::core::option::Option::None)
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::global::check_true(
                false,
                ::core::option::Option::Some(::std::format!($($arg)+).as_str()),
            );
        }
    };
}

/// [`check!`] while the process-wide mode is [`Mode::Debug`](crate::Mode::Debug)
#[macro_export]
macro_rules! dcheck {
    ($($arg:tt)+) => {
        if $crate::global::is_debug() {
            $crate::check!($($arg)+);
        }
    };
}
