use core::{any::Any, fmt::Display};
use std::{borrow::Cow, rc::Rc, sync::Arc};

use num_traits::PrimInt;

use crate::{
    failure::CheckFailure,
    kind::CheckKind,
    mode::{Mode, ModeSource},
};

/// Precondition checks against an injected [`Mode`].
///
/// `require_*` always check. `debug_require_*` pass without looking at their
/// input while the mode is [`Mode::Release`].
///
/// Every check is `#[track_caller]`: a failure reports the line that called
/// the check, not a line in this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checker<M = Mode> {
    mode: M,
}
impl<M> Checker<M> {
    #[must_use]
    pub const fn new(mode: M) -> Self {
        Self { mode }
    }
    #[must_use]
    pub const fn mode_source(&self) -> &M {
        &self.mode
    }
    #[must_use]
    pub fn with_mode<N>(self, mode: N) -> Checker<N> {
        Checker { mode }
    }
}
impl<M: ModeSource> Checker<M> {
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode.mode()
    }

    /// Fails with [`CheckKind::Boolean`] if `condition` is false
    #[track_caller]
    pub fn require_true(&self, condition: bool, message: Option<&str>) -> Result<(), CheckFailure> {
        if condition {
            return Ok(());
        }
        Err(failure(CheckKind::Boolean, false, message))
    }

    /// Fails with [`CheckKind::Integer`] unless `number > 0`
    #[track_caller]
    pub fn require_positive<N>(&self, number: N, message: Option<&str>) -> Result<(), CheckFailure>
    where
        N: PrimInt + Display,
    {
        if number > N::zero() {
            return Ok(());
        }
        Err(failure(CheckKind::Integer, number, message))
    }

    /// Fails with [`CheckKind::Object`] if `obj` is `None`.
    ///
    /// If `T` is a text type (`String`, `&'static str`, `Box<str>`,
    /// `Cow<'static, str>`, `Rc<str>` or `Arc<str>`), an empty value fails
    /// with [`CheckKind::String`] instead.
    #[track_caller]
    pub fn require_non_null<T>(
        &self,
        obj: Option<&T>,
        message: Option<&str>,
    ) -> Result<(), CheckFailure>
    where
        T: Any,
    {
        let Some(obj) = obj else {
            return Err(failure(CheckKind::Object, "null", message));
        };
        match as_text(obj) {
            Some(text) => self.require_non_empty(Some(text), message),
            None => Ok(()),
        }
    }

    /// Fails with [`CheckKind::Object`] if `text` is `None` and with
    /// [`CheckKind::String`] if it is empty
    #[track_caller]
    pub fn require_non_empty(
        &self,
        text: Option<&str>,
        message: Option<&str>,
    ) -> Result<(), CheckFailure> {
        match text {
            None => Err(failure(CheckKind::Object, "null", message)),
            Some("") => Err(failure(CheckKind::String, "\"\"", message)),
            Some(_) => Ok(()),
        }
    }

    #[track_caller]
    pub fn debug_require_true(
        &self,
        condition: bool,
        message: Option<&str>,
    ) -> Result<(), CheckFailure> {
        if !self.mode().is_debug() {
            return Ok(());
        }
        self.require_true(condition, message)
    }
    #[track_caller]
    pub fn debug_require_positive<N>(
        &self,
        number: N,
        message: Option<&str>,
    ) -> Result<(), CheckFailure>
    where
        N: PrimInt + Display,
    {
        if !self.mode().is_debug() {
            return Ok(());
        }
        self.require_positive(number, message)
    }
    #[track_caller]
    pub fn debug_require_non_null<T>(
        &self,
        obj: Option<&T>,
        message: Option<&str>,
    ) -> Result<(), CheckFailure>
    where
        T: Any,
    {
        if !self.mode().is_debug() {
            return Ok(());
        }
        self.require_non_null(obj, message)
    }
    #[track_caller]
    pub fn debug_require_non_empty(
        &self,
        text: Option<&str>,
        message: Option<&str>,
    ) -> Result<(), CheckFailure> {
        if !self.mode().is_debug() {
            return Ok(());
        }
        self.require_non_empty(text, message)
    }
}

#[track_caller]
fn failure(kind: CheckKind, value: impl Display, message: Option<&str>) -> CheckFailure {
    CheckFailure::new(kind, kind.detail(value, message))
}

fn as_text(obj: &dyn Any) -> Option<&str> {
    if let Some(s) = obj.downcast_ref::<String>() {
        return Some(s.as_str());
    }
    if let Some(s) = obj.downcast_ref::<&'static str>() {
        return Some(*s);
    }
    if let Some(s) = obj.downcast_ref::<Box<str>>() {
        return Some(&**s);
    }
    if let Some(s) = obj.downcast_ref::<Cow<'static, str>>() {
        return Some(&**s);
    }
    if let Some(s) = obj.downcast_ref::<Rc<str>>() {
        return Some(&**s);
    }
    if let Some(s) = obj.downcast_ref::<Arc<str>>() {
        return Some(&**s);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBUG: Checker = Checker::new(Mode::Debug);
    const RELEASE: Checker = Checker::new(Mode::Release);

    #[test]
    fn test_require_true() {
        DEBUG.require_true(true, None).unwrap();
        DEBUG.require_true(true, Some("unused")).unwrap();

        let line = line!() + 1;
        let failure = DEBUG.require_true(false, None).unwrap_err();
        assert!(failure.is_boolean());
        assert_eq!(failure.to_string(), format!("(checker.rs:{line})[boolean=false]"));

        let failure = DEBUG.require_true(false, Some("socket closed")).unwrap_err();
        assert_eq!(failure.detail(), "[boolean=false]socket closed");
    }

    #[test]
    fn test_require_positive() {
        DEBUG.require_positive(5, None).unwrap();
        DEBUG.require_positive(1_u8, None).unwrap();
        DEBUG.require_positive(i64::MAX, None).unwrap();

        let failure = DEBUG.require_positive(0, None).unwrap_err();
        assert!(failure.is_integer());
        assert_eq!(failure.detail(), "[number=0]");

        let failure = DEBUG.require_positive(-3, Some("must be positive")).unwrap_err();
        assert_eq!(failure.detail(), "[number=-3] must be positive");

        let failure = DEBUG.require_positive(i32::MIN, None).unwrap_err();
        assert_eq!(failure.detail(), format!("[number={}]", i32::MIN));

        let failure = DEBUG.require_positive(0_usize, Some("")).unwrap_err();
        assert_eq!(failure.detail(), "[number=0] ");
    }

    #[test]
    fn test_require_non_null() {
        #[derive(Debug)]
        struct Conn;

        DEBUG.require_non_null(Some(&Conn), None).unwrap();
        DEBUG.require_non_null(Some(&0_u32), None).unwrap();
        DEBUG.require_non_null(Some(&Vec::<u8>::new()), None).unwrap();
        DEBUG.require_non_null(Some(&"x"), None).unwrap();
        DEBUG.require_non_null(Some(&String::from("x")), None).unwrap();

        let failure = DEBUG.require_non_null(None::<&Conn>, None).unwrap_err();
        assert!(failure.is_object());
        assert_eq!(failure.detail(), "[obj=null]");

        let failure = DEBUG.require_non_null(None::<&Conn>, Some("no conn")).unwrap_err();
        assert_eq!(failure.detail(), "[obj=null]no conn");
    }

    #[test]
    fn test_require_non_null_empty_text() {
        let failure = DEBUG.require_non_null(Some(&""), None).unwrap_err();
        assert!(failure.is_string());
        assert!(!failure.is_object());
        assert_eq!(failure.detail(), "[string=\"\"]");

        let failure = DEBUG.require_non_null(Some(&String::new()), Some("name")).unwrap_err();
        assert_eq!(failure.detail(), "[string=\"\"]name");

        let boxed: Box<str> = "".into();
        assert!(DEBUG.require_non_null(Some(&boxed), None).unwrap_err().is_string());
        let cow: Cow<'static, str> = Cow::Borrowed("");
        assert!(DEBUG.require_non_null(Some(&cow), None).unwrap_err().is_string());
        let rc: Rc<str> = "".into();
        assert!(DEBUG.require_non_null(Some(&rc), None).unwrap_err().is_string());
        let arc: Arc<str> = "".into();
        assert!(DEBUG.require_non_null(Some(&arc), None).unwrap_err().is_string());
    }

    #[test]
    fn test_require_non_empty() {
        DEBUG.require_non_empty(Some("a"), None).unwrap();
        assert!(DEBUG.require_non_empty(None, None).unwrap_err().is_object());
        let failure = DEBUG.require_non_empty(Some(""), Some("path")).unwrap_err();
        assert!(failure.is_string());
        assert_eq!(failure.detail(), "[string=\"\"]path");
    }

    #[test]
    fn test_release_skips_debug_checks() {
        RELEASE.debug_require_true(false, None).unwrap();
        RELEASE.debug_require_positive(0, None).unwrap();
        RELEASE.debug_require_non_null(None::<&u8>, None).unwrap();
        RELEASE.debug_require_non_empty(Some(""), None).unwrap();

        assert!(RELEASE.require_true(false, None).is_err());
    }

    #[test]
    fn test_debug_checks_report_caller() {
        let line = line!() + 1;
        let failure = DEBUG.debug_require_true(false, None).unwrap_err();
        assert_eq!(failure.call_site().line(), line);
        assert_eq!(failure.call_site().file_name(), "checker.rs");

        let line = line!() + 1;
        let failure = DEBUG.debug_require_non_null(Some(&""), None).unwrap_err();
        assert_eq!(failure.call_site().line(), line);
    }

    #[test]
    fn test_shared_mode() {
        use crate::mode::AtomicMode;

        let mode = Arc::new(AtomicMode::default());
        let checker = Checker::new(Arc::clone(&mode));
        assert!(checker.debug_require_positive(0, None).is_err());
        mode.set(Mode::Release);
        checker.debug_require_positive(0, None).unwrap();
        mode.set(Mode::Debug);
        assert!(checker.debug_require_positive(0, None).is_err());
    }

    #[test]
    fn test_with_mode() {
        let checker = DEBUG.with_mode(Mode::Release);
        assert_eq!(checker.mode(), Mode::Release);
        assert_eq!(*checker.mode_source(), Mode::Release);
    }

    #[test]
    fn test_propagate() -> anyhow::Result<()> {
        fn open(path: &str) -> Result<usize, CheckFailure> {
            DEBUG.require_non_empty(Some(path), Some("path"))?;
            Ok(path.len())
        }
        assert_eq!(open("a")?, 1);
        let err = anyhow::Error::from(open("").unwrap_err());
        assert!(err.downcast_ref::<CheckFailure>().unwrap().is_string());
        Ok(())
    }
}
