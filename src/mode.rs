use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Whether debug-gated checks run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Debug,
    Release,
}
impl Mode {
    /// `Debug` under `debug_assertions`, `Release` otherwise
    #[must_use]
    pub const fn from_build_profile() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }
    #[must_use]
    pub const fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

pub trait ModeSource {
    fn mode(&self) -> Mode;
}
impl ModeSource for Mode {
    fn mode(&self) -> Mode {
        *self
    }
}
impl<T: ModeSource + ?Sized> ModeSource for &T {
    fn mode(&self) -> Mode {
        (**self).mode()
    }
}
impl<T: ModeSource + ?Sized> ModeSource for Arc<T> {
    fn mode(&self) -> Mode {
        (**self).mode()
    }
}

/// A mode shared between threads.
///
/// Loads and stores are relaxed: a flip is eventually seen by other threads
/// with no ordering against surrounding memory operations.
#[derive(Debug)]
pub struct AtomicMode {
    debug: AtomicBool,
}
impl AtomicMode {
    #[must_use]
    pub const fn new(mode: Mode) -> Self {
        Self {
            debug: AtomicBool::new(mode.is_debug()),
        }
    }
    #[must_use]
    pub fn get(&self) -> Mode {
        match self.debug.load(Ordering::Relaxed) {
            true => Mode::Debug,
            false => Mode::Release,
        }
    }
    /// Returns the previous mode
    pub fn set(&self, mode: Mode) -> Mode {
        let prev = self.debug.swap(mode.is_debug(), Ordering::Relaxed);
        if prev != mode.is_debug() {
            tracing::debug!(?mode, "check mode changed");
        }
        match prev {
            true => Mode::Debug,
            false => Mode::Release,
        }
    }
}
impl Default for AtomicMode {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
impl ModeSource for AtomicMode {
    fn mode(&self) -> Mode {
        self.get()
    }
}
