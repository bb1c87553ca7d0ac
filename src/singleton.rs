// Singleton: one lazily constructed, process-wide Settings value.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Dark,
    Light,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Dark => write!(f, "dark"),
            Mode::Light => write!(f, "light"),
        }
    }
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

/// Application settings shared by every caller in the process.
///
/// There is no public constructor and the field is private, so the only
/// way to obtain a `Settings` is [`Settings::instance`]:
///
/// ```compile_fail
/// let s = creational_patterns::Settings { mode: creational_patterns::Mode::Dark };
/// ```
#[derive(Debug)]
pub struct Settings {
    mode: Mode,
}

impl Settings {
    fn new() -> Self {
        CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        debug!("constructing Settings singleton");
        Self { mode: Mode::Dark }
    }

    /// Returns the process-wide instance, building it on first use.
    ///
    /// `OnceLock` blocks racing first callers until the winner finishes, so
    /// concurrent access still yields exactly one construction.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(Settings::new)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// How many times the constructor has run. Never more than one.
    pub fn construction_count() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }
}

/// The other way to get a one-of-a-kind value: an immutable `static`.
/// It exists before `main` and nothing can create a second one.
#[derive(Debug, PartialEq, Eq)]
pub struct FrozenSettings {
    pub dark: &'static str,
}

pub static FROZEN_SETTINGS: FrozenSettings = FrozenSettings { dark: "true" };
