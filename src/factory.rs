// Factory: one function decides which concrete button to build, so callers
// stop repeating the platform check themselves.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    /// Total mapping: `"ios"` is iOS, everything else falls back to Android.
    pub fn from_discriminant(os: &str) -> Self {
        if os == "ios" {
            Platform::Ios
        } else {
            Platform::Android
        }
    }
}

impl FromStr for Platform {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Platform::from_discriminant(s))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Ios => write!(f, "ios"),
            Platform::Android => write!(f, "android"),
        }
    }
}

pub trait Button: fmt::Debug {
    fn platform(&self) -> Platform;

    /// Unique per constructed button, so two builds are never the same one.
    fn id(&self) -> u64;

    fn render(&self) -> String;
}

#[derive(Debug)]
pub struct IosButton {
    id: u64,
}

impl IosButton {
    pub fn new() -> Self {
        Self { id: next_id() }
    }
}

impl Default for IosButton {
    fn default() -> Self {
        Self::new()
    }
}

impl Button for IosButton {
    fn platform(&self) -> Platform {
        Platform::Ios
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn render(&self) -> String {
        format!("Rendering iOS button #{}", self.id)
    }
}

#[derive(Debug)]
pub struct AndroidButton {
    id: u64,
}

impl AndroidButton {
    pub fn new() -> Self {
        Self { id: next_id() }
    }
}

impl Default for AndroidButton {
    fn default() -> Self {
        Self::new()
    }
}

impl Button for AndroidButton {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn render(&self) -> String {
        format!("Rendering Android button #{}", self.id)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ButtonFactory;

impl ButtonFactory {
    pub fn new() -> Self {
        Self
    }

    /// Builds a fresh button for `os`. Nothing is cached.
    pub fn create_button(&self, os: &str) -> Box<dyn Button> {
        self.create_for(Platform::from_discriminant(os))
    }

    pub fn create_for(&self, platform: Platform) -> Box<dyn Button> {
        debug!(%platform, "creating button");
        match platform {
            Platform::Ios => Box::new(IosButton::new()),
            Platform::Android => Box::new(AndroidButton::new()),
        }
    }
}

/// Enum dispatch instead of trait objects: no heap allocation, no vtable.
#[derive(Debug)]
pub enum PlatformButton {
    Ios(IosButton),
    Android(AndroidButton),
}

impl PlatformButton {
    pub fn new(platform: Platform) -> Self {
        match platform {
            Platform::Ios => PlatformButton::Ios(IosButton::new()),
            Platform::Android => PlatformButton::Android(AndroidButton::new()),
        }
    }

    pub fn platform(&self) -> Platform {
        match self {
            PlatformButton::Ios(btn) => btn.platform(),
            PlatformButton::Android(btn) => btn.platform(),
        }
    }

    pub fn render(&self) -> String {
        match self {
            PlatformButton::Ios(btn) => btn.render(),
            PlatformButton::Android(btn) => btn.render(),
        }
    }
}

/// What callers write when there is no factory: the same conditional,
/// copied to every place that needs a button.
pub fn without_factory(os: &str) -> Box<dyn Button> {
    if os == "ios" {
        Box::new(IosButton::new())
    } else {
        Box::new(AndroidButton::new())
    }
}
