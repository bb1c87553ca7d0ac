//! # Creational Design Patterns
//!
//! Small, self-contained illustrations of the four classic creational
//! patterns, written the way Rust wants them written.
//!
//! ## Patterns Covered
//!
//! 1. **Singleton** ([`singleton`])
//!    - Lazily initialized process-wide state behind `OnceLock`
//!    - Private construction, public accessor
//!
//! 2. **Prototype** ([`prototype`])
//!    - Explicit delegation to an ancestor object
//!    - Bounded chain walks instead of implicit inheritance
//!
//! 3. **Builder** ([`builder`])
//!    - Chained `&mut self` mutators
//!    - Consuming builder folding steps into a final value
//!
//! 4. **Factory** ([`factory`])
//!    - Total discriminant -> variant mapping
//!    - Trait objects and enum dispatch
//!
//! ## Running the Demo
//!
//! ```bash
//! cargo run --bin creational
//! cargo run --bin creational -- demo.toml
//! RUST_LOG=creational_patterns=debug cargo run --bin creational
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod factory;
pub mod logging;
pub mod prototype;
pub mod singleton;

pub use builder::{Panini, PaniniBuilder, Step};
pub use config::DemoConfig;
pub use error::{PatternError, Result};
pub use factory::{AndroidButton, Button, ButtonFactory, IosButton, Platform, PlatformButton};
pub use prototype::{get_prototype_of, ProtoObject, Slot, Value};
pub use singleton::{FrozenSettings, Mode, Settings, FROZEN_SETTINGS};
