#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{CharacterSpacer, DemoStep, MyClass, ParityReporter, Program, Step};
pub use utils::error::{DemoError, Result};
