pub mod demo;
pub mod parity;
pub mod program;
pub mod spacer;

pub use crate::domain::model::{Parity, DEMO_MESSAGE, GREETING, NUMBERS};
pub use crate::domain::ports::Step;
pub use crate::utils::error::Result;
pub use demo::{DemoStep, MyClass};
pub use parity::ParityReporter;
pub use program::Program;
pub use spacer::CharacterSpacer;
