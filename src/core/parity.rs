use crate::core::Step;
use crate::domain::model::{Parity, NUMBERS};
use crate::utils::error::Result;
use std::io::Write;

/// Writes `<n> is even` / `<n> is odd` per number, then a blank line.
pub struct ParityReporter<'a> {
    numbers: &'a [i32],
}

impl<'a> ParityReporter<'a> {
    pub fn new(numbers: &'a [i32]) -> Self {
        Self { numbers }
    }
}

impl Default for ParityReporter<'static> {
    fn default() -> Self {
        Self::new(&NUMBERS)
    }
}

impl Step for ParityReporter<'_> {
    fn name(&self) -> &'static str {
        "parity"
    }

    fn write_to(&self, out: &mut dyn Write) -> Result<()> {
        for &n in self.numbers {
            writeln!(out, "{} {}", n, Parity::of(n))?;
        }
        writeln!(out)?;

        tracing::debug!("Reported parity for {} numbers", self.numbers.len());
        Ok(())
    }
}
