use crate::core::{CharacterSpacer, DemoStep, ParityReporter, Step};
use crate::utils::error::{DemoError, Result};
use std::io::Write;

pub struct Program {
    steps: Vec<Box<dyn Step>>,
}

impl Program {
    pub fn new() -> Self {
        Self::with_steps(vec![
            Box::new(ParityReporter::default()),
            Box::new(CharacterSpacer::default()),
            Box::new(DemoStep),
        ])
    }

    pub fn with_steps(steps: Vec<Box<dyn Step>>) -> Self {
        Self { steps }
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Runs every step in order, then flushes `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        tracing::info!("Running {} steps", self.steps.len());

        for step in &self.steps {
            tracing::debug!("Running step: {}", step.name());
            step.write_to(out).map_err(|e| DemoError::step(step.name(), e))?;
        }

        out.flush()?;
        tracing::info!("All steps completed");
        Ok(())
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}
