use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Step '{step}' failed: {source}")]
    StepError {
        step: &'static str,
        #[source]
        source: Box<DemoError>,
    },
}

impl DemoError {
    pub fn step(step: &'static str, source: DemoError) -> Self {
        DemoError::StepError {
            step,
            source: Box::new(source),
        }
    }

    /// Innermost cause, skipping step wrappers.
    pub fn root(&self) -> &DemoError {
        match self {
            DemoError::StepError { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.root() {
            DemoError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                "Standard output was closed before the program finished".to_string()
            }
            DemoError::IoError(e) => format!("Could not write to standard output: {}", e),
            DemoError::StepError { .. } => self.to_string(),
        }
    }

    // Only reachable when stdout itself is unusable.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
