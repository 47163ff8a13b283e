use crate::utils::error::Result;
use std::io::Write;

/// One section of program output.
pub trait Step {
    fn name(&self) -> &'static str;
    fn write_to(&self, out: &mut dyn Write) -> Result<()>;
}
