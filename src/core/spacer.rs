use crate::core::Step;
use crate::domain::model::GREETING;
use crate::utils::error::Result;
use std::io::Write;

pub struct CharacterSpacer<'a> {
    text: &'a str,
}

impl<'a> CharacterSpacer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Default for CharacterSpacer<'static> {
    fn default() -> Self {
        Self::new(GREETING)
    }
}

impl Step for CharacterSpacer<'_> {
    fn name(&self) -> &'static str {
        "spacer"
    }

    fn write_to(&self, out: &mut dyn Write) -> Result<()> {
        // 每個字元後面接一個空白，不換行
        for c in self.text.chars() {
            write!(out, "{} ", c)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
