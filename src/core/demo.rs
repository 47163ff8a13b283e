use crate::core::Step;
use crate::domain::model::DEMO_MESSAGE;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Default, Clone, Copy)]
pub struct MyClass;

impl MyClass {
    pub fn new() -> Self {
        Self
    }

    pub fn my_method(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", DEMO_MESSAGE)?;
        Ok(())
    }
}

/// Constructs a fresh `MyClass` and calls `my_method` once.
#[derive(Debug, Default)]
pub struct DemoStep;

impl Step for DemoStep {
    fn name(&self) -> &'static str {
        "demo"
    }

    fn write_to(&self, out: &mut dyn Write) -> Result<()> {
        let my_object = MyClass::new();
        my_object.my_method(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_my_method_writes_one_line() {
        let mut buf = Vec::new();
        MyClass::new().my_method(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "MyClass.MyMethod() was called\n"
        );
    }

    #[test]
    fn test_demo_step_matches_method() {
        let mut from_step = Vec::new();
        DemoStep.write_to(&mut from_step).unwrap();

        let mut from_method = Vec::new();
        MyClass.my_method(&mut from_method).unwrap();

        assert_eq!(from_step, from_method);
    }
}
