use std::fmt;

pub const NUMBERS: [i32; 5] = [1, 2, 3, 4, 5];

pub const GREETING: &str = "Hello, world!";

pub const DEMO_MESSAGE: &str = "MyClass.MyMethod() was called";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Remainder test, so `-3 % 2 == -1` is still odd.
    pub fn of(n: i32) -> Self {
        if n % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => f.write_str("is even"),
            Parity::Odd => f.write_str("is odd"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_of_fixed_numbers() {
        let parities: Vec<Parity> = NUMBERS.iter().map(|&n| Parity::of(n)).collect();
        assert_eq!(
            parities,
            vec![Parity::Odd, Parity::Even, Parity::Odd, Parity::Even, Parity::Odd]
        );
    }

    #[test]
    fn test_parity_of_negative_and_zero() {
        assert_eq!(Parity::of(0), Parity::Even);
        assert_eq!(Parity::of(-3), Parity::Odd);
        assert_eq!(Parity::of(-4), Parity::Even);
        assert_eq!(Parity::of(i32::MIN), Parity::Even);
    }

    #[test]
    fn test_greeting_has_thirteen_chars() {
        assert_eq!(GREETING.chars().count(), 13);
    }
}
