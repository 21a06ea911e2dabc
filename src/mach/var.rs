use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// A variable name: one uppercase letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter(u8);

/// ## Variable memory
///
/// Twenty six numeric slots, `A` through `Z`, all starting at zero.

#[derive(Debug, Default)]
pub struct Var {
    slots: [Val; 26],
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    /// Converts a scanned label to a variable name.
    pub fn resolve(label: &str) -> Result<Letter> {
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_uppercase() => Ok(Letter(ch as u8 - b'A')),
            _ => Err(error!(VariableExpected)),
        }
    }

    pub fn fetch(&self, letter: Letter) -> Val {
        self.slots[letter.0 as usize]
    }

    pub fn store(&mut self, letter: Letter, value: Val) {
        self.slots[letter.0 as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_resolve() {
        assert_eq!(Var::resolve("Q"), Ok(Letter(16)));
        assert_eq!(
            Var::resolve("AB").unwrap_err().code(),
            ErrorCode::VariableExpected
        );
        assert_eq!(
            Var::resolve("a").unwrap_err().code(),
            ErrorCode::VariableExpected
        );
        assert!(Var::resolve("").is_err());
    }

    #[test]
    fn test_store_and_clear() {
        let mut v = Var::new();
        let z = Var::resolve("Z").unwrap();
        assert_eq!(v.fetch(z), Val::Integer(0));
        v.store(z, Val::Decimal(1.5));
        assert_eq!(v.fetch(z), Val::Decimal(1.5));
        v.clear();
        assert_eq!(v.fetch(z), Val::Integer(0));
    }
}
