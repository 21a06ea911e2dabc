use crate::error;
use crate::lang::{Error, ErrorCode};

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector
///
/// A push that would exceed the capacity fails with the stack's own
/// overflow error and leaves the stack unchanged.

pub struct Stack<T> {
    capacity: usize,
    overflow: ErrorCode,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(capacity: usize, overflow: ErrorCode) -> Stack<T> {
        Stack {
            capacity,
            overflow,
            vec: vec![],
        }
    }
    fn underflow_error(&self) -> Error {
        error!(InternalError; "UNDERFLOW")
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn truncate(&mut self, len: usize) {
        self.vec.truncate(len)
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.vec.len() >= self.capacity
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::new(self.overflow));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_is_an_error() {
        let mut s: Stack<u8> = Stack::new(2, ErrorCode::GosubStackOverflow);
        assert!(s.push(1).is_ok());
        assert!(s.push(2).is_ok());
        assert!(s.is_full());
        let e = s.push(3).unwrap_err();
        assert_eq!(e.code(), ErrorCode::GosubStackOverflow);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_pop_2_order() {
        let mut s: Stack<u8> = Stack::new(8, ErrorCode::ExpressionTooComplex);
        s.push(1).unwrap();
        s.push(2).unwrap();
        assert_eq!(s.pop_2().unwrap(), (1, 2));
        assert_eq!(s.pop().unwrap_err().code(), ErrorCode::InternalError);
    }
}
