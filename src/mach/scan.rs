use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Character cursor over the active line
///
/// `peek` returns `None` at the end of the line. The index never moves
/// past the end, so the end-of-line position is sticky.

#[derive(Debug, Default, Clone)]
pub struct Scanner {
    chars: Vec<char>,
    index: usize,
}

impl Scanner {
    pub fn new(text: &str) -> Scanner {
        Scanner {
            chars: text.chars().collect(),
            index: 0,
        }
    }

    /// Makes `text` the active line with the cursor at its start.
    pub fn load(&mut self, text: &str) {
        self.chars.clear();
        self.chars.extend(text.chars());
        self.index = 0;
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn seek(&mut self, index: usize) {
        self.index = index.min(self.chars.len());
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.chars.len()
    }

    pub fn advance(&mut self) {
        if self.index < self.chars.len() {
            self.index += 1;
        }
    }

    pub fn skip_space(&mut self) {
        while self.peek() == Some(' ') {
            self.index += 1;
        }
    }

    pub fn skip_to_end(&mut self) {
        self.index = self.chars.len();
    }

    pub fn rest(&self) -> String {
        self.chars[self.index..].iter().collect()
    }

    /// Reads an optionally negative decimal literal.
    ///
    /// A run with no digits at all reads as zero. A minus sign must be
    /// followed by a digit or decimal point.
    pub fn read_number(&mut self) -> Result<Val> {
        self.skip_space();
        let mut s = String::new();
        if self.peek() == Some('-') {
            s.push('-');
            self.advance();
            match self.peek() {
                Some(ch) if ch.is_ascii_digit() || ch == '.' => {}
                _ => return Err(error!(InvalidNumber)),
            }
        }
        let mut digits = false;
        let mut decimal = false;
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                digits = true;
            } else if ch == '.' {
                if decimal {
                    return Err(error!(InvalidNumber));
                }
                decimal = true;
            } else {
                break;
            }
            s.push(ch);
            self.advance();
        }
        if !digits {
            return Ok(Val::Integer(0));
        }
        if decimal {
            match s.parse::<f64>() {
                Ok(n) => Ok(Val::Decimal(n)),
                Err(_) => Err(error!(InvalidNumber)),
            }
        } else {
            match s.parse::<i64>() {
                Ok(n) => Ok(Val::Integer(n)),
                Err(_) => Err(error!(InvalidNumber)),
            }
        }
    }

    /// Reads a run of uppercase letters: a keyword or a variable name.
    pub fn read_label(&mut self) -> Result<String> {
        self.skip_space();
        let mut s = String::new();
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_uppercase() {
                break;
            }
            s.push(ch);
            self.advance();
        }
        if s.is_empty() {
            return Err(error!(InvalidLabel));
        }
        Ok(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_read_number() {
        let mut s = Scanner::new("  42 REM");
        assert_eq!(s.read_number(), Ok(Val::Integer(42)));
        assert_eq!(s.peek(), Some(' '));
    }

    #[test]
    fn test_read_negative_decimal() {
        let mut s = Scanner::new("-1.25)");
        assert_eq!(s.read_number(), Ok(Val::Decimal(-1.25)));
        assert_eq!(s.peek(), Some(')'));
    }

    #[test]
    fn test_second_point_is_invalid() {
        let mut s = Scanner::new("1.2.3");
        assert_eq!(s.read_number().unwrap_err().code(), ErrorCode::InvalidNumber);
    }

    #[test]
    fn test_bare_minus_is_invalid() {
        let mut s = Scanner::new("-A");
        assert_eq!(s.read_number().unwrap_err().code(), ErrorCode::InvalidNumber);
    }

    #[test]
    fn test_digitless_reads_zero() {
        let mut s = Scanner::new("PRINT 1");
        assert_eq!(s.read_number(), Ok(Val::Integer(0)));
        assert_eq!(s.position(), 0);
        let mut s = Scanner::new("");
        assert_eq!(s.read_number(), Ok(Val::Integer(0)));
    }

    #[test]
    fn test_read_label() {
        let mut s = Scanner::new(" GOTO10");
        assert_eq!(s.read_label().unwrap(), "GOTO");
        assert_eq!(s.peek(), Some('1'));
        assert_eq!(s.read_label().unwrap_err().code(), ErrorCode::InvalidLabel);
    }

    #[test]
    fn test_label_at_end_of_line() {
        let mut s = Scanner::new("   ");
        assert_eq!(s.read_label().unwrap_err().code(), ErrorCode::InvalidLabel);
        assert!(s.at_end());
    }

    #[test]
    fn test_end_of_line_is_sticky() {
        let mut s = Scanner::new("A");
        s.advance();
        s.advance();
        assert_eq!(s.position(), 1);
        assert_eq!(s.peek(), None);
        s.load("XY");
        assert_eq!(s.position(), 0);
        assert_eq!(s.rest(), "XY");
    }
}
