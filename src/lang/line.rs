use super::LineNumber;
use std::sync::Arc;

/// ## A line of program text
///
/// Numbered lines live in the program listing. The unnumbered
/// workspace line holds whatever was typed for immediate execution.

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: LineNumber,
    text: Arc<str>,
}

impl Line {
    pub fn new(number: u16, text: &str) -> Line {
        Line {
            number: Some(number),
            text: text.trim().into(),
        }
    }

    pub fn direct(text: &str) -> Line {
        Line {
            number: None,
            text: text.trim_end_matches(&['\r', '\n'][..]).into(),
        }
    }

    /// Splits a leading line number off saved program text.
    /// Text without a line number becomes a workspace line.
    pub fn parse(s: &str) -> Line {
        let s = s.trim_start();
        let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
        match s[..digits].parse::<u16>() {
            Ok(number) if number > 0 => Line::new(number, &s[digits..]),
            _ => Line::direct(s),
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The line as LIST shows it, number right justified to five columns.
    pub fn listing(&self) -> String {
        match self.number {
            Some(number) => format!("{:>5} {}", number, self.text),
            None => self.text.to_string(),
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "{} {}", number, self.text),
            None => write!(f, "{}", self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbered() {
        let l = Line::parse("10 PRINT 1\n");
        assert_eq!(l.number(), Some(10));
        assert_eq!(l.text(), "PRINT 1");
    }

    #[test]
    fn test_parse_direct() {
        let l = Line::parse("PRINT 1\r\n");
        assert!(l.is_direct());
        assert_eq!(l.text(), "PRINT 1");
    }

    #[test]
    fn test_parse_zero_is_direct() {
        assert!(Line::parse("0 END").is_direct());
    }

    #[test]
    fn test_listing_padding() {
        assert_eq!(Line::new(10, "PRINT 1").listing(), "   10 PRINT 1");
        assert_eq!(Line::new(12345, "END").listing(), "12345 END");
    }

    #[test]
    fn test_empty() {
        assert!(Line::new(10, "   ").is_empty());
        assert_eq!(Line::new(20, " REM X ").to_string(), "20 REM X");
    }
}
