use super::LineNumber;
use std::rc::Rc;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    message: Rc<str>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: "".into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn detail(&self) -> &str {
        &self.message
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    pub fn is_stop(&self) -> bool {
        self.code == ErrorCode::Stop
    }

    /// Attributes the error to a program line. Line zero is the prompt
    /// and leaves the error undecorated.
    pub fn in_line_number(&self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            code: self.code,
            line_number: line.filter(|&n| n > 0),
            message: self.message.clone(),
        }
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            line_number: self.line_number,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i16)]
pub enum ErrorCode {
    Stop = -1,
    EndOfStatementExpected = 1,
    InvalidFactor = 2,
    InvalidNumber = 3,
    InvalidLabel = 4,
    FunctionExpected = 5,
    VariableExpected = 6,
    ThenExpected = 7,
    ExpressionTooComplex = 16,
    ProgramOverflow = 8,
    InvalidLineNumber = 9,
    EqualsExpected = 20,
    LineBufferOverflow = 23,
    LineNotFound = 32,
    InternalError = 51,
    FileNotFound = 53,
    UnterminatedString = 62,
    ReturnWithoutGosub = 133,
    GosubStackOverflow = 188,
    DivisionByZero = 224,
    MissingRightParenthesis = 296,
}

impl ErrorCode {
    pub fn number(self) -> i16 {
        self as i16
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let s = match self {
            Stop => "STOP",
            EndOfStatementExpected => "End of statement expected",
            InvalidFactor => "Invalid factor",
            InvalidNumber => "Invalid number",
            InvalidLabel => "Invalid label",
            FunctionExpected => "Function expected",
            VariableExpected => "Variable expected",
            ThenExpected => "THEN expected",
            ExpressionTooComplex => "Expression too complex",
            ProgramOverflow => "Program overflow",
            InvalidLineNumber => "Invalid line number",
            EqualsExpected => "= expected",
            LineBufferOverflow => "Line buffer overflow",
            LineNotFound => "Line not found",
            InternalError => "Internal error",
            FileNotFound => "File not found",
            UnterminatedString => "Unterminated string",
            ReturnWithoutGosub => "RETURN without GOSUB",
            GosubStackOverflow => "GOSUB stack overflow",
            DivisionByZero => "Division by zero",
            MissingRightParenthesis => "Missing )",
        };
        write!(f, "{}", s)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut text = self.code.to_string();
        if !self.message.is_empty() {
            text.push_str(&format!("; {}", self.message));
        }
        match (self.is_stop(), self.line_number) {
            (true, Some(line_number)) => write!(f, "{} at line {}", text, line_number),
            (true, None) => write!(f, "{}", text),
            (false, Some(line_number)) => write!(f, "Error in line {}: {}", line_number, text),
            (false, None) => write!(f, "Error: {}", text),
        }
    }
}
