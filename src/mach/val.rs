/// ## Numeric cell
///
/// Whole numbers stay integers. A decimal point in a literal, or a
/// division that does not come out even, produces a decimal.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Val {
    Integer(i64),
    Decimal(f64),
}

impl Default for Val {
    fn default() -> Val {
        Val::Integer(0)
    }
}

impl Val {
    pub fn from_bool(b: bool) -> Val {
        if b {
            Val::Integer(1)
        } else {
            Val::Integer(0)
        }
    }

    pub fn is_zero(&self) -> bool {
        match *self {
            Val::Integer(n) => n == 0,
            Val::Decimal(n) => n == 0.0,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Val::Integer(n) => n as f64,
            Val::Decimal(n) => n,
        }
    }

    /// Whole, positive values that fit a line number.
    pub fn as_line_number(&self) -> Option<u16> {
        let n = match *self {
            Val::Integer(n) => n,
            Val::Decimal(n) if n.fract() == 0.0 => n as i64,
            Val::Decimal(_) => return None,
        };
        if n > 0 && n <= u16::max_value() as i64 {
            Some(n as u16)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Decimal(n) => write!(f, "{}", n),
        }
    }
}
