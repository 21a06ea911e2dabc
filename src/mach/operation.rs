use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Arithmetic and relational kernels
///
/// Integers follow the host's wrapping two's complement arithmetic.
/// Mixing an integer with a decimal yields a decimal.
/// Relations yield 1 for true and 0 for false.

pub struct Operation {}

impl Operation {
    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Ok(Integer(l.wrapping_mul(r))),
            (l, r) => Ok(Decimal(l.as_f64() * r.as_f64())),
        }
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        if rhs.is_zero() {
            return Err(error!(DivisionByZero));
        }
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => {
                if l.wrapping_rem(r) == 0 {
                    Ok(Integer(l.wrapping_div(r)))
                } else {
                    Ok(Decimal(l as f64 / r as f64))
                }
            }
            (l, r) => Ok(Decimal(l.as_f64() / r.as_f64())),
        }
    }

    /// The remainder takes the sign of the divisor.
    pub fn modulus(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        if rhs.is_zero() {
            return Err(error!(DivisionByZero));
        }
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => {
                let m = l.wrapping_rem(r);
                if m != 0 && (m < 0) != (r < 0) {
                    Ok(Integer(m + r))
                } else {
                    Ok(Integer(m))
                }
            }
            (l, r) => {
                let (l, r) = (l.as_f64(), r.as_f64());
                Ok(Decimal(l - r * (l / r).floor()))
            }
        }
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Ok(Integer(l.wrapping_add(r))),
            (l, r) => Ok(Decimal(l.as_f64() + r.as_f64())),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Ok(Integer(l.wrapping_sub(r))),
            (l, r) => Ok(Decimal(l.as_f64() - r.as_f64())),
        }
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(Operation::equal_bool(lhs, rhs)))
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(!Operation::equal_bool(lhs, rhs)))
    }

    fn equal_bool(lhs: Val, rhs: Val) -> bool {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => l == r,
            (l, r) => (l.as_f64() - r.as_f64()).abs() < std::f64::EPSILON,
        }
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(Operation::less_bool(rhs, lhs)))
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(Operation::less_bool(lhs, rhs)))
    }

    fn less_bool(lhs: Val, rhs: Val) -> bool {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => l < r,
            (l, r) => l.as_f64() < r.as_f64(),
        }
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(!Operation::less_bool(lhs, rhs)))
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(!Operation::less_bool(rhs, lhs)))
    }
}
