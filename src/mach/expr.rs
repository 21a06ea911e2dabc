use super::{Clock, Operation, Scanner, Stack, Val, Var};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;
type Kernel = fn(Val, Val) -> Result<Val>;

/// ## Expression evaluator
///
/// Precedence climbing over the scanner's cursor, lowest first:
/// relations, then `+ -`, then `* / %`, then atoms. Operands live on the
/// machine's value stack. Every tier pushes exactly one value, so a
/// finished expression leaves one value above the base it started at.
/// Parentheses may nest no deeper than the value stack is tall.

pub struct Evaluator<'a> {
    scan: &'a mut Scanner,
    vars: &'a Var,
    values: &'a mut Stack<Val>,
    clock: &'a dyn Clock,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(
        scan: &'a mut Scanner,
        vars: &'a Var,
        values: &'a mut Stack<Val>,
        clock: &'a dyn Clock,
    ) -> Evaluator<'a> {
        Evaluator {
            scan,
            vars,
            values,
            clock,
            depth: 0,
        }
    }

    /// Evaluates one expression at the cursor. The value stack is back
    /// at its starting height afterwards, error or not.
    pub fn evaluate(&mut self) -> Result<Val> {
        let base = self.values.len();
        self.depth = 0;
        let result = self.relation().and_then(|_| self.values.pop());
        self.values.truncate(base);
        result
    }

    fn relation(&mut self) -> Result<()> {
        self.additive()?;
        loop {
            self.scan.skip_space();
            let kernel: Kernel = match self.scan.peek() {
                Some('=') => Operation::equal,
                Some('<') => {
                    self.scan.advance();
                    match self.scan.peek() {
                        Some('=') => Operation::less_equal,
                        Some('>') => Operation::not_equal,
                        _ => {
                            self.additive()?;
                            self.apply(Operation::less)?;
                            continue;
                        }
                    }
                }
                Some('>') => {
                    self.scan.advance();
                    match self.scan.peek() {
                        Some('=') => Operation::greater_equal,
                        _ => {
                            self.additive()?;
                            self.apply(Operation::greater)?;
                            continue;
                        }
                    }
                }
                _ => return Ok(()),
            };
            self.scan.advance();
            self.additive()?;
            self.apply(kernel)?;
        }
    }

    fn additive(&mut self) -> Result<()> {
        self.multiplicative()?;
        loop {
            self.scan.skip_space();
            let kernel: Kernel = match self.scan.peek() {
                Some('+') => Operation::sum,
                Some('-') => Operation::subtract,
                _ => return Ok(()),
            };
            self.scan.advance();
            self.multiplicative()?;
            self.apply(kernel)?;
        }
    }

    fn multiplicative(&mut self) -> Result<()> {
        self.atom()?;
        loop {
            self.scan.skip_space();
            let kernel: Kernel = match self.scan.peek() {
                Some('*') => Operation::multiply,
                Some('/') => Operation::divide,
                Some('%') => Operation::modulus,
                _ => return Ok(()),
            };
            self.scan.advance();
            self.atom()?;
            self.apply(kernel)?;
        }
    }

    fn atom(&mut self) -> Result<()> {
        self.scan.skip_space();
        match self.scan.peek() {
            None => Err(error!(InvalidFactor)),
            Some('(') => {
                if self.depth >= self.values.capacity() {
                    return Err(error!(ExpressionTooComplex));
                }
                self.scan.advance();
                let base = self.values.len();
                self.depth += 1;
                self.relation()?;
                self.depth -= 1;
                self.scan.skip_space();
                if self.scan.peek() != Some(')') {
                    return Err(error!(MissingRightParenthesis));
                }
                self.scan.advance();
                if self.values.len() != base + 1 {
                    return Err(error!(InternalError; "UNBALANCED"));
                }
                Ok(())
            }
            Some(ch) if ch.is_ascii_digit() || ch == '-' || ch == '.' => {
                let val = self.scan.read_number()?;
                self.values.push(val)
            }
            Some(ch) if ch.is_ascii_uppercase() => {
                let label = self.scan.read_label()?;
                let val = match label.as_str() {
                    "TICKS" => Val::Integer(self.clock.now()),
                    "TICKSPERSEC" => Val::Integer(self.clock.ticks_per_second()),
                    _ if label.len() == 1 => self.vars.fetch(Var::resolve(&label)?),
                    _ => return Err(error!(FunctionExpected)),
                };
                self.values.push(val)
            }
            Some(_) => Err(error!(InvalidFactor)),
        }
    }

    /// Pops both operands before combining them, so a failed kernel
    /// leaves nothing behind.
    fn apply(&mut self, kernel: Kernel) -> Result<()> {
        let (lhs, rhs) = self.values.pop_2()?;
        let val = kernel(lhs, rhs)?;
        self.values.push(val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> i64 {
            1234
        }
        fn ticks_per_second(&self) -> i64 {
            1000
        }
    }

    fn eval_with(text: &str, vars: &Var, values: &mut Stack<Val>) -> Result<Val> {
        let mut scan = Scanner::new(text);
        Evaluator::new(&mut scan, vars, values, &FixedClock).evaluate()
    }

    fn eval(text: &str) -> Result<Val> {
        let mut values = Stack::new(255, ErrorCode::ExpressionTooComplex);
        eval_with(text, &Var::new(), &mut values)
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2 + 3 * 4"), Ok(Val::Integer(14)));
        assert_eq!(eval("(2 + 3) * 4"), Ok(Val::Integer(20)));
        assert_eq!(eval("10-4-3"), Ok(Val::Integer(3)));
        assert_eq!(eval("7 % 4 * 2"), Ok(Val::Integer(6)));
    }

    #[test]
    fn test_relational_chain() {
        assert_eq!(eval("1 < 2 = 1"), Ok(Val::Integer(1)));
        assert_eq!(eval("3 > 2 > 1"), Ok(Val::Integer(0)));
        assert_eq!(eval("1+1 <> 2"), Ok(Val::Integer(0)));
        assert_eq!(eval("2 >= 2"), Ok(Val::Integer(1)));
        assert_eq!(eval("2 <= 1"), Ok(Val::Integer(0)));
    }

    #[test]
    fn test_negative_literal() {
        assert_eq!(eval("3*-2"), Ok(Val::Integer(-6)));
        assert_eq!(eval("3 -2"), Ok(Val::Integer(1)));
        assert_eq!(eval("-.5+1"), Ok(Val::Decimal(0.5)));
    }

    #[test]
    fn test_variables() {
        let mut vars = Var::new();
        vars.store(Var::resolve("B").unwrap(), Val::Integer(7));
        let mut values = Stack::new(255, ErrorCode::ExpressionTooComplex);
        assert_eq!(eval_with("B*2", &vars, &mut values), Ok(Val::Integer(14)));
        assert_eq!(eval_with("C", &vars, &mut values), Ok(Val::Integer(0)));
    }

    #[test]
    fn test_ticks() {
        assert_eq!(eval("TICKS"), Ok(Val::Integer(1234)));
        assert_eq!(eval("TICKSPERSEC/10"), Ok(Val::Integer(100)));
        assert_eq!(eval("FOO").unwrap_err().code(), ErrorCode::FunctionExpected);
    }

    #[test]
    fn test_division_by_zero_leaves_stack_balanced() {
        let vars = Var::new();
        let mut values = Stack::new(255, ErrorCode::ExpressionTooComplex);
        for text in &["5 / 0", "5 % 0", "1 + (2 * (5 / 0))"] {
            let e = eval_with(text, &vars, &mut values).unwrap_err();
            assert_eq!(e.code(), ErrorCode::DivisionByZero);
            assert!(values.is_empty());
        }
        assert_eq!(eval_with("6/3", &vars, &mut values), Ok(Val::Integer(2)));
    }

    #[test]
    fn test_stops_at_separator() {
        let mut scan = Scanner::new("1+2: PRINT");
        let mut values = Stack::new(255, ErrorCode::ExpressionTooComplex);
        let vars = Var::new();
        let v = Evaluator::new(&mut scan, &vars, &mut values, &FixedClock).evaluate();
        assert_eq!(v, Ok(Val::Integer(3)));
        assert_eq!(scan.peek(), Some(':'));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            eval("(1+2").unwrap_err().code(),
            ErrorCode::MissingRightParenthesis
        );
        assert_eq!(eval("1+").unwrap_err().code(), ErrorCode::InvalidFactor);
        assert_eq!(eval("").unwrap_err().code(), ErrorCode::InvalidFactor);
        assert_eq!(eval("*2").unwrap_err().code(), ErrorCode::InvalidFactor);
        assert_eq!(eval("-A").unwrap_err().code(), ErrorCode::InvalidNumber);
    }

    #[test]
    fn test_group_depth_is_bounded() {
        let mut values = Stack::new(4, ErrorCode::ExpressionTooComplex);
        let vars = Var::new();
        assert_eq!(eval_with("((((1))))", &vars, &mut values), Ok(Val::Integer(1)));
        let e = eval_with("(((((1)))))", &vars, &mut values).unwrap_err();
        assert_eq!(e.code(), ErrorCode::ExpressionTooComplex);
        assert_eq!(eval_with("(1)+((2))", &vars, &mut values), Ok(Val::Integer(3)));
    }

    #[test]
    fn test_runaway_nesting_is_an_error() {
        let text = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
        let e = eval(&text).unwrap_err();
        assert_eq!(e.code(), ErrorCode::ExpressionTooComplex);
    }

    #[test]
    fn test_too_complex() {
        let mut values = Stack::new(3, ErrorCode::ExpressionTooComplex);
        let e = eval_with("1+(2+(3+(4+5)))", &Var::new(), &mut values).unwrap_err();
        assert_eq!(e.code(), ErrorCode::ExpressionTooComplex);
        assert!(values.is_empty());
    }
}
