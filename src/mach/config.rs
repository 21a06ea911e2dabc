/// ## Machine limits
///
/// The capacities the machine enforces. Exceeding one is an error
/// reported to the operator, never a reallocation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Stored program lines.
    pub program_lines: usize,
    /// Nested GOSUB calls.
    pub gosub_depth: usize,
    /// Characters in one entered line.
    pub max_line_len: usize,
    /// Operands pending during one expression.
    pub value_stack_depth: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            program_lines: 99,
            gosub_depth: 26,
            max_line_len: 255,
            value_stack_depth: 255,
        }
    }
}
