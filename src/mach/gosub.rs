use crate::lang::LineNumber;

/// ## Control-transfer entry
///
/// Pushed by GOSUB. `resume` is the stored line following the call,
/// looked up when the call is made. `None` means the call had nowhere
/// to come back to and RETURN goes to the prompt.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gosub {
    pub resume: LineNumber,
}
