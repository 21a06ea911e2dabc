/*!
## Rust Machine Module

This Rust module is the Tiny BASIC interpreter engine: the program
store, the scanner, the expression evaluator and the state machine
that executes statements one step at a time.

*/

mod clock;
mod config;
mod expr;
mod gosub;
mod listing;
mod operation;
mod runtime;
mod scan;
mod stack;
mod storage;
mod val;
mod var;

pub use clock::Clock;
pub use clock::SystemClock;
pub use config::Config;
pub use expr::Evaluator;
pub use gosub::Gosub;
pub use listing::Listing;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::State;
pub use scan::Scanner;
pub use stack::Stack;
pub use storage::FileStorage;
pub use storage::MemoryStorage;
pub use storage::Storage;
pub use val::Val;
pub use var::Letter;
pub use var::Var;
