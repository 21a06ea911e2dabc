//! # Tiny BASIC
//!
//! A small line-numbered BASIC with 26 numeric variables,
//! `GOSUB`, `IF ... THEN` and a `PRINT`/`INPUT` text interface.
//!
//! Run the executable from a terminal. If you get the following,
//! you have achieved success.
//! ```text
//! Tiny BASIC
//!     15K Memory
//! READY
//! > █
//! ```
//!
//! The interpreter can also be driven from Rust.
//! ```
//! use tinybasic::mach::Runtime;
//! let mut runtime = Runtime::default();
//! runtime.enter("10 PRINT 2 + 3 * 4");
//! runtime.run_to_prompt();
//! runtime.enter("RUN");
//! runtime.run_to_prompt();
//! assert_eq!(runtime.current_output(), "14\n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
