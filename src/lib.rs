//! Parse human-readable number strings into exact 64-bit integers.

pub mod error;
pub mod flag;
pub mod parse;

pub use error::{ErrorKind, ParseError};
pub use flag::HumanInt64;
pub use parse::parse;
