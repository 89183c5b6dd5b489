//! Stylistic lint rules
//!
//! Rules ported from ESLint Stylistic

pub mod indent_binary_ops;
pub mod no_extra_semi;

// Re-export rule structs
pub use indent_binary_ops::{IndentBinaryOps, IndentCache};
pub use no_extra_semi::NoExtraSemi;
