pub mod constants;
pub mod error;
pub mod lexer;
pub mod options;
pub mod source;
pub mod token;
pub mod token_store;

pub use constants::*;
pub use error::ConfigError;
pub use options::IndentUnit;
pub use source::{Position, SourceBuffer};
pub use token::{Token, TokenKind};
pub use token_store::TokenStore;
