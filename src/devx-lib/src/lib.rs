pub mod progress;
pub mod syntax;

pub use syntax::{tokenize, Language, Token, TokenType};
