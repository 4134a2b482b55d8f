pub mod error;
pub mod keywords;
pub mod language;
pub mod position;
pub mod token;
pub mod tokenize;

pub use error::ParseLanguageError;
pub use language::Language;
pub use position::{line_col, LineCursor};
pub use token::{Token, TokenType};
pub use tokenize::tokenize;
