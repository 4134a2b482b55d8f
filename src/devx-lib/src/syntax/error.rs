use thiserror::Error;

/// Returned when a language name does not match any supported language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown language: {name}")]
pub struct ParseLanguageError {
    pub name: String,
}

impl ParseLanguageError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
