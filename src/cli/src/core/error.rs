use devx_lib::syntax::ParseLanguageError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DevxError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    UnknownLanguage(#[from] ParseLanguageError),
    #[error("Could not detect a language for {0}; pass --language")]
    LanguageNotDetected(String),
    #[error("Missing input: {0}")]
    MissingInput(String),
    #[error("Skill not found: {0}")]
    SkillNotFound(String),
}
