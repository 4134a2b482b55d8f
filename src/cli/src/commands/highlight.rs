use crate::commands::shared::{LanguageArgs, OutputArgs};
use crate::commands::validators;
use crate::core::error::DevxError;
use crate::core::formatter::get_formatter;
use crate::debug_log;
use clap::Args;
use devx_lib::syntax::{tokenize, Language, LineCursor, Token, TokenType};
use serde::Serialize;
use std::path::Path;

const TOKEN_COLUMNS: &[&str] = &["line", "column", "type", "text"];
const SUMMARY_COLUMNS: &[&str] = &["type", "count"];

#[derive(Debug, Serialize)]
pub struct TokenView {
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl TokenView {
    fn new(source: &str, token: &Token, cursor: &mut LineCursor<'_>) -> Self {
        let (line, column) = cursor.seek(token.start);
        Self {
            start: token.start,
            end: token.end,
            token_type: token.token_type,
            text: token.text(source).to_string(),
            line,
            column,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenCountView {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub count: usize,
}

#[derive(Debug, Args)]
#[command(about = "Tokenize source code for syntax highlighting")]
pub struct HighlightArgs {
    #[arg(
        short = 's',
        long = "source",
        help = "Path to the source file",
        conflicts_with = "code",
        value_parser = validators::validate_path_exists
    )]
    pub source: Option<String>,

    #[arg(short = 'c', long = "code", help = "Source text to tokenize")]
    pub code: Option<String>,

    #[command(flatten)]
    pub language: LanguageArgs,

    #[arg(long = "summary", help = "Print token counts per type")]
    pub summary: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute(args: &HighlightArgs) -> Result<(), DevxError> {
    let (source, path) = match (&args.code, &args.source) {
        (Some(code), _) => (code.clone(), None),
        (None, Some(path)) => (std::fs::read_to_string(path)?, Some(Path::new(path))),
        (None, None) => {
            return Err(DevxError::MissingInput(
                "pass --source <PATH> or --code <TEXT>".to_string(),
            ))
        }
    };
    let language = resolve_language(args.language.resolve()?, path)?;
    debug_log!(language = %language, bytes = source.len(), "highlighting");

    let tokens = tokenize(&source, language);
    debug_log!(count = tokens.len(), "tokens produced");

    let formatter = get_formatter(&args.output.output);
    if args.summary {
        let counts = count_by_type(&tokens);
        print!(
            "{}",
            formatter.format_rows(&counts, SUMMARY_COLUMNS, "No tokens found")?
        );
    } else {
        let views = token_views(&source, &tokens);
        print!(
            "{}",
            formatter.format_rows(&views, TOKEN_COLUMNS, "No tokens found")?
        );
    }
    Ok(())
}

/// Explicit choice first (flag or `DEVX_LANGUAGE`), then the file extension.
fn resolve_language(
    explicit: Option<Language>,
    path: Option<&Path>,
) -> Result<Language, DevxError> {
    if let Some(language) = explicit {
        return Ok(language);
    }
    match path {
        Some(path) => path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Language::from_extension)
            .ok_or_else(|| DevxError::LanguageNotDetected(path.display().to_string())),
        None => Err(DevxError::LanguageNotDetected("inline code".to_string())),
    }
}

/// `tokens` are sorted by start, so one cursor walks the source once.
fn token_views(source: &str, tokens: &[Token]) -> Vec<TokenView> {
    let mut cursor = LineCursor::new(source);
    tokens
        .iter()
        .map(|token| TokenView::new(source, token, &mut cursor))
        .collect()
}

/// Non-zero counts in `TokenType::ALL` order.
fn count_by_type(tokens: &[Token]) -> Vec<TokenCountView> {
    TokenType::ALL
        .into_iter()
        .map(|token_type| TokenCountView {
            token_type,
            count: tokens.iter().filter(|t| t.token_type == token_type).count(),
        })
        .filter(|view| view.count > 0)
        .collect()
}
