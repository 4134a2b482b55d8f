use crate::commands::validators;
use crate::core::error::DevxError;
use crate::core::formatter::OutputFormat;
use clap::Args;
use devx_lib::syntax::Language;

const LANGUAGE_HELP: &str = "Language: python, kotlin, cpp, java or javascript";

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,
}

#[derive(Debug, Args)]
pub struct LanguageArgs {
    #[arg(
        short = 'l',
        long = "language",
        env = "DEVX_LANGUAGE",
        help = LANGUAGE_HELP
    )]
    pub language: Option<String>,
}

impl LanguageArgs {
    /// Parsed here rather than by clap so unknown names map to the language exit code.
    pub fn resolve(&self) -> Result<Option<Language>, DevxError> {
        match &self.language {
            Some(name) => Ok(Some(name.parse()?)),
            None => Ok(None),
        }
    }
}

#[derive(Debug, Args)]
pub struct RequiredLanguageArgs {
    #[arg(
        short = 'l',
        long = "language",
        help = LANGUAGE_HELP
    )]
    pub language: String,
}

impl RequiredLanguageArgs {
    pub fn resolve(&self) -> Result<Language, DevxError> {
        Ok(self.language.parse()?)
    }
}

#[derive(Debug, Args)]
pub struct XpArgs {
    #[arg(
        short = 'x',
        long = "xp",
        help = "Total XP earned",
        value_parser = validators::validate_xp
    )]
    pub xp: u64,
}
