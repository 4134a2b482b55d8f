use crate::commands::shared::{OutputArgs, RequiredLanguageArgs};
use crate::core::error::DevxError;
use crate::core::formatter::{get_formatter, OutputFormat};
use clap::{Args, Subcommand};
use devx_lib::syntax::Language;
use serde::Serialize;

#[derive(Serialize)]
pub struct LanguageView {
    pub name: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    pub extensions: &'static [&'static str],
    pub keywords: usize,
}

impl From<Language> for LanguageView {
    fn from(language: Language) -> Self {
        Self {
            name: language.name(),
            display_name: language.display_name(),
            aliases: language.aliases(),
            extensions: language.extensions(),
            keywords: language.keywords().len(),
        }
    }
}

#[derive(Serialize)]
pub struct StarterView {
    pub language: Language,
    pub code: &'static str,
}

#[derive(Debug, Args)]
#[command(about = "Inspect supported languages")]
pub struct LanguagesCommand {
    #[command(subcommand)]
    pub command: LanguagesSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum LanguagesSubcommand {
    #[command(about = "List supported languages")]
    List(ListArgs),
    #[command(about = "Show the starter template for a language")]
    Starter(LanguageDetailArgs),
    #[command(about = "List the words highlighted as keywords")]
    Keywords(LanguageDetailArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct LanguageDetailArgs {
    #[command(flatten)]
    pub language: RequiredLanguageArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute_list(args: &ListArgs) -> Result<(), DevxError> {
    let views: Vec<LanguageView> = Language::ALL.into_iter().map(LanguageView::from).collect();
    let formatter = get_formatter(&args.output.output);
    print!(
        "{}",
        formatter.format_rows(
            &views,
            &["name", "display_name", "extensions", "keywords"],
            "No languages found"
        )?
    );
    Ok(())
}

pub fn execute_starter(args: &LanguageDetailArgs) -> Result<(), DevxError> {
    let language = args.language.resolve()?;
    match args.output.output {
        // Raw template so it can be piped straight into a file.
        OutputFormat::Text => print!("{}", language.starter_code()),
        OutputFormat::Json => {
            let view = StarterView {
                language,
                code: language.starter_code(),
            };
            print!("{}", get_formatter(&args.output.output).format(&view)?);
        }
    }
    Ok(())
}

pub fn execute_keywords(args: &LanguageDetailArgs) -> Result<(), DevxError> {
    let language = args.language.resolve()?;
    let mut keywords: Vec<&str> = language.keywords().iter().copied().collect();
    keywords.sort_unstable();
    let formatter = get_formatter(&args.output.output);
    print!(
        "{}",
        formatter.format_list(&keywords, "", "No keywords found")?
    );
    Ok(())
}
