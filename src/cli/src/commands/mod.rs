pub mod highlight;
pub mod languages;
pub mod progress;
pub mod shared;
pub mod validators;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    Highlight(highlight::HighlightArgs),
    Languages(languages::LanguagesCommand),
    Progress(progress::ProgressCommand),
}
