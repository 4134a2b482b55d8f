use clap::{CommandFactory, Parser};

mod commands;
mod core;

use commands::languages::LanguagesSubcommand;
use commands::progress::ProgressSubcommand;
use commands::Commands;
use core::error::DevxError;
use core::exit_code::ExitCode;
use core::logger::Logger;

#[derive(Parser)]
#[command(name = "devx")]
#[command(about = "Syntax highlighting and progress tools for the DevX27 practice app")]
#[command(version = crate::core::version::app_version())]
struct Args {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        if Logger::is_debug() {
            eprintln!("{e:?}");
        }
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

fn run() -> Result<(), DevxError> {
    let args = Args::parse();
    Logger::init(args.debug);

    match args.command {
        Some(Commands::Highlight(highlight_args)) => commands::highlight::execute(&highlight_args),
        Some(Commands::Languages(languages_command)) => match languages_command.command {
            LanguagesSubcommand::List(list_args) => commands::languages::execute_list(&list_args),
            LanguagesSubcommand::Starter(starter_args) => {
                commands::languages::execute_starter(&starter_args)
            }
            LanguagesSubcommand::Keywords(keyword_args) => {
                commands::languages::execute_keywords(&keyword_args)
            }
        },
        Some(Commands::Progress(progress_command)) => match progress_command.command {
            ProgressSubcommand::Level(level_args) => commands::progress::execute_level(&level_args),
            ProgressSubcommand::Skills(skills_args) => {
                commands::progress::execute_skills(&skills_args)
            }
            ProgressSubcommand::Skill(skill_args) => commands::progress::execute_skill(&skill_args),
        },
        None => {
            Args::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
