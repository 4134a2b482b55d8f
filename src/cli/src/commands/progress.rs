use crate::commands::shared::{OutputArgs, XpArgs};
use crate::commands::validators;
use crate::core::error::DevxError;
use crate::core::formatter::get_formatter;
use crate::debug_log;
use clap::{Args, Subcommand};
use devx_lib::progress::{LevelProgress, SkillGraph, SkillNode};
use serde::Serialize;

const SKILL_COLUMNS: &[&str] = &["id", "label", "category", "xp_threshold", "unlocked"];

#[derive(Debug, Serialize)]
pub struct SkillView {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub xp_threshold: u64,
    pub parents: &'static [&'static str],
    pub unlocked: bool,
}

impl SkillView {
    fn new(node: &'static SkillNode, graph: &SkillGraph) -> Self {
        Self {
            id: node.id,
            label: node.label,
            description: node.description,
            category: node.category.display_name(),
            xp_threshold: node.xp_threshold,
            parents: node.parent_ids,
            unlocked: graph.is_unlocked(node.id),
        }
    }
}

#[derive(Debug, Args)]
#[command(about = "Compute levels and skill unlocks from XP")]
pub struct ProgressCommand {
    #[command(subcommand)]
    pub command: ProgressSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum ProgressSubcommand {
    #[command(about = "Show the level reached with the given XP")]
    Level(LevelArgs),
    #[command(about = "List skill tree nodes and whether they are unlocked")]
    Skills(SkillsArgs),
    #[command(about = "Show a single skill tree node")]
    Skill(SkillArgs),
}

#[derive(Debug, Args)]
pub struct LevelArgs {
    #[command(flatten)]
    pub xp: XpArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct SkillsArgs {
    #[command(flatten)]
    pub xp: XpArgs,

    #[arg(long = "unlocked-only", help = "Only list unlocked skills")]
    pub unlocked_only: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct SkillArgs {
    #[arg(
        short = 'n',
        long = "id",
        help = "Skill id, e.g. graphtraversal",
        value_parser = validators::validate_skill_id
    )]
    pub id: String,

    #[command(flatten)]
    pub xp: XpArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute_level(args: &LevelArgs) -> Result<(), DevxError> {
    let progress = LevelProgress::from_xp(args.xp.xp);
    debug_log!(xp = progress.total_xp, level = progress.level, "level computed");
    print!("{}", get_formatter(&args.output.output).format(&progress)?);
    Ok(())
}

pub fn execute_skills(args: &SkillsArgs) -> Result<(), DevxError> {
    let graph = SkillGraph::for_xp(args.xp.xp);
    debug_log!(
        xp = graph.user_xp(),
        unlocked = graph.unlocked_count(),
        "skill graph walked"
    );

    let views: Vec<SkillView> = SkillGraph::nodes()
        .iter()
        .map(|node| SkillView::new(node, &graph))
        .filter(|view| !args.unlocked_only || view.unlocked)
        .collect();
    let formatter = get_formatter(&args.output.output);
    print!(
        "{}",
        formatter.format_rows(&views, SKILL_COLUMNS, "No skills found")?
    );
    Ok(())
}

pub fn execute_skill(args: &SkillArgs) -> Result<(), DevxError> {
    let node = SkillGraph::node(&args.id)
        .ok_or_else(|| DevxError::SkillNotFound(args.id.clone()))?;
    let graph = SkillGraph::for_xp(args.xp.xp);
    let view = SkillView::new(node, &graph);
    print!("{}", get_formatter(&args.output.output).format(&view)?);
    Ok(())
}
