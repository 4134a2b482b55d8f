pub mod level;
pub mod skill_tree;

pub use level::{level_for_xp, xp_for_level, LevelProgress, XP_PER_LEVEL_STEP};
pub use skill_tree::{SkillCategory, SkillEdge, SkillGraph, SkillNode, ROOT_SKILL_ID};
