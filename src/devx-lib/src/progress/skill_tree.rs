use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use std::fmt;

pub const ROOT_SKILL_ID: &str = "root";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Core,
    Dsa,
    Backend,
    Algorithms,
    System,
    Ai,
}

impl SkillCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            SkillCategory::Core => "Core",
            SkillCategory::Dsa => "Data Structures & Algorithms",
            SkillCategory::Backend => "Backend Engineering",
            SkillCategory::Algorithms => "Algorithms",
            SkillCategory::System => "System Design",
            SkillCategory::Ai => "AI / ML",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A vertex of the skill tree. It unlocks once every parent is unlocked and
/// the user has at least `xp_threshold` XP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillNode {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub xp_threshold: u64,
    pub parent_ids: &'static [&'static str],
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillEdge {
    pub from_id: &'static str,
    pub to_id: &'static str,
}

const fn node(
    id: &'static str,
    label: &'static str,
    description: &'static str,
    xp_threshold: u64,
    parent_ids: &'static [&'static str],
    category: SkillCategory,
) -> SkillNode {
    SkillNode {
        id,
        label,
        description,
        xp_threshold,
        parent_ids,
        category,
    }
}

#[rustfmt::skip]
static SKILL_NODES: [SkillNode; 16] = [
    node("root", "Fundamentals", "Start your journey", 0, &[], SkillCategory::Core),

    node("dsa", "DSA", "Data Structures & Algorithms", 0, &["root"], SkillCategory::Dsa),
    node("backend", "Backend", "Backend Engineering", 50, &["root"], SkillCategory::Backend),
    node("algorithms", "Algorithms", "Core algorithmic thinking", 0, &["root"], SkillCategory::Algorithms),

    node("arrays", "Arrays", "Arrays & Strings", 0, &["dsa"], SkillCategory::Dsa),
    node("linkedlist", "Linked Lists", "Singly & doubly linked lists", 50, &["dsa"], SkillCategory::Dsa),
    node("trees", "Trees", "Binary trees & BSTs", 100, &["dsa"], SkillCategory::Dsa),
    node("dp", "Dyn. Prog", "Dynamic Programming", 300, &["trees"], SkillCategory::Dsa),

    node("rest", "REST APIs", "HTTP & REST design", 50, &["backend"], SkillCategory::Backend),
    node("databases", "Databases", "SQL & NoSQL", 100, &["backend"], SkillCategory::Backend),
    node("sysdesign", "Sys. Design", "System Architecture", 400, &["databases"], SkillCategory::System),

    node("sorting", "Sorting", "Sorting algorithms", 0, &["algorithms"], SkillCategory::Algorithms),
    node("binsearch", "Bin. Search", "Binary search & variants", 60, &["algorithms"], SkillCategory::Algorithms),
    node("graphtraversal", "Graphs", "BFS, DFS, Dijkstra", 150, &["algorithms"], SkillCategory::Algorithms),
    node("advgraph", "Adv. Graphs", "Bellman-Ford, A*, Floyd", 400, &["graphtraversal"], SkillCategory::Algorithms),

    node("aiml", "AI / ML", "Machine Learning & AI", 800, &["sysdesign", "advgraph"], SkillCategory::Ai),
];

/// The static skill graph together with the nodes a given XP total unlocks.
#[derive(Debug, Clone)]
pub struct SkillGraph {
    user_xp: u64,
    unlocked: HashSet<&'static str>,
}

impl SkillGraph {
    /// Walk the graph breadth-first from the root. A node unlocks when all of
    /// its parents already have and `user_xp` meets its threshold; children are
    /// queued as each parent unlocks, so a node with several parents gets
    /// re-checked after each of them.
    pub fn for_xp(user_xp: u64) -> Self {
        let mut unlocked: HashSet<&'static str> = HashSet::new();
        let mut queue: VecDeque<&'static SkillNode> =
            Self::node(ROOT_SKILL_ID).into_iter().collect();

        while let Some(current) = queue.pop_front() {
            let parents_unlocked = current.parent_ids.iter().all(|id| unlocked.contains(id));
            if parents_unlocked && user_xp >= current.xp_threshold && unlocked.insert(current.id) {
                queue.extend(Self::children(current.id));
            }
        }

        Self { user_xp, unlocked }
    }

    pub fn user_xp(&self) -> u64 {
        self.user_xp
    }

    pub fn nodes() -> &'static [SkillNode] {
        &SKILL_NODES
    }

    pub fn node(id: &str) -> Option<&'static SkillNode> {
        SKILL_NODES.iter().find(|node| node.id == id)
    }

    pub fn children(id: &str) -> impl Iterator<Item = &'static SkillNode> + '_ {
        SKILL_NODES
            .iter()
            .filter(move |node| node.parent_ids.contains(&id))
    }

    /// One `parent -> child` edge per parent id, in node order.
    pub fn edges() -> Vec<SkillEdge> {
        SKILL_NODES
            .iter()
            .flat_map(|node| {
                node.parent_ids.iter().map(move |&parent| SkillEdge {
                    from_id: parent,
                    to_id: node.id,
                })
            })
            .collect()
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.contains(id)
    }

    /// Unlocked node ids in definition order.
    pub fn unlocked_ids(&self) -> Vec<&'static str> {
        SKILL_NODES
            .iter()
            .map(|node| node.id)
            .filter(|id| self.unlocked.contains(id))
            .collect()
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }
}
