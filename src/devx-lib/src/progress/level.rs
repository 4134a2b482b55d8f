use serde::Serialize;

/// Advancing from level `L` to `L + 1` costs `L * XP_PER_LEVEL_STEP`.
pub const XP_PER_LEVEL_STEP: u64 = 500;

/// Level reached with `total_xp` cumulative XP. Everyone starts at level 1.
pub fn level_for_xp(total_xp: u64) -> u32 {
    let mut level: u32 = 1;
    let mut accumulated: u64 = 0;
    loop {
        let step = u64::from(level) * XP_PER_LEVEL_STEP;
        match accumulated.checked_add(step) {
            Some(next) if next <= total_xp => {
                accumulated = next;
                level += 1;
            }
            _ => return level,
        }
    }
}

/// Cumulative XP needed to reach `level`.
pub fn xp_for_level(level: u32) -> u64 {
    let level = u64::from(level);
    if level <= 1 {
        return 0;
    }
    (XP_PER_LEVEL_STEP / 2)
        .saturating_mul(level)
        .saturating_mul(level - 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelProgress {
    pub level: u32,
    pub total_xp: u64,
    pub level_floor_xp: u64,
    pub next_level_xp: u64,
    pub xp_into_level: u64,
    pub xp_to_next_level: u64,
}

impl LevelProgress {
    pub fn from_xp(total_xp: u64) -> Self {
        let level = level_for_xp(total_xp);
        let level_floor_xp = xp_for_level(level);
        let next_level_xp = xp_for_level(level + 1);
        Self {
            level,
            total_xp,
            level_floor_xp,
            next_level_xp,
            xp_into_level: total_xp - level_floor_xp,
            xp_to_next_level: next_level_xp.saturating_sub(total_xp),
        }
    }

    /// Fraction of the current level completed, in `0.0..1.0`.
    pub fn fraction(&self) -> f64 {
        let span = self.next_level_xp - self.level_floor_xp;
        self.xp_into_level as f64 / span as f64
    }
}
