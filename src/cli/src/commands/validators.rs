use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

/// Upper bound for `--xp`; far beyond any reachable total.
pub const MAX_XP: u64 = 1_000_000_000;

lazy_static! {
    static ref SKILL_ID_REGEX: Regex = Regex::new(r"^[a-z][a-z0-9]*$").unwrap();
}

pub fn validate_path_exists(path: &str) -> Result<String, String> {
    let p = Path::new(path);
    if !p.exists() {
        Err(format!("Path does not exist: {path}"))
    } else if !p.is_file() {
        Err(format!("Not a file: {path}"))
    } else {
        Ok(path.to_string())
    }
}

pub fn validate_xp(value: &str) -> Result<u64, String> {
    let xp: u64 = value
        .trim()
        .parse()
        .map_err(|_| format!("XP must be a non-negative integer: {value}"))?;
    if xp > MAX_XP {
        return Err(format!("XP must be at most {MAX_XP}"));
    }
    Ok(xp)
}

pub fn validate_skill_id(id: &str) -> Result<String, String> {
    if !SKILL_ID_REGEX.is_match(id) {
        return Err("Skill id must match pattern: ^[a-z][a-z0-9]*$".to_string());
    }
    Ok(id.to_string())
}
