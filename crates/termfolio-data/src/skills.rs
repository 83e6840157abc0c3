//! Skill categories and the stable proficiency derivation.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::stable_hash;

/// One skill with its curated proficiency.
#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u32,
    pub experience: String,
}

/// A named group of skills.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<Skill>,
}

static CATEGORIES: Lazy<Vec<SkillCategory>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../data/skills.json"))
        .expect("embedded skills.json is well-formed")
});

/// All skill categories, in document order.
pub fn skill_categories() -> &'static [SkillCategory] {
    &CATEGORIES
}

/// All skills flattened across categories.
pub fn all_skills() -> Vec<&'static Skill> {
    CATEGORIES.iter().flat_map(|c| c.skills.iter()).collect()
}

/// The `count` highest-level skills.
pub fn top_skills(count: usize) -> Vec<&'static Skill> {
    let mut skills = all_skills();
    skills.sort_by(|a, b| b.level.cmp(&a.level));
    skills.truncate(count);
    skills
}

/// Displayed proficiency for a skill that has no curated level: a stable
/// hash of the name mapped into 75-95 for primary skills and 50-75 for
/// familiar ones. Repeated views of the same name always agree.
pub fn stable_skill_level(name: &str, primary: bool) -> u32 {
    let (min, max) = if primary { (75, 95) } else { (50, 75) };
    min + stable_hash(name) % (max - min)
}

/// ASCII proficiency bar: `[▓▓▓▓░░] 67%`.
pub fn skill_bar(level: u32, width: usize) -> String {
    let filled = (level as usize * width) / 100;
    format!(
        "[{}{}] {level}%",
        "▓".repeat(filled.min(width)),
        "░".repeat(width.saturating_sub(filled))
    )
}
