//! Read-only data providers for the portfolio terminal.
//!
//! The profile, project, and skill records are embedded JSON documents
//! parsed once on first access. Providers are pure accessors; nothing in
//! this crate mutates after load.

mod profile;
mod projects;
mod skills;

pub use profile::{
    Basics, Bio, Education, Experience, Language, Location, Profile, SkillNames, SocialProfile,
    Testimonial, fluency_bar, format_date_range, months_between, profile,
};
pub use projects::{ProcessPhase, Project, all_projects, find_project};
pub use skills::{
    Skill, SkillCategory, all_skills, skill_bar, skill_categories, stable_skill_level, top_skills,
};

/// The 32-bit wrapping string hash behind every "random-looking but
/// stable" display value (skill percentages, pacing jitter, corruption
/// masks). A pure function of its input, never a live RNG, so repeated
/// views and snapshot tests stay consistent.
pub fn stable_hash(input: &str) -> u32 {
    let mut hash: i32 = 0;
    for c in input.chars() {
        hash = (hash << 5).wrapping_sub(hash).wrapping_add(c as i32);
    }
    hash.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_hash_is_deterministic() {
        assert_eq!(stable_hash("TypeScript"), stable_hash("TypeScript"));
    }

    #[test]
    fn stable_hash_differs_across_inputs() {
        assert_ne!(stable_hash("React"), stable_hash("Vue"));
    }

    #[test]
    fn stable_hash_empty_is_zero() {
        assert_eq!(stable_hash(""), 0);
    }
}
