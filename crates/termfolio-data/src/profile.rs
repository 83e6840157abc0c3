//! The personal-info record: basics, bio, experience, education,
//! languages, interests, testimonials.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// Name, title, location, contact details.
#[derive(Debug, Clone, Deserialize)]
pub struct Basics {
    pub name: String,
    pub title: String,
    pub location: Location,
    pub available: bool,
    pub email: String,
    pub phone: String,
    pub website: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Bio {
    pub short: String,
    pub long: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialProfile {
    pub network: String,
    pub username: String,
    pub url: String,
}

/// One job. Dates are "YYYY-MM"; `end_date` is `None` for the current
/// position.
#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub current: bool,
    pub location: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillNames {
    pub main: Vec<String>,
    pub familiar: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Language {
    pub language: String,
    pub fluency: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub position: String,
    pub text: String,
}

/// The whole personal-info record.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub basics: Basics,
    pub bio: Bio,
    pub social: Vec<SocialProfile>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: SkillNames,
    pub languages: Vec<Language>,
    pub interests: Vec<String>,
    pub testimonials: Vec<Testimonial>,
}

static PROFILE: Lazy<Profile> = Lazy::new(|| {
    let mut p: Profile = serde_json::from_str(include_str!("../data/personal.json"))
        .expect("embedded personal.json is well-formed");
    // Most recent first. "YYYY-MM" strings order lexicographically.
    p.experience.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    p.education.sort_by(|a, b| b.end_date.cmp(&a.end_date));
    log::debug!(
        "loaded profile for {} ({} jobs, {} schools)",
        p.basics.name,
        p.experience.len(),
        p.education.len()
    );
    p
});

/// The personal-info record. Experience entries come back most recent
/// first regardless of document order.
pub fn profile() -> &'static Profile {
    &PROFILE
}

/// Parse a "YYYY-MM" date into (year, month). Malformed input is a data
/// bug; callers treat `None` as zero duration.
fn parse_ym(date: &str) -> Option<(i32, u32)> {
    let (y, m) = date.split_once('-')?;
    let year = y.parse().ok()?;
    let month: u32 = m.parse().ok()?;
    if (1..=12).contains(&month) {
        Some((year, month))
    } else {
        None
    }
}

/// Whole months between `start` and `end` (or the `present` anchor when
/// `end` is `None`).
pub fn months_between(start: &str, end: Option<&str>, present: &str) -> u32 {
    let Some((sy, sm)) = parse_ym(start) else {
        return 0;
    };
    let Some((ey, em)) = parse_ym(end.unwrap_or(present)) else {
        return 0;
    };
    let delta = (ey - sy) * 12 + em as i32 - sm as i32;
    delta.max(0) as u32
}

/// Render a date range for display: `2020-09 -> 2023-03`, open ranges as
/// `2023-04 -> PRESENT`.
pub fn format_date_range(start: &str, end: Option<&str>) -> String {
    match end {
        Some(e) => format!("{start} -> {e}"),
        None => format!("{start} -> PRESENT"),
    }
}

/// Five-cell proficiency bar for a language fluency label.
pub fn fluency_bar(fluency: &str) -> &'static str {
    match fluency {
        "Native" => "■■■■■",
        "Fluent" => "■■■■□",
        "Beginner" => "■■□□□",
        _ => "■■■□□",
    }
}
