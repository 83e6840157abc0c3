//! Project records and lookup.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// A development phase of a project.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessPhase {
    pub phase: String,
    pub duration: String,
    pub description: String,
}

/// One portfolio project.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub tags: Vec<String>,
    pub process: Vec<ProcessPhase>,
    pub demo_url: String,
    pub github_url: String,
}

static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    let projects: Vec<Project> = serde_json::from_str(include_str!("../data/projects.json"))
        .expect("embedded projects.json is well-formed");
    log::debug!("loaded {} projects", projects.len());
    projects
});

/// All projects, in document order.
pub fn all_projects() -> &'static [Project] {
    &PROJECTS
}

/// Case-insensitive lookup: matches when the query is a substring of the
/// slug or the title.
pub fn find_project(query: &str) -> Option<&'static Project> {
    let q = query.to_lowercase();
    PROJECTS
        .iter()
        .find(|p| p.slug.to_lowercase().contains(&q) || p.title.to_lowercase().contains(&q))
}
