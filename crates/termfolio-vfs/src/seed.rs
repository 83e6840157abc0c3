//! Default tree construction.
//!
//! The simulated filesystem is derived from the portfolio data providers
//! so `cat` output and the info commands never disagree.

use termfolio_data::{Profile, Project, SkillCategory, fluency_bar};

use crate::{Entry, Vfs};

/// Build the default home tree from the portfolio data.
pub fn seed_default(
    profile: &Profile,
    projects: &[Project],
    skills: &[SkillCategory],
    owner: &str,
) -> Vfs {
    let mut vfs = Vfs::new();

    let mut home = vec![
        Entry::file("about.txt", owner, profile.bio.long.clone()),
        Entry::directory("projects", owner),
        Entry::directory("experience", owner),
        Entry::directory("education", owner),
        Entry::file("skills.json", owner, skills_json(skills)),
        Entry::executable("contact.sh", owner, contact_script(profile)),
        Entry::file("languages.dat", owner, languages_dat(profile)),
        Entry::file("interests.log", owner, interests_log(profile)),
        Entry::hidden(".matrix", owner, MATRIX_DUMP.to_string()),
        Entry::hidden(".secret", owner, secret_note(profile)),
    ];
    home.sort_by(|a, b| a.name.cmp(&b.name));
    vfs.insert_dir("~", home);

    let mut project_entries: Vec<Entry> = projects
        .iter()
        .map(|p| Entry::directory(&p.slug, owner))
        .collect();
    if let Some(latest) = projects.first() {
        project_entries.push(Entry::link("latest", owner, &latest.slug));
    }
    vfs.insert_dir("~/projects", project_entries);

    for p in projects {
        vfs.insert_dir(
            &format!("~/projects/{}", p.slug),
            vec![
                Entry::file("README.md", owner, project_readme(p)),
                Entry::file("phases.txt", owner, project_phases(p)),
                Entry::file("links.txt", owner, project_links(p)),
            ],
        );
    }

    vfs.insert_dir(
        "~/experience",
        profile
            .experience
            .iter()
            .map(|job| {
                Entry::file(
                    &format!("{}.log", slugify(&job.company)),
                    owner,
                    format!(
                        "{} @ {}\n{}\n\n{}\nStack: {}",
                        job.position,
                        job.company,
                        termfolio_data::format_date_range(&job.start_date, job.end_date.as_deref()),
                        job.description,
                        job.technologies.join(", ")
                    ),
                )
            })
            .collect(),
    );

    vfs.insert_dir(
        "~/education",
        profile
            .education
            .iter()
            .map(|school| {
                Entry::file(
                    &format!("{}.txt", slugify(&school.degree)),
                    owner,
                    format!(
                        "{}\n{}\n{}\n\n{}",
                        school.institution,
                        school.degree,
                        termfolio_data::format_date_range(&school.start_date, Some(&school.end_date)),
                        school.description
                    ),
                )
            })
            .collect(),
    );

    log::debug!("seeded VFS with {} project directories", projects.len());
    vfs
}

fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn skills_json(skills: &[SkillCategory]) -> String {
    let mut out = String::from("{\n");
    for (i, cat) in skills.iter().enumerate() {
        let names: Vec<String> = cat
            .skills
            .iter()
            .map(|s| format!("\"{}\"", s.name))
            .collect();
        out.push_str(&format!(
            "  \"{}\": [{}]{}\n",
            cat.category.to_lowercase(),
            names.join(", "),
            if i + 1 < skills.len() { "," } else { "" }
        ));
    }
    out.push('}');
    out
}

fn contact_script(profile: &Profile) -> String {
    let mut out = String::from(
        "#!/bin/bash\necho \"Initializing contact protocol...\"\nsleep 1\n\
         echo \"Establishing secure connection...\"\nsleep 1\n\
         echo \"Connection established!\"\n",
    );
    out.push_str(&format!("echo \"Email: {}\"\n", profile.basics.email));
    for s in &profile.social {
        out.push_str(&format!("echo \"{}: {}\"\n", s.network, s.url));
    }
    out.push_str(&format!("open mailto:{}", profile.basics.email));
    out
}

fn languages_dat(profile: &Profile) -> String {
    profile
        .languages
        .iter()
        .map(|l| {
            format!(
                "{:<10}: {:<12} {}",
                l.language,
                l.fluency,
                fluency_bar(&l.fluency)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn interests_log(profile: &Profile) -> String {
    profile
        .interests
        .iter()
        .map(|i| format!("- {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

const MATRIX_DUMP: &str = "\
0010111011100011010101000010101010111001101010011101
1011001101010101001011101010011101010100110101010101
0101010001101010101000010101010111010101100110101010
0110101010101011001101010101010110101010100110010110
0101010101010010101010101110011010101010110101010101
1010110101110101010101010100110101010101011001101010

Matrix protocol ready. Use 'matrix' command to activate.";

fn secret_note(profile: &Profile) -> String {
    format!(
        "Congratulations {}! You found the hidden file.\n\
         Special debug commands:\n\
         /crash - Trigger a fake terminal crash\n\
         /matrix - Start Matrix effect\n\
         /glitch - Add glitch effects to terminal\n\
         /hack - Initiate fake hacking sequence",
        profile.basics.name
    )
}

fn project_readme(p: &Project) -> String {
    format!("# {}\n\n{}\n\nTags: {}", p.title, p.description, p.tags.join(", "))
}

fn project_phases(p: &Project) -> String {
    p.process
        .iter()
        .enumerate()
        .map(|(i, phase)| {
            format!(
                "[{}] {} ({}): {}",
                i + 1,
                phase.phase,
                phase.duration,
                phase.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn project_links(p: &Project) -> String {
    format!("Demo: {}\nGitHub: {}", p.demo_url, p.github_url)
}
