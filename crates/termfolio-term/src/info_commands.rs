//! Portfolio information commands: about, whoami, contact, projects,
//! project, skills, experience, education, languages, interests,
//! testimonials.

use termfolio_data::{
    Experience, fluency_bar, months_between, skill_bar, stable_hash, stable_skill_level,
};
use termfolio_types::error::{Result, TermError};
use termfolio_types::{CommandResult, Effect};

use crate::interpreter::{Command, CommandRegistry, Environment, Flags};
use crate::markup::{glitch, span, typing};

/// Register the portfolio information command set.
pub fn register_info_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(AboutCmd));
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(ContactCmd));
    reg.register(Box::new(ProjectsCmd));
    reg.register(Box::new(ProjectCmd));
    reg.register(Box::new(SkillsCmd));
    reg.register(Box::new(ExperienceCmd));
    reg.register(Box::new(EducationCmd));
    reg.register(Box::new(LanguagesCmd));
    reg.register(Box::new(InterestsCmd));
    reg.register(Box::new(TestimonialsCmd));
}

// ---------------------------------------------------------------------------
// about
// ---------------------------------------------------------------------------

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "About me"
    }
    fn usage(&self) -> &str {
        "about [--full]"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandResult> {
        let flags = Flags::parse(args);
        let full = flags.has("full") || flags.has("f");
        let basics = &env.profile.basics;

        let status = if basics.available {
            span("green", "AVAILABLE FOR HIRE")
        } else {
            span("red", "CURRENTLY ENGAGED")
        };
        let bio = if full {
            &env.profile.bio.long
        } else {
            &env.profile.bio.short
        };

        let mut out = format!(
            "{}\n\n{} {}\n{} {}\n{} {}, {}\n{} {status}\n\n{}\n{bio}\n",
            glitch(&format!("IDENTITY SCAN // {}", basics.name.to_uppercase())),
            span("green", "Name:"),
            basics.name,
            span("green", "Title:"),
            basics.title,
            span("green", "Location:"),
            basics.location.city,
            basics.location.country,
            span("green", "Status:"),
            span("green", "Bio:"),
        );

        if full {
            out.push_str(&format!("\n{}\n", span("green", "Interests:")));
            for interest in &env.profile.interests {
                out.push_str(&format!("  - {interest}\n"));
            }
            let preferred: Vec<&str> = env
                .profile
                .skills
                .main
                .iter()
                .take(5)
                .map(String::as_str)
                .collect();
            out.push_str(&format!(
                "\n{} {}\n",
                span("green", "Preferred Tech:"),
                preferred.join(", ")
            ));
        } else {
            out.push_str("\nUse 'about --full' for complete profile data.\n");
        }

        Ok(CommandResult::rich(out))
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Who am I?"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandResult> {
        let basics = &env.profile.basics;
        let status = if basics.available {
            "Available for new opportunities"
        } else {
            "Engaged in active missions"
        };
        Ok(CommandResult::rich(format!(
            "{}\n{}\n\nUser authenticated with level 5 access privileges.\n\
             Location: {}, {}\nSystem: {}@{}\n\n{}",
            span("cyan", &basics.name),
            span("green", &basics.title),
            basics.location.city,
            basics.location.country,
            env.config.username,
            env.config.hostname,
            span("yellow", &format!("Current Status: {status}")),
        )))
    }
}

// ---------------------------------------------------------------------------
// contact
// ---------------------------------------------------------------------------

struct ContactCmd;
impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "Display contact information"
    }
    fn usage(&self) -> &str {
        "contact [--me]"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn man_page(&self) -> Option<&str> {
        Some(
            "Plays a staged SMTP handshake, then prints contact details.\n\
             With --me, additionally asks the frontend to open a mail\n\
             composer addressed to the portfolio owner.",
        )
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandResult> {
        let flags = Flags::parse(args);
        let basics = &env.profile.basics;
        // Stable message id: repeated views of the simulation agree.
        let message_id = format!("{:x}@portfolio.terminal", stable_hash(&basics.email));

        let mut out = format!("{}\n\n", glitch("ESTABLISHING SECURE CONNECTION..."));
        for line in [
            format!("250 {} Hello visitor.portfolio.terminal", basics.email),
            "MAIL FROM: <visitor@portfolio.terminal>".to_string(),
            "250 2.1.0 Sender OK".to_string(),
            format!("RCPT TO: <{}>", basics.email),
            "250 2.1.5 Recipient OK".to_string(),
            "DATA".to_string(),
            "354 Start mail input; end with <CRLF>.<CRLF>".to_string(),
            format!("To: {} <{}>", basics.name, basics.email),
            "Subject: Inquiry from Portfolio Terminal".to_string(),
            format!("Message-ID: <{message_id}>"),
            ".".to_string(),
            "250 2.0.0 Message accepted for delivery".to_string(),
            "221 2.0.0 Closing connection".to_string(),
        ] {
            out.push_str(&span("gray", &line));
            out.push('\n');
        }

        out.push_str(&format!(
            "\n{}\n  Email:    {}\n  Phone:    {}\n  Location: {}, {}\n  Website:  {}\n",
            span("yellow", "CONTACT INFORMATION"),
            span("cyan", &basics.email),
            basics.phone,
            basics.location.city,
            basics.location.country,
            span("cyan", &basics.website),
        ));
        out.push_str(&format!("\n{}\n", span("green", "Social Networks:")));
        for s in &env.profile.social {
            out.push_str(&format!("  {}: {}\n", s.network, span("cyan", &s.url)));
        }

        let mut result = CommandResult::rich(out).with_loading();
        if flags.has("me") {
            result = result.with_effect(Effect::ComposeMail(basics.email.clone()));
        }
        Ok(result)
    }
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

struct ProjectsCmd;
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "List all projects"
    }
    fn usage(&self) -> &str {
        "projects"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandResult> {
        let mut out = format!(
            "{}\n\n{}\n",
            typing("PROJECTS DATABASE // ACCESS GRANTED"),
            glitch(&format!(
                "Found {} projects in secure storage:",
                env.projects.len()
            )),
        );
        for (i, p) in env.projects.iter().enumerate() {
            out.push_str(&format!(
                "\n{}. {} - {}",
                i + 1,
                span("cyan", &p.title),
                p.summary
            ));
        }
        out.push_str("\n\nUse 'project [name]' for detailed intel.\n");
        Ok(CommandResult::rich(out))
    }
}

// ---------------------------------------------------------------------------
// project
// ---------------------------------------------------------------------------

struct ProjectCmd;
impl Command for ProjectCmd {
    fn name(&self) -> &str {
        "project"
    }
    fn description(&self) -> &str {
        "View details of a specific project"
    }
    fn usage(&self) -> &str {
        "project [name]"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandResult> {
        if args.is_empty() {
            return Err(TermError::Usage("project [name]".into()));
        }
        let query = args.join(" ");
        let q = query.to_lowercase();
        let Some(p) = env
            .projects
            .iter()
            .find(|p| p.slug.to_lowercase().contains(&q) || p.title.to_lowercase().contains(&q))
        else {
            return Ok(CommandResult::error_text(format!(
                "Project \"{query}\" not found. Try 'projects' to list all projects."
            )));
        };

        let mut out = format!(
            "{}\n{}\n{} {}\n\n{}\n{}\n\n{}\n",
            glitch(&format!("PROJECT FILE: {}", p.title.to_uppercase())),
            "-".repeat(p.title.len() + 13),
            span("green", "[TAGS]"),
            p.tags.join(", "),
            span("green", "[DESCRIPTION]"),
            p.description,
            span("green", "[DEVELOPMENT PHASES]"),
        );
        for (i, phase) in p.process.iter().enumerate() {
            out.push_str(&format!(
                "{} {} ({}): {}\n",
                span("yellow", &format!("[{}]", i + 1)),
                phase.phase,
                phase.duration,
                phase.description
            ));
        }
        out.push_str(&format!(
            "\n{}\n{} {}\n{} {}\n",
            span("green", "[NETWORK ENDPOINTS]"),
            span("cyan", "Demo:"),
            p.demo_url,
            span("cyan", "GitHub:"),
            p.github_url
        ));
        Ok(CommandResult::rich(out))
    }
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

struct SkillsCmd;
impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "List all skills"
    }
    fn usage(&self) -> &str {
        "skills [--graph] [--sound]"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn man_page(&self) -> Option<&str> {
        Some(
            "Plain mode lists primary and secondary skills. With --graph,\n\
             renders proficiency bars; the percentages derive from a\n\
             stable hash of the skill name, so repeated views agree.\n\
             --sound asks the renderer for audio feedback on hover.",
        )
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandResult> {
        let flags = Flags::parse(args);
        let graph = flags.has("graph");
        let sound = flags.has("sound");
        let skills = &env.profile.skills;

        if !graph {
            let mut out = format!(
                "SKILL MATRIX // {}\n\nPRIMARY SKILLS:\n",
                env.profile.basics.name.to_uppercase()
            );
            for s in &skills.main {
                out.push_str(&format!("  - {s}\n"));
            }
            out.push_str("\nSECONDARY SKILLS:\n");
            for s in &skills.familiar {
                out.push_str(&format!("  - {s}\n"));
            }
            out.push_str("\nUse 'skills --graph' for detailed skill visualization\n");
            return Ok(CommandResult::text(out));
        }

        let render = |out: &mut String, names: &[String], primary: bool| {
            for name in names {
                let level = stable_skill_level(name, primary);
                let class = if level >= 90 {
                    "green"
                } else if level >= 75 {
                    "cyan"
                } else {
                    "yellow"
                };
                out.push_str(&format!(
                    "  {:<12} {}\n",
                    span("cyan", name),
                    span(class, &skill_bar(level, 20))
                ));
            }
        };

        let mut out = format!(
            "{}\n\n{}\n\n{}\n",
            glitch(&format!(
                "SKILL MATRIX // {}",
                env.profile.basics.name.to_uppercase()
            )),
            if sound {
                "Sound effects enabled."
            } else {
                "Use --sound flag for audio feedback."
            },
            span("green", "PRIMARY SKILLS:"),
        );
        render(&mut out, &skills.main, true);
        out.push_str(&format!("\n{}\n", span("green", "SECONDARY SKILLS:")));
        render(&mut out, &skills.familiar, false);
        Ok(CommandResult::rich(out))
    }
}

// ---------------------------------------------------------------------------
// experience
// ---------------------------------------------------------------------------

/// Quest level: one level per six months, minimum 1.
fn quest_level(job: &Experience, present: &str) -> u32 {
    let months = months_between(&job.start_date, job.end_date.as_deref(), present);
    months.div_ceil(6).max(1)
}

fn xp_reward(level: u32) -> u32 {
    level * 1500
}

fn difficulty_badge(level: u32) -> String {
    match level {
        0..=2 => span("green", "⦿ NOVICE"),
        3..=4 => span("cyan", "⦿⦿ ADEPT"),
        5..=6 => span("purple", "⦿⦿⦿ EXPERT"),
        _ => span("red", "⦿⦿⦿⦿ MASTER"),
    }
}

struct ExperienceCmd;
impl Command for ExperienceCmd {
    fn name(&self) -> &str {
        "experience"
    }
    fn description(&self) -> &str {
        "Browse professional experience as RPG quests"
    }
    fn usage(&self) -> &str {
        "experience"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandResult> {
        let present = &env.config.present;
        let total_xp: u32 = env
            .profile
            .experience
            .iter()
            .map(|job| xp_reward(quest_level(job, present)))
            .sum();

        let mut out = format!(
            "{}\n\n{}\n",
            glitch("QUEST LOG // EXPERIENCE TRACKER"),
            span(
                "yellow",
                &format!(
                    "TOTAL XP: {total_xp} · CHARACTER LEVEL: {}",
                    total_xp / 5000 + 1
                )
            ),
        );

        for (i, job) in env.profile.experience.iter().enumerate() {
            let level = quest_level(job, present);
            let status = if job.current {
                span("green", "ACTIVE")
            } else {
                span("gray", "COMPLETED")
            };
            out.push_str(&format!(
                "\n{} {}  {}\n  Location: {} · {}\n  Timeline: {}\n  Status:   {status}\n  \
                 QUEST LEVEL: {level} · XP REWARD: +{}\n\n  {}\n  Skills acquired: {}\n",
                span("cyan", &format!("[QUEST {}]", i + 1)),
                job.position,
                difficulty_badge(level),
                job.company,
                job.location,
                termfolio_data::format_date_range(&job.start_date, job.end_date.as_deref()),
                xp_reward(level),
                job.description,
                job.technologies.join(", "),
            ));
        }
        Ok(CommandResult::rich(out))
    }
}

// ---------------------------------------------------------------------------
// education
// ---------------------------------------------------------------------------

struct EducationCmd;
impl Command for EducationCmd {
    fn name(&self) -> &str {
        "education"
    }
    fn description(&self) -> &str {
        "View education history"
    }
    fn usage(&self) -> &str {
        "education"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandResult> {
        let mut out = format!("{}\n", glitch("EDUCATION RECORDS // ACCESS GRANTED"));
        for (i, school) in env.profile.education.iter().enumerate() {
            out.push_str(&format!(
                "\n{} {}\n{} {}\n{} {}\n{} {}\n\n{}\n",
                span("yellow", &format!("[EDU.{}]", i + 1)),
                span("cyan", &school.institution),
                span("green", "Degree:"),
                school.degree,
                span("green", "Timeline:"),
                termfolio_data::format_date_range(&school.start_date, Some(&school.end_date)),
                span("green", "Location:"),
                school.location,
                school.description,
            ));
        }
        Ok(CommandResult::rich(out))
    }
}

// ---------------------------------------------------------------------------
// languages
// ---------------------------------------------------------------------------

struct LanguagesCmd;
impl Command for LanguagesCmd {
    fn name(&self) -> &str {
        "languages"
    }
    fn description(&self) -> &str {
        "Show language proficiency"
    }
    fn usage(&self) -> &str {
        "languages"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandResult> {
        let mut out = format!("{}\n\n", glitch("LANGUAGE PROFICIENCY SCAN"));
        for l in &env.profile.languages {
            out.push_str(&format!(
                "{}: {:<12} {}\n",
                span("cyan", &format!("{:<10}", l.language)),
                l.fluency,
                fluency_bar(&l.fluency)
            ));
        }
        Ok(CommandResult::rich(out))
    }
}

// ---------------------------------------------------------------------------
// interests
// ---------------------------------------------------------------------------

struct InterestsCmd;
impl Command for InterestsCmd {
    fn name(&self) -> &str {
        "interests"
    }
    fn description(&self) -> &str {
        "Show personal interest vectors"
    }
    fn usage(&self) -> &str {
        "interests"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandResult> {
        let mut out = format!("{}\n\n", glitch("INTEREST VECTORS // PERSONALITY PROFILE"));
        for (i, interest) in env.profile.interests.iter().enumerate() {
            out.push_str(&format!(
                "{} {}\n",
                span("yellow", &format!("[{}]", i + 1)),
                span("cyan", interest)
            ));
        }
        Ok(CommandResult::rich(out))
    }
}

// ---------------------------------------------------------------------------
// testimonials
// ---------------------------------------------------------------------------

/// Deterministically corrupt text: roughly one character in twenty is
/// replaced, chosen by the stable hash so every render agrees.
fn corrupt_text(text: &str) -> String {
    const GLITCH_CHARS: &[char] = &[
        '!', '@', '#', '$', '%', '^', '&', '*', '<', '>', '/', '\\', '|',
    ];
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            if c.is_alphanumeric() {
                let h = stable_hash(&format!("{c}{i}"));
                if h % 20 == 0 {
                    return GLITCH_CHARS[h as usize % GLITCH_CHARS.len()];
                }
            }
            c
        })
        .collect()
}

struct TestimonialsCmd;
impl Command for TestimonialsCmd {
    fn name(&self) -> &str {
        "testimonials"
    }
    fn description(&self) -> &str {
        "View testimonials from colleagues"
    }
    fn usage(&self) -> &str {
        "testimonials"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandResult> {
        let mut out = format!(
            "{}\n\n{}\n",
            glitch("TESTIMONIAL DATABASE // CORRUPTED ACCESS"),
            span(
                "red",
                "WARNING: These files appear to be corrupted. Transcription follows."
            ),
        );
        for (i, t) in env.profile.testimonials.iter().enumerate() {
            out.push_str(&format!(
                "\n{}\n\"{}\"\n    {} — {}\n",
                span("yellow", &format!("TESTIMONIAL_{}.log", i + 1)),
                corrupt_text(&t.text),
                span("cyan", &t.name),
                t.position,
            ));
        }
        Ok(CommandResult::rich(out))
    }
}
