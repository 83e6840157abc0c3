//! Static virtual filesystem backing `ls`/`cd`/`cat`.
//!
//! The entire tree lives in a `BTreeMap<String, Vec<Entry>>` keyed by
//! display path (`~`, `~/projects`, ...). Entries are seeded once and
//! immutable at runtime; consumers apply all filtering (hidden
//! suppression) and formatting (grid vs detail) themselves — the VFS only
//! returns raw entries.

use std::collections::BTreeMap;

use termfolio_types::error::{Result, TermError};

mod seed;

pub use seed::seed_default;

/// What an entry is. `Hidden` entries are ordinary files that `ls`
/// suppresses without `-a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Executable,
    Hidden,
    Link,
}

impl EntryKind {
    /// Default permission string for display listings.
    pub fn permissions(self) -> &'static str {
        match self {
            EntryKind::Directory => "drwxr-xr-x",
            EntryKind::Executable => "-rwxr-xr-x",
            EntryKind::Link => "lrwxrwxrwx",
            EntryKind::File | EntryKind::Hidden => "-rw-r--r--",
        }
    }
}

/// One simulated directory entry.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    /// Display size ("2.4K"), not a byte count.
    pub size: String,
    pub permissions: String,
    pub owner: String,
    /// File body. Directories never carry content.
    pub content: Option<String>,
}

impl Entry {
    fn new(name: &str, kind: EntryKind, owner: &str, content: Option<String>) -> Self {
        let size = match (&content, kind) {
            (_, EntryKind::Directory) => "4.0K".to_string(),
            (Some(body), _) => format_display_size(body.len()),
            (None, _) => "0".to_string(),
        };
        Self {
            name: name.to_string(),
            kind,
            size,
            permissions: kind.permissions().to_string(),
            owner: owner.to_string(),
            content,
        }
    }

    pub fn file(name: &str, owner: &str, content: impl Into<String>) -> Self {
        Self::new(name, EntryKind::File, owner, Some(content.into()))
    }

    pub fn directory(name: &str, owner: &str) -> Self {
        Self::new(name, EntryKind::Directory, owner, None)
    }

    pub fn executable(name: &str, owner: &str, content: impl Into<String>) -> Self {
        Self::new(name, EntryKind::Executable, owner, Some(content.into()))
    }

    pub fn hidden(name: &str, owner: &str, content: impl Into<String>) -> Self {
        Self::new(name, EntryKind::Hidden, owner, Some(content.into()))
    }

    pub fn link(name: &str, owner: &str, target: &str) -> Self {
        Self::new(name, EntryKind::Link, owner, Some(format!("-> {target}")))
    }

    /// Hidden entries are suppressed by `ls` without `-a`.
    pub fn is_hidden(&self) -> bool {
        self.kind == EntryKind::Hidden || self.name.starts_with('.')
    }
}

/// Render a byte count the way `ls -lh` would.
fn format_display_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{bytes}")
    } else {
        format!("{:.1}K", bytes as f64 / 1024.0)
    }
}

/// The static, read-only filesystem.
#[derive(Debug, Default)]
pub struct Vfs {
    dirs: BTreeMap<String, Vec<Entry>>,
}

impl Vfs {
    /// An empty tree containing only the home directory.
    pub fn new() -> Self {
        let mut dirs = BTreeMap::new();
        dirs.insert("~".to_string(), Vec::new());
        Self { dirs }
    }

    /// Seed a directory. Used once at construction; replaces any existing
    /// entry list under the same key.
    pub fn insert_dir(&mut self, path: &str, entries: Vec<Entry>) {
        self.dirs.insert(path.to_string(), entries);
    }

    /// Whether `path` names a seeded directory.
    pub fn contains_dir(&self, path: &str) -> bool {
        self.dirs.contains_key(path)
    }

    /// Raw entries of a directory. Unknown paths are a typed not-found
    /// error, distinct from an empty directory (which yields `Ok(&[])`).
    pub fn list_directory(&self, path: &str) -> Result<&[Entry]> {
        self.dirs
            .get(path)
            .map(Vec::as_slice)
            .ok_or_else(|| TermError::NotFound(path.to_string()))
    }

    /// Body of the file `name` inside the directory `path`.
    pub fn read_file(&self, path: &str, name: &str) -> Result<&str> {
        let entries = self.list_directory(path)?;
        let entry = entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| TermError::NotFound(name.to_string()))?;
        if entry.kind == EntryKind::Directory {
            return Err(TermError::IsDirectory(name.to_string()));
        }
        Ok(entry.content.as_deref().unwrap_or(""))
    }
}

/// Resolve a `cd`/`ls` target against the current directory.
///
/// Accepts `~`, `/` (alias of home), absolute `~/a/b` paths, relative
/// child names, `.` and `..`. Purely syntactic — existence is the
/// caller's check. `..` never escapes `~`.
pub fn resolve_path(cwd: &str, target: &str) -> String {
    let (base, rest) = if target == "~" || target == "/" {
        ("~", "")
    } else if let Some(stripped) = target.strip_prefix("~/") {
        ("~", stripped)
    } else if let Some(stripped) = target.strip_prefix('/') {
        ("~", stripped)
    } else {
        (cwd, target)
    };

    let mut parts: Vec<&str> = base
        .split('/')
        .filter(|c| !c.is_empty() && *c != "~")
        .collect();
    for component in rest.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        "~".to_string()
    } else {
        format!("~/{}", parts.join("/"))
    }
}
