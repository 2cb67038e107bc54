use std::path::{Path, PathBuf};

pub fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolves a leading `~` against the user's home directory. Any other
/// prefix string passes through unmodified; no normalization is done.
pub fn expand_home(prefix: &str) -> PathBuf {
    if prefix == "~" {
        return home_dir();
    }
    match prefix.strip_prefix("~/") {
        Some(rest) => home_dir().join(rest),
        None => PathBuf::from(prefix),
    }
}

/// Where the installed executable lands under the prefix.
pub fn bin_path(prefix: &Path, project: &str) -> PathBuf {
    prefix.join("bin").join(project)
}

/// Destination of the desktop entry file under the prefix.
pub fn desktop_entry_path(prefix: &Path, project: &str) -> PathBuf {
    prefix
        .join("share/applications")
        .join(format!("{project}.desktop"))
}
