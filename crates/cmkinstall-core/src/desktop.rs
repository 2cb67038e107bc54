use crate::config::Config;
use crate::paths;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// An XDG desktop entry. Key order and casing are significant to the
/// launchers that consume the file, so entries are kept as an ordered
/// list rather than a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopEntry {
    entries: Vec<(&'static str, String)>,
}

impl DesktopEntry {
    /// Builds the entry for a project installed under `prefix`. Pure:
    /// the same prefix and config always produce the same entries.
    pub fn configure(prefix: &Path, cfg: &Config) -> Self {
        let name = cfg.project.name.as_str();
        let exec = paths::bin_path(prefix, name);
        Self {
            entries: vec![
                ("Version", "1.0".to_string()),
                ("Type", "Application".to_string()),
                ("Name", name.to_string()),
                ("Exec", exec.display().to_string()),
                ("Terminal", cfg.desktop.terminal.to_string()),
                ("Categories", cfg.desktop.categories.clone()),
            ],
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Serializes to INI-style text under a single `[Desktop Entry]`
    /// section, one `Key=Value` line per entry.
    pub fn render(&self) -> String {
        let mut out = String::from("[Desktop Entry]\n");
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}

/// Writes the desktop entry to `<prefix>/share/applications/`,
/// replacing any previous file. Returns the written path.
pub fn install(prefix: &Path, cfg: &Config) -> Result<PathBuf> {
    let entry = DesktopEntry::configure(prefix, cfg);
    let path = paths::desktop_entry_path(prefix, &cfg.project.name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed creating {}", parent.display()))?;
    }
    fs::write(&path, entry.render())
        .with_context(|| format!("failed writing desktop entry at {}", path.display()))?;
    Ok(path)
}
