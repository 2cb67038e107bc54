use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "install.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    #[serde(default = "default_build_dir")]
    pub build_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallConfig {
    pub default_prefix: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            default_prefix: "~/.local".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesktopConfig {
    pub enabled: bool,
    #[serde(default)]
    pub terminal: bool,
    #[serde(default = "default_categories")]
    pub categories: String,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            terminal: false,
            categories: default_categories(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub project: ProjectConfig,
    #[serde(default)]
    pub install: InstallConfig,
    #[serde(default)]
    pub desktop: DesktopConfig,
}

impl Config {
    /// Reads `install.toml` from the given directory.
    pub fn load(dir: &Path) -> Result<Self> {
        Self::from_path(&dir.join(CONFIG_FILE_NAME))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed reading config at {}", path.display()))?;
        let cfg = toml::from_str::<Config>(&raw)
            .with_context(|| format!("failed parsing TOML config at {}", path.display()))?;
        Ok(cfg)
    }

    /// A starter configuration for a freshly scaffolded project.
    pub fn starter(name: &str) -> Self {
        Self {
            project: ProjectConfig {
                name: name.to_string(),
                build_dir: default_build_dir(),
            },
            install: InstallConfig::default(),
            desktop: DesktopConfig::default(),
        }
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

fn default_build_dir() -> PathBuf {
    PathBuf::from("build")
}

fn default_categories() -> String {
    "Utility;".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_fills_defaults() {
        let cfg: Config = toml::from_str("[project]\nname = \"demo\"\n").unwrap();
        assert_eq!(cfg.project.name, "demo");
        assert_eq!(cfg.project.build_dir, PathBuf::from("build"));
        assert_eq!(cfg.install.default_prefix, "~/.local");
        assert!(!cfg.desktop.enabled);
        assert_eq!(cfg.desktop.categories, "Utility;");
    }

    #[test]
    fn starter_round_trips_through_toml() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("install.toml");

        let cfg = Config::starter("demo");
        cfg.write_to(&path).unwrap();

        let back = Config::from_path(&path).unwrap();
        assert_eq!(back.project.name, "demo");
        assert_eq!(back.install.default_prefix, cfg.install.default_prefix);
        assert_eq!(back.desktop.enabled, cfg.desktop.enabled);
    }

    #[test]
    fn missing_config_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let err = Config::load(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("install.toml"));
    }
}
