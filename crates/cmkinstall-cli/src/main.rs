use anyhow::{Context, Result};
use clap::Parser;
use cmkinstall_core::cmake;
use cmkinstall_core::config::Config;
use cmkinstall_core::desktop;
use cmkinstall_core::paths::expand_home;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "cmkinstall")]
#[command(about = "Install helper for CMake-built applications")]
struct Cli {
    /// Install prefix; defaults to the configured prefix (~/.local)
    prefix: Option<String>,

    /// Path to the install config; defaults to ./install.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip writing the desktop entry even if the config enables it
    #[arg(long)]
    no_desktop_entry: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .without_time()
        .init();

    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::load(Path::new(".")).context("no install.toml in current directory")?,
    };

    let prefix = cli
        .prefix
        .unwrap_or_else(|| cfg.install.default_prefix.clone());

    info!(
        "installing {} from {} to prefix {}",
        cfg.project.name,
        cfg.project.build_dir.display(),
        prefix
    );
    let outcome = cmake::install(&cfg.project.build_dir, &prefix)?;
    if !outcome.success() {
        // The original tooling ignored this status entirely; report it
        // but keep going so a partial install still gets its entry.
        warn!(
            "cmake --install exited with status {:?}",
            outcome.code()
        );
    }

    if desktop_requested(&cfg, cli.no_desktop_entry) {
        let expanded = expand_home(&prefix);
        let path = desktop::install(&expanded, &cfg)?;
        info!("wrote desktop entry {}", path.display());
    }

    Ok(())
}

fn desktop_requested(cfg: &Config, no_desktop_entry: bool) -> bool {
    cfg.desktop.enabled && !no_desktop_entry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_step_follows_config_flag() {
        let mut cfg = Config::starter("demo");
        assert!(!desktop_requested(&cfg, false));
        cfg.desktop.enabled = true;
        assert!(desktop_requested(&cfg, false));
    }

    #[test]
    fn cli_flag_forces_desktop_off() {
        let mut cfg = Config::starter("demo");
        cfg.desktop.enabled = true;
        assert!(!desktop_requested(&cfg, true));
    }

    #[test]
    fn default_prefix_is_user_local() {
        let cfg = Config::starter("demo");
        assert_eq!(cfg.install.default_prefix, "~/.local");
    }
}
