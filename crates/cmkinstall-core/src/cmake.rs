use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CmakeError {
    #[error("cmake not found on PATH")]
    NotFound(#[source] io::Error),
    #[error("failed to run cmake")]
    Io(#[source] io::Error),
}

/// Exit status of a finished `cmake --install` run. Callers decide
/// whether a non-zero exit is fatal.
#[derive(Debug)]
pub struct InstallOutcome {
    pub status: ExitStatus,
}

impl InstallOutcome {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }
}

pub fn install_args(build_dir: &Path, prefix: &str) -> Vec<OsString> {
    vec![
        OsString::from("--install"),
        build_dir.into(),
        OsString::from("--prefix"),
        OsString::from(prefix),
    ]
}

/// Runs `cmake --install <build_dir> --prefix <prefix>`, blocking until
/// it exits. The prefix string is passed through verbatim.
pub fn install(build_dir: &Path, prefix: &str) -> Result<InstallOutcome, CmakeError> {
    let status = Command::new("cmake")
        .args(install_args(build_dir, prefix))
        .status()
        .map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => CmakeError::NotFound(err),
            _ => CmakeError::Io(err),
        })?;
    Ok(InstallOutcome { status })
}
