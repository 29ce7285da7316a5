//! External editor collaborator.
//!
//! # Responsibility
//! - Move the process into a project directory.
//! - Run the fixed editor command there and wait for it.
//!
//! # Invariants
//! - The editor inherits the caller's stdout/stderr.
//! - The editor is only launched after the directory change succeeded.

use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

/// Editor executable invoked as `<editor> .` inside the project directory.
pub const EDITOR_COMMAND: &str = "code";

pub type LaunchResult<T> = Result<T, LaunchError>;

#[derive(Debug)]
pub enum LaunchError {
    ChangeDir { path: PathBuf, source: io::Error },
    Spawn { command: String, source: io::Error },
    /// Editor ran but reported failure. `code` is `None` when killed by a signal.
    ExitStatus { command: String, code: Option<i32> },
}

impl Display for LaunchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChangeDir { path, source } => {
                write!(f, "chdir {}: {source}", path.display())
            }
            Self::Spawn { command, source } => write!(f, "failed to launch `{command}`: {source}"),
            Self::ExitStatus {
                command,
                code: Some(code),
            } => write!(f, "`{command}` exited with status {code}"),
            Self::ExitStatus { command, code: None } => {
                write!(f, "`{command}` was terminated by a signal")
            }
        }
    }
}

impl Error for LaunchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ChangeDir { source, .. } | Self::Spawn { source, .. } => Some(source),
            Self::ExitStatus { .. } => None,
        }
    }
}

/// Seam between the command loop and the process environment.
pub trait ProjectOpener {
    /// Makes `path` the working directory for the editor launch.
    fn change_dir(&mut self, path: &Path) -> LaunchResult<()>;
    /// Runs the editor on the current directory and blocks until it exits.
    fn launch_editor(&mut self) -> LaunchResult<()>;
}

/// Opener that changes the real process directory and spawns the editor.
#[derive(Debug, Clone)]
pub struct SystemOpener {
    command: String,
}

impl SystemOpener {
    pub fn new() -> Self {
        Self {
            command: EDITOR_COMMAND.to_string(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Default for SystemOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectOpener for SystemOpener {
    fn change_dir(&mut self, path: &Path) -> LaunchResult<()> {
        std::env::set_current_dir(path).map_err(|source| {
            error!(
                "event=project_open module=launch status=error error_code=chdir_failed error={source}"
            );
            LaunchError::ChangeDir {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    fn launch_editor(&mut self) -> LaunchResult<()> {
        let started_at = Instant::now();
        info!(
            "event=editor_launch module=launch status=start command={}",
            self.command
        );

        let status = Command::new(&self.command)
            .arg(".")
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| {
                error!(
                    "event=editor_launch module=launch status=error command={} error_code=spawn_failed error={source}",
                    self.command
                );
                LaunchError::Spawn {
                    command: self.command.clone(),
                    source,
                }
            })?;

        if !status.success() {
            error!(
                "event=editor_launch module=launch status=error command={} duration_ms={} error_code=editor_failed exit_code={:?}",
                self.command,
                started_at.elapsed().as_millis(),
                status.code()
            );
            return Err(LaunchError::ExitStatus {
                command: self.command.clone(),
                code: status.code(),
            });
        }

        info!(
            "event=editor_launch module=launch status=ok command={} duration_ms={}",
            self.command,
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}
