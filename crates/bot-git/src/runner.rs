//! Fail-soft git subprocess invocation

use std::path::{Path, PathBuf};
use std::process::Command;

/// Whether trailing whitespace is stripped from captured output.
///
/// Most porcelain output carries a trailing newline that callers never
/// want. `submodule status` is the exception: its leading status character
/// is significant, so the output must be preserved verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trim {
    /// Strip trailing whitespace (the default for almost every command).
    Trailing,
    /// Return the captured output untouched.
    Preserve,
}

/// Executor of git subcommands.
///
/// The resolver talks to git through this seam so tests can script command
/// output or simulate failures without spawning processes.
pub trait GitCommand: Send + Sync {
    /// Run `git <args>` and capture stdout.
    ///
    /// Returns `None` when the command cannot be spawned or exits non-zero.
    /// Implementations must not propagate errors: configuration resolution
    /// degrades when git metadata is unavailable, it does not crash.
    fn run(&self, args: &[&str], trim: Trim) -> Option<String>;
}

/// The real `git` CLI, invoked one blocking child process per call.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    workdir: Option<PathBuf>,
}

impl GitCli {
    /// Run git in the current working directory of the process.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git with `dir` as the working directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            workdir: Some(dir.as_ref().to_path_buf()),
        }
    }
}

impl GitCommand for GitCli {
    fn run(&self, args: &[&str], trim: Trim) -> Option<String> {
        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        let output = match cmd.output() {
            Ok(output) => output,
            Err(e) => {
                tracing::error!(?args, error = %e, "failed to spawn git");
                return None;
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(
                ?args,
                code = output.status.code().unwrap_or(-1),
                stderr = %stderr.trim_end(),
                "git exited with an error"
            );
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        match trim {
            Trim::Trailing => Some(stdout.trim_end().to_string()),
            Trim::Preserve => Some(stdout.into_owned()),
        }
    }
}
