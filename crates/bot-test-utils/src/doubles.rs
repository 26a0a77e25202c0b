//! Scripted stand-ins for the git CLI

use std::collections::HashMap;

use bot_git::{GitCommand, Trim};

/// Git double that replays canned output per argument list.
///
/// Unscripted invocations behave like a failed command (`None`), so a test
/// only scripts the subcommands it cares about.
#[derive(Debug, Clone, Default)]
pub struct ScriptedGit {
    responses: HashMap<Vec<String>, String>,
}

impl ScriptedGit {
    /// Create a double with nothing scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `git <args>` to succeed with `output`, returning `self` for
    /// chained construction.
    pub fn with(mut self, args: &[&str], output: &str) -> Self {
        self.responses.insert(
            args.iter().map(|a| a.to_string()).collect(),
            output.to_string(),
        );
        self
    }
}

impl GitCommand for ScriptedGit {
    fn run(&self, args: &[&str], trim: Trim) -> Option<String> {
        let key: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let output = self.responses.get(&key)?;
        match trim {
            Trim::Trailing => Some(output.trim_end().to_string()),
            Trim::Preserve => Some(output.clone()),
        }
    }
}

/// Git double where every invocation fails.
///
/// Logs one error-level event per call, mirroring the real wrapper's
/// contract, so tests can assert on the failure telemetry.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingGit;

impl GitCommand for FailingGit {
    fn run(&self, args: &[&str], _trim: Trim) -> Option<String> {
        tracing::error!(?args, "git exited with an error");
        None
    }
}
