//! On-demand property resolution
//!
//! The `Resolver` exposes every configuration property as a typed accessor
//! plus a dynamic [`Resolver::get`] for keys requested by name. Nothing is
//! memoized: git state can change under a long-lived process, so every
//! access recomputes from the current environment and repository.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use bot_env::{EnvSource, ProcessEnv, lookup};
use bot_git::{GitCli, GitCommand, SubmoduleEntry, Trim, extract_reponame, parse_remote_refs,
              parse_submodule_status};

use crate::identity;
use crate::{Error, Result, Value};

/// Numeric warning log level, the default when `LOG_LEVEL` is unset.
const DEFAULT_LOG_LEVEL: i64 = 30;

/// Resolves runtime configuration from the environment and the surrounding
/// git repository.
///
/// Constructed once at process start and passed by reference to consumers.
/// Generic over its two collaborators so tests can substitute an in-memory
/// environment and scripted git output.
///
/// Failure policy: git invocation failures degrade the affected property to
/// `None` or an empty map (the wrapper logs them); structural failures with
/// no sensible fallback — a non-GitHub origin URL, a missing repository
/// root under a path property, a broken user database — are errors.
///
/// # Example
///
/// ```
/// use bot_config::{Resolver, Value};
/// use bot_env::FakeEnv;
/// use bot_git::GitCli;
///
/// let env = FakeEnv::new().with("BOT_PORT", "8080").with("MY_CUSTOM_FLAG", "42");
/// let resolver = Resolver::new(env, GitCli::new());
///
/// assert_eq!(resolver.port().unwrap(), 8080);
/// assert_eq!(resolver.timeout().unwrap(), 120);
/// assert_eq!(resolver.get("MY_CUSTOM_FLAG").unwrap(), Value::Int(42));
/// ```
pub struct Resolver<E = ProcessEnv, G = GitCli> {
    env: E,
    git: G,
}

impl Resolver<ProcessEnv, GitCli> {
    /// Resolver over the real process environment and the `git` CLI run in
    /// the process working directory.
    pub fn from_process() -> Self {
        Self::new(ProcessEnv, GitCli::new())
    }
}

impl<E: EnvSource, G: GitCommand> Resolver<E, G> {
    /// Create a resolver over explicit collaborators.
    pub fn new(env: E, git: G) -> Self {
        Self { env, git }
    }

    // --- direct environment properties -----------------------------------

    /// `LOG_LEVEL`, default 30 (warning).
    pub fn log_level(&self) -> Result<i64> {
        Ok(lookup(&self.env, "LOG_LEVEL", DEFAULT_LOG_LEVEL)?)
    }

    /// `BOT_PORT`, default 5000.
    pub fn port(&self) -> Result<i64> {
        Ok(lookup(&self.env, "BOT_PORT", 5000)?)
    }

    /// `BOT_TIMEOUT`, default 120.
    pub fn timeout(&self) -> Result<i64> {
        Ok(lookup(&self.env, "BOT_TIMEOUT", 120)?)
    }

    /// `BOT_WORKERS`, default 2.
    pub fn workers(&self) -> Result<i64> {
        Ok(lookup(&self.env, "BOT_WORKERS", 2)?)
    }

    /// `BOT_MODULE`, default `main:app`.
    pub fn module(&self) -> Result<String> {
        Ok(lookup(&self.env, "BOT_MODULE", "main:app".to_string())?)
    }

    // --- identity properties ---------------------------------------------

    /// Numeric uid of the process owner.
    pub fn uid(&self) -> u32 {
        identity::uid()
    }

    /// Primary gid of the process owner, from the user database.
    pub fn gid(&self) -> Result<u32> {
        Ok(identity::passwd_for(self.uid())?.gid)
    }

    /// Login name of the process owner, from the user database.
    pub fn user(&self) -> Result<String> {
        Ok(identity::passwd_for(self.uid())?.name)
    }

    // --- git-derived properties ------------------------------------------

    /// Absolute path of the working tree root, or `None` outside a
    /// repository.
    pub fn repo_root(&self) -> Option<String> {
        self.git.run(&["rev-parse", "--show-toplevel"], Trim::Trailing)
    }

    /// Nearest tag name, falling back to the abbreviated revision when no
    /// tag exists.
    pub fn tag_name(&self) -> Option<String> {
        self.git
            .run(&["describe", "--abbrev=0", "--always"], Trim::Trailing)
    }

    /// Describe output with a 7-character hash, same tag fallback.
    pub fn version(&self) -> Option<String> {
        self.git
            .run(&["describe", "--abbrev=7", "--always"], Trim::Trailing)
    }

    /// Short name of the current branch.
    pub fn branch(&self) -> Option<String> {
        self.git
            .run(&["rev-parse", "--abbrev-ref", "HEAD"], Trim::Trailing)
    }

    /// Full commit hash of HEAD.
    pub fn revision(&self) -> Option<String> {
        self.git.run(&["rev-parse", "HEAD"], Trim::Trailing)
    }

    /// Configured fetch URL of the `origin` remote.
    pub fn remote_origin_url(&self) -> Option<String> {
        self.git
            .run(&["config", "--get", "remote.origin.url"], Trim::Trailing)
    }

    /// `owner/repo` extracted from the origin URL.
    ///
    /// Errors when the origin is missing or not GitHub-shaped; there is no
    /// fallback for a broken structural assumption.
    pub fn reponame(&self) -> Result<String> {
        let url = self.remote_origin_url().unwrap_or_default();
        Ok(extract_reponame(&url)?)
    }

    /// Final path segment of [`Resolver::reponame`].
    pub fn project_name(&self) -> Result<String> {
        let reponame = self.reponame()?;
        let name = reponame.rsplit('/').next().unwrap_or(&reponame);
        Ok(name.to_string())
    }

    /// Repository root joined with the project name.
    pub fn project_path(&self) -> Result<PathBuf> {
        let root = self.repo_root().ok_or(Error::RepoRootUnavailable)?;
        Ok(Path::new(&root).join(self.project_name()?))
    }

    /// Repository root joined with `tests`.
    pub fn test_path(&self) -> Result<PathBuf> {
        let root = self.repo_root().ok_or(Error::RepoRootUnavailable)?;
        Ok(Path::new(&root).join("tests"))
    }

    /// Refname → revision map from `ls-remote` against the GitHub URL of
    /// [`Resolver::reponame`].
    ///
    /// A failed invocation (network, auth) degrades to an empty map; a
    /// malformed listing line is a parse error.
    pub fn remote_refs(&self) -> Result<HashMap<String, String>> {
        let url = format!("https://github.com/{}", self.reponame()?);
        tracing::debug!(%url, "listing remote refs");
        match self.git.run(&["ls-remote", &url], Trim::Trailing) {
            Some(output) => Ok(parse_remote_refs(&output)?),
            None => Ok(HashMap::new()),
        }
    }

    /// Submodule path → (revision, state) map from `submodule status`.
    ///
    /// Output is captured verbatim: the leading status character of each
    /// line is significant. A failed invocation degrades to an empty map.
    pub fn submodule_status(&self) -> HashMap<String, SubmoduleEntry> {
        match self.git.run(&["submodule", "status"], Trim::Preserve) {
            Some(output) => parse_submodule_status(&output),
            None => HashMap::new(),
        }
    }

    // --- dynamic resolution ----------------------------------------------

    /// Resolve a property by name.
    ///
    /// Two-tier dispatch: names of explicitly declared properties go to the
    /// typed accessor above — unconditionally, the fallback can never
    /// shadow them. Any other name is looked up as an environment variable
    /// with no default, coerced to an integer when the value parses as one
    /// and returned as the raw string otherwise.
    ///
    /// Fail-soft git properties surface here as `Value::Str("")` when the
    /// underlying command failed.
    pub fn get(&self, name: &str) -> Result<Value> {
        match name {
            "LOG_LEVEL" => self.log_level().map(Value::Int),
            "BOT_PORT" => self.port().map(Value::Int),
            "BOT_TIMEOUT" => self.timeout().map(Value::Int),
            "BOT_WORKERS" => self.workers().map(Value::Int),
            "BOT_MODULE" => self.module().map(Value::Str),
            "BOT_UID" => Ok(Value::Int(i64::from(self.uid()))),
            "BOT_GID" => self.gid().map(|gid| Value::Int(i64::from(gid))),
            "BOT_USER" => self.user().map(Value::Str),
            "BOT_REPOROOT" => Ok(Value::Str(self.repo_root().unwrap_or_default())),
            "BOT_TAGNAME" => Ok(Value::Str(self.tag_name().unwrap_or_default())),
            "BOT_VERSION" => Ok(Value::Str(self.version().unwrap_or_default())),
            "BOT_BRANCH" => Ok(Value::Str(self.branch().unwrap_or_default())),
            "BOT_REVISION" => Ok(Value::Str(self.revision().unwrap_or_default())),
            "BOT_REMOTE_ORIGIN_URL" => {
                Ok(Value::Str(self.remote_origin_url().unwrap_or_default()))
            }
            "BOT_REPONAME" => self.reponame().map(Value::Str),
            "BOT_PROJNAME" => self.project_name().map(Value::Str),
            "BOT_PROJPATH" => self
                .project_path()
                .map(|p| Value::Str(p.to_string_lossy().into_owned())),
            "BOT_TESTPATH" => self
                .test_path()
                .map(|p| Value::Str(p.to_string_lossy().into_owned())),
            "BOT_LS_REMOTE" => self.remote_refs().map(Value::Refs),
            "BOT_GSM_STATUS" => Ok(Value::Submodules(self.submodule_status())),
            _ => self.env_fallback(name),
        }
    }

    /// Generic fallback for names with no explicit definition.
    fn env_fallback(&self, name: &str) -> Result<Value> {
        tracing::info!(name, "resolving undeclared key from the environment");
        let raw = self.env.var(name).ok_or_else(|| bot_env::Error::NotSet {
            name: name.to_string(),
        })?;
        Ok(match raw.parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Str(raw),
        })
    }
}
