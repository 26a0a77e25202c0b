//! Environment lookup seam and typed defaults

use std::collections::HashMap;
use std::str::FromStr;

use crate::{Error, Result};

/// Source of environment variables.
///
/// The resolver reads everything through this seam so tests can substitute
/// an in-memory map for the process environment.
pub trait EnvSource: Send + Sync {
    /// Look up a variable, returning `None` if it is absent.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
///
/// Non-UTF-8 values are treated as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory environment for tests.
#[derive(Debug, Clone, Default)]
pub struct FakeEnv {
    vars: HashMap<String, String>,
}

impl FakeEnv {
    /// Create an empty fake environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, returning `self` for chained construction.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl EnvSource for FakeEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Read `key` from `env`, falling back to `default` when absent, and parse
/// whichever value is used as `T`.
///
/// An absent variable with a valid default never fails. A variable that is
/// set to a literal `T` cannot parse is an [`Error::Cast`] naming the
/// variable, the literal, and the target type.
///
/// # Example
///
/// ```
/// use bot_env::{FakeEnv, lookup};
///
/// let env = FakeEnv::new().with("BOT_PORT", "8080");
/// let port: i64 = lookup(&env, "BOT_PORT", 5000).unwrap();
/// assert_eq!(port, 8080);
///
/// let workers: i64 = lookup(&env, "BOT_WORKERS", 2).unwrap();
/// assert_eq!(workers, 2);
/// ```
pub fn lookup<T, E>(env: &E, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    E: EnvSource + ?Sized,
{
    match env.var(key) {
        Some(raw) => raw.parse().map_err(|_| Error::Cast {
            name: key.to_string(),
            value: raw,
            ty: std::any::type_name::<T>(),
        }),
        None => Ok(default),
    }
}
