//! Parsers for git command output

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::{Error, Result};

static REPONAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(ssh|https)://([A-Za-z0-9\-_]+@)?github\.com/(?P<reponame>[A-Za-z0-9/\-_]+)(\.git)?")
        .expect("Invalid reponame regex")
});

static SUBMODULE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<state>[ +-])(?P<revision>[a-f0-9]{40}) (?P<path>[A-Za-z0-9/\-_.]+)( .*)?")
        .expect("Invalid submodule status regex")
});

/// Checkout state of a submodule relative to the revision the parent
/// repository records for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubmoduleState {
    /// Checked out at the recorded revision
    InSync,
    /// Checked out at a different revision
    Diverged,
    /// Not checked out at all
    Absent,
}

/// One entry of `git submodule status` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmoduleEntry {
    /// Full 40-character revision the submodule is recorded at
    pub revision: String,
    /// Checkout state derived from the leading status character
    pub state: SubmoduleState,
}

/// Extract the `owner/repo` portion of a GitHub remote URL.
///
/// Accepts `ssh://` and `https://` URLs of the form
/// `scheme://[user@]github.com/owner/repo[.git]`. Anything else — scp-style
/// syntax, non-GitHub hosts, an empty string — is an [`Error::RemoteUrl`].
/// There is deliberately no fallback: a non-GitHub origin breaks a
/// structural assumption the caller must know about.
///
/// # Example
///
/// ```
/// use bot_git::extract_reponame;
///
/// let name = extract_reponame("https://github.com/acme/widget.git").unwrap();
/// assert_eq!(name, "acme/widget");
/// assert!(extract_reponame("git@example.com:acme/widget.git").is_err());
/// ```
pub fn extract_reponame(url: &str) -> Result<String> {
    REPONAME
        .captures(url)
        .and_then(|caps| caps.name("reponame"))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::RemoteUrl {
            url: url.to_string(),
        })
}

/// Parse `git ls-remote` output into a refname → revision map.
///
/// Every non-empty line must split into exactly two whitespace-separated
/// tokens, `(revision, refname)`. A line that does not is rejected with
/// [`Error::MalformedRefLine`] rather than silently dropped: the map feeds
/// deployment decisions, and a half-parsed listing is worse than none.
pub fn parse_remote_refs(output: &str) -> Result<HashMap<String, String>> {
    let mut refs = HashMap::new();
    for line in output.lines().filter(|l| !l.trim().is_empty()) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [revision, refname] = tokens.as_slice() else {
            return Err(Error::MalformedRefLine {
                line: line.to_string(),
            });
        };
        refs.insert(refname.to_string(), revision.to_string());
    }
    Ok(refs)
}

/// Parse `git submodule status` output into a path → entry map.
///
/// Each matching line carries a one-character state flag, a 40-hex
/// revision, and a path; the flag maps through
/// `' '` → in-sync, `'+'` → diverged, `'-'` → absent. This is a pattern
/// scan, not a line grammar: lines that do not match are ignored.
pub fn parse_submodule_status(output: &str) -> HashMap<String, SubmoduleEntry> {
    SUBMODULE_LINE
        .captures_iter(output)
        .map(|caps| {
            let state = match &caps["state"] {
                " " => SubmoduleState::InSync,
                "+" => SubmoduleState::Diverged,
                // The character class admits exactly one other flag
                _ => SubmoduleState::Absent,
            };
            (
                caps["path"].to_string(),
                SubmoduleEntry {
                    revision: caps["revision"].to_string(),
                    state,
                },
            )
        })
        .collect()
}
