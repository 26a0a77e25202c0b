//! Git CLI wrapper and output parsers for bot configuration
//!
//! Wraps `git` subprocess invocations with a fail-soft contract and parses
//! the command output the resolver cares about: remote ref listings,
//! submodule status, and GitHub remote URLs.

pub mod error;
pub mod parse;
pub mod runner;

pub use error::{Error, Result};
pub use parse::{SubmoduleEntry, SubmoduleState, extract_reponame, parse_remote_refs,
                parse_submodule_status};
pub use runner::{GitCli, GitCommand, Trim};
