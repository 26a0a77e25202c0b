//! Test fixtures and doubles for bot configuration crates
//!
//! Real git repository fixtures for integration tests and scripted
//! `GitCommand` doubles for unit tests.

pub mod doubles;
pub mod git;

pub use doubles::{FailingGit, ScriptedGit};
