//! retemplate turns a checkout of the python project template into a
//! concretely named project: it rewrites the manifest, relocates the source
//! package, applies an example-code policy, optionally scaffolds
//! documentation, and reinitializes git.

/// User answers and preloaded answer files
pub mod answers;

/// Command-line interface module for the retemplate application
pub mod cli;

/// External command execution
pub mod command;

/// Fixed layout and defaults of the python template
pub mod constants;

/// MkDocs documentation scaffold
pub mod docs;

/// Error types and handling for the retemplate application
pub mod error;

/// Git identity and remote lookups
pub mod identity;

pub mod logger;

/// `pyproject.toml` editing
pub mod manifest;

/// Module naming and package relocation
pub mod package;

/// User input and interaction handling
pub mod prompt;

/// Template rendering engines
pub mod renderer;

/// Directory rename, bootstrap and repository reset
pub mod reset;

/// Literal text rewriting
pub mod rewrite;

/// Example-code policy
pub mod sample;

pub mod state;

/// Step orchestration
pub mod workflow;
