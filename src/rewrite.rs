//! In-place text rewriting of files the tool does not parse structurally
//! (the Makefile, python import lines).
//!
//! Replacement is exact-substring: edits that do not match the expected
//! literal are left as they are. Call sites only see [`TextRewriter`], so a
//! structural implementation can replace [`LiteralRewriter`] later.

use crate::error::Result;
use log::debug;
use std::fs;
use std::path::Path;

/// Rewrites text content given a list of `(from, to)` replacements.
pub trait TextRewriter {
    /// Applies the replacements in order and returns the new content.
    fn rewrite(&self, content: &str, replacements: &[(String, String)]) -> String;
}

/// Exact substring replacement, applied left to right.
#[derive(Debug, Default)]
pub struct LiteralRewriter;

impl LiteralRewriter {
    pub fn new() -> Self {
        Self
    }
}

impl TextRewriter for LiteralRewriter {
    fn rewrite(&self, content: &str, replacements: &[(String, String)]) -> String {
        replacements
            .iter()
            .filter(|(from, to)| !from.is_empty() && from != to)
            .fold(content.to_string(), |acc, (from, to)| acc.replace(from, to))
    }
}

/// Rewrites `path` in place.
///
/// # Returns
/// * `Ok(false)` if the file does not exist or nothing changed
/// * `Ok(true)` if the file was written
pub fn rewrite_file<P: AsRef<Path>>(
    rewriter: &dyn TextRewriter,
    path: P,
    replacements: &[(String, String)],
) -> Result<bool> {
    let path = path.as_ref();
    if !path.is_file() {
        debug!("Nothing to rewrite, {} does not exist", path.display());
        return Ok(false);
    }

    let content = fs::read_to_string(path)?;
    let rewritten = rewriter.rewrite(&content, replacements);
    if rewritten == content {
        debug!("No matching literals in {}", path.display());
        return Ok(false);
    }

    fs::write(path, rewritten)?;
    debug!("Rewrote {}", path.display());
    Ok(true)
}
