//! Module naming and relocation of the source package.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use log::{debug, warn};
use regex::Regex;
use walkdir::WalkDir;

use crate::constants::{MAKEFILE, MAKEFILE_MODULE_VAR, PACKAGE_MARKER, PYTHON_KEYWORDS};
use crate::error::{Error, Result};
use crate::rewrite::{rewrite_file, TextRewriter};
use crate::state::ProjectState;

fn identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z_][a-z0-9_]*$").expect("identifier regex is valid"))
}

/// Derives the python module name: lowercase, hyphens become underscores.
pub fn module_name(project_name: &str) -> String {
    project_name.to_lowercase().replace('-', "_")
}

/// Whether `name` is a legal python identifier in the form module names take.
///
/// Reserved words match the identifier shape but cannot be imported.
pub fn is_valid_module_name(name: &str) -> bool {
    identifier_re().is_match(name) && !PYTHON_KEYWORDS.contains(&name)
}

/// Accepts a project name only if its derived module name is a legal identifier.
pub fn validate_project_name(project_name: &str) -> Result<()> {
    let module = module_name(project_name);
    if is_valid_module_name(&module) {
        Ok(())
    } else {
        Err(Error::ValidationError(format!(
            "project name '{project_name}' does not produce a valid module name ('{module}'); \
             use letters, digits, '-' and '_', starting with a letter or '_', \
             and avoid python keywords"
        )))
    }
}

/// What [`relocate_module`] did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Relocation {
    /// The module directory did not exist and was created.
    pub created: bool,
    /// Files copied from the legacy directory, as destination paths.
    pub migrated: Vec<PathBuf>,
    /// Legacy entries that were not migrated (subdirectories, special files).
    pub skipped: Vec<PathBuf>,
    /// The legacy directory was removed.
    pub removed_legacy: bool,
}

impl Relocation {
    pub fn is_noop(&self) -> bool {
        !self.created && self.migrated.is_empty() && !self.removed_legacy
    }
}

/// Moves the legacy package directory to `root/<module>`.
///
/// Creates the module directory with an empty package marker when missing.
/// When `root/<legacy>` exists and differs from the target, its top-level
/// regular files are copied over and the legacy directory is removed.
/// Subdirectories are not migrated; they are reported in
/// [`Relocation::skipped`] and logged.
///
/// A second call with the same arguments does nothing.
pub fn relocate_module(root: &Path, legacy: &str, module: &str) -> Result<Relocation> {
    let mut relocation = Relocation::default();
    let target = root.join(module);

    if !target.exists() {
        fs::create_dir_all(&target)?;
        fs::write(target.join(PACKAGE_MARKER), "")?;
        relocation.created = true;
        debug!("Created module directory {}", target.display());
    }

    let legacy_dir = root.join(legacy);
    if legacy == module || !legacy_dir.is_dir() {
        return Ok(relocation);
    }

    for entry in WalkDir::new(&legacy_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let destination = target.join(entry.file_name());
        if entry.file_type().is_file() {
            fs::copy(entry.path(), &destination)?;
            debug!("Copied {} to {}", entry.path().display(), destination.display());
            relocation.migrated.push(destination);
        } else {
            warn!(
                "Not migrating {}: only top-level files are moved to '{}'",
                entry.path().display(),
                module
            );
            relocation.skipped.push(entry.path().to_path_buf());
        }
    }

    fs::remove_dir_all(&legacy_dir)?;
    relocation.removed_legacy = true;
    debug!("Removed legacy directory {}", legacy_dir.display());

    Ok(relocation)
}

/// Points the Makefile's module variable from `legacy` to `module`.
///
/// Only the exact assignment `MODULE_NAME := <legacy>` is rewritten.
pub fn rewrite_makefile_module(
    rewriter: &dyn TextRewriter,
    root: &Path,
    legacy: &str,
    module: &str,
) -> Result<bool> {
    let replacements = vec![(
        format!("{MAKEFILE_MODULE_VAR} := {legacy}"),
        format!("{MAKEFILE_MODULE_VAR} := {module}"),
    )];
    rewrite_file(rewriter, root.join(MAKEFILE), &replacements)
}

/// Module relocation step.
///
/// Moves the legacy package to the module directory and rewrites the
/// Makefile's module variable. Safe to rerun.
pub fn relocate(mut state: ProjectState, rewriter: &dyn TextRewriter) -> Result<ProjectState> {
    let relocation = relocate_module(&state.root, &state.legacy_module, &state.module_name)?;
    if relocation.is_noop() {
        debug!("Module '{}' already in place", state.module_name);
    }
    if state.relocation_required() {
        rewrite_makefile_module(rewriter, &state.root, &state.legacy_module, &state.module_name)?;
    }
    state.relocation = Some(relocation);
    Ok(state)
}
