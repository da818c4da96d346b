//! Directory rename, environment bootstrap and version-control reset.
//!
//! These are the last mutating steps. The rename runs after the manifest and
//! module steps, and the repository reset commits whatever they produced.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::command::CommandRunner;
use crate::constants::{
    BOOTSTRAP_COMMAND, HOOKS_INSTALL_COMMAND, INITIAL_COMMIT_MESSAGE, MAKEFILE, TEMPLATE_DIR_NAMES,
    VCS_DIR,
};
use crate::error::{Error, Result};
use crate::rewrite::{rewrite_file, TextRewriter};
use crate::state::ProjectState;

/// Whether `root` is a fresh template checkout whose directory may be renamed.
pub fn is_template_dir(root: &Path) -> bool {
    root.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| TEMPLATE_DIR_NAMES.contains(&name))
}

/// Directory rename step.
///
/// Renames the project root to the project name when it still carries a
/// template directory name, the user agreed, and the target is free.
/// Literal references to the old directory name in the Makefile are
/// rewritten first.
pub fn rename_directory(mut state: ProjectState, rewriter: &dyn TextRewriter) -> Result<ProjectState> {
    if !state.answers.rename_directory || !is_template_dir(&state.root) {
        return Ok(state);
    }

    let old_name = match state.root.file_name().and_then(|name| name.to_str()) {
        Some(name) => name.to_string(),
        None => return Ok(state),
    };
    let parent = state.root.parent().ok_or_else(|| {
        Error::ValidationError(format!("{} has no parent directory", state.root.display()))
    })?;
    let target = parent.join(&state.answers.project_name);

    if target.exists() {
        warn!(
            "Not renaming {}: {} already exists",
            state.root.display(),
            target.display()
        );
        return Ok(state);
    }

    rewrite_file(
        rewriter,
        state.root.join(MAKEFILE),
        &[(old_name, state.answers.project_name.clone())],
    )?;

    fs::rename(&state.root, &target)?;
    println!("Renamed: '{}' -> '{}'", state.root.display(), target.display());

    state.renamed_from = Some(std::mem::replace(&mut state.root, target));
    Ok(state)
}

/// Installs dependencies and tooling.
pub fn bootstrap_environment(state: ProjectState, runner: &dyn CommandRunner) -> Result<ProjectState> {
    runner.run(BOOTSTRAP_COMMAND, &state.root)?;
    Ok(state)
}

/// The initial commit command, optionally bypassing commit hooks.
pub fn commit_command(no_verify: bool) -> String {
    let mut command = format!("git commit -m \"{INITIAL_COMMIT_MESSAGE}\"");
    if no_verify {
        command.push_str(" --no-verify");
    }
    command
}

/// Version-control reset step.
///
/// Discards any existing history, reinitializes the repository, installs
/// commit hooks when requested and records the initial commit. Hooks are
/// installed before the commit so they validate it unless `no_verify`.
pub fn reset_repository(
    state: ProjectState,
    runner: &dyn CommandRunner,
    no_verify: bool,
) -> Result<ProjectState> {
    let vcs_dir = state.root.join(VCS_DIR);
    if vcs_dir.exists() {
        fs::remove_dir_all(&vcs_dir)?;
        debug!("Removed {}", vcs_dir.display());
    }

    runner.run("git init", &state.root)?;
    if state.answers.install_hooks {
        runner.run(HOOKS_INSTALL_COMMAND, &state.root)?;
    }
    runner.run("git add .", &state.root)?;
    runner.run(&commit_command(no_verify), &state.root)?;
    Ok(state)
}
