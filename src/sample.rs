//! Example-code policy: keep, replace with a placeholder, or delete the
//! sample code shipped with the template.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::answers::ExampleCodePolicy;
use crate::command::CommandRunner;
use crate::constants::{
    CLEAN_EXAMPLE_COMMAND, PACKAGE_MARKER, SAMPLE_MODULE_EXTRAS, SAMPLE_MODULE_FILE,
    SAMPLE_TEST_EXTRAS, SAMPLE_TEST_FILE, TESTS_DIR,
};
use crate::error::Result;
use crate::renderer::TemplateRenderer;
use crate::rewrite::{rewrite_file, TextRewriter};
use crate::state::ProjectState;

const PLACEHOLDER_MODULE: &str = r#""""{{ project_name }}: {{ project_description }}"""


def hello(name: str) -> str:
    """Return a greeting for ``name``."""
    return f"Hello, {name}!"


def add(a: int, b: int) -> int:
    """Return the sum of ``a`` and ``b``."""
    return a + b
"#;

const PLACEHOLDER_TEST: &str = r#"from {{ module_name }}.example import add


def test_add():
    assert add(1, 2) == 3
"#;

/// Import rewrites turning `legacy` package references into `module` ones.
///
/// A bare `import <legacy>` is only matched when followed by ` as `, a
/// comma or a line end, so longer names sharing the prefix stay untouched.
pub fn import_replacements(legacy: &str, module: &str) -> Vec<(String, String)> {
    vec![
        (format!("from {legacy}."), format!("from {module}.")),
        (format!("from {legacy} import"), format!("from {module} import")),
        (format!("import {legacy}."), format!("import {module}.")),
        (format!("import {legacy} as "), format!("import {module} as ")),
        (format!("import {legacy},"), format!("import {module},")),
        (format!("import {legacy}\r\n"), format!("import {module}\r\n")),
        (format!("import {legacy}\n"), format!("import {module}\n")),
    ]
}

fn python_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "py"))
        .map(|entry| entry.into_path())
        .collect()
}

/// Rewrites imports of the legacy package in every python file under the
/// module, legacy and tests directories. Returns the rewritten files.
///
/// The legacy directory is included so this works whether or not relocation
/// already ran.
pub fn rewrite_imports(state: &ProjectState, rewriter: &dyn TextRewriter) -> Result<Vec<PathBuf>> {
    if !state.relocation_required() {
        return Ok(Vec::new());
    }

    let replacements = import_replacements(&state.legacy_module, &state.module_name);
    let mut rewritten = Vec::new();
    for dir in [
        state.module_dir(),
        state.root.join(&state.legacy_module),
        state.root.join(TESTS_DIR),
    ] {
        if !dir.is_dir() {
            continue;
        }
        for file in python_files(&dir) {
            if rewrite_file(rewriter, &file, &replacements)? {
                rewritten.push(file);
            }
        }
    }
    Ok(rewritten)
}

fn remove_path(path: &Path) -> Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path)?;
    } else if path.exists() {
        fs::remove_file(path)?;
    } else {
        return Ok(());
    }
    debug!("Removed {}", path.display());
    Ok(())
}

/// Replaces the sample code with a two-function module and a single test.
pub fn write_placeholder(state: &ProjectState, renderer: &dyn TemplateRenderer) -> Result<()> {
    let module_dir = state.module_dir();
    let tests_dir = state.root.join(TESTS_DIR);

    for extra in SAMPLE_MODULE_EXTRAS {
        remove_path(&module_dir.join(extra))?;
    }
    for extra in SAMPLE_TEST_EXTRAS {
        remove_path(&tests_dir.join(extra))?;
    }

    let context = serde_json::json!({
        "project_name": state.answers.project_name,
        "project_description": state.answers.project_description,
        "module_name": state.module_name,
    });

    fs::create_dir_all(&module_dir)?;
    let marker = module_dir.join(PACKAGE_MARKER);
    if !marker.exists() {
        fs::write(&marker, "")?;
    }
    fs::write(
        module_dir.join(SAMPLE_MODULE_FILE),
        renderer.render(PLACEHOLDER_MODULE, &context)?,
    )?;

    fs::create_dir_all(&tests_dir)?;
    fs::write(
        tests_dir.join(SAMPLE_TEST_FILE),
        renderer.render(PLACEHOLDER_TEST, &context)?,
    )?;
    Ok(())
}

/// Removes the sample code through the template's cleanup target and leaves
/// an empty tests package behind.
pub fn delete_examples(state: &ProjectState, runner: &dyn CommandRunner) -> Result<()> {
    runner.run(CLEAN_EXAMPLE_COMMAND, &state.root)?;

    let tests_dir = state.root.join(TESTS_DIR);
    fs::create_dir_all(&tests_dir)?;
    let marker = tests_dir.join(PACKAGE_MARKER);
    if !marker.exists() {
        fs::write(&marker, "")?;
    }
    Ok(())
}

/// Example-code policy step.
pub fn apply_policy(
    state: ProjectState,
    renderer: &dyn TemplateRenderer,
    rewriter: &dyn TextRewriter,
    runner: &dyn CommandRunner,
) -> Result<ProjectState> {
    match state.answers.example_code {
        ExampleCodePolicy::Keep => {
            let rewritten = rewrite_imports(&state, rewriter)?;
            debug!("Rewrote imports in {} file(s)", rewritten.len());
        }
        ExampleCodePolicy::Placeholder => write_placeholder(&state, renderer)?,
        ExampleCodePolicy::Delete => delete_examples(&state, runner)?,
    }
    Ok(state)
}

