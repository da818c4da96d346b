//! Optional MkDocs documentation scaffold.
//!
//! Renders the fixed set of documentation templates and adds the MkDocs
//! tooling to the manifest's dev dependency group.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::debug;

use crate::constants::{DOCS_DEPENDENCIES, DOCS_DEPENDENCY_GROUP, DOCS_TEMPLATES, MANIFEST_FILE};
use crate::error::{Error, Result};
use crate::identity::{resolve_username, IdentityProvider};
use crate::manifest::Manifest;
use crate::renderer::TemplateRenderer;
use crate::state::ProjectState;

/// Token values substituted into the documentation templates.
pub fn substitutions(state: &ProjectState, username: &str) -> IndexMap<&'static str, String> {
    let mut tokens = IndexMap::new();
    tokens.insert("project_name", state.answers.project_name.clone());
    tokens.insert("project_description", state.answers.project_description.clone());
    tokens.insert("author_name", state.answers.author_name.clone());
    tokens.insert("author_email", state.answers.author_email.clone());
    tokens.insert("project_module_name", state.module_name.clone());
    tokens.insert("github_username", username.to_string());
    tokens
}

/// Renders `template` into `destination`, creating parent directories.
pub fn render_template_file(
    renderer: &dyn TemplateRenderer,
    template: &Path,
    destination: &Path,
    context: &serde_json::Value,
) -> Result<()> {
    if !template.is_file() {
        return Err(Error::TemplateError(format!(
            "template '{}' not found",
            template.display()
        )));
    }

    let content = fs::read_to_string(template)?;
    let rendered = renderer.render(&content, context)?;

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(destination, rendered)?;
    debug!("Rendered {} -> {}", template.display(), destination.display());
    Ok(())
}

/// Renders every documentation template under `root`. Returns the written
/// destinations.
pub fn render_docs(
    root: &Path,
    renderer: &dyn TemplateRenderer,
    tokens: &IndexMap<&'static str, String>,
) -> Result<Vec<PathBuf>> {
    let context =
        serde_json::to_value(tokens).map_err(|e| Error::TemplateError(e.to_string()))?;

    let mut written = Vec::with_capacity(DOCS_TEMPLATES.len());
    for (template, destination) in DOCS_TEMPLATES {
        let destination = root.join(destination);
        render_template_file(renderer, &root.join(template), &destination, &context)?;
        written.push(destination);
    }
    Ok(written)
}

/// Adds the MkDocs tooling to the dev dependency group without duplicates.
pub fn add_docs_dependencies(root: &Path) -> Result<usize> {
    let mut manifest = Manifest::load(root.join(MANIFEST_FILE))?;
    let added = manifest.add_group_dependencies(DOCS_DEPENDENCY_GROUP, &DOCS_DEPENDENCIES)?;
    if added > 0 {
        manifest.save()?;
    }
    Ok(added)
}

/// Documentation scaffold step. Does nothing unless documentation was requested.
pub fn scaffold(
    mut state: ProjectState,
    renderer: &dyn TemplateRenderer,
    identity: &dyn IdentityProvider,
) -> Result<ProjectState> {
    if !state.answers.setup_docs {
        return Ok(state);
    }

    let username = resolve_username(identity);
    let tokens = substitutions(&state, &username);
    let written = render_docs(&state.root, renderer, &tokens)?;
    for path in &written {
        println!("Created: '{}'", path.display());
    }

    let added = add_docs_dependencies(&state.root)?;
    debug!("Added {added} documentation dependencies");

    state.username = Some(username);
    Ok(state)
}
