//! Project manifest (`pyproject.toml`) editing.
//!
//! The manifest is parsed into an order-preserving table, edited field by
//! field and written back, so untouched fields survive the round trip.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use toml::{Table, Value};

use crate::constants::MANIFEST_FILE;
use crate::error::{Error, Result};
use crate::state::ProjectState;

/// Path of the build-packaging package list inside the manifest.
pub const PACKAGES_PATH: [&str; 5] = ["tool", "hatch", "build", "targets", "wheel"];

/// A single `project.authors` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// A loaded `pyproject.toml`.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    doc: Table,
}

impl Manifest {
    /// Reads and parses the manifest at `path`.
    ///
    /// # Errors
    /// * `Error::ManifestError` if the file is missing, is not valid TOML, or
    ///   has no `[project]` table
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::ManifestError(format!(
                "{} does not exist",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let doc: Table = content
            .parse()
            .map_err(|e| Error::ManifestError(format!("{}: {}", path.display(), e)))?;

        if !doc.get("project").is_some_and(Value::is_table) {
            return Err(Error::ManifestError(format!(
                "{} has no [project] table",
                path.display()
            )));
        }

        debug!("Loaded manifest {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }

    fn project_mut(&mut self) -> Result<&mut Table> {
        self.doc
            .get_mut("project")
            .and_then(Value::as_table_mut)
            .ok_or_else(|| Error::ManifestError("missing [project] table".to_string()))
    }

    /// Overwrites `project.name`, `project.description` and `project.authors`.
    pub fn set_project_metadata(
        &mut self,
        name: &str,
        description: &str,
        author: &Author,
    ) -> Result<()> {
        let project = self.project_mut()?;
        project.insert("name".to_string(), Value::String(name.to_string()));
        project.insert(
            "description".to_string(),
            Value::String(description.to_string()),
        );

        let mut entry = Table::new();
        entry.insert("name".to_string(), Value::String(author.name.clone()));
        entry.insert("email".to_string(), Value::String(author.email.clone()));
        project.insert(
            "authors".to_string(),
            Value::Array(vec![Value::Table(entry)]),
        );
        Ok(())
    }

    /// Overwrites the package list used by the build backend, creating the
    /// enclosing tables when absent.
    pub fn set_packages(&mut self, packages: &[&str]) -> Result<()> {
        let mut table = &mut self.doc;
        for key in PACKAGES_PATH {
            table = table
                .entry(key.to_string())
                .or_insert_with(|| Value::Table(Table::new()))
                .as_table_mut()
                .ok_or_else(|| {
                    Error::ManifestError(format!("'{key}' in {} is not a table", PACKAGES_PATH.join(".")))
                })?;
        }
        table.insert(
            "packages".to_string(),
            Value::Array(packages.iter().map(|p| Value::String(p.to_string())).collect()),
        );
        Ok(())
    }

    /// Adds `dependencies` to `[dependency-groups].<group>`, skipping entries
    /// already present. Returns how many were added.
    pub fn add_group_dependencies(&mut self, group: &str, dependencies: &[&str]) -> Result<usize> {
        let groups = self
            .doc
            .entry("dependency-groups".to_string())
            .or_insert_with(|| Value::Table(Table::new()))
            .as_table_mut()
            .ok_or_else(|| Error::ManifestError("'dependency-groups' is not a table".to_string()))?;

        let list = groups
            .entry(group.to_string())
            .or_insert_with(|| Value::Array(Vec::new()))
            .as_array_mut()
            .ok_or_else(|| {
                Error::ManifestError(format!("dependency group '{group}' is not a list"))
            })?;

        let mut added = 0;
        for dependency in dependencies {
            if list.iter().any(|v| v.as_str() == Some(*dependency)) {
                continue;
            }
            list.push(Value::String(dependency.to_string()));
            added += 1;
        }
        Ok(added)
    }

    /// Returns the entries of a dependency group, if it exists.
    pub fn group_dependencies(&self, group: &str) -> Vec<String> {
        self.doc
            .get("dependency-groups")
            .and_then(|groups| groups.get(group))
            .and_then(Value::as_array)
            .map(|list| {
                list.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Serializes the document back to its path.
    pub fn save(&self) -> Result<()> {
        let content =
            toml::to_string(&self.doc).map_err(|e| Error::ManifestError(e.to_string()))?;
        fs::write(&self.path, content)?;
        debug!("Wrote manifest {}", self.path.display());
        Ok(())
    }
}

/// Configuration rewrite step.
///
/// Writes the collected name, description and author into the manifest and,
/// when the package is being renamed, points the build backend at the new
/// module directory.
pub fn rewrite_manifest(state: ProjectState) -> Result<ProjectState> {
    let mut manifest = Manifest::load(state.root.join(MANIFEST_FILE))?;
    manifest.set_project_metadata(
        &state.answers.project_name,
        &state.answers.project_description,
        &state.author(),
    )?;
    if state.relocation_required() {
        manifest.set_packages(&[state.module_name.as_str()])?;
    }
    manifest.save()?;
    Ok(state)
}
