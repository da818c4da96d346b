//! Workflow state threaded through every step.

use std::path::PathBuf;

use crate::answers::Answers;
use crate::constants::LEGACY_SOURCE_DIR;
use crate::manifest::Author;
use crate::package::{module_name, Relocation};

/// Collected answers plus everything resolved while the workflow runs.
#[derive(Debug, Clone)]
pub struct ProjectState {
    /// Root of the project being customized. Updated by the directory rename.
    pub root: PathBuf,
    pub answers: Answers,
    /// Module name derived from the project name.
    pub module_name: String,
    /// Package directory shipped with the template.
    pub legacy_module: String,
    /// Outcome of module relocation, once it ran.
    pub relocation: Option<Relocation>,
    /// Source-host username, resolved before the repository is reset.
    pub username: Option<String>,
    /// Previous root when the directory rename happened.
    pub renamed_from: Option<PathBuf>,
}

impl ProjectState {
    pub fn new(root: PathBuf, answers: Answers) -> Self {
        let module_name = module_name(&answers.project_name);
        Self {
            root,
            answers,
            module_name,
            legacy_module: LEGACY_SOURCE_DIR.to_string(),
            relocation: None,
            username: None,
            renamed_from: None,
        }
    }

    /// Whether the package directory needs a new name.
    pub fn relocation_required(&self) -> bool {
        self.module_name != self.legacy_module
    }

    pub fn author(&self) -> Author {
        Author {
            name: self.answers.author_name.clone(),
            email: self.answers.author_email.clone(),
        }
    }

    pub fn module_dir(&self) -> PathBuf {
        self.root.join(&self.module_name)
    }
}
