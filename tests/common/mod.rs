#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use retemplate::answers::{Answers, ExampleCodePolicy};
use retemplate::command::CommandRunner;
use retemplate::error::{Error, Result};
use retemplate::identity::IdentityProvider;
use retemplate::state::ProjectState;
use tempfile::TempDir;

pub const PYPROJECT: &str = r#"[project]
name = "python-template"
version = "0.1.0"
description = "Template description"
readme = "README.md"
requires-python = ">=3.11"
dependencies = ["pandas>=2.0"]

[[project.authors]]
name = "Template Author"
email = "template@example.com"

[dependency-groups]
dev = ["pytest>=8.0", "ruff>=0.4"]

[build-system]
requires = ["hatchling"]
build-backend = "hatchling.build"

[tool.hatch.build.targets.wheel]
packages = ["src"]

[tool.ruff]
line-length = 100
"#;

pub const MAKEFILE: &str = "MODULE_NAME := src\n\
PROJECT_DIR := ../python-template\n\
\n\
check:\n\
\tuv run ruff check $(MODULE_NAME)\n\
\n\
clean-example:\n\
\trm -f $(MODULE_NAME)/example.py tests/test_example.py\n";

pub const DOC_TEMPLATES: [(&str, &str); 5] = [
    ("templates/mkdocs.yml.template", "site_name: {project_name}\nsite_description: {project_description}\nrepo_url: https://github.com/{github_username}/{project_name}\nplugins:\n  - search\n  - mkdocstrings\n"),
    ("templates/docs/index.md.template", "# {project_name}\n\n{project_description}\n"),
    ("templates/docs/getting-started.md.template", "pip install {project_name}\n\nimport {project_module_name}\n"),
    ("templates/docs/reference/api.md.template", "::: {project_module_name}\n\nMaintained by {author_name} <{author_email}>\n"),
    ("templates/.github/workflows/docs.yml.template", "name: docs\njobs:\n  deploy:\n    env:\n      TOKEN: ${{ secrets.GITHUB_TOKEN }}\n"),
];

/// Records commands instead of running them. Fails on `fail_on` if set.
#[derive(Default)]
pub struct RecordingRunner {
    pub commands: RefCell<Vec<(String, PathBuf)>>,
    pub fail_on: Option<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(command: &str) -> Self {
        Self {
            fail_on: Some(command.to_string()),
            ..Self::default()
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().iter().map(|(c, _)| c.clone()).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &str, cwd: &Path) -> Result<()> {
        self.commands
            .borrow_mut()
            .push((command.to_string(), cwd.to_path_buf()));
        if self.fail_on.as_deref() == Some(command) {
            return Err(Error::CommandError {
                command: command.to_string(),
                message: "command failed with status: exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Deterministic identity.
#[derive(Default)]
pub struct FakeIdentity {
    pub name: Option<String>,
    pub email: Option<String>,
    pub remote: Option<String>,
}

impl FakeIdentity {
    pub fn with_remote(remote: &str) -> Self {
        Self {
            remote: Some(remote.to_string()),
            ..Self::default()
        }
    }
}

impl IdentityProvider for FakeIdentity {
    fn user_name(&self) -> Option<String> {
        self.name.clone()
    }

    fn user_email(&self) -> Option<String> {
        self.email.clone()
    }

    fn remote_url(&self) -> Option<String> {
        self.remote.clone()
    }
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Creates a template checkout named `dir_name` inside a fresh temp dir.
pub fn template_checkout(dir_name: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join(dir_name);
    fs::create_dir_all(&root).unwrap();

    write(&root.join("pyproject.toml"), PYPROJECT);
    write(&root.join("Makefile"), MAKEFILE);
    write(&root.join("README.md"), "# python-template\n");
    write(&root.join("src/__init__.py"), "");
    write(
        &root.join("src/example.py"),
        "from src.data_prep import categorical\n\n\ndef mean(values):\n    return sum(values) / len(values)\n",
    );
    write(
        &root.join("src/data_prep/categorical.py"),
        "def lowercase_string(s):\n    return s.lower()\n",
    );
    write(&root.join("tests/__init__.py"), "");
    write(
        &root.join("tests/test_example.py"),
        "from src.example import mean\nimport src.example\n\n\ndef test_mean():\n    assert mean([1, 3]) == 2\n",
    );
    write(
        &root.join("tests/test_categorical.py"),
        "from src.data_prep.categorical import lowercase_string\n",
    );
    for (path, content) in DOC_TEMPLATES {
        write(&root.join(path), content);
    }

    (tmp, root)
}

pub fn answers(project_name: &str) -> Answers {
    Answers {
        project_name: project_name.to_string(),
        project_description: "A demo project".to_string(),
        author_name: "Ada Lovelace".to_string(),
        author_email: "ada@example.com".to_string(),
        example_code: ExampleCodePolicy::Keep,
        setup_docs: false,
        install_hooks: true,
        rename_directory: false,
    }
}

pub fn state(root: &Path, project_name: &str) -> ProjectState {
    ProjectState::new(root.to_path_buf(), answers(project_name))
}

pub fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}
