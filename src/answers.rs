//! Input collection.
//!
//! Gathers the project identity and workflow choices, either from preloaded
//! answers (stdin or an answers file) or by prompting. A preloaded key
//! suppresses its prompt.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use serde::Deserialize;

use crate::constants::{
    DEFAULT_AUTHOR_EMAIL, DEFAULT_AUTHOR_NAME, DEFAULT_PROJECT_DESCRIPTION, DEFAULT_PROJECT_NAME,
};
use crate::error::{Error, Result};
use crate::identity::IdentityProvider;
use crate::package::validate_project_name;
use crate::prompt::Prompter;

/// What happens to the sample code shipped with the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleCodePolicy {
    /// Keep the sample code, fixing its imports for the new module name.
    Keep,
    /// Replace it with a minimal two-function module and one test.
    Placeholder,
    /// Remove it entirely.
    Delete,
}

impl ExampleCodePolicy {
    pub const ALL: [ExampleCodePolicy; 3] = [Self::Keep, Self::Placeholder, Self::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::Placeholder => "placeholder",
            Self::Delete => "delete",
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Self::Keep => "Keep the example code",
            Self::Placeholder => "Replace it with a minimal placeholder",
            Self::Delete => "Delete it",
        }
    }
}

impl fmt::Display for ExampleCodePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExampleCodePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| {
                Error::ValidationError(format!(
                    "unknown example code policy '{s}' (expected keep, placeholder or delete)"
                ))
            })
    }
}

/// Everything collected before the workflow mutates anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub project_name: String,
    pub project_description: String,
    pub author_name: String,
    pub author_email: String,
    pub example_code: ExampleCodePolicy,
    pub setup_docs: bool,
    pub install_hooks: bool,
    pub rename_directory: bool,
}

/// Answers supplied up front. Missing keys fall back to prompting.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreloadedAnswers {
    pub project_name: Option<String>,
    pub project_description: Option<String>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    /// Policy name, parsed with [`ExampleCodePolicy::from_str`].
    pub example_code: Option<String>,
    pub setup_docs: Option<bool>,
    pub install_hooks: Option<bool>,
    pub rename_directory: Option<bool>,
}

impl PreloadedAnswers {
    /// Parses answers as JSON, falling back to YAML.
    ///
    /// Empty input yields no preloaded answers.
    pub fn parse(content: &str) -> Result<Self> {
        let content = content.trim();
        if content.is_empty() {
            return Ok(Self::default());
        }

        match serde_json::from_str(content) {
            Ok(answers) => Ok(answers),
            Err(json_err) => serde_yaml::from_str(content).map_err(|yaml_err| {
                Error::AnswersError(format!(
                    "not valid JSON ({json_err}) nor YAML ({yaml_err})"
                ))
            }),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading answers from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn from_stdin() -> Result<Self> {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Self::parse(&buffer)
    }
}

/// Collects answers, prompting only for keys not preloaded.
///
/// # Arguments
/// * `prompt` - Prompter used for every missing answer
/// * `identity` - Supplies git identity defaults for the author questions
/// * `preloaded` - Answers known up front
/// * `rename_eligible` - Whether the directory rename question applies at all
///
/// # Errors
/// * `Error::ValidationError` if a preloaded project name or policy is invalid
/// * `Error::PromptError` if prompting fails
pub fn collect_answers(
    prompt: &dyn Prompter,
    identity: &dyn IdentityProvider,
    preloaded: PreloadedAnswers,
    rename_eligible: bool,
) -> Result<Answers> {
    let project_name = match preloaded.project_name {
        Some(name) => {
            validate_project_name(&name)?;
            name
        }
        None => prompt.text(
            "Project name",
            DEFAULT_PROJECT_NAME,
            Some(validate_project_name),
        )?,
    };

    let project_description = match preloaded.project_description {
        Some(description) => description,
        None => prompt.text("Project description", DEFAULT_PROJECT_DESCRIPTION, None)?,
    };

    let author_name = match preloaded.author_name {
        Some(name) => name,
        None => {
            let default = identity
                .user_name()
                .unwrap_or_else(|| DEFAULT_AUTHOR_NAME.to_string());
            prompt.text("Author name", &default, None)?
        }
    };

    let author_email = match preloaded.author_email {
        Some(email) => email,
        None => {
            let default = identity
                .user_email()
                .unwrap_or_else(|| DEFAULT_AUTHOR_EMAIL.to_string());
            prompt.text("Author email", &default, None)?
        }
    };

    let example_code = match preloaded.example_code {
        Some(policy) => policy.parse::<ExampleCodePolicy>()?,
        None => {
            let choices: Vec<&str> = ExampleCodePolicy::ALL.iter().map(|p| p.describe()).collect();
            let index = prompt.select("What should happen to the example code?", &choices, 0)?;
            ExampleCodePolicy::ALL[index]
        }
    };

    let setup_docs = match preloaded.setup_docs {
        Some(value) => value,
        None => prompt.confirm("Set up MkDocs documentation?", false)?,
    };

    let install_hooks = match preloaded.install_hooks {
        Some(value) => value,
        None => prompt.confirm("Install pre-commit hooks?", true)?,
    };

    let rename_directory = if !rename_eligible {
        false
    } else {
        match preloaded.rename_directory {
            Some(value) => value,
            None => prompt.confirm(
                &format!("Rename the project directory to '{project_name}'?"),
                true,
            )?,
        }
    };

    Ok(Answers {
        project_name,
        project_description,
        author_name,
        author_email,
        example_code,
        setup_docs,
        install_hooks,
        rename_directory,
    })
}
