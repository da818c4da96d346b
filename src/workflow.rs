//! Project rewrite orchestration.
//!
//! Runs the steps in their required order: manifest, relocation, example
//! policy, documentation, directory rename, bootstrap, repository reset.
//! The first failure aborts the run; nothing is rolled back.

use std::path::PathBuf;

use log::debug;

use crate::answers::{collect_answers, ExampleCodePolicy, PreloadedAnswers};
use crate::command::CommandRunner;
use crate::constants::SAMPLE_MODULE_EXTRAS;
use crate::error::Result;
use crate::identity::IdentityProvider;
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;
use crate::reset::{bootstrap_environment, is_template_dir, rename_directory, reset_repository};
use crate::rewrite::TextRewriter;
use crate::state::ProjectState;
use crate::{docs, manifest, package, sample};

const SUMMARY: &str = "Project initialized successfully!

Next steps:
{% for step in steps %}{{ loop.index }}. {{ step }}
{% endfor %}
Happy coding!
";

/// Legacy entries relocation left behind that the example policy did not
/// remove anyway.
fn unmigrated(state: &ProjectState) -> Vec<String> {
    let Some(relocation) = &state.relocation else {
        return Vec::new();
    };
    relocation
        .skipped
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| {
            state.answers.example_code == ExampleCodePolicy::Keep
                || !SAMPLE_MODULE_EXTRAS.contains(&name.as_str())
        })
        .collect()
}

/// Next steps printed after a successful run.
pub fn next_steps(state: &ProjectState) -> Vec<String> {
    let mut steps = vec![
        "Update README.md with your project details".to_string(),
        "Review and update CHANGELOG.md".to_string(),
        format!("Start adding your code in {}/", state.module_name),
    ];
    for name in unmigrated(state) {
        steps.push(format!(
            "Restore {}/{} into {}/ by hand; it was not migrated and has been removed",
            state.legacy_module, name, state.module_name
        ));
    }
    if state.answers.setup_docs {
        steps.push("Write your documentation in docs/".to_string());
        steps.push("Run 'make docs-serve' to preview the documentation".to_string());
    }
    steps.push("Run 'make check' to verify everything works".to_string());
    steps
}

/// Collaborators the workflow delegates to.
pub struct Workflow<'a> {
    pub prompt: &'a dyn Prompter,
    pub identity: &'a dyn IdentityProvider,
    pub runner: &'a dyn CommandRunner,
    /// Renders the on-disk `{token}` templates.
    pub tokens: &'a dyn TemplateRenderer,
    /// Renders built-in templates.
    pub engine: &'a dyn TemplateRenderer,
    pub rewriter: &'a dyn TextRewriter,
    /// Commit without running the freshly installed hooks.
    pub no_verify: bool,
    /// Change the process working directory along with a directory rename.
    pub follow_rename: bool,
}

impl Workflow<'_> {
    /// Collects answers and builds the initial state for `root`.
    pub fn prepare(&self, root: PathBuf, preloaded: PreloadedAnswers) -> Result<ProjectState> {
        let answers = collect_answers(self.prompt, self.identity, preloaded, is_template_dir(&root))?;
        debug!("Collected answers: {answers:?}");
        Ok(ProjectState::new(root, answers))
    }

    /// Runs every mutating step on `state`.
    pub fn execute(&self, state: ProjectState) -> Result<ProjectState> {
        println!("Updating project configuration...");
        let state = manifest::rewrite_manifest(state)?;

        println!("Setting up module '{}'...", state.module_name);
        let state = package::relocate(state, self.rewriter)?;

        println!("Applying example code policy: {}...", state.answers.example_code);
        let state = sample::apply_policy(state, self.engine, self.rewriter, self.runner)?;

        if state.answers.setup_docs {
            println!("Setting up documentation...");
        }
        let state = docs::scaffold(state, self.tokens, self.identity)?;

        let state = rename_directory(state, self.rewriter)?;
        if self.follow_rename && state.renamed_from.is_some() {
            std::env::set_current_dir(&state.root)?;
        }

        println!("Setting up development environment...");
        let state = bootstrap_environment(state, self.runner)?;

        println!("Reinitializing git repository...");
        reset_repository(state, self.runner, self.no_verify)
    }

    /// Collects answers, runs every step and returns the final state.
    pub fn run(&self, root: PathBuf, preloaded: PreloadedAnswers) -> Result<ProjectState> {
        let state = self.prepare(root, preloaded)?;
        self.execute(state)
    }

    /// Final summary with next steps.
    pub fn summary(&self, state: &ProjectState) -> Result<String> {
        let context = serde_json::json!({ "steps": next_steps(state) });
        self.engine.render(SUMMARY, &context)
    }
}
