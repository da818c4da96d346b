//! retemplate's main application entry point.
//! Parses arguments, wires the production collaborators into the workflow
//! and reports the outcome.

use std::path::{Path, PathBuf};

use retemplate::{
    answers::PreloadedAnswers,
    cli::{get_args, Args},
    command::ShellRunner,
    error::{default_error_handler, Error, Result},
    identity::GitIdentity,
    logger::init_logger,
    prompt::{DefaultPrompter, DialoguerPrompter, Prompter},
    renderer::{MiniJinjaRenderer, TokenRenderer},
    rewrite::LiteralRewriter,
    workflow::Workflow,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Resolves the project directory to an absolute path so its name can be
/// inspected and it can be renamed.
fn resolve_project_dir<P: AsRef<Path>>(project_dir: P) -> Result<PathBuf> {
    let project_dir = project_dir.as_ref();
    if !project_dir.is_dir() {
        return Err(Error::ValidationError(format!(
            "{} is not a directory",
            project_dir.display()
        )));
    }
    Ok(project_dir.canonicalize()?)
}

fn load_preloaded(args: &Args) -> Result<PreloadedAnswers> {
    match (&args.answers, args.stdin) {
        (Some(path), _) => PreloadedAnswers::from_file(path),
        (None, true) => PreloadedAnswers::from_stdin(),
        (None, false) => Ok(PreloadedAnswers::default()),
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads preloaded answers and prompts for the rest
/// 2. Rewrites the manifest and relocates the package
/// 3. Applies the example-code policy and optional documentation
/// 4. Renames the directory, bootstraps and reinitializes git
fn run(args: Args) -> Result<()> {
    let root = resolve_project_dir(&args.project_dir)?;
    let preloaded = load_preloaded(&args)?;

    let prompt: Box<dyn Prompter> = if args.defaults {
        Box::new(DefaultPrompter::new())
    } else {
        Box::new(DialoguerPrompter::new())
    };
    let identity = GitIdentity::new(&root);
    let runner = ShellRunner::new();
    let tokens = TokenRenderer::new();
    let engine = MiniJinjaRenderer::new();
    let rewriter = LiteralRewriter::new();

    let workflow = Workflow {
        prompt: &*prompt,
        identity: &identity,
        runner: &runner,
        tokens: &tokens,
        engine: &engine,
        rewriter: &rewriter,
        no_verify: args.no_verify,
        follow_rename: true,
    };

    println!("Initializing new Python project in {}...", root.display());
    let state = workflow.run(root, preloaded)?;
    print!("{}", workflow.summary(&state)?);
    Ok(())
}
