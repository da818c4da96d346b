mod common;

use common::{read, state, template_checkout, RecordingRunner};
use retemplate::answers::ExampleCodePolicy;
use retemplate::error::Error;
use retemplate::package::relocate;
use retemplate::renderer::MiniJinjaRenderer;
use retemplate::rewrite::LiteralRewriter;
use retemplate::sample::{apply_policy, import_replacements, rewrite_imports};

#[test]
fn test_import_replacements() {
    let pairs = import_replacements("src", "demo");
    assert!(pairs.contains(&("from src.".to_string(), "from demo.".to_string())));
    assert!(pairs.contains(&("import src.".to_string(), "import demo.".to_string())));
    assert!(pairs.contains(&("import src\n".to_string(), "import demo\n".to_string())));
}

#[test]
fn test_keep_rewrites_bare_package_imports() {
    let (_tmp, root) = template_checkout("python-template");
    std::fs::write(
        root.join("tests/test_package.py"),
        "import src\nimport src as pkg\nimport src, os\nimport srcutils\n",
    )
    .unwrap();
    let rewriter = LiteralRewriter::new();
    let state = relocate(state(&root, "demo-app"), &rewriter).unwrap();

    apply_policy(state, &MiniJinjaRenderer::new(), &rewriter, &RecordingRunner::new()).unwrap();

    assert_eq!(
        read(root.join("tests/test_package.py")),
        "import demo_app\nimport demo_app as pkg\nimport demo_app, os\nimport srcutils\n"
    );
}

#[test]
fn test_keep_rewrites_imports_after_relocation() {
    let (_tmp, root) = template_checkout("python-template");
    let rewriter = LiteralRewriter::new();
    let state = relocate(state(&root, "demo-app"), &rewriter).unwrap();

    apply_policy(state, &MiniJinjaRenderer::new(), &rewriter, &RecordingRunner::new()).unwrap();

    let test = read(root.join("tests/test_example.py"));
    assert!(test.contains("from demo_app.example import mean"));
    assert!(test.contains("import demo_app.example"));
    assert!(!test.contains("src."));
    assert!(read(root.join("demo_app/example.py")).contains("from demo_app.data_prep import"));
}

#[test]
fn test_keep_rewrites_imports_before_relocation() {
    let (_tmp, root) = template_checkout("python-template");
    let rewriter = LiteralRewriter::new();

    let rewritten = rewrite_imports(&state(&root, "demo-app"), &rewriter).unwrap();
    assert!(rewritten.contains(&root.join("src/example.py")));
    assert!(rewritten.contains(&root.join("tests/test_categorical.py")));

    relocate(state(&root, "demo-app"), &rewriter).unwrap();
    assert!(read(root.join("demo_app/example.py")).contains("from demo_app.data_prep import"));
}

#[test]
fn test_keep_without_relocation_changes_nothing() {
    let (_tmp, root) = template_checkout("python-template");
    let rewritten = rewrite_imports(&state(&root, "src"), &LiteralRewriter::new()).unwrap();
    assert!(rewritten.is_empty());
}

#[test]
fn test_placeholder_writes_module_and_test() {
    let (_tmp, root) = template_checkout("python-template");
    let rewriter = LiteralRewriter::new();
    let mut state = relocate(state(&root, "my-python-project"), &rewriter).unwrap();
    state.answers.example_code = ExampleCodePolicy::Placeholder;

    let runner = RecordingRunner::new();
    apply_policy(state, &MiniJinjaRenderer::new(), &rewriter, &runner).unwrap();

    let module = read(root.join("my_python_project/example.py"));
    assert!(module.contains("def hello(name: str) -> str:"));
    assert!(module.contains("return f\"Hello, {name}!\""));
    assert!(module.contains("def add(a: int, b: int) -> int:"));
    assert!(module.starts_with("\"\"\"my-python-project: A demo project\"\"\""));

    let test = read(root.join("tests/test_example.py"));
    assert_eq!(
        test,
        "from my_python_project.example import add\n\n\ndef test_add():\n    assert add(1, 2) == 3\n"
    );
    assert!(!root.join("tests/test_categorical.py").exists());
    assert!(runner.commands().is_empty());
}

#[test]
fn test_placeholder_removes_sample_subpackages() {
    let (_tmp, root) = template_checkout("python-template");
    let mut state = state(&root, "src");
    state.answers.example_code = ExampleCodePolicy::Placeholder;

    apply_policy(
        state,
        &MiniJinjaRenderer::new(),
        &LiteralRewriter::new(),
        &RecordingRunner::new(),
    )
    .unwrap();

    assert!(!root.join("src/data_prep").exists());
    assert!(read(root.join("tests/test_example.py")).starts_with("from src.example import add"));
}

#[test]
fn test_delete_runs_cleanup_and_creates_test_package() {
    let (_tmp, root) = template_checkout("python-template");
    std::fs::remove_dir_all(root.join("tests")).unwrap();
    let mut state = state(&root, "demo");
    state.answers.example_code = ExampleCodePolicy::Delete;

    let runner = RecordingRunner::new();
    apply_policy(state, &MiniJinjaRenderer::new(), &LiteralRewriter::new(), &runner).unwrap();

    assert_eq!(runner.commands(), vec!["make clean-example"]);
    assert_eq!(runner.commands.borrow()[0].1, root);
    assert_eq!(read(root.join("tests/__init__.py")), "");
}

#[test]
fn test_delete_cleanup_failure_is_fatal() {
    let (_tmp, root) = template_checkout("python-template");
    std::fs::remove_dir_all(root.join("tests")).unwrap();
    let mut state = state(&root, "demo");
    state.answers.example_code = ExampleCodePolicy::Delete;

    let runner = RecordingRunner::failing_on("make clean-example");
    let result = apply_policy(state, &MiniJinjaRenderer::new(), &LiteralRewriter::new(), &runner);

    assert!(matches!(result, Err(Error::CommandError { .. })));
    assert!(!root.join("tests").exists());
}
