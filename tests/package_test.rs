mod common;

use std::fs;

use common::{read, state, template_checkout};
use retemplate::package::{relocate, relocate_module, rewrite_makefile_module};
use retemplate::rewrite::LiteralRewriter;
use tempfile::TempDir;

#[test]
fn test_relocation_moves_top_level_files() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("src")).unwrap();
    fs::write(root.join("src/foo.py"), "VALUE = 42\n").unwrap();

    let relocation = relocate_module(root, "src", "my_python_project").unwrap();

    assert!(relocation.created);
    assert!(relocation.removed_legacy);
    assert_eq!(relocation.migrated, vec![root.join("my_python_project/foo.py")]);
    assert_eq!(read(root.join("my_python_project/foo.py")), "VALUE = 42\n");
    assert!(root.join("my_python_project/__init__.py").exists());
    assert!(!root.join("src").exists());
}

#[test]
fn test_relocation_preserves_content_byte_for_byte() {
    let (_tmp, root) = template_checkout("python-template");
    let snapshot = TempDir::new().unwrap();
    for file in ["__init__.py", "example.py"] {
        fs::copy(root.join("src").join(file), snapshot.path().join(file)).unwrap();
    }

    relocate_module(&root, "src", "demo").unwrap();

    assert!(!dir_diff::is_different(snapshot.path(), root.join("demo")).unwrap());
}

#[test]
fn test_relocation_reports_skipped_subdirectories() {
    let (_tmp, root) = template_checkout("python-template");

    let relocation = relocate_module(&root, "src", "demo").unwrap();

    assert_eq!(relocation.skipped, vec![root.join("src/data_prep")]);
    assert!(!root.join("demo/data_prep").exists());
}

#[test]
fn test_relocation_is_idempotent() {
    let (_tmp, root) = template_checkout("python-template");

    let first = relocate_module(&root, "src", "demo").unwrap();
    assert!(!first.is_noop());

    let before = fs::read_dir(root.join("demo")).unwrap().count();
    let second = relocate_module(&root, "src", "demo").unwrap();
    assert!(second.is_noop());
    assert!(second.migrated.is_empty());
    assert_eq!(fs::read_dir(root.join("demo")).unwrap().count(), before);
}

#[test]
fn test_relocation_to_existing_module_keeps_it() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("demo")).unwrap();
    fs::write(root.join("demo/existing.py"), "x = 1\n").unwrap();

    let relocation = relocate_module(root, "src", "demo").unwrap();

    assert!(relocation.is_noop());
    assert!(!root.join("demo/__init__.py").exists());
    assert_eq!(read(root.join("demo/existing.py")), "x = 1\n");
}

#[test]
fn test_relocation_with_same_name_does_nothing() {
    let (_tmp, root) = template_checkout("python-template");

    let relocation = relocate_module(&root, "src", "src").unwrap();

    assert!(relocation.is_noop());
    assert!(root.join("src/example.py").exists());
}

#[test]
fn test_makefile_module_variable_rewrite() {
    let (_tmp, root) = template_checkout("python-template");
    let rewriter = LiteralRewriter::new();

    assert!(rewrite_makefile_module(&rewriter, &root, "src", "demo").unwrap());
    let makefile = read(root.join("Makefile"));
    assert!(makefile.starts_with("MODULE_NAME := demo\n"));
    assert!(makefile.contains("$(MODULE_NAME)/example.py"));

    assert!(!rewrite_makefile_module(&rewriter, &root, "src", "demo").unwrap());
}

#[test]
fn test_makefile_with_manual_edits_is_left_alone() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Makefile"), "MODULE_NAME=src\n").unwrap();

    let changed =
        rewrite_makefile_module(&LiteralRewriter::new(), dir.path(), "src", "demo").unwrap();

    assert!(!changed);
    assert_eq!(read(dir.path().join("Makefile")), "MODULE_NAME=src\n");
}

#[test]
fn test_relocate_step_end_to_end() {
    let (_tmp, root) = template_checkout("python-template");
    fs::write(root.join("src/foo.py"), "print('foo')\n").unwrap();

    let state = relocate(state(&root, "my-python-project"), &LiteralRewriter::new()).unwrap();

    assert_eq!(state.module_name, "my_python_project");
    assert_eq!(read(root.join("my_python_project/foo.py")), "print('foo')\n");
    assert!(!root.join("src").exists());
    assert!(read(root.join("Makefile")).contains("MODULE_NAME := my_python_project"));
    assert!(state.relocation.is_some());

    let again = relocate(state, &LiteralRewriter::new()).unwrap();
    assert!(again.relocation.unwrap().is_noop());
}
