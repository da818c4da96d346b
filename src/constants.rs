//! Fixed layout of the python template this tool customizes.

/// Project manifest file name
pub const MANIFEST_FILE: &str = "pyproject.toml";

/// Build-automation file name
pub const MAKEFILE: &str = "Makefile";

/// Variable in the Makefile holding the source package name
pub const MAKEFILE_MODULE_VAR: &str = "MODULE_NAME";

/// Generic package directory shipped with the template
pub const LEGACY_SOURCE_DIR: &str = "src";

/// Package marker written into a freshly created module directory
pub const PACKAGE_MARKER: &str = "__init__.py";

pub const TESTS_DIR: &str = "tests";

/// Directory names a fresh template checkout may carry
pub const TEMPLATE_DIR_NAMES: [&str; 2] = ["python-template", "python-project-template"];

pub const VCS_DIR: &str = ".git";

pub const DEFAULT_PROJECT_NAME: &str = "my-python-project";
pub const DEFAULT_PROJECT_DESCRIPTION: &str = "A Python project";
pub const DEFAULT_AUTHOR_NAME: &str = "Your Name";
pub const DEFAULT_AUTHOR_EMAIL: &str = "your.email@example.com";

/// Substituted when no username can be read from the git remote
pub const PLACEHOLDER_USERNAME: &str = "your-username";

/// Remote consulted for the source-host username
pub const DEFAULT_REMOTE: &str = "origin";

/// Templates rendered when documentation is enabled, as (template, destination).
pub const DOCS_TEMPLATES: [(&str, &str); 5] = [
    ("templates/mkdocs.yml.template", "mkdocs.yml"),
    ("templates/docs/index.md.template", "docs/index.md"),
    (
        "templates/docs/getting-started.md.template",
        "docs/getting-started.md",
    ),
    (
        "templates/docs/reference/api.md.template",
        "docs/reference/api.md",
    ),
    (
        "templates/.github/workflows/docs.yml.template",
        ".github/workflows/docs.yml",
    ),
];

/// Dependency group receiving the documentation tooling
pub const DOCS_DEPENDENCY_GROUP: &str = "dev";
pub const DOCS_DEPENDENCIES: [&str; 2] = ["mkdocs-material>=9.5.0", "mkdocstrings[python]>=0.24.0"];

/// Sample-only paths removed by the placeholder policy, relative to the module directory
pub const SAMPLE_MODULE_EXTRAS: [&str; 1] = ["data_prep"];
/// Sample-only paths removed by the placeholder policy, relative to the tests directory
pub const SAMPLE_TEST_EXTRAS: [&str; 1] = ["test_categorical.py"];

pub const SAMPLE_MODULE_FILE: &str = "example.py";
pub const SAMPLE_TEST_FILE: &str = "test_example.py";

pub const BOOTSTRAP_COMMAND: &str = "uv sync";
pub const CLEAN_EXAMPLE_COMMAND: &str = "make clean-example";
pub const HOOKS_INSTALL_COMMAND: &str = "uv run pre-commit install";
pub const INITIAL_COMMIT_MESSAGE: &str = "feat: Initial project setup";

/// Reserved python words, lowercased, that cannot name an importable module
pub const PYTHON_KEYWORDS: [&str; 35] = [
    "false", "none", "true", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];
