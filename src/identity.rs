//! Author identity and source-host lookups.
//!
//! The workflow only sees [`IdentityProvider`]; [`GitIdentity`] reads the
//! ambient git configuration through libgit2. Every lookup is optional and
//! a failure degrades to `None`.

use std::path::{Path, PathBuf};

use log::debug;
use url::Url;

use crate::constants::{DEFAULT_REMOTE, PLACEHOLDER_USERNAME};

/// Source of optional author identity and remote information.
pub trait IdentityProvider {
    /// `user.name` from version-control configuration.
    fn user_name(&self) -> Option<String>;
    /// `user.email` from version-control configuration.
    fn user_email(&self) -> Option<String>;
    /// URL of the remote used to guess the source-host username.
    fn remote_url(&self) -> Option<String>;
}

/// Identity backed by git configuration and the repository at `root`.
pub struct GitIdentity {
    root: PathBuf,
}

impl GitIdentity {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn config_string(&self, key: &str) -> Option<String> {
        // Prefer the repository config so local overrides apply.
        let config = match git2::Repository::discover(&self.root) {
            Ok(repo) => repo.config(),
            Err(_) => git2::Config::open_default(),
        };
        match config.and_then(|config| config.get_string(key)) {
            Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
            Ok(_) => None,
            Err(e) => {
                debug!("git config {key} unavailable: {}", e.message());
                None
            }
        }
    }
}

impl IdentityProvider for GitIdentity {
    fn user_name(&self) -> Option<String> {
        self.config_string("user.name")
    }

    fn user_email(&self) -> Option<String> {
        self.config_string("user.email")
    }

    fn remote_url(&self) -> Option<String> {
        let repo = git2::Repository::discover(&self.root).ok()?;
        let remote = repo.find_remote(DEFAULT_REMOTE).ok()?;
        remote.url().map(str::to_string)
    }
}

/// Extracts the GitHub username from a remote URL.
///
/// Accepts `git@github.com:<user>/<repo>` and `https://github.com/<user>/<repo>`.
/// Returns `None` for anything else.
pub fn parse_github_username(remote_url: &str) -> Option<String> {
    let remote_url = remote_url.trim();

    if let Some(path) = remote_url.strip_prefix("git@github.com:") {
        return path
            .split('/')
            .next()
            .filter(|user| !user.is_empty())
            .map(str::to_string);
    }

    let url = Url::parse(remote_url).ok()?;
    if url.scheme() != "https" || url.host_str() != Some("github.com") {
        return None;
    }
    let mut segments = url.path_segments()?;
    let user = segments.next().filter(|user| !user.is_empty())?;
    // A bare profile URL names no repository.
    segments.next().filter(|repo| !repo.is_empty())?;
    Some(user.to_string())
}

/// Resolves the username used in rendered documentation, falling back to
/// [`PLACEHOLDER_USERNAME`].
pub fn resolve_username(identity: &dyn IdentityProvider) -> String {
    match identity.remote_url() {
        Some(url) => parse_github_username(&url).unwrap_or_else(|| {
            debug!("Unrecognized remote url '{url}', using placeholder username");
            PLACEHOLDER_USERNAME.to_string()
        }),
        None => {
            debug!("No remote configured, using placeholder username");
            PLACEHOLDER_USERNAME.to_string()
        }
    }
}
