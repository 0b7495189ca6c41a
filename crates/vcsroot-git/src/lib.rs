//! # Git VCS root
//!
//! Typed schema for Git VCS roots of a CI system. Every field of
//! [`GitVcsRoot`] reads and writes a string parameter of the generic
//! [`VcsRoot`](vcsroot_core::VcsRoot), optionally under a renamed store key,
//! so the populated store can be handed to whatever renders the host
//! system's project configuration.
//!
//! ## Example
//!
//! ```
//! use vcsroot_git::{AuthMethod, GitSettings, GitVcsRoot};
//!
//! let template = GitVcsRoot::new(|r| {
//!     r.set_url("https://git.example.com/org/app.git");
//!     r.set_auth_method(AuthMethod::Password);
//!     r.set_user_name("ci");
//! });
//!
//! let release = GitVcsRoot::with_base(&template, |r| {
//!     r.set_name("Release branch");
//!     r.set_branch("refs/heads/release");
//!     r.set_use_mirrors(true);
//! });
//!
//! assert_eq!(release.params().get("useAlternates"), Some("true"));
//! assert_eq!(template.branch(), None);
//!
//! let settings = GitSettings::resolve(&release)?;
//! assert_eq!(settings.push_url(), "https://git.example.com/org/app.git");
//! # Ok::<(), vcsroot_core::VcsRootError>(())
//! ```

pub mod enums;
pub mod keys;
pub mod root;
pub mod settings;

// Re-exports
pub use enums::{AgentCleanFilesPolicy, AgentCleanPolicy, AuthMethod, CheckoutSubmodules, UserNameStyle};
pub use keys::VCS_TYPE;
pub use root::GitVcsRoot;
pub use settings::{AgentCleanup, AuthSettings, GitSettings, Tagger};

// Re-export vcsroot_core for consumers
pub use vcsroot_core;
