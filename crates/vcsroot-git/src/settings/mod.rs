//! Effective settings of a Git root, as the host system interprets them.
//!
//! [`GitVcsRoot`] stores whatever was assigned and never complains about
//! missing fields. `GitSettings` is the consumer-side view: it applies the
//! host system's defaults and requires a fetch URL.

mod auth;
mod tagger;

pub use auth::AuthSettings;
pub use tagger::Tagger;

use tracing::debug;
use vcsroot_core::{Result, VcsRootError};

use crate::enums::{AgentCleanFilesPolicy, AgentCleanPolicy, CheckoutSubmodules, UserNameStyle};
use crate::keys;
use crate::root::GitVcsRoot;

/// Agent-side clean behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentCleanup {
    pub policy: AgentCleanPolicy,
    pub files_policy: AgentCleanFilesPolicy,
}

impl AgentCleanup {
    /// Returns true if the agent ever removes files from the checkout.
    pub fn is_enabled(&self) -> bool {
        self.policy != AgentCleanPolicy::Never
            && self.files_policy != AgentCleanFilesPolicy::IgnoredOnly
    }
}

impl Default for AgentCleanup {
    fn default() -> Self {
        Self {
            policy: AgentCleanPolicy::OnBranchChange,
            files_policy: AgentCleanFilesPolicy::AllUntracked,
        }
    }
}

/// Resolved view of a [`GitVcsRoot`] with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitSettings {
    fetch_url: String,
    push_url: String,
    branch: String,
    branch_spec: Option<String>,
    user_name_style: UserNameStyle,
    checkout_submodules: CheckoutSubmodules,
    tagger: Option<Tagger>,
    agent_git_path: Option<String>,
    cleanup: AgentCleanup,
    use_mirrors: bool,
    use_tags_as_branches: bool,
    server_side_auto_crlf: bool,
    auth: AuthSettings,
}

impl GitSettings {
    /// Resolves the effective settings of `root`.
    ///
    /// # Errors
    ///
    /// Returns `MissingParameter` if the fetch URL is not set, and
    /// `UnknownVariant` if any enumeration field holds an unknown constant.
    pub fn resolve(root: &GitVcsRoot) -> Result<Self> {
        let fetch_url = root
            .url()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| VcsRootError::missing_parameter(keys::URL.key()))?
            .to_string();
        let push_url = root
            .push_url()
            .filter(|url| !url.is_empty())
            .unwrap_or(fetch_url.as_str())
            .to_string();
        let branch = root
            .branch()
            .filter(|b| !b.trim().is_empty())
            .unwrap_or(keys::DEFAULT_BRANCH)
            .to_string();

        let cleanup = AgentCleanup {
            policy: root
                .agent_clean_policy()?
                .unwrap_or(AgentCleanPolicy::OnBranchChange),
            files_policy: root
                .agent_clean_files_policy()?
                .unwrap_or(AgentCleanFilesPolicy::AllUntracked),
        };

        let settings = Self {
            push_url,
            branch,
            branch_spec: root.branch_spec().map(str::to_string),
            user_name_style: root.user_name_style()?.unwrap_or(UserNameStyle::UserId),
            checkout_submodules: root
                .checkout_submodules()?
                .unwrap_or(CheckoutSubmodules::Ignore),
            tagger: root.user_for_tags().map(Tagger::parse),
            agent_git_path: root.agent_git_path().map(str::to_string),
            cleanup,
            use_mirrors: root.use_mirrors(),
            use_tags_as_branches: root.use_tags_as_branches(),
            server_side_auto_crlf: root.server_side_auto_crlf(),
            auth: AuthSettings::from_params(root.params())?,
            fetch_url,
        };

        debug!(
            fetch_url = %settings.fetch_url,
            branch = %settings.branch,
            auth = %settings.auth.method(),
            "resolved git root settings"
        );
        Ok(settings)
    }

    pub fn fetch_url(&self) -> &str {
        &self.fetch_url
    }

    /// Push URL, falling back to the fetch URL.
    pub fn push_url(&self) -> &str {
        &self.push_url
    }

    /// Default branch, `master` when none is configured.
    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn branch_spec(&self) -> Option<&str> {
        self.branch_spec.as_deref()
    }

    pub fn user_name_style(&self) -> UserNameStyle {
        self.user_name_style
    }

    pub fn checkout_submodules_policy(&self) -> CheckoutSubmodules {
        self.checkout_submodules
    }

    /// Returns true if submodules are checked out.
    pub fn checkout_submodules(&self) -> bool {
        self.checkout_submodules == CheckoutSubmodules::SubmodulesCheckout
    }

    /// Identity used for tags; `None` means the repository's own identity.
    pub fn tagger(&self) -> Option<&Tagger> {
        self.tagger.as_ref()
    }

    pub fn agent_git_path(&self) -> Option<&str> {
        self.agent_git_path.as_deref()
    }

    pub fn cleanup(&self) -> AgentCleanup {
        self.cleanup
    }

    pub fn use_mirrors(&self) -> bool {
        self.use_mirrors
    }

    pub fn use_tags_as_branches(&self) -> bool {
        self.use_tags_as_branches
    }

    pub fn server_side_auto_crlf(&self) -> bool {
        self.server_side_auto_crlf
    }

    pub fn auth(&self) -> &AuthSettings {
        &self.auth
    }
}
