//! The Git VCS root entity.

use std::ops::Deref;

use tracing::debug;
use vcsroot_core::{Param, ParameterStore, Result, VcsRoot, VcsRootError, VcsRootId};

use crate::enums::{AgentCleanFilesPolicy, AgentCleanPolicy, AuthMethod, CheckoutSubmodules, UserNameStyle};
use crate::keys;

/// A VCS root describing how the CI system fetches a Git repository.
///
/// Every field is stored as a string parameter of the underlying
/// [`VcsRoot`]; nothing is required at construction and unset fields are
/// simply absent from the store. Read access to the wrapped root goes
/// through `Deref`; mutation is limited to identity and parameters, so the
/// type discriminator stays `jetbrains.git`.
///
/// # Example
///
/// ```
/// use vcsroot_git::{AuthMethod, GitVcsRoot};
///
/// let root = GitVcsRoot::new(|r| {
///     r.set_id("Project_Sources");
///     r.set_url("git@example.com:org/repo.git");
///     r.set_branch("refs/heads/main");
///     r.set_auth_method(AuthMethod::PrivateKeyDefault);
/// });
///
/// assert_eq!(root.vcs_type(), "jetbrains.git");
/// assert_eq!(root.params().get("authMethod"), Some("PRIVATE_KEY_DEFAULT"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitVcsRoot {
    root: VcsRoot,
}

impl GitVcsRoot {
    /// Creates a root and applies `init` to it.
    pub fn new(init: impl FnOnce(&mut GitVcsRoot)) -> Self {
        Self::build(VcsRoot::new(keys::VCS_TYPE), init)
    }

    /// Creates a root seeded with a copy of `base`, then applies `init`.
    ///
    /// Fields assigned by `init` override the base values in the new root
    /// only; `base` is left untouched.
    pub fn with_base(base: &GitVcsRoot, init: impl FnOnce(&mut GitVcsRoot)) -> Self {
        Self::build(VcsRoot::from_base(keys::VCS_TYPE, &base.root), init)
    }

    fn build(root: VcsRoot, init: impl FnOnce(&mut GitVcsRoot)) -> Self {
        let mut git = Self { root };
        init(&mut git);
        debug!(
            id = git.root.id().map(|id| id.as_str()),
            params = git.root.params().len(),
            "git root configured"
        );
        git
    }

    /// Unwraps the generic root.
    pub fn into_inner(self) -> VcsRoot {
        self.root
    }

    /// Assigns the root id.
    pub fn set_id(&mut self, id: impl Into<VcsRootId>) {
        self.root.set_id(id);
    }

    /// Sets the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.root.set_name(name);
    }

    /// Sets the description; an empty string clears it.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.root.set_description(description);
    }

    /// Returns the parameter store for direct modification.
    pub fn params_mut(&mut self) -> &mut ParameterStore {
        self.root.params_mut()
    }

    /// Removes a field from the store.
    pub fn clear<T>(&mut self, param: Param<T>) {
        param.clear(self.root.params_mut());
    }

    /// Renders `<url>#<branch>`, the way the host system names a Git root.
    pub fn describe(&self) -> String {
        let branch = self
            .branch()
            .filter(|b| !b.trim().is_empty())
            .unwrap_or(keys::DEFAULT_BRANCH);
        format!("{}#{}", self.url().unwrap_or_default(), branch)
    }

    fn read_str(&self, param: Param<String>) -> Option<&str> {
        param.read_str(self.root.params())
    }

    fn write_str(&mut self, param: Param<String>, value: impl Into<String>) {
        param.write(self.root.params_mut(), value.into());
    }

    // ------------------------------------------------------------------
    // Repository location
    // ------------------------------------------------------------------

    /// Fetch URL of the repository.
    pub fn url(&self) -> Option<&str> {
        self.read_str(keys::URL)
    }

    /// Sets the fetch URL.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.write_str(keys::URL, url);
    }

    /// Push URL, when it differs from the fetch URL.
    pub fn push_url(&self) -> Option<&str> {
        self.read_str(keys::PUSH_URL)
    }

    /// Sets the push URL.
    pub fn set_push_url(&mut self, url: impl Into<String>) {
        self.write_str(keys::PUSH_URL, url);
    }

    /// Default branch.
    pub fn branch(&self) -> Option<&str> {
        self.read_str(keys::BRANCH)
    }

    /// Sets the default branch.
    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.write_str(keys::BRANCH, branch);
    }

    /// Branch specification, one `+:`/`-:` rule per line.
    pub fn branch_spec(&self) -> Option<&str> {
        self.read_str(keys::BRANCH_SPEC)
    }

    /// Sets the branch specification.
    pub fn set_branch_spec(&mut self, spec: impl Into<String>) {
        self.write_str(keys::BRANCH_SPEC, spec);
    }

    /// Whether tags are reported as branches.
    pub fn use_tags_as_branches(&self) -> bool {
        keys::USE_TAGS_AS_BRANCHES.read_flag(self.root.params())
    }

    /// Enables or disables reporting tags as branches.
    pub fn set_use_tags_as_branches(&mut self, enabled: bool) {
        keys::USE_TAGS_AS_BRANCHES.write(self.root.params_mut(), enabled);
    }

    /// How VCS user names are presented to CI users.
    pub fn user_name_style(&self) -> Result<Option<UserNameStyle>> {
        keys::USER_NAME_STYLE.read(self.root.params())
    }

    /// Sets the user name style.
    pub fn set_user_name_style(&mut self, style: UserNameStyle) {
        keys::USER_NAME_STYLE.write(self.root.params_mut(), style);
    }

    /// Submodule checkout policy.
    pub fn checkout_submodules(&self) -> Result<Option<CheckoutSubmodules>> {
        keys::CHECKOUT_SUBMODULES.read(self.root.params())
    }

    /// Sets the submodule checkout policy.
    pub fn set_checkout_submodules(&mut self, policy: CheckoutSubmodules) {
        keys::CHECKOUT_SUBMODULES.write(self.root.params_mut(), policy);
    }

    /// Identity used when labeling, as `Name <email>`.
    pub fn user_for_tags(&self) -> Option<&str> {
        self.read_str(keys::USER_FOR_TAGS)
    }

    /// Sets the labeling identity.
    pub fn set_user_for_tags(&mut self, user: impl Into<String>) {
        self.write_str(keys::USER_FOR_TAGS, user);
    }

    /// Whether line endings are converted on the server side.
    pub fn server_side_auto_crlf(&self) -> bool {
        keys::SERVER_SIDE_AUTO_CRLF.read_flag(self.root.params())
    }

    /// Enables or disables server-side line ending conversion.
    pub fn set_server_side_auto_crlf(&mut self, enabled: bool) {
        keys::SERVER_SIDE_AUTO_CRLF.write(self.root.params_mut(), enabled);
    }

    // ------------------------------------------------------------------
    // Agent checkout
    // ------------------------------------------------------------------

    /// Path to the git executable on build agents.
    pub fn agent_git_path(&self) -> Option<&str> {
        self.read_str(keys::AGENT_GIT_PATH)
    }

    /// Sets the agent git executable path.
    pub fn set_agent_git_path(&mut self, path: impl Into<String>) {
        self.write_str(keys::AGENT_GIT_PATH, path);
    }

    /// When agents clean the working directory.
    pub fn agent_clean_policy(&self) -> Result<Option<AgentCleanPolicy>> {
        keys::AGENT_CLEAN_POLICY.read(self.root.params())
    }

    /// Sets the agent clean policy.
    pub fn set_agent_clean_policy(&mut self, policy: AgentCleanPolicy) {
        keys::AGENT_CLEAN_POLICY.write(self.root.params_mut(), policy);
    }

    /// Which files an agent clean removes.
    pub fn agent_clean_files_policy(&self) -> Result<Option<AgentCleanFilesPolicy>> {
        keys::AGENT_CLEAN_FILES_POLICY.read(self.root.params())
    }

    /// Sets the agent clean files policy.
    pub fn set_agent_clean_files_policy(&mut self, policy: AgentCleanFilesPolicy) {
        keys::AGENT_CLEAN_FILES_POLICY.write(self.root.params_mut(), policy);
    }

    /// Whether agents use mirrors (git alternates) for checkout.
    pub fn use_mirrors(&self) -> bool {
        keys::USE_MIRRORS.read_flag(self.root.params())
    }

    /// Enables or disables agent mirrors.
    pub fn set_use_mirrors(&mut self, enabled: bool) {
        keys::USE_MIRRORS.write(self.root.params_mut(), enabled);
    }

    // ------------------------------------------------------------------
    // Authentication
    // ------------------------------------------------------------------

    /// Authentication method.
    pub fn auth_method(&self) -> Result<Option<AuthMethod>> {
        keys::AUTH_METHOD.read(self.root.params())
    }

    /// Sets the authentication method.
    pub fn set_auth_method(&mut self, method: AuthMethod) {
        keys::AUTH_METHOD.write(self.root.params_mut(), method);
    }

    /// User name for authentication.
    pub fn user_name(&self) -> Option<&str> {
        self.read_str(keys::USER_NAME)
    }

    /// Sets the authentication user name.
    pub fn set_user_name(&mut self, user_name: impl Into<String>) {
        self.write_str(keys::USER_NAME, user_name);
    }

    /// Password or access token, stored under a secure key.
    pub fn password(&self) -> Option<&str> {
        self.read_str(keys::PASSWORD)
    }

    /// Sets the password or access token.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.write_str(keys::PASSWORD, password);
    }

    /// Name of an SSH key uploaded to the CI server.
    pub fn uploaded_key(&self) -> Option<&str> {
        self.read_str(keys::UPLOADED_KEY)
    }

    /// Sets the uploaded SSH key name.
    pub fn set_uploaded_key(&mut self, key_name: impl Into<String>) {
        self.write_str(keys::UPLOADED_KEY, key_name);
    }

    /// Path to a private key file.
    pub fn custom_key_path(&self) -> Option<&str> {
        self.read_str(keys::CUSTOM_KEY_PATH)
    }

    /// Sets the private key file path.
    pub fn set_custom_key_path(&mut self, path: impl Into<String>) {
        self.write_str(keys::CUSTOM_KEY_PATH, path);
    }

    /// Passphrase of the private key, stored under a secure key.
    pub fn passphrase(&self) -> Option<&str> {
        self.read_str(keys::PASSPHRASE)
    }

    /// Sets the private key passphrase.
    pub fn set_passphrase(&mut self, passphrase: impl Into<String>) {
        self.write_str(keys::PASSPHRASE, passphrase);
    }

    /// Whether SSH host key checks are skipped.
    pub fn ignore_known_hosts(&self) -> bool {
        keys::IGNORE_KNOWN_HOSTS.read_flag(self.root.params())
    }

    /// Sets whether SSH host key checks are skipped.
    pub fn set_ignore_known_hosts(&mut self, ignore: bool) {
        keys::IGNORE_KNOWN_HOSTS.write(self.root.params_mut(), ignore);
    }
}

impl Default for GitVcsRoot {
    fn default() -> Self {
        Self::new(|_| {})
    }
}

impl Deref for GitVcsRoot {
    type Target = VcsRoot;

    fn deref(&self) -> &Self::Target {
        &self.root
    }
}

impl TryFrom<VcsRoot> for GitVcsRoot {
    type Error = VcsRootError;

    fn try_from(root: VcsRoot) -> Result<Self> {
        if root.vcs_type() != keys::VCS_TYPE {
            return Err(VcsRootError::type_mismatch(keys::VCS_TYPE, root.vcs_type()));
        }
        Ok(Self { root })
    }
}

impl From<GitVcsRoot> for VcsRoot {
    fn from(git: GitVcsRoot) -> Self {
        git.root
    }
}
