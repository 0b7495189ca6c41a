//! Store keys of the Git root fields.
//!
//! Fields whose store key differs from the field name are renamed to match
//! what the host system's Git plugin reads.

use vcsroot_core::Param;

use crate::enums::{AgentCleanFilesPolicy, AgentCleanPolicy, AuthMethod, CheckoutSubmodules, UserNameStyle};

/// Discriminator identifying a Git root to the host system.
pub const VCS_TYPE: &str = "jetbrains.git";

/// Branch used when none is configured.
pub const DEFAULT_BRANCH: &str = "master";

pub const URL: Param<String> = Param::new("url");
pub const PUSH_URL: Param<String> = Param::new("push_url");
pub const BRANCH: Param<String> = Param::new("branch");
pub const BRANCH_SPEC: Param<String> = Param::new("teamcity:branchSpec");
pub const USE_TAGS_AS_BRANCHES: Param<bool> = Param::new("reportTagRevisions");
pub const USER_NAME_STYLE: Param<UserNameStyle> = Param::new("usernameStyle");
pub const CHECKOUT_SUBMODULES: Param<CheckoutSubmodules> = Param::new("submoduleCheckout");
pub const USER_FOR_TAGS: Param<String> = Param::new("userForTags");
pub const SERVER_SIDE_AUTO_CRLF: Param<bool> = Param::new("serverSideAutoCrlf");
pub const AGENT_GIT_PATH: Param<String> = Param::new("agentGitPath");
pub const AGENT_CLEAN_POLICY: Param<AgentCleanPolicy> = Param::new("agentCleanPolicy");
pub const AGENT_CLEAN_FILES_POLICY: Param<AgentCleanFilesPolicy> = Param::new("agentCleanFilesPolicy");
pub const USE_MIRRORS: Param<bool> = Param::new("useAlternates");
pub const AUTH_METHOD: Param<AuthMethod> = Param::new("authMethod");
pub const USER_NAME: Param<String> = Param::new("username");
pub const PASSWORD: Param<String> = Param::new("secure:password");
pub const UPLOADED_KEY: Param<String> = Param::new("teamcitySshKey");
pub const CUSTOM_KEY_PATH: Param<String> = Param::new("privateKeyPath");
pub const PASSPHRASE: Param<String> = Param::new("secure:passphrase");
/// Skip host key verification for SSH connections.
pub const IGNORE_KNOWN_HOSTS: Param<bool> = Param::new("ignoreKnownHosts");
