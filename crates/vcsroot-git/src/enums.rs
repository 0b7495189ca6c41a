//! Closed enumerations used by Git root fields.
//!
//! Each constant is stored under its upper-case name, which is also what
//! `Display`, `FromStr` and serde use.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use vcsroot_core::{ParamEnum, VcsRootError};

fn parse_constant<E: ParamEnum>(type_name: &str, s: &str) -> Result<E, VcsRootError> {
    E::from_name(s).ok_or_else(|| VcsRootError::unknown_constant(type_name, s, &E::names()))
}

/// When the agent cleans the checkout directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentCleanPolicy {
    Never,
    Always,
    OnBranchChange,
}

impl ParamEnum for AgentCleanPolicy {
    const VARIANTS: &'static [Self] = &[Self::Never, Self::Always, Self::OnBranchChange];

    fn name(&self) -> &'static str {
        match self {
            Self::Never => "NEVER",
            Self::Always => "ALWAYS",
            Self::OnBranchChange => "ON_BRANCH_CHANGE",
        }
    }
}

/// Which files an agent-side clean removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentCleanFilesPolicy {
    /// Only files matched by `.gitignore`.
    IgnoredOnly,
    /// Only untracked files not matched by `.gitignore`.
    NonIgnoredOnly,
    AllUntracked,
}

impl ParamEnum for AgentCleanFilesPolicy {
    const VARIANTS: &'static [Self] = &[Self::IgnoredOnly, Self::NonIgnoredOnly, Self::AllUntracked];

    fn name(&self) -> &'static str {
        match self {
            Self::IgnoredOnly => "IGNORED_ONLY",
            Self::NonIgnoredOnly => "NON_IGNORED_ONLY",
            Self::AllUntracked => "ALL_UNTRACKED",
        }
    }
}

/// How commit authors are mapped to user names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserNameStyle {
    /// Name (John Smith)
    Name,
    /// User id based on email (jsmith)
    #[serde(rename = "USERID")]
    UserId,
    /// Email (jsmith@example.org)
    Email,
    /// Name and email (John Smith <jsmith@example.org>)
    Full,
}

impl ParamEnum for UserNameStyle {
    const VARIANTS: &'static [Self] = &[Self::Name, Self::UserId, Self::Email, Self::Full];

    fn name(&self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::UserId => "USERID",
            Self::Email => "EMAIL",
            Self::Full => "FULL",
        }
    }
}

/// Whether submodules are checked out along with the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckoutSubmodules {
    SubmodulesCheckout,
    Ignore,
}

impl ParamEnum for CheckoutSubmodules {
    const VARIANTS: &'static [Self] = &[Self::SubmodulesCheckout, Self::Ignore];

    fn name(&self) -> &'static str {
        match self {
            Self::SubmodulesCheckout => "SUBMODULES_CHECKOUT",
            Self::Ignore => "IGNORE",
        }
    }
}

/// How the CI system authenticates against the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthMethod {
    Anonymous,
    /// Username and password (or token).
    Password,
    /// A key uploaded to the CI server, referenced by name.
    TeamcitySshKey,
    /// The default private key of the user running the CI process.
    PrivateKeyDefault,
    /// A private key file on disk, optionally protected by a passphrase.
    PrivateKeyFile,
}

impl ParamEnum for AuthMethod {
    const VARIANTS: &'static [Self] = &[
        Self::Anonymous,
        Self::Password,
        Self::TeamcitySshKey,
        Self::PrivateKeyDefault,
        Self::PrivateKeyFile,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::Anonymous => "ANONYMOUS",
            Self::Password => "PASSWORD",
            Self::TeamcitySshKey => "TEAMCITY_SSH_KEY",
            Self::PrivateKeyDefault => "PRIVATE_KEY_DEFAULT",
            Self::PrivateKeyFile => "PRIVATE_KEY_FILE",
        }
    }
}

impl AuthMethod {
    /// Returns true for the methods that authenticate with an SSH key.
    pub fn uses_ssh_key(&self) -> bool {
        matches!(
            self,
            Self::TeamcitySshKey | Self::PrivateKeyDefault | Self::PrivateKeyFile
        )
    }
}

impl fmt::Display for AgentCleanPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for AgentCleanFilesPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for UserNameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for CheckoutSubmodules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AgentCleanPolicy {
    type Err = VcsRootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_constant("AgentCleanPolicy", s)
    }
}

impl FromStr for AgentCleanFilesPolicy {
    type Err = VcsRootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_constant("AgentCleanFilesPolicy", s)
    }
}

impl FromStr for UserNameStyle {
    type Err = VcsRootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_constant("UserNameStyle", s)
    }
}

impl FromStr for CheckoutSubmodules {
    type Err = VcsRootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_constant("CheckoutSubmodules", s)
    }
}

impl FromStr for AuthMethod {
    type Err = VcsRootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_constant("AuthMethod", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_serde() {
        for style in UserNameStyle::VARIANTS {
            let json = serde_json::to_string(style).unwrap();
            assert_eq!(json, format!("\"{}\"", style.name()));
        }
        for method in AuthMethod::VARIANTS {
            let json = serde_json::to_string(method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.name()));
        }
        for policy in AgentCleanFilesPolicy::VARIANTS {
            let json = serde_json::to_string(policy).unwrap();
            assert_eq!(json, format!("\"{}\"", policy.name()));
        }
    }

    #[test]
    fn test_from_str_and_display() {
        let method: AuthMethod = "TEAMCITY_SSH_KEY".parse().unwrap();
        assert_eq!(method, AuthMethod::TeamcitySshKey);
        assert_eq!(method.to_string(), "TEAMCITY_SSH_KEY");

        let policy: AgentCleanPolicy = "ON_BRANCH_CHANGE".parse().unwrap();
        assert_eq!(policy, AgentCleanPolicy::OnBranchChange);

        let submodules: CheckoutSubmodules = "SUBMODULES_CHECKOUT".parse().unwrap();
        assert_eq!(submodules, CheckoutSubmodules::SubmodulesCheckout);
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        let err = "userid".parse::<UserNameStyle>().unwrap_err();
        assert!(err.is_unknown_variant());
        assert!(
            matches!(&err, VcsRootError::UnknownConstant { type_name, value, .. }
                if type_name == "UserNameStyle" && value == "userid")
        );
        assert!(err.to_string().contains("NAME, USERID, EMAIL, FULL"));
    }

    #[test]
    fn test_variant_counts() {
        assert_eq!(AgentCleanPolicy::VARIANTS.len(), 3);
        assert_eq!(AgentCleanFilesPolicy::VARIANTS.len(), 3);
        assert_eq!(UserNameStyle::VARIANTS.len(), 4);
        assert_eq!(CheckoutSubmodules::VARIANTS.len(), 2);
        assert_eq!(AuthMethod::VARIANTS.len(), 5);
    }

    #[test]
    fn test_uses_ssh_key() {
        assert!(!AuthMethod::Anonymous.uses_ssh_key());
        assert!(!AuthMethod::Password.uses_ssh_key());
        assert!(AuthMethod::TeamcitySshKey.uses_ssh_key());
        assert!(AuthMethod::PrivateKeyFile.uses_ssh_key());
    }
}
