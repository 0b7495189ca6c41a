use vcsroot_core::{DocumentFormat, VcsRoot, VcsRootError};
use vcsroot_git::{
    AgentCleanFilesPolicy, AgentCleanPolicy, AuthMethod, CheckoutSubmodules, GitVcsRoot,
    UserNameStyle, VCS_TYPE, keys,
};

#[test]
fn test_every_field_round_trips() {
    let root = GitVcsRoot::new(|r| {
        r.set_url("https://git.example.com/app.git");
        r.set_push_url("ssh://git@git.example.com/app.git");
        r.set_branch("refs/heads/main");
        r.set_branch_spec("+:refs/heads/*\n-:refs/heads/tmp/*");
        r.set_use_tags_as_branches(true);
        r.set_user_name_style(UserNameStyle::Name);
        r.set_checkout_submodules(CheckoutSubmodules::SubmodulesCheckout);
        r.set_user_for_tags("CI <ci@example.com>");
        r.set_server_side_auto_crlf(true);
        r.set_agent_git_path("/usr/local/bin/git");
        r.set_agent_clean_policy(AgentCleanPolicy::Always);
        r.set_agent_clean_files_policy(AgentCleanFilesPolicy::NonIgnoredOnly);
        r.set_use_mirrors(true);
        r.set_auth_method(AuthMethod::PrivateKeyFile);
        r.set_user_name("git");
        r.set_password("token");
        r.set_uploaded_key("deploy-key");
        r.set_custom_key_path("/keys/id_ed25519");
        r.set_passphrase("phrase");
    });

    assert_eq!(root.url(), Some("https://git.example.com/app.git"));
    assert_eq!(root.push_url(), Some("ssh://git@git.example.com/app.git"));
    assert_eq!(root.branch(), Some("refs/heads/main"));
    assert_eq!(root.branch_spec(), Some("+:refs/heads/*\n-:refs/heads/tmp/*"));
    assert!(root.use_tags_as_branches());
    assert_eq!(root.user_name_style().unwrap(), Some(UserNameStyle::Name));
    assert_eq!(
        root.checkout_submodules().unwrap(),
        Some(CheckoutSubmodules::SubmodulesCheckout)
    );
    assert_eq!(root.user_for_tags(), Some("CI <ci@example.com>"));
    assert!(root.server_side_auto_crlf());
    assert_eq!(root.agent_git_path(), Some("/usr/local/bin/git"));
    assert_eq!(root.agent_clean_policy().unwrap(), Some(AgentCleanPolicy::Always));
    assert_eq!(
        root.agent_clean_files_policy().unwrap(),
        Some(AgentCleanFilesPolicy::NonIgnoredOnly)
    );
    assert!(root.use_mirrors());
    assert_eq!(root.auth_method().unwrap(), Some(AuthMethod::PrivateKeyFile));
    assert_eq!(root.user_name(), Some("git"));
    assert_eq!(root.password(), Some("token"));
    assert_eq!(root.uploaded_key(), Some("deploy-key"));
    assert_eq!(root.custom_key_path(), Some("/keys/id_ed25519"));
    assert_eq!(root.passphrase(), Some("phrase"));
    assert_eq!(root.params().len(), 19);
}

#[test]
fn test_false_and_empty_read_like_unset() {
    let root = GitVcsRoot::new(|r| {
        r.set_use_mirrors(false);
        r.set_branch("");
    });

    assert!(!root.use_mirrors());
    assert_eq!(root.branch(), None);
    assert!(!root.params().contains_key("branch"));
}

#[test]
fn test_empty_string_clears_previous_value() {
    let mut root = GitVcsRoot::new(|r| r.set_user_name("ci"));
    root.set_user_name("");

    assert_eq!(root.user_name(), None);
    assert!(root.params().is_empty());
}

#[test]
fn test_base_values_visible_and_copied() {
    let base = GitVcsRoot::new(|r| r.set_url("https://x"));

    let derived = GitVcsRoot::with_base(&base, |r| {
        assert_eq!(r.url(), Some("https://x"));
        r.set_url("https://y");
    });

    assert_eq!(derived.url(), Some("https://y"));
    assert_eq!(base.url(), Some("https://x"));
}

#[test]
fn test_base_does_not_share_later_changes() {
    let mut base = GitVcsRoot::new(|r| r.set_branch("main"));
    let derived = GitVcsRoot::with_base(&base, |_| {});

    base.set_branch("develop");

    assert_eq!(derived.branch(), Some("main"));
}

#[test]
fn test_type_is_always_git() {
    let root = GitVcsRoot::new(|r| {
        r.set_id("Svn_Root");
        r.set_name("svn");
        r.set_description("jetbrains.svn");
        r.params_mut().insert("type", "svn");
        r.params_mut().insert("vcsType", "svn");
        r.set_url("https://x");
    });

    assert_eq!(root.vcs_type(), VCS_TYPE);
    assert_eq!(root.vcs_type(), "jetbrains.git");
    assert_eq!(root.params().get("type"), Some("svn"));

    let other = GitVcsRoot::with_base(&root, |r| {
        r.params_mut().insert("type", "perforce");
    });
    assert_eq!(other.vcs_type(), "jetbrains.git");

    let rendered = root.render(DocumentFormat::Json).unwrap();
    let reparsed = GitVcsRoot::try_from(VcsRoot::parse(&rendered, DocumentFormat::Json).unwrap())
        .unwrap();
    assert_eq!(reparsed.vcs_type(), "jetbrains.git");
}

#[test]
fn test_identity_setters_forward_to_root() {
    let root = GitVcsRoot::new(|r| {
        r.set_id("App_Sources");
        r.set_name("App sources");
        r.set_description("Main repository");
    });

    assert_eq!(root.id().map(|id| id.as_str()), Some("App_Sources"));
    assert_eq!(root.name(), "App sources");
    assert_eq!(root.description(), Some("Main repository"));

    let cleared = GitVcsRoot::with_base(&root, |r| r.set_description(""));
    assert_eq!(cleared.description(), None);
    assert_eq!(cleared.id(), None);
}

#[test]
fn test_auth_method_round_trip_and_absent() {
    let fresh = GitVcsRoot::default();
    assert_eq!(fresh.auth_method().unwrap(), None);

    let root = GitVcsRoot::new(|r| r.set_auth_method(AuthMethod::TeamcitySshKey));
    assert_eq!(root.auth_method().unwrap(), Some(AuthMethod::TeamcitySshKey));
    assert_eq!(root.params().get("authMethod"), Some("TEAMCITY_SSH_KEY"));
}

#[test]
fn test_use_mirrors_stored_under_alternates_key() {
    let root = GitVcsRoot::new(|r| r.set_use_mirrors(true));

    assert_eq!(root.params().get("useAlternates"), Some("true"));
    assert_eq!(root.params().get("useMirrors"), None);
    assert_eq!(keys::USE_MIRRORS.key(), "useAlternates");
}

#[test]
fn test_unrecognized_enum_value_fails_on_access() {
    let mut root = GitVcsRoot::default();
    root.params_mut().insert("authMethod", "KERBEROS");
    root.params_mut().insert("usernameStyle", "nickname");

    let err = root.auth_method().unwrap_err();
    match err {
        VcsRootError::UnknownVariant { key, value, .. } => {
            assert_eq!(key, "authMethod");
            assert_eq!(value, "KERBEROS");
        },
        other => panic!("Expected UnknownVariant, got {other:?}"),
    }
    assert!(root.user_name_style().unwrap_err().is_unknown_variant());
}

#[test]
fn test_secure_fields_are_tagged() {
    let root = GitVcsRoot::new(|r| {
        r.set_user_name("ci");
        r.set_password("token");
        r.set_passphrase("phrase");
    });

    let secure: Vec<&str> = root.params().secure_keys().collect();
    assert_eq!(secure, vec!["secure:password", "secure:passphrase"]);

    let public = root.params().public_params();
    assert_eq!(public.len(), 1);
    assert_eq!(public.get("username"), Some("ci"));
}

#[test]
fn test_assignment_order_is_store_order() {
    let root = GitVcsRoot::new(|r| {
        r.set_branch("main");
        r.set_url("https://x");
        r.set_auth_method(AuthMethod::Anonymous);
    });

    let keys: Vec<&str> = root.params().keys().collect();
    assert_eq!(keys, vec!["branch", "url", "authMethod"]);
}
