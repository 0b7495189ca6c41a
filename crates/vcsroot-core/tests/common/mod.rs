#![allow(dead_code)]
use vcsroot_core::VcsRoot;

/// Returns a Git-typed root with identity and a handful of parameters.
pub fn sample_root() -> VcsRoot {
    let mut root = VcsRoot::new("jetbrains.git");
    root.set_id("Project_MainRepo");
    root.set_name("Main repository");
    root.set_description("Primary sources");

    let params = root.params_mut();
    params.insert("url", "git@example.com:org/repo.git");
    params.insert("branch", "refs/heads/main");
    params.insert("teamcity:branchSpec", "+:refs/heads/*");
    params.insert("authMethod", "PRIVATE_KEY_FILE");
    params.insert("privateKeyPath", "/home/ci/.ssh/id_ed25519");
    params.insert("secure:passphrase", "open sesame");
    root
}

/// Helper to parse a root from JSON.
/// Panics if the JSON is invalid (intended for tests).
pub fn root_from_json(json: &str) -> VcsRoot {
    VcsRoot::parse(json, vcsroot_core::DocumentFormat::Json)
        .expect("Failed to create test root from JSON")
}
