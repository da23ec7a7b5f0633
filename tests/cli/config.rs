//! Tests for store aliases in `.vaultdiff.toml`.

use crate::support::*;

#[test]
fn test_aliases_expand_to_locators() {
    let t = Test::new();
    t.store_dir("dev-secrets", &[("a", "1")]);
    t.snapshot("stage.toml", "[secrets]\na = \"1\"\n");
    t.config("[stores]\ndev = \"dev-secrets\"\nstage = \"stage.toml\"\n");

    let output = t.cmd().args(["compare", "dev", "stage"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "No differences found");
    assert_stdout_contains(&output, "dev-only secrets");
    assert_stdout_contains(&output, "stage-only secrets");
}

#[test]
fn test_explicit_config_flag() {
    let t = Test::new();
    t.store_dir("dev-secrets", &[("a", "1")]);
    let config = t.snapshot("aliases.toml", "[stores]\ndev = \"dev-secrets\"\n");

    let output = t
        .cmd()
        .arg("--config")
        .arg(&config)
        .args(["list", "dev"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Secrets from dev");
}

#[test]
fn test_explicit_config_missing() {
    let t = Test::new();
    t.store_dir("dev", &[]);

    let output = t
        .cmd()
        .args(["--config", "nope.toml", "list", "dev"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read config");
}

#[test]
fn test_malformed_config_fails() {
    let t = Test::new();
    t.store_dir("dev", &[]);
    t.config("[stores\n");

    let output = t.cmd().args(["list", "dev"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config");
}
