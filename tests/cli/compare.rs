//! Tests for `vaultdiff compare`.

use crate::support::*;

#[test]
fn test_compare_one_sided() {
    let t = Test::new();
    let dev = t.store_dir("dev", &[("a", "1"), ("b", "2")]);
    let stage = t.store_dir("stage", &[("a", "1"), ("c", "3")]);

    let output = t.compare_json(&dev, &stage);
    assert_success(&output);

    let json = stdout_json(&output);
    let stats = &json["stats"];
    assert_eq!(stats["total"], 3);
    assert_eq!(stats["matching"], 1);
    assert_eq!(stats["differing"], 0);
    assert_eq!(stats["source_only"], 1);
    assert_eq!(stats["target_only"], 1);

    let entries = json["entries"].as_array().unwrap();
    let b = entries.iter().find(|e| e["id"] == "b").unwrap();
    assert_eq!(b["verdict"], "source_only");
    let c = entries.iter().find(|e| e["id"] == "c").unwrap();
    assert_eq!(c["verdict"], "target_only");
}

#[test]
fn test_compare_renders_differences() {
    let t = Test::new();
    let dev = t.store_dir("dev", &[("a", "1"), ("b", "2")]);
    let stage = t.store_dir("stage", &[("a", "1"), ("c", "3")]);

    let output = t.compare(&dev, &stage);
    assert_success(&output);
    assert_stdout_contains(&output, "Comparison Statistics");
    assert_stdout_contains(&output, "Differences Found");
    assert_stdout_contains(&output, "33.3%");
    assert_stdout_contains(&output, "Not Found");
}

#[test]
fn test_compare_differing_value() {
    let t = Test::new();
    let dev = t.store_dir("dev", &[("a", "1")]);
    let stage = t.snapshot("stage.toml", "[secrets]\na = \"2\"\n");

    let output = t.compare_json(&dev, &stage);
    assert_success(&output);

    let json = stdout_json(&output);
    assert_eq!(json["stats"]["differing"], 1);
    assert_eq!(json["stats"]["match_rate"], 0.0);
    let a = &json["entries"][0];
    assert_eq!(a["verdict"], "differ");
    assert_eq!(a["source"]["value"], "1");
    assert_eq!(a["target"]["value"], "2");
}

#[test]
fn test_compare_identical_stores() {
    let t = Test::new();
    let dev = t.store_dir("dev", SHARED_SECRETS);
    let stage = t.store_dir("stage", SHARED_SECRETS);

    let output = t.compare(&dev, &stage);
    assert_success(&output);
    assert_stdout_contains(&output, "No differences found");
    assert_stdout_contains(&output, "100.0%");
    assert_stdout_excludes(&output, "Differences Found");
}

#[test]
fn test_compare_empty_stores() {
    let t = Test::new();
    let dev = t.store_dir("dev", &[]);
    let stage = t.store_dir("stage", &[]);

    let output = t.compare_json(&dev, &stage);
    assert_success(&output);

    let json = stdout_json(&output);
    assert_eq!(json["stats"]["total"], 0);
    assert_eq!(json["stats"]["match_rate"], 0.0);
}

#[test]
fn test_compare_unresolved_is_not_one_sided() {
    let t = Test::new();
    let dev = t.store_dir("dev", &[("a", "1")]);
    let stage = t.store_dir("stage", &[]);
    t.unreadable_secret("stage", "a");

    let output = t.compare_json(&dev, &stage);
    assert_success(&output);

    let json = stdout_json(&output);
    assert_eq!(json["stats"]["differing"], 1);
    assert_eq!(json["stats"]["source_only"], 0);
    assert_eq!(json["entries"][0]["target"]["status"], "unresolved");
}

#[test]
fn test_compare_warns_about_unresolved() {
    let t = Test::new();
    let dev = t.store_dir("dev", &[("a", "1")]);
    let stage = t.store_dir("stage", &[("a", "1")]);
    t.unreadable_secret("stage", "b");

    let output = t.compare(&dev, &stage);
    assert_success(&output);
    assert_stdout_contains(&output, "1 of 2 secrets could not be retrieved");
}

#[test]
fn test_compare_json_carries_warnings() {
    let t = Test::new();
    let dev = t.store_dir("dev", &[("a", "1")]);
    let stage = t.store_dir("stage", &[("a", "1")]);
    t.unreadable_secret("stage", "b");

    let output = t.compare_json(&dev, &stage);
    assert_success(&output);

    let json = stdout_json(&output);
    assert!(json["source_warning"].is_null());
    assert_eq!(
        json["target_warning"],
        "1 of 2 secrets could not be retrieved"
    );
    assert_eq!(json["stats"]["target_only"], 1);
}

#[test]
fn test_compare_long_values_still_compared() {
    let t = Test::new();
    let long = long_value();
    let other = format!("{}y", &long[..300]);
    let dev = t.store_dir("dev", &[("CERT", long.as_str())]);
    let stage = t.store_dir("stage", &[("CERT", other.as_str())]);

    let output = t.compare(&dev, &stage);
    assert_success(&output);
    assert_stdout_contains(&output, "Different values");
    assert_stdout_contains(&output, "Value too long to display");
    assert_stdout_excludes(&output, &long);
}

#[test]
fn test_compare_fails_when_target_cannot_be_listed() {
    let t = Test::new();
    let dev = t.store_dir("dev", &[("a", "1")]);

    let output = t.compare(&dev, t.dir.path().join("missing.toml"));
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot list secrets");
}
