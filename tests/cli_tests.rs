//! CLI Tests
//!
//! End-to-end checks of the `allure-hosting` binary: synth/list/outputs
//! subcommands, context flags, output formats, exit codes, and the
//! warning/error reporting paths.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("allure-hosting").unwrap();
    // Pin the ambient environment so assertions are deterministic.
    cmd.env_remove("AWS_ACCOUNT_ID")
        .env_remove("AWS_DEFAULT_REGION")
        .env_remove("ALLURE_HOSTING_CONFIG");
    cmd
}

#[test]
fn test_synth_without_project_emits_empty_graph() {
    cmd()
        .arg("synth")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"stacks\": []"));
}

#[test]
fn test_synth_with_project_emits_one_stack() {
    cmd()
        .args(["-c", "project=myapp", "synth"])
        .env("AWS_ACCOUNT_ID", "123456789012")
        .assert()
        .success()
        .stdout(predicate::str::contains("myapp-allurehosting"))
        .stdout(predicate::str::contains("myapp-allure-hosting-123456789012"))
        .stdout(predicate::str::contains("ReportsBucket"));
}

#[test]
fn test_synth_yaml_format() {
    cmd()
        .args(["-c", "project=myapp", "--output-format", "yaml", "synth"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("stacks:"));
}

#[test]
fn test_synth_to_file_confirms_at_default_verbosity() {
    let path = std::env::temp_dir().join(format!(
        "allure-hosting-graph-{}.json",
        std::process::id()
    ));

    cmd()
        .args(["-c", "project=myapp", "synth", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote graph to"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("myapp-allurehosting"));
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_list_prints_stack_name() {
    cmd()
        .args(["-c", "project=myapp", "list"])
        .assert()
        .success()
        .stdout("myapp-allurehosting\n");
}

#[test]
fn test_list_without_project_prints_nothing() {
    cmd().arg("list").assert().success().stdout("");
}

#[test]
fn test_outputs_prints_bindings() {
    cmd()
        .args(["-c", "project=myapp", "outputs"])
        .env("AWS_ACCOUNT_ID", "123456789012")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "bucket = myapp-allure-hosting-123456789012",
        ))
        .stdout(predicate::str::contains(
            "cloudfront_domain = ${Cdn.domain_name}",
        ));
}

#[test]
fn test_outputs_json() {
    cmd()
        .args(["-c", "project=myapp", "outputs", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"bucket\""))
        .stdout(predicate::str::contains("\"cloudfront_domain\""));
}

#[test]
fn test_outputs_without_project_prints_nothing() {
    cmd().arg("outputs").assert().success().stdout("");
}

#[test]
fn test_malformed_context_flag_exits_with_code_2() {
    cmd()
        .args(["-c", "project", "synth"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("expected key=value"));
}

#[test]
fn test_unreadable_config_warns_and_falls_back() {
    cmd()
        .args(["--config", "/nonexistent/allure-hosting.toml", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"))
        .stderr(predicate::str::contains("Failed to load config"))
        .stdout("");
}

#[test]
fn test_unknown_subcommand_fails() {
    cmd().arg("deploy").assert().failure();
}
