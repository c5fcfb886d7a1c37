// Regression tests: CLI faults are rendered with miette diagnostics and the
// coverage audit stays clean.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn cli_audit_passes_on_the_shipped_builder_set() {
    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.arg("audit");
    cmd.assert()
        .success()
        .stdout(contains("Coverage audit passed"));
}

#[test]
fn cli_kinds_lists_a_single_grammar() {
    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.arg("kinds").arg("--grammar").arg("markup");
    cmd.assert()
        .success()
        .stdout(contains("HTMLElement"))
        .stdout(contains("HTMLText"));
}

#[test]
fn cli_kinds_rejects_an_unknown_grammar() {
    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.arg("kinds").arg("--grammar").arg("fortran");
    cmd.assert().failure().stderr(contains("Unknown grammar"));
}

#[test]
fn cli_build_prints_the_fragment_as_json() {
    let fixture = "tests/node_infix.json";
    fs::write(
        fixture,
        r#"{"kind":"JSBinaryExpression","text":"+","slots":[["left",{"kind":"JSNumericLiteral","text":"1"}],["right",{"kind":"JSNumericLiteral","text":"2"}]]}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.arg("build").arg(fixture);
    cmd.assert()
        .success()
        .stdout(contains("Group"))
        .stdout(contains(" + "));

    // Clean up
    let _ = fs::remove_file(fixture);
}

#[test]
fn cli_build_reports_miette_diagnostics_on_unknown_kind() {
    // A kind no grammar declares faults with the tag in the diagnostic.
    let fixture = "tests/node_unknown.json";
    fs::write(
        fixture,
        r#"{"kind":"JSWidget","span":{"start":4,"end":10}}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.arg("build").arg(fixture);
    cmd.assert()
        .failure()
        .stderr(contains("galley::dispatch").and(contains("JSWidget")));

    // Clean up
    let _ = fs::remove_file(fixture);
}
