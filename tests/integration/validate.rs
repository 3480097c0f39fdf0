use predicates::prelude::*;

use crate::common::TestProject;
use naming_cli::test_utils::ManifestFixture;

#[test]
fn test_validate_valid_manifest() {
    let project = TestProject::with_fixture(&ManifestFixture::basic()).unwrap();

    project
        .naming()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ service"))
        .stdout(predicate::str::contains("✓ storage"));
}

#[test]
fn test_validate_reports_every_error() {
    let project = TestProject::with_fixture(&ManifestFixture::with_invalid()).unwrap();

    project
        .naming()
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ broken"))
        .stdout(predicate::str::contains(
            "Convention Validate Error: The defined convention must include the block '(name)'.",
        ))
        .stdout(predicate::str::contains("Missing blocks: (type)"))
        .stderr(predicate::str::contains("1 convention(s) rejected"));
}

#[test]
fn test_validate_single_valid_convention() {
    let project = TestProject::with_fixture(&ManifestFixture::with_invalid()).unwrap();

    project.naming().args(["validate", "service"]).assert().success();
}

#[test]
fn test_validate_json_report() {
    let project = TestProject::with_fixture(&ManifestFixture::with_invalid()).unwrap();

    let output = project.naming().args(["validate", "--format", "json"]).assert().failure();
    let report: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();

    assert_eq!(report["valid"], false);
    assert_eq!(report["manifest_valid"], true);
    assert_eq!(report["conventions_checked"], 2);
    assert_eq!(report["errors"].as_array().unwrap().len(), 2);
    assert!(report["errors"][0].as_str().unwrap().starts_with("broken: "));
}

#[test]
fn test_validate_warnings_and_strict_mode() {
    let project = TestProject::with_fixture(&ManifestFixture::with_warnings()).unwrap();

    project
        .naming()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("declared more than once"))
        .stdout(predicate::str::contains("(Env) differs in case from (env)"))
        .stdout(predicate::str::contains("(zone) is not declared"));

    project
        .naming()
        .args(["validate", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Strict mode validation failed"));
}

#[test]
fn test_validate_unknown_convention_suggests() {
    let project = TestProject::with_fixture(&ManifestFixture::basic()).unwrap();

    project
        .naming()
        .args(["validate", "servce"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Convention 'servce' not found"))
        .stderr(predicate::str::contains("Did you mean: service?"));
}

#[test]
fn test_validate_invalid_syntax() {
    let project = TestProject::with_fixture(&ManifestFixture::invalid_syntax()).unwrap();

    project
        .naming()
        .args(["validate", "--format", "json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"valid\": false"));
}
