use predicates::prelude::*;

use crate::common::TestProject;
use naming_cli::test_utils::ManifestFixture;

#[test]
fn test_list_text() {
    let project = TestProject::with_fixture(&ManifestFixture::basic()).unwrap();

    project
        .naming()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("service"))
        .stdout(predicate::str::contains("(name)-(type)-(default)"))
        .stdout(predicate::str::contains("Compute services"))
        .stdout(predicate::str::contains("storage"));
}

#[test]
fn test_list_json_marks_invalid() {
    let project = TestProject::with_fixture(&ManifestFixture::with_invalid()).unwrap();

    let stdout = project.run_ok(&["list", "--format", "json"]);
    let items: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let items = items.as_array().unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], "broken");
    assert_eq!(items[0]["valid"], false);
    assert_eq!(items[1]["id"], "service");
    assert_eq!(items[1]["valid"], true);
    assert_eq!(items[1]["variables"], serde_json::json!(["env"]));
}

#[test]
fn test_list_empty_manifest() {
    let project = TestProject::with_fixture(&ManifestFixture::empty()).unwrap();

    project
        .naming()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No conventions declared"));
}
