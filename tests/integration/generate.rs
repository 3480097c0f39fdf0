use predicates::prelude::*;

use crate::common::TestProject;
use naming_cli::test_utils::ManifestFixture;

#[test]
fn test_generate_reference_example() {
    let project = TestProject::with_fixture(&ManifestFixture::basic()).unwrap();

    let stdout =
        project.run_ok(&["generate", "foobar", "--convention", "service", "-i", "type=service"]);
    assert_eq!(stdout.trim(), "foobar-serv-default");
}

#[test]
fn test_generate_uses_manifest_generated_length() {
    let project = TestProject::new().unwrap();
    project
        .write_manifest(
            r#"
[settings]
generated_length = 5

[conventions.tagged]
definition = "(name)-(tag)"
variables = [{ name = "tag", generated = true }]
"#,
        )
        .unwrap();

    let stdout = project.run_ok(&["generate", "app", "-c", "tagged"]);
    let name = stdout.trim();
    assert!(name.starts_with("app-"));
    assert_eq!(name.len(), "app-".len() + 5);
    assert!(name["app-".len()..].chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn test_generate_json_output() {
    let project = TestProject::with_fixture(&ManifestFixture::basic()).unwrap();

    let stdout = project.run_ok(&[
        "generate",
        "data",
        "--convention",
        "storage",
        "--input",
        "env=production",
        "--format",
        "json",
    ]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(value["convention"], "storage");
    assert_eq!(value["id"], "(name)(env)(suffix)/data");
    assert_eq!(value["name"], "data");
    let result = value["result"].as_str().unwrap();
    assert!(result.starts_with("datapro"));
    assert_eq!(result.len(), "datapro".len() + 4);
}

#[test]
fn test_generate_from_exported_json_file() {
    let project = TestProject::with_fixture(&ManifestFixture::basic()).unwrap();

    let exported = project.run_ok(&["export", "service"]);
    project.write_file("service.json", &exported).unwrap();
    // The manifest is not needed once the convention is exported
    std::fs::remove_file(project.manifest_path()).unwrap();

    let stdout = project.run_ok(&[
        "generate",
        "foobar",
        "--json-file",
        "service.json",
        "-i",
        "type=service",
    ]);
    assert_eq!(stdout.trim(), "foobar-serv-default");
}

#[test]
fn test_generate_from_inline_json_with_name_input() {
    let project = TestProject::new().unwrap();
    let json = r#"{"definition":"(name)-(env)","variables":[{"name":"\"env\"","default":"<null>","generated":"<null>","max_length":"<null>"}]}"#;

    let stdout =
        project.run_ok(&["generate", "--json", json, "-i", "name=api", "-i", "env=prd"]);
    assert_eq!(stdout.trim(), "api-prd");
}

#[test]
fn test_generate_missing_inputs() {
    let project = TestProject::with_fixture(&ManifestFixture::basic()).unwrap();

    project
        .naming()
        .args(["generate", "foobar", "--convention", "service"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Missing inputs: type"))
        .stderr(predicate::str::contains("--input KEY=VALUE"));
}

#[test]
fn test_generate_empty_value_fails() {
    let project = TestProject::with_fixture(&ManifestFixture::basic()).unwrap();

    project
        .naming()
        .args(["generate", "foobar", "--convention", "service", "-i", "type="])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing value \"type\""));
}

#[test]
fn test_generate_malformed_json() {
    let project = TestProject::new().unwrap();

    project
        .naming()
        .args(["generate", "api", "--json", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed convention"));
}

#[test]
fn test_generate_warns_on_unused_input() {
    let project = TestProject::with_fixture(&ManifestFixture::basic()).unwrap();

    project
        .naming()
        .args(["generate", "foobar", "-c", "service", "-i", "type=svc", "-i", "tpye=x"])
        .assert()
        .success()
        .stdout("foobar-svc-default\n")
        .stderr(predicate::str::contains("Input 'tpye' is not used"))
        .stderr(predicate::str::contains("did you mean: type?"));
}

#[test]
fn test_generate_invalid_input_syntax() {
    let project = TestProject::with_fixture(&ManifestFixture::basic()).unwrap();

    project
        .naming()
        .args(["generate", "foobar", "-c", "service", "-i", "type"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input 'type': expected KEY=VALUE"));
}

#[test]
fn test_generate_without_subject_uses_declared_name_default() {
    let project = TestProject::new().unwrap();
    project
        .write_manifest(
            r#"
[conventions.fixed]
definition = "(name)-x"
variables = [{ name = "name", default = "svc" }]
"#,
        )
        .unwrap();

    let stdout = project.run_ok(&["generate", "-c", "fixed"]);
    assert_eq!(stdout.trim(), "svc-x");
}
