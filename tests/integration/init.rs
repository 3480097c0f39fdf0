use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_init_creates_manifest() {
    let project = TestProject::new().unwrap();

    project
        .naming()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    let content = std::fs::read_to_string(project.manifest_path()).unwrap();
    assert!(content.contains("[conventions.service]"));
}

#[test]
fn test_init_then_generate() {
    let project = TestProject::new().unwrap();
    project.run_ok(&["init"]);

    let stdout =
        project.run_ok(&["generate", "api", "--convention", "service", "-i", "type=service"]);
    let name = stdout.trim();

    // (name)-(env)-(type)-(suffix) with env default "dev", type capped at 4, suffix of 4
    assert!(name.starts_with("api-dev-serv-"), "unexpected name: {name}");
    assert_eq!(name.len(), "api-dev-serv-".len() + 4);
}

#[test]
fn test_init_existing_manifest_requires_force() {
    let project = TestProject::new().unwrap();
    project.write_manifest("# mine").unwrap();

    project
        .naming()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    assert_eq!(std::fs::read_to_string(project.manifest_path()).unwrap(), "# mine");

    project.naming().args(["init", "--force"]).assert().success();
    assert_ne!(std::fs::read_to_string(project.manifest_path()).unwrap(), "# mine");
}

#[test]
fn test_init_with_path() {
    let project = TestProject::new().unwrap();

    project.naming().args(["init", "--path", "infra"]).assert().success();
    assert!(project.project_path().join("infra").join("naming.toml").exists());
}
