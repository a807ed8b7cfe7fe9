use assert_cmd::Command;
use tempfile::tempdir;

fn td() -> Command {
    Command::cargo_bin("td").unwrap()
}

#[test]
fn full_session_survives_process_restarts() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("dashboard_data.json");
    let db = db_path.to_str().unwrap();

    // Each invocation is a separate process: everything below round-trips
    // through the JSON file.
    td().args(["--db", db, "new-project", "Course work", "--desc", "POO"])
        .assert()
        .success();
    td().args(["--db", db, "add", "Write the report", "--project", "1"])
        .assert()
        .success();
    td().args(["--db", db, "add", "Renew licence"])
        .assert()
        .success();
    td().args(["--db", db, "status", "2", "in-progress"])
        .assert()
        .success();
    td().args(["--db", db, "comment", "2", "waiting on paperwork"])
        .assert()
        .success();

    let out = td()
        .args(["--db", db, "stats"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Total projects:      1"));
    assert!(out.contains("Total tasks:         2"));
    assert!(out.contains("In progress:         1"));

    let out = td()
        .args(["--db", db, "view", "2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Renew licence"));
    assert!(out.contains("in-progress"));
    assert!(out.contains("waiting on paperwork"));
}

#[test]
fn invalid_status_is_rejected_and_the_task_is_unchanged() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("dashboard_data.json");
    let db = db_path.to_str().unwrap();

    td().args(["--db", db, "add", "Fix login"]).assert().success();

    let out = td()
        .args(["--db", db, "status", "1", "archived"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("invalid status"));

    let out = td()
        .args(["--db", db, "tasks"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("[1] Fix login - PENDING"));
}

#[test]
fn adding_a_task_to_a_missing_project_fails_cleanly() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("dashboard_data.json");
    let db = db_path.to_str().unwrap();

    let out = td()
        .args(["--db", db, "add", "Orphan", "--project", "999"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("project 999 not found"));

    td().args(["--db", db, "tasks"])
        .assert()
        .success()
        .stdout("No standalone tasks.\n");
}
