use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::Sandbox;

fn populate(sb: &Sandbox) {
    sb.write_record(
        "beta",
        r#"{"sessions":[["2024-01-01T09:00:00","2024-01-01T10:00:00"]]}"#,
    );
    sb.write_record(
        "alpha",
        r#"{"sessions":[["2024-01-01T09:00:00","2024-01-01T10:00:00"],["2024-01-02T09:00:00"]]}"#,
    );
    sb.write_record("gamma", r#"{"sessions":[["2024-01-03T09:00:00"]]}"#);
}

#[test]
fn test_list_is_sorted() {
    let sb = Sandbox::new();
    populate(&sb);

    for cmd in ["list", "l", "show", "s"] {
        sb.pc()
            .arg(cmd)
            .assert()
            .success()
            .stdout(contains("alpha\nbeta\ngamma\n"));
    }
}

#[test]
fn test_running_lists_open_clocks_only() {
    let sb = Sandbox::new();
    populate(&sb);

    sb.pc()
        .arg("r")
        .assert()
        .success()
        .stdout(contains("alpha\ngamma\n"))
        .stdout(contains("beta").not());
}

#[test]
fn test_empty_storage() {
    let sb = Sandbox::new();
    sb.pc().arg("list").assert().success().stdout(contains("No clocks yet."));
    sb.pc()
        .arg("running")
        .assert()
        .success()
        .stdout(contains("No clock is running."));
}
