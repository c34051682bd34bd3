use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::Sandbox;

const MULTI_DAY: &str =
    r#"{"sessions":[["2024-01-01T10:00:00","2024-01-03T14:00:00"]]}"#;

#[test]
fn test_total_since_skips_older_days() {
    let sb = Sandbox::new();
    sb.write_record("work", MULTI_DAY);

    sb.pc()
        .args(["total", "work", "2024-01-02"])
        .assert()
        .success()
        .stdout(contains(
            "Total time elapsed in work since 2024-01-02: 38:00:00",
        ));

    sb.pc()
        .args(["t", "work", "2023-12-31"])
        .assert()
        .success()
        .stdout(contains("52:00:00"));
}

#[test]
fn test_malformed_dates_exit_one() {
    let sb = Sandbox::new();
    sb.write_record("work", MULTI_DAY);

    sb.pc()
        .args(["total", "work", "01/02/2024"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Invalid date format"))
        .stdout(contains("Total time").not());

    sb.pc()
        .args(["pd", "work", "2024-01-01", "nope"])
        .assert()
        .failure()
        .code(1)
        .stdout(contains("Punchclock").not());
}

#[test]
fn test_plot_dates_shows_every_day_in_range() {
    let sb = Sandbox::new();
    sb.write_record("work", MULTI_DAY);

    sb.pc()
        .args(["plot-dates", "work", "2023-12-31", "2024-01-04"])
        .assert()
        .success()
        .stdout(contains("Work Punchclock Sun 2023/12/31 - Thu 2024/01/04"))
        .stdout(contains("Sun 2023/12/31 │"))
        .stdout(contains("Mon 2024/01/01 │"))
        .stdout(contains("10:00 AM - 11:59 PM"))
        .stdout(contains("12:00 AM - 02:00 PM"))
        .stdout(contains("Thu 2024/01/04 │"));
}

#[test]
fn test_plot_recent_days_skips_empty_ones() {
    let sb = Sandbox::new();
    sb.write_record(
        "work",
        r#"{"sessions":[
            ["2024-01-01T09:00:00","2024-01-01T10:00:00"],
            ["2024-01-05T09:00:00","2024-01-05T10:00:00"],
            ["2024-01-09T09:00:00","2024-01-09T10:00:00"]
        ]}"#,
    );

    sb.pc()
        .args(["p", "work", "--days", "2"])
        .assert()
        .success()
        .stdout(contains("Work Punchclock Fri 2024/01/05 - Tue 2024/01/09"))
        .stdout(contains("Fri 2024/01/05 │"))
        .stdout(contains("Tue 2024/01/09 │"))
        .stdout(contains("Sat 2024/01/06").not())
        .stdout(contains("Mon 2024/01/01").not());
}

#[test]
fn test_config_formats_are_used() {
    let sb = Sandbox::new();
    sb.write_record("work", MULTI_DAY);

    let conf_dir = sb.home().join(".punchclock");
    std::fs::create_dir_all(&conf_dir).unwrap();
    std::fs::write(
        conf_dir.join("punchclock.conf"),
        "time_format: \"%H:%M\"\ndate_format: \"%d.%m.%Y\"\ndate_input_format: \"%d.%m.%Y\"\n",
    )
    .unwrap();

    sb.pc()
        .args(["pd", "work", "01.01.2024", "03.01.2024"])
        .assert()
        .success()
        .stdout(contains("01.01.2024 │"))
        .stdout(contains("10:00 - 23:59"));
}
