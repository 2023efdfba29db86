use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(calendar: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("calendar.txt"), calendar).unwrap();
        Self { dir }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("sevendays").unwrap();
        cmd.env_remove("SEVENDAYS_FILE")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.dir.path().join("config.yaml"))
            .arg("--file")
            .arg(self.dir.path().join("calendar.txt"))
            .arg("--color")
            .arg("never");
        cmd
    }
}

const CALENDAR: &str = "\
Things to remember, not calendar entries.
every monday Standup
each FRIDAY Pub quiz
2024-01-01 New Year
2024-01-04 Dentist
8.1.2024 Review
2024-01-10 Too far
every someday Never
";

#[test]
fn test_linear_starts_today() {
    let fixture = Fixture::new(CALENDAR);
    let output = fixture
        .cmd()
        .args(["--today", "2024-01-03"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    assert!(stdout.starts_with("Wednesday:\nThursday:\n Dentist \nFriday:\n Pub quiz \n"));
    assert!(stdout.contains("Monday:\n Standup \n Review \nTuesday:\n"));
    assert!(!stdout.contains("New Year"));
    assert!(!stdout.contains("Too far"));
    assert!(!stdout.contains("Never"));
}

#[test]
fn test_from_sunday() {
    let fixture = Fixture::new(CALENDAR);
    fixture
        .cmd()
        .args(["--today", "2024-01-03", "--from-sunday"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Sunday:\nMonday:\n Standup "));
}

#[test]
fn test_grid() {
    let fixture = Fixture::new(CALENDAR);
    fixture
        .cmd()
        .args(["--today", "2024-01-03", "--grid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("│Sunday   │Monday   │Tuesday  │Wednesday│"))
        .stdout(predicate::str::contains("Pub quiz "))
        .stdout(predicate::str::contains("New Year").not());
}

#[test]
fn test_json() {
    let fixture = Fixture::new(CALENDAR);
    let output = fixture
        .cmd()
        .args(["--today", "2024-01-03", "-o", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(value["today"], "2024-01-03");
    assert_eq!(value["days"][0]["weekday"], "Wednesday");
    assert_eq!(value["days"][1]["entries"][0]["tier"], "imminent");
    assert_eq!(value["days"][5]["entries"][1]["text"], "Review ");
    assert_eq!(value["days"][5]["entries"][1]["tier"], "soon");
}

#[test]
fn test_missing_file_fails() {
    let fixture = Fixture::new("");
    std::fs::remove_file(fixture.dir.path().join("calendar.txt")).unwrap();

    fixture
        .cmd()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("calendar.txt"));
}

#[test]
fn test_short_year_from_config() {
    let fixture = Fixture::new("4.1 Dentist\n");
    std::fs::write(
        fixture.dir.path().join("config.yaml"),
        "dates:\n  short_year: current\n",
    )
    .unwrap();

    fixture
        .cmd()
        .args(["--today", "2024-01-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thursday:\n Dentist "));
}

#[test]
fn test_verbose_logs_skipped_lines() {
    let fixture = Fixture::new(CALENDAR);
    fixture
        .cmd()
        .args(["--today", "2024-01-03", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping line"));
}

#[test]
fn test_single_dash_file_flag() {
    let fixture = Fixture::new(CALENDAR);
    let mut cmd = Command::cargo_bin("sevendays").unwrap();
    cmd.env_remove("SEVENDAYS_FILE")
        .arg("--config")
        .arg(fixture.dir.path().join("config.yaml"))
        .arg("-file")
        .arg(fixture.dir.path().join("calendar.txt"))
        .args(["--color", "never", "--today", "2024-01-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Friday:\n Pub quiz "));
}
