mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_show_without_file_prints_defaults() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found, using defaults"))
        .stdout(predicate::str::contains("base_url = \"http://localhost:5000\""))
        .stdout(predicate::str::contains("daily_refresh = \"06:00\""))
        .stdout(predicate::str::contains("[polling]"));
}

#[test]
fn test_init_writes_file_once() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    assert!(fixture.config_path().exists());

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    fixture
        .command()
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_show_reads_written_file() {
    let fixture = TestFixture::new();
    std::fs::create_dir_all(fixture.config_path().parent().unwrap()).unwrap();
    std::fs::write(
        fixture.config_path(),
        "base_url = \"http://board.local:8080\"\n",
    )
    .unwrap();

    fixture
        .command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://board.local:8080"))
        .stdout(predicate::str::contains("not found").not());
}

#[test]
fn test_show_rejects_bad_daily_refresh() {
    let fixture = TestFixture::new();
    std::fs::create_dir_all(fixture.config_path().parent().unwrap()).unwrap();
    std::fs::write(fixture.config_path(), "daily_refresh = \"6am\"\n").unwrap();

    fixture
        .command()
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("daily_refresh must be HH:MM"));
}
