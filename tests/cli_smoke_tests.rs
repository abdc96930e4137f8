mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn mycash() -> Command {
    let mut cmd = Command::cargo_bin("mycash").expect("binary built");
    cmd.env("MYCASH_CONFIG_DIR", common::temp_dir())
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn version_reports_crate_version() {
    mycash()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn sample_report_for_january() {
    mycash()
        .args(["--sample", "--month", "2026-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 7.300,00"))
        .stdout(predicate::str::contains("R$ 5.000,00"))
        .stdout(predicate::str::contains("Alimentação"))
        .stdout(predicate::str::contains("Cartão Nubank •••• 1234"))
        .stdout(predicate::str::contains("Nothing pending."));
}

#[test]
fn empty_json_file_reports_zero_balance() {
    let data = common::temp_dir().join("finance.json");
    mycash()
        .arg("--data")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 0,00"))
        .stdout(predicate::str::contains("No cards registered."));
}

#[test]
fn bad_month_exits_with_error() {
    mycash()
        .args(["--month", "2026-13"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: expected a month as YYYY-MM"));
}

#[test]
fn unknown_flag_exits_with_error() {
    mycash()
        .arg("--frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown argument `--frobnicate`"));
}
