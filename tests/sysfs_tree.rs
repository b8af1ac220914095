//! The sysfs front end against a fake `/sys/class/gpio` in a temp dir.
//!
//! The fake tree holds plain files, so "exporting" is only observable as
//! a write to `export`; pin directories are created by the tests.

use std::fs;
use std::path::Path;
use std::process::Command;

use gpio_utils::line::{Direction, LineValue};
use gpio_utils::sysfs::{self, Invocation, Sysfs};
use gpio_utils::{Error, SysfsAction};

// ─── Helpers ────────────────────────────────────────────────────────

fn fake_pin(root: &Path, pin: u32, direction: &str, value: &str) {
    let dir = root.join(format!("gpio{pin}"));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("direction"), format!("{direction}\n")).unwrap();
    fs::write(dir.join("value"), format!("{value}\n")).unwrap();
}

fn run_to_string(sysfs: &Sysfs, inv: &Invocation) -> (gpio_utils::Result<()>, String) {
    let mut out = Vec::new();
    let res = sysfs::run(sysfs, inv, &mut out);
    (res, String::from_utf8(out).unwrap())
}

// ─── Library ────────────────────────────────────────────────────────

#[test]
fn export_of_exported_pin_is_a_noop() {
    let root = tempfile::tempdir().unwrap();
    fake_pin(root.path(), 17, "in", "0");
    // No export file: any attempt to write it would fail.
    let sysfs = Sysfs::new(root.path());

    sysfs.export(17).unwrap();
    sysfs.export(17).unwrap();
    assert!(!root.path().join("export").exists());
}

#[test]
fn export_writes_the_pin_number() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("export"), "").unwrap();
    let sysfs = Sysfs::new(root.path());

    assert!(!sysfs.is_exported(23));
    sysfs.export(23).unwrap();
    assert_eq!(fs::read_to_string(root.path().join("export")).unwrap(), "23");
}

#[test]
fn export_failure_reports_the_os_error() {
    let root = tempfile::tempdir().unwrap();
    let sysfs = Sysfs::new(root.path());

    let err = sysfs.export(5).unwrap_err();
    assert!(matches!(
        err,
        Error::Sysfs {
            action: SysfsAction::Export,
            ..
        }
    ));
    let expected = std::io::Error::from_raw_os_error(libc::ENOENT).to_string();
    assert_eq!(err.to_string(), format!("Cannot export gpio: {expected}"));
}

#[test]
fn direction_and_value_round_trip() {
    let root = tempfile::tempdir().unwrap();
    fake_pin(root.path(), 4, "in", "0");
    let sysfs = Sysfs::new(root.path());

    sysfs.set_direction(4, Direction::Output).unwrap();
    sysfs.set_value(4, LineValue::Active).unwrap();

    assert_eq!(sysfs.direction(4).unwrap(), Direction::Output);
    assert_eq!(sysfs.value(4).unwrap(), LineValue::Active);

    sysfs.set_direction(4, Direction::Input).unwrap();
    assert_eq!(sysfs.direction(4).unwrap(), Direction::Input);
}

#[test]
fn run_sets_then_reports_nothing() {
    let root = tempfile::tempdir().unwrap();
    fake_pin(root.path(), 4, "in", "0");
    let sysfs = Sysfs::new(root.path());

    let (res, out) = run_to_string(
        &sysfs,
        &Invocation {
            pin: 4,
            direction: Some(Direction::Output),
            value: Some(LineValue::Active),
        },
    );
    res.unwrap();
    assert_eq!(out, "");
    assert_eq!(sysfs.value(4).unwrap(), LineValue::Active);
}

#[test]
fn run_reports_what_it_did_not_set() {
    let root = tempfile::tempdir().unwrap();
    fake_pin(root.path(), 9, "out", "1");
    let sysfs = Sysfs::new(root.path());

    let (res, out) = run_to_string(
        &sysfs,
        &Invocation {
            pin: 9,
            direction: None,
            value: None,
        },
    );
    res.unwrap();
    assert_eq!(out, "gpio direction = out\ngpio value = 1\n");
}

#[test]
fn run_stops_at_first_failure() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("gpio6");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("value"), "0\n").unwrap();
    let sysfs = Sysfs::new(root.path());

    let (res, out) = run_to_string(
        &sysfs,
        &Invocation {
            pin: 6,
            direction: None,
            value: Some(LineValue::Active),
        },
    );
    assert!(matches!(
        res,
        Err(Error::Sysfs {
            action: SysfsAction::GetDirection,
            ..
        })
    ));
    assert_eq!(out, "");
    // The value step never ran.
    assert_eq!(fs::read_to_string(dir.join("value")).unwrap(), "0\n");
}

// ─── Binary ─────────────────────────────────────────────────────────

fn gpio_sysfs(root: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gpio-sysfs"));
    cmd.env("GPIO_SYSFS_ROOT", root).env_remove("RUST_LOG");
    cmd
}

#[test]
fn binary_round_trip() {
    let root = tempfile::tempdir().unwrap();
    fake_pin(root.path(), 17, "in", "0");

    let status = gpio_sysfs(root.path())
        .args(["-n", "17", "-d", "out", "-v", "1"])
        .status()
        .unwrap();
    assert!(status.success());

    let out = gpio_sysfs(root.path()).args(["-n", "17"]).output().unwrap();
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "gpio direction = out\ngpio value = 1\n"
    );
}

#[test]
fn binary_without_number_prints_usage() {
    let root = tempfile::tempdir().unwrap();

    let out = gpio_sysfs(root.path()).args(["-d", "out"]).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Usage: gpio-sysfs -n NUM"));
    // Nothing was touched.
    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
}

#[test]
fn binary_reports_os_errors() {
    let root = tempfile::tempdir().unwrap();

    let out = gpio_sysfs(root.path()).args(["-n", "3"]).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("Cannot export gpio: "));
}

#[test]
fn binary_rejects_bad_value() {
    let root = tempfile::tempdir().unwrap();
    fake_pin(root.path(), 2, "out", "0");

    let out = gpio_sysfs(root.path())
        .args(["-n", "2", "-v", "high"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Invalid value 'high'"));
    assert_eq!(
        fs::read_to_string(root.path().join("gpio2/value")).unwrap(),
        "0\n"
    );
}
