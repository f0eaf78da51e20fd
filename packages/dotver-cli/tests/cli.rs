use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn dotver() -> Command {
    let mut cmd
        = Command::cargo_bin("dotver")
            .expect("Failed to get dotver command");

    cmd.env("NO_COLOR", "1");
    cmd.env_remove("DOTVER_SEQUENCE_LIMIT");
    cmd.env_remove("RUST_LOG");

    cmd
}

#[test]
fn normalize_trims_trailing_zeros() -> Result<(), Box<dyn std::error::Error>> {
    dotver()
        .args(["normalize", "4.5.0.0"])
        .assert()
        .success()
        .stdout("4.5\n");

    Ok(())
}

#[test]
fn normalize_json() -> Result<(), Box<dyn std::error::Error>> {
    dotver()
        .args(["--json", "normalize", "1.2.3"])
        .assert()
        .success()
        .stdout("\"1.2.3\"\n");

    Ok(())
}

#[test]
fn normalize_rejects_invalid_versions() -> Result<(), Box<dyn std::error::Error>> {
    dotver()
        .args(["normalize", "1..4"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid version string '1..4'"));

    Ok(())
}

#[test]
fn components_resized() -> Result<(), Box<dyn std::error::Error>> {
    dotver()
        .args(["--json", "components", "1.1.1", "--len", "5"])
        .assert()
        .success()
        .stdout("[1,1,1,0,0]\n");

    dotver()
        .args(["components", "5.2.0.0.0"])
        .assert()
        .success()
        .stdout("5\n2\n");

    Ok(())
}

#[test]
fn compare_versions() -> Result<(), Box<dyn std::error::Error>> {
    dotver()
        .args(["compare", "4.0.0.0", "4.5"])
        .assert()
        .success()
        .stdout("-1\n");

    dotver()
        .args(["compare", "4.5.0", "4.5"])
        .assert()
        .success()
        .stdout("0\n");

    dotver()
        .args(["compare", "4.2.1.2", "4.2"])
        .assert()
        .success()
        .stdout("1\n");

    Ok(())
}

#[test]
fn includes_sets_the_exit_status() -> Result<(), Box<dyn std::error::Error>> {
    dotver()
        .args(["includes", "1.2.3", "1.5.1", "1.3"])
        .assert()
        .success()
        .stdout("true\n");

    dotver()
        .args(["includes", "1.2.3", "1.5.1", "1.5.1"])
        .assert()
        .code(1)
        .stdout("false\n");

    dotver()
        .args(["includes", "1.2.3", "1.5.1", "a.2.4"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Invalid version string 'a.2.4'"));

    dotver()
        .args(["includes", "1.2.3", "1.5.", "1.3"])
        .assert()
        .code(2);

    Ok(())
}

#[test]
fn list_patch_releases() -> Result<(), Box<dyn std::error::Error>> {
    dotver()
        .args(["list", "1.2.3.4", "1.2.6.1"])
        .assert()
        .success()
        .stdout("1.2.3.4\n1.2.4\n1.2.5\n1.2.6\n");

    dotver()
        .args(["--json", "list", "1.2.3", "1.2.6"])
        .assert()
        .success()
        .stdout("[\"1.2.3\",\"1.2.4\",\"1.2.5\"]\n");

    Ok(())
}

#[test]
fn list_is_capped_by_the_limit() -> Result<(), Box<dyn std::error::Error>> {
    dotver()
        .args(["list", "1.2.3", "1.3", "--limit", "2"])
        .assert()
        .success()
        .stdout("1.2.3\n1.2.4\n")
        .stderr(predicate::str::contains("Stopped listing"));

    dotver()
        .args(["list", "1.2.3", "1.3"])
        .env("DOTVER_SEQUENCE_LIMIT", "1")
        .assert()
        .success()
        .stdout("1.2.3\n");

    Ok(())
}
