//! Binary-level integration tests
//!
//! Exercises the compiled CLI end to end against a temporary store.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PASSWORD: &str = "correct horse";

fn servicedesk(project: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("servicedesk").expect("binary builds");
    cmd.args(["--no-color", "--project", project.path().to_str().unwrap()]);
    cmd
}

fn init_with_admin(project: &TempDir) {
    servicedesk(project)
        .args([
            "init",
            "--admin",
            "root",
            "--email",
            "root@example.com",
            "--password",
            PASSWORD,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized ticket store"));
}

#[test]
fn test_init_register_login_ticket_dashboard() {
    let project = TempDir::new().unwrap();
    init_with_admin(&project);

    servicedesk(&project)
        .args([
            "register",
            "alice",
            "--email",
            "alice@example.com",
            "--full-name",
            "Alice Martin",
            "--password",
            PASSWORD,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account 'alice' created"));

    servicedesk(&project)
        .args(["login", "alice", "--password", PASSWORD])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as alice (EMPLOYEE)"));

    servicedesk(&project)
        .args([
            "ticket",
            "new",
            "--title",
            "Monitor stays black",
            "--description",
            "No signal since this morning",
            "--category",
            "Hardware",
            "--priority",
            "Medium",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created ticket 'Monitor stays black'"));

    servicedesk(&project)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Monitor stays black"));
}

#[test]
fn test_commands_fail_without_store() {
    let project = TempDir::new().unwrap();

    servicedesk(&project)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn test_dashboard_requires_login() {
    let project = TempDir::new().unwrap();
    init_with_admin(&project);

    servicedesk(&project)
        .arg("logout")
        .assert()
        .success();

    servicedesk(&project)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_login_failure_is_generic() {
    let project = TempDir::new().unwrap();
    init_with_admin(&project);

    servicedesk(&project)
        .args(["login", "root", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"));

    servicedesk(&project)
        .args(["login", "nobody", "--password", PASSWORD])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"));
}

#[test]
fn test_admin_only_surface_is_gated() {
    let project = TempDir::new().unwrap();
    init_with_admin(&project);

    servicedesk(&project)
        .args([
            "register",
            "alice",
            "--email",
            "alice@example.com",
            "--full-name",
            "Alice Martin",
            "--password",
            PASSWORD,
        ])
        .assert()
        .success();

    servicedesk(&project)
        .args(["login", "alice", "--password", PASSWORD])
        .assert()
        .success();

    servicedesk(&project)
        .args(["users", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Access denied"));

    // The admin, by contrast, gets the listing
    servicedesk(&project)
        .args(["login", "root", "--password", PASSWORD])
        .assert()
        .success();

    servicedesk(&project)
        .args(["users", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"));

    // And cannot delete their own account
    servicedesk(&project)
        .args(["users", "delete", "root"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot delete your own account"));
}

#[test]
fn test_whoami_reports_session() {
    let project = TempDir::new().unwrap();
    init_with_admin(&project);

    servicedesk(&project)
        .args(["login", "root", "--password", PASSWORD])
        .assert()
        .success();

    servicedesk(&project)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("root (ADMIN)"));
}
