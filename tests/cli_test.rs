mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use common::script_file;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end_arithmetic() {
    let script = script_file(&["7", "+", "3", "=", "clear", "6", "*", "7", "="]);

    let mut cmd = Command::new(cargo_bin!("calcpro"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[FREE TIER (< 1000)] 10"))
        .stdout(predicate::str::contains("[FREE TIER (< 1000)] 42"));
}

#[test]
fn test_cli_end_to_end_upgrade_flow() {
    let script = script_file(&[
        "# trip the free-tier gate",
        "999",
        "+",
        "5",
        "=",
        "# buy unlimited on the annual cycle",
        "cycle annual",
        "plan unlimited",
        "method gcash",
        "pay Juan dela Cruz; 09171234567; juan@example.com",
        "# the gate is gone now",
        "999",
        "+",
        "5",
        "=",
    ]);

    let mut cmd = Command::new(cargo_bin!("calcpro"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Result (1004.00) exceeds free tier limit of 1,000",
        ))
        .stdout(predicate::str::contains("₱85680.00 (annual) - $1530.00"))
        .stdout(predicate::str::contains(
            "Send gcash payment to 09342342424 (Calculator Pro Services)",
        ))
        .stdout(predicate::str::contains("Plan: UNLIMITED"))
        .stdout(predicate::str::contains("Billing: annual"))
        // Payment closes the modal and clears the calculator.
        .stdout(predicate::str::contains("[UNLIMITED ∞] 0"))
        // The same calculation now commits.
        .stdout(predicate::str::contains("[UNLIMITED ∞] 1004"));
}

#[test]
fn test_cli_validation_error_keeps_session_alive() {
    let script = script_file(&[
        "plan premium",
        // No payment method selected.
        "pay Juan; 09171234567; juan@example.com",
        "1",
        "+",
        "1",
        "=",
    ]);

    let mut cmd = Command::new(cargo_bin!("calcpro"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Please select a payment method (GCash or Maya)",
        ))
        .stdout(predicate::str::contains("[FREE TIER (< 1000)] 2"));
}

#[test]
fn test_cli_close_discards_gated_calculation() {
    let script = script_file(&["999", "+", "5", "=", "close", "1", "+", "1", "="]);

    let mut cmd = Command::new(cargo_bin!("calcpro"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(upgrade window closed)"))
        // Cleared back to zero, still on the free tier.
        .stdout(predicate::str::contains("[FREE TIER (< 1000)] 0"))
        .stdout(predicate::str::contains("[FREE TIER (< 1000)] 2"));
}

#[test]
fn test_cli_missing_script_file_fails() {
    let mut cmd = Command::new(cargo_bin!("calcpro"));
    cmd.arg("no-such-script.txt");
    cmd.assert().failure();
}
