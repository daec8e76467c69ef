mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use common::script_file;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_result_just_under_free_limit_commits() {
    let script = script_file(&["999", "+", "0.5", "="]);

    let mut cmd = Command::new(cargo_bin!("calcpro"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[FREE TIER (< 1000)] 999.5"));
}

#[test]
fn test_result_exactly_at_free_limit_is_gated() {
    let script = script_file(&["500", "+", "500", "="]);

    let mut cmd = Command::new(cargo_bin!("calcpro"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Result (1000.00) exceeds free tier limit of 1,000",
        ))
        // The committed result never appears.
        .stdout(predicate::str::contains("[FREE TIER (< 1000)] 1000").not());
}

#[test]
fn test_negative_magnitude_is_gated_too() {
    let script = script_file(&["0", "-", "1000", "="]);

    let mut cmd = Command::new(cargo_bin!("calcpro"));
    cmd.arg(script.path());

    cmd.assert().success().stdout(predicate::str::contains(
        "Result (-1000.00) exceeds free tier limit of 1,000",
    ));
}

#[test]
fn test_extreme_decimal_precision_entry() {
    let script = script_file(&["0.0001", "+", "0.0001", "="]);

    let mut cmd = Command::new(cargo_bin!("calcpro"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[FREE TIER (< 1000)] 0.0002"));
}

#[test]
fn test_divide_by_zero_displays_error_sentinel() {
    let script = script_file(&["8", "/", "0", "="]);

    let mut cmd = Command::new(cargo_bin!("calcpro"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[FREE TIER (< 1000)] ERROR"));
}
