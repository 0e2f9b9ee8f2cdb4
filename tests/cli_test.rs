use assert_cmd::cargo_bin;
use predicates::prelude::*;

mod common;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    common::always_pays()
        .write_stdin("Product A\n3\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the product name"))
        .stdout(predicate::str::contains("Enter the product quantity"))
        .stdout(predicate::str::contains("Item added Successfully"))
        .stdout(predicate::str::contains("Do you want to add more item? (y/n)"))
        .stdout(predicate::str::contains("Items present in the cart:"))
        .stdout(predicate::str::is_match(r"Product A\s+3\s+10\.99")?)
        .stdout(predicate::str::contains("total cost: $32.97"))
        .stdout(predicate::str::contains("Payment successful"));
    Ok(())
}

#[test]
fn test_payment_failure_exits_zero() {
    common::never_pays()
        .write_stdin("Product B\n2\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("total cost: $11.98"))
        .stdout(predicate::str::contains("Payment successful").not())
        .stderr(predicate::str::contains("payment failed.."));
}

#[test]
fn test_seeded_payment_is_reproducible() {
    let run = || {
        assert_cmd::Command::new(cargo_bin!("shopcart"))
            .args(["--seed", "12345"])
            .write_stdin("Product C\n1\nn\n")
            .output()
            .unwrap()
    };

    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stderr, second.stderr);
}

#[test]
fn test_failure_percent_out_of_range_is_rejected() {
    assert_cmd::Command::new(cargo_bin!("shopcart"))
        .args(["--payment-failure-percent", "101"])
        .write_stdin("")
        .assert()
        .failure();
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    common::always_pays()
        .env_remove("RUST_LOG")
        .arg("--verbose")
        .write_stdin("Product A\n1\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("stock reserved").not())
        .stderr(predicate::str::contains("stock reserved"));
}
