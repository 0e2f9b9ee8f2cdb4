use assert_cmd::cargo_bin;
use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes a catalog CSV with one row per `(name, price, quantity)`.
#[allow(dead_code)]
pub fn write_catalog(rows: &[(&str, &str, &str)]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "name, price, quantity")?;
    for (name, price, quantity) in rows {
        writeln!(file, "{}, {}, {}", name, price, quantity)?;
    }
    file.flush()?;
    Ok(file)
}

/// The binary with a payment outcome that is always accepted.
pub fn always_pays() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo_bin!("shopcart"));
    cmd.args(["--payment-failure-percent", "0"]);
    cmd
}

/// The binary with a payment outcome that is always declined.
#[allow(dead_code)]
pub fn never_pays() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo_bin!("shopcart"));
    cmd.args(["--payment-failure-percent", "100"]);
    cmd
}
