//! Interactive terminal input
//!
//! Prompts for monetary amounts and the encryption password. Amounts accept
//! a comma as the decimal separator, as the original tool did.

use std::io::{self, Write};

use crate::crypto::Password;
use crate::error::{SplitError, SplitResult};

/// Prompt for a monetary amount on the terminal
pub fn prompt_amount(label: &str) -> SplitResult<f64> {
    print!("{}: ", label);
    io::stdout()
        .flush()
        .map_err(|e| SplitError::Io(format!("Failed to flush prompt: {}", e)))?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|e| SplitError::Io(format!("Failed to read input: {}", e)))?;

    parse_amount(&line)
}

/// Parse an amount, accepting `,` as the decimal separator
///
/// An empty input counts as zero, so optional amounts can be skipped with
/// a bare return.
pub fn parse_amount(input: &str) -> SplitResult<f64> {
    let cleaned = input.trim().replace(',', ".");
    if cleaned.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = cleaned.parse().map_err(|_| {
        SplitError::Validation(format!(
            "Please provide numeric values (eg 1234.56), got '{}'",
            input.trim()
        ))
    })?;

    if !value.is_finite() {
        return Err(SplitError::Validation(format!(
            "Please provide a finite amount, got '{}'",
            input.trim()
        )));
    }
    Ok(value)
}

/// Prompt for the ledger password without echoing it
pub fn prompt_password() -> SplitResult<Password> {
    rpassword::prompt_password("Password: ")
        .map(Password::new)
        .map_err(|e| SplitError::Io(format!("Failed to read password: {}", e)))
}
