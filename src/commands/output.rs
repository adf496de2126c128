//! Output helpers shared by commands
//!
//! Data goes to stdout as pretty JSON; status messages go to stderr so the
//! JSON stays pipeable.

use anyhow::Result;
use colored::*;
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a green confirmation line on stderr
pub fn print_success(message: &str) {
    eprintln!("{}", message.green());
}

/// Print a yellow note on stderr
pub fn print_note(message: &str) {
    eprintln!("{}", message.yellow());
}
