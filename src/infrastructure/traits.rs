//! I/O boundary traits for testability
//!
//! These traits abstract the remote store and the terminal, allowing
//! services to be tested with mock implementations.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::domain::{Parameter, ParameterPage, PutParameter};
use crate::infrastructure::error::StoreResult;

/// Remote parameter store abstraction.
///
/// Exposes only the four calls the tool needs. Every call is a single
/// request; batching and cursor handling belong to the caller.
pub trait ParameterStore: Send + Sync {
    /// Create a parameter, or replace it when `request.overwrite` is set.
    fn put_parameter(&self, request: &PutParameter) -> StoreResult<()>;

    /// Fetch one parameter with its value decrypted.
    fn get_parameter(&self, name: &str) -> StoreResult<Parameter>;

    /// Fetch several parameters (decrypted) in one request.
    ///
    /// Names the store does not know are left out of the result.
    fn get_parameters(&self, names: &[String]) -> StoreResult<Vec<Parameter>>;

    /// Fetch one page of names containing `query`.
    fn describe_parameters(
        &self,
        query: &str,
        page_size: i32,
        next_token: Option<&str>,
    ) -> StoreResult<ParameterPage>;
}

/// Interactive overwrite confirmation abstraction.
pub trait Confirmer: Send + Sync {
    /// Show the conflicting parameter and return the user's raw answer.
    /// Blocks until the user answers.
    fn ask_overwrite(&self, existing: &Parameter) -> io::Result<String>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Terminal confirmer reading the answer from stdin.
#[derive(Debug, Default)]
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn ask_overwrite(&self, existing: &Parameter) -> io::Result<String> {
        prompt_overwrite(existing, &mut io::stdin().lock(), &mut io::stdout().lock())
    }
}

/// Show `existing` with the overwrite prompt on `output`, then read one
/// answer line from `input`.
///
/// The line terminator is kept; a closed input yields an empty answer.
pub fn prompt_overwrite(
    existing: &Parameter,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<String> {
    writeln!(output, "{}", "Secret already exists".white().on_red())?;
    writeln!(output, "Name: {}", existing.name)?;
    writeln!(output, "Value: {}", existing.value)?;
    write!(
        output,
        "If you would like to overwrite this value enter 'OVERWRITE': "
    )?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer)
}
