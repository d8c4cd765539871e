//! Shared output formatting for check results.

use anyhow::Result;
use eclint_core::{LintResult, Renderer};
use std::io::Write;

use crate::OutputFormat;

/// Print check results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat, renderer: &Renderer) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result, renderer),
        OutputFormat::Json => print_json(result),
    }
}

/// Each file is rendered into one buffer and written in a single call, so
/// output stays grouped per file.
fn print_text(result: &LintResult, renderer: &Renderer) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for report in &result.reports {
        let chunk = renderer.render(report);
        if !chunk.is_empty() {
            out.write_all(chunk.as_bytes())?;
        }
    }

    out.flush()?;
    Ok(())
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(&result.reports)?;
    println!("{json}");
    Ok(())
}
