//! Output formatting for results.
//!
//! - [`terminal`] - colored text
//! - [`csv`] - CSV rows with quoted, aligned fields
//! - [`json`] - pretty printed JSON

mod csv;
mod json;
mod terminal;

use crate::config::OutputFormat;
use crate::processing::{BatchOutcome, Request, Response};
use colored::Colorize;
use std::error::Error;

pub use csv::{format_field, render_batch_csv, render_csv};
pub use json::{render_batch_json, render_json};
pub use terminal::{group_octets, render_text};

/// Render one response in the chosen format.
pub fn render(
    request: &Request,
    response: &Response,
    format: OutputFormat,
) -> Result<String, Box<dyn Error>> {
    match format {
        OutputFormat::Text => Ok(render_text(request, response)?),
        OutputFormat::Csv => Ok(render_csv(request, response)),
        OutputFormat::Json => render_json(response),
    }
}

/// Render a whole batch in the chosen format.
pub fn render_batch(
    outcomes: &[BatchOutcome],
    format: OutputFormat,
) -> Result<String, Box<dyn Error>> {
    match format {
        OutputFormat::Json => render_batch_json(outcomes),
        OutputFormat::Csv => Ok(render_batch_csv(outcomes)),
        OutputFormat::Text => {
            let mut out = String::new();
            for outcome in outcomes {
                out.push_str(&format!(
                    "#{index} {op}\n",
                    index = outcome.index,
                    op = outcome.request.op().on_blue()
                ));
                match &outcome.result {
                    Ok(response) => out.push_str(&render_text(&outcome.request, response)?),
                    Err(e) => out.push_str(&format!("{} {e}\n", "failed".on_red())),
                }
            }
            Ok(out)
        }
    }
}
