//! Rendering command results in the selected output format
//!
//! Each command builds one view value and implements [`Render`] for it: the view
//! itself is the JSON `data`, [`Render::rows`] feeds the table, and
//! [`Render::pretty`] is the colored text.

use chrono::Utc;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::cli::OutputFormat;
use crate::error::Result;

/// A command result that can be shown in every output format
pub trait Render: Serialize {
    type Row: Tabled;

    /// Rows for `--format table`
    fn rows(&self) -> Vec<Self::Row>;

    /// Colored text for `--format pretty`
    fn pretty(&self) -> String;

    /// Table text when `rows` is empty
    fn empty_table(&self) -> &'static str {
        "No entries found."
    }

    fn print(&self, format: OutputFormat) -> Result<()>
    where
        Self: Sized,
    {
        println!("{}", render(self, format)?);
        Ok(())
    }
}

/// JSON document: the view under `data`, provenance under `meta`
#[derive(Debug, Serialize)]
struct Envelope<'a, T> {
    data: &'a T,
    meta: Meta,
}

#[derive(Debug, Serialize)]
struct Meta {
    timestamp: String,
    version: &'static str,
    /// Rows the table format would show
    rows: usize,
}

/// Render a view in the requested format
pub fn render<V: Render>(view: &V, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let envelope = Envelope {
                data: view,
                meta: Meta {
                    timestamp: Utc::now().to_rfc3339(),
                    version: env!("CARGO_PKG_VERSION"),
                    rows: view.rows().len(),
                },
            };
            Ok(serde_json::to_string_pretty(&envelope)?)
        }
        OutputFormat::Table => Ok(table(&view.rows(), view.empty_table())),
        OutputFormat::Pretty => Ok(view.pretty()),
    }
}

fn table<R: Tabled>(rows: &[R], empty: &str) -> String {
    if rows.is_empty() {
        return empty.to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}
