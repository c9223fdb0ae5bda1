//! Types command

use serde::Serialize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_load;
use crate::error::Result;
use crate::models::TypeRow;
use crate::output::Render;

/// Shown when the type list cannot be loaded
pub const TYPES_FAILED: &str = "Failed to load type list.";

#[derive(Debug, Serialize)]
struct TypeList {
    types: Vec<String>,
}

impl Render for TypeList {
    type Row = TypeRow;

    fn rows(&self) -> Vec<TypeRow> {
        self.types.iter().cloned().map(TypeRow::from).collect()
    }

    /// One name per line, ready for `gallery -t`
    fn pretty(&self) -> String {
        self.types.join("\n")
    }

    fn empty_table(&self) -> &'static str {
        "No types found."
    }
}

/// Run the types command
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let catalog = ctx.catalog.clone();
    let types = run_load("Loading types", async move { catalog.fetch_types().await })
        .await
        .map_err(|e| e.presented(TYPES_FAILED))?;

    TypeList { types }.print(ctx.format)
}
