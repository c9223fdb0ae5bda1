//! List command: search and sort the first entries of the catalog

use colored::Colorize;
use log::debug;
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_load;
use crate::cli::{CommandContext, ListArgs};
use crate::client::models::Entity;
use crate::error::Result;
use crate::index::{format_id_list, search_and_sort};
use crate::models::EntityRow;
use crate::models::display::pretty::entity_line;
use crate::output::Render;

/// Shown when the list cannot be loaded at all
pub const LIST_FAILED: &str = "Failed to load the catalog list. Try again or use mock data.";

/// The working set after search and sort
#[derive(Debug, Serialize)]
struct ListView<'a> {
    entries: Vec<&'a Entity>,
    loaded: usize,
}

impl Render for ListView<'_> {
    type Row = EntityRow;

    fn rows(&self) -> Vec<EntityRow> {
        self.entries.iter().map(|e| EntityRow::from(*e)).collect()
    }

    fn pretty(&self) -> String {
        if self.entries.is_empty() {
            return format!("No entries match ({} loaded).", self.loaded);
        }

        let mut out: Vec<String> = self.entries.iter().map(|e| entity_line(e)).collect();
        out.push(String::new());
        out.push(
            format!(
                "{} of {} entries. Use --ids-only to get the order for `show --ids`.",
                self.entries.len(),
                self.loaded
            )
            .dimmed()
            .to_string(),
        );
        out.join("\n")
    }

    fn empty_table(&self) -> &'static str {
        "No entries match the search."
    }
}

/// Run the list command
pub async fn run(opts: &GlobalOptions, args: &ListArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let limit = args.limit.unwrap_or(ctx.config.load_limit);

    debug!("Listing first {} entries", limit);

    let catalog = ctx.catalog.clone();
    let entities = run_load("Loading catalog", async move { catalog.load_first(limit).await })
        .await
        .map_err(|e| e.presented(LIST_FAILED))?;

    let view = ListView {
        entries: search_and_sort(&entities, &args.query, args.sort.into(), args.order.into()),
        loaded: entities.len(),
    };
    debug!(
        "{} of {} entries match '{}'",
        view.entries.len(),
        view.loaded,
        args.query
    );

    if args.ids_only {
        println!("{}", format_id_list(view.entries.iter().map(|e| &e.id)));
        return Ok(());
    }

    view.print(ctx.format)
}
