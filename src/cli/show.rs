//! Show command: one entry with prev/next navigation

use log::debug;
use serde::Serialize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_load;
use crate::client::models::Entity;
use crate::error::{Error, Result};
use crate::index::{Neighbors, parse_id_list, resolve_neighbors};
use crate::models::DetailRow;
use crate::models::display::pretty::entity_card;
use crate::output::Render;

/// Shown when the entry cannot be loaded
pub const SHOW_FAILED: &str = "Failed to load entry.";

#[derive(Debug, Serialize)]
struct DetailView<'a> {
    entry: &'a Entity,
    #[serde(flatten)]
    neighbors: Neighbors,
}

impl Render for DetailView<'_> {
    type Row = DetailRow;

    fn rows(&self) -> Vec<DetailRow> {
        DetailRow::rows_for(self.entry, &self.neighbors)
    }

    fn pretty(&self) -> String {
        entity_card(self.entry, &self.neighbors)
    }
}

/// Run the show command
pub async fn run(opts: &GlobalOptions, entry: &str, ids: Option<&str>) -> Result<()> {
    let key = entry.trim().to_string();
    if key.is_empty() {
        return Err(Error::Other("Entry must be a number or a name".to_string()));
    }

    let ctx = CommandContext::new(opts)?;

    let catalog = ctx.catalog.clone();
    let entity = run_load("Loading entry", async move { catalog.fetch_entity(&key).await })
        .await
        .map_err(|e| e.presented(SHOW_FAILED))?;

    let order = ids.map(parse_id_list);
    let neighbors = resolve_neighbors(entity.id, order.as_deref());
    debug!(
        "Entry {} navigation: prev {} next {}",
        entity.id, neighbors.prev, neighbors.next
    );

    DetailView {
        entry: &entity,
        neighbors,
    }
    .print(ctx.format)
}
