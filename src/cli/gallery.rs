//! Gallery command: type chips plus an AND-filtered grid

use colored::Colorize;
use log::{debug, warn};
use serde::Serialize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_load;
use crate::client::models::Entity;
use crate::error::Result;
use crate::index::{
    SortDirection, SortKey, TypeSelection, filter_by_types, format_id_list, search_and_sort,
};
use crate::models::EntityRow;
use crate::models::display::pretty::{entity_line, type_chips};
use crate::output::Render;

/// Shown when the gallery cannot be loaded
pub const GALLERY_FAILED: &str = "Failed to load gallery.";

#[derive(Debug, Serialize)]
struct GalleryView<'a> {
    types: &'a [String],
    active: Vec<&'a str>,
    #[serde(skip)]
    selection: &'a TypeSelection,
    entries: Vec<&'a Entity>,
    /// Navigation order of the shown entries, as `show --ids` takes it
    ids: String,
    loaded: usize,
}

impl<'a> GalleryView<'a> {
    fn new(
        types: &'a [String],
        selection: &'a TypeSelection,
        entries: Vec<&'a Entity>,
        loaded: usize,
    ) -> Self {
        let ids = format_id_list(entries.iter().map(|e| &e.id));
        Self {
            types,
            active: selection.iter().collect(),
            selection,
            entries,
            ids,
            loaded,
        }
    }
}

impl Render for GalleryView<'_> {
    type Row = EntityRow;

    fn rows(&self) -> Vec<EntityRow> {
        self.entries.iter().map(|e| EntityRow::from(*e)).collect()
    }

    fn pretty(&self) -> String {
        let mut out = vec![type_chips(self.types, self.selection), String::new()];

        if self.entries.is_empty() {
            out.push("No entries carry all selected types.".to_string());
        } else {
            out.extend(self.entries.iter().map(|e| entity_line(e)));
        }

        out.push(String::new());
        out.push(
            format!("{} of {} entries shown", self.entries.len(), self.loaded)
                .dimmed()
                .to_string(),
        );
        if let Some(first) = self.entries.first() {
            out.push(
                format!("Open one with: dexview show {} --ids {}", first.id, self.ids)
                    .dimmed()
                    .to_string(),
            );
        }
        out.join("\n")
    }

    fn empty_table(&self) -> &'static str {
        "No entries carry all selected types."
    }
}

/// Run the gallery command
pub async fn run(opts: &GlobalOptions, clicks: &[String], limit: Option<u32>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let limit = limit.unwrap_or(ctx.config.load_limit);

    let catalog = ctx.catalog.clone();
    let (entities, all_types) = run_load("Loading gallery", async move {
        tokio::try_join!(catalog.load_first(limit), catalog.fetch_types())
    })
    .await
    .map_err(|e| e.presented(GALLERY_FAILED))?;

    let selection = TypeSelection::from_clicks(clicks);
    for tag in selection.iter() {
        if !all_types.iter().any(|t| t == tag) {
            warn!("Unknown type '{}'; no entry will match it", tag);
        }
    }

    let ordered = search_and_sort(&entities, "", SortKey::Id, SortDirection::Asc);
    let shown = filter_by_types(ordered, &selection);
    debug!("{} of {} entries pass the type filter", shown.len(), entities.len());

    GalleryView::new(&all_types, &selection, shown, entities.len()).print(ctx.format)
}
