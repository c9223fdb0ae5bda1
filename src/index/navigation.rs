//! Prev/next resolution for detail navigation

use serde::Serialize;

/// Ids of the neighbors around the current entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Neighbors {
    pub prev: u32,
    pub next: u32,
}

/// Resolve prev/next for `current` within an ordered id list.
///
/// When `current` is in the list its neighbors are the adjacent elements, clamped
/// at both ends. When it is not, the element numerically closest to `current`
/// (the first one on ties) stands in as the anchor. Without a list, or with an
/// empty one, neighbors are the numeric predecessor (floored at 1) and successor.
pub fn resolve_neighbors(current: u32, order: Option<&[u32]>) -> Neighbors {
    let Some(order) = order.filter(|ids| !ids.is_empty()) else {
        return Neighbors {
            prev: current.saturating_sub(1).max(1),
            next: current.saturating_add(1),
        };
    };

    let anchor = order
        .iter()
        .position(|&id| id == current)
        .unwrap_or_else(|| closest_index(order, current));

    let last = order.len() - 1;
    Neighbors {
        prev: order[anchor.saturating_sub(1)],
        next: order[(anchor + 1).min(last)],
    }
}

fn closest_index(order: &[u32], current: u32) -> usize {
    order
        .iter()
        .enumerate()
        // min_by_key keeps the first minimum
        .min_by_key(|&(_, &id)| id.abs_diff(current))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Parse a comma-separated id list, skipping blank, non-numeric and zero entries.
pub fn parse_id_list(raw: &str) -> Vec<u32> {
    raw.split(',')
        .filter_map(|part| part.trim().parse::<u32>().ok())
        .filter(|&id| id != 0)
        .collect()
}

/// Render ids as the comma-separated form `parse_id_list` accepts.
pub fn format_id_list<'a, I>(ids: I) -> String
where
    I: IntoIterator<Item = &'a u32>,
{
    ids.into_iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
