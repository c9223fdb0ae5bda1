//! Search and sort

use std::cmp::Ordering;

use crate::client::models::Entity;

/// Field the working set is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Id,
    /// Base experience; entities without one sort as 0
    BaseExperience,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Filter entities by `query` and order them by `key`.
///
/// The query is trimmed and matched case-insensitively as a substring of the
/// name or of the decimal id. An empty query keeps everything. The sort is
/// stable in both directions: entities with equal keys keep their input order.
pub fn search_and_sort<'a>(
    entities: &'a [Entity],
    query: &str,
    key: SortKey,
    direction: SortDirection,
) -> Vec<&'a Entity> {
    let needle = query.trim().to_lowercase();

    let mut matched: Vec<&Entity> = entities
        .iter()
        .filter(|e| matches_query(e, &needle))
        .collect();

    matched.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    matched
}

fn matches_query(entity: &Entity, needle: &str) -> bool {
    needle.is_empty()
        || entity.name.to_lowercase().contains(needle)
        || entity.id.to_string().contains(needle)
}

fn compare(a: &Entity, b: &Entity, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::BaseExperience => a
            .base_experience
            .unwrap_or(0)
            .cmp(&b.base_experience.unwrap_or(0)),
    }
}
