//! Type tag filtering

use std::collections::BTreeSet;

use crate::client::models::Entity;

/// Chip that deactivates every tag
pub const CLEAR_CHIP: &str = "clear";

/// Active type tags, as toggled by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSelection {
    active: BTreeSet<String>,
}

impl TypeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay chip clicks in order: a tag flips on or off, `clear` empties the
    /// selection.
    pub fn from_clicks<I, S>(clicks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::new();
        for click in clicks {
            if normalize(click.as_ref()) == CLEAR_CHIP {
                selection.clear();
            } else {
                selection.toggle(click.as_ref());
            }
        }
        selection
    }

    /// Flip one tag on or off. Returns whether the tag is now active; a blank tag
    /// is ignored.
    pub fn toggle(&mut self, tag: &str) -> bool {
        let tag = normalize(tag);
        if tag.is_empty() {
            return false;
        }
        if self.active.remove(&tag) {
            false
        } else {
            self.active.insert(tag);
            true
        }
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.active.contains(tag)
    }

    /// Active tags in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }
}

fn normalize(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Keep entities carrying every active tag. An empty selection keeps all.
pub fn filter_by_types<'a, I>(entities: I, selection: &TypeSelection) -> Vec<&'a Entity>
where
    I: IntoIterator<Item = &'a Entity>,
{
    if selection.is_empty() {
        return entities.into_iter().collect();
    }

    entities
        .into_iter()
        .filter(|e| selection.iter().all(|tag| e.has_type(tag)))
        .collect()
}
