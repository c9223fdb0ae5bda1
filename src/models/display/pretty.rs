//! Human-oriented renderings for the `pretty` output format

use colored::Colorize;

use super::common::{
    format_base_experience, format_dex_number, format_height, format_types, format_weight, stat_bar,
};
use crate::client::models::Entity;
use crate::index::{CLEAR_CHIP, Neighbors, TypeSelection};

const STAT_BAR_WIDTH: usize = 20;

/// One entity per line, aligned for scanning
pub fn entity_line(entity: &Entity) -> String {
    format!(
        "{}  {:<14} {:<18} {}",
        format_dex_number(entity.id).dimmed(),
        entity.name.bold(),
        format_types(&entity.types),
        format!("exp {}", format_base_experience(entity.base_experience)).dimmed()
    )
}

/// Type chips, active ones highlighted, plus a clear chip while any is active
pub fn type_chips(types: &[String], selection: &TypeSelection) -> String {
    let mut chips: Vec<String> = types
        .iter()
        .map(|tag| {
            if selection.contains(tag) {
                format!("[{}]", tag).black().on_green().bold().to_string()
            } else {
                format!(" {} ", tag).dimmed().to_string()
            }
        })
        .collect();

    if !selection.is_empty() {
        chips.push(format!("({})", CLEAR_CHIP).yellow().to_string());
    }
    chips.join(" ")
}

/// Full detail card for `show`
pub fn entity_card(entity: &Entity, neighbors: &Neighbors) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        format_dex_number(entity.id).dimmed(),
        entity.name.bold()
    ));
    out.push_str("══════════════════════════════════════════\n");
    out.push_str(&format!("Types:           {}\n", format_types(&entity.types).cyan()));
    out.push_str(&format!("Height:          {}\n", format_height(entity.height)));
    out.push_str(&format!("Weight:          {}\n", format_weight(entity.weight)));
    out.push_str(&format!(
        "Base experience: {}\n",
        format_base_experience(entity.base_experience)
    ));

    if !entity.stats.is_empty() {
        out.push_str("\nBase stats\n");
        for stat in &entity.stats {
            out.push_str(&format!(
                "  {:<16} {:>3} {}\n",
                stat.name,
                stat.base,
                stat_bar(stat.base, STAT_BAR_WIDTH).green()
            ));
        }
    }

    if let Some(ref artwork) = entity.artwork {
        out.push_str(&format!("\nArtwork: {}\n", artwork.dimmed()));
    }

    out.push_str(&format!(
        "\n{} {}    {} {}",
        "← prev".dimmed(),
        neighbors.prev,
        "next →".dimmed(),
        neighbors.next
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::entity;

    #[test]
    fn test_entity_line_contains_fields() {
        let line = entity_line(&entity(7, "squirtle", &["water"], Some(63)));

        assert!(line.contains("#007"));
        assert!(line.contains("squirtle"));
        assert!(line.contains("water"));
        assert!(line.contains("exp 63"));
    }

    #[test]
    fn test_type_chips_mark_active() {
        let types = vec!["fire".to_string(), "water".to_string()];
        let selection = TypeSelection::from_clicks(["water"]);

        let chips = type_chips(&types, &selection);
        assert!(chips.contains("[water]"));
        assert!(chips.contains(" fire "));
        assert!(!chips.contains("[fire]"));
        assert!(chips.contains("(clear)"));
    }

    #[test]
    fn test_type_chips_without_selection_have_no_clear() {
        let types = vec!["fire".to_string()];
        let chips = type_chips(&types, &TypeSelection::new());
        assert!(!chips.contains("clear"));
    }

    #[test]
    fn test_entity_card_sections() {
        let e = entity(4, "charmander", &["fire"], Some(62));
        let card = entity_card(&e, &Neighbors { prev: 1, next: 7 });

        assert!(card.contains("charmander"));
        assert!(card.contains("Base stats"));
        assert!(card.contains("hp"));
        assert!(card.contains("1.0 m"));
        assert!(card.contains("10.0 kg"));
        assert!(card.contains(" 1 "));
        assert!(card.ends_with('7'));
    }
}
