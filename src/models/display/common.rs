//! Common display utilities and helpers

/// Join type tags for a single cell ("grass/poison")
pub fn format_types(types: &[String]) -> String {
    if types.is_empty() {
        "--".to_string()
    } else {
        types.join("/")
    }
}

/// Height in decimetres as metres
pub fn format_height(decimetres: u32) -> String {
    format!("{:.1} m", decimetres as f64 / 10.0)
}

/// Weight in hectograms as kilograms
pub fn format_weight(hectograms: u32) -> String {
    format!("{:.1} kg", hectograms as f64 / 10.0)
}

/// Base experience, or a dash when the API has none
pub fn format_base_experience(value: Option<u32>) -> String {
    value.map_or_else(|| "--".to_string(), |v| v.to_string())
}

/// Dex number padded to three digits ("#007")
pub fn format_dex_number(id: u32) -> String {
    format!("#{:03}", id)
}

/// Proportional bar for a base stat, scaled against 255
pub fn stat_bar(base: u32, width: usize) -> String {
    let filled = ((base.min(255) as usize) * width).div_ceil(255);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
