//! Common CLI types shared across commands

use crate::index::{SortDirection, SortKey};

/// Sort direction for list commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum SortDir {
    /// Ascending order
    #[default]
    Asc,
    /// Descending order
    Desc,
}

/// Sort field for list commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum SortField {
    /// Name, lexicographic
    #[default]
    Name,
    /// Dex number
    Id,
    /// Base experience (missing counts as 0)
    BaseExp,
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting (global default)
    #[default]
    Pretty,
    /// Table format - one row per entry
    Table,
    /// JSON format - structured for scripts
    Json,
}

impl From<SortDir> for SortDirection {
    fn from(dir: SortDir) -> Self {
        match dir {
            SortDir::Asc => SortDirection::Asc,
            SortDir::Desc => SortDirection::Desc,
        }
    }
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Name => SortKey::Name,
            SortField::Id => SortKey::Id,
            SortField::BaseExp => SortKey::BaseExperience,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_sort_field_parses_kebab_case() {
        let field = SortField::from_str("base-exp", true).unwrap();
        assert_eq!(SortKey::from(field), SortKey::BaseExperience);
    }

    #[test]
    fn test_sort_dir_converts() {
        assert_eq!(SortDirection::from(SortDir::Desc), SortDirection::Desc);
        assert_eq!(SortDirection::from(SortDir::default()), SortDirection::Asc);
    }
}
