//! Static per-entity detail layouts.

use super::compare::SecondaryOrder;

/// Group of attributes shown under one heading in single-detail mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailSection {
    pub id: &'static str,
    pub title: &'static str,
    /// Canonical attribute keys, in display order.
    pub keys: &'static [&'static str],
    /// Hidden when none of its keys are present.
    pub optional: bool,
}

impl DetailSection {
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(&key)
    }
}

/// Layout of one entity type's detail and comparison views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailLayoutConfig {
    pub sections: &'static [DetailSection],
    /// Keys listed here sort before every other key, in list order.
    pub comparison_priority: &'static [&'static str],
    pub secondary_order: SecondaryOrder,
    /// Keys never displayed.
    pub excluded_keys: &'static [&'static str],
}

impl DetailLayoutConfig {
    #[must_use]
    pub fn is_excluded(&self, key: &str) -> bool {
        self.excluded_keys.contains(&key)
    }

    /// Whether some section claims `key`.
    #[must_use]
    pub fn is_assigned(&self, key: &str) -> bool {
        self.sections.iter().any(|s| s.contains(key))
    }
}

/// Heading of the implicit section used when a layout declares none.
pub const GENERAL_SECTION: DetailSection = DetailSection {
    id: "general",
    title: "اطلاعات کلی",
    keys: &[],
    optional: false,
};

impl Default for DetailLayoutConfig {
    fn default() -> Self {
        Self {
            sections: &[GENERAL_SECTION],
            comparison_priority: &[],
            secondary_order: SecondaryOrder::Locale,
            excluded_keys: &[],
        }
    }
}
