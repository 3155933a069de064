//! Attribute maps and the values they hold.

use std::collections::BTreeMap;

use serde::Serialize;

use super::compare::{compare_maps, ComparisonRow, SecondaryOrder};

/// Localized yes/no tokens.
pub const YES: &str = "بله";
pub const NO: &str = "خیر";

/// One displayable attribute value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Already formatted text.
    Text(String),
    /// Interactive boolean bound to a mutation.
    Toggle(PropertyToggle),
    /// Multi-valued attribute rendered as its own comparison table.
    Nested(NestedDetailTable),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Canonical string used for difference detection.
    #[must_use]
    pub fn canonical(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Toggle(t) => t.enabled.to_string(),
            Self::Nested(table) => serde_json::to_string(table).unwrap_or_default(),
        }
    }

    /// Plain-text rendering (nested tables collapse to their column titles).
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Toggle(t) => if t.enabled { YES } else { NO }.to_string(),
            Self::Nested(table) => table
                .columns
                .iter()
                .map(|c| c.title.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Width used by the value-length ordering. Nested tables sort last.
    #[must_use]
    pub fn display_len(&self) -> usize {
        match self {
            Self::Nested(_) => usize::MAX,
            _ => self.display_text().chars().count(),
        }
    }
}

/// A boolean property that can be flipped from the detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyToggle {
    /// Backend property name (`autotrim`, ...).
    pub property: String,
    pub enabled: bool,
}

/// Label plus value of one attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeEntry {
    pub label: String,
    pub value: CellValue,
}

/// Normalized attributes of one entity, keyed by canonical attribute key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AttributeMap {
    entries: BTreeMap<String, AttributeEntry>,
}

impl AttributeMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute.
    pub fn insert(&mut self, key: impl Into<String>, label: impl Into<String>, value: CellValue) {
        self.entries.insert(
            key.into(),
            AttributeEntry {
                label: label.into(),
                value,
            },
        );
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttributeEntry> {
        self.entries.get(key)
    }

    /// Look an attribute up by its display label.
    #[must_use]
    pub fn get_by_label(&self, label: &str) -> Option<&AttributeEntry> {
        self.entries.values().find(|entry| entry.label == label)
    }

    pub fn remove(&mut self, key: &str) -> Option<AttributeEntry> {
        self.entries.remove(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Toggles in key order.
    pub fn toggles(&self) -> impl Iterator<Item = &PropertyToggle> {
        self.entries.values().filter_map(|entry| match &entry.value {
            CellValue::Toggle(t) => Some(t),
            _ => None,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Column of a nested table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NestedColumn {
    pub id: String,
    pub title: String,
    pub values: AttributeMap,
}

/// A multi-valued attribute (per-client NFS options, pool disks), compared
/// with the same machinery as top-level columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "nested-detail-table")]
pub struct NestedDetailTable {
    pub columns: Vec<NestedColumn>,
    #[serde(skip)]
    pub priority: Vec<String>,
    #[serde(skip)]
    pub order: SecondaryOrder,
}

impl NestedDetailTable {
    #[must_use]
    pub fn new(columns: Vec<NestedColumn>, priority: &[&str], order: SecondaryOrder) -> Self {
        Self {
            columns,
            priority: priority.iter().map(ToString::to_string).collect(),
            order,
        }
    }

    /// Rows of the nested comparison, one per attribute key.
    #[must_use]
    pub fn compare(&self) -> Vec<ComparisonRow> {
        let maps: Vec<Option<&AttributeMap>> =
            self.columns.iter().map(|c| Some(&c.values)).collect();
        compare_maps(&maps, self.priority.as_slice(), self.order, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_forms() {
        assert_eq!(CellValue::text("a").canonical(), "a");
        let toggle = CellValue::Toggle(PropertyToggle {
            property: "autotrim".to_string(),
            enabled: true,
        });
        assert_eq!(toggle.canonical(), "true");
        assert_eq!(toggle.display_text(), YES);
    }

    #[test]
    fn nested_table_serializes_with_tag() {
        let mut values = AttributeMap::new();
        values.insert("rw", "خواندن/نوشتن", CellValue::text(YES));
        let table = NestedDetailTable::new(
            vec![NestedColumn {
                id: "*".to_string(),
                title: "*".to_string(),
                values,
            }],
            &[],
            SecondaryOrder::Locale,
        );
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["type"], "nested-detail-table");
        assert_eq!(json["columns"][0]["values"]["rw"]["value"], YES);
        assert!(json.get("priority").is_none());
    }

    #[test]
    fn lookup_by_label() {
        let mut map = AttributeMap::new();
        map.insert("path", "مسیر", CellValue::text("/srv"));
        assert_eq!(map.get_by_label("مسیر").unwrap().value, CellValue::text("/srv"));
        assert!(map.get_by_label("x").is_none());
    }
}
