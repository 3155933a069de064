//! Attribute ordering and difference detection.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;

use super::value::{AttributeMap, CellValue, NestedDetailTable};

/// Canonical form of a missing attribute.
pub const MISSING: &str = "undefined";

/// How keys outside the priority list are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryOrder {
    /// By label, Persian collation.
    #[default]
    Locale,
    /// Shortest longest-value first, then by label.
    ValueLength,
}

/// One attribute across every compared column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub key: String,
    pub label: String,
    /// One cell per column, `None` where the column lacks the attribute or
    /// has no data yet.
    pub cells: Vec<Option<CellValue>>,
    pub different: bool,
    /// Nested-table cells compared entry by entry, one row per
    /// (nested column, attribute). Empty for plain rows.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComparisonRow>,
}

/// Canonical string of an optional cell.
#[must_use]
pub fn canonical(value: Option<&CellValue>) -> String {
    value.map_or_else(|| MISSING.to_string(), CellValue::canonical)
}

/// Whether more than one distinct canonical value exists.
#[must_use]
pub fn is_different(values: &[Option<&CellValue>]) -> bool {
    let distinct: BTreeSet<String> = values.iter().map(|v| canonical(*v)).collect();
    distinct.len() > 1
}

/// Order attribute keys: priority keys first in list order, then the rest by
/// `order`.
#[must_use]
pub fn sort_attribute_keys<S: AsRef<str>>(
    mut keys: Vec<String>,
    priority: &[S],
    order: SecondaryOrder,
    columns: &[&AttributeMap],
) -> Vec<String> {
    let rank = |key: &str| priority.iter().position(|p| p.as_ref() == key);
    let label = |key: &str| {
        columns
            .iter()
            .find_map(|c| c.get(key))
            .map_or(key, |entry| entry.label.as_str())
            .to_string()
    };
    let longest = |key: &str| {
        columns
            .iter()
            .filter_map(|c| c.get(key))
            .map(|entry| entry.value.display_len())
            .max()
            .unwrap_or(0)
    };

    keys.sort_by(|a, b| match (rank(a.as_str()), rank(b.as_str())) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => {
            let by_length = match order {
                SecondaryOrder::Locale => Ordering::Equal,
                SecondaryOrder::ValueLength => longest(a.as_str()).cmp(&longest(b.as_str())),
            };
            by_length
                .then_with(|| locale_compare(&label(a.as_str()), &label(b.as_str())))
                .then_with(|| a.cmp(b))
        }
    });
    keys
}

/// Build comparison rows over `columns`; `None` columns (loading, failed)
/// contribute no keys and are left out of difference detection.
#[must_use]
pub fn compare_maps<S: AsRef<str>>(
    columns: &[Option<&AttributeMap>],
    priority: &[S],
    order: SecondaryOrder,
    excluded: &[&str],
) -> Vec<ComparisonRow> {
    let ready: Vec<&AttributeMap> = columns.iter().flatten().copied().collect();
    let keys: BTreeSet<&str> = ready
        .iter()
        .flat_map(|map| map.keys())
        .filter(|key| !excluded.contains(key))
        .collect();
    let keys = keys.into_iter().map(str::to_string).collect();

    sort_attribute_keys(keys, priority, order, &ready)
        .into_iter()
        .map(|key| {
            let label = ready
                .iter()
                .find_map(|map| map.get(&key))
                .map_or_else(|| key.clone(), |entry| entry.label.clone());
            let cells: Vec<Option<CellValue>> = columns
                .iter()
                .map(|map| map.and_then(|m| m.get(&key)).map(|entry| entry.value.clone()))
                .collect();
            let compared: Vec<Option<&CellValue>> = columns
                .iter()
                .zip(&cells)
                .filter(|(map, _)| map.is_some())
                .map(|(_, cell)| cell.as_ref())
                .collect();
            ComparisonRow {
                different: is_different(&compared),
                children: nested_rows(columns, &cells),
                key,
                label,
                cells,
            }
        })
        .collect()
}

/// Sub-rows of an attribute whose cells hold nested tables.
///
/// Nested columns are matched by id across the compared entities, in
/// first-seen order. An entity without a given nested column counts as
/// missing every attribute of it; columns that are not ready stay out of
/// difference detection, as at the top level.
fn nested_rows(columns: &[Option<&AttributeMap>], cells: &[Option<CellValue>]) -> Vec<ComparisonRow> {
    let tables: Vec<Option<&NestedDetailTable>> = cells
        .iter()
        .map(|cell| match cell {
            Some(CellValue::Nested(table)) => Some(table),
            _ => None,
        })
        .collect();
    let Some(template) = tables.iter().flatten().next() else {
        return Vec::new();
    };

    let mut nested_ids: Vec<(&str, &str)> = Vec::new();
    for table in tables.iter().flatten() {
        for column in &table.columns {
            if !nested_ids.iter().any(|(id, _)| *id == column.id) {
                nested_ids.push((column.id.as_str(), column.title.as_str()));
            }
        }
    }

    let absent = AttributeMap::new();
    let mut rows = Vec::new();
    for (id, title) in nested_ids {
        let maps: Vec<Option<&AttributeMap>> = columns
            .iter()
            .zip(&tables)
            .map(|(ready, table)| {
                ready.map(|_| {
                    table
                        .and_then(|t| t.columns.iter().find(|c| c.id == id))
                        .map_or(&absent, |c| &c.values)
                })
            })
            .collect();
        rows.extend(
            compare_maps(&maps, template.priority.as_slice(), template.order, &[])
                .into_iter()
                .map(|mut row| {
                    row.key = format!("{id}/{}", row.key);
                    row.label = format!("{title} · {}", row.label);
                    row
                }),
        );
    }
    rows
}

// ========== Persian collation ==========

const PERSIAN_ALPHABET: &str = "آابپتثجچحخدذرزژسشصضطظعغفقکگلمنوهی";

/// Collation class: punctuation, digits, Persian, Latin, everything else.
fn collation_key(c: char) -> (u8, u32) {
    let c = fold_char(c);
    if let Some(d) = c.to_digit(10) {
        return (1, d);
    }
    if let Some(pos) = PERSIAN_ALPHABET.chars().position(|p| p == c) {
        #[allow(clippy::cast_possible_truncation)]
        return (2, pos as u32);
    }
    if c.is_ascii_alphabetic() {
        return (3, u32::from(c));
    }
    if c.is_whitespace() || c.is_ascii_punctuation() {
        return (0, u32::from(c));
    }
    (4, u32::from(c))
}

fn fold_char(c: char) -> char {
    match c {
        'ك' => 'ک',
        'ي' | 'ى' | 'ئ' => 'ی',
        'أ' | 'إ' | 'ٱ' => 'ا',
        'ة' | 'ۀ' => 'ه',
        'ؤ' => 'و',
        '۰'..='۹' => char::from_u32(u32::from(c) - u32::from('۰') + u32::from('0')).unwrap_or(c),
        '٠'..='٩' => char::from_u32(u32::from(c) - u32::from('٠') + u32::from('0')).unwrap_or(c),
        _ => c.to_ascii_lowercase(),
    }
}

/// Compare two labels the way a Persian reader expects: Persian letters in
/// alphabet order before Latin, Arabic letter variants folded, ASCII case
/// ignored, ZWNJ ignored.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let key = |s: &str| -> Vec<(u8, u32)> {
        s.chars()
            .filter(|c| *c != '\u{200c}')
            .map(collation_key)
            .collect()
    };
    key(a).cmp(&key(b)).then_with(|| a.cmp(b))
}
