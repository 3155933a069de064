//! Single-detail / comparison view model.

use serde::Serialize;

use super::compare::{compare_maps, sort_attribute_keys, ComparisonRow};
use super::layout::{DetailLayoutConfig, GENERAL_SECTION};
use super::store::{DetailStore, DetailViewState};
use super::value::{AttributeMap, CellValue};

/// Shown in place of rows when a ready column has no attributes.
pub const EMPTY_PLACEHOLDER: &str = "موردی برای نمایش وجود ندارد";
/// Shown in a cell whose column lacks the attribute.
pub const MISSING_CELL: &str = "-";

// ========== Inputs ==========

/// Fetch state of one entity's attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnStatus {
    Loading,
    Failed(String),
    Ready(AttributeMap),
}

/// One candidate column: an entity id, its heading and its data.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailColumnInput {
    pub id: String,
    pub title: String,
    pub status: ColumnStatus,
}

impl DetailColumnInput {
    pub fn new(id: impl Into<String>, title: impl Into<String>, status: ColumnStatus) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status,
        }
    }
}

// ========== Outputs ==========

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    pub key: String,
    pub label: String,
    pub value: CellValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub id: String,
    pub title: String,
    pub rows: Vec<DetailRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "content", rename_all = "snake_case")]
pub enum SingleBody {
    Loading,
    Failed(String),
    /// Ready but nothing to show.
    Empty,
    Sections(Vec<SectionView>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleDetail {
    pub id: String,
    pub title: String,
    pub body: SingleBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "content", rename_all = "snake_case")]
pub enum ColumnBody {
    Loading,
    Failed(String),
    Empty,
    Values,
}

/// Interaction offered on a comparison column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "id", rename_all = "snake_case")]
pub enum DetailAction {
    /// Unpin the column.
    Remove(String),
    /// Pin the preview column, or unpin a pinned one.
    TogglePin(String),
}

impl DetailAction {
    /// Apply the action to a view's selection state.
    pub fn apply(&self, store: &mut DetailStore, view_id: &str) {
        match self {
            Self::Remove(id) => store.unpin_item(view_id, id),
            Self::TogglePin(id) => store.toggle_pinned_item(view_id, id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonColumn {
    pub id: String,
    pub title: String,
    /// `false` for the active-entity preview column.
    pub pinned: bool,
    pub body: ColumnBody,
}

impl ComparisonColumn {
    #[must_use]
    pub fn actions(&self) -> Vec<DetailAction> {
        if self.pinned {
            vec![
                DetailAction::Remove(self.id.clone()),
                DetailAction::TogglePin(self.id.clone()),
            ]
        } else {
            vec![DetailAction::TogglePin(self.id.clone())]
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub columns: Vec<ComparisonColumn>,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DetailView {
    /// Nothing active and nothing pinned.
    Empty,
    Single(SingleDetail),
    Comparison(ComparisonTable),
}

// ========== Builder ==========

/// Decide between single-detail and comparison mode and lay the view out.
#[must_use]
pub fn build_detail_view(
    config: &DetailLayoutConfig,
    state: &DetailViewState,
    columns: &[DetailColumnInput],
) -> DetailView {
    let find = |id: &str| columns.iter().find(|c| c.id == id);

    if !state.is_comparing() {
        return state
            .active_item_id
            .as_deref()
            .and_then(find)
            .map_or(DetailView::Empty, |column| {
                DetailView::Single(build_single(config, column))
            });
    }

    let mut selected: Vec<(&DetailColumnInput, bool)> = state
        .pinned_item_ids
        .iter()
        .filter_map(|id| find(id.as_str()))
        .map(|column| (column, true))
        .collect();
    if let Some(active) = state.active_item_id.as_deref() {
        if !state.is_pinned(active) {
            if let Some(column) = find(active) {
                selected.push((column, false));
            }
        }
    }
    if selected.is_empty() {
        return DetailView::Empty;
    }

    let maps: Vec<Option<&AttributeMap>> = selected
        .iter()
        .map(|(column, _)| match &column.status {
            ColumnStatus::Ready(map) => Some(map),
            ColumnStatus::Loading | ColumnStatus::Failed(_) => None,
        })
        .collect();
    let rows = compare_maps(
        &maps,
        config.comparison_priority,
        config.secondary_order,
        config.excluded_keys,
    );
    let columns = selected
        .iter()
        .map(|(column, pinned)| ComparisonColumn {
            id: column.id.clone(),
            title: column.title.clone(),
            pinned: *pinned,
            body: match &column.status {
                ColumnStatus::Loading => ColumnBody::Loading,
                ColumnStatus::Failed(message) => ColumnBody::Failed(message.clone()),
                ColumnStatus::Ready(map) if visible_keys(config, map).next().is_none() => {
                    ColumnBody::Empty
                }
                ColumnStatus::Ready(_) => ColumnBody::Values,
            },
        })
        .collect();

    DetailView::Comparison(ComparisonTable { columns, rows })
}

fn visible_keys<'a>(
    config: &'a DetailLayoutConfig,
    map: &'a AttributeMap,
) -> impl Iterator<Item = &'a str> + 'a {
    map.keys().filter(|key| !config.is_excluded(key))
}

fn build_single(config: &DetailLayoutConfig, column: &DetailColumnInput) -> SingleDetail {
    let body = match &column.status {
        ColumnStatus::Loading => SingleBody::Loading,
        ColumnStatus::Failed(message) => SingleBody::Failed(message.clone()),
        ColumnStatus::Ready(map) => build_sections(config, map),
    };
    SingleDetail {
        id: column.id.clone(),
        title: column.title.clone(),
        body,
    }
}

fn build_sections(config: &DetailLayoutConfig, map: &AttributeMap) -> SingleBody {
    if visible_keys(config, map).next().is_none() {
        return SingleBody::Empty;
    }

    let row = |key: &str| {
        map.get(key).map(|entry| DetailRow {
            key: key.to_string(),
            label: entry.label.clone(),
            value: entry.value.clone(),
        })
    };

    let declared = if config.sections.is_empty() {
        std::slice::from_ref(&GENERAL_SECTION)
    } else {
        config.sections
    };

    let unassigned: Vec<String> = visible_keys(config, map)
        .filter(|key| !config.is_assigned(key))
        .map(str::to_string)
        .collect();
    let unassigned = sort_attribute_keys(
        unassigned,
        config.comparison_priority,
        config.secondary_order,
        &[map],
    );

    let sections = declared
        .iter()
        .enumerate()
        .filter_map(|(index, section)| {
            let mut rows: Vec<DetailRow> = section
                .keys
                .iter()
                .filter(|key| !config.is_excluded(key))
                .filter_map(|key| row(*key))
                .collect();
            if index == 0 {
                rows.extend(unassigned.iter().filter_map(|key| row(key.as_str())));
            }
            if rows.is_empty() && section.optional {
                return None;
            }
            Some(SectionView {
                id: section.id.to_string(),
                title: section.title.to_string(),
                rows,
            })
        })
        .collect();

    SingleBody::Sections(sections)
}
