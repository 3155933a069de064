//! Integration tests for the detail / comparison view model
//!
//! Run with:
//! ```bash
//! cargo test -p nas-console-core --test detail_view_test
//! ```

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use nas_console_core::detail::compare::compare_maps;
use nas_console_core::detail::{
    is_different, AttributeMap, CellValue, ColumnBody, ColumnStatus, DetailColumnInput,
    DetailViewState, SecondaryOrder, SingleBody,
};
use nas_console_core::normalize::format::{
    format_bool, format_timestamp, parse_bool_token, NEVER,
};
use nas_console_core::{
    build_detail_values, build_detail_view, layout_for, DetailStore, DetailView, EntityKind,
    EntityRecord,
};
use serde_json::json;

const VIEW: &str = "samba-shares";

fn share_records() -> Vec<EntityRecord> {
    EntityRecord::from_list(
        EntityKind::SambaShare,
        vec![
            json!({"name": "a", "path": "/srv/a", "read only": "yes"}),
            json!({"name": "b", "path": "/srv/b", "read only": "no"}),
            json!({"name": "c", "path": "/srv/c", "read only": "no", "comment": "media"}),
        ],
    )
}

fn ready_columns(records: &[EntityRecord]) -> Vec<DetailColumnInput> {
    records.iter().map(EntityRecord::detail_column).collect()
}

// ============ Selection / pins ============

#[test]
fn test_toggle_pin_is_its_own_inverse() {
    let starts: [&[&str]; 3] = [&[], &["a"], &["b", "a", "c"]];
    for start in starts {
        for id in ["a", "b", "c", "d"] {
            let mut store = DetailStore::new();
            for pinned in start {
                store.toggle_pinned_item(VIEW, pinned);
            }
            let before = store.view(VIEW).pinned_item_ids.clone();

            store.toggle_pinned_item(VIEW, id);
            store.toggle_pinned_item(VIEW, id);

            // removing then re-adding an inner id moves it to the end
            if start.contains(&id) {
                let mut expected: Vec<String> =
                    before.iter().filter(|p| *p != id).cloned().collect();
                expected.push(id.to_string());
                assert_eq!(store.view(VIEW).pinned_item_ids, expected);
            } else {
                assert_eq!(store.view(VIEW).pinned_item_ids, before);
            }
        }
    }
}

#[test]
fn test_unpin_is_idempotent() {
    for id in ["a", "b", "missing"] {
        let mut once = DetailStore::new();
        once.toggle_pinned_item(VIEW, "a");
        once.toggle_pinned_item(VIEW, "b");
        let mut twice = once.clone();

        once.unpin_item(VIEW, id);
        twice.unpin_item(VIEW, id);
        twice.unpin_item(VIEW, id);

        assert_eq!(once.view(VIEW), twice.view(VIEW));
    }
}

#[test]
fn test_pin_scenario_ends_in_comparison() {
    let records = share_records();
    let mut store = DetailStore::new();

    store.toggle_pinned_item(VIEW, "b");
    store.toggle_pinned_item(VIEW, "a");
    assert_eq!(store.view(VIEW).pinned_item_ids, vec!["b", "a"]);

    store.unpin_item(VIEW, "b");
    assert_eq!(store.view(VIEW).pinned_item_ids, vec!["a"]);

    store.set_active_item_id(VIEW, Some("c".to_string()));
    let view = build_detail_view(
        layout_for(EntityKind::SambaShare),
        store.view(VIEW),
        &ready_columns(&records),
    );
    let DetailView::Comparison(table) = view else {
        panic!("expected comparison view, got {view:?}");
    };
    let columns: Vec<_> = table
        .columns
        .iter()
        .map(|c| (c.id.as_str(), c.pinned))
        .collect();
    assert_eq!(columns, vec![("a", true), ("c", false)]);
}

#[test]
fn test_views_are_independent() {
    let mut store = DetailStore::new();
    store.toggle_pinned_item(VIEW, "a");
    store.set_active_item_id(EntityKind::Pool.view_id(), Some("tank".to_string()));

    assert!(store.view(EntityKind::Pool.view_id()).pinned_item_ids.is_empty());
    assert_eq!(store.view(VIEW).active_item_id, None);
}

// ============ Comparison ============

#[test]
fn test_difference_flags_match_canonical_values() {
    let records = share_records();
    let maps: Vec<AttributeMap> = records.iter().map(EntityRecord::detail_values).collect();
    let columns: Vec<Option<&AttributeMap>> = maps.iter().map(Some).collect();
    let rows = compare_maps(&columns, &["name"], SecondaryOrder::Locale, &[]);

    for row in &rows {
        let mut canon: Vec<String> = row
            .cells
            .iter()
            .map(|cell| cell.as_ref().map_or_else(|| "undefined".to_string(), CellValue::canonical))
            .collect();
        canon.sort();
        canon.dedup();
        assert_eq!(row.different, canon.len() > 1, "row {}", row.key);
    }

    let read_only = rows.iter().find(|r| r.key == "read_only").unwrap();
    assert!(read_only.different);
    let comment = rows.iter().find(|r| r.key == "comment").unwrap();
    assert!(comment.different);
}

#[test]
fn test_key_missing_everywhere_is_same() {
    let empty = AttributeMap::new();
    let rows = compare_maps(&[Some(&empty), Some(&empty)], &["name"], SecondaryOrder::Locale, &[]);
    assert!(rows.is_empty());
    assert!(!is_different(&[None, None]));
}

#[test]
fn test_priority_keys_sort_first() {
    let layout = layout_for(EntityKind::SambaShare);
    let records = share_records();
    let maps: Vec<AttributeMap> = records.iter().map(EntityRecord::detail_values).collect();
    let columns: Vec<Option<&AttributeMap>> = maps.iter().map(Some).collect();
    let rows = compare_maps(
        &columns,
        layout.comparison_priority,
        layout.secondary_order,
        layout.excluded_keys,
    );

    let is_priority = |key: &str| layout.comparison_priority.contains(&key);
    let last_priority = rows.iter().rposition(|r| is_priority(&r.key)).unwrap();
    let first_other = rows.iter().position(|r| !is_priority(&r.key)).unwrap();
    assert!(last_priority < first_other);
}

// ============ Formatting ============

#[test]
fn test_bool_round_trip() {
    for b in [true, false] {
        assert_eq!(parse_bool_token(format_bool(b)), Some(b));
    }
}

#[test]
fn test_never_in_any_case() {
    for raw in ["never", "Never", "NEVER", " nEvEr "] {
        assert_eq!(format_timestamp(&json!(raw)), NEVER);
    }
}

#[test]
fn test_seconds_and_milliseconds() {
    let seconds = format_timestamp(&json!(1_700_000_000));
    let millis = format_timestamp(&json!(1_700_000_000_000_u64));
    // 2023-11-14 Gregorian
    assert!(seconds.starts_with("1402/08/"), "{seconds}");
    assert_eq!(seconds, millis);
}

#[test]
fn test_samba_share_labels() {
    let map = build_detail_values(
        EntityKind::SambaShare,
        &json!({"valid users": "alice", "full_path": "/srv/x", "unknownField": 42}),
    );
    let label_of = |text: &str| {
        map.iter()
            .find(|(_, entry)| entry.value == CellValue::text(text))
            .map(|(_, entry)| entry.label.clone())
    };
    assert_eq!(label_of("alice").as_deref(), Some("کاربران مجاز"));
    assert_eq!(label_of("/srv/x").as_deref(), Some("مسیر کامل"));
    assert!(label_of("42").is_some());
}

#[test]
fn test_malformed_values_degrade_to_text() {
    let map = build_detail_values(
        EntityKind::Pool,
        &json!({"name": "tank", "size": "huge", "autotrim": [1, 2], "scan": {"state": "done"}}),
    );
    assert_eq!(map.get("size").unwrap().value, CellValue::text("huge"));
    assert!(matches!(map.get("autotrim").unwrap().value, CellValue::Text(_)));
    assert!(map.get("scan").unwrap().value.display_text().contains("done"));
}

// ============ Load state ============

#[test]
fn test_loading_column_shows_no_rows() {
    let records = share_records();
    let mut columns = ready_columns(&records);
    // stale data is dropped once a refetch starts
    columns[0].status = ColumnStatus::Loading;

    let state = DetailViewState {
        active_item_id: None,
        pinned_item_ids: vec!["a".to_string(), "b".to_string()],
    };
    let DetailView::Comparison(table) =
        build_detail_view(layout_for(EntityKind::SambaShare), &state, &columns)
    else {
        panic!("expected comparison view");
    };
    assert_eq!(table.columns[0].body, ColumnBody::Loading);
    assert_eq!(table.columns[1].body, ColumnBody::Values);
    assert!(table.rows.iter().all(|row| row.cells[0].is_none()));

    columns[0].status = ColumnStatus::Failed("خطا در دریافت".to_string());
    let DetailView::Comparison(table) =
        build_detail_view(layout_for(EntityKind::SambaShare), &state, &columns)
    else {
        panic!("expected comparison view");
    };
    assert_eq!(
        table.columns[0].body,
        ColumnBody::Failed("خطا در دریافت".to_string())
    );
    assert!(table.rows.iter().all(|row| row.cells[0].is_none()));
}

#[test]
fn test_single_loading_has_no_sections() {
    let state = DetailViewState {
        active_item_id: Some("a".to_string()),
        pinned_item_ids: vec![],
    };
    let columns = [DetailColumnInput::new("a", "a", ColumnStatus::Loading)];
    let DetailView::Single(detail) =
        build_detail_view(layout_for(EntityKind::SambaShare), &state, &columns)
    else {
        panic!("expected single view");
    };
    assert_eq!(detail.body, SingleBody::Loading);
}
