//! Selection/pin state, one entry per detail view id.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Selection state of one detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailViewState {
    /// Focused entity; need not be pinned.
    pub active_item_id: Option<String>,
    /// Pinned entities in pin order, each at most once.
    pub pinned_item_ids: Vec<String>,
}

impl DetailViewState {
    pub fn set_active_item_id(&mut self, id: Option<String>) {
        self.active_item_id = id;
    }

    /// Unpin `id` if pinned, otherwise pin it last.
    pub fn toggle_pinned_item(&mut self, id: &str) {
        if self.is_pinned(id) {
            self.unpin_item(id);
        } else {
            self.pinned_item_ids.push(id.to_string());
        }
    }

    pub fn unpin_item(&mut self, id: &str) {
        self.pinned_item_ids.retain(|pinned| pinned != id);
    }

    pub fn clear_pinned_items(&mut self) {
        self.pinned_item_ids.clear();
    }

    #[must_use]
    pub fn is_pinned(&self, id: &str) -> bool {
        self.pinned_item_ids.iter().any(|pinned| pinned == id)
    }

    #[must_use]
    pub fn is_comparing(&self) -> bool {
        !self.pinned_item_ids.is_empty()
    }

    /// Drop every id not in `existing`. Returns whether anything changed.
    pub fn prune<S: AsRef<str>>(&mut self, existing: &[S]) -> bool {
        let exists = |id: &str| existing.iter().any(|e| e.as_ref() == id);
        let before = self.pinned_item_ids.len();
        self.pinned_item_ids.retain(|id| exists(id.as_str()));
        let mut changed = before != self.pinned_item_ids.len();
        if self.active_item_id.as_deref().is_some_and(|id| !exists(id)) {
            self.active_item_id = None;
            changed = true;
        }
        changed
    }
}

static EMPTY_VIEW: LazyLock<DetailViewState> = LazyLock::new(DetailViewState::default);

/// Selection/pin store keyed by view id.
///
/// Owned by the application model; every component sharing a view id reads
/// the same entry.
#[derive(Debug, Clone, Default)]
pub struct DetailStore {
    views: HashMap<String, DetailViewState>,
}

impl DetailStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of a view; an unknown view reads as empty.
    #[must_use]
    pub fn view(&self, view_id: &str) -> &DetailViewState {
        self.views.get(view_id).unwrap_or(&*EMPTY_VIEW)
    }

    /// Mutable state of a view, created on first access.
    pub fn view_mut(&mut self, view_id: &str) -> &mut DetailViewState {
        self.views.entry(view_id.to_string()).or_default()
    }

    pub fn set_active_item_id(&mut self, view_id: &str, id: Option<String>) {
        self.view_mut(view_id).set_active_item_id(id);
    }

    pub fn toggle_pinned_item(&mut self, view_id: &str, id: &str) {
        let view = self.view_mut(view_id);
        view.toggle_pinned_item(id);
        log::debug!("[{view_id}] pinned: {:?}", view.pinned_item_ids);
    }

    pub fn unpin_item(&mut self, view_id: &str, id: &str) {
        if let Some(view) = self.views.get_mut(view_id) {
            view.unpin_item(id);
        }
    }

    pub fn clear_pinned_items(&mut self, view_id: &str) {
        if let Some(view) = self.views.get_mut(view_id) {
            view.clear_pinned_items();
        }
    }

    /// Forget ids that vanished from the latest listing.
    pub fn prune<S: AsRef<str>>(&mut self, view_id: &str, existing: &[S]) {
        if let Some(view) = self.views.get_mut(view_id) {
            if view.prune(existing) {
                log::debug!("[{view_id}] pruned stale selection");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: &str = "nfs-shares";

    #[test]
    fn toggle_twice_restores_order() {
        let mut store = DetailStore::new();
        store.toggle_pinned_item(VIEW, "a");
        store.toggle_pinned_item(VIEW, "b");
        let before = store.view(VIEW).clone();

        store.toggle_pinned_item(VIEW, "c");
        store.toggle_pinned_item(VIEW, "c");
        assert_eq!(store.view(VIEW), &before);

        store.toggle_pinned_item(VIEW, "a");
        store.toggle_pinned_item(VIEW, "a");
        // re-pinned ids go last
        assert_eq!(store.view(VIEW).pinned_item_ids, vec!["b", "a"]);
    }

    #[test]
    fn unpin_is_idempotent() {
        let mut store = DetailStore::new();
        store.toggle_pinned_item(VIEW, "a");
        store.toggle_pinned_item(VIEW, "b");
        store.unpin_item(VIEW, "a");
        let once = store.view(VIEW).clone();
        store.unpin_item(VIEW, "a");
        assert_eq!(store.view(VIEW), &once);
        assert_eq!(once.pinned_item_ids, vec!["b"]);
    }

    #[test]
    fn clear_keeps_active() {
        let mut store = DetailStore::new();
        store.set_active_item_id(VIEW, Some("a".to_string()));
        store.toggle_pinned_item(VIEW, "b");
        store.clear_pinned_items(VIEW);
        assert!(store.view(VIEW).pinned_item_ids.is_empty());
        assert_eq!(store.view(VIEW).active_item_id.as_deref(), Some("a"));
    }

    #[test]
    fn views_are_independent() {
        let mut store = DetailStore::new();
        store.toggle_pinned_item("nfs-shares", "a");
        assert!(store.view("samba-shares").pinned_item_ids.is_empty());
        assert!(store.view("nfs-shares").is_pinned("a"));
    }

    #[test]
    fn prune_drops_missing_ids() {
        let mut store = DetailStore::new();
        store.toggle_pinned_item(VIEW, "a");
        store.toggle_pinned_item(VIEW, "b");
        store.set_active_item_id(VIEW, Some("c".to_string()));

        store.prune(VIEW, &["b"]);
        assert_eq!(store.view(VIEW).pinned_item_ids, vec!["b"]);
        assert_eq!(store.view(VIEW).active_item_id, None);
    }
}
