//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, EntityPageTexts, HintTexts, HomeTexts, ModalTexts, NavTexts, ToastTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "NAS Console",
        loading: "Loading...",
        error: "Error",
        generic_error: "Something went wrong. Please try again.",
    },

    hints: HintTexts {
        switch_panel: "Switch panel",
        navigate: "Navigate",
        open: "Open",
        select: "Select",
        pin: "Pin",
        unpin: "Unpin",
        clear_pins: "Clear pins",
        column: "Column",
        column_action: "Remove / pin column",
        toggles: "Properties",
        refresh: "Refresh",
        apply: "Apply",
        close: "Close",
        help: "Help",
        quit: "Quit",
    },

    nav: NavTexts {
        title: "Menu",
        home: "Home",
        samba_shares: "Samba shares",
        nfs_shares: "NFS shares",
        samba_users: "Samba users",
        snmp: "SNMP",
        pools: "Storage pools",
        file_systems: "Filesystems",
    },

    home: HomeTexts {
        welcome: "Welcome to the NAS console",
        backend: "Backend",
        not_loaded: "not loaded",
        items: "items",
        pinned: "pinned",
    },

    entity: EntityPageTexts {
        list_title: "List",
        detail_title: "Details",
        comparison_title: "Comparison",
        empty_list: "Nothing found",
        select_hint: "Select an item, or pin several with p to compare",
        attribute: "Attribute",
        preview: "preview",
        pinned_marker: "*",
        different_marker: "≠",
    },

    modal: ModalTexts {
        help_title: "Help",
        toggles_title: "Pool properties",
        no_toggles: "This pool has no switchable properties",
        help_lines: &[
            ("↑↓ / j k", "Move in the list"),
            ("Tab / ←→", "Switch panel"),
            ("Enter", "Open page"),
            ("p", "Pin / unpin the active item"),
            ("x", "Unpin the active item"),
            ("c", "Clear all pins"),
            ("[ / ]", "Previous / next comparison column"),
            ("d", "Remove the pinned column, or pin the preview"),
            ("t", "Switch pool properties"),
            ("Alt+r", "Refresh"),
            ("?", "Help"),
            ("q / Ctrl+C", "Quit"),
        ],
    },

    toast: ToastTexts {
        refreshing: "Refreshing...",
        property_updated: "Property updated",
        pins_cleared: "Pins cleared",
        not_a_pool: "Only available for storage pools",
    },
};
