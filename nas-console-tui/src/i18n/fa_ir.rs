//! 波斯语翻译 (fa-IR)

use super::keys::{
    CommonTexts, EntityPageTexts, HintTexts, HomeTexts, ModalTexts, NavTexts, ToastTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "کنسول مدیریت NAS",
        loading: "در حال بارگذاری...",
        error: "خطا",
        generic_error: "خطایی رخ داد. دوباره تلاش کنید.",
    },

    hints: HintTexts {
        switch_panel: "تغییر پنل",
        navigate: "جابجایی",
        open: "باز کردن",
        select: "انتخاب",
        pin: "سنجاق",
        unpin: "برداشتن سنجاق",
        clear_pins: "پاک کردن سنجاق‌ها",
        column: "ستون",
        column_action: "حذف / سنجاق ستون",
        toggles: "ویژگی‌ها",
        refresh: "بازخوانی",
        apply: "اعمال",
        close: "بستن",
        help: "راهنما",
        quit: "خروج",
    },

    nav: NavTexts {
        title: "منو",
        home: "خانه",
        samba_shares: "اشتراک‌های Samba",
        nfs_shares: "اشتراک‌های NFS",
        samba_users: "کاربران Samba",
        snmp: "SNMP",
        pools: "استخرهای ذخیره‌سازی",
        file_systems: "فایل‌سیستم‌ها",
    },

    home: HomeTexts {
        welcome: "به کنسول مدیریت NAS خوش آمدید",
        backend: "سرویس",
        not_loaded: "بارگذاری نشده",
        items: "مورد",
        pinned: "سنجاق‌شده",
    },

    entity: EntityPageTexts {
        list_title: "فهرست",
        detail_title: "جزئیات",
        comparison_title: "مقایسه",
        empty_list: "موردی یافت نشد",
        select_hint: "یک مورد را انتخاب کنید یا با p سنجاق کنید",
        attribute: "ویژگی",
        preview: "پیش‌نمایش",
        pinned_marker: "*",
        different_marker: "≠",
    },

    modal: ModalTexts {
        help_title: "راهنما",
        toggles_title: "ویژگی‌های استخر",
        no_toggles: "این استخر ویژگی قابل تغییری ندارد",
        help_lines: &[
            ("↑↓ / j k", "جابجایی در فهرست"),
            ("Tab / ←→", "تغییر پنل"),
            ("Enter", "باز کردن صفحه"),
            ("p", "سنجاق / برداشتن سنجاق مورد فعال"),
            ("x", "برداشتن سنجاق مورد فعال"),
            ("c", "پاک کردن همه سنجاق‌ها"),
            ("[ / ]", "ستون قبلی / بعدی در مقایسه"),
            ("d", "حذف ستون سنجاق‌شده یا سنجاق پیش‌نمایش"),
            ("t", "تغییر ویژگی‌های استخر"),
            ("Alt+r", "بازخوانی"),
            ("?", "راهنما"),
            ("q / Ctrl+C", "خروج"),
        ],
    },

    toast: ToastTexts {
        refreshing: "در حال بازخوانی...",
        property_updated: "ویژگی به‌روزرسانی شد",
        pins_cleared: "سنجاق‌ها پاک شدند",
        not_a_pool: "این عملیات فقط برای استخرها در دسترس است",
    },
};
