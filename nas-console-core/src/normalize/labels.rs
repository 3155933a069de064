//! Attribute key translation.
//!
//! Keys are canonicalized first (`"Valid Users"`, `"validUsers"` and
//! `"valid-users"` all become `valid_users`) and then looked up in
//! [`KEY_LABELS`]. Unknown keys are translated word by word; when no word is
//! known the raw key is shown as-is.

/// Canonical attribute key: camelCase split, lowercased, separators folded
/// to `_`.
#[must_use]
pub fn canonical_key(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 4);
    let mut prev: Option<char> = None;
    for c in raw.trim().chars() {
        if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            out.push('_');
        }
        match c {
            ' ' | '-' | '.' | '/' | '\t' => out.push('_'),
            _ => out.extend(c.to_lowercase()),
        }
        prev = Some(c);
    }
    // collapse runs of separators
    let mut collapsed = String::with_capacity(out.len());
    for c in out.chars() {
        if c == '_' && collapsed.ends_with('_') {
            continue;
        }
        collapsed.push(c);
    }
    collapsed.trim_matches('_').to_string()
}

/// Known attribute keys.
pub const KEY_LABELS: &[(&str, &str)] = &[
    // general
    ("id", "شناسه"),
    ("name", "نام"),
    ("path", "مسیر"),
    ("full_path", "مسیر کامل"),
    ("comment", "توضیحات"),
    ("description", "توضیحات"),
    ("status", "وضعیت"),
    ("state", "وضعیت"),
    ("health", "سلامت"),
    ("enabled", "فعال"),
    ("owner", "مالک"),
    ("group", "گروه"),
    ("permissions", "مجوزها"),
    ("mode", "حالت"),
    ("type", "نوع"),
    ("created_at", "زمان ایجاد"),
    ("updated_at", "زمان به‌روزرسانی"),
    ("creation", "زمان ایجاد"),
    // samba shares
    ("share_name", "نام اشتراک"),
    ("valid_users", "کاربران مجاز"),
    ("invalid_users", "کاربران غیرمجاز"),
    ("valid_groups", "گروه‌های مجاز"),
    ("read_list", "فهرست فقط‌خواندنی"),
    ("write_list", "فهرست نوشتنی"),
    ("admin_users", "کاربران مدیر"),
    ("read_only", "فقط خواندنی"),
    ("writable", "قابل نوشتن"),
    ("writeable", "قابل نوشتن"),
    ("browseable", "قابل مرور"),
    ("browsable", "قابل مرور"),
    ("guest_ok", "دسترسی مهمان"),
    ("public", "عمومی"),
    ("available", "در دسترس"),
    ("create_mask", "ماسک ایجاد فایل"),
    ("directory_mask", "ماسک ایجاد پوشه"),
    ("force_user", "کاربر اجباری"),
    ("force_group", "گروه اجباری"),
    ("hosts_allow", "میزبان‌های مجاز"),
    ("hosts_deny", "میزبان‌های ممنوع"),
    ("vfs_objects", "ماژول‌های VFS"),
    ("max_connections", "حداکثر اتصال‌ها"),
    ("inherit_permissions", "ارث‌بری مجوزها"),
    // nfs
    ("export", "مسیر اشتراک"),
    ("export_path", "مسیر اشتراک"),
    ("clients", "کلاینت‌ها"),
    ("client", "کلاینت"),
    ("host", "میزبان"),
    ("options", "گزینه‌ها"),
    ("rw", "خواندن و نوشتن"),
    ("ro", "فقط خواندنی"),
    ("sync", "نوشتن همگام"),
    ("async", "نوشتن ناهمگام"),
    ("subtree_check", "بررسی زیردرخت"),
    ("no_subtree_check", "بدون بررسی زیردرخت"),
    ("root_squash", "محدودسازی root"),
    ("no_root_squash", "بدون محدودسازی root"),
    ("all_squash", "محدودسازی همه کاربران"),
    ("no_all_squash", "بدون محدودسازی همه کاربران"),
    ("anonuid", "شناسه کاربر ناشناس"),
    ("anongid", "شناسه گروه ناشناس"),
    ("secure", "درگاه امن"),
    ("insecure", "درگاه ناامن"),
    ("fsid", "شناسه فایل‌سیستم"),
    ("sec", "سازوکار امنیتی"),
    ("wdelay", "تأخیر نوشتن"),
    ("no_wdelay", "بدون تأخیر نوشتن"),
    ("crossmnt", "عبور از نقاط اتصال"),
    // samba users
    ("username", "نام کاربری"),
    ("unix_username", "نام کاربری یونیکس"),
    ("nt_username", "نام کاربری NT"),
    ("full_name", "نام کامل"),
    ("uid", "شناسه کاربر"),
    ("gid", "شناسه گروه"),
    ("user_sid", "SID کاربر"),
    ("primary_group_sid", "SID گروه اصلی"),
    ("group_sid", "SID گروه"),
    ("domain", "دامنه"),
    ("home_directory", "پوشه خانگی"),
    ("home_dir_drive", "درایو خانگی"),
    ("home_drive", "درایو خانگی"),
    ("logon_script", "اسکریپت ورود"),
    ("profile_path", "مسیر پروفایل"),
    ("account_flags", "پرچم‌های حساب"),
    ("account_desc", "شرح حساب"),
    ("workstations", "ایستگاه‌های کاری"),
    ("munged_dial", "شماره‌گیری"),
    ("logon_time", "زمان ورود"),
    ("logoff_time", "زمان خروج"),
    ("kickoff_time", "زمان قطع اجباری"),
    ("password_last_set", "آخرین تغییر گذرواژه"),
    ("password_can_change", "امکان تغییر گذرواژه از"),
    ("password_must_change", "الزام تغییر گذرواژه از"),
    ("last_bad_password", "آخرین گذرواژه نادرست"),
    ("bad_password_count", "تعداد گذرواژه نادرست"),
    ("logon_hours", "ساعات مجاز ورود"),
    ("disabled", "غیرفعال"),
    ("locked", "قفل‌شده"),
    // snmp
    ("community", "کامیونیتی"),
    ("ro_community", "کامیونیتی فقط‌خواندنی"),
    ("rw_community", "کامیونیتی خواندنی‌نوشتنی"),
    ("sys_name", "نام سیستم"),
    ("sys_location", "موقعیت سیستم"),
    ("sys_contact", "تماس سیستم"),
    ("sys_descr", "شرح سیستم"),
    ("location", "موقعیت"),
    ("contact", "تماس"),
    ("port", "درگاه"),
    ("listen_address", "نشانی شنود"),
    ("agent_address", "نشانی عامل"),
    ("version", "نسخه"),
    ("versions", "نسخه‌ها"),
    ("allowed_hosts", "میزبان‌های مجاز"),
    ("trap_host", "میزبان Trap"),
    ("trap_community", "کامیونیتی Trap"),
    ("v3_users", "کاربران SNMPv3"),
    ("users", "کاربران"),
    ("security_level", "سطح امنیت"),
    ("auth_protocol", "پروتکل احراز هویت"),
    ("priv_protocol", "پروتکل رمزنگاری"),
    ("access", "دسترسی"),
    ("service_status", "وضعیت سرویس"),
    ("running", "در حال اجرا"),
    // pools
    ("pool_name", "نام استخر"),
    ("size", "اندازه"),
    ("capacity", "ظرفیت"),
    ("allocated", "فضای تخصیص‌یافته"),
    ("alloc", "فضای تخصیص‌یافته"),
    ("free", "فضای آزاد"),
    ("used", "فضای استفاده‌شده"),
    ("avail", "فضای در دسترس"),
    ("usage_percent", "درصد استفاده"),
    ("fragmentation", "پراکندگی"),
    ("frag", "پراکندگی"),
    ("dedupratio", "نسبت حذف تکرار"),
    ("dedup_ratio", "نسبت حذف تکرار"),
    ("compressratio", "نسبت فشرده‌سازی"),
    ("compression", "فشرده‌سازی"),
    ("guid", "GUID"),
    ("altroot", "ریشه جایگزین"),
    ("ashift", "ashift"),
    ("autoexpand", "گسترش خودکار"),
    ("autoreplace", "جایگزینی خودکار"),
    ("autotrim", "Trim خودکار"),
    ("multihost", "چندمیزبانی"),
    ("listsnapshots", "نمایش اسنپ‌شات‌ها"),
    ("readonly", "فقط خواندنی"),
    ("failmode", "رفتار هنگام خطا"),
    ("vdevs", "دستگاه‌های مجازی"),
    ("devices", "دستگاه‌ها"),
    ("disks", "دیسک‌ها"),
    ("read_errors", "خطاهای خواندن"),
    ("write_errors", "خطاهای نوشتن"),
    ("checksum_errors", "خطاهای checksum"),
    ("scan", "پویش"),
    ("errors", "خطاها"),
    // filesystems
    ("dataset", "دیتاست"),
    ("mountpoint", "نقطه اتصال"),
    ("mount_point", "نقطه اتصال"),
    ("mounted", "متصل"),
    ("filesystem", "فایل‌سیستم"),
    ("fstype", "نوع فایل‌سیستم"),
    ("device", "دستگاه"),
    ("quota", "سهمیه"),
    ("refquota", "سهمیه ارجاعی"),
    ("reservation", "رزرو"),
    ("refreservation", "رزرو ارجاعی"),
    ("referenced", "فضای ارجاع‌شده"),
    ("recordsize", "اندازه رکورد"),
    ("atime", "ثبت زمان دسترسی"),
    ("sharenfs", "اشتراک NFS"),
    ("sharesmb", "اشتراک SMB"),
    ("snapshots", "اسنپ‌شات‌ها"),
];

/// Word translations used for keys missing from [`KEY_LABELS`].
pub const WORD_LABELS: &[(&str, &str)] = &[
    ("name", "نام"),
    ("path", "مسیر"),
    ("user", "کاربر"),
    ("users", "کاربران"),
    ("group", "گروه"),
    ("groups", "گروه‌ها"),
    ("time", "زمان"),
    ("date", "تاریخ"),
    ("size", "اندازه"),
    ("count", "تعداد"),
    ("total", "کل"),
    ("max", "حداکثر"),
    ("min", "حداقل"),
    ("last", "آخرین"),
    ("password", "گذرواژه"),
    ("account", "حساب"),
    ("host", "میزبان"),
    ("hosts", "میزبان‌ها"),
    ("address", "نشانی"),
    ("port", "درگاه"),
    ("status", "وضعیت"),
    ("enabled", "فعال"),
    ("read", "خواندن"),
    ("write", "نوشتن"),
    ("only", "فقط"),
    ("allow", "مجاز"),
    ("deny", "ممنوع"),
    ("mode", "حالت"),
    ("type", "نوع"),
    ("version", "نسخه"),
    ("pool", "استخر"),
    ("disk", "دیسک"),
    ("disks", "دیسک‌ها"),
    ("free", "آزاد"),
    ("used", "استفاده‌شده"),
    ("errors", "خطاها"),
    ("error", "خطا"),
    ("created", "ایجادشده"),
    ("updated", "به‌روزشده"),
    ("options", "گزینه‌ها"),
    ("description", "توضیحات"),
    ("owner", "مالک"),
    ("mask", "ماسک"),
    ("directory", "پوشه"),
    ("file", "فایل"),
    ("share", "اشتراک"),
    ("security", "امنیت"),
];

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Translated label of a known canonical key.
#[must_use]
pub fn known_label(key: &str) -> Option<&'static str> {
    lookup(KEY_LABELS, key)
}

/// Display label for a raw backend key.
#[must_use]
pub fn label_for(raw_key: &str) -> String {
    let key = canonical_key(raw_key);
    if let Some(label) = known_label(&key) {
        return label.to_string();
    }

    let words: Vec<&str> = key.split('_').filter(|w| !w.is_empty()).collect();
    let translated: Vec<Option<&str>> = words.iter().map(|w| lookup(WORD_LABELS, w)).collect();
    if translated.iter().all(Option::is_none) {
        return raw_key.trim().to_string();
    }
    words
        .iter()
        .zip(translated)
        .map(|(word, label)| label.unwrap_or(*word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_spellings() {
        assert_eq!(canonical_key("valid users"), "valid_users");
        assert_eq!(canonical_key("validUsers"), "valid_users");
        assert_eq!(canonical_key("Valid-Users"), "valid_users");
        assert_eq!(canonical_key("User SID"), "user_sid");
        assert_eq!(canonical_key("HomeDir Drive"), "home_dir_drive");
        assert_eq!(canonical_key(" a..b "), "a_b");
    }

    #[test]
    fn known_keys() {
        assert_eq!(label_for("valid users"), "کاربران مجاز");
        assert_eq!(label_for("full_path"), "مسیر کامل");
        assert_eq!(label_for("Password last set"), "آخرین تغییر گذرواژه");
    }

    #[test]
    fn word_by_word_fallback() {
        assert_eq!(label_for("backup_path"), "backup مسیر");
        assert_eq!(label_for("maxUsers"), "حداکثر کاربران");
    }

    #[test]
    fn verbatim_fallback() {
        assert_eq!(label_for("unknownField"), "unknownField");
        assert_eq!(label_for("zzz"), "zzz");
    }

    #[test]
    fn tables_have_unique_keys() {
        for table in [KEY_LABELS, WORD_LABELS] {
            let mut keys: Vec<_> = table.iter().map(|(k, _)| *k).collect();
            keys.sort_unstable();
            let len = keys.len();
            keys.dedup();
            assert_eq!(keys.len(), len);
        }
    }
}
