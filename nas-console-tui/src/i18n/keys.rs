//! 翻译键定义
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**
//! 3. **跨组件复用归 `common.*`**
//! 4. **键盘提示归 `hints.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    pub common: CommonTexts,
    pub hints: HintTexts,
    pub nav: NavTexts,
    pub home: HomeTexts,
    pub entity: EntityPageTexts,
    pub modal: ModalTexts,
    pub toast: ToastTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    /// 后端没有给出消息时的通用失败提示
    pub generic_error: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub switch_panel: &'static str,
    pub navigate: &'static str,
    pub open: &'static str,
    pub select: &'static str,
    pub pin: &'static str,
    pub unpin: &'static str,
    pub clear_pins: &'static str,
    pub column: &'static str,
    pub column_action: &'static str,
    pub toggles: &'static str,
    pub refresh: &'static str,
    pub apply: &'static str,
    pub close: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

pub struct NavTexts {
    pub title: &'static str,
    pub home: &'static str,
    pub samba_shares: &'static str,
    pub nfs_shares: &'static str,
    pub samba_users: &'static str,
    pub snmp: &'static str,
    pub pools: &'static str,
    pub file_systems: &'static str,
}

// ============================================================================
// 页面
// ============================================================================

pub struct HomeTexts {
    pub welcome: &'static str,
    pub backend: &'static str,
    pub not_loaded: &'static str,
    pub items: &'static str,
    pub pinned: &'static str,
}

pub struct EntityPageTexts {
    pub list_title: &'static str,
    pub detail_title: &'static str,
    pub comparison_title: &'static str,
    pub empty_list: &'static str,
    pub select_hint: &'static str,
    pub attribute: &'static str,
    pub preview: &'static str,
    pub pinned_marker: &'static str,
    pub different_marker: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub help_title: &'static str,
    pub toggles_title: &'static str,
    pub no_toggles: &'static str,
    pub help_lines: &'static [(&'static str, &'static str)],
}

// ============================================================================
// 状态栏提示消息
// ============================================================================

pub struct ToastTexts {
    pub refreshing: &'static str,
    pub property_updated: &'static str,
    pub pins_cleared: &'static str,
    pub not_a_pool: &'static str,
}
