//! 页面状态定义

use nas_console_core::EntityKind;

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页
    #[default]
    Home,
    /// 实体列表 + 详情面板
    Entities(EntityKind),
}

impl Page {
    /// 当前页面对应的实体类型
    pub fn entity_kind(self) -> Option<EntityKind> {
        match self {
            Page::Home => None,
            Page::Entities(kind) => Some(kind),
        }
    }
}
