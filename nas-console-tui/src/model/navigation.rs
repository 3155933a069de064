//! 导航状态定义

use nas_console_core::EntityKind;

use super::Page;

/// 导航项 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Home,
    Entity(EntityKind),
}

impl NavItemId {
    /// 对应的页面
    pub fn page(self) -> Page {
        match self {
            NavItemId::Home => Page::Home,
            NavItemId::Entity(kind) => Page::Entities(kind),
        }
    }
}

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub icon: &'static str,
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态：首页 + 每类实体一项
    pub fn new() -> Self {
        let mut items = vec![NavItem {
            id: NavItemId::Home,
            icon: "⌂",
        }];
        items.extend(EntityKind::ALL.iter().map(|kind| NavItem {
            id: NavItemId::Entity(*kind),
            icon: icon_for(*kind),
        }));
        Self { items, selected: 0 }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 获取当前选中的导航项 ID
    pub fn current_id(&self) -> Option<NavItemId> {
        self.items.get(self.selected).map(|item| item.id)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

fn icon_for(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::SambaShare | EntityKind::NfsShare => "⇄",
        EntityKind::SambaUser => "@",
        EntityKind::SnmpConfig => "≋",
        EntityKind::Pool => "◎",
        EntityKind::FileSystem => "▤",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_then_every_kind() {
        let nav = NavigationState::new();
        assert_eq!(nav.items.len(), EntityKind::ALL.len() + 1);
        assert_eq!(nav.current_id(), Some(NavItemId::Home));
    }

    #[test]
    fn selection_is_clamped() {
        let mut nav = NavigationState::new();
        nav.select_previous();
        assert_eq!(nav.selected, 0);
        nav.select_last();
        nav.select_next();
        assert_eq!(nav.current_id(), Some(NavItemId::Entity(EntityKind::FileSystem)));
    }
}
