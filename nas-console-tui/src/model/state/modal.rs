//! 弹窗状态

use nas_console_core::detail::PropertyToggle;

/// 弹窗枚举：每种弹窗携带自己的全部数据
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// 快捷键帮助
    Help,
    /// 存储池布尔属性列表
    PoolToggles {
        pool: String,
        toggles: Vec<PropertyToggle>,
        selected: usize,
    },
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// None = 无弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }

    pub fn show_pool_toggles(&mut self, pool: impl Into<String>, toggles: Vec<PropertyToggle>) {
        self.show(Modal::PoolToggles {
            pool: pool.into(),
            toggles,
            selected: 0,
        });
    }
}
