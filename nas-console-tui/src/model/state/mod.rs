//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod entity_page;
mod modal;

pub use entity_page::{EntityPageState, EntityPages, QueryState};
pub use modal::{Modal, ModalState};
