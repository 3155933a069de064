//! 弹窗消息

/// 弹窗消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    Close,
    SelectPrevious,
    SelectNext,
    Confirm,
}
