//! 内容面板消息
//!
//! 实体列表光标与详情面板的选择 / 固定操作

/// 内容面板消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,

    // ========== 选择 / 固定 ==========
    /// 固定或取消固定当前项
    TogglePin,
    /// 取消固定当前项
    Unpin,
    /// 清空当前视图的固定项
    ClearPins,

    // ========== 对比表列 ==========
    PreviousColumn,
    NextColumn,
    /// 对当前列执行其首个操作（固定列：移除；预览列：固定）
    ColumnAction,

    // ========== 存储池 ==========
    /// 打开存储池属性开关弹窗
    ShowToggles,
}
