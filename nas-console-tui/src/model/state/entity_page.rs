//! 实体列表页面状态

use nas_console_core::detail::{ColumnStatus, DetailColumnInput, DetailViewState};
use nas_console_core::{EntityKind, EntityRecord};

/// 列表查询状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryState {
    /// 尚未请求
    #[default]
    Idle,
    Loading,
    Failed(String),
    Ready,
}

/// 单类实体的页面状态
#[derive(Debug)]
pub struct EntityPageState {
    pub kind: EntityKind,
    /// 最近一次成功拉取的列表
    pub records: Vec<EntityRecord>,
    pub query: QueryState,
    /// 列表光标
    pub selected: usize,
    /// 对比表中的列光标
    pub column: usize,
    /// 最新请求序号，只接受与之相同的响应
    request_seq: u64,
}

impl EntityPageState {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
            query: QueryState::Idle,
            selected: 0,
            column: 0,
            request_seq: 0,
        }
    }

    // ========== 光标 ==========

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if !self.records.is_empty() && self.selected < self.records.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.records.len().saturating_sub(1);
    }

    /// 光标所在的记录（加载中或失败时没有）
    pub fn selected_record(&self) -> Option<&EntityRecord> {
        if self.query != QueryState::Ready {
            return None;
        }
        self.records.get(self.selected)
    }

    pub fn find(&self, id: &str) -> Option<&EntityRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// 对比表中被选中的列（列数变化后夹到范围内）
    pub fn focused_column(&self, count: usize) -> Option<usize> {
        count.checked_sub(1).map(|last| self.column.min(last))
    }

    // ========== 请求 ==========

    pub fn needs_fetch(&self) -> bool {
        self.query == QueryState::Idle
    }

    /// 开始新请求，返回其序号
    pub fn begin_fetch(&mut self) -> u64 {
        self.request_seq += 1;
        self.query = QueryState::Loading;
        self.request_seq
    }

    /// 应用请求结果；过期响应被丢弃并返回 `false`
    pub fn apply_fetch(&mut self, seq: u64, result: Result<Vec<EntityRecord>, String>) -> bool {
        if seq != self.request_seq {
            log::debug!(
                "dropping stale {} response (seq {seq}, latest {})",
                self.kind,
                self.request_seq
            );
            return false;
        }

        match result {
            Ok(records) => {
                self.records = records;
                self.selected = self.selected.min(self.records.len().saturating_sub(1));
                self.query = QueryState::Ready;
            }
            Err(message) => {
                self.query = QueryState::Failed(message);
            }
        }
        true
    }

    // ========== 详情面板 ==========

    /// 详情面板的列：先是全部固定项，再是激活项
    ///
    /// 请求进行中或失败时，每列只带该状态，不显示缓存的属性；
    /// 加载完成后，列表中已不存在的 id 被跳过。
    pub fn detail_columns(&self, state: &DetailViewState) -> Vec<DetailColumnInput> {
        let mut ids: Vec<&str> = state.pinned_item_ids.iter().map(String::as_str).collect();
        if let Some(active) = state.active_item_id.as_deref() {
            if !ids.contains(&active) {
                ids.push(active);
            }
        }

        ids.into_iter()
            .filter_map(|id| {
                let record = self.find(id);
                let title = record.map_or_else(|| id.to_string(), |r| r.title.clone());
                match &self.query {
                    QueryState::Idle | QueryState::Loading => {
                        Some(DetailColumnInput::new(id, title, ColumnStatus::Loading))
                    }
                    QueryState::Failed(message) => Some(DetailColumnInput::new(
                        id,
                        title,
                        ColumnStatus::Failed(message.clone()),
                    )),
                    QueryState::Ready => record.map(EntityRecord::detail_column),
                }
            })
            .collect()
    }
}

/// 全部实体页面，按 [`EntityKind::ALL`] 顺序
#[derive(Debug)]
pub struct EntityPages {
    pages: [EntityPageState; 6],
}

impl EntityPages {
    pub fn new() -> Self {
        Self {
            pages: EntityKind::ALL.map(EntityPageState::new),
        }
    }

    pub fn get(&self, kind: EntityKind) -> &EntityPageState {
        &self.pages[index(kind)]
    }

    pub fn get_mut(&mut self, kind: EntityKind) -> &mut EntityPageState {
        &mut self.pages[index(kind)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityPageState> {
        self.pages.iter()
    }
}

impl Default for EntityPages {
    fn default() -> Self {
        Self::new()
    }
}

fn index(kind: EntityKind) -> usize {
    match kind {
        EntityKind::SambaShare => 0,
        EntityKind::NfsShare => 1,
        EntityKind::SambaUser => 2,
        EntityKind::SnmpConfig => 3,
        EntityKind::Pool => 4,
        EntityKind::FileSystem => 5,
    }
}
