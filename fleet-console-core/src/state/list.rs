//! 机器人列表页状态

use fleet_console_api::{BotRecord, ListQuery, DEFAULT_PAGE_SIZE};

/// 机器人列表页状态
///
/// 行数据与总数只会被一次成功的列表响应整体替换，绝不增量修补，
/// 因此视图不会混合两次不同过滤/页码的结果。
#[derive(Debug)]
pub struct BotListState {
    /// 当前页的记录
    pub bots: Vec<BotRecord>,
    /// 服务器报告的总数（分页边界的唯一依据）
    pub total: u64,
    /// 当前页码（从 1 开始）
    pub page: u32,
    /// 每页条数（创建后不再变化）
    pub page_size: u32,
    /// 已提交的地址过滤串
    pub filter: String,
    /// 当前选中的索引
    pub selected: usize,
}

impl BotListState {
    /// 创建新的列表状态
    #[must_use]
    pub fn new() -> Self {
        Self {
            bots: Vec::new(),
            total: 0,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            filter: String::new(),
            selected: 0,
        }
    }

    /// 当前的列表查询参数
    #[must_use]
    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            page_size: self.page_size,
            address: self.filter.clone(),
        }
    }

    /// 总页数（total 为 0 时视为 1 页）
    #[must_use]
    pub fn page_count(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.page_size.max(1)));
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    /// 用一次成功响应整体替换行数据与总数
    pub fn set_page_data(&mut self, bots: Vec<BotRecord>, total: u64) {
        self.bots = bots;
        self.total = total;
        if self.selected >= self.bots.len() {
            self.selected = self.bots.len().saturating_sub(1);
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.bots.is_empty() && self.selected < self.bots.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.bots.is_empty() {
            self.selected = self.bots.len() - 1;
        }
    }

    /// 获取当前选中的记录
    #[must_use]
    pub fn selected_bot(&self) -> Option<&BotRecord> {
        self.bots.get(self.selected)
    }
}

impl Default for BotListState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, address: &str) -> BotRecord {
        BotRecord {
            id,
            address: address.to_string(),
            crt_file: String::new(),
            key_file: String::new(),
            ca_file: String::new(),
            status: "online".to_string(),
            create_time: 0,
            update_time: 0,
        }
    }

    #[test]
    fn page_data_replaces_atomically() {
        let mut state = BotListState::new();
        state.set_page_data(vec![record(1, "a:1"), record(2, "b:2")], 12);
        assert_eq!(state.bots.len(), 2);
        assert_eq!(state.total, 12);

        state.set_page_data(vec![record(3, "c:3")], 1);
        assert_eq!(state.bots.len(), 1);
        assert_eq!(state.bots[0].id, 3);
        assert_eq!(state.total, 1);
    }

    #[test]
    fn replacement_clamps_selection() {
        let mut state = BotListState::new();
        state.set_page_data(vec![record(1, "a:1"), record(2, "b:2"), record(3, "c:3")], 3);
        state.select_last();
        assert_eq!(state.selected, 2);

        state.set_page_data(vec![record(4, "d:4")], 1);
        assert_eq!(state.selected, 0);

        state.set_page_data(Vec::new(), 0);
        assert_eq!(state.selected, 0);
        assert!(state.selected_bot().is_none());
    }

    #[test]
    fn page_count_math() {
        let mut state = BotListState::new();
        assert_eq!(state.page_count(), 1);

        state.total = 10;
        assert_eq!(state.page_count(), 1);

        state.total = 11;
        assert_eq!(state.page_count(), 2);

        state.total = 95;
        assert_eq!(state.page_count(), 10);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = BotListState::new();
        state.select_previous();
        state.select_next();
        assert_eq!(state.selected, 0);

        state.set_page_data(vec![record(1, "a:1"), record(2, "b:2")], 2);
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
        state.select_first();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn query_reflects_current_state() {
        let mut state = BotListState::new();
        state.page = 3;
        state.filter = "10.0".to_string();
        let query = state.query();
        assert_eq!(query.page, 3);
        assert_eq!(query.page_size, 10);
        assert_eq!(query.address, "10.0");
    }
}
