//! 搜索框状态

/// 搜索框输入缓冲
///
/// 未提交的输入只存在于此；提交后过滤串才进入核心列表状态。
#[derive(Debug, Default)]
pub struct SearchState {
    /// 输入内容
    pub input: String,
}

impl SearchState {
    /// 输入字符
    pub fn insert(&mut self, c: char) {
        self.input.push(c);
    }

    /// 删除末尾字符
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// 清空输入
    pub fn clear(&mut self) {
        self.input.clear();
    }
}
