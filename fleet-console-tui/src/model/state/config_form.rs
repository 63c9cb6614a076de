//! 结构化配置编辑器状态
//!
//! 独立于原始命令查看器的协作组件：仅以 bot id 为键，
//! 自行负责拉取 / 编辑 / 保存，与原始命令路径不共享任何缓存。
//! 字段按通用键值对展示，不感知具体 schema。

use fleet_console_api::ConfigFields;
use serde_json::Value;

/// 单个配置字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigField {
    /// 字段键名
    pub key: String,
    /// 编辑缓冲中的字符串表示
    pub value: String,
    /// 原始值是否为 JSON 字符串（决定保存时的包装方式）
    pub was_string: bool,
}

/// 拉取/保存生命周期
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigFormPhase {
    /// 正在拉取
    #[default]
    Loading,
    /// 可编辑
    Ready,
    /// 正在保存
    Saving,
    /// 拉取失败
    Failed(String),
}

/// 结构化配置编辑器状态
#[derive(Debug, Default)]
pub struct ConfigFormState {
    /// 目标 bot id
    pub bot_id: u64,
    /// 展开后的字段列表（按键名排序）
    pub fields: Vec<ConfigField>,
    /// 当前选中的字段索引
    pub selected: usize,
    /// 是否正在编辑选中字段的值
    pub editing: bool,
    /// 值编辑缓冲
    pub buffer: String,
    /// 生命周期阶段
    pub phase: ConfigFormPhase,
    /// 是否有未保存的修改
    pub dirty: bool,
}

impl ConfigFormState {
    /// 为指定 bot 重置（随后由 update 层发起拉取）
    pub fn open(&mut self, bot_id: u64) {
        *self = Self {
            bot_id,
            ..Self::default()
        };
    }

    /// 拉取成功
    pub fn loaded(&mut self, fields: ConfigFields) {
        self.fields = fields
            .into_iter()
            .map(|(key, value)| {
                let was_string = value.is_string();
                let rendered = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                ConfigField {
                    key,
                    value: rendered,
                    was_string,
                }
            })
            .collect();
        self.fields.sort_by(|a, b| a.key.cmp(&b.key));
        self.selected = 0;
        self.editing = false;
        self.dirty = false;
        self.phase = ConfigFormPhase::Ready;
    }

    /// 拉取失败
    pub fn failed(&mut self, message: String) {
        self.phase = ConfigFormPhase::Failed(message);
    }

    /// 选择上一个字段
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一个字段
    pub fn select_next(&mut self) {
        if !self.fields.is_empty() && self.selected < self.fields.len() - 1 {
            self.selected += 1;
        }
    }

    /// 开始编辑选中字段
    pub fn begin_edit(&mut self) {
        if let Some(field) = self.fields.get(self.selected) {
            self.buffer = field.value.clone();
            self.editing = true;
        }
    }

    /// 提交编辑缓冲
    pub fn commit_edit(&mut self) {
        if !self.editing {
            return;
        }
        if let Some(field) = self.fields.get_mut(self.selected) {
            if field.value != self.buffer {
                field.value = self.buffer.clone();
                self.dirty = true;
            }
        }
        self.editing = false;
        self.buffer.clear();
    }

    /// 放弃编辑缓冲
    pub fn cancel_edit(&mut self) {
        self.editing = false;
        self.buffer.clear();
    }

    /// 编辑缓冲输入字符
    pub fn input(&mut self, c: char) {
        if self.editing {
            self.buffer.push(c);
        }
    }

    /// 编辑缓冲删除末尾字符
    pub fn backspace(&mut self) {
        if self.editing {
            self.buffer.pop();
        }
    }

    /// 还原为保存载荷
    ///
    /// 字符串字段原样包装；其余字段按 JSON 解析，解析失败时退化为字符串。
    #[must_use]
    pub fn to_fields(&self) -> ConfigFields {
        let mut map = ConfigFields::new();
        for field in &self.fields {
            let value = if field.was_string {
                Value::String(field.value.clone())
            } else {
                serde_json::from_str(&field.value)
                    .unwrap_or_else(|_| Value::String(field.value.clone()))
            };
            map.insert(field.key.clone(), value);
        }
        map
    }
}
