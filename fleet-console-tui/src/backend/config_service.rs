//! 配置服务
//!
//! 保存控制台自身的本地配置（服务器地址），
//! 使用 JSON 文件存储于用户配置目录。

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// 舰队管理服务器地址
    pub server_url: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".to_string(),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<ConsoleConfig>;

    /// 保存配置
    fn save(&self, config: &ConsoleConfig) -> Result<()>;
}

/// 获取配置目录路径
fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fleet-console")
}

/// 获取配置文件路径
fn config_file() -> PathBuf {
    config_dir().join("config.json")
}

/// 基于 JSON 文件的本地配置服务
#[derive(Debug, Default)]
pub struct JsonConfigService;

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<ConsoleConfig> {
        let path = config_file();

        if !path.exists() {
            return Ok(ConsoleConfig::default());
        }

        let content = fs::read_to_string(&path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                // 配置损坏时退回默认值，而不是拒绝启动
                log::warn!("配置文件解析失败，使用默认配置: {e}");
                Ok(ConsoleConfig::default())
            }
        }
    }

    fn save(&self, config: &ConsoleConfig) -> Result<()> {
        fs::create_dir_all(config_dir())?;
        let content = serde_json::to_string_pretty(config)?;
        fs::write(config_file(), content)?;
        Ok(())
    }
}
