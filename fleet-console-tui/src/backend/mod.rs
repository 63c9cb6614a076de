//! Backend 层：本地配置服务

mod config_service;

pub use config_service::{ConfigService, ConsoleConfig, JsonConfigService};
