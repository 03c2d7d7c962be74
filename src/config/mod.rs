// ==========================================
// 自行车门店管理后台 - 配置层
// ==========================================
// 职责:
// - AppConfig: 进程级配置（环境变量 + 默认值）
// - ConfigManager: 运行期配置（config_kv 表）
// ==========================================

pub mod app_config;
pub mod config_manager;

// 重导出核心配置类型
pub use app_config::{env_keys, AppConfig};
pub use config_manager::{config_keys, ConfigManager};
