// ==========================================
// 自行车门店管理后台 - 进程配置
// ==========================================
// 来源: 环境变量，未设置时使用默认值并记录日志
// ==========================================

use anyhow::{anyhow, Context};
use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

/// 环境变量名
pub mod env_keys {
    pub const BIND: &str = "BIKE_STORE_BIND";
    pub const DB_PATH: &str = "BIKE_STORE_DB_PATH";
    pub const REPORTS_DIR: &str = "BIKE_STORE_REPORTS_DIR";
    pub const LOCALE: &str = "BIKE_STORE_LOCALE";
}

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_LOCALE: &str = "en";
const DB_FILE_NAME: &str = "bike_stores.db";
const REPORTS_DIR_NAME: &str = "Reports";

/// 进程级配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: SocketAddr,
    pub db_path: PathBuf,
    pub reports_dir: PathBuf,
    pub locale: String,
}

impl AppConfig {
    /// 从环境变量加载
    pub fn from_env() -> anyhow::Result<Self> {
        let bind: SocketAddr = try_load(env_keys::BIND, DEFAULT_BIND)?;

        let db_path = match non_empty_var(env_keys::DB_PATH) {
            Some(p) => PathBuf::from(p),
            None => {
                let p = default_db_path();
                info!("{} not set, using default: {}", env_keys::DB_PATH, p.display());
                p
            }
        };

        let reports_dir = match non_empty_var(env_keys::REPORTS_DIR) {
            Some(p) => PathBuf::from(p),
            None => {
                let p = default_reports_dir(&db_path);
                info!("{} not set, using default: {}", env_keys::REPORTS_DIR, p.display());
                p
            }
        };

        let locale: String = try_load(env_keys::LOCALE, DEFAULT_LOCALE)?;

        Ok(Self {
            bind,
            db_path,
            reports_dir,
            locale,
        })
    }

    /// 以指定数据库路径构建（报表目录取同级 Reports）
    pub fn with_db_path(db_path: impl Into<PathBuf>) -> Self {
        let db_path = db_path.into();
        let reports_dir = default_reports_dir(&db_path);
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            db_path,
            reports_dir,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// 数据库路径字符串（供 rusqlite 使用）
    pub fn db_path_str(&self) -> anyhow::Result<&str> {
        self.db_path
            .to_str()
            .ok_or_else(|| anyhow!("数据库路径不是合法 UTF-8: {}", self.db_path.display()))
    }

    /// 确保数据库所在目录存在
    pub fn ensure_db_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("创建数据库目录失败: {}", parent.display()))?;
            }
        }
        Ok(())
    }
}

/// 默认数据库路径: <用户数据目录>/bike-store-admin/bike_stores.db
///
/// 无法获取用户数据目录时回退到当前目录。
pub fn default_db_path() -> PathBuf {
    match dirs::data_dir() {
        Some(data_dir) => data_dir.join("bike-store-admin").join(DB_FILE_NAME),
        None => PathBuf::from(".").join(DB_FILE_NAME),
    }
}

/// 默认报表目录: 数据库同级的 Reports
pub fn default_reports_dir(db_path: &Path) -> PathBuf {
    db_path
        .parent()
        .map(|p| p.join(REPORTS_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(REPORTS_DIR_NAME))
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let raw = non_empty_var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow!("环境变量 {key} 取值非法: {raw} ({e})")
    })
}
