// ==========================================
// 自行车门店管理后台 - 运行期配置管理器
// ==========================================
// 职责: 配置查询、写入、快照
// 存储: config_kv 表 (key-value)
// ==========================================

use crate::db::open_sqlite_connection;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// 报表排行默认取前 N 名
pub const DEFAULT_TOP_N: u32 = 10;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 读取配置值
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    pub fn get_value(&self, key: &str) -> RepositoryResult<Option<String>> {
        let conn = self.get_conn()?;
        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// 写入配置值（存在则覆盖）
    pub fn set_value(&self, key: &str, value: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO config_kv (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;
        tracing::info!(key = %key, value = %value, "配置已更新");
        Ok(())
    }

    /// 全部配置快照（按 key 排序）
    pub fn snapshot(&self) -> RepositoryResult<BTreeMap<String, String>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare("SELECT key, value FROM config_kv ORDER BY key")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut map = BTreeMap::new();
        for row in rows {
            let (key, value) = row?;
            map.insert(key, value);
        }
        Ok(map)
    }

    // ===== 报表配置 =====

    /// 热销商品排行条数
    pub fn popular_top_n(&self) -> RepositoryResult<u32> {
        self.get_top_n(config_keys::REPORT_POPULAR_TOP_N)
    }

    /// 客户排行条数
    pub fn customer_top_n(&self) -> RepositoryResult<u32> {
        self.get_top_n(config_keys::REPORT_CUSTOMER_TOP_N)
    }

    /// 非法或非正数时回退默认值
    fn get_top_n(&self, key: &str) -> RepositoryResult<u32> {
        let value = match self.get_value(key)? {
            Some(v) => v,
            None => return Ok(DEFAULT_TOP_N),
        };

        match value.trim().parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => {
                tracing::warn!(key = %key, value = %value, "配置值非法，使用默认值");
                Ok(DEFAULT_TOP_N)
            }
        }
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 报表
    pub const REPORT_POPULAR_TOP_N: &str = "report.popular_top_n";
    pub const REPORT_CUSTOMER_TOP_N: &str = "report.customer_top_n";
}
