// ==========================================
// 自行车门店管理后台 - 报表领域模型
// ==========================================
// 职责: 报表聚合行、报表文件类型、已保存文件信息
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

// ==========================================
// 报表聚合行
// ==========================================

/// 热销商品排行行（按订单行数计）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDataItem {
    pub label: String, // 商品名称
    pub value: i64,    // 订单行数
    pub brand: Option<String>,
    pub category: Option<String>,
}

/// 品牌销售额行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandSales {
    pub brand: String,
    pub total_sales: f64,
}

/// 客户下单数行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerOrderCount {
    pub customer_name: String,
    pub order_count: i64,
}

/// 可导出为 CSV 的报表行；表头与序列化字段名一致
pub trait CsvRow: Serialize {
    const HEADERS: &'static [&'static str];
}

impl CsvRow for ReportDataItem {
    const HEADERS: &'static [&'static str] = &["label", "value", "brand", "category"];
}

impl CsvRow for BrandSales {
    const HEADERS: &'static [&'static str] = &["brand", "total_sales"];
}

impl CsvRow for CustomerOrderCount {
    const HEADERS: &'static [&'static str] = &["customer_name", "order_count"];
}

// ==========================================
// ReportKind - 可导出的报表种类
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Popular,   // 热销商品
    Sales,     // 品牌销售额
    Customers, // 客户下单排行
}

impl ReportKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "popular" | "products" => Some(ReportKind::Popular),
            "sales" => Some(ReportKind::Sales),
            "customers" => Some(ReportKind::Customers),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReportKind::Popular => "popular",
            ReportKind::Sales => "sales",
            ReportKind::Customers => "customers",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==========================================
// ReportFileType - 报表落盘格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFileType {
    Html, // 原样保存
    Txt,  // 去除标签后保存
}

impl ReportFileType {
    /// 大小写不敏感解析
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "html" => Some(ReportFileType::Html),
            "txt" => Some(ReportFileType::Txt),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ReportFileType::Html => "html",
            ReportFileType::Txt => "txt",
        }
    }
}

/// 按文件名后缀推断下载的 Content-Type
pub fn content_type_for(file_name: &str) -> &'static str {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".html") {
        "text/html; charset=utf-8"
    } else if lower.ends_with(".csv") {
        "text/csv; charset=utf-8"
    } else {
        "text/plain; charset=utf-8"
    }
}

// ==========================================
// SavedFileInfo - 已保存报表文件
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedFileInfo {
    pub file_name: String,
    pub file_size: u64,
    pub created_date: NaiveDateTime,
    pub has_description: bool,

    // 服务器本地路径，不对外输出
    #[serde(skip)]
    pub file_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_parse_is_case_insensitive() {
        assert_eq!(ReportFileType::parse("HTML"), Some(ReportFileType::Html));
        assert_eq!(ReportFileType::parse(" txt "), Some(ReportFileType::Txt));
        assert_eq!(ReportFileType::parse("pdf"), None);
    }

    #[test]
    fn test_content_type_for() {
        assert!(content_type_for("a_20240101120000.html").starts_with("text/html"));
        assert!(content_type_for("a.CSV").starts_with("text/csv"));
        assert!(content_type_for("a.txt").starts_with("text/plain"));
    }

    #[test]
    fn test_report_kind_parse() {
        assert_eq!(ReportKind::parse("Sales"), Some(ReportKind::Sales));
        assert_eq!(ReportKind::parse("products"), Some(ReportKind::Popular));
        assert_eq!(ReportKind::parse("stock"), None);
    }
}
