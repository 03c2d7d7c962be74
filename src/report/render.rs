// ==========================================
// 报表内容渲染与文件名处理
// ==========================================

use crate::domain::report::CsvRow;
use crate::report::error::{ReportFileError, ReportFileResult};
use regex::Regex;
use std::sync::OnceLock;

fn tag_regex() -> &'static Regex {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    // 懒惰匹配；(?s) 使跨行标签也被剥离
    TAG_RE.get_or_init(|| Regex::new(r"(?s)<.*?>").expect("valid tag pattern"))
}

/// 去除 HTML 标签，保留文本
pub fn strip_tags(html: &str) -> String {
    tag_regex().replace_all(html, "").into_owned()
}

/// 清洗用户提供的报表基础文件名
///
/// 规则:
/// - 仅保留 ASCII 字母、数字、`-`、`_`、`.`，其他字符替换为 `_`
/// - 去掉首尾空白及开头的 `.`
/// - 结果为空返回 None
pub fn sanitize_file_name(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// 是否为不含路径成分的裸文件名
///
/// 名称中间出现的 `..`（如 `q1..final_*.html`）只是普通字符，不构成路径成分
pub fn is_bare_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
        && !name.contains(':')
}

/// 将报表行序列化为 CSV（首行为表头，空报表也输出表头）
pub fn rows_to_csv<T: CsvRow>(rows: &[T]) -> ReportFileResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(T::HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ReportFileError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ReportFileError::Csv(e.to_string()))
}
