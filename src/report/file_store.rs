// ==========================================
// 报表文件存储
// ==========================================
// 目录结构:
//   <root>/<name>_<yyyyMMddHHmmss>.<html|txt>
//   <root>/<name>_<yyyyMMddHHmmss>.<html|txt>.description.txt   (可选)
// 说明: 无并发控制、无持久性保证；同名同秒保存会覆盖
// ==========================================

use crate::domain::report::{ReportFileType, SavedFileInfo};
use crate::report::error::{ReportFileError, ReportFileResult};
use crate::report::render::{is_bare_file_name, sanitize_file_name, strip_tags};
use chrono::{DateTime, Local, NaiveDateTime};
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

/// 描述 sidecar 文件后缀
pub const DESCRIPTION_SUFFIX: &str = ".description.txt";

const TIMESTAMP_FMT: &str = "%Y%m%d%H%M%S";

/// 报表文件存储
#[derive(Debug, Clone)]
pub struct ReportFileStore {
    root: PathBuf,
}

impl ReportFileStore {
    /// 创建存储（不立即创建目录）
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 确保目录存在
    pub fn ensure_dir(&self) -> ReportFileResult<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
            tracing::info!(path = %self.root.display(), "已创建报表目录");
        }
        Ok(())
    }

    /// 组合完整文件名: `{name}_{yyyyMMddHHmmss}.{ext}`
    pub fn build_file_name(
        base_name: &str,
        file_type: ReportFileType,
        now: NaiveDateTime,
    ) -> ReportFileResult<String> {
        let base = sanitize_file_name(base_name)
            .ok_or_else(|| ReportFileError::InvalidFileName(base_name.to_string()))?;
        Ok(format!(
            "{}_{}.{}",
            base,
            now.format(TIMESTAMP_FMT),
            file_type.extension()
        ))
    }

    /// 保存报表（使用当前本地时间）
    pub fn save(
        &self,
        base_name: &str,
        file_type: ReportFileType,
        report_html: &str,
        description: Option<&str>,
    ) -> ReportFileResult<String> {
        self.save_at(
            base_name,
            file_type,
            report_html,
            description,
            Local::now().naive_local(),
        )
    }

    /// 保存报表（指定时间戳）
    ///
    /// # 返回
    /// - Ok(String): 实际保存的文件名
    ///
    /// # 规则
    /// - html: 原样写入
    /// - txt: 去除标签后写入
    /// - description 非空时写入 sidecar
    pub fn save_at(
        &self,
        base_name: &str,
        file_type: ReportFileType,
        report_html: &str,
        description: Option<&str>,
        now: NaiveDateTime,
    ) -> ReportFileResult<String> {
        self.ensure_dir()?;

        let file_name = Self::build_file_name(base_name, file_type, now)?;
        let file_path = self.root.join(&file_name);

        let content = match file_type {
            ReportFileType::Html => report_html.to_string(),
            ReportFileType::Txt => strip_tags(report_html),
        };
        fs::write(&file_path, content)?;

        if let Some(desc) = description.filter(|d| !d.trim().is_empty()) {
            fs::write(self.sidecar_path(&file_name), desc)?;
        }

        tracing::info!(file = %file_name, "报表已保存");
        Ok(file_name)
    }

    /// 列出已保存的报表（不含 sidecar），按创建时间倒序
    pub fn list(&self) -> ReportFileResult<Vec<SavedFileInfo>> {
        self.ensure_dir()?;

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let metadata = entry.metadata()?;
            if !metadata.is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().to_string();
            if file_name.ends_with(DESCRIPTION_SUFFIX) {
                continue;
            }

            let created = metadata
                .created()
                .or_else(|_| metadata.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);

            files.push(SavedFileInfo {
                has_description: self.sidecar_path(&file_name).is_file(),
                file_size: metadata.len(),
                created_date: DateTime::<Local>::from(created).naive_local(),
                file_path: entry.path(),
                file_name,
            });
        }

        sort_newest_first(&mut files);
        Ok(files)
    }

    /// 读取报表内容
    pub fn read(&self, file_name: &str) -> ReportFileResult<Vec<u8>> {
        let path = self.resolve(file_name)?;
        if !path.is_file() {
            return Err(ReportFileError::NotFound(file_name.to_string()));
        }
        Ok(fs::read(path)?)
    }

    /// 删除报表及其 sidecar
    ///
    /// # 返回
    /// - Ok(true): 已删除
    /// - Ok(false): 文件不存在
    pub fn delete(&self, file_name: &str) -> ReportFileResult<bool> {
        let path = self.resolve(file_name)?;
        if !path.is_file() {
            return Ok(false);
        }

        fs::remove_file(&path)?;

        let sidecar = self.sidecar_path(file_name);
        if sidecar.is_file() {
            fs::remove_file(sidecar)?;
        }

        tracing::info!(file = %file_name, "报表已删除");
        Ok(true)
    }

    /// 读取描述；无 sidecar 时返回 None
    pub fn description(&self, file_name: &str) -> ReportFileResult<Option<String>> {
        self.resolve(file_name)?;
        let sidecar = self.sidecar_path(file_name);
        if !sidecar.is_file() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(sidecar)?))
    }

    /// 校验裸文件名并拼接到根目录
    fn resolve(&self, file_name: &str) -> ReportFileResult<PathBuf> {
        if !is_bare_file_name(file_name) {
            tracing::warn!(file = %file_name, "拒绝非法报表文件名");
            return Err(ReportFileError::InvalidFileName(file_name.to_string()));
        }
        Ok(self.root.join(file_name))
    }

    fn sidecar_path(&self, file_name: &str) -> PathBuf {
        self.root.join(format!("{}{}", file_name, DESCRIPTION_SUFFIX))
    }
}

/// 按创建时间倒序；时间相同时按文件名倒序（同名报表的时间戳后缀越大越靠前）
pub(crate) fn sort_newest_first(files: &mut [SavedFileInfo]) {
    files.sort_by(|a, b| {
        b.created_date
            .cmp(&a.created_date)
            .then_with(|| b.file_name.cmp(&a.file_name))
    });
}
