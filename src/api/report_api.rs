// ==========================================
// 自行车门店管理后台 - 报表 API
// ==========================================
// 职责:
// - 聚合报表（热销商品 / 品牌销售额 / 客户排行）
// - 报表文件保存、列表、下载、删除、描述读取
// - 报表 CSV 导出
// ==========================================

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::forms::SaveReportForm;
use crate::config::ConfigManager;
use crate::domain::report::{
    content_type_for, BrandSales, CustomerOrderCount, ReportDataItem, ReportFileType, ReportKind,
    SavedFileInfo,
};
use crate::i18n;
use crate::report::{rows_to_csv, ReportFileError, ReportFileStore};
use crate::repository::ReportRepository;

// ==========================================
// ReportOverview - 报表页数据
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOverview {
    pub popular_products: Vec<ReportDataItem>,
    pub saved_files: Vec<SavedFileInfo>,
}

/// 下载内容
#[derive(Debug, Clone)]
pub struct FileDownload {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

// ==========================================
// ReportApi - 报表 API
// ==========================================
pub struct ReportApi {
    report_repo: Arc<ReportRepository>,
    config_manager: Arc<ConfigManager>,
    file_store: Arc<ReportFileStore>,
}

impl ReportApi {
    pub fn new(
        report_repo: Arc<ReportRepository>,
        config_manager: Arc<ConfigManager>,
        file_store: Arc<ReportFileStore>,
    ) -> Self {
        Self {
            report_repo,
            config_manager,
            file_store,
        }
    }

    /// 报表页数据；报表目录不存在时自动创建
    pub fn overview(&self) -> ApiResult<ReportOverview> {
        Ok(ReportOverview {
            popular_products: self.popular_products()?,
            saved_files: self.list_files()?,
        })
    }

    // ===== 聚合报表 =====

    /// 热销商品排行（条数取自 report.popular_top_n）
    pub fn popular_products(&self) -> ApiResult<Vec<ReportDataItem>> {
        let limit = self.config_manager.popular_top_n()?;
        Ok(self.report_repo.popular_products(limit)?)
    }

    /// 品牌销售额
    pub fn sales_by_brand(&self) -> ApiResult<Vec<BrandSales>> {
        Ok(self.report_repo.sales_by_brand()?)
    }

    /// 客户下单排行（条数取自 report.customer_top_n）
    pub fn top_customers(&self) -> ApiResult<Vec<CustomerOrderCount>> {
        let limit = self.config_manager.customer_top_n()?;
        Ok(self.report_repo.top_customers(limit)?)
    }

    // ===== 报表文件 =====

    /// 保存报表
    ///
    /// # 返回
    /// - Ok(String): 实际保存的文件名 `{name}_{yyyyMMddHHmmss}.{html|txt}`
    /// - Err(InvalidInput): 文件名清洗后为空 / 不支持的文件类型
    /// - Err(FileStorageError): 写盘失败
    pub fn save_report(&self, form: &SaveReportForm) -> ApiResult<String> {
        let file_type = ReportFileType::parse(&form.file_type)
            .ok_or_else(|| ReportFileError::UnsupportedFileType(form.file_type.clone()))?;

        let file_name = self.file_store.save(
            &form.file_name,
            file_type,
            &form.report_html,
            form.description.as_deref(),
        )?;
        Ok(file_name)
    }

    /// 已保存报表列表（不含描述文件），新到旧
    pub fn list_files(&self) -> ApiResult<Vec<SavedFileInfo>> {
        Ok(self.file_store.list()?)
    }

    /// 下载报表
    pub fn download(&self, file_name: &str) -> ApiResult<FileDownload> {
        let bytes = self.file_store.read(file_name)?;
        Ok(FileDownload {
            file_name: file_name.to_string(),
            content_type: content_type_for(file_name),
            bytes,
        })
    }

    /// 删除报表及描述文件
    pub fn delete_file(&self, file_name: &str) -> ApiResult<()> {
        if !self.file_store.delete(file_name)? {
            return Err(ApiError::NotFound(i18n::t("report.file_not_found")));
        }
        Ok(())
    }

    /// 报表描述；无描述文件时为空字符串
    pub fn file_description(&self, file_name: &str) -> ApiResult<String> {
        Ok(self.file_store.description(file_name)?.unwrap_or_default())
    }

    // ===== 导出 =====

    /// 以 CSV 导出指定报表
    ///
    /// # 返回
    /// - Ok(FileDownload): `{kind}.csv`
    /// - Err(NotFound): 未知报表种类
    pub fn export_csv(&self, kind: &str) -> ApiResult<FileDownload> {
        let kind = ReportKind::parse(kind).ok_or_else(|| {
            ApiError::NotFound(i18n::t_with_args("report.unknown_kind", &[("kind", kind)]))
        })?;

        let csv = match kind {
            ReportKind::Popular => rows_to_csv(&self.popular_products()?)?,
            ReportKind::Sales => rows_to_csv(&self.sales_by_brand()?)?,
            ReportKind::Customers => rows_to_csv(&self.top_customers()?)?,
        };

        let file_name = format!("{}.csv", kind);
        Ok(FileDownload {
            content_type: content_type_for(&file_name),
            file_name,
            bytes: csv.into_bytes(),
        })
    }
}
