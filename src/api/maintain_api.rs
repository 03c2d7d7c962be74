// ==========================================
// 自行车门店管理后台 - 数据维护 API
// ==========================================
// 职责: 员工/客户/商品的单条查询、整行编辑、删除
// ==========================================

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::forms::{CustomerForm, ProductForm, StaffForm};
use crate::api::validator::{check_product_references, check_staff_references};
use crate::domain::customer::Customer;
use crate::domain::lookup::{Brand, Category, Store};
use crate::domain::product::{Product, ProductRow};
use crate::domain::staff::{Staff, StaffWithStore};
use crate::i18n;
use crate::repository::{
    CustomerRepository, LookupRepository, ProductRepository, RepositoryError, StaffRepository,
};

// ==========================================
// MaintainOverview - 维护页数据
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintainOverview {
    pub staffs: Vec<StaffWithStore>,
    pub customers: Vec<Customer>,
    pub products: Vec<ProductRow>,
    pub brands: Vec<Brand>,
    pub categories: Vec<Category>,
    pub stores: Vec<Store>,
    /// 经理下拉（全部员工）
    pub managers: Vec<Staff>,
}

/// 仓储 NotFound 转换为带实体名的本地化消息
fn not_found_as(key: &'static str) -> impl Fn(RepositoryError) -> ApiError {
    move |err| match err {
        RepositoryError::NotFound { .. } => ApiError::NotFound(i18n::t(key)),
        other => other.into(),
    }
}

// ==========================================
// MaintainApi - 数据维护 API
// ==========================================
pub struct MaintainApi {
    staff_repo: Arc<StaffRepository>,
    customer_repo: Arc<CustomerRepository>,
    product_repo: Arc<ProductRepository>,
    lookup_repo: Arc<LookupRepository>,
}

impl MaintainApi {
    pub fn new(
        staff_repo: Arc<StaffRepository>,
        customer_repo: Arc<CustomerRepository>,
        product_repo: Arc<ProductRepository>,
        lookup_repo: Arc<LookupRepository>,
    ) -> Self {
        Self {
            staff_repo,
            customer_repo,
            product_repo,
            lookup_repo,
        }
    }

    /// 维护页数据
    pub fn overview(&self) -> ApiResult<MaintainOverview> {
        Ok(MaintainOverview {
            staffs: self.staff_repo.find_all_with_store()?,
            customers: self.customer_repo.find_all()?,
            products: self.product_repo.find_all_rows()?,
            brands: self.lookup_repo.list_brands()?,
            categories: self.lookup_repo.list_categories()?,
            stores: self.lookup_repo.list_stores()?,
            managers: self.staff_repo.find_all()?,
        })
    }

    // ===== 员工 =====

    pub fn get_staff(&self, staff_id: i64) -> ApiResult<Staff> {
        self.staff_repo
            .find_by_id(staff_id)?
            .ok_or_else(|| ApiError::NotFound(i18n::t("staff.not_found")))
    }

    /// 整行更新员工
    ///
    /// # 返回
    /// - Err(ValidationFailed): 字段/外键校验失败
    /// - Err(NotFound): staff_id 不存在
    pub fn edit_staff(&self, form: &StaffForm) -> ApiResult<()> {
        let (staff_id, staff) = form.validate_for_update()?;
        check_staff_references(&staff, Some(staff_id), &self.lookup_repo, &self.staff_repo)?;

        self.staff_repo
            .update(&staff.with_id(staff_id))
            .map_err(not_found_as("staff.not_found"))?;
        tracing::info!(staff_id, "员工已更新");
        Ok(())
    }

    /// 删除员工；仍被订单或下属引用时返回约束错误
    pub fn delete_staff(&self, staff_id: i64) -> ApiResult<()> {
        if !self.staff_repo.delete(staff_id)? {
            return Err(ApiError::NotFound(i18n::t("staff.not_found")));
        }
        tracing::info!(staff_id, "员工已删除");
        Ok(())
    }

    // ===== 客户 =====

    pub fn get_customer(&self, customer_id: i64) -> ApiResult<Customer> {
        self.customer_repo
            .find_by_id(customer_id)?
            .ok_or_else(|| ApiError::NotFound(i18n::t("customer.not_found")))
    }

    pub fn edit_customer(&self, form: &CustomerForm) -> ApiResult<()> {
        let (customer_id, customer) = form.validate_for_update()?;

        self.customer_repo
            .update(&customer.with_id(customer_id))
            .map_err(not_found_as("customer.not_found"))?;
        tracing::info!(customer_id, "客户已更新");
        Ok(())
    }

    pub fn delete_customer(&self, customer_id: i64) -> ApiResult<()> {
        if !self.customer_repo.delete(customer_id)? {
            return Err(ApiError::NotFound(i18n::t("customer.not_found")));
        }
        tracing::info!(customer_id, "客户已删除");
        Ok(())
    }

    // ===== 商品 =====

    pub fn get_product(&self, product_id: i64) -> ApiResult<Product> {
        self.product_repo
            .find_by_id(product_id)?
            .ok_or_else(|| ApiError::NotFound(i18n::t("product.not_found")))
    }

    pub fn edit_product(&self, form: &ProductForm) -> ApiResult<()> {
        let (product_id, product) = form.validate_for_update()?;
        check_product_references(&product, &self.lookup_repo)?;

        self.product_repo
            .update(&product.with_id(product_id))
            .map_err(not_found_as("product.not_found"))?;
        tracing::info!(product_id, "商品已更新");
        Ok(())
    }

    pub fn delete_product(&self, product_id: i64) -> ApiResult<()> {
        if !self.product_repo.delete(product_id)? {
            return Err(ApiError::NotFound(i18n::t("product.not_found")));
        }
        tracing::info!(product_id, "商品已删除");
        Ok(())
    }
}
