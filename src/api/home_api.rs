// ==========================================
// 自行车门店管理后台 - 首页 API
// ==========================================
// 职责: 首页列表、新增员工/客户/商品、商品筛选
// ==========================================

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::forms::{CustomerForm, ProductForm, StaffForm};
use crate::api::validator::{check_product_references, check_staff_references};
use crate::domain::customer::Customer;
use crate::domain::lookup::{Brand, Category, Store};
use crate::domain::product::{ProductFilter, ProductRow};
use crate::domain::staff::StaffWithStore;
use crate::repository::{CustomerRepository, LookupRepository, ProductRepository, StaffRepository};

// ==========================================
// HomeOverview - 首页数据
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeOverview {
    pub staffs: Vec<StaffWithStore>,
    pub customers: Vec<Customer>,
    pub products: Vec<ProductRow>,
    pub brands: Vec<Brand>,
    pub categories: Vec<Category>,
    pub stores: Vec<Store>,
}

// ==========================================
// HomeApi - 首页 API
// ==========================================

/// 首页API
///
/// 职责：
/// 1. 员工/客户/商品列表及下拉选项
/// 2. 新增员工、客户、商品
/// 3. 按品牌/品类筛选商品
pub struct HomeApi {
    staff_repo: Arc<StaffRepository>,
    customer_repo: Arc<CustomerRepository>,
    product_repo: Arc<ProductRepository>,
    lookup_repo: Arc<LookupRepository>,
}

impl HomeApi {
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

    /// 首页数据
    pub fn overview(&self) -> ApiResult<HomeOverview> {
        Ok(HomeOverview {
            staffs: self.staff_repo.find_all_with_store()?,
            customers: self.customer_repo.find_all()?,
            products: self.product_repo.find_all_rows()?,
            brands: self.lookup_repo.list_brands()?,
            categories: self.lookup_repo.list_categories()?,
            stores: self.lookup_repo.list_stores()?,
        })
    }

    /// 新增员工
    ///
    /// # 返回
    /// - Ok(i64): 新员工ID
    /// - Err(ValidationFailed): 字段或外键校验失败
    /// - Err(BusinessRuleViolation): 约束失败（如邮箱重复）
    pub fn create_staff(&self, form: &StaffForm) -> ApiResult<i64> {
        let staff = form.validate()?;
        check_staff_references(&staff, None, &self.lookup_repo, &self.staff_repo)?;

        let staff_id = self.staff_repo.insert(&staff)?;
        tracing::info!(staff_id, email = %staff.email, "员工已创建");
        Ok(staff_id)
    }

    /// 新增客户
    pub fn create_customer(&self, form: &CustomerForm) -> ApiResult<i64> {
        let customer = form.validate()?;

        let customer_id = self.customer_repo.insert(&customer)?;
        tracing::info!(customer_id, email = %customer.email, "客户已创建");
        Ok(customer_id)
    }

    /// 新增商品；品牌、品类必须存在
    pub fn create_product(&self, form: &ProductForm) -> ApiResult<i64> {
        let product = form.validate()?;
        check_product_references(&product, &self.lookup_repo)?;

        let product_id = self.product_repo.insert(&product)?;
        tracing::info!(product_id, name = %product.product_name, "商品已创建");
        Ok(product_id)
    }

    /// 按品牌/品类筛选商品；非正数的筛选条件被忽略
    pub fn filter_products(&self, filter: &ProductFilter) -> ApiResult<Vec<ProductRow>> {
        Ok(self.product_repo.filter(filter)?)
    }
}
