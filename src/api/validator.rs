// ==========================================
// 自行车门店管理后台 - 表单字段校验器
// ==========================================
// 职责: 表单原始字符串 → 强类型字段，逐字段收集违规
// 规则: 必填 / 最大长度 / 邮箱格式 / 数值范围
// 说明: 外键存在性由各 API 在字段校验通过后检查
// ==========================================

use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::domain::product::NewProduct;
use crate::domain::staff::NewStaff;
use crate::i18n;
use crate::repository::{LookupRepository, StaffRepository};

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"))
}

/// 是否为合法邮箱格式
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

// ==========================================
// FormValidator - 字段校验收集器
// ==========================================

/// 字段校验收集器
///
/// 每个方法对应一类规则；不合法时记录违规并返回 None，
/// 调用方最后用 `finish()` 统一判定。
#[derive(Debug, Default)]
pub struct FormValidator {
    violations: Vec<ValidationViolation>,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 直接记录一条违规
    pub fn push(&mut self, field: &str, reason: impl Into<String>) {
        self.violations.push(ValidationViolation::new(field, reason));
    }

    /// 必填文本（去除首尾空白）
    pub fn required_text(&mut self, field: &str, value: Option<&str>, max_len: usize) -> Option<String> {
        match trimmed(value) {
            Some(v) => self.check_len(field, v, max_len),
            None => {
                self.push_required(field);
                None
            }
        }
    }

    /// 可选文本；空白视为未填写
    pub fn optional_text(
        &mut self,
        field: &str,
        value: Option<&str>,
        max_len: usize,
    ) -> Option<Option<String>> {
        match trimmed(value) {
            Some(v) => self.check_len(field, v, max_len).map(Some),
            None => Some(None),
        }
    }

    /// 必填邮箱
    pub fn required_email(&mut self, field: &str, value: Option<&str>, max_len: usize) -> Option<String> {
        let email = self.required_text(field, value, max_len)?;
        if !is_valid_email(&email) {
            self.push(
                field,
                i18n::t_with_args("validation.invalid_email", &[("field", field)]),
            );
            return None;
        }
        Some(email)
    }

    /// 必填整数/小数
    pub fn required_number<T: FromStr>(&mut self, field: &str, value: Option<&str>) -> Option<T> {
        match trimmed(value) {
            Some(v) => self.parse_number(field, v),
            None => {
                self.push_required(field);
                None
            }
        }
    }

    /// 可选整数/小数；空白视为未填写
    pub fn optional_number<T: FromStr>(&mut self, field: &str, value: Option<&str>) -> Option<Option<T>> {
        match trimmed(value) {
            Some(v) => self.parse_number(field, v).map(Some),
            None => Some(None),
        }
    }

    /// 必填数值且位于闭区间 [min, max]
    pub fn required_in_range<T>(&mut self, field: &str, value: Option<&str>, min: T, max: T) -> Option<T>
    where
        T: FromStr + PartialOrd + std::fmt::Display + Copy,
    {
        let n: T = self.required_number(field, value)?;
        // 写成取反形式以拒绝 NaN
        if !(n >= min && n <= max) {
            let (min_s, max_s) = (min.to_string(), max.to_string());
            self.push(
                field,
                i18n::t_with_args(
                    "validation.out_of_range",
                    &[("field", field), ("min", &min_s), ("max", &max_s)],
                ),
            );
            return None;
        }
        Some(n)
    }

    /// 必填布尔（接受 true/false/on/off/1/0/yes/no）
    pub fn required_bool(&mut self, field: &str, value: Option<&str>) -> Option<bool> {
        let v = match trimmed(value) {
            Some(v) => v,
            None => {
                self.push_required(field);
                return None;
            }
        };

        match v.to_lowercase().as_str() {
            "true" | "on" | "1" | "yes" => Some(true),
            "false" | "off" | "0" | "no" => Some(false),
            _ => {
                self.push_invalid(field, v);
                None
            }
        }
    }

    /// 汇总结果
    pub fn finish(self) -> ApiResult<()> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            tracing::warn!(violations = ?self.violations, "表单校验失败");
            Err(ApiError::ValidationFailed(self.violations))
        }
    }

    fn check_len(&mut self, field: &str, value: &str, max_len: usize) -> Option<String> {
        if value.chars().count() > max_len {
            let max = max_len.to_string();
            self.push(
                field,
                i18n::t_with_args("validation.too_long", &[("field", field), ("max", &max)]),
            );
            return None;
        }
        Some(value.to_string())
    }

    fn parse_number<T: FromStr>(&mut self, field: &str, value: &str) -> Option<T> {
        match value.parse::<T>() {
            Ok(n) => Some(n),
            Err(_) => {
                self.push_invalid(field, value);
                None
            }
        }
    }

    fn push_required(&mut self, field: &str) {
        self.push(field, i18n::t_with_args("validation.required", &[("field", field)]));
    }

    fn push_invalid(&mut self, field: &str, value: &str) {
        self.push(
            field,
            i18n::t_with_args("validation.invalid_value", &[("value", value), ("field", field)]),
        );
    }
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// 外键不存在时的违规
pub fn missing_reference(field: &str) -> ValidationViolation {
    ValidationViolation::new(
        field,
        i18n::t_with_args("validation.missing_reference", &[("field", field)]),
    )
}

// ==========================================
// 外键存在性检查
// ==========================================

/// 员工外键: 门店必须存在；经理（若填写）必须存在且不能是本人
pub fn check_staff_references(
    staff: &NewStaff,
    self_id: Option<i64>,
    lookup_repo: &LookupRepository,
    staff_repo: &StaffRepository,
) -> ApiResult<()> {
    let mut violations = Vec::new();

    if !lookup_repo.store_exists(staff.store_id)? {
        violations.push(missing_reference("store_id"));
    }

    if let Some(manager_id) = staff.manager_id {
        if Some(manager_id) == self_id {
            violations.push(ValidationViolation::new(
                "manager_id",
                i18n::t("validation.self_manager"),
            ));
        } else if !staff_repo.exists(manager_id)? {
            violations.push(missing_reference("manager_id"));
        }
    }

    reject_violations(violations)
}

/// 商品外键: 品牌、品类必须存在
pub fn check_product_references(product: &NewProduct, lookup_repo: &LookupRepository) -> ApiResult<()> {
    let mut violations = Vec::new();

    if !lookup_repo.brand_exists(product.brand_id)? {
        violations.push(missing_reference("brand_id"));
    }
    if !lookup_repo.category_exists(product.category_id)? {
        violations.push(missing_reference("category_id"));
    }

    reject_violations(violations)
}

fn reject_violations(violations: Vec<ValidationViolation>) -> ApiResult<()> {
    if violations.is_empty() {
        Ok(())
    } else {
        tracing::warn!(violations = ?violations, "外键校验失败");
        Err(ApiError::ValidationFailed(violations))
    }
}
