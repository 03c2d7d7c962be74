// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"en" 或 "zh-CN"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 可用语言列表
pub fn available_locales() -> Vec<String> {
    rust_i18n::available_locales!()
        .into_iter()
        .map(|s| s.to_string())
        .collect()
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use bike_store_admin::i18n::t;
/// let msg = t("staff.created");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 按指定语言翻译（不修改全局语言）
pub fn t_in(locale: &str, key: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use bike_store_admin::i18n::t_with_args;
/// let msg = t_with_args("common.validation_failed", &[("errors", "First name is required")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    fill_args(t(key), args)
}

/// 按指定语言翻译（带参数）
pub fn t_in_with_args(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    fill_args(t_in(locale, key), args)
}

fn fill_args(mut result: String, args: &[(&str, &str)]) -> String {
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    // 全局 locale 为共享状态，测试只使用 t_in 显式指定语言

    #[test]
    fn test_available_locales() {
        let locales = available_locales();
        assert!(locales.iter().any(|l| l == "en"));
        assert!(locales.iter().any(|l| l == "zh-CN"));
    }

    #[test]
    fn test_translate_simple() {
        assert_eq!(t_in("en", "staff.created"), "Staff created successfully!");
        assert_eq!(t_in("zh-CN", "staff.created"), "员工创建成功！");
    }

    #[test]
    fn test_translate_with_args() {
        let msg = t_in_with_args(
            "en",
            "common.validation_failed",
            &[("errors", "Email is required")],
        );
        assert_eq!(msg, "Validation failed: Email is required");

        let msg = t_in_with_args("zh-CN", "common.error", &[("message", "disk full")]);
        assert!(msg.contains("disk full"));
    }
}
