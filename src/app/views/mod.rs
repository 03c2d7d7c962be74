// ==========================================
// 自行车门店管理后台 - 服务端 HTML 视图
// ==========================================
// 约束: 所有动态文本经 escape_html 输出
// ==========================================

pub mod home;
pub mod maintain;
pub mod report;

use std::fmt::Write;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::app::http::FlashQuery;
use crate::domain::lookup::{Brand, Category, Store};
use crate::APP_NAME;

/// HTML 转义
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 可选文本转义，空值输出空串
pub(crate) fn opt(value: &Option<String>) -> String {
    value.as_deref().map(escape_html).unwrap_or_default()
}

/// 在 <script> 中嵌入 JSON：转义 `</` 防止提前闭合
pub(crate) fn embed_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

/// URL 路径段中保留原样的字符之外全部编码
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// 编码为单个 URL 路径段（结果可直接放入 href）
pub(crate) fn path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

/// 编码为 JS 字符串字面量（含引号），用于 HTML 属性内需再经 escape_html
pub(crate) fn js_string(raw: &str) -> String {
    serde_json::to_string(raw).unwrap_or_else(|_| "\"\"".to_string())
}

/// 页面骨架
pub(crate) fn layout(title: &str, active: &str, flash: &FlashQuery, body: &str) -> String {
    let nav = [("/", "Home"), ("/maintain", "Maintain"), ("/report", "Report")]
        .iter()
        .map(|(href, label)| {
            let class = if *label == active { " class=\"active\"" } else { "" };
            format!("<a href=\"{}\"{}>{}</a>", href, class, label)
        })
        .collect::<Vec<_>>()
        .join(" | ");

    let banner = match flash.message() {
        Some((message, ok)) => format!(
            "<div class=\"flash {}\">{}</div>",
            if ok { "ok" } else { "error" },
            escape_html(message)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title} - {app}</title>
<style>
body {{ font-family: sans-serif; margin: 1.5em; }}
table {{ border-collapse: collapse; margin-bottom: 1.5em; }}
th, td {{ border: 1px solid #ccc; padding: 4px 8px; text-align: left; }}
.flash {{ padding: 8px; margin-bottom: 1em; }}
.flash.ok {{ background: #dff0d8; }}
.flash.error {{ background: #f2dede; }}
nav a.active {{ font-weight: bold; }}
form.inline {{ display: inline; }}
fieldset {{ margin-bottom: 1em; }}
</style>
</head>
<body>
<nav>{nav}</nav>
<h1>{title}</h1>
{banner}
{body}
</body>
</html>
"#,
        title = escape_html(title),
        app = escape_html(APP_NAME),
        nav = nav,
        banner = banner,
        body = body,
    )
}

/// 错误页
pub fn error_page(message: &str) -> String {
    layout("Error", "", &FlashQuery::default(), &format!("<p>{}</p>", escape_html(message)))
}

// ===== 下拉选项 =====

pub(crate) fn store_options(stores: &[Store]) -> String {
    let mut out = String::new();
    for s in stores {
        let _ = write!(out, "<option value=\"{}\">{}</option>", s.store_id, escape_html(&s.store_name));
    }
    out
}

pub(crate) fn brand_options(brands: &[Brand]) -> String {
    let mut out = String::new();
    for b in brands {
        let _ = write!(out, "<option value=\"{}\">{}</option>", b.brand_id, escape_html(&b.brand_name));
    }
    out
}

pub(crate) fn category_options(categories: &[Category]) -> String {
    let mut out = String::new();
    for c in categories {
        let _ = write!(
            out,
            "<option value=\"{}\">{}</option>",
            c.category_id,
            escape_html(&c.category_name)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_embed_json_breaks_script_close() {
        assert_eq!(embed_json(r#"{"a":"</script>"}"#), r#"{"a":"<\/script>"}"#);
    }

    #[test]
    fn test_path_segment_and_js_string() {
        assert_eq!(path_segment("sales_20240315100000.html"), "sales_20240315100000.html");
        assert_eq!(path_segment("it's #1 q1.txt"), "it%27s%20%231%20q1.txt");
        assert_eq!(js_string("it's \"x\""), r#""it's \"x\"""#);
    }

    #[test]
    fn test_layout_renders_flash_banner() {
        let flash = FlashQuery::new("Staff <created>", true);
        let page = layout("Home", "Home", &flash, "<p>x</p>");
        assert!(page.contains("<div class=\"flash ok\">Staff &lt;created&gt;</div>"));
        assert!(page.contains("<a href=\"/\" class=\"active\">Home</a>"));
    }
}
