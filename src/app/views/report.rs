use std::fmt::Write;

use super::{embed_json, escape_html, js_string, layout, opt, path_segment};
use crate::api::ReportOverview;
use crate::app::http::FlashQuery;

/// 报表页：热销商品 + 销售/客户报表（异步加载）+ 已保存文件 + 保存表单
pub fn render(data: &ReportOverview, flash: &FlashQuery) -> String {
    let mut body = String::new();

    // ===== 热销商品 =====
    body.push_str("<div id=\"report-content\">\n<h2>Popular products</h2>\n<table id=\"popular\"><tr><th>#</th><th>Product</th><th>Brand</th><th>Category</th><th>Order lines</th></tr>\n");
    for (idx, item) in data.popular_products.iter().enumerate() {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            idx + 1,
            escape_html(&item.label),
            opt(&item.brand),
            opt(&item.category),
            item.value,
        );
    }
    body.push_str("</table>\n");

    body.push_str(
        r#"<h2>Sales by brand</h2>
<table id="sales"><thead><tr><th>Brand</th><th>Total sales</th></tr></thead><tbody></tbody></table>
<h2>Top customers</h2>
<table id="customers"><thead><tr><th>Customer</th><th>Orders</th></tr></thead><tbody></tbody></table>
</div>
<p>Export CSV:
<a href="/report/export/popular">popular</a> |
<a href="/report/export/sales">sales</a> |
<a href="/report/export/customers">customers</a></p>
"#,
    );

    // 图表数据
    let chart_json = serde_json::to_string(&data.popular_products).unwrap_or_else(|_| "[]".to_string());
    let _ = writeln!(
        body,
        "<script type=\"application/json\" id=\"popular-data\">{}</script>",
        embed_json(&chart_json)
    );

    // ===== 保存 =====
    body.push_str(
        r#"<form id="save-report" method="post" action="/report/save" onsubmit="captureReport()"><fieldset><legend>Save report</legend>
<input name="file_name" placeholder="File name" required>
<select name="file_type"><option value="html">html</option><option value="txt">txt</option></select>
<input name="description" placeholder="Description (optional)">
<input type="hidden" name="report_html">
<button type="submit">Save</button>
</fieldset></form>
"#,
    );

    // ===== 已保存文件 =====
    body.push_str("<h2>Saved reports</h2>\n<table id=\"files\"><tr><th>File</th><th>Size</th><th>Created</th><th>Description</th><th></th></tr>\n");
    for f in &data.saved_files {
        let name = escape_html(&f.file_name);
        let segment = path_segment(&f.file_name);
        let description = if f.has_description {
            format!(
                "<button type=\"button\" onclick=\"showDescription({})\">View</button>",
                escape_html(&js_string(&f.file_name))
            )
        } else {
            String::new()
        };
        let _ = writeln!(
            body,
            "<tr><td><a href=\"/report/files/{segment}\">{name}</a></td><td>{size}</td><td>{created}</td><td>{description}</td><td><form class=\"inline\" method=\"post\" action=\"/report/files/{segment}/delete\" onsubmit=\"return confirm('Delete?')\"><button type=\"submit\">Delete</button></form></td></tr>",
            size = f.file_size,
            created = f.created_date.format("%Y-%m-%d %H:%M:%S"),
        );
    }
    body.push_str("</table>\n");

    body.push_str(REPORT_SCRIPT);

    layout("Report", "Report", flash, &body)
}

const REPORT_SCRIPT: &str = r#"<script>
function esc(s) {
  return String(s == null ? '' : s).replace(/[&<>"']/g, function (c) {
    return {'&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'}[c];
  });
}
function fill(url, selector, render) {
  fetch(url, {headers: {'Accept': 'application/json'}})
    .then(function (r) { return r.json(); })
    .then(function (rows) {
      if (!Array.isArray(rows)) { return; }
      document.querySelector(selector + ' tbody').innerHTML = rows.map(render).join('');
    });
}
fill('/report/sales', '#sales', function (r) {
  return '<tr><td>' + esc(r.brand) + '</td><td>' + Number(r.total_sales).toFixed(2) + '</td></tr>';
});
fill('/report/customers', '#customers', function (r) {
  return '<tr><td>' + esc(r.customer_name) + '</td><td>' + r.order_count + '</td></tr>';
});
function captureReport() {
  var form = document.getElementById('save-report');
  form.elements['report_html'].value = document.getElementById('report-content').innerHTML;
}
function showDescription(name) {
  fetch('/report/files/' + encodeURIComponent(name) + '/description', {headers: {'Accept': 'application/json'}})
    .then(function (r) { return r.json(); })
    .then(function (d) { alert(d.success ? d.description : d.message); });
}
</script>
"#;
