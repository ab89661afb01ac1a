//! HTML output: the dashboard page and the error page

use std::fmt::Write as _;

use tabled::Tabled;

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:2rem auto;max-width:60rem;color:#1b1b1b}\
table{border-collapse:collapse;width:100%}\
th,td{padding:.4rem .8rem;border-bottom:1px solid #ddd;text-align:left}\
th{background:#f3f3f3}\
td:last-child,th:last-child{text-align:right}\
.error{border-left:4px solid #b00020;padding:.8rem 1rem;background:#fdecee}\
footer{margin-top:2rem;font-size:.8rem;color:#666}";

/// Escape text for use in HTML content and attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Render rows as an HTML `<table>` using their `Tabled` headers
pub fn format_html_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "<p>No results found.</p>".to_string();
    }

    let mut html = String::from("<table>\n<thead><tr>");
    for header in T::headers() {
        let _ = write!(html, "<th>{}</th>", escape(&header));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row in data {
        html.push_str("<tr>");
        for field in row.fields() {
            let _ = write!(html, "<td>{}</td>", escape(&field));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}

/// Wrap a pre-rendered body fragment in a complete HTML document
pub fn render_page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"de\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<h1>{title}</h1>\n{body}\n<footer>govdash {version}</footer>\n</body>\n</html>",
        title = escape(title),
        body = body,
        version = env!("CARGO_PKG_VERSION"),
    )
}

/// Render the error page for a failed computation
pub fn render_error(message: &str) -> String {
    render_page(
        "Dashboard unavailable",
        &format!(
            "<div class=\"error\"><p>{}</p></div>",
            escape(message)
        ),
    )
}
