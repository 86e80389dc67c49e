//! HTML fragments written into the page.

use demo_types::proxy::Article;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Headline list, one linked entry per article.
pub fn render_news(articles: &[Article]) -> String {
    let items: String = articles
        .iter()
        .map(|a| {
            format!(
                r#"<li><a href="{}" target="_blank" rel="noopener noreferrer">{}</a></li>"#,
                escape_html(&a.url),
                escape_html(&a.title)
            )
        })
        .collect();

    format!(
        r#"<div class="news-container"><h3>Yahoo News Headlines</h3><ul class="news-list">{}</ul></div>"#,
        items
    )
}

/// `Timestamp: <ms><br>Date: <local time>`
pub fn render_timestamp(timestamp: f64) -> String {
    format!("Timestamp: {}<br>Date: {}", timestamp, format_local(timestamp))
}

fn format_local(timestamp: f64) -> String {
    if !timestamp.is_finite() {
        return "Invalid Date".to_string();
    }
    chrono::DateTime::from_timestamp_millis(timestamp as i64)
        .map(|dt| {
            dt.with_timezone(&chrono::Local)
                .format("%Y/%m/%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| "Invalid Date".to_string())
}
