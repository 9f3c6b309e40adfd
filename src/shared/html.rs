// src/shared/html.rs

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Only http(s), mailto and tel links, or site-relative paths, make it into an href.
pub fn safe_url(input: &str) -> Option<String> {
    let url = input.trim();
    let lower = url.to_lowercase();
    let allowed = ["http://", "https://", "mailto:", "tel:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
        || (url.starts_with('/') && !url.starts_with("//"));

    if url.is_empty() || !allowed {
        return None;
    }
    Some(escape(url))
}

/// Wraps a rendered body in a full HTML document.
///
/// Preview pages get a scaled container so they fit gallery thumbnails.
pub fn document(title: &str, head_extra: &str, body_class: &str, body: &str, is_preview: bool) -> String {
    let (open, close) = if is_preview {
        (
            r#"<div class="preview-frame" data-preview="true" style="transform:scale(0.5);transform-origin:top left;width:200%;pointer-events:none">"#,
            "</div>",
        )
    } else {
        ("", "")
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
{head_extra}</head>
<body class="{body_class}">
{open}{body}{close}
</body>
</html>
"#,
        title = escape(title),
        head_extra = head_extra,
        body_class = escape(body_class),
        open = open,
        body = body,
        close = close,
    )
}
