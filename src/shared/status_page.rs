use crate::shared::html::{document, escape};

const STATUS_STYLE: &str = r#"<style>
body.status{margin:0;min-height:100vh;display:flex;align-items:center;justify-content:center;background:#f9fafb;font-family:system-ui,sans-serif;color:#111827}
.card{text-align:center;max-width:28rem;padding:2rem}
.card h1{font-size:1.5rem;margin:0 0 .5rem}
.card p{color:#4b5563;margin:0}
.spinner{width:3rem;height:3rem;margin:0 auto 1rem;border:4px solid #e5e7eb;border-top-color:#2563eb;border-radius:50%;animation:spin 1s linear infinite}
@keyframes spin{to{transform:rotate(360deg)}}
</style>
"#;

/// Centered card used for loading and error outcomes.
pub fn status_page(title: &str, message: &str, loading: bool) -> String {
    let spinner = if loading { r#"<div class="spinner"></div>"# } else { "" };
    let body = format!(
        r#"<main class="card">{spinner}<h1>{}</h1><p>{}</p></main>"#,
        escape(title),
        escape(message),
    );
    document(title, STATUS_STYLE, "status", &body, false)
}
