use crate::portfolio::domain::entities::{PortfolioData, Project, Skill};
use crate::shared::html::{document, escape, safe_url};
use crate::template::application::ports::{TemplateProps, TemplateRenderer};
use crate::template::domain::entities::TemplateId;

const STYLE: &str = r#"<style>
body.tpl-minimal{margin:0;font-family:system-ui,sans-serif;background:#111827;color:#f3f4f6}
.tpl-minimal .container{max-width:1100px;margin:0 auto;padding:1rem}
.tpl-minimal nav{display:flex;justify-content:space-between;align-items:center;padding:1rem 0}
.tpl-minimal nav ul{display:flex;gap:1rem;list-style:none;margin:0;padding:0}
.tpl-minimal a{color:inherit}
.tpl-minimal h1,.tpl-minimal h2{color:#c084fc}
.tpl-minimal header{text-align:center;padding:5rem 0}
.tpl-minimal section{padding:4rem 0}
.tpl-minimal .btn{display:inline-block;background:#9333ea;color:#fff;padding:.5rem 1.5rem;border-radius:9999px;text-decoration:none;margin:0 .5rem}
.tpl-minimal .skills{display:grid;grid-template-columns:repeat(auto-fit,minmax(280px,1fr));gap:1.5rem}
.tpl-minimal .bar{background:#374151;border-radius:9999px;height:.6rem;margin-top:.5rem}
.tpl-minimal .bar span{display:block;background:#9333ea;height:100%;border-radius:9999px}
.tpl-minimal .projects{display:grid;grid-template-columns:repeat(auto-fit,minmax(260px,1fr));gap:1.5rem}
.tpl-minimal .card{background:#1f2937;padding:1rem;border-radius:.5rem}
.tpl-minimal .card img{width:100%;height:12rem;object-fit:cover;border-radius:.5rem}
.tpl-minimal .badge{display:inline-block;background:#9333ea;padding:.1rem .5rem;border-radius:9999px;font-size:.8rem}
.tpl-minimal footer{text-align:center;padding:1rem 0}
</style>
"#;

/// Clean, content-first layout with a purple accent.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinimalTemplate;

impl TemplateRenderer for MinimalTemplate {
    fn template_id(&self) -> TemplateId {
        TemplateId::Minimal
    }

    fn render(&self, props: &TemplateProps<'_>) -> String {
        let data = props.data;
        let name = escape(&data.name);

        let body = format!(
            r##"<div class="container">
<nav><div class="brand">{name}</div><ul><li><a href="#about">About</a></li><li><a href="#skills">Skills</a></li><li><a href="#projects">Projects</a></li><li><a href="#contact">Contact</a></li></ul></nav>
<header><h1>{name}</h1><p>{role}</p><div><a class="btn" href="#projects">View My Work</a><a class="btn" href="#contact">Get in Touch</a></div></header>
<section id="about"><h2>About Me</h2><p>Get to know me</p><p>{bio}</p></section>
<section id="skills"><h2>Skills &amp; Expertise</h2><div class="skills">{skills}</div></section>
<section id="projects"><h2>Featured Projects</h2><div class="projects">{projects}</div></section>
<section id="contact"><h2>Let's Work Together</h2><p>Have a project in mind? I'd love to hear about it. Let's discuss how we can bring your ideas to life.</p><div>{contact}</div></section>
<footer><p>&copy; Folio. All rights reserved.</p></footer>
</div>"##,
            name = name,
            role = escape(&data.job_role),
            bio = escape(&data.bio),
            skills = data.skills.iter().map(skill_bar).collect::<String>(),
            projects = data.projects.iter().map(project_card).collect::<String>(),
            contact = contact_buttons(data),
        );

        document(&data.name, STYLE, "tpl-minimal", &body, props.is_preview)
    }
}

fn skill_bar(skill: &Skill) -> String {
    format!(
        r#"<div class="skill"><div><span>{name}</span> <span>{pct}%</span></div><div class="bar"><span style="width:{level}%"></span></div></div>"#,
        name = escape(&skill.name),
        pct = escape(&skill.percentage),
        level = skill.level(),
    )
}

fn project_card(project: &Project) -> String {
    let image = safe_url(&project.project_image)
        .map(|src| {
            format!(
                r#"<img src="{src}" alt="{alt}">"#,
                alt = escape(&project.project_title)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="card">{image}<h3>{title}</h3><p>{summary}</p><span class="badge">Featured</span></div>"#,
        title = escape(&project.project_title),
        summary = escape(&project.project_summary),
    )
}

fn contact_buttons(data: &PortfolioData) -> String {
    let mut out = String::new();
    if let Some(mail) = safe_url(&format!("mailto:{}", data.email)).filter(|_| !data.email.is_empty()) {
        out.push_str(&format!(r#"<a class="btn" href="{mail}">Email Me</a>"#));
    }
    if let Some(phone) = data.phone_number.as_deref() {
        if let Some(tel) = safe_url(&format!("tel:{phone}")) {
            out.push_str(&format!(r#"<a class="btn" href="{tel}">Call Me</a>"#));
        }
    }
    for social in &data.socials {
        if let Some(url) = safe_url(&social.url) {
            out.push_str(&format!(
                r#"<a class="btn" href="{url}">{platform}</a>"#,
                platform = escape(&social.platform)
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::{empty_portfolio, sample_portfolio};

    #[test]
    fn renders_skills_and_projects_in_order() {
        let data = sample_portfolio("minimal");
        let html = MinimalTemplate.render(&TemplateProps {
            data: &data,
            is_preview: false,
        });

        let rust = html.find("Rust").unwrap();
        let sql = html.find("PostgreSQL").unwrap();
        assert!(rust < sql);
        assert!(html.contains(r#"style="width:90%""#));
        assert!(html.contains("Folio Builder"));
        assert!(html.contains("Call Me"));
    }

    #[test]
    fn omits_call_button_without_phone() {
        let data = empty_portfolio("minimal");
        let html = MinimalTemplate.render(&TemplateProps {
            data: &data,
            is_preview: false,
        });

        assert!(!html.contains("Call Me"));
        assert!(html.contains(r#"<div class="skills"></div>"#));
        assert!(html.contains(r#"<div class="projects"></div>"#));
    }

    #[test]
    fn escapes_user_text() {
        let mut data = empty_portfolio("minimal");
        data.bio = "<img src=x onerror=alert(1)>".to_string();

        let html = MinimalTemplate.render(&TemplateProps {
            data: &data,
            is_preview: false,
        });

        assert!(!html.contains("<img src=x"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }
}
