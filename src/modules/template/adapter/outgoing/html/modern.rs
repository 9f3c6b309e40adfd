use crate::portfolio::domain::entities::{PortfolioData, Project, Skill};
use crate::shared::html::{document, escape, safe_url};
use crate::template::application::ports::{TemplateProps, TemplateRenderer};
use crate::template::domain::entities::TemplateId;

const STYLE: &str = r#"<style>
body.tpl-modern{margin:0;font-family:Inter,system-ui,sans-serif;background:#0f172a;color:#e2e8f0}
.tpl-modern .hero{min-height:60vh;display:flex;flex-direction:column;justify-content:center;padding:4rem 8vw;background:linear-gradient(135deg,#1e3a8a,#0f172a)}
.tpl-modern .hero h1{font-size:3.5rem;margin:0}
.tpl-modern .hero .role{color:#93c5fd;font-size:1.4rem}
.tpl-modern main{padding:2rem 8vw}
.tpl-modern h2{color:#3b82f6;border-bottom:1px solid #1e293b;padding-bottom:.5rem}
.tpl-modern .chips{display:flex;flex-wrap:wrap;gap:.75rem}
.tpl-modern .chip{background:#1e293b;border:1px solid #3b82f6;border-radius:.5rem;padding:.4rem .8rem}
.tpl-modern .chip b{color:#60a5fa;margin-left:.4rem}
.tpl-modern .grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(300px,1fr));gap:1.5rem}
.tpl-modern article{background:#1e293b;border-radius:1rem;overflow:hidden;transition:transform .2s}
.tpl-modern article:hover{transform:translateY(-4px)}
.tpl-modern article img{width:100%;height:11rem;object-fit:cover}
.tpl-modern article div{padding:1rem}
.tpl-modern a{color:#60a5fa}
.tpl-modern .links a{margin-right:1rem}
</style>
"#;

/// Dark, gradient-heavy layout with a blue accent.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModernTemplate;

impl TemplateRenderer for ModernTemplate {
    fn template_id(&self) -> TemplateId {
        TemplateId::Modern
    }

    fn render(&self, props: &TemplateProps<'_>) -> String {
        let data = props.data;

        let body = format!(
            r#"<section class="hero"><p>Hello, I'm</p><h1>{name}</h1><p class="role">{role}</p><p>{bio}</p><p class="links">{links}</p></section>
<main>
<section id="skills"><h2>Tech Stack</h2><div class="chips">{skills}</div></section>
<section id="projects"><h2>Selected Work</h2><div class="grid">{projects}</div></section>
<section id="contact"><h2>Contact</h2>{contact}</section>
</main>"#,
            name = escape(&data.name),
            role = escape(&data.job_role),
            bio = escape(&data.bio),
            links = hero_links(data),
            skills = data.skills.iter().map(skill_chip).collect::<String>(),
            projects = data.projects.iter().map(project_tile).collect::<String>(),
            contact = contact_block(data),
        );

        document(&data.name, STYLE, "tpl-modern", &body, props.is_preview)
    }
}

fn hero_links(data: &PortfolioData) -> String {
    let mut links: Vec<String> = data
        .socials
        .iter()
        .filter_map(|s| {
            safe_url(&s.url).map(|url| format!(r#"<a href="{url}">{}</a>"#, escape(&s.platform)))
        })
        .collect();

    if let Some(resume) = data.resume.as_deref().and_then(safe_url) {
        links.push(format!(r#"<a href="{resume}" download>Download Resume</a>"#));
    }
    links.concat()
}

fn skill_chip(skill: &Skill) -> String {
    format!(
        r#"<span class="chip">{}<b>{}%</b></span>"#,
        escape(&skill.name),
        escape(&skill.percentage)
    )
}

fn project_tile(project: &Project) -> String {
    let image = safe_url(&project.project_image)
        .map(|src| format!(r#"<img src="{src}" alt="{}">"#, escape(&project.project_title)))
        .unwrap_or_default();
    let link = safe_url(&project.project_url)
        .map(|href| format!(r#"<a href="{href}">View Project &rarr;</a>"#))
        .unwrap_or_default();

    format!(
        r#"<article>{image}<div><h3>{}</h3><p>{}</p>{link}</div></article>"#,
        escape(&project.project_title),
        escape(&project.project_summary),
    )
}

fn contact_block(data: &PortfolioData) -> String {
    let mut lines = vec![format!("<p>{}</p>", escape(&data.email))];
    if let Some(phone) = data.phone_number.as_deref() {
        lines.push(format!("<p>{}</p>", escape(phone)));
    }
    lines.concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::{empty_portfolio, sample_portfolio};

    #[test]
    fn links_resume_and_projects() {
        let data = sample_portfolio("modern");
        let html = ModernTemplate.render(&TemplateProps {
            data: &data,
            is_preview: false,
        });

        assert!(html.contains("Download Resume"));
        assert!(html.contains(r#"href="https://folio.example.com""#));
        assert!(html.contains("<b>90%</b>"));
    }

    #[test]
    fn empty_record_still_has_every_section() {
        let data = empty_portfolio("modern");
        let html = ModernTemplate.render(&TemplateProps {
            data: &data,
            is_preview: false,
        });

        assert!(html.contains(r#"<div class="chips"></div>"#));
        assert!(html.contains(r#"<div class="grid"></div>"#));
        assert!(!html.contains("Download Resume"));
    }
}
