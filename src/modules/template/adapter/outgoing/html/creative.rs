use crate::portfolio::domain::entities::{PortfolioData, Project, Skill};
use crate::shared::html::{document, escape, safe_url};
use crate::template::application::ports::{TemplateProps, TemplateRenderer};
use crate::template::domain::entities::TemplateId;

const STYLE: &str = r#"<style>
body.tpl-creative{margin:0;font-family:"Space Grotesk",system-ui,sans-serif;background:#fdf2f8;color:#1f2937}
.tpl-creative .split{display:grid;grid-template-columns:1.2fr 1fr;min-height:70vh}
.tpl-creative .split .left{background:#ec4899;color:#fff;padding:4rem;display:flex;flex-direction:column;justify-content:flex-end}
.tpl-creative .split .left h1{font-size:4.5rem;line-height:1;margin:0;text-transform:uppercase}
.tpl-creative .split .right{padding:4rem;display:flex;align-items:center;font-size:1.2rem}
.tpl-creative section{padding:3rem 4rem}
.tpl-creative h2{font-size:2.5rem;text-transform:uppercase;color:#db2777}
.tpl-creative .skill{display:flex;align-items:center;gap:1rem;margin:.5rem 0}
.tpl-creative .skill .dot{width:2.2rem;height:2.2rem;border-radius:50%;background:#ec4899;display:inline-flex;align-items:center;justify-content:center;color:#fff;font-size:.7rem}
.tpl-creative .showcase{counter-reset:project}
.tpl-creative .showcase .piece{display:grid;grid-template-columns:6rem 1fr 1fr;gap:2rem;align-items:center;border-top:3px solid #1f2937;padding:2rem 0}
.tpl-creative .showcase .num{font-size:3rem;font-weight:800;color:#ec4899}
.tpl-creative .showcase img{width:100%;border-radius:1.5rem}
.tpl-creative .cta a{display:inline-block;border:3px solid #1f2937;padding:.75rem 2rem;margin-right:1rem;color:#1f2937;text-decoration:none;font-weight:700}
</style>
"#;

/// Bold split-screen layout with a pink accent and a numbered project showcase.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreativeTemplate;

impl TemplateRenderer for CreativeTemplate {
    fn template_id(&self) -> TemplateId {
        TemplateId::Creative
    }

    fn render(&self, props: &TemplateProps<'_>) -> String {
        let data = props.data;

        let pieces: String = data
            .projects
            .iter()
            .enumerate()
            .map(|(index, project)| showcase_piece(index + 1, project))
            .collect();

        let body = format!(
            r#"<div class="split"><div class="left"><p>{role}</p><h1>{name}</h1></div><div class="right"><p>{bio}</p></div></div>
<section id="skills"><h2>What I Do</h2><div class="skills">{skills}</div></section>
<section id="projects"><h2>Showcase</h2><div class="showcase">{pieces}</div></section>
<section id="contact" class="cta"><h2>Say Hello</h2>{cta}</section>"#,
            role = escape(&data.job_role),
            name = escape(&data.name),
            bio = escape(&data.bio),
            skills = data.skills.iter().map(skill_dot).collect::<String>(),
            pieces = pieces,
            cta = call_to_action(data),
        );

        document(&data.name, STYLE, "tpl-creative", &body, props.is_preview)
    }
}

fn skill_dot(skill: &Skill) -> String {
    format!(
        r#"<div class="skill"><span class="dot">{}</span><span>{}</span></div>"#,
        skill.level(),
        escape(&skill.name)
    )
}

fn showcase_piece(number: usize, project: &Project) -> String {
    let image = safe_url(&project.project_image)
        .map(|src| format!(r#"<img src="{src}" alt="{}">"#, escape(&project.project_title)))
        .unwrap_or_default();
    let title = match safe_url(&project.project_url) {
        Some(href) => format!(r#"<a href="{href}">{}</a>"#, escape(&project.project_title)),
        None => escape(&project.project_title),
    };

    format!(
        r#"<div class="piece"><span class="num">{number:02}</span><div><h3>{title}</h3><p>{}</p></div><div>{image}</div></div>"#,
        escape(&project.project_summary),
    )
}

fn call_to_action(data: &PortfolioData) -> String {
    let mut out = String::new();
    if !data.email.is_empty() {
        if let Some(mail) = safe_url(&format!("mailto:{}", data.email)) {
            out.push_str(&format!(r#"<a href="{mail}">Email</a>"#));
        }
    }
    if let Some(tel) = data
        .phone_number
        .as_deref()
        .and_then(|p| safe_url(&format!("tel:{p}")))
    {
        out.push_str(&format!(r#"<a href="{tel}">Call</a>"#));
    }
    for social in &data.socials {
        if let Some(url) = safe_url(&social.url) {
            out.push_str(&format!(r#"<a href="{url}">{}</a>"#, escape(&social.platform)));
        }
    }
    out
}
