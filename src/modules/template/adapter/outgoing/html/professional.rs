use crate::portfolio::domain::entities::{PortfolioData, Project, Skill};
use crate::shared::html::{document, escape, safe_url};
use crate::template::application::ports::{TemplateProps, TemplateRenderer};
use crate::template::domain::entities::TemplateId;

const STYLE: &str = r#"<style>
body.tpl-professional{margin:0;font-family:Georgia,"Times New Roman",serif;background:#f9fafb;color:#111827}
.tpl-professional .sheet{max-width:900px;margin:2rem auto;background:#fff;box-shadow:0 1px 3px rgba(0,0,0,.1);padding:3rem}
.tpl-professional .masthead{display:flex;justify-content:space-between;border-bottom:4px solid #059669;padding-bottom:1.5rem}
.tpl-professional .masthead h1{margin:0;font-size:2.4rem}
.tpl-professional .masthead .role{color:#059669;font-size:1.2rem;margin:.25rem 0 0}
.tpl-professional .contact{text-align:right;font-size:.9rem;line-height:1.6}
.tpl-professional h2{font-size:1.1rem;letter-spacing:.12em;text-transform:uppercase;color:#059669;margin-top:2rem}
.tpl-professional table{width:100%;border-collapse:collapse}
.tpl-professional td{padding:.4rem 0;border-bottom:1px solid #e5e7eb}
.tpl-professional td.level{text-align:right;width:5rem;color:#047857}
.tpl-professional ol{padding-left:1.2rem}
.tpl-professional li{margin-bottom:1rem}
.tpl-professional .resume{display:inline-block;margin-top:2rem;background:#059669;color:#fff;padding:.6rem 1.4rem;text-decoration:none}
</style>
"#;

/// Résumé-style corporate layout with a green accent.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProfessionalTemplate;

impl TemplateRenderer for ProfessionalTemplate {
    fn template_id(&self) -> TemplateId {
        TemplateId::Professional
    }

    fn render(&self, props: &TemplateProps<'_>) -> String {
        let data = props.data;
        let resume = data
            .resume
            .as_deref()
            .and_then(safe_url)
            .map(|href| format!(r#"<a class="resume" href="{href}" download>Download Resume</a>"#))
            .unwrap_or_default();

        let body = format!(
            r#"<div class="sheet">
<div class="masthead"><div><h1>{name}</h1><p class="role">{role}</p></div><div class="contact">{contact}</div></div>
<section id="summary"><h2>Professional Summary</h2><p>{bio}</p></section>
<section id="skills"><h2>Core Competencies</h2><table><tbody>{skills}</tbody></table></section>
<section id="projects"><h2>Key Projects</h2><ol>{projects}</ol></section>
{resume}
</div>"#,
            name = escape(&data.name),
            role = escape(&data.job_role),
            contact = contact_lines(data),
            bio = escape(&data.bio),
            skills = data.skills.iter().map(skill_row).collect::<String>(),
            projects = data.projects.iter().map(project_item).collect::<String>(),
            resume = resume,
        );

        document(
            &format!("{} | {}", data.name, data.job_role),
            STYLE,
            "tpl-professional",
            &body,
            props.is_preview,
        )
    }
}

fn contact_lines(data: &PortfolioData) -> String {
    let mut lines = Vec::new();
    if !data.email.is_empty() {
        lines.push(escape(&data.email));
    }
    if let Some(phone) = data.phone_number.as_deref() {
        lines.push(escape(phone));
    }
    for social in &data.socials {
        if let Some(url) = safe_url(&social.url) {
            lines.push(format!(r#"<a href="{url}">{}</a>"#, escape(&social.platform)));
        }
    }
    lines.join("<br>")
}

fn skill_row(skill: &Skill) -> String {
    format!(
        r#"<tr><td>{}</td><td class="level">{}%</td></tr>"#,
        escape(&skill.name),
        escape(&skill.percentage)
    )
}

fn project_item(project: &Project) -> String {
    let link = safe_url(&project.project_url)
        .map(|href| format!(r#" &middot; <a href="{href}">{href}</a>"#))
        .unwrap_or_default();

    format!(
        "<li><strong>{}</strong>{link}<br>{}</li>",
        escape(&project.project_title),
        escape(&project.project_summary),
    )
}
