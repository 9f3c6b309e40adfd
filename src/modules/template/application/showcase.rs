use crate::portfolio::domain::entities::{PortfolioData, Project, Skill, Social};
use crate::template::domain::entities::TemplateId;

const SKILLS: [(&str, &str); 8] = [
    ("React", "95"),
    ("TypeScript", "90"),
    ("Node.js", "85"),
    ("Python", "80"),
    ("UI/UX Design", "88"),
    ("MongoDB", "75"),
    ("PostgreSQL", "82"),
    ("AWS", "70"),
];

const PROJECTS: [(&str, &str); 6] = [
    (
        "E-Commerce Platform",
        "A modern e-commerce platform built with React and Node.js",
    ),
    (
        "Task Management App",
        "Collaborative task management tool with real-time updates",
    ),
    (
        "AI Chat Bot",
        "Intelligent chatbot using natural language processing",
    ),
    (
        "Data Visualization Dashboard",
        "Interactive dashboard for business analytics",
    ),
    (
        "Portfolio Website",
        "Responsive portfolio website with modern animations",
    ),
    (
        "Weather App",
        "Real-time weather application with beautiful UI",
    ),
];

/// Demo portfolio used to render gallery previews of a template.
pub fn showcase_portfolio(template: TemplateId) -> PortfolioData {
    PortfolioData {
        name: "Alexandra Rodriguez".to_string(),
        email: "alexandra.rodriguez@email.com".to_string(),
        phone_number: Some("+1 (555) 123-4567".to_string()),
        bio: "Passionate full-stack developer with 5+ years of experience creating beautiful, functional web applications. I specialize in React, Node.js, and modern design principles.".to_string(),
        job_role: "Full Stack Developer & UI/UX Designer".to_string(),
        slug: "alexandra".to_string(),
        resume: None,
        template_id: template.as_str().to_string(),
        skills: SKILLS
            .iter()
            .enumerate()
            .map(|(i, (name, pct))| Skill {
                id: format!("skill-{}", i + 1),
                name: name.to_string(),
                percentage: pct.to_string(),
            })
            .collect(),
        projects: PROJECTS
            .iter()
            .enumerate()
            .map(|(i, (title, summary))| Project {
                id: format!("project-{}", i + 1),
                project_title: title.to_string(),
                project_summary: summary.to_string(),
                project_url: String::new(),
                project_image: "/placeholder.svg".to_string(),
            })
            .collect(),
        socials: vec![Social {
            platform: "LinkedIn".to_string(),
            url: "https://www.linkedin.com/".to_string(),
        }],
    }
}
