use crate::portfolio::domain::entities::{PortfolioData, Project, Skill, Social};

pub fn sample_portfolio(template_id: &str) -> PortfolioData {
    PortfolioData {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone_number: Some("5551234567".to_string()),
        bio: "Builds calm, dependable web products.".to_string(),
        job_role: "Software Engineer".to_string(),
        slug: "jane".to_string(),
        resume: Some("https://cdn.example.com/jane.pdf".to_string()),
        template_id: template_id.to_string(),
        skills: vec![
            skill("s1", "Rust", "90"),
            skill("s2", "TypeScript", "80"),
            skill("s3", "PostgreSQL", "75"),
        ],
        projects: vec![
            Project {
                id: "p1".to_string(),
                project_title: "Folio Builder".to_string(),
                project_summary: "Generates portfolio sites from a form".to_string(),
                project_url: "https://folio.example.com".to_string(),
                project_image: "https://cdn.example.com/folio.png".to_string(),
            },
            Project {
                id: "p2".to_string(),
                project_title: "Weather Station".to_string(),
                project_summary: "Backyard sensor dashboard".to_string(),
                project_url: String::new(),
                project_image: String::new(),
            },
        ],
        socials: vec![Social {
            platform: "GitHub".to_string(),
            url: "https://github.com/janedoe".to_string(),
        }],
    }
}

/// Only name and email set; no phone, resume, skills, projects or socials.
pub fn empty_portfolio(template_id: &str) -> PortfolioData {
    PortfolioData {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        template_id: template_id.to_string(),
        ..PortfolioData::default()
    }
}

fn skill(id: &str, name: &str, percentage: &str) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        percentage: percentage.to_string(),
    }
}
