//! Built-in profile content used until storage has something newer.

use super::{
    Certification, Content, Education, Experience, Highlight, PortfolioDocument, Project, Skill,
};

const CODE_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/></svg>"##;
const SPARK_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M12 2v4"/><path d="m16.2 7.8 2.9-2.9"/><path d="M18 12h4"/><path d="m16.2 16.2 2.9 2.9"/><path d="M12 18v4"/><path d="m4.9 19.1 2.9-2.9"/><path d="M2 12h4"/><path d="m4.9 4.9 2.9 2.9"/></svg>"##;
const USERS_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/></svg>"##;
const AWARD_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="8" r="7"/><polyline points="8.21 13.89 7 23 12 20 17 23 15.79 13.88"/></svg>"##;

/// The document shown on a first visit and whenever a stored field is
/// unusable.
pub fn default_document() -> PortfolioDocument {
    PortfolioDocument {
        projects: vec![
            Project {
                id: 1,
                title: "Streamline".to_string(),
                description: "Real-time account balance tracker built on a log-ingestion \
                              pipeline with low-latency stream processing."
                    .to_string(),
                tech: "Kafka, Flink, Streaming, Big Data".to_string(),
                image: Some("/assets/projects/streamline.jpg".to_string()),
                github: Some("https://github.com/example/streamline".to_string()),
                live: None,
                featured: true,
            },
            Project {
                id: 2,
                title: "Atlas Gallery".to_string(),
                description: "A web platform for exploring, creating and showcasing digital \
                              art, with artist profiles and trending galleries."
                    .to_string(),
                tech: "TypeScript, PostgreSQL, Web".to_string(),
                image: Some("/assets/projects/atlas.jpg".to_string()),
                github: Some("https://github.com/example/atlas-gallery".to_string()),
                live: None,
                featured: false,
            },
            Project {
                id: 3,
                title: "Scanlight".to_string(),
                description: "Deep-learning model for 3D MRI tumor segmentation with Dice \
                              and focal loss optimization."
                    .to_string(),
                tech: "Python, Deep Learning, Medical Imaging".to_string(),
                image: Some("/assets/projects/scanlight.jpg".to_string()),
                github: Some("https://github.com/example/scanlight".to_string()),
                live: None,
                featured: false,
            },
            Project {
                id: 4,
                title: "Interactive 3D Portfolio".to_string(),
                description: "An animated, interactive portfolio with a particle background \
                              showcasing personal projects and skills."
                    .to_string(),
                tech: "Rust, WebAssembly, Leptos".to_string(),
                image: Some("/assets/projects/portfolio.jpg".to_string()),
                github: Some("https://github.com/example/portfolio".to_string()),
                live: Some("https://example.dev".to_string()),
                featured: false,
            },
        ],
        skills: vec![
            Skill { id: 1, name: "Rust".to_string(), level: 90 },
            Skill { id: 2, name: "TypeScript".to_string(), level: 85 },
            Skill { id: 3, name: "Python".to_string(), level: 80 },
            Skill { id: 4, name: "SQL".to_string(), level: 75 },
        ],
        experiences: vec![Experience {
            id: 1,
            title: "Software Engineering Intern".to_string(),
            company: "Nordwind Labs".to_string(),
            period: "2024 – 2025".to_string(),
            description: "Built data-ingestion services and internal dashboards.".to_string(),
        }],
        education: vec![
            Education {
                id: 1,
                degree: "Bachelor of Engineering, Information Technology".to_string(),
                school: "City Institute of Technology".to_string(),
                period: "2022 – Present".to_string(),
                location: "Hyderabad, India".to_string(),
            },
            Education {
                id: 2,
                degree: "Higher Secondary".to_string(),
                school: "Junior College".to_string(),
                period: "2019 – 2021".to_string(),
                location: "Hyderabad, India".to_string(),
            },
        ],
        gallery: vec![],
        highlights: vec![
            Highlight {
                id: 1,
                icon: CODE_ICON.to_string(),
                title: "Full Stack Development".to_string(),
                description: "Expertise in modern web technologies and frameworks".to_string(),
            },
            Highlight {
                id: 2,
                icon: SPARK_ICON.to_string(),
                title: "Innovation".to_string(),
                description: "Always exploring new technologies and solutions".to_string(),
            },
            Highlight {
                id: 3,
                icon: USERS_ICON.to_string(),
                title: "Team Leadership".to_string(),
                description: "Leading teams to deliver results".to_string(),
            },
            Highlight {
                id: 4,
                icon: AWARD_ICON.to_string(),
                title: "Recognition".to_string(),
                description: "Multiple hackathon wins and project accolades".to_string(),
            },
        ],
        certifications: vec![
            Certification {
                id: 1,
                name: "Certified AI Associate".to_string(),
                issuer: None,
                date: Some("March 2025".to_string()),
                description: None,
            },
            Certification {
                id: 2,
                name: "Machine Learning Foundation".to_string(),
                issuer: None,
                date: Some("Feb 2024".to_string()),
                description: None,
            },
        ],
        content: Content {
            about_text: "Passionate software developer with expertise in modern web \
                         technologies and data-intensive systems."
                .to_string(),
            contact_email: "hello@example.dev".to_string(),
            contact_phone: "+1 555 010 0199".to_string(),
            profile_image: String::new(),
            resume_file: "/assets/resume.pdf".to_string(),
            cv_file: String::new(),
            technologies: vec![
                "Rust".to_string(),
                "Leptos".to_string(),
                "TypeScript".to_string(),
                "Python".to_string(),
                "PostgreSQL".to_string(),
                "Redis".to_string(),
                "Docker".to_string(),
                "AWS".to_string(),
            ],
            projects_completed: 5,
            years_experience: 1,
            technologies_count: 8,
            location: "Hyderabad, IN".to_string(),
            github_url: "https://github.com/example".to_string(),
            linkedin_url: "https://www.linkedin.com/in/example".to_string(),
            twitter_url: "https://twitter.com/example".to_string(),
            social_links: vec![],
        },
    }
}
