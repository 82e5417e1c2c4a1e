//! Starter résumé shown to a new user.

use crate::models::document::{
    Document, EducationEntry, ExperienceEntry, Header, ProjectEntry, Skills,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Document {
    pub fn sample() -> Document {
        Document {
            header: Header {
                name: "Alex Johnson".to_string(),
                email: "alex.johnson@example.com".to_string(),
                location: "San Francisco, CA".to_string(),
                linkedin: Some("linkedin.com/in/alexjohnson".to_string()),
                portfolio: Some("alexjohnson.dev".to_string()),
                phone: None,
            },
            summary: "Results-driven Software Engineer with 5+ years of experience in building \
                      scalable web applications. Proficient in React, Node.js, and cloud \
                      architecture. Passionate about clean code, performance optimization, and \
                      developer experience."
                .to_string(),
            education: vec![EducationEntry {
                institution: "University of California, Berkeley".to_string(),
                degree: "B.S. Computer Science".to_string(),
                location: "Berkeley, CA".to_string(),
                dates: "2015 - 2019".to_string(),
                bullets: strings(&[
                    "GPA: 3.8/4.0",
                    "Relevant Coursework: Data Structures, Algorithms, Database Systems, \
                     Artificial Intelligence",
                ]),
            }],
            experience: vec![
                ExperienceEntry {
                    company: "Tech Solutions Inc.".to_string(),
                    role: "Senior Software Engineer".to_string(),
                    location: "San Francisco, CA".to_string(),
                    dates: "2022 - Present".to_string(),
                    bullets: strings(&[
                        "Led the migration of a legacy monolith to a microservices architecture, \
                         reducing deployment time by 40%.",
                        "Mentored 3 junior developers and established code review best practices.",
                        "Optimized database queries, improving API response times by 30%.",
                    ]),
                },
                ExperienceEntry {
                    company: "StartUp flight".to_string(),
                    role: "Software Engineer".to_string(),
                    location: "San Francisco, CA".to_string(),
                    dates: "2019 - 2022".to_string(),
                    bullets: strings(&[
                        "Developed and maintained key features for the main customer-facing \
                         dashboard using React and Redux.",
                        "Collaborated with product managers to define requirements and deliver \
                         features on time.",
                        "Implemented a CI/CD pipeline using GitHub Actions, ensuring reliable \
                         deployments.",
                    ]),
                },
            ],
            projects: vec![ProjectEntry {
                title: "Task Master".to_string(),
                tech: "React, Firebase, Tailwind CSS".to_string(),
                dates: "2023".to_string(),
                bullets: strings(&[
                    "Built a real-time collaborative task management application.",
                    "Implemented drag-and-drop functionality and real-time updates using \
                     Firestore.",
                ]),
            }],
            skills: Skills {
                programming: strings(&["JavaScript", "TypeScript", "Python", "Java", "SQL"]),
                design: strings(&["System Design", "API Design", "UI/UX Principles"]),
                tools: strings(&["Git", "Docker", "AWS", "Jira", "Figma"]),
            },
            custom_sections: vec![],
        }
    }
}
