//! Canned bullet-point suggestions, chosen by a coarse reading of the job title.

use serde::Serialize;

use crate::models::suggestion::AiSuggestion;

/// Broad career track inferred from a job title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobTrack {
    Technical,
    Management,
    General,
}

impl JobTrack {
    /// Technical wins over management: "Engineering Manager" is technical.
    pub fn classify(job_title: &str) -> Self {
        let title = job_title.to_lowercase();
        if title.contains("developer") || title.contains("engineer") {
            JobTrack::Technical
        } else if title.contains("manager") || title.contains("lead") {
            JobTrack::Management
        } else {
            JobTrack::General
        }
    }
}

/// Three suggestions for the job title's track. Only the general track uses the
/// title and company; the technical and management sets are fixed.
pub fn bullet_points_for(job_title: &str, company_name: &str) -> Vec<AiSuggestion> {
    match JobTrack::classify(job_title) {
        JobTrack::Technical => vec![
            AiSuggestion::new(
                "Led development of responsive web applications using React and TypeScript, resulting in a 40% improvement in user engagement.",
                95,
                &["React", "TypeScript", "responsive", "development"],
            ),
            AiSuggestion::new(
                "Collaborated with UX designers to implement user-centered design principles, improving customer satisfaction scores by 25%.",
                88,
                &["UX", "design", "collaboration", "customer satisfaction"],
            ),
            AiSuggestion::new(
                "Optimized application performance through code refactoring and implementing best practices, reducing load times by 35%.",
                92,
                &["optimization", "performance", "refactoring", "best practices"],
            ),
        ],
        JobTrack::Management => vec![
            AiSuggestion::new(
                "Managed a cross-functional team of 8 professionals, delivering all projects on time and under budget.",
                94,
                &["management", "cross-functional", "delivery", "budget"],
            ),
            AiSuggestion::new(
                "Implemented agile methodologies that increased team productivity by 30% and reduced development cycles by 2 weeks.",
                91,
                &["agile", "productivity", "development cycles"],
            ),
            AiSuggestion::new(
                "Established strategic partnerships with key stakeholders, resulting in 45% increase in department resources.",
                87,
                &["strategic partnerships", "stakeholders", "resources"],
            ),
        ],
        JobTrack::General => vec![
            AiSuggestion::new(
                format!(
                    "Demonstrated expertise in {job_title} role at {company_name}, exceeding performance targets by 20%."
                ),
                85,
                &["expertise", "performance", "targets"],
            ),
            AiSuggestion::new(
                "Collaborated with cross-functional teams to implement process improvements, resulting in 15% increased efficiency.",
                82,
                &["collaboration", "process improvements", "efficiency"],
            ),
            AiSuggestion::new(
                "Recognized for outstanding contributions to team objectives and company goals.",
                78,
                &["recognition", "contributions", "objectives", "goals"],
            ),
        ],
    }
}

/// Canned professional summary offered for an empty or weak summary section.
pub fn summary_suggestion() -> AiSuggestion {
    AiSuggestion::new(
        "Results-driven software engineer with 5+ years of experience developing scalable web applications. Proficient in React, TypeScript, and Node.js with a strong focus on creating responsive, user-friendly interfaces. Passionate about clean code and optimizing application performance.",
        90,
        &["React", "TypeScript", "Node.js", "performance"],
    )
}
