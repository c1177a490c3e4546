use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Id of the personal section. Fixed so the section can be recognised and protected.
pub const PERSONAL_SECTION_ID: &str = "personal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Personal,
    Summary,
    Experience,
    Education,
    Skills,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Personal => "personal",
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            SectionKind::Personal => "Personal Information",
            SectionKind::Summary => "Professional Summary",
            SectionKind::Experience => "Work Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-text fields whose fill state counts towards completeness.
pub trait TrackedFields {
    fn tracked_values(&self) -> Vec<&str>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
}

impl TrackedFields for PersonalInfo {
    fn tracked_values(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.location.as_str(),
            self.linkedin.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl ExperienceEntry {
    pub fn empty() -> Self {
        Self {
            id: format!("exp-{}", Uuid::new_v4()),
            ..Default::default()
        }
    }
}

impl TrackedFields for ExperienceEntry {
    fn tracked_values(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.company.as_str(),
            self.location.as_str(),
            self.start_date.as_str(),
            self.end_date.as_str(),
            self.description.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl EducationEntry {
    pub fn empty() -> Self {
        Self {
            id: format!("edu-{}", Uuid::new_v4()),
            ..Default::default()
        }
    }
}

impl TrackedFields for EducationEntry {
    fn tracked_values(&self) -> Vec<&str> {
        vec![
            self.degree.as_str(),
            self.institution.as_str(),
            self.location.as_str(),
            self.start_date.as_str(),
            self.end_date.as_str(),
            self.description.as_str(),
        ]
    }
}

/// Typed payload of a section, one variant per section kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum SectionContent {
    Personal(PersonalInfo),
    Summary(Summary),
    Experience(Vec<ExperienceEntry>),
    Education(Vec<EducationEntry>),
    Skills(Vec<String>),
}

impl SectionContent {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionContent::Personal(_) => SectionKind::Personal,
            SectionContent::Summary(_) => SectionKind::Summary,
            SectionContent::Experience(_) => SectionKind::Experience,
            SectionContent::Education(_) => SectionKind::Education,
            SectionContent::Skills(_) => SectionKind::Skills,
        }
    }

    /// Default content for a freshly added section. Entry lists start with one blank entry.
    pub fn empty(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Personal => SectionContent::Personal(PersonalInfo::default()),
            SectionKind::Summary => SectionContent::Summary(Summary::default()),
            SectionKind::Experience => SectionContent::Experience(vec![ExperienceEntry::empty()]),
            SectionKind::Education => SectionContent::Education(vec![EducationEntry::empty()]),
            SectionKind::Skills => SectionContent::Skills(Vec::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub order: u32,
    pub content: SectionContent,
}

impl Section {
    pub fn new(kind: SectionKind) -> Self {
        let id = match kind {
            SectionKind::Personal => PERSONAL_SECTION_ID.to_string(),
            other => format!("{other}-{}", Uuid::new_v4()),
        };
        Self {
            id,
            title: kind.default_title().to_string(),
            order: 0,
            content: SectionContent::empty(kind),
        }
    }

    pub fn kind(&self) -> SectionKind {
        self.content.kind()
    }
}

/// The whole resume: an ordered list of typed sections.
///
/// Mutations replace whole sections and keep `order` equal to the position in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Default for ResumeRecord {
    fn default() -> Self {
        Self::blank()
    }
}

impl ResumeRecord {
    /// A record holding only an empty personal section.
    pub fn blank() -> Self {
        Self {
            sections: vec![Section::new(SectionKind::Personal)],
        }
    }

    /// The pre-filled resume the editor opens with.
    pub fn sample() -> Self {
        let sections = vec![
            Section {
                id: PERSONAL_SECTION_ID.to_string(),
                title: SectionKind::Personal.default_title().to_string(),
                order: 0,
                content: SectionContent::Personal(PersonalInfo {
                    name: "John Doe".to_string(),
                    email: "john.doe@example.com".to_string(),
                    phone: "(123) 456-7890".to_string(),
                    location: "New York, NY".to_string(),
                    linkedin: "linkedin.com/in/johndoe".to_string(),
                }),
            },
            Section {
                id: "summary".to_string(),
                title: SectionKind::Summary.default_title().to_string(),
                order: 1,
                content: SectionContent::Summary(Summary {
                    text: "Experienced software developer with 5+ years of experience in web development, specializing in React and TypeScript.".to_string(),
                }),
            },
            Section {
                id: "experience-1".to_string(),
                title: SectionKind::Experience.default_title().to_string(),
                order: 2,
                content: SectionContent::Experience(vec![ExperienceEntry {
                    id: "exp-1".to_string(),
                    title: "Senior Frontend Developer".to_string(),
                    company: "Tech Solutions Inc.".to_string(),
                    location: "New York, NY".to_string(),
                    start_date: "2020-01".to_string(),
                    end_date: "Present".to_string(),
                    description: "Led development of responsive web applications using React and TypeScript.".to_string(),
                }]),
            },
            Section {
                id: "education-1".to_string(),
                title: SectionKind::Education.default_title().to_string(),
                order: 3,
                content: SectionContent::Education(vec![EducationEntry {
                    id: "edu-1".to_string(),
                    degree: "Bachelor of Science in Computer Science".to_string(),
                    institution: "University of Technology".to_string(),
                    location: "Boston, MA".to_string(),
                    start_date: "2012-09".to_string(),
                    end_date: "2016-05".to_string(),
                    description: "Graduated with honors. Specialized in software engineering.".to_string(),
                }]),
            },
            Section {
                id: "skills-1".to_string(),
                title: SectionKind::Skills.default_title().to_string(),
                order: 4,
                content: SectionContent::Skills(
                    ["React", "TypeScript", "JavaScript", "HTML/CSS", "Node.js", "Git", "Agile"]
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                ),
            },
        ];
        Self { sections }
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn personal_info(&self) -> Option<&PersonalInfo> {
        self.sections.iter().find_map(|s| match &s.content {
            SectionContent::Personal(info) => Some(info),
            _ => None,
        })
    }

    /// Sorts by the incoming `order`, rejects duplicate ids and a second personal
    /// section, then renumbers densely. Applied to every record received from a client.
    pub fn normalize(mut self) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(AppError::InvalidInput(format!(
                    "Duplicate section id '{}'",
                    section.id
                )));
            }
        }

        let personal_count = self
            .sections
            .iter()
            .filter(|s| s.kind() == SectionKind::Personal)
            .count();
        if personal_count > 1 {
            return Err(AppError::InvalidInput(
                "A resume can only have one personal section".to_string(),
            ));
        }

        // stable: ties keep their list position
        self.sections.sort_by_key(|s| s.order);
        self.renumber();
        Ok(self)
    }

    /// Appends a default section of `kind`. Personal sections are never added; returns
    /// the id of the new section otherwise.
    pub fn add_section(&mut self, kind: SectionKind) -> Option<String> {
        if kind == SectionKind::Personal {
            return None;
        }
        let section = Section::new(kind);
        let id = section.id.clone();
        self.sections.push(section);
        self.renumber();
        Some(id)
    }

    /// Replaces the section carrying the same id. The kind of a section is fixed.
    pub fn replace_section(&mut self, updated: Section) -> Result<(), AppError> {
        let slot = self
            .sections
            .iter_mut()
            .find(|s| s.id == updated.id)
            .ok_or_else(|| AppError::NotFound(format!("Section {} not found", updated.id)))?;

        if slot.kind() != updated.kind() {
            return Err(AppError::InvalidInput(format!(
                "Section {} is a {} section and cannot become {}",
                updated.id,
                slot.kind(),
                updated.kind()
            )));
        }

        let order = slot.order;
        *slot = Section { order, ..updated };
        Ok(())
    }

    /// Removes a section by id. The personal section stays; unknown ids are ignored.
    /// Returns whether anything was removed.
    pub fn remove_section(&mut self, id: &str) -> bool {
        let removable = self
            .section(id)
            .map(|s| s.kind() != SectionKind::Personal)
            .unwrap_or(false);
        if !removable {
            return false;
        }
        self.sections.retain(|s| s.id != id);
        self.renumber();
        true
    }

    /// Moves section `id` so that it sits immediately before `before_id`.
    pub fn move_section(&mut self, id: &str, before_id: &str) -> Result<(), AppError> {
        if id == before_id {
            return Ok(());
        }
        let from = self
            .sections
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Section {id} not found")))?;
        if self.section(before_id).is_none() {
            return Err(AppError::NotFound(format!("Section {before_id} not found")));
        }

        let moved = self.sections.remove(from);
        // target index is looked up after removal so the moved section lands before it
        let to = self
            .sections
            .iter()
            .position(|s| s.id == before_id)
            .unwrap_or(self.sections.len());
        self.sections.insert(to, moved);
        self.renumber();
        Ok(())
    }

    fn renumber(&mut self) {
        for (index, section) in self.sections.iter_mut().enumerate() {
            section.order = index as u32;
        }
    }
}
