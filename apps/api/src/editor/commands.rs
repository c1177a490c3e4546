use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::{
    EducationEntry, ExperienceEntry, ResumeRecord, Section, SectionContent, SectionKind,
};
use crate::scoring::{compute_completeness_report, CompletenessReport};

/// One user edit. Mirrors the actions of the section editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditorCommand {
    AddSection {
        kind: SectionKind,
    },
    UpdateSection {
        section: Section,
    },
    RemoveSection {
        id: String,
    },
    MoveSection {
        id: String,
        before_id: String,
    },
    AddEntry {
        section_id: String,
    },
    RemoveEntry {
        section_id: String,
        entry_id: String,
    },
    /// Copies accepted suggestion text into the host section.
    ApplySuggestion {
        section_id: String,
        #[serde(default)]
        entry_id: Option<String>,
        text: String,
    },
}

/// The record after a command, as handed to whoever owns the editor state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorUpdate {
    pub record: ResumeRecord,
    pub completeness: CompletenessReport,
    pub changed: bool,
}

pub fn apply_command(
    mut record: ResumeRecord,
    command: EditorCommand,
) -> Result<EditorUpdate, AppError> {
    let before = record.clone();

    match command {
        EditorCommand::AddSection { kind } => {
            if let Some(id) = record.add_section(kind) {
                debug!("Added {kind} section {id}");
            }
        }
        EditorCommand::UpdateSection { section } => record.replace_section(section)?,
        EditorCommand::RemoveSection { id } => {
            if !record.remove_section(&id) {
                debug!("Section {id} was not removed");
            }
        }
        EditorCommand::MoveSection { id, before_id } => record.move_section(&id, &before_id)?,
        EditorCommand::AddEntry { section_id } => add_entry(&mut record, &section_id)?,
        EditorCommand::RemoveEntry {
            section_id,
            entry_id,
        } => remove_entry(&mut record, &section_id, &entry_id)?,
        EditorCommand::ApplySuggestion {
            section_id,
            entry_id,
            text,
        } => apply_suggestion(&mut record, &section_id, entry_id.as_deref(), text)?,
    }

    let changed = record != before;
    let completeness = compute_completeness_report(&record);
    Ok(EditorUpdate {
        record,
        completeness,
        changed,
    })
}

fn find_section(record: &ResumeRecord, id: &str) -> Result<Section, AppError> {
    record
        .section(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Section {id} not found")))
}

fn add_entry(record: &mut ResumeRecord, section_id: &str) -> Result<(), AppError> {
    let mut section = find_section(record, section_id)?;
    match &mut section.content {
        SectionContent::Experience(entries) => entries.push(ExperienceEntry::empty()),
        SectionContent::Education(entries) => entries.push(EducationEntry::empty()),
        other => {
            return Err(AppError::InvalidInput(format!(
                "A {} section has no entries",
                other.kind()
            )))
        }
    }
    record.replace_section(section)
}

/// The last entry of a section is kept; removing it leaves the record unchanged.
fn remove_entry(record: &mut ResumeRecord, section_id: &str, entry_id: &str) -> Result<(), AppError> {
    let mut section = find_section(record, section_id)?;
    let removed = match &mut section.content {
        SectionContent::Experience(entries) => retain_entry(entries, entry_id, |e| &e.id)?,
        SectionContent::Education(entries) => retain_entry(entries, entry_id, |e| &e.id)?,
        other => {
            return Err(AppError::InvalidInput(format!(
                "A {} section has no entries",
                other.kind()
            )))
        }
    };
    if removed {
        record.replace_section(section)?;
    }
    Ok(())
}

fn retain_entry<T>(
    entries: &mut Vec<T>,
    entry_id: &str,
    id_of: impl Fn(&T) -> &String,
) -> Result<bool, AppError> {
    if !entries.iter().any(|e| id_of(e) == entry_id) {
        return Err(AppError::NotFound(format!("Entry {entry_id} not found")));
    }
    if entries.len() <= 1 {
        return Ok(false);
    }
    entries.retain(|e| id_of(e) != entry_id);
    Ok(true)
}

/// Experience suggestions become the entry's description; summary suggestions replace
/// the summary text. Other sections do not take suggestions.
fn apply_suggestion(
    record: &mut ResumeRecord,
    section_id: &str,
    entry_id: Option<&str>,
    text: String,
) -> Result<(), AppError> {
    let mut section = find_section(record, section_id)?;
    match &mut section.content {
        SectionContent::Experience(entries) => {
            let entry_id = entry_id.ok_or_else(|| {
                AppError::InvalidInput("entry_id is required for experience suggestions".to_string())
            })?;
            let entry = entries
                .iter_mut()
                .find(|e| e.id == entry_id)
                .ok_or_else(|| AppError::NotFound(format!("Entry {entry_id} not found")))?;
            entry.description = text;
        }
        SectionContent::Summary(summary) => summary.text = text,
        other => {
            debug!("Ignoring suggestion for {} section {section_id}", other.kind());
            return Ok(());
        }
    }
    record.replace_section(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Summary, PERSONAL_SECTION_ID};

    fn apply(record: ResumeRecord, command: EditorCommand) -> EditorUpdate {
        apply_command(record, command).unwrap()
    }

    fn experience_entries(record: &ResumeRecord, id: &str) -> Vec<ExperienceEntry> {
        match &record.section(id).unwrap().content {
            SectionContent::Experience(entries) => entries.clone(),
            other => panic!("unexpected content {other:?}"),
        }
    }

    #[test]
    fn test_add_section_updates_completeness() {
        let update = apply(
            ResumeRecord::sample(),
            EditorCommand::AddSection {
                kind: SectionKind::Education,
            },
        );
        assert!(update.changed);
        assert_eq!(update.record.sections.len(), 6);
        // 19 filled of 25 tracked
        assert_eq!(update.completeness.total_fields, 25);
        assert_eq!(update.completeness.percentage, 76);
    }

    #[test]
    fn test_add_personal_section_is_unchanged() {
        let update = apply(
            ResumeRecord::sample(),
            EditorCommand::AddSection {
                kind: SectionKind::Personal,
            },
        );
        assert!(!update.changed);
        assert_eq!(update.record, ResumeRecord::sample());
    }

    #[test]
    fn test_remove_personal_section_is_unchanged() {
        let update = apply(
            ResumeRecord::sample(),
            EditorCommand::RemoveSection {
                id: PERSONAL_SECTION_ID.to_string(),
            },
        );
        assert!(!update.changed);
        assert_eq!(update.record, ResumeRecord::sample());
    }

    #[test]
    fn test_move_section_reports_change() {
        let update = apply(
            ResumeRecord::sample(),
            EditorCommand::MoveSection {
                id: "skills-1".to_string(),
                before_id: "experience-1".to_string(),
            },
        );
        assert!(update.changed);
        assert_eq!(update.record.sections[2].id, "skills-1");
        assert_eq!(update.record.sections[3].id, "experience-1");
        assert_eq!(update.completeness.percentage, 100);
    }

    #[test]
    fn test_update_unknown_section_is_not_found() {
        let mut section = Section::new(SectionKind::Skills);
        section.id = "skills-404".to_string();
        let result = apply_command(
            ResumeRecord::sample(),
            EditorCommand::UpdateSection { section },
        );
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_update_section_replaces_content() {
        let record = ResumeRecord::sample();
        let mut skills = record.section("skills-1").unwrap().clone();
        skills.content = SectionContent::Skills(vec![]);
        let update = apply(record, EditorCommand::UpdateSection { section: skills });
        // skills no longer counts: 18 of 19
        assert_eq!(update.completeness.filled_fields, 18);
        assert_eq!(update.completeness.percentage, 95);
    }

    #[test]
    fn test_add_entry_appends_blank_entry() {
        let update = apply(
            ResumeRecord::sample(),
            EditorCommand::AddEntry {
                section_id: "experience-1".to_string(),
            },
        );
        let entries = experience_entries(&update.record, "experience-1");
        assert_eq!(entries.len(), 2);
        assert!(entries[1].id.starts_with("exp-"));
        assert_ne!(entries[0].id, entries[1].id);
    }

    #[test]
    fn test_add_entry_to_skills_is_invalid() {
        let result = apply_command(
            ResumeRecord::sample(),
            EditorCommand::AddEntry {
                section_id: "skills-1".to_string(),
            },
        );
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_last_entry_is_kept() {
        let update = apply(
            ResumeRecord::sample(),
            EditorCommand::RemoveEntry {
                section_id: "experience-1".to_string(),
                entry_id: "exp-1".to_string(),
            },
        );
        assert!(!update.changed);
        assert_eq!(experience_entries(&update.record, "experience-1").len(), 1);
    }

    #[test]
    fn test_remove_entry_when_several() {
        let added = apply(
            ResumeRecord::sample(),
            EditorCommand::AddEntry {
                section_id: "experience-1".to_string(),
            },
        );
        let update = apply(
            added.record,
            EditorCommand::RemoveEntry {
                section_id: "experience-1".to_string(),
                entry_id: "exp-1".to_string(),
            },
        );
        let entries = experience_entries(&update.record, "experience-1");
        assert_eq!(entries.len(), 1);
        assert_ne!(entries[0].id, "exp-1");
    }

    #[test]
    fn test_remove_unknown_entry_is_not_found() {
        let result = apply_command(
            ResumeRecord::sample(),
            EditorCommand::RemoveEntry {
                section_id: "education-1".to_string(),
                entry_id: "edu-404".to_string(),
            },
        );
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_apply_suggestion_to_experience_entry() {
        let update = apply(
            ResumeRecord::sample(),
            EditorCommand::ApplySuggestion {
                section_id: "experience-1".to_string(),
                entry_id: Some("exp-1".to_string()),
                text: "Shipped things.".to_string(),
            },
        );
        let entries = experience_entries(&update.record, "experience-1");
        assert_eq!(entries[0].description, "Shipped things.");
        assert_eq!(entries[0].title, "Senior Frontend Developer");
    }

    #[test]
    fn test_apply_suggestion_to_experience_needs_entry() {
        let result = apply_command(
            ResumeRecord::sample(),
            EditorCommand::ApplySuggestion {
                section_id: "experience-1".to_string(),
                entry_id: None,
                text: "x".to_string(),
            },
        );
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_apply_suggestion_to_summary() {
        let update = apply(
            ResumeRecord::sample(),
            EditorCommand::ApplySuggestion {
                section_id: "summary".to_string(),
                entry_id: None,
                text: "New summary".to_string(),
            },
        );
        assert_eq!(
            update.record.section("summary").unwrap().content,
            SectionContent::Summary(Summary {
                text: "New summary".to_string()
            })
        );
    }

    #[test]
    fn test_apply_suggestion_to_skills_is_ignored() {
        let update = apply(
            ResumeRecord::sample(),
            EditorCommand::ApplySuggestion {
                section_id: "skills-1".to_string(),
                entry_id: None,
                text: "Rust".to_string(),
            },
        );
        assert!(!update.changed);
    }

    #[test]
    fn test_command_json_shape() {
        let command: EditorCommand = serde_json::from_str(
            r#"{ "op": "move_section", "id": "skills-1", "before_id": "summary" }"#,
        )
        .unwrap();
        assert_eq!(
            command,
            EditorCommand::MoveSection {
                id: "skills-1".to_string(),
                before_id: "summary".to_string(),
            }
        );
    }
}
