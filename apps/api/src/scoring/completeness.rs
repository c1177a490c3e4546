use serde::{Deserialize, Serialize};

use crate::models::resume::{ResumeRecord, SectionContent, TrackedFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessReport {
    /// 0 – 100
    pub percentage: u8,
    pub filled_fields: u32,
    pub total_fields: u32,
}

/// Counts tracked fields across every section and how many hold non-blank text.
///
/// - personal: each of its fields
/// - summary: the text, as one field
/// - experience / education: every string field of every entry, ids excluded
/// - skills: one field, filled when the list is non-empty
///
/// A record with nothing to track scores 0.
pub fn compute_completeness_report(record: &ResumeRecord) -> CompletenessReport {
    let mut total: u32 = 0;
    let mut filled: u32 = 0;

    for section in &record.sections {
        let (section_total, section_filled) = match &section.content {
            SectionContent::Personal(info) => count_fields(info),
            SectionContent::Summary(summary) => (1, is_filled(&summary.text) as u32),
            SectionContent::Experience(entries) => sum_entries(entries),
            SectionContent::Education(entries) => sum_entries(entries),
            SectionContent::Skills(skills) => (1, !skills.is_empty() as u32),
        };
        total += section_total;
        filled += section_filled;
    }

    let percentage = if total > 0 {
        ((filled as f64 / total as f64) * 100.0).round() as u8
    } else {
        0
    };

    CompletenessReport {
        percentage,
        filled_fields: filled,
        total_fields: total,
    }
}

pub fn completeness_percentage(record: &ResumeRecord) -> u8 {
    compute_completeness_report(record).percentage
}

fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

fn count_fields<T: TrackedFields>(item: &T) -> (u32, u32) {
    let values = item.tracked_values();
    let filled = values.iter().filter(|v| is_filled(v)).count();
    (values.len() as u32, filled as u32)
}

fn sum_entries<T: TrackedFields>(entries: &[T]) -> (u32, u32) {
    entries
        .iter()
        .map(count_fields)
        .fold((0, 0), |(t, f), (et, ef)| (t + et, f + ef))
}
