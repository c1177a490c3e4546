//! Plain-text rendering. Also the text form the ATS matcher reads.

use crate::export::templates::TemplateId;
use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeRecord, SectionContent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeadingStyle {
    Plain,
    Uppercase,
    Underlined,
}

impl From<TemplateId> for HeadingStyle {
    fn from(template: TemplateId) -> Self {
        match template {
            TemplateId::Professional | TemplateId::Academic | TemplateId::Executive => {
                HeadingStyle::Underlined
            }
            TemplateId::Modern | TemplateId::Creative => HeadingStyle::Uppercase,
            TemplateId::Minimalist => HeadingStyle::Plain,
        }
    }
}

/// Flattens a record to plain text with unstyled headings.
pub fn record_to_text(record: &ResumeRecord) -> String {
    render(record, HeadingStyle::Plain)
}

/// Renders a record as a plain-text resume, sections in record order.
/// Sections with nothing filled in are left out.
pub fn render_text(record: &ResumeRecord, template: TemplateId) -> String {
    render(record, template.into())
}

fn render(record: &ResumeRecord, style: HeadingStyle) -> String {
    let blocks: Vec<String> = record
        .sections
        .iter()
        .filter_map(|section| {
            let body = match &section.content {
                SectionContent::Personal(info) => return personal_block(info),
                SectionContent::Summary(summary) => summary.text.trim().to_string(),
                SectionContent::Experience(entries) => entry_blocks(entries, experience_block),
                SectionContent::Education(entries) => entry_blocks(entries, education_block),
                SectionContent::Skills(skills) => join_filled(skills.iter().map(String::as_str), ", "),
            };
            if body.is_empty() {
                None
            } else {
                Some(format!("{}\n{}", heading(&section.title, style), body))
            }
        })
        .collect();

    let mut text = blocks.join("\n\n");
    if !text.is_empty() {
        text.push('\n');
    }
    text
}

fn heading(title: &str, style: HeadingStyle) -> String {
    match style {
        HeadingStyle::Plain => title.to_string(),
        HeadingStyle::Uppercase => title.to_uppercase(),
        HeadingStyle::Underlined => {
            format!("{title}\n{}", "-".repeat(title.chars().count()))
        }
    }
}

fn personal_block(info: &PersonalInfo) -> Option<String> {
    let contact = join_filled(
        [
            info.email.as_str(),
            info.phone.as_str(),
            info.location.as_str(),
            info.linkedin.as_str(),
        ],
        " | ",
    );
    let lines = join_filled([info.name.as_str(), contact.as_str()], "\n");
    (!lines.is_empty()).then_some(lines)
}

fn experience_block(entry: &ExperienceEntry) -> String {
    entry_block(
        &[entry.title.as_str(), entry.company.as_str()],
        entry.location.as_str(),
        &entry.start_date,
        &entry.end_date,
        &entry.description,
    )
}

fn education_block(entry: &EducationEntry) -> String {
    entry_block(
        &[entry.degree.as_str(), entry.institution.as_str()],
        entry.location.as_str(),
        &entry.start_date,
        &entry.end_date,
        &entry.description,
    )
}

fn entry_block(
    headline: &[&str],
    location: &str,
    start: &str,
    end: &str,
    description: &str,
) -> String {
    let dates = join_filled([start, end], " - ");
    let meta = join_filled([location, dates.as_str()], " | ");
    join_filled(
        [
            join_filled(headline.iter().copied(), ", ").as_str(),
            meta.as_str(),
            description,
        ],
        "\n",
    )
}

fn entry_blocks<T>(entries: &[T], render_entry: fn(&T) -> String) -> String {
    let rendered: Vec<String> = entries
        .iter()
        .map(render_entry)
        .filter(|block| !block.is_empty())
        .collect();
    rendered.join("\n\n")
}

/// Joins the non-blank values, trimmed.
fn join_filled<'a>(values: impl IntoIterator<Item = &'a str>, separator: &str) -> String {
    values
        .into_iter()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SectionKind;

    #[test]
    fn test_sample_plain_text() {
        let text = record_to_text(&ResumeRecord::sample());
        let expected = "\
John Doe
john.doe@example.com | (123) 456-7890 | New York, NY | linkedin.com/in/johndoe

Professional Summary
Experienced software developer with 5+ years of experience in web development, specializing in React and TypeScript.

Work Experience
Senior Frontend Developer, Tech Solutions Inc.
New York, NY | 2020-01 - Present
Led development of responsive web applications using React and TypeScript.

Education
Bachelor of Science in Computer Science, University of Technology
Boston, MA | 2012-09 - 2016-05
Graduated with honors. Specialized in software engineering.

Skills
React, TypeScript, JavaScript, HTML/CSS, Node.js, Git, Agile
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_sections_follow_record_order() {
        let mut record = ResumeRecord::sample();
        record.move_section("skills-1", "summary").unwrap();
        let text = record_to_text(&record);
        let skills_at = text.find("Skills").unwrap();
        let summary_at = text.find("Professional Summary").unwrap();
        assert!(skills_at < summary_at);
    }

    #[test]
    fn test_empty_sections_are_skipped() {
        let mut record = ResumeRecord::blank();
        record.add_section(SectionKind::Experience);
        record.add_section(SectionKind::Skills);
        assert_eq!(record_to_text(&record), "");
    }

    #[test]
    fn test_underlined_headings_for_professional() {
        let text = render_text(&ResumeRecord::sample(), TemplateId::Professional);
        assert!(text.contains("Skills\n------\nReact"));
    }

    #[test]
    fn test_uppercase_headings_for_modern() {
        let text = render_text(&ResumeRecord::sample(), TemplateId::Modern);
        assert!(text.contains("WORK EXPERIENCE\nSenior Frontend Developer"));
    }

    #[test]
    fn test_partial_entry_omits_missing_parts() {
        let entry = ExperienceEntry {
            id: "exp-1".to_string(),
            title: "Chef".to_string(),
            end_date: "2021".to_string(),
            ..Default::default()
        };
        assert_eq!(experience_block(&entry), "Chef\n2021");
    }
}
