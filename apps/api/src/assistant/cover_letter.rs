//! Cover letter templates, one per tone.

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;
use crate::models::suggestion::{CoverLetter, Tone};

const FALLBACK_NAME: &str = "Applicant Name";
const POSITION: &str = "the open position";
const COMPANY: &str = "your company";
const KEYWORDS: &[&str] = &["experience", "skills", "qualified", "opportunity"];

/// The slice of a resume a cover letter is written from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverLetterProfile {
    #[serde(default)]
    pub name: Option<String>,
}

impl CoverLetterProfile {
    pub fn from_record(record: &ResumeRecord) -> Self {
        Self {
            name: record.personal_info().map(|info| info.name.clone()),
        }
    }

    fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => FALLBACK_NAME,
        }
    }
}

pub fn write_cover_letter(profile: &CoverLetterProfile, tone: Tone) -> CoverLetter {
    let name = profile.display_name();
    let text = match tone {
        Tone::Conversational => conversational(name),
        Tone::Enthusiastic => enthusiastic(name),
        Tone::Professional => professional(name),
    };

    CoverLetter {
        cover_letter: text,
        tone,
        keywords: KEYWORDS.iter().map(|k| k.to_string()).collect(),
    }
}

fn conversational(name: &str) -> String {
    format!(
        "Hi there,

I'm {name}, and I'm really excited about {POSITION} at {COMPANY}. When I saw the job posting, I immediately knew it was a perfect match for my skills and experience.

Throughout my career, I've developed expertise in [relevant skills from resume], which align perfectly with what you're looking for. I'm particularly proud of [achievement from resume], which demonstrates my ability to deliver results.

I'm excited about the opportunity to bring my unique perspective to {COMPANY} and contribute to your team's success. I'd love to chat more about how my background and skills would be a great fit for this role.

Looking forward to hearing from you!

Best regards,
{name}"
    )
}

fn enthusiastic(name: &str) -> String {
    format!(
        "Dear Hiring Manager,

I am THRILLED to apply for {POSITION} at {COMPANY}! This opportunity combines my passion for [industry/field] with my extensive experience in [relevant skills].

Your company's mission to [company goal/value] resonates deeply with me, and I'm EXCITED about the possibility of contributing to such important work. My background in [relevant experience] has prepared me perfectly for this role.

In my previous position at [previous company], I successfully [major achievement], which increased [relevant metric] by [percentage]. I'm confident I can bring this same level of ENTHUSIASM and RESULTS to {COMPANY}.

I would be DELIGHTED to discuss how my unique combination of skills and passion makes me the IDEAL candidate for this position. Thank you for considering my application!

With great enthusiasm,
{name}"
    )
}

fn professional(name: &str) -> String {
    format!(
        "Dear Hiring Manager,

I am writing to express my interest in {POSITION} at {COMPANY}, as advertised. With my background in [relevant field] and expertise in [relevant skills], I am confident in my ability to make a valuable contribution to your team.

Throughout my professional career, I have developed a strong skill set in [key skills from resume], which align well with the requirements outlined in your job description. In my previous role at [previous company], I successfully [key achievement], resulting in [positive outcome].

I am particularly drawn to {COMPANY} because of [company value/mission/project]. Your commitment to [company focus] resonates with my professional values, and I am eager to be part of an organization that prioritizes these principles.

Thank you for considering my application. I welcome the opportunity to discuss how my experience and skills would benefit {COMPANY}. I look forward to the possibility of contributing to your team.

Sincerely,
{name}"
    )
}
