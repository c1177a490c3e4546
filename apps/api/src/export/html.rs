//! HTML preview rendering. Carries the resolved color, font and size inline so the
//! document stands alone.

use std::fmt::Write;

use crate::export::templates::{ResolvedStyle, TemplateId};
use crate::models::resume::{PersonalInfo, ResumeRecord, SectionContent};

pub fn render_html(record: &ResumeRecord, template: TemplateId, style: &ResolvedStyle) -> String {
    let fallback = if style.font.is_serif() { "serif" } else { "sans-serif" };
    let mut body = String::new();

    for section in &record.sections {
        match &section.content {
            SectionContent::Personal(info) => personal(&mut body, info),
            SectionContent::Summary(summary) => {
                if !summary.text.trim().is_empty() {
                    open_section(&mut body, &section.title);
                    let _ = writeln!(body, "<p>{}</p>", escape(summary.text.trim()));
                    body.push_str("</section>\n");
                }
            }
            SectionContent::Experience(entries) => {
                let items: Vec<[&str; 5]> = entries
                    .iter()
                    .map(|e| [&e.title, &e.company, &e.start_date, &e.end_date, &e.description].map(String::as_str))
                    .collect();
                entries_section(&mut body, &section.title, &items);
            }
            SectionContent::Education(entries) => {
                let items: Vec<[&str; 5]> = entries
                    .iter()
                    .map(|e| [&e.degree, &e.institution, &e.start_date, &e.end_date, &e.description].map(String::as_str))
                    .collect();
                entries_section(&mut body, &section.title, &items);
            }
            SectionContent::Skills(skills) => {
                let filled: Vec<&str> = skills
                    .iter()
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .collect();
                if !filled.is_empty() {
                    open_section(&mut body, &section.title);
                    body.push_str("<ul class=\"skills\">");
                    for skill in filled {
                        let _ = write!(body, "<li>{}</li>", escape(skill));
                    }
                    body.push_str("</ul>\n</section>\n");
                }
            }
        }
    }

    format!(
        "<!DOCTYPE html>
<html>
<head>
<meta charset=\"utf-8\">
<title>Resume</title>
<style>
body {{ font-family: '{font}', {fallback}; font-size: {size}pt; }}
h1, h2 {{ color: {color}; }}
.skills li {{ display: inline-block; margin-right: 0.5em; }}
</style>
</head>
<body class=\"template-{template}\">
{body}</body>
</html>
",
        font = style.font.display_name(),
        size = style.font_size.points(),
        color = style.primary_color,
        template = template_class(template),
    )
}

fn template_class(template: TemplateId) -> &'static str {
    match template {
        TemplateId::Professional => "professional",
        TemplateId::Creative => "creative",
        TemplateId::Minimalist => "minimalist",
        TemplateId::Academic => "academic",
        TemplateId::Modern => "modern",
        TemplateId::Executive => "executive",
    }
}

fn personal(out: &mut String, info: &PersonalInfo) {
    out.push_str("<header>\n");
    if !info.name.trim().is_empty() {
        let _ = writeln!(out, "<h1>{}</h1>", escape(info.name.trim()));
    }
    let contact: Vec<String> = [&info.email, &info.phone, &info.location, &info.linkedin]
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(escape)
        .collect();
    if !contact.is_empty() {
        let _ = writeln!(out, "<p class=\"contact\">{}</p>", contact.join(" &bull; "));
    }
    out.push_str("</header>\n");
}

fn open_section(out: &mut String, title: &str) {
    let _ = writeln!(out, "<section>\n<h2>{}</h2>", escape(title));
}

/// `[headline, organisation, start, end, description]` per entry.
fn entries_section(out: &mut String, title: &str, entries: &[[&str; 5]]) {
    let filled: Vec<&[&str; 5]> = entries
        .iter()
        .filter(|fields| fields.iter().any(|f| !f.trim().is_empty()))
        .collect();
    if filled.is_empty() {
        return;
    }

    open_section(out, title);
    for [headline, org, start, end, description] in filled.into_iter().copied() {
        out.push_str("<article>\n");
        let _ = writeln!(out, "<h3>{}</h3>", escape(headline.trim()));
        if !org.trim().is_empty() {
            let _ = writeln!(out, "<p class=\"org\">{}</p>", escape(org.trim()));
        }
        if !start.trim().is_empty() || !end.trim().is_empty() {
            let _ = writeln!(
                out,
                "<p class=\"dates\">{} - {}</p>",
                escape(start.trim()),
                escape(end.trim())
            );
        }
        if !description.trim().is_empty() {
            let _ = writeln!(out, "<p>{}</p>", escape(description.trim()));
        }
        out.push_str("</article>\n");
    }
    out.push_str("</section>\n");
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
