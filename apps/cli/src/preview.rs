use std::fmt::Write;

use crate::models::resume::ParsedResume;

/// Renders a parsed résumé as plain preview text.
///
/// Layout mirrors the editor pane: summary only when present, skills and
/// experience headings always, education and projects only when non-empty.
/// Output is deterministic for a given input.
pub fn render_preview(resume: &ParsedResume) -> String {
    let mut out = String::new();

    if !resume.summary.is_empty() {
        let _ = writeln!(out, "Summary: {}\n", resume.summary);
    }

    out.push_str("Skills:\n");
    for (category, items) in &resume.skills.categories {
        let _ = writeln!(out, "{category}: {}", items.join(", "));
    }
    out.push('\n');

    out.push_str("Experience:\n");
    for entry in &resume.experience {
        let _ = writeln!(out, "{} at {} ({})", entry.role, entry.company, entry.dates);
        for achievement in &entry.achievements {
            let _ = writeln!(out, " - {achievement}");
        }
    }
    out.push('\n');

    if !resume.education.is_empty() {
        out.push_str("Education:\n");
        for item in &resume.education {
            let _ = writeln!(out, " - {item}");
        }
        out.push('\n');
    }

    if !resume.projects.is_empty() {
        out.push_str("Projects:\n");
        for item in &resume.projects {
            let _ = writeln!(out, " - {item}");
        }
    }

    out
}
