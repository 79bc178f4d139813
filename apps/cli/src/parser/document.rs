use crate::models::resume::ParsedResume;
use crate::parser::experience::parse_experience;
use crate::parser::lists::parse_list_section;
use crate::parser::section::extract_section;
use crate::parser::skills::parse_skills;

/// Assembles a full résumé from tag-markup text.
///
/// Extracts each known section once and routes its body to the matching
/// parser; the summary body is used verbatim after trimming. Pure: the same
/// input always yields the same output, and a document with none of the
/// tags yields `ParsedResume::default()`.
pub fn parse_resume(text: &str) -> ParsedResume {
    ParsedResume {
        summary: extract_section(text, "summary"),
        skills: parse_skills(&extract_section(text, "skills")),
        experience: parse_experience(&extract_section(text, "experience")),
        education: parse_list_section(&extract_section(text, "education")),
        projects: parse_list_section(&extract_section(text, "projects")),
    }
}
