use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Structured résumé content recovered from tag-markup text.
///
/// Built fresh by each parse call and never mutated afterwards. Every field
/// defaults to empty: a document with no recognizable sections parses to
/// `ParsedResume::default()`, not to an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub summary: String,
    pub skills: SkillsSection,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<String>,
    pub projects: Vec<String>,
}

impl ParsedResume {
    /// True when no section produced any content. Parsing never fails, so
    /// this is the signal callers check to flag "nothing was parsed".
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
            && self.skills.categories.is_empty()
            && self.experience.is_empty()
            && self.education.is_empty()
            && self.projects.is_empty()
    }
}

/// Skill items grouped by category name.
///
/// A repeated category keeps only its last occurrence. Category names and
/// items are never empty strings. The sorted map keeps preview and JSON
/// output deterministic; item order within a category is preserved as
/// written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsSection {
    pub categories: BTreeMap<String, Vec<String>>,
}

/// A single job record. `dates` is free-form date-range text, not parsed
/// further. An entry with zero achievements is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub dates: String,
    pub achievements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resume_is_empty() {
        assert!(ParsedResume::default().is_empty());
    }

    #[test]
    fn test_any_section_makes_resume_non_empty() {
        let resume = ParsedResume {
            education: vec!["BSc".to_string()],
            ..Default::default()
        };
        assert!(!resume.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let mut skills = SkillsSection::default();
        skills
            .categories
            .insert("Languages".to_string(), vec!["Rust".to_string()]);
        let resume = ParsedResume {
            summary: "Engineer.".to_string(),
            skills,
            experience: vec![ExperienceEntry {
                role: "Senior Engineer".to_string(),
                company: "Acme".to_string(),
                dates: "2021 - Present".to_string(),
                achievements: vec!["Shipped X".to_string()],
            }],
            education: vec!["BSc Computer Science".to_string()],
            projects: vec![],
        };

        let json = serde_json::to_string(&resume).unwrap();
        let back: ParsedResume = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resume);
    }
}
