use crate::models::resume::SkillsSection;

/// Parses `Category: item1, item2, ...` lines into a skills table.
///
/// The split is on the first colon only, so items themselves may contain
/// colons. Lines without a colon are skipped, not an error. A repeated
/// category overwrites the earlier entry (last write wins). Items are
/// trimmed and empty items dropped; a line with an empty category name
/// contributes nothing.
pub fn parse_skills(section_text: &str) -> SkillsSection {
    let mut skills = SkillsSection::default();

    for line in section_text.split(['\r', '\n']) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let Some((category, rest)) = trimmed.split_once(':') else {
            continue;
        };
        let category = category.trim();
        if category.is_empty() {
            continue;
        }

        let items: Vec<String> = rest
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();
        skills.categories.insert(category.to_string(), items);
    }

    skills
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_categories() {
        let skills = parse_skills("A: x, y\nB: z");
        assert_eq!(skills.categories["A"], vec!["x", "y"]);
        assert_eq!(skills.categories["B"], vec!["z"]);
    }

    #[test]
    fn test_line_without_colon_is_skipped() {
        let skills = parse_skills("Languages: Rust\njust some prose\nTools: cargo");
        assert_eq!(skills.categories.len(), 2);
        assert!(!skills.categories.contains_key("just some prose"));
    }

    #[test]
    fn test_duplicate_category_last_write_wins() {
        let skills = parse_skills("A: x\nA: y");
        assert_eq!(skills.categories["A"], vec!["y"]);
    }

    #[test]
    fn test_split_on_first_colon_only() {
        let skills = parse_skills("Links: https://example.com, mailto:me");
        assert_eq!(
            skills.categories["Links"],
            vec!["https://example.com", "mailto:me"]
        );
    }

    #[test]
    fn test_items_trimmed_and_empties_dropped() {
        let skills = parse_skills("Tools:  cargo ,, clippy , ");
        assert_eq!(skills.categories["Tools"], vec!["cargo", "clippy"]);
    }

    #[test]
    fn test_category_with_no_items_kept_empty() {
        let skills = parse_skills("Pending:");
        assert_eq!(skills.categories["Pending"], Vec::<String>::new());
    }

    #[test]
    fn test_empty_category_name_skipped() {
        let skills = parse_skills(": orphaned, items");
        assert!(skills.categories.is_empty());
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let skills = parse_skills("A: x\r\n\r\nB: y\r\n");
        assert_eq!(skills.categories.len(), 2);
        assert_eq!(skills.categories["B"], vec!["y"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_skills("").categories.is_empty());
    }
}
