/// Splits a list section (education, projects) into trimmed items.
///
/// A leading `-` or `–` bullet is optional and stripped along with
/// surrounding whitespace. Blank results are dropped; order is preserved.
pub fn parse_list_section(section_text: &str) -> Vec<String> {
    section_text
        .split(['\r', '\n'])
        .map(strip_bullet)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strips a leading bullet run (`-`, `–`, spaces) and trims the remainder.
pub(crate) fn strip_bullet(line: &str) -> &str {
    line.trim().trim_start_matches(['-', '–', ' ']).trim()
}
