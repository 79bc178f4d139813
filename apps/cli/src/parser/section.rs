use regex::RegexBuilder;

/// Returns the body between `{tag}` and `{:tag}`, trimmed, or an empty
/// string when no such pair exists.
///
/// Tag matching is case-insensitive and tolerates whitespace inside the
/// braces; the body may span lines. Only the first pair is used, and the
/// match is non-greedy, so it stops at the first closing marker. Absence is
/// a valid, common case, not an error.
pub fn extract_section(text: &str, tag: &str) -> String {
    let tag = regex::escape(tag);
    let pattern = format!(r"\{{\s*{tag}\s*\}}(.*?)\{{\s*:{tag}\s*\}}");
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .expect("escaped tag yields a valid pattern");

    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|body| body.as_str().trim().to_string())
        .unwrap_or_default()
}
