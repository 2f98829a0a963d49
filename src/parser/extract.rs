//! Tolerant tag-extraction primitives shared by every evaluation parser.
//!
//! Model output is generative prose that merely promises a tag vocabulary,
//! so nothing here returns an error: missing structure degrades to empty
//! strings and zero scores.

use regex::Regex;

use super::types::RubricScore;

/// A self-contained `<tag ...>...</tag>` block with its optional `name`
/// attribute. `body` keeps the full block text so inner tags can be
/// extracted from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBlock {
    pub name: Option<String>,
    pub body: String,
}

/// Returns the first `<tag>...</tag>` body, trimmed, or an empty string.
///
/// Matching is case-sensitive, non-greedy, and spans newlines. Only the
/// first occurrence is used; repeated tags go through [`extract_blocks`].
pub fn extract_content(text: &str, tag: &str) -> String {
    let Ok(re) = Regex::new(&format!(r"(?s)<{tag}>(.*?)</{tag}>")) else {
        return String::new();
    };
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Extracts the `<score>` body and returns the first run of digits in it.
///
/// Absent or non-numeric content yields 0. Values outside the nominal 0-100
/// range pass through untouched; clamping is a presentation concern.
pub fn extract_score(text: &str) -> u32 {
    let content = extract_content(text, "score");
    let Ok(re) = Regex::new(r"\d+") else {
        return 0;
    };
    re.find(&content)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Collects every self-contained `<tag ...>...</tag>` block in order of
/// appearance. Blocks without a `name` attribute are kept, not dropped.
pub fn extract_blocks(text: &str, tag: &str) -> Vec<TagBlock> {
    let Ok(re) = Regex::new(&format!(r"(?s)<{tag}[^>]*>.*?</{tag}>")) else {
        return Vec::new();
    };
    let Ok(name_re) = Regex::new(r#"name="([^"]+)""#) else {
        return Vec::new();
    };
    re.find_iter(text)
        .map(|m| {
            let block = m.as_str();
            TagBlock {
                name: name_re.captures(block).map(|caps| caps[1].to_string()),
                body: block.to_string(),
            }
        })
        .collect()
}

/// Splits bullet or numbered lines ("- item", "3. item") into items,
/// stripping the markers and dropping empty lines.
pub fn extract_list(text: &str) -> Vec<String> {
    let Ok(re) = Regex::new(r"^(-\s*|\d+\.\s*)") else {
        return Vec::new();
    };
    text.lines()
        .map(|line| re.replace(line.trim(), "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Builds the `{analysis, score}` leaf every rubric shares.
pub(super) fn rubric(section: &str) -> RubricScore {
    RubricScore {
        analysis: extract_content(section, "analysis"),
        score: extract_score(section),
    }
}
