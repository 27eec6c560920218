//! Skill list parsing.

use std::collections::HashSet;

/// Splits a comma-separated skill list.
///
/// Tokens are trimmed, empty tokens are dropped and duplicates are removed
/// while keeping the first-seen order. `None` and blank input yield an empty
/// list.
///
/// ```
/// use a2a_bridge::agent_registry::domain::parse_skill_list;
///
/// assert_eq!(parse_skill_list(Some("a, b ,b,")), vec!["a", "b"]);
/// assert!(parse_skill_list(None).is_empty());
/// ```
#[must_use]
pub fn parse_skill_list(csv: Option<&str>) -> Vec<String> {
    let Some(raw) = csv else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter(|token| seen.insert(*token))
        .map(str::to_owned)
        .collect()
}
