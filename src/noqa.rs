//! Support for `# noqa` comment directives to suppress violations
//!
//! Recognized forms, matching what the original linting hosts accept:
//! - `# noqa` suppresses every violation on the line
//! - `# noqa: NPM100` suppresses the named rule on the line
//! - `# noqa: NPM100,XYZ200` suppresses several rules at once
//!
//! Matching is case-insensitive and trailing prose after the codes is
//! tolerated (`# noqa: NPM100 - legacy API`).

use std::collections::{HashMap, HashSet};

/// What a directive on a given line suppresses.
#[derive(Debug, Clone)]
enum NoqaScope {
    /// Bare `# noqa`
    All,
    /// `# noqa: CODE[,CODE...]`
    Rules(HashSet<String>),
}

/// Per-line suppression directives for one source file.
#[derive(Debug, Clone, Default)]
pub struct NoqaMap {
    by_line: HashMap<usize, NoqaScope>,
}

impl NoqaMap {
    /// Scan a file's source for noqa comments. Line numbers are 1-based.
    pub fn from_source(source: &str) -> Self {
        let mut by_line = HashMap::new();

        for (line_idx, line) in source.lines().enumerate() {
            if let Some(scope) = parse_line(line) {
                by_line.insert(line_idx + 1, scope);
            }
        }

        Self { by_line }
    }

    pub fn is_empty(&self) -> bool {
        self.by_line.is_empty()
    }

    /// Whether a violation of `rule_id` on `line` is suppressed.
    pub fn is_suppressed(&self, line: usize, rule_id: &str) -> bool {
        match self.by_line.get(&line) {
            Some(NoqaScope::All) => true,
            Some(NoqaScope::Rules(rules)) => rules.contains(rule_id),
            None => false,
        }
    }
}

fn parse_line(line: &str) -> Option<NoqaScope> {
    let comment = &line[line.find('#')?..];
    let lowered = comment.to_lowercase();
    let noqa_start = lowered.find("noqa")?;
    let rest = comment.get(noqa_start + 4..)?.trim_start();

    if !rest.starts_with(':') {
        return Some(NoqaScope::All);
    }

    let codes: HashSet<String> = rest[1..]
        .split(',')
        .filter_map(|part| part.split_whitespace().next())
        .map(str::to_string)
        .collect();

    if codes.is_empty() {
        // `# noqa:` with nothing after the colon
        Some(NoqaScope::All)
    } else {
        Some(NoqaScope::Rules(codes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_noqa() {
        let map = NoqaMap::from_source("x = 1\ny = 2  # noqa\n");
        assert!(map.is_suppressed(2, "NPM100"));
        assert!(map.is_suppressed(2, "XYZ200"));
        assert!(!map.is_suppressed(1, "NPM100"));
    }

    #[test]
    fn test_specific_rule() {
        let map = NoqaMap::from_source("    def _move(self):  # noqa: NPM100\n");
        assert!(map.is_suppressed(1, "NPM100"));
        assert!(!map.is_suppressed(1, "XYZ200"));
    }

    #[test]
    fn test_multiple_rules() {
        let map = NoqaMap::from_source("x = 1  # noqa: NPM100, XYZ200,ABC300\n");
        assert!(map.is_suppressed(1, "NPM100"));
        assert!(map.is_suppressed(1, "XYZ200"));
        assert!(map.is_suppressed(1, "ABC300"));
        assert!(!map.is_suppressed(1, "DEF400"));
    }

    #[test]
    fn test_case_insensitive_marker() {
        let map = NoqaMap::from_source("x = 1  # NOQA\ny = 2  # NoQa: NPM100\n");
        assert!(map.is_suppressed(1, "NPM100"));
        assert!(map.is_suppressed(2, "NPM100"));
    }

    #[test]
    fn test_trailing_text_after_codes() {
        let map = NoqaMap::from_source("x = 1  # noqa: NPM100 - kept for compatibility\n");
        assert!(map.is_suppressed(1, "NPM100"));
        assert!(!map.is_suppressed(1, "-"));
    }

    #[test]
    fn test_empty_code_list_suppresses_all() {
        let map = NoqaMap::from_source("x = 1  # noqa:\n");
        assert!(map.is_suppressed(1, "NPM100"));
    }

    #[test]
    fn test_plain_comment_ignored() {
        let map = NoqaMap::from_source("x = 1  # regular comment\n");
        assert!(map.is_empty());
        assert!(!map.is_suppressed(1, "NPM100"));
    }
}
