//! Layered exclusion: explicit literal names plus compiled ignore patterns.

use crate::pattern::Pattern;

/// Holds the explicit exclude list and the compiled ignore patterns.
///
/// Built once at startup and read-only afterwards. Either check alone is
/// sufficient to exclude an entry.
#[derive(Debug, Default)]
pub struct ExclusionSet {
    literals: Vec<String>,
    patterns: Vec<Pattern>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a literal file or directory name, or a full relative path.
    pub fn add_literal(&mut self, name: impl Into<String>) {
        self.literals.push(name.into());
    }

    /// Add a compiled ignore pattern.
    pub fn add_pattern(&mut self, pattern: Pattern) {
        self.patterns.push(pattern);
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty() && self.patterns.is_empty()
    }

    /// Whether `relative_path` is excluded. The path is relative to the scan
    /// root; both `/` and `\` are accepted as separators.
    pub fn is_excluded(&self, relative_path: &str, is_dir: bool) -> bool {
        self.matches_literal(relative_path) || self.matches_pattern(relative_path, is_dir)
    }

    /// A literal excludes the entry if any path segment equals it,
    /// case-insensitively. Literals containing a separator are compared
    /// against the whole relative path instead.
    fn matches_literal(&self, relative_path: &str) -> bool {
        let normalized = relative_path.replace('\\', "/");
        self.literals.iter().any(|lit| {
            if lit.contains('/') || lit.contains('\\') {
                let lit_normalized = lit.replace('\\', "/");
                normalized.eq_ignore_ascii_case(&lit_normalized)
            } else {
                normalized
                    .split('/')
                    .any(|segment| segment.eq_ignore_ascii_case(lit))
            }
        })
    }

    fn matches_pattern(&self, relative_path: &str, is_dir: bool) -> bool {
        let normalized = relative_path.replace('\\', "/");
        self.patterns.iter().any(|p| p.matches(&normalized, is_dir))
    }
}
