//! Gitignore-style ignore patterns compiled to path predicates.

use regex::{Regex, RegexBuilder};
use std::path::Path;

/// One compiled ignore pattern.
///
/// Patterns match against paths relative to the scan root, with `/`
/// separators, case-insensitively. A trailing `/` restricts the pattern to
/// directories. A lone `**` segment spans any number of path levels. There is
/// no negation: a leading `!` is treated as a literal character.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    regex: Regex,
    dir_only: bool,
}

impl Pattern {
    /// Compile a single pattern line.
    pub fn compile(text: &str) -> Result<Self, regex::Error> {
        let dir_only = text.ends_with('/');
        let body = text.trim_end_matches('/').trim_start_matches('/');

        let mut re = String::new();
        let segments: Vec<&str> = body.split('/').collect();
        for (i, segment) in segments.iter().enumerate() {
            let last = i + 1 == segments.len();
            if *segment == "**" {
                // Zero or more whole path segments.
                if last {
                    re.push_str(".*");
                } else {
                    re.push_str("(?:.*/)?");
                }
            } else {
                re.push_str(&translate_segment(segment));
                if !last {
                    re.push('/');
                }
            }
        }

        // A pattern without a trailing slash also matches everything below
        // the path it names.
        let anchored = if dir_only {
            format!("^{re}$")
        } else {
            format!("^{re}(?:/.*)?$")
        };

        let regex = RegexBuilder::new(&anchored)
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            raw: text.to_string(),
            regex,
            dir_only,
        })
    }

    /// Match against a `/`-separated path relative to the root.
    pub fn matches(&self, relative_path: &str, is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            return false;
        }
        self.regex.is_match(relative_path)
    }

    /// The original pattern text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// Translate one pattern segment to regex: `*` spans any run of
/// non-separator characters, `?` exactly one, everything else is literal.
fn translate_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 8);
    for c in segment.chars() {
        match c {
            '*' => out.push_str("[^/]*"),
            '?' => out.push_str("[^/]"),
            c => out.push_str(&regex::escape(&c.to_string())),
        }
    }
    out
}

/// Load patterns from a project-local ignore file.
///
/// Blank lines and `#` comments are skipped; remaining lines compile in file
/// order. Invalid patterns are skipped and reported to stderr. A missing or
/// unreadable file yields no patterns.
pub fn load_ignore_file(path: &Path) -> Vec<Pattern> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };

    let mut patterns = Vec::new();
    let mut invalid = Vec::new();
    for line in content.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match Pattern::compile(line) {
            Ok(p) => patterns.push(p),
            Err(_) => invalid.push(line.to_string()),
        }
    }
    if !invalid.is_empty() {
        eprintln!("treepress: invalid ignore pattern(s), skipped: {invalid:?}");
    }
    patterns
}
