//! Per-site disablement check.

use regex::Regex;
use tracing::{debug, warn};

/// Compiled disabled-site patterns.
///
/// Patterns that fail to compile never match, so a bad entry can only
/// leave Navel enabled, never disable it by accident.
pub struct SiteFilter {
    patterns: Vec<(String, Result<Regex, regex::Error>)>,
}

impl SiteFilter {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let patterns = patterns
            .iter()
            .map(|p| {
                let source = p.as_ref().to_string();
                let compiled = Regex::new(&source);
                if let Err(ref e) = compiled {
                    warn!(pattern = %source, error = %e, "Ignoring invalid disabled-site pattern");
                }
                (source, compiled)
            })
            .collect();

        Self { patterns }
    }

    /// Whether any pattern matches somewhere in `url`.
    pub fn is_disabled(&self, url: &str) -> bool {
        self.patterns.iter().any(|(source, compiled)| match compiled {
            Ok(re) => {
                debug!(pattern = %source, "Checking if current site matches");
                re.is_match(url)
            }
            Err(_) => false,
        })
    }

    /// Patterns that failed to compile, with the reason.
    pub fn invalid_patterns(&self) -> impl Iterator<Item = (&str, &regex::Error)> {
        self.patterns
            .iter()
            .filter_map(|(source, compiled)| compiled.as_ref().err().map(|e| (source.as_str(), e)))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
