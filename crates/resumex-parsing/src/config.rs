use regex::Regex;
use resumex_core::Section;

use crate::section;

/// Controls how a list of values is overridden from its built-in defaults.
#[derive(Debug, Clone, Default)]
pub enum ListOverride<T> {
    /// Use the built-in defaults.
    #[default]
    Default,
    /// Completely replace the defaults with these values.
    Replace(Vec<T>),
    /// Append these values to the defaults.
    Extend(Vec<T>),
}

impl<T: Clone> ListOverride<T> {
    /// Resolve this override against the given defaults.
    pub fn resolve(&self, defaults: &[T]) -> Vec<T> {
        match self {
            ListOverride::Default => defaults.to_vec(),
            ListOverride::Replace(values) => values.clone(),
            ListOverride::Extend(values) => {
                let mut resolved = defaults.to_vec();
                resolved.extend(values.iter().cloned());
                resolved
            }
        }
    }
}

/// Separator used when joining the kept lines of a section body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionJoiner {
    /// One kept line per output line.
    #[default]
    Newline,
    /// Kept lines joined with `" | "`.
    Pipe,
}

impl SectionJoiner {
    pub(crate) fn separator(&self) -> &'static str {
        match self {
            SectionJoiner::Newline => "\n",
            SectionJoiner::Pipe => " | ",
        }
    }
}

/// An additional header synonym for one section, with its header-shape
/// patterns pre-compiled at build time.
#[derive(Debug, Clone)]
pub(crate) struct ExtraSynonym {
    pub(crate) section: Section,
    pub(crate) keyword: String,
    pub(crate) patterns: Vec<Regex>,
}

/// Configuration for the resume parsing pipeline.
///
/// Use [`ParseConfigBuilder`] to construct; the default covers the built-in
/// synonym tables, a 7-line name scan, and newline-joined section bodies.
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// How many leading lines the name heuristic inspects.
    pub(crate) name_scan_lines: usize,
    /// Separator for kept section lines.
    pub(crate) section_joiner: SectionJoiner,
    /// Boilerplate words that disqualify a name candidate line.
    pub(crate) name_skip_words: ListOverride<String>,
    /// Domain markers that disqualify a website candidate.
    pub(crate) excluded_domains: ListOverride<String>,
    /// Extra header synonyms, tried after the built-ins of their section.
    pub(crate) extra_synonyms: Vec<ExtraSynonym>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            name_scan_lines: 7,
            section_joiner: SectionJoiner::default(),
            name_skip_words: ListOverride::Default,
            excluded_domains: ListOverride::Default,
            extra_synonyms: Vec::new(),
        }
    }
}

impl ParseConfig {
    pub fn name_scan_lines(&self) -> usize {
        self.name_scan_lines
    }

    pub fn section_joiner(&self) -> SectionJoiner {
        self.section_joiner
    }

    pub(crate) fn extra_synonyms_for(
        &self,
        section: Section,
    ) -> impl Iterator<Item = &ExtraSynonym> {
        self.extra_synonyms
            .iter()
            .filter(move |extra| extra.section == section)
    }
}

/// Builder for [`ParseConfig`].
///
/// Extra synonyms are compiled to header patterns in [`build()`](Self::build),
/// which fails fast with `regex::Error` if compilation does.
#[derive(Debug, Clone, Default)]
pub struct ParseConfigBuilder {
    name_scan_lines: Option<usize>,
    section_joiner: Option<SectionJoiner>,
    name_skip_words: ListOverride<String>,
    excluded_domains: ListOverride<String>,
    extra_synonyms: Vec<(Section, String)>,
}

impl ParseConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of leading lines the name heuristic inspects (default 7).
    pub fn name_scan_lines(mut self, lines: usize) -> Self {
        self.name_scan_lines = Some(lines);
        self
    }

    /// Separator for kept section lines (default newline).
    pub fn section_joiner(mut self, joiner: SectionJoiner) -> Self {
        self.section_joiner = Some(joiner);
        self
    }

    /// Append words to the name-candidate skip list.
    pub fn extend_name_skip_words(mut self, words: Vec<String>) -> Self {
        self.name_skip_words = ListOverride::Extend(words);
        self
    }

    /// Replace the name-candidate skip list entirely.
    pub fn replace_name_skip_words(mut self, words: Vec<String>) -> Self {
        self.name_skip_words = ListOverride::Replace(words);
        self
    }

    /// Append markers to the non-personal-domain exclusion list used by
    /// website extraction.
    pub fn extend_excluded_domains(mut self, domains: Vec<String>) -> Self {
        self.excluded_domains = ListOverride::Extend(domains);
        self
    }

    /// Replace the non-personal-domain exclusion list entirely.
    pub fn replace_excluded_domains(mut self, domains: Vec<String>) -> Self {
        self.excluded_domains = ListOverride::Replace(domains);
        self
    }

    /// Accept an additional header synonym for `section`, tried after the
    /// built-in synonyms for that section.
    pub fn add_section_synonym(mut self, section: Section, keyword: impl Into<String>) -> Self {
        self.extra_synonyms.push((section, keyword.into()));
        self
    }

    pub fn build(self) -> Result<ParseConfig, regex::Error> {
        let mut extra_synonyms = Vec::with_capacity(self.extra_synonyms.len());
        for (section, keyword) in self.extra_synonyms {
            let keyword = keyword.to_lowercase();
            let patterns = section::header_patterns(&keyword)?;
            extra_synonyms.push(ExtraSynonym {
                section,
                keyword,
                patterns,
            });
        }

        Ok(ParseConfig {
            name_scan_lines: self.name_scan_lines.unwrap_or(7),
            section_joiner: self.section_joiner.unwrap_or_default(),
            name_skip_words: self.name_skip_words,
            excluded_domains: self.excluded_domains,
            extra_synonyms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_override_default() {
        let defaults = vec!["a".to_string(), "b".to_string()];
        let resolved = ListOverride::<String>::Default.resolve(&defaults);
        assert_eq!(resolved, defaults);
    }

    #[test]
    fn test_list_override_replace() {
        let defaults = vec!["a".to_string()];
        let resolved = ListOverride::Replace(vec!["x".to_string()]).resolve(&defaults);
        assert_eq!(resolved, vec!["x".to_string()]);
    }

    #[test]
    fn test_list_override_extend() {
        let defaults = vec!["a".to_string()];
        let resolved = ListOverride::Extend(vec!["x".to_string()]).resolve(&defaults);
        assert_eq!(resolved, vec!["a".to_string(), "x".to_string()]);
    }

    #[test]
    fn test_builder_defaults() {
        let config = ParseConfigBuilder::new().build().unwrap();
        assert_eq!(config.name_scan_lines(), 7);
        assert_eq!(config.section_joiner(), SectionJoiner::Newline);
        assert!(config.extra_synonyms.is_empty());
    }

    #[test]
    fn test_builder_extra_synonym_lowercased() {
        let config = ParseConfigBuilder::new()
            .add_section_synonym(Section::Skills, "Tech Stack")
            .build()
            .unwrap();
        let extras: Vec<_> = config.extra_synonyms_for(Section::Skills).collect();
        assert_eq!(extras.len(), 1);
        assert_eq!(extras[0].keyword, "tech stack");
        assert_eq!(extras[0].patterns.len(), 4);
    }

    #[test]
    fn test_joiner_separators() {
        assert_eq!(SectionJoiner::Newline.separator(), "\n");
        assert_eq!(SectionJoiner::Pipe.separator(), " | ");
    }
}
