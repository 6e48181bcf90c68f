use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ParseConfig;

/// Boilerplate words that disqualify a line as a name candidate.
pub(crate) const DEFAULT_SKIP_WORDS: [&str; 8] = [
    "resume",
    "cv",
    "curriculum",
    "vitae",
    "profile",
    "contact",
    "email",
    "phone",
];

static DIGIT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{3,}").unwrap());

/// Pick the candidate name line from the first few lines of the document.
///
/// A line is rejected when it is blank, contains a boilerplate word,
/// contains `@`, or contains a run of 3+ digits. The first remaining line
/// with 2-4 whitespace-separated tokens, each alphabetic once hyphens,
/// apostrophes, and periods are ignored, wins. No qualifying line yields
/// an empty string.
///
/// Best-effort: unconventional layouts (two-line addresses, headline-first
/// resumes) defeat it, and that imprecision is part of the contract.
pub fn extract_name(text: &str, config: &ParseConfig) -> String {
    let defaults: Vec<String> = DEFAULT_SKIP_WORDS.iter().map(|w| w.to_string()).collect();
    let skip_words = config.name_skip_words.resolve(&defaults);

    for line in text.split('\n').take(config.name_scan_lines()) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let lower = line.to_lowercase();
        if skip_words.iter().any(|word| lower.contains(word.as_str())) {
            continue;
        }

        if line.contains('@') || DIGIT_RUN_RE.is_match(line) {
            continue;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        if (2..=4).contains(&words.len()) && words.iter().all(|w| is_name_token(w)) {
            return line.to_string();
        }
    }

    String::new()
}

fn is_name_token(word: &str) -> bool {
    let stripped: String = word
        .chars()
        .filter(|c| !matches!(c, '-' | '\'' | '.'))
        .collect();
    !stripped.is_empty() && stripped.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseConfigBuilder;

    fn config() -> ParseConfig {
        ParseConfigBuilder::new().build().unwrap()
    }

    #[test]
    fn test_first_plain_line_wins() {
        assert_eq!(extract_name("John Smith\nSomething else\n", &config()), "John Smith");
    }

    #[test]
    fn test_boilerplate_line_skipped() {
        let text = "Curriculum Vitae\nJane Q. Public\n";
        assert_eq!(extract_name(text, &config()), "Jane Q. Public");
    }

    #[test]
    fn test_email_line_never_a_name() {
        let text = "jane@example.com\nJane Doe\n";
        assert_eq!(extract_name(text, &config()), "Jane Doe");
    }

    #[test]
    fn test_digit_run_rejected() {
        let text = "555 Oak Street 94000\nJane Doe\n";
        assert_eq!(extract_name(text, &config()), "Jane Doe");
    }

    #[test]
    fn test_single_token_rejected() {
        assert_eq!(extract_name("Jane\n\n\n\n\n\n\n", &config()), "");
    }

    #[test]
    fn test_five_tokens_rejected() {
        assert_eq!(
            extract_name("Senior Staff Platform Reliability Engineer\n", &config()),
            "",
        );
    }

    #[test]
    fn test_hyphen_and_apostrophe_tokens_accepted() {
        assert_eq!(
            extract_name("Mary-Jane O'Brien\nrest\n", &config()),
            "Mary-Jane O'Brien",
        );
    }

    #[test]
    fn test_no_candidate_is_empty() {
        let text = "Resume\ncontact: jane@x.io\n+1 555 123 4567\n";
        assert_eq!(extract_name(text, &config()), "");
    }

    #[test]
    fn test_scan_depth_limits_search() {
        let text = "\n\n\n\n\n\n\nJane Doe\n";
        assert_eq!(extract_name(text, &config()), "");

        let deep = ParseConfigBuilder::new().name_scan_lines(10).build().unwrap();
        assert_eq!(extract_name(text, &deep), "Jane Doe");
    }

    #[test]
    fn test_custom_skip_word() {
        let cfg = ParseConfigBuilder::new()
            .extend_name_skip_words(vec!["portfolio".to_string()])
            .build()
            .unwrap();
        let text = "Portfolio Overview\nJane Doe\n";
        assert_eq!(extract_name(text, &cfg), "Jane Doe");
        // Without the extra word, the portfolio line itself qualifies
        assert_eq!(extract_name(text, &config()), "Portfolio Overview");
    }
}
