use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ParseConfig;

/// Contact fields pulled from the full document text.
///
/// Fields are extracted independently of one another; a field with no
/// match is the empty string, which is not an error condition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
}

/// Domain markers that disqualify a website candidate (webmail providers
/// and code/profile hosts already covered by their own fields).
pub(crate) const DEFAULT_EXCLUDED_DOMAINS: [&str; 5] =
    ["gmail", "yahoo", "outlook", "linkedin", "github"];

/// Run all contact extractors over the document text.
pub fn extract_contact(text: &str, config: &ParseConfig) -> ContactInfo {
    ContactInfo {
        email: extract_email(text),
        phone: extract_phone(text),
        linkedin: extract_linkedin(text),
        github: extract_github(text),
        website: extract_website(text, config),
    }
}

/// First substring with a standard `local@domain.tld` shape, or empty.
pub fn extract_email(text: &str) -> String {
    static RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
    });
    RE.find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Phone patterns in fixed priority order:
/// 1. North-American grouped digits, optional +1 and punctuation
/// 2. International grouped digits
/// 3. Ten bare digits
/// 4. Loosely spaced international (kept verbatim, no grouping)
static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\+?1?[-.\s]?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})").unwrap(),
        Regex::new(r"\+?([0-9]{1,3})[-.\s]?([0-9]{3,4})[-.\s]?([0-9]{3,4})[-.\s]?([0-9]{3,4})")
            .unwrap(),
        Regex::new(r"(\d{10})").unwrap(),
        Regex::new(r"\+\d{1,3}\s?\d{3,4}\s?\d{3,4}\s?\d{3,4}").unwrap(),
    ]
});

/// First phone-shaped match in the text.
///
/// The first pattern that matches anywhere wins. Grouped patterns yield
/// their capture groups concatenated with no separator (so
/// `"(555) 123-4567"` becomes `"5551234567"`); the groupless pattern
/// yields its whole match.
pub fn extract_phone(text: &str) -> String {
    for re in PHONE_PATTERNS.iter() {
        if let Some(caps) = re.captures(text) {
            if caps.len() > 1 {
                return caps
                    .iter()
                    .skip(1)
                    .flatten()
                    .map(|m| m.as_str())
                    .collect();
            }
            return caps.get(0).unwrap().as_str().to_string();
        }
    }
    String::new()
}

/// Canonical `linkedin.com/in/<handle>` reconstructed from a profile URL
/// path segment (`/in/` or the legacy `/pub/`), case-insensitively.
pub fn extract_linkedin(text: &str) -> String {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)linkedin\.com/(?:in|pub)/([A-Za-z0-9.\-]+)").unwrap());
    match RE.captures(text) {
        Some(caps) => format!("linkedin.com/in/{}", caps.get(1).unwrap().as_str()),
        None => String::new(),
    }
}

/// Canonical `github.com/<handle>` from a profile URL, case-insensitively.
pub fn extract_github(text: &str) -> String {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)github\.com/([A-Za-z0-9.\-]+)").unwrap());
    match RE.captures(text) {
        Some(caps) => format!("github.com/{}", caps.get(1).unwrap().as_str()),
        None => String::new(),
    }
}

/// First generic domain-like token whose text matches none of the excluded
/// non-personal domain markers.
pub fn extract_website(text: &str, config: &ParseConfig) -> String {
    static RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?:https?://)?(?:www\.)?([A-Za-z0-9.\-]+\.[A-Za-z]{2,})").unwrap()
    });

    let defaults: Vec<String> = DEFAULT_EXCLUDED_DOMAINS
        .iter()
        .map(|d| d.to_string())
        .collect();
    let excluded = config.excluded_domains.resolve(&defaults);

    for caps in RE.captures_iter(text) {
        let candidate = caps.get(1).unwrap().as_str();
        let lower = candidate.to_lowercase();
        if excluded.iter().any(|domain| lower.contains(domain.as_str())) {
            continue;
        }
        return candidate.to_string();
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseConfigBuilder;

    #[test]
    fn test_email_basic() {
        assert_eq!(
            extract_email("Contact: jane.doe@example.com or by phone"),
            "jane.doe@example.com",
        );
    }

    #[test]
    fn test_email_first_match_wins() {
        assert_eq!(
            extract_email("a@one.org then b@two.org"),
            "a@one.org",
        );
    }

    #[test]
    fn test_email_none() {
        assert_eq!(extract_email("no address here"), "");
    }

    #[test]
    fn test_phone_north_american_parenthesized() {
        assert_eq!(extract_phone("Call (555) 123-4567 today"), "5551234567");
    }

    #[test]
    fn test_phone_north_american_dashed_with_country_code() {
        assert_eq!(extract_phone("+1-555-987-6543"), "5559876543");
    }

    #[test]
    fn test_phone_bare_ten_digits() {
        assert_eq!(extract_phone("reach me at 5551234567"), "5551234567");
    }

    #[test]
    fn test_phone_dotted() {
        assert_eq!(extract_phone("555.123.4567"), "5551234567");
    }

    #[test]
    fn test_phone_none() {
        assert_eq!(extract_phone("no digits of note"), "");
    }

    #[test]
    fn test_linkedin_in_path() {
        assert_eq!(
            extract_linkedin("profile at linkedin.com/in/janedoe and more"),
            "linkedin.com/in/janedoe",
        );
    }

    #[test]
    fn test_linkedin_pub_path_canonicalized() {
        assert_eq!(
            extract_linkedin("https://www.linkedin.com/pub/jdoe"),
            "linkedin.com/in/jdoe",
        );
    }

    #[test]
    fn test_linkedin_case_insensitive() {
        assert_eq!(
            extract_linkedin("LinkedIn.com/IN/JaneDoe"),
            "linkedin.com/in/JaneDoe",
        );
    }

    #[test]
    fn test_linkedin_none() {
        assert_eq!(extract_linkedin("no profile"), "");
    }

    #[test]
    fn test_github_basic() {
        assert_eq!(
            extract_github("code at github.com/janedoe"),
            "github.com/janedoe",
        );
    }

    #[test]
    fn test_github_none() {
        assert_eq!(extract_github("nothing hosted"), "");
    }

    #[test]
    fn test_website_skips_webmail_and_profile_hosts() {
        let config = ParseConfigBuilder::new().build().unwrap();
        let text = "jane@gmail.com | github.com/janedoe | www.janedoe.dev";
        assert_eq!(extract_website(text, &config), "janedoe.dev");
    }

    #[test]
    fn test_website_none_after_filtering() {
        let config = ParseConfigBuilder::new().build().unwrap();
        assert_eq!(extract_website("only jane@gmail.com here", &config), "");
    }

    #[test]
    fn test_website_accepts_dotted_email_local_part() {
        // A dotted e-mail local part is itself a domain-like token and the
        // heuristic accepts it; known imprecision, kept as-is.
        let config = ParseConfigBuilder::new().build().unwrap();
        assert_eq!(extract_website("jane.doe@gmail.com", &config), "jane.doe");
    }

    #[test]
    fn test_website_custom_exclusion() {
        let config = ParseConfigBuilder::new()
            .extend_excluded_domains(vec!["janedoe".to_string()])
            .build()
            .unwrap();
        assert_eq!(extract_website("www.janedoe.dev", &config), "");
    }

    #[test]
    fn test_extract_contact_fields_are_independent() {
        let config = ParseConfigBuilder::new().build().unwrap();
        let text = "Jane Doe\njane@gmail.com\n(555) 123-4567\nlinkedin.com/in/janedoe\ngithub.com/janedoe\nwww.janedoe.dev\n";
        let contact = extract_contact(text, &config);
        assert_eq!(contact.email, "jane@gmail.com");
        assert_eq!(contact.phone, "5551234567");
        assert_eq!(contact.linkedin, "linkedin.com/in/janedoe");
        assert_eq!(contact.github, "github.com/janedoe");
        assert_eq!(contact.website, "janedoe.dev");
    }
}
