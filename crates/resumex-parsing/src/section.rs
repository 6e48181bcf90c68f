use once_cell::sync::Lazy;
use regex::Regex;
use resumex_core::Section;

use crate::config::ParseConfig;

/// Header synonyms accepted for each section, in priority order.
///
/// Table order is also the locator's iteration order.
pub(crate) static SECTION_SYNONYMS: Lazy<Vec<(Section, Vec<&'static str>)>> = Lazy::new(|| {
    vec![
        (
            Section::Summary,
            vec![
                "summary",
                "profile",
                "objective",
                "about me",
                "professional summary",
                "career objective",
            ],
        ),
        (
            Section::Experience,
            vec![
                "experience",
                "work experience",
                "employment history",
                "professional experience",
                "work history",
                "career history",
            ],
        ),
        (
            Section::Education,
            vec![
                "education",
                "academic background",
                "qualifications",
                "academic qualifications",
                "educational background",
            ],
        ),
        (
            Section::Skills,
            vec![
                "skills",
                "technical skills",
                "core competencies",
                "key skills",
                "technologies",
                "expertise",
            ],
        ),
        (
            Section::Projects,
            vec![
                "projects",
                "key projects",
                "project experience",
                "notable projects",
                "personal projects",
            ],
        ),
        (
            Section::Certifications,
            vec![
                "certifications",
                "certificates",
                "professional certifications",
                "licenses",
                "credentials",
            ],
        ),
        (
            Section::Achievements,
            vec![
                "achievements",
                "awards",
                "honors",
                "accomplishments",
                "recognition",
            ],
        ),
        (
            Section::Languages,
            vec!["languages", "language skills", "linguistic skills"],
        ),
        (
            Section::Interests,
            vec!["interests", "hobbies", "personal interests", "activities"],
        ),
        (Section::References, vec!["references", "referees"]),
    ]
});

/// Compile the four header shapes tried for a synonym, in match order:
/// after a line break with a colon, after a line break alone, at
/// start-of-text with a colon, at start-of-text alone.
pub(crate) fn header_patterns(keyword: &str) -> Result<Vec<Regex>, regex::Error> {
    let kw = regex::escape(keyword);
    Ok(vec![
        Regex::new(&format!(r"\n\s*{kw}\s*:"))?,
        Regex::new(&format!(r"\n\s*{kw}\s*\n"))?,
        Regex::new(&format!(r"^{kw}\s*:"))?,
        Regex::new(&format!(r"^{kw}\s*\n"))?,
    ])
}

struct SectionPatterns {
    section: Section,
    /// One entry per synonym, in synonym priority order.
    synonyms: Vec<Vec<Regex>>,
}

static HEADER_PATTERNS: Lazy<Vec<SectionPatterns>> = Lazy::new(|| {
    SECTION_SYNONYMS
        .iter()
        .map(|(section, keywords)| SectionPatterns {
            section: *section,
            synonyms: keywords
                .iter()
                .map(|kw| header_patterns(kw).unwrap())
                .collect(),
        })
        .collect()
});

/// Byte offsets (into the lowercased text) where each located section's
/// header match begins. Built once per document and discarded after
/// slicing. Sections with no matching header are absent.
pub type SectionBoundaries = Vec<(Section, usize)>;

/// Locate section header offsets in the lowercased document text.
///
/// For each section, synonyms are tried in table order and the four header
/// shapes per synonym in shape order; the first hit wins and ends the
/// search for that section.
pub fn locate_sections(text_lower: &str, config: &ParseConfig) -> SectionBoundaries {
    let mut boundaries = Vec::new();
    for entry in HEADER_PATTERNS.iter() {
        let mut found = None;
        'synonyms: for patterns in entry
            .synonyms
            .iter()
            .map(|shapes| shapes.as_slice())
            .chain(
                config
                    .extra_synonyms_for(entry.section)
                    .map(|extra| extra.patterns.as_slice()),
            )
        {
            for re in patterns {
                if let Some(m) = re.find(text_lower) {
                    found = Some(m.start());
                    break 'synonyms;
                }
            }
        }
        if let Some(pos) = found {
            boundaries.push((entry.section, pos));
        }
    }
    boundaries
}

/// Extract the body text of a located section.
///
/// The span runs from the section's header offset to the nearest start of
/// any other located section, or end of text. Lines are discarded until the
/// header line (one containing a synonym of this section) has been seen and
/// dropped; the remaining non-blank lines are trimmed and joined with the
/// configured separator. A section that was never located yields an empty
/// string.
pub fn extract_content(
    text: &str,
    section: Section,
    boundaries: &SectionBoundaries,
    config: &ParseConfig,
) -> String {
    let Some(&(_, start)) = boundaries.iter().find(|(s, _)| *s == section) else {
        return String::new();
    };

    let mut end = text.len();
    for &(other, pos) in boundaries {
        if other != section && pos > start {
            end = end.min(pos);
        }
    }

    // Offsets were computed against the lowercased copy; keep them on a
    // char boundary of the original text.
    let start = clamp_to_char_boundary(text, start);
    let end = clamp_to_char_boundary(text, end.max(start));
    let span = &text[start..end];

    let keywords = section_keywords(section, config);
    let mut kept = Vec::new();
    let mut header_seen = false;
    for line in span.split('\n') {
        let line = line.trim();
        if !header_seen {
            let lower = line.to_lowercase();
            if keywords.iter().any(|kw| lower.contains(kw)) {
                header_seen = true;
            }
            continue;
        }
        if !line.is_empty() {
            kept.push(line);
        }
    }

    kept.join(config.section_joiner().separator())
}

/// The synonym keywords accepted for a section: built-ins plus any
/// config-supplied extras.
pub(crate) fn section_keywords<'a>(section: Section, config: &'a ParseConfig) -> Vec<&'a str> {
    let mut keywords: Vec<&str> = SECTION_SYNONYMS
        .iter()
        .find(|(s, _)| *s == section)
        .map(|(_, kws)| kws.to_vec())
        .unwrap_or_default();
    keywords.extend(config.extra_synonyms_for(section).map(|e| e.keyword.as_str()));
    keywords
}

fn clamp_to_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while offset > 0 && !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
