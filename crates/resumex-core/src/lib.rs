pub mod backend;

pub use backend::{BackendError, PdfBackend};

/// A labeled resume section introduced by a recognizable header line.
///
/// The variant order is the locator's table order and the column order of
/// the section fields in [`ResumeRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Achievements,
    Languages,
    Interests,
    References,
}

impl Section {
    /// All sections in table order.
    pub const ALL: [Section; 10] = [
        Section::Summary,
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Projects,
        Section::Certifications,
        Section::Achievements,
        Section::Languages,
        Section::Interests,
        Section::References,
    ];

    /// The field/column key for this section.
    pub fn key(&self) -> &'static str {
        match self {
            Section::Summary => "summary",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Certifications => "certifications",
            Section::Achievements => "achievements",
            Section::Languages => "languages",
            Section::Interests => "interests",
            Section::References => "references",
        }
    }
}

/// The flat set of extracted field values for one document.
///
/// The field set is fixed; values are derived solely from a single input
/// document's text and default to the empty string. A record is created
/// fresh per document and handed to the writer — nothing is retained across
/// documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Present in the output schema but populated by no extractor.
    pub address: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub summary: String,
    pub education: String,
    pub skills: String,
    pub experience: String,
    pub certifications: String,
    pub projects: String,
    pub languages: String,
    pub achievements: String,
    pub interests: String,
    pub references: String,
}

impl ResumeRecord {
    /// Column names, in output order.
    pub const FIELD_NAMES: [&'static str; 17] = [
        "name",
        "email",
        "phone",
        "address",
        "linkedin",
        "github",
        "website",
        "summary",
        "education",
        "skills",
        "experience",
        "certifications",
        "projects",
        "languages",
        "achievements",
        "interests",
        "references",
    ];

    /// Field values in the same order as [`Self::FIELD_NAMES`].
    pub fn field_values(&self) -> [&str; 17] {
        [
            &self.name,
            &self.email,
            &self.phone,
            &self.address,
            &self.linkedin,
            &self.github,
            &self.website,
            &self.summary,
            &self.education,
            &self.skills,
            &self.experience,
            &self.certifications,
            &self.projects,
            &self.languages,
            &self.achievements,
            &self.interests,
            &self.references,
        ]
    }

    /// The extracted body text for a section.
    pub fn section(&self, section: Section) -> &str {
        match section {
            Section::Summary => &self.summary,
            Section::Experience => &self.experience,
            Section::Education => &self.education,
            Section::Skills => &self.skills,
            Section::Projects => &self.projects,
            Section::Certifications => &self.certifications,
            Section::Achievements => &self.achievements,
            Section::Languages => &self.languages,
            Section::Interests => &self.interests,
            Section::References => &self.references,
        }
    }

    /// Mutable access to a section field, for the assembler.
    pub fn section_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::Summary => &mut self.summary,
            Section::Experience => &mut self.experience,
            Section::Education => &mut self.education,
            Section::Skills => &mut self.skills,
            Section::Projects => &mut self.projects,
            Section::Certifications => &mut self.certifications,
            Section::Achievements => &mut self.achievements,
            Section::Languages => &mut self.languages,
            Section::Interests => &mut self.interests,
            Section::References => &mut self.references,
        }
    }

    /// Count of fields holding a non-empty value.
    pub fn populated_fields(&self) -> usize {
        self.field_values().iter().filter(|v| !v.is_empty()).count()
    }
}
