//! Document model – the in-memory representation of one résumé.
//!
//! Data only: the model performs no validation and raises no errors. All
//! mutation goes through [`ResumeDocument::replace_section`], which swaps a
//! whole section for a caller-supplied replacement value.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Section records
// ---------------------------------------------------------------------------

/// Personal details shown in the document header. Every field is free text
/// and optional; required-field markers in a UI are advisory only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Identity {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub linked_in: String,
    pub portfolio: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub graduation_year: String,
    pub gpa: String,
    pub achievements: String,
}

/// One work-experience record. `start_date` / `end_date` use the `"YYYY-MM"`
/// form; when `current` is true the stored `end_date` is ignored at render
/// time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

/// Three independent skill sets. Insertion order is display order; each set
/// holds no duplicates (case-sensitive exact match, enforced by the editor).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Skills {
    pub technical: Vec<String>,
    pub languages: Vec<String>,
    pub soft: Vec<String>,
}

impl Skills {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.languages.is_empty() && self.soft.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub name: String,
    pub position: String,
    pub company: String,
    pub email: String,
    pub phone: String,
}

// ---------------------------------------------------------------------------
// Root aggregate
// ---------------------------------------------------------------------------

/// The root document, owned by one session. Created empty, mutated only via
/// whole-section replacement, discarded when the session ends.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub identity: Identity,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Skills,
    pub projects: Vec<ProjectEntry>,
    pub references: Vec<ReferenceEntry>,
}

/// Key identifying one named subtree of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Identity,
    Education,
    Experience,
    Skills,
    Projects,
    References,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Identity,
        Section::Education,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::References,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Identity => "identity",
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::References => "references",
        }
    }
}

/// A full replacement value for one section. Callers build the new value
/// themselves (copy-with-change); the model accepts it unconditionally.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionValue {
    Identity(Identity),
    Education(Vec<EducationEntry>),
    Experience(Vec<ExperienceEntry>),
    Skills(Skills),
    Projects(Vec<ProjectEntry>),
    References(Vec<ReferenceEntry>),
}

impl SectionValue {
    pub fn section(&self) -> Section {
        match self {
            SectionValue::Identity(_) => Section::Identity,
            SectionValue::Education(_) => Section::Education,
            SectionValue::Experience(_) => Section::Experience,
            SectionValue::Skills(_) => Section::Skills,
            SectionValue::Projects(_) => Section::Projects,
            SectionValue::References(_) => Section::References,
        }
    }
}

impl ResumeDocument {
    /// The empty document a session starts with.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one whole section by value. Infallible: no shape beyond the
    /// type system is checked, no field is mandatory.
    pub fn replace_section(&mut self, value: SectionValue) -> Section {
        let section = value.section();
        match value {
            SectionValue::Identity(v) => self.identity = v,
            SectionValue::Education(v) => self.education = v,
            SectionValue::Experience(v) => self.experience = v,
            SectionValue::Skills(v) => self.skills = v,
            SectionValue::Projects(v) => self.projects = v,
            SectionValue::References(v) => self.references = v,
        }
        section
    }

    /// True when no section holds any data.
    pub fn is_empty(&self) -> bool {
        self.identity == Identity::default()
            && self.education.is_empty()
            && self.experience.is_empty()
            && self.skills.is_empty()
            && self.projects.is_empty()
            && self.references.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_is_empty() {
        let doc = ResumeDocument::new();
        assert!(doc.is_empty());
        assert!(doc.education.is_empty());
        assert!(!doc.experience.iter().any(|e| e.current));
    }

    #[test]
    fn replace_section_swaps_whole_value() {
        let mut doc = ResumeDocument::new();
        let section = doc.replace_section(SectionValue::Education(vec![EducationEntry {
            institution: "MIT".to_string(),
            ..Default::default()
        }]));
        assert_eq!(section, Section::Education);
        assert_eq!(doc.education.len(), 1);
        assert_eq!(doc.education[0].institution, "MIT");

        doc.replace_section(SectionValue::Education(Vec::new()));
        assert!(doc.education.is_empty());
    }

    #[test]
    fn model_accepts_any_shape() {
        // No field is mandatory: an identity with only a phone is fine.
        let mut doc = ResumeDocument::new();
        doc.replace_section(SectionValue::Identity(Identity {
            phone: "+255 000 000".to_string(),
            ..Default::default()
        }));
        assert!(doc.identity.full_name.is_empty());
        assert!(!doc.is_empty());
    }

    #[test]
    fn document_json_roundtrip() {
        let mut doc = ResumeDocument::new();
        doc.experience.push(ExperienceEntry {
            company: "Acme".to_string(),
            current: true,
            ..Default::default()
        });
        let json = serde_json::to_string(&doc).unwrap();
        let back: ResumeDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }
}
