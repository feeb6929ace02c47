//! Sample documents for demos and tests.

use crate::model::{
    EducationEntry, ExperienceEntry, ProjectEntry, ReferenceEntry, ResumeDocument,
};

/// A fully populated single-page document touching every section.
pub fn jane_doe() -> ResumeDocument {
    let mut doc = ResumeDocument::new();
    doc.identity.full_name = "Jane Doe".to_string();
    doc.identity.email = "jane.doe@example.com".to_string();
    doc.identity.phone = "+255 712 345 678".to_string();
    doc.identity.address = "Dar es Salaam, Tanzania".to_string();
    doc.identity.linked_in = "linkedin.com/in/janedoe".to_string();
    doc.identity.portfolio = "janedoe.dev".to_string();
    doc.identity.summary =
        "Software engineer with six years of experience building data platforms and \
         developer tooling. Comfortable owning systems from design through operations."
            .to_string();

    doc.education.push(EducationEntry {
        institution: "University of Dar es Salaam".to_string(),
        degree: "BSc".to_string(),
        field_of_study: "Computer Science".to_string(),
        graduation_year: "2019".to_string(),
        gpa: "4.2".to_string(),
        achievements: "Graduated with first-class honours; led the programming club."
            .to_string(),
    });

    doc.experience.push(ExperienceEntry {
        company: "Acme Analytics".to_string(),
        position: "Senior Software Engineer".to_string(),
        start_date: "2022-03".to_string(),
        end_date: String::new(),
        current: true,
        description: "Own the ingestion pipeline processing 40M events per day. \
                      Cut p99 query latency by 60% through storage-layer rework."
            .to_string(),
    });
    doc.experience.push(ExperienceEntry {
        company: "Bluewater Systems".to_string(),
        position: "Software Engineer".to_string(),
        start_date: "2019-07".to_string(),
        end_date: "2022-02".to_string(),
        current: false,
        description: "Built and operated the billing service; migrated the monolith's \
                      reporting module to a standalone worker fleet."
            .to_string(),
    });

    for skill in ["Rust", "Python", "PostgreSQL", "Kubernetes"] {
        doc.skills.technical.push(skill.to_string());
    }
    doc.skills.languages.push("Swahili (Native)".to_string());
    doc.skills.languages.push("English (Fluent)".to_string());
    doc.skills.soft.push("Technical writing".to_string());
    doc.skills.soft.push("Mentoring".to_string());

    doc.projects.push(ProjectEntry {
        title: "openmeter".to_string(),
        description: "Self-hosted usage metering with a pluggable aggregation layer."
            .to_string(),
        technologies: "Rust, ClickHouse, gRPC".to_string(),
        link: "https://github.com/janedoe/openmeter".to_string(),
    });

    doc.references.push(ReferenceEntry {
        name: "Amani Mbeki".to_string(),
        position: "Engineering Manager".to_string(),
        company: "Acme Analytics".to_string(),
        email: "amani.mbeki@example.com".to_string(),
        phone: "+255 713 000 111".to_string(),
    });
    doc.references.push(ReferenceEntry {
        name: "Grace Otieno".to_string(),
        position: "CTO".to_string(),
        company: "Bluewater Systems".to_string(),
        email: "grace@example.com".to_string(),
        phone: String::new(),
    });

    doc
}

/// A deliberately long document that cannot fit on a single A4 page.
pub fn multi_page() -> ResumeDocument {
    let mut doc = jane_doe();
    for i in 0..12 {
        doc.experience.push(ExperienceEntry {
            company: format!("Consulting Client {}", i + 1),
            position: "Contract Engineer".to_string(),
            start_date: "2018-01".to_string(),
            end_date: "2018-06".to_string(),
            current: false,
            description: "Delivered a six-month engagement covering service extraction, \
                          load testing, deployment automation and handover documentation \
                          for the client's in-house team."
                .to_string(),
        });
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jane_doe_fills_every_section() {
        let doc = jane_doe();
        assert!(!doc.identity.full_name.is_empty());
        assert!(!doc.education.is_empty());
        assert!(!doc.experience.is_empty());
        assert!(!doc.skills.is_empty());
        assert!(!doc.projects.is_empty());
        assert!(!doc.references.is_empty());
        assert!(!doc.is_empty());
    }

    #[test]
    fn multi_page_is_much_longer() {
        assert!(multi_page().experience.len() > jane_doe().experience.len() + 10);
    }
}
