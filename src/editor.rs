//! Section editors – the uniform update contract over the document model.
//!
//! Every user edit is one [`EditorAction`]. [`apply`] computes the full
//! replacement value for the affected section and funnels it through
//! [`ResumeDocument::replace_section`], returning the section that changed.
//!
//! Edge cases are silent no-ops, never errors: out-of-bounds removes and
//! updates, empty skill text after trimming, and duplicate skills all leave
//! the document unchanged.

use crate::model::{
    EducationEntry, ExperienceEntry, ProjectEntry, ReferenceEntry, ResumeDocument, Section,
    SectionValue, Skills,
};

// ---------------------------------------------------------------------------
// Field addressing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    FullName,
    Email,
    Phone,
    Address,
    LinkedIn,
    Portfolio,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    Institution,
    Degree,
    FieldOfStudy,
    GraduationYear,
    Gpa,
    Achievements,
}

/// Text fields of an experience record. The `current` flag is not here: it is
/// toggled through [`ExperienceOp::SetCurrent`] so the paired end-date clear
/// happens in the same section replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Position,
    StartDate,
    EndDate,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Description,
    Technologies,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceField {
    Name,
    Position,
    Company,
    Email,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Technical,
    Languages,
    Soft,
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// Append / remove-by-position / update-single-field for a list section.
/// Positions are transient display indices derived from the current render.
#[derive(Debug, Clone, PartialEq)]
pub enum ListOp<F> {
    /// Append an all-empty record at the end.
    Add,
    /// Filter out the element at the index; no-op when out of bounds.
    Remove(usize),
    /// Replace one field of the element at the index; no-op when out of bounds.
    Update(usize, F, String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExperienceOp {
    Add,
    Remove(usize),
    Update(usize, ExperienceField, String),
    /// Toggle the "I currently work here" flag. Setting it true also clears
    /// `end_date` inside the same replacement value (the pair is atomic).
    SetCurrent(usize, bool),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkillOp {
    /// Trim, then append unless empty or already present in the category
    /// (case-sensitive exact match).
    Add(SkillCategory, String),
    /// Remove the first exact match, which by the dedup invariant is the
    /// only one.
    Remove(SkillCategory, String),
}

/// One user edit against the document.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    Identity(IdentityField, String),
    Education(ListOp<EducationField>),
    Experience(ExperienceOp),
    Skills(SkillOp),
    Projects(ListOp<ProjectField>),
    References(ListOp<ReferenceField>),
}

// ---------------------------------------------------------------------------
// Reducer
// ---------------------------------------------------------------------------

/// Apply one action, replacing the affected section wholesale. Returns the
/// section that was replaced (even when the edit was a no-op, so observers of
/// that section still refresh).
pub fn apply(doc: &mut ResumeDocument, action: EditorAction) -> Section {
    let value = match action {
        EditorAction::Identity(field, value) => {
            let mut identity = doc.identity.clone();
            match field {
                IdentityField::FullName => identity.full_name = value,
                IdentityField::Email => identity.email = value,
                IdentityField::Phone => identity.phone = value,
                IdentityField::Address => identity.address = value,
                IdentityField::LinkedIn => identity.linked_in = value,
                IdentityField::Portfolio => identity.portfolio = value,
                IdentityField::Summary => identity.summary = value,
            }
            SectionValue::Identity(identity)
        }
        EditorAction::Education(op) => SectionValue::Education(apply_list_op(
            &doc.education,
            op,
            |entry: &mut EducationEntry, field, value| match field {
                EducationField::Institution => entry.institution = value,
                EducationField::Degree => entry.degree = value,
                EducationField::FieldOfStudy => entry.field_of_study = value,
                EducationField::GraduationYear => entry.graduation_year = value,
                EducationField::Gpa => entry.gpa = value,
                EducationField::Achievements => entry.achievements = value,
            },
        )),
        EditorAction::Experience(op) => SectionValue::Experience(apply_experience_op(
            &doc.experience,
            op,
        )),
        EditorAction::Skills(op) => SectionValue::Skills(apply_skill_op(&doc.skills, op)),
        EditorAction::Projects(op) => SectionValue::Projects(apply_list_op(
            &doc.projects,
            op,
            |entry: &mut ProjectEntry, field, value| match field {
                ProjectField::Title => entry.title = value,
                ProjectField::Description => entry.description = value,
                ProjectField::Technologies => entry.technologies = value,
                ProjectField::Link => entry.link = value,
            },
        )),
        EditorAction::References(op) => SectionValue::References(apply_list_op(
            &doc.references,
            op,
            |entry: &mut ReferenceEntry, field, value| match field {
                ReferenceField::Name => entry.name = value,
                ReferenceField::Position => entry.position = value,
                ReferenceField::Company => entry.company = value,
                ReferenceField::Email => entry.email = value,
                ReferenceField::Phone => entry.phone = value,
            },
        )),
    };
    doc.replace_section(value)
}

fn apply_list_op<T, F>(
    items: &[T],
    op: ListOp<F>,
    set_field: impl Fn(&mut T, F, String),
) -> Vec<T>
where
    T: Clone + Default,
{
    match op {
        ListOp::Add => {
            let mut next = items.to_vec();
            next.push(T::default());
            next
        }
        ListOp::Remove(index) => items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, item)| item.clone())
            .collect(),
        ListOp::Update(index, field, value) => {
            let mut next = items.to_vec();
            if let Some(entry) = next.get_mut(index) {
                set_field(entry, field, value);
            }
            next
        }
    }
}

fn apply_experience_op(items: &[ExperienceEntry], op: ExperienceOp) -> Vec<ExperienceEntry> {
    match op {
        ExperienceOp::Add => {
            let mut next = items.to_vec();
            next.push(ExperienceEntry::default());
            next
        }
        ExperienceOp::Remove(index) => items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, item)| item.clone())
            .collect(),
        ExperienceOp::Update(index, field, value) => {
            let mut next = items.to_vec();
            if let Some(entry) = next.get_mut(index) {
                match field {
                    ExperienceField::Company => entry.company = value,
                    ExperienceField::Position => entry.position = value,
                    ExperienceField::StartDate => entry.start_date = value,
                    ExperienceField::EndDate => entry.end_date = value,
                    ExperienceField::Description => entry.description = value,
                }
            }
            next
        }
        ExperienceOp::SetCurrent(index, current) => {
            let mut next = items.to_vec();
            if let Some(entry) = next.get_mut(index) {
                entry.current = current;
                if current {
                    // Both field changes land in the same replacement value.
                    entry.end_date.clear();
                }
            }
            next
        }
    }
}

fn apply_skill_op(skills: &Skills, op: SkillOp) -> Skills {
    let mut next = skills.clone();
    match op {
        SkillOp::Add(category, text) => {
            let trimmed = text.trim();
            let set = category_mut(&mut next, category);
            if !trimmed.is_empty() && !set.iter().any(|s| s == trimmed) {
                set.push(trimmed.to_string());
            }
        }
        SkillOp::Remove(category, text) => {
            let set = category_mut(&mut next, category);
            if let Some(pos) = set.iter().position(|s| s == &text) {
                set.remove(pos);
            }
        }
    }
    next
}

fn category_mut(skills: &mut Skills, category: SkillCategory) -> &mut Vec<String> {
    match category {
        SkillCategory::Technical => &mut skills.technical,
        SkillCategory::Languages => &mut skills.languages,
        SkillCategory::Soft => &mut skills.soft,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_experience(n: usize) -> ResumeDocument {
        let mut doc = ResumeDocument::new();
        for _ in 0..n {
            apply(&mut doc, EditorAction::Experience(ExperienceOp::Add));
        }
        doc
    }

    #[test]
    fn add_appends_empty_record() {
        let mut doc = ResumeDocument::new();
        let section = apply(&mut doc, EditorAction::Education(ListOp::Add));
        assert_eq!(section, Section::Education);
        assert_eq!(doc.education.len(), 1);
        assert_eq!(doc.education[0], EducationEntry::default());
    }

    #[test]
    fn remove_out_of_bounds_is_noop() {
        let mut doc = doc_with_experience(2);
        apply(&mut doc, EditorAction::Experience(ExperienceOp::Remove(5)));
        assert_eq!(doc.experience.len(), 2);
    }

    #[test]
    fn update_touches_only_addressed_field() {
        let mut doc = ResumeDocument::new();
        apply(&mut doc, EditorAction::Projects(ListOp::Add));
        apply(&mut doc, EditorAction::Projects(ListOp::Add));
        apply(
            &mut doc,
            EditorAction::Projects(ListOp::Update(
                1,
                ProjectField::Title,
                "Compiler".to_string(),
            )),
        );
        assert_eq!(doc.projects[0], ProjectEntry::default());
        assert_eq!(doc.projects[1].title, "Compiler");
        assert!(doc.projects[1].description.is_empty());
    }

    #[test]
    fn remove_shifts_later_positions() {
        let mut doc = ResumeDocument::new();
        for name in ["a", "b", "c"] {
            apply(&mut doc, EditorAction::References(ListOp::Add));
            let index = doc.references.len() - 1;
            apply(
                &mut doc,
                EditorAction::References(ListOp::Update(
                    index,
                    ReferenceField::Name,
                    name.to_string(),
                )),
            );
        }
        apply(&mut doc, EditorAction::References(ListOp::Remove(1)));
        let names: Vec<&str> = doc.references.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn skill_add_trims_and_dedups() {
        let mut doc = ResumeDocument::new();
        apply(
            &mut doc,
            EditorAction::Skills(SkillOp::Add(SkillCategory::Technical, "  Rust  ".to_string())),
        );
        apply(
            &mut doc,
            EditorAction::Skills(SkillOp::Add(SkillCategory::Technical, "Rust".to_string())),
        );
        assert_eq!(doc.skills.technical, vec!["Rust".to_string()]);

        // Case-sensitive: "rust" is a different entry.
        apply(
            &mut doc,
            EditorAction::Skills(SkillOp::Add(SkillCategory::Technical, "rust".to_string())),
        );
        assert_eq!(doc.skills.technical.len(), 2);
    }

    #[test]
    fn skill_add_empty_is_noop() {
        let mut doc = ResumeDocument::new();
        apply(
            &mut doc,
            EditorAction::Skills(SkillOp::Add(SkillCategory::Soft, "   ".to_string())),
        );
        assert!(doc.skills.soft.is_empty());
    }

    #[test]
    fn skill_categories_are_independent() {
        let mut doc = ResumeDocument::new();
        apply(
            &mut doc,
            EditorAction::Skills(SkillOp::Add(SkillCategory::Languages, "English".to_string())),
        );
        assert!(doc.skills.technical.is_empty());
        assert!(doc.skills.soft.is_empty());
        assert_eq!(doc.skills.languages, vec!["English".to_string()]);
    }

    #[test]
    fn skill_remove_drops_exact_match() {
        let mut doc = ResumeDocument::new();
        for s in ["Go", "Rust"] {
            apply(
                &mut doc,
                EditorAction::Skills(SkillOp::Add(SkillCategory::Technical, s.to_string())),
            );
        }
        apply(
            &mut doc,
            EditorAction::Skills(SkillOp::Remove(SkillCategory::Technical, "Go".to_string())),
        );
        assert_eq!(doc.skills.technical, vec!["Rust".to_string()]);

        // Removing something absent is a silent no-op.
        apply(
            &mut doc,
            EditorAction::Skills(SkillOp::Remove(SkillCategory::Technical, "Go".to_string())),
        );
        assert_eq!(doc.skills.technical.len(), 1);
    }

    #[test]
    fn set_current_clears_end_date_atomically() {
        let mut doc = doc_with_experience(1);
        apply(
            &mut doc,
            EditorAction::Experience(ExperienceOp::Update(
                0,
                ExperienceField::EndDate,
                "2024-06".to_string(),
            )),
        );
        apply(
            &mut doc,
            EditorAction::Experience(ExperienceOp::SetCurrent(0, true)),
        );
        assert!(doc.experience[0].current);
        assert!(doc.experience[0].end_date.is_empty());
    }

    #[test]
    fn unset_current_does_not_restore_end_date() {
        let mut doc = doc_with_experience(1);
        apply(
            &mut doc,
            EditorAction::Experience(ExperienceOp::Update(
                0,
                ExperienceField::EndDate,
                "2023-01".to_string(),
            )),
        );
        apply(
            &mut doc,
            EditorAction::Experience(ExperienceOp::SetCurrent(0, true)),
        );
        apply(
            &mut doc,
            EditorAction::Experience(ExperienceOp::SetCurrent(0, false)),
        );
        assert!(!doc.experience[0].current);
        assert!(doc.experience[0].end_date.is_empty());
    }

    #[test]
    fn identity_updates_replace_single_field() {
        let mut doc = ResumeDocument::new();
        apply(
            &mut doc,
            EditorAction::Identity(IdentityField::FullName, "Jane Doe".to_string()),
        );
        apply(
            &mut doc,
            EditorAction::Identity(IdentityField::Email, "jane@example.com".to_string()),
        );
        assert_eq!(doc.identity.full_name, "Jane Doe");
        assert_eq!(doc.identity.email, "jane@example.com");
        assert!(doc.identity.phone.is_empty());
    }

    #[test]
    fn list_length_tracks_adds_minus_removes() {
        let mut doc = ResumeDocument::new();
        for _ in 0..5 {
            apply(&mut doc, EditorAction::Education(ListOp::Add));
        }
        apply(&mut doc, EditorAction::Education(ListOp::Remove(0)));
        apply(&mut doc, EditorAction::Education(ListOp::Remove(2)));
        assert_eq!(doc.education.len(), 3);
    }
}
