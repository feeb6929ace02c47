//! Renderer – pure projection from (document, template variant) to the
//! display tree.
//!
//! The same tree drives the on-screen preview and the export pipeline. The
//! variant's theme decorates the tree; it never changes which nodes exist.
//! Empty sections are omitted entirely – no empty headings are ever emitted.

use crate::model::{
    EducationEntry, ExperienceEntry, ProjectEntry, ReferenceEntry, ResumeDocument,
};
use crate::template::{FrameEdge, SectionDecor, TemplateVariant, Theme};
use crate::view::{Align, Color, Dim, Direction, Edges, Justify, NodeStyle, TextAlign, ViewNode};

/// Literal rendered for the end date of an ongoing position.
pub const ONGOING_LABEL: &str = "Present";

/// Header placeholder shown while the name is still empty.
pub const NAME_PLACEHOLDER: &str = "Your Name";

const GRAY_500: Color = Color {
    r: 0.424,
    g: 0.447,
    b: 0.502,
    a: 1.0,
};
const GRAY_700: Color = Color {
    r: 0.216,
    g: 0.255,
    b: 0.318,
    a: 1.0,
};
const GRAY_200: Color = Color {
    r: 0.898,
    g: 0.906,
    b: 0.922,
    a: 1.0,
};
const LINK_BLUE: Color = Color {
    r: 0.145,
    g: 0.388,
    b: 0.922,
    a: 1.0,
};

// ---------------------------------------------------------------------------
// Date formatting
// ---------------------------------------------------------------------------

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Render a stored `"YYYY-MM"` date as long month name + 4-digit year
/// (`"2024-03"` → `"March 2024"`). Empty input renders empty; anything
/// unparseable degrades to the input unchanged, never an error.
pub fn format_month_year(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    if let Some((year, month)) = date.split_once('-') {
        if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(m) = month.parse::<usize>() {
                if (1..=12).contains(&m) {
                    return format!("{} {}", MONTHS[m - 1], year);
                }
            }
        }
    }
    log::debug!("unparseable date {date:?} rendered verbatim");
    date.to_string()
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Project the document through a template variant into the display tree
/// root. Pure: no state, no side effects beyond a debug log on malformed
/// dates.
pub fn render(document: &ResumeDocument, template: TemplateVariant) -> ViewNode {
    let theme = template.theme();
    let mut children = vec![header(document, &theme)];

    if !document.identity.summary.is_empty() {
        children.push(section(
            &theme,
            "Professional Summary",
            vec![body_text(&document.identity.summary, GRAY_500)],
        ));
    }
    if !document.education.is_empty() {
        children.push(section(
            &theme,
            "Education",
            document
                .education
                .iter()
                .map(|entry| education_entry(entry, &theme))
                .collect(),
        ));
    }
    if !document.experience.is_empty() {
        children.push(section(
            &theme,
            "Work Experience",
            document
                .experience
                .iter()
                .map(|entry| experience_entry(entry, &theme))
                .collect(),
        ));
    }
    if !document.skills.is_empty() {
        children.push(section(&theme, "Skills & Languages", skill_groups(document)));
    }
    if !document.projects.is_empty() {
        children.push(section(
            &theme,
            "Projects",
            document
                .projects
                .iter()
                .map(|entry| project_entry(entry, &theme))
                .collect(),
        ));
    }
    if !document.references.is_empty() {
        children.push(section(
            &theme,
            "References",
            vec![reference_grid(&document.references)],
        ));
    }

    root(&theme, children)
}

fn root(theme: &Theme, children: Vec<ViewNode>) -> ViewNode {
    let mut style = NodeStyle {
        width: Dim::Percent(100.0),
        padding: Edges::all(24.0),
        background: Color::WHITE,
        gap: 16.0,
        ..NodeStyle::default()
    };
    if let Some(frame) = theme.frame {
        style.border_color = frame.color;
        style.border = match frame.edge {
            FrameEdge::Top => Edges::top(frame.width),
            FrameEdge::Bottom => Edges::bottom(frame.width),
            FrameEdge::Left => Edges::left(frame.width),
        };
    }
    ViewNode::block(style, children)
}

/// Name, contact row, link row. The bottom hairline separates the header from
/// the body for every theme.
fn header(document: &ResumeDocument, theme: &Theme) -> ViewNode {
    let identity = &document.identity;
    let name: &str = if identity.full_name.is_empty() {
        NAME_PLACEHOLDER
    } else {
        &identity.full_name
    };

    let mut children = vec![ViewNode::text(
        name,
        NodeStyle {
            font_size: 30.0,
            bold: true,
            color: theme.heading_color,
            text_align: TextAlign::Center,
            margin: Edges::bottom(8.0),
            ..NodeStyle::default()
        },
    )];

    let contact: Vec<&String> = [&identity.email, &identity.phone, &identity.address]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if !contact.is_empty() {
        children.push(inline_row(
            contact.iter().map(|s| small_text(s, GRAY_500)).collect(),
        ));
    }

    let links: Vec<&String> = [&identity.linked_in, &identity.portfolio]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if !links.is_empty() {
        children.push(inline_row(
            links.iter().map(|s| small_text(s, LINK_BLUE)).collect(),
        ));
    }

    ViewNode::block(
        NodeStyle {
            border: Edges::bottom(1.0),
            border_color: GRAY_200,
            padding: Edges::bottom(16.0),
            gap: 6.0,
            ..NodeStyle::default()
        },
        children,
    )
}

fn education_entry(entry: &EducationEntry, theme: &Theme) -> ViewNode {
    let mut left = vec![ViewNode::text(
        format!("{} in {}", entry.degree, entry.field_of_study),
        subhead_style(),
    )];
    if !entry.institution.is_empty() {
        left.push(body_text(&entry.institution, GRAY_500));
    }

    let mut right = Vec::new();
    if !entry.graduation_year.is_empty() {
        right.push(right_text(&entry.graduation_year));
    }
    if !entry.gpa.is_empty() {
        right.push(right_text(&format!("GPA: {}", entry.gpa)));
    }

    let mut children = vec![split_row(left, right)];
    if !entry.achievements.is_empty() {
        children.push(small_text(&entry.achievements, GRAY_500));
    }
    entry_block(children, theme)
}

fn experience_entry(entry: &ExperienceEntry, theme: &Theme) -> ViewNode {
    let mut left = Vec::new();
    if !entry.position.is_empty() {
        left.push(ViewNode::text(&entry.position, subhead_style()));
    }
    if !entry.company.is_empty() {
        left.push(body_text(&entry.company, GRAY_500));
    }

    let end = if entry.current {
        ONGOING_LABEL.to_string()
    } else {
        format_month_year(&entry.end_date)
    };
    let dates = format!("{} - {}", format_month_year(&entry.start_date), end);

    let mut children = vec![split_row(left, vec![right_text(&dates)])];
    if !entry.description.is_empty() {
        children.push(small_text(&entry.description, GRAY_500));
    }
    entry_block(children, theme)
}

fn skill_groups(document: &ResumeDocument) -> Vec<ViewNode> {
    let groups = [
        ("Technical Skills", &document.skills.technical),
        ("Languages", &document.skills.languages),
        ("Soft Skills", &document.skills.soft),
    ];
    let mut out = Vec::new();
    for (title, set) in groups {
        if set.is_empty() {
            continue;
        }
        out.push(ViewNode::block(
            NodeStyle {
                gap: 6.0,
                ..NodeStyle::default()
            },
            vec![
                ViewNode::text(title, subhead_style()),
                badge_row(set),
            ],
        ));
    }
    out
}

fn badge_row(entries: &[String]) -> ViewNode {
    ViewNode::block(
        NodeStyle {
            direction: Direction::Row,
            wrap: true,
            gap: 6.0,
            align: Align::Start,
            ..NodeStyle::default()
        },
        entries
            .iter()
            .map(|entry| {
                ViewNode::text(
                    entry,
                    NodeStyle {
                        font_size: 12.0,
                        background: GRAY_200,
                        color: GRAY_700,
                        padding: Edges::x_y(8.0, 2.0),
                        ..NodeStyle::default()
                    },
                )
            })
            .collect(),
    )
}

fn project_entry(entry: &ProjectEntry, theme: &Theme) -> ViewNode {
    let mut right = Vec::new();
    if !entry.link.is_empty() {
        right.push(small_text("View Project", LINK_BLUE));
    }
    let mut children = vec![split_row(
        vec![ViewNode::text(&entry.title, subhead_style())],
        right,
    )];
    if !entry.technologies.is_empty() {
        children.push(small_text(
            &format!("Technologies: {}", entry.technologies),
            GRAY_500,
        ));
    }
    if !entry.description.is_empty() {
        children.push(small_text(&entry.description, GRAY_500));
    }
    entry_block(children, theme)
}

/// Reference cards in a two-column wrapping row.
fn reference_grid(references: &[ReferenceEntry]) -> ViewNode {
    ViewNode::block(
        NodeStyle {
            direction: Direction::Row,
            wrap: true,
            gap: 12.0,
            align: Align::Start,
            ..NodeStyle::default()
        },
        references.iter().map(reference_card).collect(),
    )
}

fn reference_card(entry: &ReferenceEntry) -> ViewNode {
    let mut children = vec![ViewNode::text(&entry.name, subhead_style())];
    for line in [&entry.position, &entry.company, &entry.email, &entry.phone] {
        if !line.is_empty() {
            children.push(small_text(line, GRAY_500));
        }
    }
    ViewNode::block(
        NodeStyle {
            width: Dim::Percent(48.0),
            border: Edges::all(1.0),
            border_color: GRAY_200,
            padding: Edges::all(12.0),
            gap: 3.0,
            ..NodeStyle::default()
        },
        children,
    )
}

// ---------------------------------------------------------------------------
// Shared building blocks
// ---------------------------------------------------------------------------

/// A titled section with the theme's decoration. Only called for non-empty
/// sections, so a heading always has content under it.
fn section(theme: &Theme, title: &str, children: Vec<ViewNode>) -> ViewNode {
    let mut style = NodeStyle {
        gap: 12.0,
        ..NodeStyle::default()
    };
    match theme.section_decor {
        SectionDecor::None => {}
        SectionDecor::LeftRule { width, color } => {
            style.border = Edges::left(width);
            style.border_color = color;
            style.padding.left = 16.0;
        }
        SectionDecor::TopRule { width, color } => {
            style.border = Edges::top(width);
            style.border_color = color;
            style.padding.top = 12.0;
        }
        SectionDecor::BottomHairline { color } => {
            style.border = Edges::bottom(1.0);
            style.border_color = color;
            style.padding.bottom = 8.0;
        }
        SectionDecor::Fill { color } => {
            style.background = color;
            style.padding = Edges::all(12.0);
        }
    }

    let heading = ViewNode::text(
        title,
        NodeStyle {
            font_size: 20.0,
            bold: true,
            color: theme.heading_color,
            margin: Edges::bottom(4.0),
            ..NodeStyle::default()
        },
    );

    let mut nodes = vec![heading];
    nodes.extend(children);
    ViewNode::block(style, nodes)
}

/// One entry inside a section: accent rule on the left, stacked content.
fn entry_block(children: Vec<ViewNode>, theme: &Theme) -> ViewNode {
    ViewNode::block(
        NodeStyle {
            border: Edges::left(2.0),
            border_color: theme.accent,
            padding: Edges::left(12.0),
            gap: 4.0,
            ..NodeStyle::default()
        },
        children,
    )
}

fn split_row(left: Vec<ViewNode>, right: Vec<ViewNode>) -> ViewNode {
    ViewNode::block(
        NodeStyle {
            direction: Direction::Row,
            justify: Justify::SpaceBetween,
            align: Align::Start,
            gap: 12.0,
            ..NodeStyle::default()
        },
        vec![
            ViewNode::block(
                NodeStyle {
                    gap: 2.0,
                    ..NodeStyle::default()
                },
                left,
            ),
            ViewNode::block(
                NodeStyle {
                    gap: 2.0,
                    ..NodeStyle::default()
                },
                right,
            ),
        ],
    )
}

fn inline_row(children: Vec<ViewNode>) -> ViewNode {
    ViewNode::block(
        NodeStyle {
            direction: Direction::Row,
            wrap: true,
            justify: Justify::Center,
            gap: 12.0,
            ..NodeStyle::default()
        },
        children,
    )
}

fn subhead_style() -> NodeStyle {
    NodeStyle {
        bold: true,
        ..NodeStyle::default()
    }
}

fn body_text(text: &str, color: Color) -> ViewNode {
    ViewNode::text(
        text,
        NodeStyle {
            color,
            ..NodeStyle::default()
        },
    )
}

fn small_text(text: &str, color: Color) -> ViewNode {
    ViewNode::text(
        text,
        NodeStyle {
            font_size: 12.0,
            color,
            ..NodeStyle::default()
        },
    )
}

fn right_text(text: &str) -> ViewNode {
    ViewNode::text(
        text,
        NodeStyle {
            font_size: 12.0,
            color: GRAY_500,
            text_align: TextAlign::Right,
            ..NodeStyle::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::collect_text;

    fn texts(doc: &ResumeDocument) -> Vec<String> {
        let tree = render(doc, TemplateVariant::Classic);
        collect_text(std::slice::from_ref(&tree))
    }

    #[test]
    fn format_month_year_happy_path() {
        assert_eq!(format_month_year("2024-03"), "March 2024");
        assert_eq!(format_month_year("1999-12"), "December 1999");
        assert_eq!(format_month_year("2022-1"), "January 2022");
    }

    #[test]
    fn format_month_year_degrades_without_raising() {
        assert_eq!(format_month_year(""), "");
        assert_eq!(format_month_year("next spring"), "next spring");
        assert_eq!(format_month_year("2024-13"), "2024-13");
        assert_eq!(format_month_year("24-03"), "24-03");
    }

    #[test]
    fn empty_document_has_no_section_headings() {
        let out = texts(&ResumeDocument::new());
        assert!(out.contains(&NAME_PLACEHOLDER.to_string()));
        for heading in [
            "Education",
            "Work Experience",
            "Skills & Languages",
            "Projects",
            "References",
            "Professional Summary",
        ] {
            assert!(!out.contains(&heading.to_string()), "unexpected {heading:?}");
        }
    }

    #[test]
    fn education_heading_appears_with_first_entry() {
        let mut doc = ResumeDocument::new();
        doc.education.push(EducationEntry {
            degree: "BSc".to_string(),
            field_of_study: "Physics".to_string(),
            ..Default::default()
        });
        let out = texts(&doc);
        assert!(out.contains(&"Education".to_string()));
        assert!(out.contains(&"BSc in Physics".to_string()));
    }

    #[test]
    fn current_position_renders_present_over_stored_end_date() {
        let mut doc = ResumeDocument::new();
        doc.experience.push(ExperienceEntry {
            position: "Engineer".to_string(),
            start_date: "2022-01".to_string(),
            end_date: "2023-09".to_string(),
            current: true,
            ..Default::default()
        });
        let out = texts(&doc);
        assert!(out.contains(&"January 2022 - Present".to_string()));
    }

    #[test]
    fn finished_position_renders_both_dates() {
        let mut doc = ResumeDocument::new();
        doc.experience.push(ExperienceEntry {
            start_date: "2020-06".to_string(),
            end_date: "2021-02".to_string(),
            ..Default::default()
        });
        let out = texts(&doc);
        assert!(out.contains(&"June 2020 - February 2021".to_string()));
    }

    #[test]
    fn skills_section_covers_only_non_empty_categories() {
        let mut doc = ResumeDocument::new();
        doc.skills.languages.push("Swahili (Native)".to_string());
        let out = texts(&doc);
        assert!(out.contains(&"Skills & Languages".to_string()));
        assert!(out.contains(&"Languages".to_string()));
        assert!(!out.contains(&"Technical Skills".to_string()));
        assert!(!out.contains(&"Soft Skills".to_string()));
    }

    #[test]
    fn templates_share_identical_text_content() {
        let doc = crate::samples::jane_doe();
        let classic = texts(&doc);
        for variant in TemplateVariant::ALL {
            let tree = render(&doc, variant);
            assert_eq!(
                collect_text(std::slice::from_ref(&tree)),
                classic,
                "variant {:?} altered content",
                variant
            );
        }
    }

    #[test]
    fn project_link_renders_fixed_label() {
        let mut doc = ResumeDocument::new();
        doc.projects.push(ProjectEntry {
            title: "cv-forge".to_string(),
            link: "https://example.com".to_string(),
            ..Default::default()
        });
        let out = texts(&doc);
        assert!(out.contains(&"View Project".to_string()));
        assert!(!out.iter().any(|t| t.contains("https://example.com")));
    }
}
