//! Whole-document LaTeX export.
//!
//! `serialize` is total and deterministic: the same document always yields the
//! same bytes, and every section header is emitted even when its list is
//! empty. Hiding sections is the caller's job; `render_latex` is that caller
//! for the editor's visibility settings.

use crate::latex::template::{
    assemble, custom_section, entry_list, header_block, section, skills_body, summary_body,
};
use crate::models::document::Document;
use crate::models::settings::SectionVisibility;

/// Serializes every section of `doc`, including hidden custom sections.
pub fn serialize(doc: &Document) -> String {
    let mut blocks = vec![header_block(&doc.header)];
    blocks.extend(builtin_sections(doc, &SectionVisibility::default()));
    blocks.extend(doc.custom_sections.iter().map(custom_section));
    assemble(&blocks)
}

/// Serializes what the editor shows: built-in sections switched off in
/// `visible` and custom sections flagged invisible are left out.
pub fn render_latex(doc: &Document, visible: &SectionVisibility) -> String {
    let shown = doc.without_hidden_custom_sections();
    let mut blocks = vec![header_block(&shown.header)];
    blocks.extend(builtin_sections(&shown, visible));
    blocks.extend(shown.custom_sections.iter().map(custom_section));
    assemble(&blocks)
}

/// Built-in sections in export order: Summary, Experience, Projects,
/// Education, Skills.
fn builtin_sections(doc: &Document, visible: &SectionVisibility) -> Vec<String> {
    let mut blocks = Vec::new();
    if visible.summary {
        blocks.push(section("Summary", &summary_body(&doc.summary)));
    }
    if visible.experience {
        blocks.push(section("Experience", &entry_list(&doc.experience)));
    }
    if visible.projects {
        blocks.push(section("Projects", &entry_list(&doc.projects)));
    }
    if visible.education {
        blocks.push(section("Education", &entry_list(&doc.education)));
    }
    if visible.skills {
        blocks.push(section("Skills", &skills_body(&doc.skills)));
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{CustomItem, CustomSection, ExperienceEntry, Header};

    fn make_doc() -> Document {
        Document {
            header: Header {
                name: "A & B".into(),
                email: "ab@example.com".into(),
                location: "Berlin".into(),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                company: "Acme".into(),
                role: "Engineer".into(),
                location: "Remote".into(),
                dates: "2021 - 2024".into(),
                bullets: vec!["Grew revenue 50% using C++ & Python".into()],
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_end_to_end_escaping() {
        let out = serialize(&make_doc());
        assert!(out.contains(r"A \& B"));
        assert!(out.contains(r"Grew revenue 50\% using C++ \& Python"));
        assert!(out.contains("    \\item Grew revenue 50\\% using C++ \\& Python\n"));
        assert!(out.starts_with(crate::latex::template::PREAMBLE));
        assert!(out.ends_with("\\end{document}\n"));
    }

    #[test]
    fn test_header_without_location_has_no_trailing_separator() {
        let doc = Document {
            header: Header {
                name: "Ada".into(),
                email: "ada@x.io".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let out = serialize(&doc);
        let line = out
            .lines()
            .find(|l| l.contains("ada@x.io"))
            .unwrap();
        assert_eq!(line, "    ada@x.io");
        assert!(!line.trim_end().ends_with('|'));
    }

    #[test]
    fn test_serialize_is_deterministic() {
        let doc = Document::sample();
        assert_eq!(serialize(&doc), serialize(&doc));
        assert_eq!(serialize(&doc), serialize(&doc.clone()));
    }

    #[test]
    fn test_empty_document_keeps_every_section_header() {
        let out = serialize(&Document::default());
        for title in ["Summary", "Experience", "Projects", "Education", "Skills"] {
            assert!(
                out.contains(&format!("\\section{{{title}}}\n")),
                "missing section {title}"
            );
        }
        assert!(!out.contains("itemize"), "no empty list constructs");
    }

    #[test]
    fn test_section_order() {
        let out = serialize(&Document::sample());
        let pos = |t: &str| out.find(&format!("\\section{{{t}}}")).unwrap();
        assert!(pos("Summary") < pos("Experience"));
        assert!(pos("Experience") < pos("Projects"));
        assert!(pos("Projects") < pos("Education"));
        assert!(pos("Education") < pos("Skills"));
    }

    #[test]
    fn test_serialize_includes_hidden_custom_sections() {
        let mut doc = make_doc();
        doc.custom_sections.push(CustomSection {
            title: "Awards".into(),
            visible: false,
            items: vec![CustomItem {
                title: "Best Paper".into(),
                ..Default::default()
            }],
            ..Default::default()
        });
        let out = serialize(&doc);
        assert!(out.contains("\\section{Awards}\n\\noindent \\textbf{Best Paper}"));
        let shown = render_latex(&doc, &SectionVisibility::default());
        assert!(!shown.contains("Awards"));
    }

    #[test]
    fn test_render_latex_drops_hidden_builtin_sections() {
        let visible = SectionVisibility {
            projects: false,
            skills: false,
            ..Default::default()
        };
        let out = render_latex(&Document::sample(), &visible);
        assert!(!out.contains("\\section{Projects}"));
        assert!(!out.contains("\\section{Skills}"));
        assert!(out.contains("\\section{Experience}"));
    }

    #[test]
    fn test_render_latex_all_visible_matches_serialize_without_hidden() {
        let doc = Document::sample();
        assert_eq!(
            render_latex(&doc, &SectionVisibility::default()),
            serialize(&doc)
        );
    }

    #[test]
    fn test_custom_sections_follow_skills() {
        let mut doc = Document::sample();
        doc.custom_sections.push(CustomSection {
            title: "Talks".into(),
            ..Default::default()
        });
        let out = serialize(&doc);
        assert!(out.find("\\section{Skills}").unwrap() < out.find("\\section{Talks}").unwrap());
    }
}
