//! LaTeX template pieces, one function per document entity.
//!
//! Every piece returns text ending in a newline. Boilerplate is emitted
//! verbatim; anything that came from the document goes through [`escape`].

use crate::latex::escape::escape;
use crate::models::document::{
    non_blank, CustomItem, CustomSection, EducationEntry, ExperienceEntry, Header, ProjectEntry,
    Skills,
};

pub const PREAMBLE: &str = r"\documentclass[a4paper,10pt]{article}
\usepackage[left=0.75in,top=0.6in,right=0.75in,bottom=0.6in]{geometry}
\usepackage{hyperref}
\usepackage{enumitem}
\usepackage{titlesec}
\usepackage{xcolor}

\titleformat{\section}{
  \vspace{-4pt}\scshape\raggedright\large
}{}{0em}{}[\color{black}\titlerule \vspace{-5pt}]

\begin{document}
";

pub const CLOSING: &str = "\\end{document}\n";

/// Placed between consecutive entries of a list section.
pub const ENTRY_SEPARATOR: &str = "\n";
/// Placed between contact details on the header line.
pub const CONTACT_SEPARATOR: &str = " | ";

const ITEMIZE_BEGIN: &str = "\\begin{itemize}[noitemsep,topsep=0pt]\n";
const ITEMIZE_END: &str = "\\end{itemize}\n";
const ENTRY_GAP: &str = "\\vspace{5pt}\n";

// ────────────────────────────────────────────────────────────────────────────
// Entry shape
// ────────────────────────────────────────────────────────────────────────────

/// The two-line heading every bulleted entry is laid out with:
///
/// ```text
/// \noindent \textbf{heading} \hfill heading_aside \\
/// \textit{subheading} \hfill \textit{subheading_aside}
/// ```
///
/// Absent parts drop out together with the markup that joins them.
#[derive(Debug, Clone, Copy)]
pub struct EntryLines<'a> {
    pub heading: &'a str,
    pub heading_aside: Option<&'a str>,
    pub subheading: Option<&'a str>,
    pub subheading_aside: Option<&'a str>,
    pub bullets: &'a [String],
}

/// Maps a document entity onto the shared entry layout.
pub trait LatexEntry {
    fn lines(&self) -> EntryLines<'_>;
}

impl LatexEntry for ExperienceEntry {
    fn lines(&self) -> EntryLines<'_> {
        EntryLines {
            heading: &self.role,
            heading_aside: Some(self.dates.as_str()),
            subheading: Some(self.company.as_str()),
            subheading_aside: Some(self.location.as_str()),
            bullets: &self.bullets,
        }
    }
}

impl LatexEntry for EducationEntry {
    fn lines(&self) -> EntryLines<'_> {
        EntryLines {
            heading: &self.institution,
            heading_aside: Some(self.dates.as_str()),
            subheading: Some(self.degree.as_str()),
            subheading_aside: Some(self.location.as_str()),
            bullets: &self.bullets,
        }
    }
}

impl LatexEntry for ProjectEntry {
    fn lines(&self) -> EntryLines<'_> {
        EntryLines {
            heading: &self.title,
            heading_aside: Some(self.dates.as_str()),
            subheading: Some(self.tech.as_str()),
            subheading_aside: None,
            bullets: &self.bullets,
        }
    }
}

impl LatexEntry for CustomItem {
    fn lines(&self) -> EntryLines<'_> {
        EntryLines {
            heading: &self.title,
            heading_aside: non_blank(&self.date),
            subheading: non_blank(&self.subtitle),
            subheading_aside: None,
            bullets: &self.bullets,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pieces
// ────────────────────────────────────────────────────────────────────────────

/// Name and contact line. Blank parts are left out entirely, so separators
/// only ever sit between two visible details.
pub fn header_block(header: &Header) -> String {
    let mut contact: Vec<&str> = vec![header.email.as_str()];
    contact.extend(non_blank(&header.phone));
    contact.extend(non_blank(&header.linkedin));
    contact.push(header.location.as_str());
    contact.extend(non_blank(&header.portfolio));

    let contact_line = contact
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .map(escape)
        .collect::<Vec<_>>()
        .join(CONTACT_SEPARATOR);

    format!(
        "\\begin{{center}}\n    {{\\Huge \\textbf{{{}}}}} \\\\ \\vspace{{2pt}}\n    {}\n\\end{{center}}\n",
        escape(&header.name),
        contact_line
    )
}

/// A section header followed by an already-rendered body. `title` is
/// boilerplate; escape it first if it came from the user.
pub fn section(title: &str, body: &str) -> String {
    format!("\\section{{{title}}}\n{body}")
}

pub fn summary_body(summary: &str) -> String {
    format!("{}\n", escape(summary))
}

/// Itemized bullets, or nothing at all for an empty list.
pub fn bullet_list(bullets: &[String]) -> String {
    if bullets.is_empty() {
        return String::new();
    }
    let mut out = String::from(ITEMIZE_BEGIN);
    for bullet in bullets {
        out.push_str(&format!("    \\item {}\n", escape(bullet)));
    }
    out.push_str(ITEMIZE_END);
    out
}

pub fn entry_block(lines: EntryLines<'_>) -> String {
    let mut out = format!("\\noindent \\textbf{{{}}}", escape(lines.heading));
    if let Some(aside) = lines.heading_aside {
        out.push_str(&format!(" \\hfill {}", escape(aside)));
    }
    if let Some(sub) = lines.subheading {
        out.push_str(&format!(" \\\\\n\\textit{{{}}}", escape(sub)));
        if let Some(aside) = lines.subheading_aside {
            out.push_str(&format!(" \\hfill \\textit{{{}}}", escape(aside)));
        }
    }
    out.push('\n');
    out.push_str(&bullet_list(lines.bullets));
    out.push_str(ENTRY_GAP);
    out
}

/// Entries in order, joined by [`ENTRY_SEPARATOR`]. Empty for an empty list.
pub fn entry_list<E: LatexEntry>(entries: &[E]) -> String {
    entries
        .iter()
        .map(|e| entry_block(e.lines()))
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}

/// One `\item` per non-empty category; no list wrapper when all are empty.
pub fn skills_body(skills: &Skills) -> String {
    let rows: Vec<String> = skills
        .non_empty()
        .map(|(category, items)| {
            let names = items.iter().map(|s| escape(s)).collect::<Vec<_>>();
            format!(
                "    \\item \\textbf{{{}:}} {}\n",
                category.label(),
                names.join(", ")
            )
        })
        .collect();
    if rows.is_empty() {
        return String::new();
    }
    format!("{ITEMIZE_BEGIN}{}{ITEMIZE_END}", rows.concat())
}

pub fn custom_section(custom: &CustomSection) -> String {
    section(&escape(&custom.title), &entry_list(&custom.items))
}

/// Wraps rendered blocks in the preamble and closing, one blank line apart.
pub fn assemble(blocks: &[String]) -> String {
    format!("{PREAMBLE}\n{}\n{CLOSING}", blocks.join("\n"))
}
