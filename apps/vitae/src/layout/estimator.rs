//! Reference render surface: estimates the preview's rendered height from the
//! document and the user's layout settings, without a browser.
//!
//! The model is an A4 page at 96 DPI with an 11pt base font. Text is
//! word-wrapped with the static width tables in `font_metrics`; everything
//! else is a fixed block height scaled by the active density profile.

use crate::latex::template::{EntryLines, LatexEntry};
use crate::layout::density::{DensityParams, DensityProfile};
use crate::layout::fitting::RenderSurface;
use crate::layout::font_metrics::FontMetrics;
use crate::models::document::{non_blank, Document, Header};
use crate::models::settings::LayoutSettings;

const PAGE_WIDTH_PX: f32 = 794.0;
const PX_PER_MM: f32 = 96.0 / 25.4;
/// 11pt at 96 DPI.
const BASE_FONT_PX: f32 = 11.0 * 96.0 / 72.0;
const REM_PX: f32 = 16.0;

const NAME_SCALE: f32 = 1.8;
const SECTION_TITLE_SCALE: f32 = 1.15;
const SECTION_RULE_PX: f32 = 6.0;
const ENTRY_GAP_PX: f32 = 8.0;
const BULLET_INDENT_EM: f32 = 1.5;
const SKILL_LABEL_PX: f32 = 128.0;

/// Estimates the rendered height of one document under one set of settings.
pub struct HeightEstimator<'a> {
    document: &'a Document,
    settings: &'a LayoutSettings,
}

/// Per-density derived dimensions, all in px.
struct Frame {
    metrics: FontMetrics,
    font_px: f32,
    line_px: f32,
    text_width_px: f32,
    section_gap_px: f32,
    entry_gap_px: f32,
}

impl Frame {
    fn new(settings: &LayoutSettings, params: DensityParams) -> Self {
        let font_px = BASE_FONT_PX * params.font_scale;
        let horizontal_margins = (settings.margins.left + settings.margins.right) * PX_PER_MM;
        Frame {
            metrics: FontMetrics::new(settings.font, settings.letter_spacing),
            font_px,
            line_px: font_px * settings.line_height * params.line_height_scale,
            text_width_px: (PAGE_WIDTH_PX - horizontal_margins).max(font_px),
            section_gap_px: settings.section_spacing * REM_PX * params.gap_scale,
            entry_gap_px: ENTRY_GAP_PX * params.gap_scale,
        }
    }

    /// Height of `text` wrapped in a column `width_px` wide.
    fn paragraph(&self, text: &str, width_px: f32) -> f32 {
        let lines = self.metrics.estimated_lines(text, width_px / self.font_px);
        lines as f32 * self.line_px
    }

    fn header(&self, header: &Header) -> f32 {
        let mut contact = vec![header.email.as_str()];
        contact.extend(non_blank(&header.phone));
        contact.extend(non_blank(&header.linkedin));
        contact.push(header.location.as_str());
        contact.extend(non_blank(&header.portfolio));
        let contact = contact
            .into_iter()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" | ");

        self.line_px * NAME_SCALE
            + self.paragraph(&contact, self.text_width_px)
            + self.section_gap_px
    }

    fn section(&self, body_px: f32) -> f32 {
        self.line_px * SECTION_TITLE_SCALE + SECTION_RULE_PX + body_px + self.section_gap_px
    }

    fn entry(&self, entry: EntryLines<'_>) -> f32 {
        let heading_lines = if entry.subheading.is_some_and(|s| !s.trim().is_empty()) {
            2.0
        } else {
            1.0
        };
        let bullet_width = self.text_width_px - BULLET_INDENT_EM * self.font_px;
        let bullets: f32 = entry
            .bullets
            .iter()
            .map(|b| self.paragraph(b, bullet_width).max(self.line_px))
            .sum();
        heading_lines * self.line_px + bullets + self.entry_gap_px
    }

    fn entries<E: LatexEntry>(&self, entries: &[E]) -> f32 {
        entries.iter().map(|e| self.entry(e.lines())).sum()
    }
}

impl<'a> HeightEstimator<'a> {
    pub fn new(document: &'a Document, settings: &'a LayoutSettings) -> Self {
        HeightEstimator { document, settings }
    }

    /// Total page height in px, margins included, at `density`.
    pub fn estimate(&self, density: DensityProfile) -> f64 {
        let settings = self.settings;
        let doc = self.document;
        let visible = &settings.visible_sections;
        let frame = Frame::new(settings, density.params());

        let mut height = (settings.margins.top + settings.margins.bottom) * PX_PER_MM;
        height += frame.header(&doc.header);

        if visible.summary {
            height += frame.section(frame.paragraph(&doc.summary, frame.text_width_px));
        }
        if visible.experience {
            height += frame.section(frame.entries(&doc.experience));
        }
        if visible.projects {
            height += frame.section(frame.entries(&doc.projects));
        }
        if visible.education {
            height += frame.section(frame.entries(&doc.education));
        }
        if visible.skills {
            let row_width = frame.text_width_px - SKILL_LABEL_PX;
            let rows: f32 = doc
                .skills
                .non_empty()
                .map(|(_, items)| frame.paragraph(&items.join(", "), row_width).max(frame.line_px))
                .sum();
            height += frame.section(rows);
        }
        for custom in doc.custom_sections.iter().filter(|s| s.visible) {
            height += frame.section(frame.entries(&custom.items));
        }

        f64::from(height)
    }
}

impl RenderSurface for HeightEstimator<'_> {
    fn render(&mut self, density: DensityProfile) -> f64 {
        self.estimate(density)
    }
}
