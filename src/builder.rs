//! Document assembly: converts the fixed content outline into a configured
//! `genpdf::Document` and renders it to bytes or to the configured file.

use std::path::Path;

use genpdf::elements::{PageBreak, Paragraph};
use genpdf::error::Error;
use genpdf::{Element, Margins, SimplePageDecorator};

use crate::config::ReportConfig;
use crate::elements::{StyledTable, VerticalSpace};
use crate::fonts;
use crate::model::{Block, Outline, TextClass};
use crate::theme::{Palette, StyleSheet, TextStyle};

const HEADING_FRAME_PADDING_MM: f64 = 1.8;

/// Builder that turns a [`ReportConfig`] and an [`Outline`] into a rendered
/// PDF. All content is emitted unconditionally in outline order; pagination
/// is left to the rendering engine.
pub struct ReportBuilder {
    config: ReportConfig,
    palette: Palette,
    outline: Outline,
}

impl ReportBuilder {
    /// Creates a builder for the given configuration and outline.
    pub fn new(config: ReportConfig, outline: Outline) -> Self {
        Self {
            config,
            palette: Palette::default(),
            outline,
        }
    }

    /// Replaces the palette and returns the updated builder.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Returns the configured output path.
    pub fn output_path(&self) -> &Path {
        self.config.output_path()
    }

    /// Builds the fully populated `genpdf::Document`.
    pub fn document(&self) -> Result<genpdf::Document, Error> {
        let family = fonts::document_font_family()?;
        let mut document = genpdf::Document::new(family);
        document.set_title(self.config.title.clone());
        document.set_paper_size(self.config.paper_size);
        document.set_font_size(10);

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(self.config.margins());
        document.set_page_decorator(decorator);

        let styles = StyleSheet::new(&self.palette);

        for block in self.outline.cover() {
            push_block(&mut document, block, &styles);
        }

        for section in self.outline.sections() {
            if section.starts_on_new_page() {
                document.push(PageBreak::new());
            }
            push_heading(&mut document, section.title(), &styles);
            for block in section.blocks() {
                push_block(&mut document, block, &styles);
            }
        }

        Ok(document)
    }

    /// Renders the document into an in-memory PDF.
    pub fn render(&self) -> Result<Vec<u8>, Error> {
        let document = self.document()?;
        let mut bytes = Vec::new();
        document.render(&mut bytes)?;
        Ok(bytes)
    }

    /// Renders the document to the configured output path, overwriting any
    /// existing file, and returns the path on success. The parent directory
    /// is not created.
    pub fn write(&self) -> Result<&Path, Error> {
        let document = self.document()?;
        document.render_to_file(self.config.output_path())?;
        Ok(self.config.output_path())
    }
}

fn text_style<'a>(styles: &'a StyleSheet, class: TextClass) -> &'a TextStyle {
    match class {
        TextClass::Title => &styles.title,
        TextClass::Subtitle => &styles.subtitle,
        TextClass::SectionHeading => &styles.section_heading,
        TextClass::SubsectionHeading => &styles.subsection_heading,
        TextClass::Body => &styles.body,
    }
}

fn spacing_margins(style: &TextStyle) -> Margins {
    Margins::trbl(style.space_before, 0.0, style.space_after, 0.0)
}

fn push_block(document: &mut genpdf::Document, block: &Block, styles: &StyleSheet) {
    match block {
        Block::Text { class, content } => match class {
            TextClass::SectionHeading => push_heading(document, content, styles),
            _ => {
                let style = text_style(styles, *class);
                let paragraph = Paragraph::new(content.clone())
                    .aligned(style.alignment)
                    .styled(style.style);
                document.push(paragraph.padded(spacing_margins(style)));
            }
        },
        Block::Spacer(height_mm) => document.push(VerticalSpace::new(*height_mm)),
        Block::Table(spec) => document.push(StyledTable::new(spec.clone())),
        Block::PageBreak => document.push(PageBreak::new()),
    }
}

/// Section headings carry a frame in the primary color. The frame is drawn
/// with the style that cascades into the framed element, so the heading style
/// is applied outside the frame rather than on the paragraph itself.
fn push_heading(document: &mut genpdf::Document, content: &str, styles: &StyleSheet) {
    let style = &styles.section_heading;
    let heading = Paragraph::new(content.to_owned())
        .aligned(style.alignment)
        .padded(Margins::trbl(
            HEADING_FRAME_PADDING_MM,
            HEADING_FRAME_PADDING_MM,
            HEADING_FRAME_PADDING_MM,
            HEADING_FRAME_PADDING_MM,
        ))
        .framed()
        .styled(style.style);
    document.push(heading.padded(spacing_margins(style)));
}
