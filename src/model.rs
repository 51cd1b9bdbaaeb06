//! Data structures describing the logical content of the report.
//!
//! The types in this module form a declarative model that mirrors the building
//! blocks consumed by the renderer: paragraphs with a named style class,
//! vertical spacers, styled tables, and explicit page breaks, grouped into a
//! cover and an ordered list of sections. The whole outline is constructed in
//! one pass at startup and never mutated afterwards.

use genpdf::style::Color;
use genpdf::Alignment;

use crate::theme::{Palette, WHITE};

/// Named paragraph style classes resolved against the [`crate::theme::StyleSheet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextClass {
    Title,
    Subtitle,
    SectionHeading,
    SubsectionHeading,
    Body,
}

/// Individual content blocks that make up the cover and the sections.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    /// A paragraph rendered with one of the named text styles.
    Text { class: TextClass, content: String },
    /// A fixed vertical gap, in millimetres.
    Spacer(f64),
    /// A styled table.
    Table(TableSpec),
    /// An explicit page break.
    PageBreak,
}

impl Block {
    /// Convenience helper for building a text block.
    pub fn text(class: TextClass, content: impl Into<String>) -> Self {
        Self::Text {
            class,
            content: content.into(),
        }
    }

    /// Convenience helper for a body paragraph.
    pub fn body(content: impl Into<String>) -> Self {
        Self::text(TextClass::Body, content)
    }

    /// Convenience helper for a subsection heading.
    pub fn subsection(content: impl Into<String>) -> Self {
        Self::text(TextClass::SubsectionHeading, content)
    }

    /// Convenience helper for a vertical spacer of the given height.
    pub fn spacer(height_mm: f64) -> Self {
        Self::Spacer(height_mm)
    }

    /// Convenience helper that wraps a table specification.
    pub fn table(spec: TableSpec) -> Self {
        Self::Table(spec)
    }

    /// Convenience helper that yields an explicit page break block.
    pub fn page_break() -> Self {
        Self::PageBreak
    }
}

/// A table column: its fixed width and the horizontal alignment of its body
/// cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Column {
    width_mm: f64,
    alignment: Alignment,
}

impl Column {
    /// Creates a left-aligned column of the given width.
    pub fn left(width_mm: f64) -> Self {
        Self {
            width_mm,
            alignment: Alignment::Left,
        }
    }

    /// Creates a center-aligned column of the given width.
    pub fn centered(width_mm: f64) -> Self {
        Self {
            width_mm,
            alignment: Alignment::Center,
        }
    }

    /// Returns the column width in millimetres.
    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    /// Returns the body-cell alignment of the column.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }
}

/// A styling override for a single cell, addressed by absolute row index
/// (row 0 is the header) and column index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellPatch {
    row: usize,
    column: usize,
    background: Option<Color>,
    text_color: Option<Color>,
    bold: bool,
}

impl CellPatch {
    /// Creates an empty patch for the given cell.
    pub fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            background: None,
            text_color: None,
            bold: false,
        }
    }

    /// Sets the background color and returns the updated patch.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Sets the text color and returns the updated patch.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Marks the cell text as bold and returns the updated patch.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Returns the addressed row (0 is the header row).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the addressed column.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the background override, if any.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Returns the text color override, if any.
    pub fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    /// Returns whether the cell text is forced bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }
}

/// Specification of a styled table: a header row, body rows, fixed column
/// widths, and presentation attributes.
///
/// Defaults match the five-column field tables of the report; the legend,
/// summary, statistics, and info tables override them. The spec does not
/// defend against ragged grids; [`TableSpec::is_rectangular`] exists so tests
/// can check the invariant.
#[derive(Clone, Debug, PartialEq)]
pub struct TableSpec {
    columns: Vec<Column>,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    header_background: Color,
    header_text_color: Color,
    header_bold: bool,
    center_header: bool,
    header_font_size: u8,
    font_size: u8,
    stripes: Option<[Color; 2]>,
    grid_color: Color,
    frame_color: Option<Color>,
    header_padding_mm: f64,
    cell_padding_mm: f64,
    horizontal_padding_mm: f64,
    patches: Vec<CellPatch>,
}

impl TableSpec {
    /// Creates a table with the field-table defaults derived from the palette.
    pub fn new<I, S>(palette: &Palette, columns: Vec<Column>, header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns,
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            header_background: palette.table_header_background,
            header_text_color: WHITE,
            header_bold: true,
            center_header: true,
            header_font_size: 9,
            font_size: 8,
            stripes: Some([WHITE, palette.stripe_background]),
            grid_color: palette.header_background,
            frame_color: Some(palette.secondary),
            header_padding_mm: 2.8,
            cell_padding_mm: 1.8,
            horizontal_padding_mm: 1.4,
            patches: Vec::new(),
        }
    }

    /// Appends a body row and returns the updated spec.
    pub fn with_row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Appends multiple body rows and returns the updated spec.
    pub fn with_rows<R, I, S>(mut self, rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            self.rows.push(row.into_iter().map(Into::into).collect());
        }
        self
    }

    /// Sets the body font size and returns the updated spec.
    pub fn with_font_size(mut self, size: u8) -> Self {
        self.font_size = size;
        self
    }

    /// Sets the header font size and returns the updated spec.
    pub fn with_header_font_size(mut self, size: u8) -> Self {
        self.header_font_size = size;
        self
    }

    /// Controls the bold weight of header cells and returns the updated spec.
    pub fn with_header_bold(mut self, bold: bool) -> Self {
        self.header_bold = bold;
        self
    }

    /// Controls whether header cells are centered regardless of the column
    /// alignment, and returns the updated spec.
    pub fn with_centered_header(mut self, centered: bool) -> Self {
        self.center_header = centered;
        self
    }

    /// Disables the alternating row backgrounds and returns the updated spec.
    pub fn without_stripes(mut self) -> Self {
        self.stripes = None;
        self
    }

    /// Removes the heavy outer frame and returns the updated spec.
    pub fn without_frame(mut self) -> Self {
        self.frame_color = None;
        self
    }

    /// Sets the vertical padding of header cells and returns the updated spec.
    pub fn with_header_padding_mm(mut self, padding: f64) -> Self {
        self.header_padding_mm = padding;
        self
    }

    /// Sets the vertical padding of body cells and returns the updated spec.
    pub fn with_cell_padding_mm(mut self, padding: f64) -> Self {
        self.cell_padding_mm = padding;
        self
    }

    /// Sets the horizontal cell padding and returns the updated spec.
    pub fn with_horizontal_padding_mm(mut self, padding: f64) -> Self {
        self.horizontal_padding_mm = padding;
        self
    }

    /// Adds a per-cell styling override and returns the updated spec.
    pub fn with_patch(mut self, patch: CellPatch) -> Self {
        self.patches.push(patch);
        self
    }

    /// Returns the column specifications.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the header row cells.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Returns the body rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the header background color.
    pub fn header_background(&self) -> Color {
        self.header_background
    }

    /// Returns the header text color.
    pub fn header_text_color(&self) -> Color {
        self.header_text_color
    }

    /// Returns whether header cells are bold.
    pub fn header_bold(&self) -> bool {
        self.header_bold
    }

    /// Returns whether header cells are force-centered.
    pub fn center_header(&self) -> bool {
        self.center_header
    }

    /// Returns the header font size in points.
    pub fn header_font_size(&self) -> u8 {
        self.header_font_size
    }

    /// Returns the body font size in points.
    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    /// Returns the alternating body-row backgrounds, if striping is enabled.
    pub fn stripes(&self) -> Option<[Color; 2]> {
        self.stripes
    }

    /// Returns the thin grid line color.
    pub fn grid_color(&self) -> Color {
        self.grid_color
    }

    /// Returns the heavy outer frame color, if any.
    pub fn frame_color(&self) -> Option<Color> {
        self.frame_color
    }

    /// Returns the vertical padding of header cells in millimetres.
    pub fn header_padding_mm(&self) -> f64 {
        self.header_padding_mm
    }

    /// Returns the vertical padding of body cells in millimetres.
    pub fn cell_padding_mm(&self) -> f64 {
        self.cell_padding_mm
    }

    /// Returns the horizontal cell padding in millimetres.
    pub fn horizontal_padding_mm(&self) -> f64 {
        self.horizontal_padding_mm
    }

    /// Returns the cell patches.
    pub fn patches(&self) -> &[CellPatch] {
        &self.patches
    }

    /// Returns the first patch addressing the given cell, if any.
    pub fn patch_at(&self, row: usize, column: usize) -> Option<&CellPatch> {
        self.patches
            .iter()
            .find(|patch| patch.row == row && patch.column == column)
    }

    /// Returns whether every row has exactly as many cells as the header and
    /// the header as many cells as there are columns.
    pub fn is_rectangular(&self) -> bool {
        self.header.len() == self.columns.len()
            && self.rows.iter().all(|row| row.len() == self.header.len())
    }
}

/// Logical representation of a numbered document section.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    title: String,
    start_on_new_page: bool,
    blocks: Vec<Block>,
}

impl Section {
    /// Creates a new section with the provided title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            start_on_new_page: false,
            blocks: Vec::new(),
        }
    }

    /// Returns the title of the section.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the section begins on a fresh page.
    pub fn starts_on_new_page(&self) -> bool {
        self.start_on_new_page
    }

    /// Returns the blocks contained in the section.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Creates a builder for a section with the given title.
    pub fn builder(title: impl Into<String>) -> SectionBuilder {
        SectionBuilder::new(title)
    }
}

/// Builder for [`Section`] values.
///
/// Callers opt in to starting the section on a fresh page via
/// [`SectionBuilder::start_on_new_page`]; a redundant leading page-break block
/// is dropped in that case so the renderer never emits two breaks in a row.
#[derive(Clone, Debug, Default)]
pub struct SectionBuilder {
    title: String,
    start_on_new_page: bool,
    blocks: Vec<Block>,
}

impl SectionBuilder {
    /// Creates a builder for a section with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Marks the section to start on a new page.
    pub fn start_on_new_page(mut self, start_on_new_page: bool) -> Self {
        self.start_on_new_page = start_on_new_page;
        self
    }

    /// Pushes an additional block into the section.
    pub fn push_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Builds the final section.
    pub fn build(mut self) -> Section {
        if self.start_on_new_page {
            if let Some(Block::PageBreak) = self.blocks.first() {
                self.blocks.remove(0);
            }
        }

        let mut section = Section::new(self.title);
        section.start_on_new_page = self.start_on_new_page;
        section.blocks = self.blocks;
        section
    }
}

/// The fixed, ordered outline of the whole document: cover blocks followed by
/// the sections, traversed top to bottom by the renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outline {
    cover: Vec<Block>,
    sections: Vec<Section>,
}

impl Outline {
    /// Creates an empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cover page blocks.
    pub fn cover(&self) -> &[Block] {
        &self.cover
    }

    /// Returns the document sections in order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Extends the cover with multiple blocks and returns the updated outline.
    pub fn with_cover_blocks<I>(mut self, blocks: I) -> Self
    where
        I: IntoIterator<Item = Block>,
    {
        self.cover.extend(blocks);
        self
    }

    /// Appends a section and returns the updated outline.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Iterates over every table in the outline, cover included.
    pub fn tables(&self) -> impl Iterator<Item = &TableSpec> {
        let section_blocks = self.sections.iter().flat_map(|section| section.blocks());
        self.cover
            .iter()
            .chain(section_blocks)
            .filter_map(|block| match block {
                Block::Table(spec) => Some(spec),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::default()
    }

    #[test]
    fn builder_records_new_page_request() {
        let section = Section::builder("Intro")
            .start_on_new_page(true)
            .push_block(Block::body("text"))
            .build();

        assert!(section.starts_on_new_page());
        assert_eq!(section.blocks().len(), 1);
    }

    #[test]
    fn builder_drops_redundant_leading_page_break() {
        let section = Section::builder("Intro")
            .start_on_new_page(true)
            .push_block(Block::page_break())
            .push_block(Block::body("text"))
            .build();

        assert!(section.starts_on_new_page());
        assert!(!matches!(section.blocks().first(), Some(Block::PageBreak)));
        assert_eq!(section.blocks().len(), 1);
    }

    #[test]
    fn inline_page_breaks_are_preserved() {
        let section = Section::builder("Cards")
            .push_block(Block::body("before"))
            .push_block(Block::page_break())
            .push_block(Block::body("after"))
            .build();

        assert!(matches!(section.blocks()[1], Block::PageBreak));
    }

    #[test]
    fn rectangular_check_catches_ragged_rows() {
        let columns = vec![Column::left(30.0), Column::left(30.0)];
        let good = TableSpec::new(&palette(), columns.clone(), ["a", "b"]).with_row(["1", "2"]);
        assert!(good.is_rectangular());

        let ragged = TableSpec::new(&palette(), columns, ["a", "b"]).with_row(["1"]);
        assert!(!ragged.is_rectangular());
    }

    #[test]
    fn patch_lookup_matches_cell_coordinates() {
        let columns = vec![Column::left(30.0), Column::left(30.0)];
        let spec = TableSpec::new(&palette(), columns, ["a", "b"])
            .with_row(["1", "2"])
            .with_patch(CellPatch::new(1, 0).bold());

        assert!(spec.patch_at(1, 0).is_some());
        assert!(spec.patch_at(1, 1).is_none());
        assert!(spec.patch_at(0, 0).is_none());
    }

    #[test]
    fn outline_iterates_tables_from_cover_and_sections() {
        let columns = vec![Column::left(30.0)];
        let table = TableSpec::new(&palette(), columns, ["a"]);
        let outline = Outline::new()
            .with_cover_blocks([Block::table(table.clone())])
            .with_section(
                Section::builder("One")
                    .push_block(Block::table(table))
                    .build(),
            );

        assert_eq!(outline.tables().count(), 2);
    }
}
