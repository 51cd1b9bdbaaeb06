//! Custom element implementations built on top of `genpdf` primitives.
//!
//! This module adds the styled table element that carries the report's visual
//! identity (colored header row, striped body rows, thin grid and heavy outer
//! frame) and a millimetre-based vertical spacer. Both implement
//! [`genpdf::Element`] directly so they participate in the automatic
//! pagination of the document.
//!
//! The rendering layer exposes stroked hairlines only, so solid areas are
//! built from closely spaced horizontal strokes and the heavy table frame
//! from a few strokes drawn at small insets.

use genpdf::error::{Error, ErrorKind};
use genpdf::fonts::FontCache;
use genpdf::style::{Color, Style, StyledString};
use genpdf::{render, Alignment, Context, Element, Mm, Position, RenderResult, Size};

use crate::model::TableSpec;

// must stay below the default 1pt stroke width so adjacent strokes overlap
// into a solid area
const FILL_STROKE_SPACING_MM: f64 = 0.25;

// insets of the strokes that make up the heavy outer frame
const FRAME_STROKE_INSETS_MM: [f64; 3] = [0.0, 0.15, 0.3];

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

fn color_style(color: Color) -> Style {
    Style::new().with_color(color)
}

/// Vertical offsets, relative to the top of a filled area of the given
/// height, at which strokes are drawn to cover it.
fn fill_stroke_offsets(height: Mm) -> Vec<Mm> {
    let step = mm_from_f64(FILL_STROKE_SPACING_MM);
    let mut offsets = Vec::new();
    let mut offset = Mm::default();
    while offset < height {
        offsets.push(offset);
        offset += step;
    }
    offsets.push(height);
    offsets
}

/// Paints a solid rectangle between `x0` and `x1` as a stack of horizontal
/// strokes.
fn fill_rect(area: &render::Area<'_>, x0: Mm, x1: Mm, y: Mm, height: Mm, color: Color) {
    let style = color_style(color);
    for offset in fill_stroke_offsets(height) {
        area.draw_line(
            vec![Position::new(x0, y + offset), Position::new(x1, y + offset)],
            style,
        );
    }
}

/// A fixed vertical gap between outline blocks.
///
/// Unlike [`genpdf::elements::Break`], which is measured in lines of the
/// current font, this spacer is measured in millimetres. A spacer that does
/// not fully fit at the bottom of a page is truncated rather than carried
/// over to the next page.
pub struct VerticalSpace {
    height: Mm,
}

impl VerticalSpace {
    /// Creates a spacer of the given height in millimetres.
    pub fn new(height_mm: f64) -> Self {
        Self {
            height: mm_from_f64(height_mm),
        }
    }
}

impl Element for VerticalSpace {
    fn render(
        &mut self,
        _context: &Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();
        let available = area.size().height;
        let height = if self.height > available {
            available
        } else {
            self.height
        };
        result.size = Size::new(0, height);
        Ok(result)
    }
}

/// Measured lines of a single cell, ready to be painted.
struct CellLayout {
    lines: Vec<String>,
    line_height: Mm,
}

/// A fully measured table row.
struct RowLayout {
    cells: Vec<CellLayout>,
    height: Mm,
}

/// A styled table rendered from a [`TableSpec`].
///
/// The element paints, per row: the cell backgrounds (header color, patch
/// override, or alternating stripe), the wrapped and aligned cell text, and a
/// thin horizontal grid line. Vertical grid lines and the optional heavy
/// frame are drawn once per rendered fragment. When a table does not fit on
/// the current page it reports `has_more` and continues on the next page,
/// repeating the header row at the top of every fragment.
pub struct StyledTable {
    spec: TableSpec,
    next_row: usize,
    stalled: bool,
}

impl StyledTable {
    /// Creates a new table element for the given specification.
    pub fn new(spec: TableSpec) -> Self {
        Self {
            spec,
            // body rows start at index 1; row 0 is the header
            next_row: 1,
            stalled: false,
        }
    }

    fn total_width(&self) -> Mm {
        mm_from_f64(
            self.spec
                .columns()
                .iter()
                .map(|column| column.width_mm())
                .sum(),
        )
    }

    fn column_offset(&self, index: usize) -> Mm {
        mm_from_f64(
            self.spec.columns()[..index]
                .iter()
                .map(|column| column.width_mm())
                .sum(),
        )
    }

    fn row_cells(&self, row: usize) -> &[String] {
        if row == 0 {
            self.spec.header()
        } else {
            &self.spec.rows()[row - 1]
        }
    }

    fn vertical_padding(&self, row: usize) -> Mm {
        if row == 0 {
            mm_from_f64(self.spec.header_padding_mm())
        } else {
            mm_from_f64(self.spec.cell_padding_mm())
        }
    }

    /// Text attributes of a cell before merging with the inherited style.
    fn cell_style(&self, row: usize, column: usize) -> Style {
        let mut style = Style::new();
        if row == 0 {
            style.set_font_size(self.spec.header_font_size());
            style.set_color(self.spec.header_text_color());
            if self.spec.header_bold() {
                style.set_bold();
            }
        } else {
            style.set_font_size(self.spec.font_size());
        }

        if let Some(patch) = self.spec.patch_at(row, column) {
            if let Some(color) = patch.text_color() {
                style.set_color(color);
            }
            if patch.is_bold() {
                style.set_bold();
            }
        }

        style
    }

    fn cell_alignment(&self, row: usize, column: usize) -> Alignment {
        if row == 0 && self.spec.center_header() {
            Alignment::Center
        } else {
            self.spec.columns()[column].alignment()
        }
    }

    fn cell_background(&self, row: usize, column: usize) -> Option<Color> {
        if let Some(patch) = self.spec.patch_at(row, column) {
            if let Some(color) = patch.background() {
                return Some(color);
            }
        }
        if row == 0 {
            Some(self.spec.header_background())
        } else {
            self.spec
                .stripes()
                .map(|stripes| stripes[(row - 1) % 2])
        }
    }

    fn grid_style(&self) -> Style {
        color_style(self.spec.grid_color())
    }

    fn measure_row(&self, row: usize, base: Style, font_cache: &FontCache) -> RowLayout {
        let vpad = self.vertical_padding(row);
        let hpad = mm_from_f64(self.spec.horizontal_padding_mm());
        let mut cells = Vec::with_capacity(self.spec.columns().len());
        let mut height = Mm::default();

        for (column, text) in self.row_cells(row).iter().enumerate() {
            let style = base.and(self.cell_style(row, column));
            let width = mm_from_f64(self.spec.columns()[column].width_mm()) - hpad - hpad;
            let lines = wrap_text(text, style, width, font_cache);
            let line_height = style.line_height(font_cache);
            let cell_height = line_height * lines.len() as f64 + vpad + vpad;
            height = height.max(cell_height);
            cells.push(CellLayout { lines, line_height });
        }

        RowLayout { cells, height }
    }

    fn paint_row(
        &self,
        area: &render::Area<'_>,
        y: Mm,
        row: usize,
        layout: &RowLayout,
        base: Style,
        font_cache: &FontCache,
    ) -> Result<(), Error> {
        let hpad = mm_from_f64(self.spec.horizontal_padding_mm());

        // backgrounds first so text and grid lines stay on top
        for (column, spec_column) in self.spec.columns().iter().enumerate() {
            if let Some(color) = self.cell_background(row, column) {
                let x0 = self.column_offset(column);
                let x1 = x0 + mm_from_f64(spec_column.width_mm());
                fill_rect(area, x0, x1, y, layout.height, color);
            }
        }

        for (column, cell) in layout.cells.iter().enumerate() {
            let style = base.and(self.cell_style(row, column));
            let alignment = self.cell_alignment(row, column);
            let x0 = self.column_offset(column) + hpad;
            let inner_width = mm_from_f64(self.spec.columns()[column].width_mm()) - hpad - hpad;

            // vertically centered within the row
            let text_height = cell.line_height * cell.lines.len() as f64;
            let mut line_y = y + (layout.height - text_height) / 2.0;

            for line in &cell.lines {
                let line_width = styled_width(line, style, font_cache);
                let x = match alignment {
                    Alignment::Left => x0,
                    Alignment::Center => x0 + (inner_width - line_width) / 2.0,
                    Alignment::Right => x0 + inner_width - line_width,
                };

                if let Some(mut section) =
                    area.text_section(font_cache, Position::new(x, line_y), style)
                {
                    section.print_str(line, style)?;
                } else {
                    return Err(Error::new(
                        "table cell text exceeds the measured row area",
                        ErrorKind::InvalidData,
                    ));
                }
                line_y += cell.line_height;
            }
        }

        // horizontal grid line under the row; the header also closes its top
        let total = self.total_width();
        if row == 0 {
            area.draw_line(
                vec![Position::new(0, y), Position::new(total, y)],
                self.grid_style(),
            );
        }
        area.draw_line(
            vec![
                Position::new(0, y + layout.height),
                Position::new(total, y + layout.height),
            ],
            self.grid_style(),
        );

        Ok(())
    }

    fn paint_vertical_lines(&self, area: &render::Area<'_>, height: Mm) {
        let mut x = Mm::default();
        for column in self.spec.columns() {
            area.draw_line(
                vec![Position::new(x, 0), Position::new(x, height)],
                self.grid_style(),
            );
            x += mm_from_f64(column.width_mm());
        }
        area.draw_line(
            vec![Position::new(x, 0), Position::new(x, height)],
            self.grid_style(),
        );
    }

    fn paint_frame(&self, area: &render::Area<'_>, height: Mm, color: Color) {
        let total = self.total_width();
        let style = color_style(color);
        for inset_mm in FRAME_STROKE_INSETS_MM {
            let inset = mm_from_f64(inset_mm);
            area.draw_line(
                vec![
                    Position::new(inset, inset),
                    Position::new(total - inset, inset),
                    Position::new(total - inset, height - inset),
                    Position::new(inset, height - inset),
                    Position::new(inset, inset),
                ],
                style,
            );
        }
    }
}

impl Element for StyledTable {
    fn render(
        &mut self,
        context: &Context,
        area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();
        let font_cache = &context.font_cache;
        let body_rows = self.spec.rows().len();

        if self.next_row > body_rows {
            return Ok(result);
        }

        // the header repeats at the top of every fragment; defer the whole
        // fragment when the header plus the next body row would not fit, so a
        // page never ends with an orphaned header
        let header_layout = self.measure_row(0, style, font_cache);
        let first_body_layout = self.measure_row(self.next_row, style, font_cache);
        let needed = header_layout.height + first_body_layout.height;
        if needed > area.size().height {
            if self.stalled {
                return Err(Error::new(
                    "table row does not fit on an empty page",
                    ErrorKind::PageSizeExceeded,
                ));
            }
            self.stalled = true;
            result.has_more = true;
            return Ok(result);
        }
        self.stalled = false;

        let mut y = Mm::default();
        self.paint_row(&area, y, 0, &header_layout, style, font_cache)?;
        y += header_layout.height;

        let mut fragment_complete = true;
        while self.next_row <= body_rows {
            let layout = self.measure_row(self.next_row, style, font_cache);
            if y + layout.height > area.size().height {
                fragment_complete = false;
                break;
            }
            self.paint_row(&area, y, self.next_row, &layout, style, font_cache)?;
            y += layout.height;
            self.next_row += 1;
        }

        self.paint_vertical_lines(&area, y);
        if let Some(color) = self.spec.frame_color() {
            self.paint_frame(&area, y, color);
        }

        result.has_more = !fragment_complete;
        result.size = Size::new(self.total_width(), y);
        Ok(result)
    }
}

fn styled_width(text: &str, style: Style, font_cache: &FontCache) -> Mm {
    StyledString::new(text.to_owned(), style).width(font_cache)
}

/// Greedily wraps `text` into lines no wider than `width`.
///
/// Words are split on whitespace; a single word wider than the cell is broken
/// at character level so narrow columns cannot overflow their grid lines.
fn wrap_text(text: &str, style: Style, width: Mm, font_cache: &FontCache) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_owned()
        } else {
            format!("{} {}", current, word)
        };

        if styled_width(&candidate, style, font_cache) <= width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if styled_width(word, style, font_cache) <= width {
                current = word.to_owned();
            } else {
                current = break_long_word(word, style, width, font_cache, &mut lines);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Breaks a word wider than the available width at character boundaries,
/// pushing the full lines and returning the trailing piece.
fn break_long_word(
    word: &str,
    style: Style,
    width: Mm,
    font_cache: &FontCache,
    lines: &mut Vec<String>,
) -> String {
    let mut piece = String::new();
    for ch in word.chars() {
        let mut attempt = piece.clone();
        attempt.push(ch);
        if !piece.is_empty() && styled_width(&attempt, style, font_cache) > width {
            lines.push(std::mem::take(&mut piece));
            piece.push(ch);
        } else {
            piece = attempt;
        }
    }
    piece
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_strokes_cover_the_whole_height() {
        let height = mm_from_f64(7.3);
        let offsets = fill_stroke_offsets(height);

        assert_eq!(offsets.first().copied(), Some(Mm::default()));
        assert_eq!(offsets.last().copied(), Some(height));
    }

    #[test]
    fn fill_stroke_gaps_stay_below_the_stroke_width() {
        // the default stroke width is 1pt, roughly 0.35mm; larger gaps would
        // leave unpainted bands inside cell backgrounds
        let max_gap = mm_from_f64(0.353);
        for height_mm in [0.1, 2.8, 7.3, 40.0] {
            let offsets = fill_stroke_offsets(mm_from_f64(height_mm));
            for pair in offsets.windows(2) {
                assert!(pair[1] - pair[0] <= max_gap);
            }
        }
    }
}
