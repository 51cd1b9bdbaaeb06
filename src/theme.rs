//! Fixed presentation constants: the color palette, the importance-tier
//! classification, and the named text styles used throughout the document.

use genpdf::style::{Color, Style};
use genpdf::Alignment;

/// Canonical short label for fields the UI must display.
pub const TIER_REQUIRED: &str = "필수";
/// Canonical short label for fields the UI should display.
pub const TIER_RECOMMENDED: &str = "권장";
/// Canonical short label for fields the UI may display.
pub const TIER_OPTIONAL: &str = "선택";

/// Plain white, used for header text on colored backgrounds.
pub const WHITE: Color = Color::Rgb(255, 255, 255);

fn hex(rgb: u32) -> Color {
    Color::Rgb(
        ((rgb >> 16) & 0xff) as u8,
        ((rgb >> 8) & 0xff) as u8,
        (rgb & 0xff) as u8,
    )
}

/// The "Ocean Depths" color theme shared by all styles and table decorations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Deep navy used for titles and section headings.
    pub primary: Color,
    /// Teal used for highlights and the heavy table frames.
    pub secondary: Color,
    /// Supporting teal tone.
    pub accent: Color,
    /// Seafoam used for thin table grid lines.
    pub header_background: Color,
    /// Teal background of table header rows.
    pub table_header_background: Color,
    /// Cream background of every other body row.
    pub stripe_background: Color,
    /// Highlight color for required-tier legend entries.
    pub required: Color,
    /// Highlight color for recommended-tier legend entries.
    pub recommended: Color,
    /// Highlight color for optional-tier legend entries.
    pub optional: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: hex(0x1a2332),
            secondary: hex(0x2d8b8b),
            accent: hex(0x457b9d),
            header_background: hex(0xa8dadc),
            table_header_background: hex(0x2d8b8b),
            stripe_background: hex(0xf1faee),
            required: hex(0x1a2332),
            recommended: hex(0x2d8b8b),
            optional: hex(0x6c757d),
        }
    }
}

impl Palette {
    /// Returns the highlight color for a tier label, or `None` when the label
    /// does not belong to one of the three canonical tiers.
    pub fn tier_color(&self, label: &str) -> Option<Color> {
        match classify_tier(label) {
            tier if tier == TIER_REQUIRED => Some(self.required),
            tier if tier == TIER_RECOMMENDED => Some(self.recommended),
            tier if tier == TIER_OPTIONAL => Some(self.optional),
            _ => None,
        }
    }
}

/// Maps a free-text importance label to its canonical short label.
///
/// The substrings are tested in fixed priority order (required, recommended,
/// optional). Labels that match none of them are returned unchanged.
pub fn classify_tier(label: &str) -> &str {
    if label.contains(TIER_REQUIRED) {
        TIER_REQUIRED
    } else if label.contains(TIER_RECOMMENDED) {
        TIER_RECOMMENDED
    } else if label.contains(TIER_OPTIONAL) {
        TIER_OPTIONAL
    } else {
        label
    }
}

/// A named paragraph style: text attributes plus alignment and the vertical
/// space (in millimetres) inserted before and after the paragraph.
#[derive(Clone, Copy, Debug)]
pub struct TextStyle {
    pub style: Style,
    pub alignment: Alignment,
    pub space_before: f64,
    pub space_after: f64,
}

impl TextStyle {
    fn new(style: Style, alignment: Alignment, space_before: f64, space_after: f64) -> Self {
        Self {
            style,
            alignment,
            space_before,
            space_after,
        }
    }
}

/// The named text styles of the document, fixed at startup.
#[derive(Clone, Copy, Debug)]
pub struct StyleSheet {
    /// Cover page title.
    pub title: TextStyle,
    /// Cover page subtitle lines.
    pub subtitle: TextStyle,
    /// Numbered section headings.
    pub section_heading: TextStyle,
    /// Numbered subsection headings.
    pub subsection_heading: TextStyle,
    /// Plain body text.
    pub body: TextStyle,
}

impl StyleSheet {
    /// Builds the style set from the palette. Pure function of fixed constants.
    pub fn new(palette: &Palette) -> Self {
        let mut title = Style::new().with_font_size(28).with_color(palette.primary);
        title.set_bold();

        let subtitle = Style::new().with_font_size(12).with_color(palette.secondary);

        let mut section_heading = Style::new().with_font_size(16).with_color(palette.primary);
        section_heading.set_bold();

        let mut subsection_heading = Style::new()
            .with_font_size(13)
            .with_color(palette.secondary);
        subsection_heading.set_bold();

        let body = Style::new().with_font_size(10).with_color(Color::Rgb(0, 0, 0));

        Self {
            title: TextStyle::new(title, Alignment::Center, 17.6, 10.6),
            subtitle: TextStyle::new(subtitle, Alignment::Center, 0.0, 1.8),
            section_heading: TextStyle::new(section_heading, Alignment::Left, 7.1, 3.5),
            subsection_heading: TextStyle::new(subsection_heading, Alignment::Left, 5.3, 2.8),
            body: TextStyle::new(body, Alignment::Left, 1.1, 1.1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_labels_by_substring() {
        assert_eq!(classify_tier("필수"), TIER_REQUIRED);
        assert_eq!(classify_tier("필수 (핵심)"), TIER_REQUIRED);
        assert_eq!(classify_tier("권장 항목"), TIER_RECOMMENDED);
        assert_eq!(classify_tier("선택적으로 표시"), TIER_OPTIONAL);
    }

    #[test]
    fn required_takes_priority_over_later_tiers() {
        assert_eq!(classify_tier("필수/선택"), TIER_REQUIRED);
        assert_eq!(classify_tier("권장 또는 선택"), TIER_RECOMMENDED);
    }

    #[test]
    fn unmatched_labels_pass_through_unchanged() {
        assert_eq!(classify_tier(""), "");
        assert_eq!(classify_tier("총계"), "총계");
        assert_eq!(classify_tier("optional"), "optional");
    }

    #[test]
    fn tier_colors_are_pairwise_distinct() {
        let palette = Palette::default();
        let required = palette.tier_color(TIER_REQUIRED).unwrap();
        let recommended = palette.tier_color(TIER_RECOMMENDED).unwrap();
        let optional = palette.tier_color(TIER_OPTIONAL).unwrap();
        assert_ne!(required, recommended);
        assert_ne!(required, optional);
        assert_ne!(recommended, optional);
    }

    #[test]
    fn non_tier_labels_have_no_color() {
        let palette = Palette::default();
        assert_eq!(palette.tier_color("총계"), None);
        assert_eq!(palette.tier_color(""), None);
    }
}
