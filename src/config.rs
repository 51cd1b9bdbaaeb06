//! Report configuration: output path, page geometry, and document title,
//! collected into one structure handed to the builder at construction time.

use std::path::{Path, PathBuf};

use genpdf::{Margins, PaperSize};

/// Default file the report is written to, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "전투_UI_데이터_기획서.pdf";

/// Fixed document metadata title.
pub const DOCUMENT_TITLE: &str = "전투 UI 데이터 기획서";

/// Page geometry and output location for a report run. Immutable once handed
/// to the builder.
#[derive(Clone, Debug)]
pub struct ReportConfig {
    /// Path the rendered PDF is written to; an existing file is overwritten.
    /// The parent directory must already exist.
    pub output_path: PathBuf,
    pub paper_size: PaperSize,
    pub margin_top_mm: f64,
    pub margin_right_mm: f64,
    pub margin_bottom_mm: f64,
    pub margin_left_mm: f64,
    /// Title embedded in the PDF metadata.
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            paper_size: PaperSize::A4,
            margin_top_mm: 20.0,
            margin_right_mm: 15.0,
            margin_bottom_mm: 20.0,
            margin_left_mm: 15.0,
            title: DOCUMENT_TITLE.to_owned(),
        }
    }
}

impl ReportConfig {
    /// Replaces the output path and returns the updated configuration.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Returns the configured output path.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Returns the page margins as `genpdf` margins.
    pub fn margins(&self) -> Margins {
        Margins::trbl(
            self.margin_top_mm,
            self.margin_right_mm,
            self.margin_bottom_mm,
            self.margin_left_mm,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_path_is_relative() {
        let config = ReportConfig::default();
        assert!(config.output_path().is_relative());
    }

    #[test]
    fn with_output_path_overrides_default() {
        let config = ReportConfig::default().with_output_path("out/report.pdf");
        assert_eq!(config.output_path(), Path::new("out/report.pdf"));
    }
}
