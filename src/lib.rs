//! One-shot generator for the combat UI data reference document.
//!
//! The crate renders a fixed Korean design document as a PDF: a cover page
//! with an importance-tier legend, thirteen numbered sections of five-column
//! field tables, a summary of the remaining systems, data statistics, and a
//! document info table. All content is authored in [`content`]; [`model`]
//! holds the declarative outline types, [`theme`] the palette and text
//! styles, [`elements`] the custom table and spacer elements, and [`builder`]
//! assembles and renders the document.
//!
//! ```no_run
//! use combat_ui_datasheet::builder::ReportBuilder;
//! use combat_ui_datasheet::config::ReportConfig;
//! use combat_ui_datasheet::content::combat_ui_outline;
//! use combat_ui_datasheet::theme::Palette;
//!
//! let palette = Palette::default();
//! let outline = combat_ui_outline(&palette);
//! let builder = ReportBuilder::new(ReportConfig::default(), outline);
//! let path = builder.write()?;
//! println!("PDF 생성 완료: {}", path.display());
//! # Ok::<(), genpdf::error::Error>(())
//! ```

pub mod builder;
pub mod config;
pub mod content;
pub mod elements;
pub mod fonts;
pub mod model;
pub mod theme;
