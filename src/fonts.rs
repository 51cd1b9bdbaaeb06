//! Font loading for the report.
//!
//! The document prefers the Malgun Gothic pair shipped with Windows. When
//! those files are not present the loader silently substitutes the bundled
//! Korean-capable family under `assets/fonts` and the run continues; only the
//! absence of any usable family is an error. Malgun Gothic has no italic faces, so the regular and
//! bold faces also fill the italic slots of the `genpdf` font family.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::Error;
use genpdf::fonts::{FontData, FontFamily};
use log::warn;

/// Name of the preferred typeface family.
pub const PREFERRED_FONT_FAMILY_NAME: &str = "Malgun Gothic";

/// Name of the bundled fallback family.
pub const BUNDLED_FONT_FAMILY_NAME: &str = "NotoSansKR";

const PREFERRED_FONT_FILES: [&str; 2] = ["malgun.ttf", "malgunbd.ttf"];

const BUNDLED_FONT_FILES: [&str; 2] = ["NotoSansKR-Regular.ttf", "NotoSansKR-Bold.ttf"];

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var).and_then(|value| {
        let path = PathBuf::from(value);
        if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        }
    })
}

fn windows_font_directory() -> Option<PathBuf> {
    if let Some(path) = env_path("COMBAT_DOC_WINDOWS_FONTS_DIR") {
        return Some(path);
    }

    #[cfg(windows)]
    {
        for var in ["WINDIR", "SystemRoot"] {
            if let Some(root) = env_path(var) {
                let candidate = root.join("Fonts");
                if candidate.is_dir() {
                    return Some(candidate);
                }
            }
        }
    }

    None
}

fn bundled_font_directory_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = env_path("COMBAT_DOC_FONTS_DIR") {
        candidates.push(path);
    }

    if let Ok(current_exe) = env::current_exe() {
        if let Some(bin_dir) = current_exe.parent() {
            let candidate = bin_dir.join("assets/fonts");
            if !candidates.iter().any(|existing| existing == &candidate) {
                candidates.push(candidate);
            }
        }
    }

    let manifest_candidate = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts");
    if !candidates
        .iter()
        .any(|existing| existing == &manifest_candidate)
    {
        candidates.push(manifest_candidate);
    }

    candidates
}

fn missing_font_files(path: &Path, files: &[&str]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|name| path.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect()
}

fn resolve_bundled_font_directory() -> Result<PathBuf, Error> {
    let mut attempts = Vec::new();

    for candidate in bundled_font_directory_candidates() {
        let exists = candidate.is_dir();
        let missing = missing_font_files(&candidate, &BUNDLED_FONT_FILES);

        if exists && missing.is_empty() {
            return Ok(candidate);
        }

        let reason = if !exists {
            format!("directory missing at {}", candidate.display())
        } else {
            let missing_list = missing
                .iter()
                .map(|path| path.file_name().unwrap_or_default().to_string_lossy())
                .collect::<Vec<_>>()
                .join(", ");
            format!("missing files [{}]", missing_list)
        };

        attempts.push(format!("{} ({})", candidate.display(), reason));
    }

    let summary = if attempts.is_empty() {
        "no search paths were available".to_owned()
    } else {
        attempts.join(", ")
    };

    Err(Error::new(
        format!(
            "Unable to locate bundled font directory. Checked: {}. See assets/fonts/README.md or set COMBAT_DOC_FONTS_DIR.",
            summary
        ),
        io::Error::new(io::ErrorKind::NotFound, "bundled fonts directory not found"),
    ))
}

fn load_font(directory: &Path, file: &str, style: &str) -> Result<FontData, Error> {
    let path = directory.join(file);
    FontData::load(&path, None).map_err(|err| {
        let io_kind = if path.is_file() {
            io::ErrorKind::Other
        } else {
            io::ErrorKind::NotFound
        };
        Error::new(
            format!(
                "Failed to load {} font at {}: {}",
                style,
                path.display(),
                err
            ),
            io::Error::new(io_kind, err.to_string()),
        )
    })
}

fn family_from_pair(directory: &Path, files: &[&str; 2]) -> Result<FontFamily<FontData>, Error> {
    Ok(FontFamily {
        regular: load_font(directory, files[0], "regular")?,
        bold: load_font(directory, files[1], "bold")?,
        italic: load_font(directory, files[0], "italic")?,
        bold_italic: load_font(directory, files[1], "bold italic")?,
    })
}

fn preferred_font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = windows_font_directory().ok_or_else(|| {
        Error::new(
            "Windows font directory not found for the preferred family",
            io::Error::new(io::ErrorKind::NotFound, "windows fonts directory not found"),
        )
    })?;

    family_from_pair(&directory, &PREFERRED_FONT_FILES)
}

fn bundled_font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = resolve_bundled_font_directory()?;
    family_from_pair(&directory, &BUNDLED_FONT_FILES)
}

/// Returns the font family used for the document.
///
/// Tries the preferred Malgun Gothic pair first and substitutes the bundled
/// family on any failure, logging the substitution. A missing preferred
/// typeface is fully recoverable; only a missing fallback aborts the run.
pub fn document_font_family() -> Result<FontFamily<FontData>, Error> {
    match preferred_font_family() {
        Ok(family) => Ok(family),
        Err(err) => {
            warn!(
                "Preferred '{}' fonts unavailable ({}); using bundled '{}' family.",
                PREFERRED_FONT_FAMILY_NAME, err, BUNDLED_FONT_FAMILY_NAME
            );
            bundled_font_family()
        }
    }
}

/// Indicates whether any usable font family can be resolved.
///
/// Used by the rendering tests to skip gracefully on machines without the
/// bundled font assets.
pub fn fonts_available() -> bool {
    document_font_family().is_ok()
}
