use combat_ui_datasheet::builder::ReportBuilder;
use combat_ui_datasheet::config::ReportConfig;
use combat_ui_datasheet::content::combat_ui_outline;
use combat_ui_datasheet::fonts;
use combat_ui_datasheet::theme::Palette;
use sha2::{Digest, Sha256};

fn report_builder(config: ReportConfig) -> ReportBuilder {
    let palette = Palette::default();
    let outline = combat_ui_outline(&palette);
    ReportBuilder::new(config, outline).with_palette(palette)
}

fn render_report() -> Option<Vec<u8>> {
    if !fonts::fonts_available() {
        return None;
    }

    let bytes = report_builder(ReportConfig::default())
        .render()
        .expect("render report");

    Some(bytes)
}

fn scrub_pdf(bytes: &[u8]) -> Vec<u8> {
    fn scrub_segment(data: &mut [u8], tag: &[u8], terminator: u8) {
        let mut index = 0;
        while index + tag.len() < data.len() {
            if data[index..].starts_with(tag) {
                let mut cursor = index + tag.len();
                while cursor < data.len() {
                    let byte = data[cursor];
                    if byte == terminator {
                        break;
                    }
                    if terminator == b')' {
                        data[cursor] = b'0';
                    } else if !matches!(byte, b'<' | b'>' | b' ' | b'\n' | b'\r' | b'\t') {
                        data[cursor] = b'0';
                    }
                    cursor += 1;
                }
                index = cursor;
            } else {
                index += 1;
            }
        }
    }

    fn scrub_xml(data: &mut [u8], start: &[u8], end: &[u8]) {
        let mut offset = 0;
        while offset + start.len() < data.len() {
            if let Some(start_pos) = data[offset..]
                .windows(start.len())
                .position(|window| window == start)
            {
                let start_index = offset + start_pos + start.len();
                if let Some(end_pos) = data[start_index..]
                    .windows(end.len())
                    .position(|window| window == end)
                {
                    for byte in &mut data[start_index..start_index + end_pos] {
                        if !matches!(*byte, b'<' | b'>' | b'/' | b' ' | b'\n' | b'\r' | b'\t') {
                            *byte = b'0';
                        }
                    }
                    offset = start_index + end_pos + end.len();
                } else {
                    break;
                }
            } else {
                break;
            }
        }
    }

    let mut normalized = bytes.to_vec();
    scrub_segment(&mut normalized, b"/CreationDate(", b')');
    scrub_segment(&mut normalized, b"/ModDate(", b')');
    scrub_segment(&mut normalized, b"/ID[", b']');
    scrub_segment(&mut normalized, b"/Producer(", b')');
    scrub_xml(&mut normalized, b"<xmp:CreateDate>", b"</xmp:CreateDate>");
    scrub_xml(&mut normalized, b"<xmp:ModifyDate>", b"</xmp:ModifyDate>");
    scrub_xml(
        &mut normalized,
        b"<xmp:MetadataDate>",
        b"</xmp:MetadataDate>",
    );
    scrub_xml(
        &mut normalized,
        b"<xmpMM:DocumentID>",
        b"</xmpMM:DocumentID>",
    );
    scrub_xml(
        &mut normalized,
        b"<xmpMM:InstanceID>",
        b"</xmpMM:InstanceID>",
    );
    scrub_xml(&mut normalized, b"<xmpMM:VersionID>", b"</xmpMM:VersionID>");
    normalized
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    let normalized = scrub_pdf(bytes);
    let digest = Sha256::digest(&normalized);
    digest.into()
}

fn page_count(bytes: &[u8]) -> usize {
    // lopdf writes dictionary entries without a separating space; accept both
    // spellings and skip the /Type/Pages tree node
    [b"/Type/Page".as_slice(), b"/Type /Page".as_slice()]
        .into_iter()
        .map(|tag| {
            bytes
                .windows(tag.len() + 1)
                .filter(|window| window.starts_with(tag) && window[tag.len()] != b's')
                .count()
        })
        .sum()
}

#[test]
fn page_counter_ignores_the_page_tree_node() {
    let sample: &[u8] = b"<</Type/Pages/Kids[3 0 R]>> <</Type/Page/Parent 2 0 R>> <</Type /Page>>";
    assert_eq!(page_count(sample), 2);
}

#[test]
fn renders_non_empty_output() {
    let Some(bytes) = render_report() else {
        eprintln!(
            "Skipping renders_non_empty_output: no usable fonts. Set COMBAT_DOC_FONTS_DIR or copy assets/fonts next to the binary."
        );
        return;
    };
    assert!(
        !bytes.is_empty(),
        "rendered PDF should contain at least a header"
    );
}

#[test]
fn rendering_is_deterministic() {
    let Some(bytes_a) = render_report() else {
        eprintln!(
            "Skipping rendering_is_deterministic: no usable fonts. Set COMBAT_DOC_FONTS_DIR or copy assets/fonts next to the binary."
        );
        return;
    };
    let Some(bytes_b) = render_report() else {
        eprintln!(
            "Skipping rendering_is_deterministic: no usable fonts. Set COMBAT_DOC_FONTS_DIR or copy assets/fonts next to the binary."
        );
        return;
    };

    assert_eq!(bytes_a.len(), bytes_b.len(), "PDF sizes should match");

    let hash_a = normalized_hash(&bytes_a);
    let hash_b = normalized_hash(&bytes_b);

    assert_eq!(
        hash_a, hash_b,
        "PDF renders must be deterministic after metadata normalization"
    );
}

#[test]
fn report_spans_multiple_pages() {
    let Some(bytes) = render_report() else {
        eprintln!(
            "Skipping report_spans_multiple_pages: no usable fonts. Set COMBAT_DOC_FONTS_DIR or copy assets/fonts next to the binary."
        );
        return;
    };

    // cover plus seven explicitly page-broken sections plus the break before
    // 9.4 gives a hard floor well below the natural page count
    assert!(
        page_count(&bytes) >= 9,
        "expected at least 9 pages, found {}",
        page_count(&bytes)
    );
}

#[test]
fn write_creates_file_at_configured_path() {
    if !fonts::fonts_available() {
        eprintln!(
            "Skipping write_creates_file_at_configured_path: no usable fonts. Set COMBAT_DOC_FONTS_DIR or copy assets/fonts next to the binary."
        );
        return;
    }

    let dir = tempfile::tempdir().expect("create temp dir");
    let output = dir.path().join("combat_ui.pdf");

    let builder = report_builder(ReportConfig::default().with_output_path(&output));
    assert_eq!(builder.output_path(), output.as_path());

    let written = builder.write().expect("write report");
    assert_eq!(written, output.as_path());
    let metadata = std::fs::metadata(&output).expect("written file exists");
    assert!(metadata.len() > 0, "written PDF should not be empty");
}

#[test]
fn write_fails_when_parent_directory_is_missing() {
    if !fonts::fonts_available() {
        eprintln!(
            "Skipping write_fails_when_parent_directory_is_missing: no usable fonts. Set COMBAT_DOC_FONTS_DIR or copy assets/fonts next to the binary."
        );
        return;
    }

    let dir = tempfile::tempdir().expect("create temp dir");
    let output = dir.path().join("does-not-exist").join("combat_ui.pdf");

    let builder = report_builder(ReportConfig::default().with_output_path(&output));
    assert!(builder.write().is_err());
    assert!(!output.exists(), "no file is created on failure");
}
