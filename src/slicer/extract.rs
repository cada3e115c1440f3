use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::{ExtractMode, build_cell};
use crate::error::SliceError;
use crate::grid::GridDescriptor;
use crate::svg::{SourceDocument, load_source, write_document};

/// Result of one extraction run
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    pub mode: ExtractMode,
    pub output_dir: PathBuf,
    /// Written files in row-major cell order
    pub files: Vec<PathBuf>,
}

impl ExtractionReport {
    pub fn count(&self) -> usize {
        self.files.len()
    }

    /// Human-readable completion message
    pub fn summary(&self) -> String {
        let how = match self.mode {
            ExtractMode::Translate => "",
            ExtractMode::Clip => " with clipping",
        };
        format!(
            "Extracted {} characters{} to '{}' directory",
            self.count(),
            how,
            self.output_dir.display()
        )
    }
}

/// Create the output directory (and parents). An existing directory is
/// left as is, including any files already in it.
pub fn ensure_output_directory(path: &Path) -> Result<(), SliceError> {
    fs::create_dir_all(path).map_err(|e| SliceError::OutputDir {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write one cell-local, translated document per grid cell
pub fn extract_by_translation(
    source: &SourceDocument,
    grid: &GridDescriptor,
    output_dir: &Path,
) -> Result<ExtractionReport, SliceError> {
    extract(ExtractMode::Translate, source, grid, output_dir)
}

/// Write one offset-viewBox document per grid cell
pub fn extract_by_clipping(
    source: &SourceDocument,
    grid: &GridDescriptor,
    output_dir: &Path,
) -> Result<ExtractionReport, SliceError> {
    extract(ExtractMode::Clip, source, grid, output_dir)
}

/// Write every cell of `grid` to `output_dir` in row-major order.
///
/// Existing files with the same names are overwritten. The first failed
/// write aborts the run; files written before it stay on disk.
pub fn extract(
    mode: ExtractMode,
    source: &SourceDocument,
    grid: &GridDescriptor,
    output_dir: &Path,
) -> Result<ExtractionReport, SliceError> {
    check_canvas(source, grid);

    let mut files = Vec::with_capacity(grid.cells().len());
    for cell in grid.cells() {
        let document = build_cell(mode, source, grid, &cell);
        let bytes = write_document(&document)?;

        let path = output_dir.join(cell.file_name());
        fs::write(&path, bytes).map_err(|e| SliceError::OutputWrite {
            path: path.clone(),
            source: e,
        })?;
        debug!("Wrote {}", path.display());

        files.push(path);
    }

    info!(
        "Sliced {}x{} grid of {}x{} cells",
        grid.columns(),
        grid.rows(),
        grid.cell_width(),
        grid.cell_height()
    );

    Ok(ExtractionReport {
        mode,
        output_dir: output_dir.to_path_buf(),
        files,
    })
}

/// Create the output directory, parse `input` and extract every cell
pub fn slice_file(
    input: &Path,
    output_dir: &Path,
    grid: &GridDescriptor,
    mode: ExtractMode,
) -> Result<ExtractionReport, SliceError> {
    ensure_output_directory(output_dir)?;
    let source = load_source(input)?;
    extract(mode, &source, grid, output_dir)
}

fn check_canvas(source: &SourceDocument, grid: &GridDescriptor) {
    if !source.root.is_document_root() {
        warn!(
            "Root element is <{}>, not <svg>; slicing anyway",
            source.root.name
        );
    }

    let (grid_width, grid_height) = (grid.canvas_width() as f64, grid.canvas_height() as f64);
    if let Some((width, height)) = source.canvas_size() {
        if width < grid_width || height < grid_height {
            warn!(
                "Canvas {}x{} is smaller than the {}x{} grid",
                width, height, grid_width, grid_height
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::parse_source;
    use std::collections::HashSet;

    const COLORS: [&str; 12] = [
        "#000000", "#111111", "#222222", "#333333", "#444444", "#555555", "#666666", "#777777",
        "#888888", "#999999", "#aaaaaa", "#bbbbbb",
    ];

    fn color(row: u32, col: u32) -> String {
        format!("{}{:02}", &COLORS[col as usize][..5], row)
    }

    /// 192x48 sheet with one opaque rectangle per cell, uniquely colored
    fn spritesheet() -> String {
        let mut svg = String::from(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="192" height="48" viewBox="0 0 192 48">"#,
        );
        for row in 0..3 {
            for col in 0..12 {
                svg.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="16" height="16" fill="{}"/>"#,
                    col * 16,
                    row * 16,
                    color(row, col)
                ));
            }
        }
        svg.push_str("</svg>");
        svg
    }

    fn parse_translate(transform: &str) -> (f64, f64) {
        let inner = transform
            .trim_start_matches("translate(")
            .trim_end_matches(')');
        let (x, y) = inner.split_once(',').unwrap();
        (x.trim().parse().unwrap(), y.trim().parse().unwrap())
    }

    fn number(node: &roxmltree::Node, name: &str) -> f64 {
        node.attribute(name).unwrap().parse().unwrap()
    }

    fn file_names(dir: &Path) -> HashSet<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_translation_spritesheet_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let source = parse_source(&spritesheet()).unwrap();
        let grid = GridDescriptor::default();

        let report = extract_by_translation(&source, &grid, dir.path()).unwrap();

        assert_eq!(report.count(), 36);
        assert!(report.files[0].ends_with("char_00_r0c0.svg"));
        assert!(report.files[35].ends_with("char_35_r2c11.svg"));
        assert_eq!(file_names(dir.path()).len(), 36);

        for cell in grid.cells() {
            let text = fs::read_to_string(dir.path().join(cell.file_name())).unwrap();
            assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));

            let doc = roxmltree::Document::parse(&text).unwrap();
            let root = doc.root_element();
            assert_eq!(root.tag_name().namespace(), Some(crate::svg::SVG_NAMESPACE));
            assert_eq!(root.attribute("viewBox"), Some("0 0 16 16"));

            let group = root.children().find(|n| n.is_element()).unwrap();
            let (dx, dy) = parse_translate(group.attribute("transform").unwrap());

            // Exactly one rectangle lands on the cell's 16x16 frame
            let visible: Vec<_> = group
                .children()
                .filter(|n| n.has_tag_name("rect"))
                .filter(|rect| {
                    number(rect, "x") + dx == 0.0 && number(rect, "y") + dy == 0.0
                })
                .collect();
            assert_eq!(visible.len(), 1, "cell {:?}", cell);
            assert_eq!(
                visible[0].attribute("fill"),
                Some(color(cell.row, cell.col).as_str())
            );
        }
    }

    #[test]
    fn test_translation_marker_lands_in_local_frame() {
        let dir = tempfile::tempdir().unwrap();
        let source = parse_source(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="192" height="48">
                <circle cx="53" cy="37" r="0.5"/>
            </svg>"#,
        )
        .unwrap();
        let grid = GridDescriptor::default();
        // (53, 37) is in row 2, col 3
        let cell = grid.cell(2, 3).unwrap();

        extract_by_translation(&source, &grid, dir.path()).unwrap();

        let text = fs::read_to_string(dir.path().join(cell.file_name())).unwrap();
        let doc = roxmltree::Document::parse(&text).unwrap();
        let group = doc.root_element().children().find(|n| n.is_element()).unwrap();
        let (dx, dy) = parse_translate(group.attribute("transform").unwrap());
        let circle = group.children().find(|n| n.has_tag_name("circle")).unwrap();

        assert_eq!(number(&circle, "cx") + dx, 5.0);
        assert_eq!(number(&circle, "cy") + dy, 5.0);
    }

    #[test]
    fn test_clipping_view_boxes() {
        let dir = tempfile::tempdir().unwrap();
        let source = parse_source(&spritesheet()).unwrap();
        let grid = GridDescriptor::default();

        let report = extract_by_clipping(&source, &grid, dir.path()).unwrap();
        assert_eq!(report.count(), 36);

        for (cell, path) in grid.cells().zip(&report.files) {
            let text = fs::read_to_string(path).unwrap();
            let doc = roxmltree::Document::parse(&text).unwrap();
            let root = doc.root_element();

            assert_eq!(
                root.attribute("viewBox").unwrap(),
                format!("{} {} 16 16", cell.col * 16, cell.row * 16)
            );
            assert_eq!(root.attribute("width"), Some("16"));
            assert_eq!(root.attribute("height"), Some("16"));

            // All content copied verbatim, no wrapper
            let rects: Vec<_> = root.children().filter(|n| n.is_element()).collect();
            assert_eq!(rects.len(), 36);
            assert!(rects.iter().all(|n| n.has_tag_name("rect")));
            assert_eq!(rects[5].attribute("x"), Some("80"));
            assert_eq!(rects[5].attribute("y"), Some("0"));
        }
    }

    #[test]
    fn test_custom_grid_file_count() {
        let dir = tempfile::tempdir().unwrap();
        let source = parse_source(r#"<svg width="40" height="30"><rect/></svg>"#).unwrap();
        let grid = GridDescriptor::new(4, 3, 10, 10).unwrap();

        let report = extract(ExtractMode::Translate, &source, &grid, dir.path()).unwrap();

        assert_eq!(report.count(), 12);
        let names = file_names(dir.path());
        assert_eq!(names.len(), 12);
        assert!(names.contains("char_11_r2c3.svg"));
    }

    #[test]
    fn test_rerun_overwrites_identically() {
        let dir = tempfile::tempdir().unwrap();
        let source = parse_source(&spritesheet()).unwrap();
        let grid = GridDescriptor::default();

        let first = extract_by_translation(&source, &grid, dir.path()).unwrap();
        let before: Vec<_> = first.files.iter().map(|p| fs::read(p).unwrap()).collect();

        let second = extract_by_translation(&source, &grid, dir.path()).unwrap();
        let after: Vec<_> = second.files.iter().map(|p| fs::read(p).unwrap()).collect();

        assert_eq!(before, after);
        assert_eq!(file_names(dir.path()).len(), 36);
    }

    #[test]
    fn test_existing_files_are_kept() {
        let input_dir = tempfile::tempdir().unwrap();
        let input = input_dir.path().join("sheet.svg");
        fs::write(&input, spritesheet()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "keep me").unwrap();
        fs::write(dir.path().join("char_00_r0c0.svg"), "stale").unwrap();

        let report =
            slice_file(&input, dir.path(), &GridDescriptor::default(), ExtractMode::Clip).unwrap();

        assert_eq!(report.count(), 36);
        assert_eq!(fs::read_to_string(dir.path().join("notes.txt")).unwrap(), "keep me");
        let first = fs::read_to_string(dir.path().join("char_00_r0c0.svg")).unwrap();
        assert!(first.starts_with("<?xml"));
        assert_eq!(file_names(dir.path()).len(), 37);
    }

    #[test]
    fn test_write_failure_aborts_remaining_cells() {
        let dir = tempfile::tempdir().unwrap();
        let source = parse_source(&spritesheet()).unwrap();
        let grid = GridDescriptor::default();
        // A directory where cell 5's file should go makes that write fail
        fs::create_dir(dir.path().join("char_05_r0c5.svg")).unwrap();

        let result = extract_by_translation(&source, &grid, dir.path());

        match result {
            Err(SliceError::OutputWrite { path, .. }) => {
                assert!(path.ends_with("char_05_r0c5.svg"));
            }
            other => panic!("expected OutputWrite, got {:?}", other),
        }
        assert!(dir.path().join("char_04_r0c4.svg").is_file());
        assert!(!dir.path().join("char_06_r0c6.svg").exists());
    }

    #[test]
    fn test_ensure_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        ensure_output_directory(&nested).unwrap();
        assert!(nested.is_dir());
        // Already existing is fine
        ensure_output_directory(&nested).unwrap();
    }

    #[test]
    fn test_ensure_output_directory_over_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, "").unwrap();

        let result = ensure_output_directory(&file);
        assert!(matches!(result, Err(SliceError::OutputDir { .. })));
    }

    #[test]
    fn test_slice_file_parse_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.svg");
        fs::write(&input, "<svg><rect></svg>").unwrap();
        let out = dir.path().join("out");

        let result = slice_file(&input, &out, &GridDescriptor::default(), ExtractMode::Translate);

        assert!(matches!(result, Err(SliceError::SourceParse { .. })));
        assert!(file_names(&out).is_empty());
    }

    #[test]
    fn test_summary_messages() {
        let mut report = ExtractionReport {
            mode: ExtractMode::Translate,
            output_dir: PathBuf::from("extracted_characters"),
            files: vec![PathBuf::from("a.svg"); 36],
        };
        assert_eq!(
            report.summary(),
            "Extracted 36 characters to 'extracted_characters' directory"
        );

        report.mode = ExtractMode::Clip;
        report.output_dir = PathBuf::from("extracted_characters_clipped");
        assert_eq!(
            report.summary(),
            "Extracted 36 characters with clipping to 'extracted_characters_clipped' directory"
        );
    }
}
