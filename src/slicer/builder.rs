use crate::grid::{Cell, GridDescriptor};
use crate::svg::{SVG_NAMESPACE, SourceDocument, SvgElement};

use super::ExtractMode;

/// Build the output document for one cell in the given mode
pub fn build_cell(
    mode: ExtractMode,
    source: &SourceDocument,
    grid: &GridDescriptor,
    cell: &Cell,
) -> SvgElement {
    match mode {
        ExtractMode::Translate => build_translated_cell(source, grid, cell),
        ExtractMode::Clip => build_clipped_cell(source, grid, cell),
    }
}

/// Cell-sized document whose content is shifted by `(-x, -y)` inside a group
pub fn build_translated_cell(
    source: &SourceDocument,
    grid: &GridDescriptor,
    cell: &Cell,
) -> SvgElement {
    let mut root = cell_root(
        source,
        grid,
        format!("0 0 {} {}", grid.cell_width(), grid.cell_height()),
    );

    let mut group = SvgElement::new("g").with_attribute(
        "transform",
        format!("translate({}, {})", negated(cell.x), negated(cell.y)),
    );
    for element in source.content() {
        group.push_child(element.clone());
    }

    root.push_child(group);
    root
}

/// Cell-sized document viewing the untouched source through an offset viewBox
pub fn build_clipped_cell(
    source: &SourceDocument,
    grid: &GridDescriptor,
    cell: &Cell,
) -> SvgElement {
    let mut root = cell_root(
        source,
        grid,
        format!(
            "{} {} {} {}",
            cell.x,
            cell.y,
            grid.cell_width(),
            grid.cell_height()
        ),
    );

    for element in source.content() {
        root.push_child(element.clone());
    }

    root
}

fn cell_root(source: &SourceDocument, grid: &GridDescriptor, view_box: String) -> SvgElement {
    let mut root = SvgElement::new("svg")
        .with_attribute("xmlns", SVG_NAMESPACE)
        .with_attribute("width", grid.cell_width().to_string())
        .with_attribute("height", grid.cell_height().to_string())
        .with_attribute("viewBox", view_box);
    root.attributes.extend(source.namespaces.iter().cloned());
    root
}

fn negated(value: u64) -> String {
    if value == 0 {
        "0".to_string()
    } else {
        format!("-{}", value)
    }
}
