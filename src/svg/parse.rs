use std::fs;
use std::path::Path;

use log::debug;
use roxmltree::{Document, Node, ParsingOptions};

use super::{SvgElement, SvgNode};
use crate::error::SliceError;

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// A parsed spritesheet document
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub root: SvgElement,
    /// Prefixed namespace declarations in scope on the root, as
    /// `("xmlns:prefix", uri)` pairs
    pub namespaces: Vec<(String, String)>,
}

impl SourceDocument {
    /// Direct children of the root that should be copied into each cell.
    ///
    /// Nested `<svg>` roots are skipped so documents are never embedded
    /// inside documents.
    pub fn content(&self) -> impl Iterator<Item = &SvgElement> {
        self.root
            .child_elements()
            .filter(|element| !element.is_document_root())
    }

    /// Canvas size from the root's `width`/`height`, falling back to `viewBox`
    pub fn canvas_size(&self) -> Option<(f64, f64)> {
        let width = self.root.attribute("width").and_then(parse_length);
        let height = self.root.attribute("height").and_then(parse_length);
        if let (Some(w), Some(h)) = (width, height) {
            return Some((w, h));
        }

        let view_box: Vec<f64> = self
            .root
            .attribute("viewBox")?
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect::<Result<_, _>>()
            .ok()?;

        match view_box.as_slice() {
            [_, _, w, h] => Some((*w, *h)),
            _ => None,
        }
    }
}

/// Read and parse a source document from disk
pub fn load_source(path: &Path) -> Result<SourceDocument, SliceError> {
    let text = fs::read_to_string(path).map_err(|e| SliceError::SourceRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let source = parse_source(&text).map_err(|e| SliceError::SourceParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(
        "Parsed {}: <{}> with {} top-level elements",
        path.display(),
        source.root.name,
        source.root.child_elements().count()
    );

    Ok(source)
}

/// Parse a source document from text
pub fn parse_source(text: &str) -> Result<SourceDocument, roxmltree::Error> {
    // Editors commonly emit a DOCTYPE for SVG 1.1
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options)?;
    let root = doc.root_element();

    let namespaces = root
        .namespaces()
        .filter_map(|ns| {
            ns.name()
                .filter(|prefix| *prefix != "xml")
                .map(|prefix| (format!("xmlns:{}", prefix), ns.uri().to_string()))
        })
        .collect();

    Ok(SourceDocument {
        root: convert_element(root),
        namespaces,
    })
}

fn convert_element(node: Node) -> SvgElement {
    let tag = node.tag_name();
    let mut attributes = declared_namespaces(node);
    for attr in node.attributes() {
        attributes.push((
            qualified_name(node, attr.namespace(), attr.name(), false),
            attr.value().to_string(),
        ));
    }

    let children = node
        .children()
        .filter_map(|child| {
            if child.is_element() {
                Some(SvgNode::Element(convert_element(child)))
            } else if child.is_text() {
                child
                    .text()
                    .filter(|text| !text.trim().is_empty())
                    .map(|text| SvgNode::Text(text.to_string()))
            } else {
                None
            }
        })
        .collect();

    SvgElement {
        name: qualified_name(node, tag.namespace(), tag.name(), true),
        namespace: tag.namespace().map(str::to_string),
        attributes,
        children,
    }
}

/// Namespace declarations introduced on this element rather than inherited
fn declared_namespaces(node: Node) -> Vec<(String, String)> {
    let inherited: Vec<(Option<&str>, &str)> = node
        .parent_element()
        .map(|parent| parent.namespaces().map(|ns| (ns.name(), ns.uri())).collect())
        .unwrap_or_default();

    node.namespaces()
        .filter(|ns| ns.name() != Some("xml"))
        .filter(|ns| !inherited.contains(&(ns.name(), ns.uri())))
        .map(|ns| {
            let key = match ns.name() {
                Some(prefix) => format!("xmlns:{}", prefix),
                None => "xmlns".to_string(),
            };
            (key, ns.uri().to_string())
        })
        .collect()
}

/// Rebuild a `prefix:local` name from a resolved namespace.
///
/// Attributes never take the default namespace, so `allow_default` is
/// false for them.
fn qualified_name(node: Node, namespace: Option<&str>, local: &str, allow_default: bool) -> String {
    let Some(uri) = namespace else {
        return local.to_string();
    };
    if uri == XML_NAMESPACE {
        return format!("xml:{}", local);
    }

    let mut prefixed = None;
    for ns in node.namespaces().filter(|ns| ns.uri() == uri) {
        match ns.name() {
            None if allow_default => return local.to_string(),
            Some(prefix) if prefixed.is_none() => prefixed = Some(prefix),
            _ => {}
        }
    }

    match prefixed {
        Some(prefix) => format!("{}:{}", prefix, local),
        None => local.to_string(),
    }
}

fn parse_length(value: &str) -> Option<f64> {
    value.trim().trim_end_matches("px").trim().parse().ok()
}
