mod node;
mod parse;
mod write;

pub use node::{SVG_NAMESPACE, SvgElement, SvgNode};
pub use parse::{SourceDocument, load_source, parse_source};
pub use write::write_document;
