use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SliceError {
    #[error("Failed to read source document '{path}': {source}")]
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse source document '{path}': {source}")]
    SourceParse {
        path: PathBuf,
        source: roxmltree::Error,
    },

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Failed to create output directory '{path}': {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize SVG document: {0}")]
    Serialize(#[from] quick_xml::Error),
}
