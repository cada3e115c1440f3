pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod slicer;
pub mod svg;

pub use cli::CliArgs;
pub use error::SliceError;
pub use grid::{Cell, GridDescriptor};
pub use slicer::{ExtractMode, ExtractionReport, select_mode};
pub use svg::{SourceDocument, SvgElement, load_source};
