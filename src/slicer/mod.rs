mod builder;
mod extract;
mod mode;

pub use builder::{build_cell, build_clipped_cell, build_translated_cell};
pub use extract::{
    ExtractionReport, ensure_output_directory, extract, extract_by_clipping,
    extract_by_translation, slice_file,
};
pub use mode::{ExtractMode, prompt_mode, select_mode};
