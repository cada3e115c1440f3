use std::io::{self, BufRead, Write};

use clap::ValueEnum;

/// How cell content is placed into each output document
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ExtractMode {
    /// Move content into a 0,0-origin frame with a translating group
    #[value(name = "translate", alias = "transform")]
    Translate,
    /// Keep absolute coordinates and offset the viewBox to the cell
    #[value(name = "clip", alias = "clipping")]
    Clip,
}

impl ExtractMode {
    /// Output directory used when none is configured
    pub fn default_output_dir(self) -> &'static str {
        match self {
            ExtractMode::Translate => "extracted_characters",
            ExtractMode::Clip => "extracted_characters_clipped",
        }
    }
}

/// Map an interactive answer to a mode.
///
/// Only `"1"` selects translation; every other answer, including empty or
/// unrecognized input, falls back to clipping.
pub fn select_mode(choice: &str) -> ExtractMode {
    if choice.trim() == "1" {
        ExtractMode::Translate
    } else {
        ExtractMode::Clip
    }
}

/// Print the mode menu to `output` and read one answer line from `input`.
///
/// End of input counts as an empty answer.
pub fn prompt_mode(mut input: impl BufRead, mut output: impl Write) -> io::Result<ExtractMode> {
    writeln!(output, "Choose extraction method:")?;
    writeln!(output, "1. Transform method (moves content)")?;
    writeln!(output, "2. Clipping method (changes viewBox)")?;
    write!(output, "Enter 1 or 2: ")?;
    output.flush()?;

    let mut choice = String::new();
    input.read_line(&mut choice)?;

    Ok(select_mode(&choice))
}
