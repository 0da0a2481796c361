//! TOML sequence files.
//!
//! A sequence file is a list of `[[steps]]` tables:
//!
//! ```toml
//! [[steps]]
//! action = "type"
//! text = "hi"
//! duration_ms = 100
//!
//! [[steps]]
//! action = "reset"
//! duration_ms = 50
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Sequence, SequenceError, Step};

#[derive(Debug, Serialize, Deserialize)]
struct SequenceFile {
    steps: Vec<Step>,
}

/// Parse a sequence from TOML text.
///
/// `origin` names the source in error messages (a path or `<inline>`).
pub fn parse_sequence(content: &str, origin: &str) -> Result<Sequence, SequenceError> {
    let file: SequenceFile = toml::from_str(content).map_err(|source| SequenceError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    Sequence::new(file.steps)
}

/// Read and parse a sequence file.
pub fn load_sequence(path: impl AsRef<Path>) -> Result<Sequence, SequenceError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SequenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let sequence = parse_sequence(&content, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), steps = sequence.len(), "Loaded sequence file");
    Ok(sequence)
}

/// Serialize a sequence back into the sequence file format.
pub fn to_toml(sequence: &Sequence) -> Result<String, SequenceError> {
    let file = SequenceFile {
        steps: sequence.steps().to_vec(),
    };
    Ok(toml::to_string_pretty(&file)?)
}
