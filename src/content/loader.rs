//! Loader for the RON tuning file.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::TuningFile;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub(crate) fn load_tuning(path: &Path) -> Result<TuningFile, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}
