//! Loader for RON tuning files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::LocomotionFile;

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

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse locomotion tuning from RON text; `file` is only used in errors.
pub fn parse_locomotion_file(file: &str, contents: &str) -> Result<LocomotionFile, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load `locomotion.ron` from `base_path`.
pub fn load_locomotion_file(base_path: &Path) -> Result<LocomotionFile, ContentLoadError> {
    let path = base_path.join("locomotion.ron");
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(&path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_locomotion_file(&file_name, &contents)
}
