//! Loader for RON/JSON tuning files.

use ron::Options;
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::data::{TUNING_SCHEMA_VERSION, TuningFile};
use super::validation::{ValidationError, validate_tuning};

/// Error type for tuning load failures.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("Failed to load {file}: IO error: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load {file}: Parse error: {message}")]
    Parse { file: String, message: String },

    #[error("Failed to load {file}: unsupported extension (expected .ron or .json)")]
    UnsupportedFormat { file: String },

    #[error("Failed to load {file}: schema version {found}, expected {expected}")]
    SchemaVersion {
        file: String,
        found: u32,
        expected: u32,
    },

    #[error("Failed to load {file}: {} invalid value(s)", .errors.len())]
    Invalid {
        file: String,
        errors: Vec<ValidationError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuningFormat {
    Ron,
    Json,
}

impl TuningFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "ron" => Some(TuningFormat::Ron),
            "json" => Some(TuningFormat::Json),
            _ => None,
        }
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate tuning text. `file` only labels errors.
pub fn parse_tuning(
    contents: &str,
    format: TuningFormat,
    file: &str,
) -> Result<TuningFile, ContentLoadError> {
    let tuning: TuningFile = match format {
        TuningFormat::Ron => ron_options()
            .from_str(contents)
            .map_err(|e| ContentLoadError::Parse {
                file: file.to_string(),
                message: e.to_string(),
            })?,
        TuningFormat::Json => {
            serde_json::from_str(contents).map_err(|e| ContentLoadError::Parse {
                file: file.to_string(),
                message: e.to_string(),
            })?
        }
    };

    if tuning.schema_version != TUNING_SCHEMA_VERSION {
        return Err(ContentLoadError::SchemaVersion {
            file: file.to_string(),
            found: tuning.schema_version,
            expected: TUNING_SCHEMA_VERSION,
        });
    }

    let errors = validate_tuning(&tuning);
    if !errors.is_empty() {
        return Err(ContentLoadError::Invalid {
            file: file.to_string(),
            errors,
        });
    }

    Ok(tuning)
}

/// Load a tuning file, choosing the parser from its extension.
pub fn load_tuning(path: &Path) -> Result<TuningFile, ContentLoadError> {
    let file = path.display().to_string();
    let format = TuningFormat::from_path(path)
        .ok_or_else(|| ContentLoadError::UnsupportedFormat { file: file.clone() })?;
    let contents = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        file: file.clone(),
        source,
    })?;
    parse_tuning(&contents, format, &file)
}
