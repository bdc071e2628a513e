//! Application configuration
//!
//! Reads the `search` section of an application config file:
//!
//! ```json
//! { "search": { "aca:fields": ["cm:name", "cm:title"] } }
//! ```
//!
//! Everything else in the file is ignored.

use ftsq_ast::{FieldList, FtsqError};
use serde::Deserialize;
use serde::de::Error as _;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    search: Option<SearchConfig>,
}

#[derive(Debug, Clone, Deserialize)]
struct SearchConfig {
    #[serde(rename = "aca:fields", default)]
    fields: Option<Vec<String>>,
}

impl AppConfig {
    /// Parse a config document
    ///
    /// # Errors
    ///
    /// Returns `FtsqError::ConfigParse` if the text is not a valid config
    pub fn from_json_str(text: &str) -> Result<Self, FtsqError> {
        Self::parse(text, "<inline>")
    }

    /// Read and parse a config file
    ///
    /// # Errors
    ///
    /// Returns `FtsqError::Config` if the file cannot be read and
    /// `FtsqError::ConfigParse` if its contents are not a valid config
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FtsqError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| FtsqError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::parse(&text, &path.display().to_string())
    }

    fn parse(text: &str, origin: &str) -> Result<Self, FtsqError> {
        let parse_error = |source| FtsqError::ConfigParse {
            origin: origin.to_string(),
            source,
        };

        // The derived impl would also accept the sequence form (`[]`)
        let value: serde_json::Value = serde_json::from_str(text).map_err(parse_error)?;
        if !value.is_object() {
            return Err(parse_error(serde_json::Error::custom(
                "expected a JSON object",
            )));
        }
        serde_json::from_value(value).map_err(parse_error)
    }

    /// Fields each search term is matched against.
    ///
    /// Absent, null or empty `aca:fields` yields the default list.
    #[must_use]
    pub fn search_fields(&self) -> FieldList {
        match self.search.as_ref().and_then(|search| search.fields.as_deref()) {
            Some(fields) => FieldList::new(fields),
            None => {
                tracing::debug!("search.aca:fields not configured, using default fields");
                FieldList::default()
            }
        }
    }
}
