use crate::error::{FontpackError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One requested font family with its style variants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FontRequest {
    pub family: String,
    #[serde(default)]
    pub variants: Vec<String>,
}

/// Manifest describing the desired install state
///
/// Example `fonts.yaml`:
///
/// ```yaml
/// fonts:
///   - family: "Roboto"
///     variants: ["regular", "700italic"]
/// dir: "./webfonts"
/// stylesheet: "./fonts.css"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub fonts: Vec<FontRequest>,
    pub dir: String,
    pub stylesheet: String,
}

impl Manifest {
    /// Load and validate a manifest from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            FontpackError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;

        let manifest: Self = serde_yaml::from_str(&content)
            .map_err(|e| FontpackError::Config(format!("Failed to parse manifest: {e}")))?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Check required fields; `fonts` may be empty here, the orchestrator
    /// rejects an empty request list before any network work
    fn validate(&self) -> Result<()> {
        if self.dir.is_empty() {
            return Err(FontpackError::Config(
                "`dir` not specified in manifest".to_string(),
            ));
        }
        if self.stylesheet.is_empty() {
            return Err(FontpackError::Config(
                "`stylesheet` not specified in manifest".to_string(),
            ));
        }
        Ok(())
    }
}
