//! Engine configuration (`chromatext.yaml`).
//!
//! ```yaml
//! encoder: ansi
//! rainbow_saturation: 80
//! full_colour: false
//! palette:
//!   - name: ORANGE
//!     hex: "#ff8000"
//!     code: g
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::encode::{EncoderKind, SECTION_SIGN};
use crate::error::{ChromaError, Result};
use crate::pattern::DEFAULT_RAINBOW_SATURATION;
use crate::types::{Colour, LegacyPalette, PaletteEntry};

/// Default config filename looked up in the working directory.
pub const CONFIG_FILENAME: &str = "chromatext.yaml";

/// An extra legacy palette entry as written in config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntryConfig {
    pub name: String,
    pub hex: String,
    pub code: char,
}

/// Engine configuration loaded from chromatext.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Output style encoding.
    pub encoder: EncoderKind,

    /// Marker character for the section encoder.
    pub marker: char,

    /// Saturation percent for rainbow spellings without a parameter.
    pub rainbow_saturation: u8,

    /// Whether consumers support RGB output by default.
    pub full_colour: bool,

    /// Entries appended to the standard 16-colour palette.
    pub palette: Vec<PaletteEntryConfig>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            encoder: EncoderKind::default(),
            marker: SECTION_SIGN,
            rainbow_saturation: DEFAULT_RAINBOW_SATURATION,
            full_colour: true,
            palette: vec![],
        }
    }
}

impl EngineConfig {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ChromaError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if given, else `chromatext.yaml` in `dir` if present,
    /// else defaults. Returns the path actually loaded.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = path {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Ok((Self::load(&candidate)?, Some(candidate)));
        }

        Ok((Self::default(), None))
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| ChromaError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.rainbow_saturation > 100 {
            return Err(ChromaError::Config {
                message: format!("rainbow_saturation {} is out of range", self.rainbow_saturation),
                help: Some("Use a percentage between 0 and 100".to_string()),
            });
        }
        if self.marker.is_ascii_alphanumeric() || self.marker == '#' {
            return Err(ChromaError::Config {
                message: format!("marker {:?} collides with markup or code characters", self.marker),
                help: Some("Use a symbol such as § or &".to_string()),
            });
        }
        for entry in &self.palette {
            if !entry.code.is_ascii_alphanumeric() {
                return Err(ChromaError::Config {
                    message: format!("palette entry {} has code {:?}", entry.name, entry.code),
                    help: Some("Codes must be a single ASCII letter or digit".to_string()),
                });
            }
        }
        Ok(())
    }

    /// The standard palette with configured extras appended.
    pub fn legacy_palette(&self) -> Result<LegacyPalette> {
        let extras = self
            .palette
            .iter()
            .map(|entry| {
                let colour = Colour::from_hex(&entry.hex).map_err(|_| ChromaError::Config {
                    message: format!("palette entry {} has invalid hex {}", entry.name, entry.hex),
                    help: Some("Use #RRGGBB format".to_string()),
                })?;
                Ok(PaletteEntry::new(entry.name.to_uppercase(), colour, entry.code))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(LegacyPalette::standard().with_entries(extras))
    }
}
