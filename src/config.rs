//! Rendering and field configuration, passed explicitly to every component that needs it.

use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::error::{DataError, InvalidConfig, UnknownColourScheme};
use crate::file;
use crate::surface::{Colour, Extent};

/// Pitch markings are specified in yards; everything else is in metres.
pub const METRES_PER_YARD: f64 = 0.9144;

pub const DEFAULT_FIELD_LENGTH: f64 = 106.0;
pub const DEFAULT_FIELD_WIDTH: f64 = 68.0;
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
pub const DEFAULT_MARKER_SIZE: f64 = 20.0;
pub const DEFAULT_BORDER: f64 = 3.0;

/// Dimensions of the playing surface in metres. Length runs along the x axis, width along y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldDimen {
    pub length: f64,
    pub width: f64,
}
impl FieldDimen {
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }

    pub fn half_length(&self) -> f64 {
        self.length / 2.0
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }
}

impl Default for FieldDimen {
    fn default() -> Self {
        Self {
            length: DEFAULT_FIELD_LENGTH,
            width: DEFAULT_FIELD_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourScheme {
    #[default]
    Green,
    White,
}
impl ColourScheme {
    pub fn palette(&self) -> Palette {
        match self {
            ColourScheme::Green => Palette {
                background: Colour("mediumseagreen"),
                line: Colour("whitesmoke"),
                spot: Colour("white"),
            },
            ColourScheme::White => Palette {
                background: Colour("white"),
                line: Colour("black"),
                spot: Colour("black"),
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColourScheme::Green => "green",
            ColourScheme::White => "white",
        }
    }
}

impl FromStr for ColourScheme {
    type Err = UnknownColourScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "green" => Ok(ColourScheme::Green),
            "white" => Ok(ColourScheme::White),
            _ => Err(UnknownColourScheme(s.to_string())),
        }
    }
}

impl Display for ColourScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: Colour,
    pub line: Colour,
    pub spot: Colour,
}

/// Everything the pitch renderer needs. Line width and marker size follow plotting conventions:
/// line width in points, marker size as a scatter area in square points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchConfig {
    pub field: FieldDimen,
    pub colour_scheme: ColourScheme,
    pub line_width: f64,
    pub marker_size: f64,
    pub border: f64,
}
impl PitchConfig {
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        let positive = [
            ("field.length", self.field.length),
            ("field.width", self.field.width),
        ];
        for (key, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(InvalidConfig(format!("{key} must be positive, got {value}")));
            }
        }
        let non_negative = [
            ("line_width", self.line_width),
            ("marker_size", self.marker_size),
            ("border", self.border),
        ];
        for (key, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(InvalidConfig(format!("{key} must be non-negative, got {value}")));
            }
        }
        Ok(())
    }

    /// Loads a config from a JSON file; keys that are absent take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let config: PitchConfig = file::read_json(path)?;
        config.validate()?;
        Ok(config)
    }

    /// The visible region of the surface: the field plus the border on every side.
    pub fn extent(&self) -> Extent {
        let x_max = self.field.half_length() + self.border;
        let y_max = self.field.half_width() + self.border;
        Extent {
            x_min: -x_max,
            x_max,
            y_min: -y_max,
            y_max,
        }
    }
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            field: FieldDimen::default(),
            colour_scheme: ColourScheme::default(),
            line_width: DEFAULT_LINE_WIDTH,
            marker_size: DEFAULT_MARKER_SIZE,
            border: DEFAULT_BORDER,
        }
    }
}
