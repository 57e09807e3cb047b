use std::error::Error;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 400;
/// Smallest surface a canvas accepts on either side.
pub const MIN_DIMENSION: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportConfigError {
    InvalidDimension { name: &'static str, value: String },
    TooSmall { width: u32, height: u32 },
    UnexpectedArgument(String),
}

impl fmt::Display for ExportConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { name, value } => {
                write!(f, "{} must be a whole number of pixels, got '{}'", name, value)
            }
            Self::TooSmall { width, height } => write!(
                f,
                "image size {}x{} is too small, both sides must be at least {}",
                width, height, MIN_DIMENSION
            ),
            Self::UnexpectedArgument(arg) => {
                write!(f, "unexpected argument '{}', usage: [output_dir] [width] [height]", arg)
            }
        }
    }
}

impl Error for ExportConfigError {}

/// Where and at what size the batch export writes its frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

fn parse_dimension(name: &'static str, value: String) -> Result<u32, ExportConfigError> {
    value
        .parse()
        .map_err(|_| ExportConfigError::InvalidDimension { name, value })
}

impl ExportConfig {
    pub fn new(
        output_dir: impl Into<PathBuf>,
        width: u32,
        height: u32,
    ) -> Result<Self, ExportConfigError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(ExportConfigError::TooSmall { width, height });
        }

        Ok(Self {
            output_dir: output_dir.into(),
            width,
            height,
        })
    }

    /// Parses `[output_dir] [width] [height]`, each falling back to its default when absent.
    pub fn from_args<I>(args: I) -> Result<Self, ExportConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let defaults = Self::default();

        let output_dir = args.next().map_or(defaults.output_dir, PathBuf::from);
        let width = match args.next() {
            Some(value) => parse_dimension("width", value)?,
            None => defaults.width,
        };
        let height = match args.next() {
            Some(value) => parse_dimension("height", value)?,
            None => defaults.height,
        };

        if let Some(extra) = args.next() {
            return Err(ExportConfigError::UnexpectedArgument(extra));
        }

        Self::new(output_dir, width, height)
    }
}
