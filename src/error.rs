// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(ConfigError),
    /// The navigation entry was submitted without a URL.
    EmptyUrl,
    /// A recorded touch trace could not be parsed.
    Trace { line: usize, message: String },
}

/// Configuration problems reported to the caller instead of degrading silently.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Surface width or height is zero or negative; the horizontal midpoint
    /// used for seek direction would be meaningless.
    InvalidGeometry { width: i32, height: i32 },

    /// A gesture threshold is not a positive, finite number.
    InvalidThreshold { name: &'static str, value: f32 },

    /// The settings file could not be parsed or serialized.
    Parse(String),
}

impl ConfigError {
    /// Returns a stable message key for this error, suitable for lookups in
    /// a host application's string tables.
    pub fn message_key(&self) -> &'static str {
        match self {
            ConfigError::InvalidGeometry { .. } => "error-config-invalid-geometry",
            ConfigError::InvalidThreshold { .. } => "error-config-invalid-threshold",
            ConfigError::Parse(_) => "error-config-parse",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidGeometry { width, height } => {
                write!(f, "Invalid surface geometry: {}x{}", width, height)
            }
            ConfigError::InvalidThreshold { name, value } => {
                write!(f, "Invalid gesture threshold {}: {}", name, value)
            }
            ConfigError::Parse(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::EmptyUrl => write!(f, "Please enter video url"),
            Error::Trace { line, message } => write!(f, "Trace Error (line {}): {}", line, message),
        }
    }
}

impl std::error::Error for Error {}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(ConfigError::Parse(err.to_string()))
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(ConfigError::Parse(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk full".into());
        assert_eq!(format!("{}", err), "I/O Error: disk full");
    }

    #[test]
    fn display_formats_geometry_error() {
        let err = Error::from(ConfigError::InvalidGeometry {
            width: 0,
            height: 720,
        });
        assert_eq!(
            format!("{}", err),
            "Config Error: Invalid surface geometry: 0x720"
        );
    }

    #[test]
    fn empty_url_matches_entry_prompt() {
        assert_eq!(Error::EmptyUrl.to_string(), "Please enter video url");
    }

    #[test]
    fn from_io_error_maps_to_io_variant() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        match Error::from(io_err) {
            Error::Io(message) => assert!(message.contains("missing")),
            other => panic!("expected Io variant, got {:?}", other),
        }
    }

    #[test]
    fn from_toml_error_maps_to_parse_config_error() {
        let toml_err = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        match Error::from(toml_err) {
            Error::Config(ConfigError::Parse(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config(Parse), got {:?}", other),
        }
    }

    #[test]
    fn message_keys_are_distinct() {
        let keys = [
            ConfigError::InvalidGeometry {
                width: 0,
                height: 0,
            }
            .message_key(),
            ConfigError::InvalidThreshold {
                name: "swipe_distance_px",
                value: -1.0,
            }
            .message_key(),
            ConfigError::Parse(String::new()).message_key(),
        ];
        assert_ne!(keys[0], keys[1]);
        assert_ne!(keys[1], keys[2]);
        assert_ne!(keys[0], keys[2]);
    }
}
