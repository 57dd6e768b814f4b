//! Error types.
//!
//! Only configuration and input loading can fail. Infeasibility and budget
//! exhaustion during construction are normal termination and never surface
//! as errors.

/// A run configuration that must not be executed.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io(std::io::Error),
    /// The configuration is not valid JSON or does not match the schema
    /// (unknown algorithm or selector names end up here).
    Parse(serde_json::Error),
    /// A field required by the chosen strategy is absent.
    MissingField {
        section: &'static str,
        field: &'static str,
    },
    /// A field is present but outside its admissible range.
    InvalidValue {
        field: &'static str,
        reason: String,
    },
    /// Both `max-iterations` and `max-no-improvement-iterations` are zero.
    NoIterationLimit,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read configuration: {e}"),
            ConfigError::Parse(e) => write!(f, "malformed configuration: {e}"),
            ConfigError::MissingField { section, field } => {
                write!(f, "missing field `{field}` in `{section}`")
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for `{field}`: {reason}")
            }
            ConfigError::NoIterationLimit => write!(
                f,
                "at least one of `max-iterations` and `max-no-improvement-iterations` must be positive"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

/// A problem instance file that could not be loaded.
#[derive(Debug)]
pub enum InstanceError {
    Io(std::io::Error),
    /// A token could not be parsed.
    Malformed { line: usize, reason: String },
    /// The header announced a different number of elements than the body holds.
    CountMismatch { declared: usize, found: usize },
}

impl std::fmt::Display for InstanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceError::Io(e) => write!(f, "cannot read instance: {e}"),
            InstanceError::Malformed { line, reason } => {
                write!(f, "malformed instance at line {line}: {reason}")
            }
            InstanceError::CountMismatch { declared, found } => write!(
                f,
                "instance declares {declared} elements but contains {found}"
            ),
        }
    }
}

impl std::error::Error for InstanceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InstanceError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InstanceError {
    fn from(e: std::io::Error) -> Self {
        InstanceError::Io(e)
    }
}
