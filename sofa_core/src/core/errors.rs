use std::fmt::{self, Display};

/// A central error enum for registry-related errors.
#[derive(Debug)]
pub enum RegistryError {
    /// A cushion name exists in both the store file and the session cache.
    /// Carries every offending name.
    Collision(Vec<String>),
    /// The requested cushion is absent from the merged registry.
    NotFound(String),
    /// The merged registry holds no cushions at all.
    NoCushions,
    /// A store line is not a valid cushion record. `line` is 1-based.
    MalformedLine { line: usize, reason: String },
    IoError(std::io::Error),
}

/// Convert from std::io::Error.
/// Without this, `?` won't work on the store's file operations.
impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> RegistryError {
        RegistryError::IoError(err)
    }
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Collision(names) => {
                let quoted: Vec<String> =
                    names.iter().map(|n| format!("\"{}\"", n)).collect();
                write!(
                    f,
                    "cushion(s) defined in both the store file and the session cache: {}",
                    quoted.join(", ")
                )
            }
            RegistryError::NotFound(name) => {
                write!(f, "cushion \"{}\" not found", name)
            }
            RegistryError::NoCushions => write!(f, "no cushions found"),
            RegistryError::MalformedLine { line, reason } => {
                write!(f, "malformed cushion record on line {}: {}", line, reason)
            }
            RegistryError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for RegistryError {}
