use serde::{Deserialize, Serialize};
use std::fmt;

fn default_port() -> u16 {
    5984
}

/// A named connection preset for a remote document-database server.
///
/// The name itself is the registry key, not part of the record; on disk a
/// line looks like:
/// `{ "name":"cloudant", "user":"u", "pwd":"p", "type":"cloudant" }`
///
/// `kind` (serialized as `type`) stays an un-normalized string: the
/// request-building collaborator, not the registry, enforces that a cushion
/// without a `kind` carries a `base` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cushion {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub pwd: Option<String>,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Only meaningful for self-hosted deployments; hosted kinds carry it
    /// but ignore it downstream.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Cushion {
    fn default() -> Self {
        Self {
            user: None,
            pwd: None,
            base: None,
            kind: None,
            port: default_port(),
        }
    }
}

/// Diagnostic rendering: header line, then one labeled line per field in
/// fixed order. Absent fields render with an empty value.
impl fmt::Display for Cushion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<cushion>")?;
        writeln!(f, "  user: {}", self.user.as_deref().unwrap_or(""))?;
        writeln!(f, "  pwd: {}", self.pwd.as_deref().unwrap_or(""))?;
        writeln!(f, "  base: {}", self.base.as_deref().unwrap_or(""))?;
        writeln!(f, "  type: {}", self.kind.as_deref().unwrap_or(""))?;
        write!(f, "  port: {}", self.port)
    }
}
