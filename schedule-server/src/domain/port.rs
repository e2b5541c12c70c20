//! Port identifier type.

use std::fmt;

/// Error returned when constructing an invalid port identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid port: {reason}")]
pub struct InvalidPort {
    reason: &'static str,
}

/// An opaque, case-sensitive port identifier (e.g. "Shanghai", "Santos").
///
/// Port names are used verbatim throughout the system: no trimming,
/// case-folding, or alias resolution is ever applied. The only validation
/// is that a port name must be non-empty, so any `Port` value is usable
/// as a catalog key by construction.
///
/// # Examples
///
/// ```
/// use schedule_server::domain::Port;
///
/// let santos = Port::new("Santos".to_string()).unwrap();
/// assert_eq!(santos.as_str(), "Santos");
///
/// // Multi-word port names are ordinary values
/// assert!(Port::new("Rio de Janeiro".to_string()).is_ok());
///
/// // Empty strings are rejected
/// assert!(Port::new("".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Port(String);

impl Port {
    /// Create a new port identifier from a string.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidPort> {
        if s.is_empty() {
            return Err(InvalidPort {
                reason: "port name cannot be empty",
            });
        }
        Ok(Port(s))
    }

    /// Returns the port name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the Port and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Port({})", self.0)
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
