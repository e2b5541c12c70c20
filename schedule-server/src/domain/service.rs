//! Liner service identifier type.

use std::fmt;

/// Error returned when constructing an invalid service identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid service: {reason}")]
pub struct InvalidServiceId {
    reason: &'static str,
}

/// An opaque identifier naming one of the carrier's liner services/loops
/// (e.g. "Santana", "Carioca", "Ipanema").
///
/// The set of services in use is a catalog fact, not a structural one: it
/// has changed between catalog revisions and carries no inherent ordering.
/// `Ord` is derived only so services iterate deterministically inside sets.
///
/// The catalog stores canonical capitalization; user-submitted values are
/// compared via [`ServiceId::matches_ignore_case`] so that e.g. "carioca"
/// matches the canonical "Carioca".
///
/// # Examples
///
/// ```
/// use schedule_server::domain::ServiceId;
///
/// let carioca = ServiceId::new("Carioca".to_string()).unwrap();
/// assert_eq!(carioca.as_str(), "Carioca");
/// assert!(carioca.matches_ignore_case("CARIOCA"));
/// assert!(!carioca.matches_ignore_case("Ipanema"));
///
/// // Empty strings are rejected
/// assert!(ServiceId::new("".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceId(String);

impl ServiceId {
    /// Create a new service identifier from a string.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidServiceId> {
        if s.is_empty() {
            return Err(InvalidServiceId {
                reason: "service name cannot be empty",
            });
        }
        Ok(ServiceId(s))
    }

    /// Returns the service name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ServiceId and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Case-insensitive comparison against a user-submitted value.
    ///
    /// The catalog keeps canonical capitalization but must accept values
    /// in arbitrary case from the request boundary.
    pub fn matches_ignore_case(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl fmt::Debug for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceId({})", self.0)
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty string is a valid service name
        #[test]
        fn nonempty_always_valid(s in ".+") {
            prop_assert!(ServiceId::new(s).is_ok());
        }

        /// Roundtrip: new then as_str returns the original
        #[test]
        fn roundtrip(s in ".+") {
            let svc = ServiceId::new(s.clone()).unwrap();
            prop_assert_eq!(svc.as_str(), s.as_str());
        }

        /// matches_ignore_case accepts any ASCII recasing of the name
        #[test]
        fn matches_any_ascii_recasing(s in "[A-Za-z]{1,20}") {
            let svc = ServiceId::new(s.clone()).unwrap();
            prop_assert!(svc.matches_ignore_case(&s.to_ascii_lowercase()));
            prop_assert!(svc.matches_ignore_case(&s.to_ascii_uppercase()));
        }

        /// matches_ignore_case rejects values of different length
        #[test]
        fn different_length_never_matches(s in "[A-Za-z]{1,10}", extra in "[A-Za-z]{1,5}") {
            let svc = ServiceId::new(s.clone()).unwrap();
            let longer = format!("{s}{extra}");
            prop_assert!(!svc.matches_ignore_case(&longer));
        }
    }
}
