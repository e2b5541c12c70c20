//! Lane type: the directed origin→destination port pair.

use std::fmt;

use super::port::{InvalidPort, Port};

/// Error returned when parsing an invalid lane key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid lane key {key:?}: {reason}")]
pub struct InvalidLaneKey {
    key: String,
    reason: &'static str,
}

impl InvalidLaneKey {
    fn new(key: &str, reason: &'static str) -> Self {
        Self {
            key: key.to_string(),
            reason,
        }
    }
}

impl From<(String, InvalidPort)> for InvalidLaneKey {
    fn from((key, _): (String, InvalidPort)) -> Self {
        Self {
            key,
            reason: "origin and destination must be non-empty",
        }
    }
}

/// A directed (origin, destination) port pair, the primary key of the
/// routing table.
///
/// Internally a lane is the pair of [`Port`] values; the hyphen-joined
/// string form `origin-destination` exists only for compatibility with
/// the persisted catalog format and log lines. Joining is collision-free
/// as long as port names contain no hyphen, which the catalog format
/// assumes (port names with spaces are fine).
///
/// # Examples
///
/// ```
/// use schedule_server::domain::{Lane, Port};
///
/// let lane = Lane::new(
///     Port::new("Shanghai".to_string()).unwrap(),
///     Port::new("Santos".to_string()).unwrap(),
/// );
/// assert_eq!(lane.key(), "Shanghai-Santos");
///
/// let parsed = Lane::parse_key("Shanghai-Santos").unwrap();
/// assert_eq!(parsed, lane);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Lane {
    origin: Port,
    destination: Port,
}

impl Lane {
    /// Create a lane from its two ports.
    pub fn new(origin: Port, destination: Port) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// The origin (port of loading) end of the lane.
    pub fn origin(&self) -> &Port {
        &self.origin
    }

    /// The destination (port of discharge) end of the lane.
    pub fn destination(&self) -> &Port {
        &self.destination
    }

    /// The hyphen-joined string key, `origin-destination`.
    pub fn key(&self) -> String {
        format!("{}-{}", self.origin, self.destination)
    }

    /// Parse a hyphen-joined lane key as used by the catalog file format.
    ///
    /// The key is split at the first hyphen, so origins must not contain
    /// one; this mirrors the persisted format's convention and is an
    /// accepted limitation, not something to paper over.
    pub fn parse_key(key: &str) -> Result<Self, InvalidLaneKey> {
        let Some((origin, destination)) = key.split_once('-') else {
            return Err(InvalidLaneKey::new(key, "missing hyphen separator"));
        };

        let origin = Port::new(origin.to_string())
            .map_err(|e| InvalidLaneKey::from((key.to_string(), e)))?;
        let destination = Port::new(destination.to_string())
            .map_err(|e| InvalidLaneKey::from((key.to_string(), e)))?;

        Ok(Self {
            origin,
            destination,
        })
    }

    /// Consumes the lane and returns its ports.
    pub fn into_ports(self) -> (Port, Port) {
        (self.origin, self.destination)
    }
}

impl fmt::Debug for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lane({} -> {})", self.origin, self.destination)
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.origin, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port(s: &str) -> Port {
        Port::new(s.to_string()).unwrap()
    }

    #[test]
    fn key_joins_with_hyphen() {
        let lane = Lane::new(port("Shanghai"), port("Santos"));
        assert_eq!(lane.key(), "Shanghai-Santos");
    }

    #[test]
    fn key_preserves_spaces() {
        let lane = Lane::new(port("Ho Chi Minh"), port("Rio de Janeiro"));
        assert_eq!(lane.key(), "Ho Chi Minh-Rio de Janeiro");
    }

    #[test]
    fn parse_key_roundtrip() {
        let lane = Lane::parse_key("Shanghai-Santos").unwrap();
        assert_eq!(lane.origin().as_str(), "Shanghai");
        assert_eq!(lane.destination().as_str(), "Santos");
        assert_eq!(lane.key(), "Shanghai-Santos");
    }

    #[test]
    fn parse_key_with_spaces() {
        let lane = Lane::parse_key("Port Klang-Rio de Janeiro").unwrap();
        assert_eq!(lane.origin().as_str(), "Port Klang");
        assert_eq!(lane.destination().as_str(), "Rio de Janeiro");
    }

    #[test]
    fn parse_key_splits_at_first_hyphen() {
        // Destinations may contain hyphens under the first-hyphen rule;
        // hyphenated origins cannot be expressed. Accepted limitation.
        let lane = Lane::parse_key("Busan-Some-Port").unwrap();
        assert_eq!(lane.origin().as_str(), "Busan");
        assert_eq!(lane.destination().as_str(), "Some-Port");
    }

    #[test]
    fn parse_key_rejects_missing_hyphen() {
        assert!(Lane::parse_key("Santos").is_err());
        assert!(Lane::parse_key("").is_err());
    }

    #[test]
    fn parse_key_rejects_empty_sides() {
        assert!(Lane::parse_key("-Santos").is_err());
        assert!(Lane::parse_key("Shanghai-").is_err());
        assert!(Lane::parse_key("-").is_err());
    }

    #[test]
    fn direction_matters() {
        let out = Lane::new(port("Shanghai"), port("Santos"));
        let back = Lane::new(port("Santos"), port("Shanghai"));
        assert_ne!(out, back);
    }

    #[test]
    fn display_matches_key() {
        let lane = Lane::new(port("Busan"), port("Itajai"));
        assert_eq!(format!("{}", lane), lane.key());
    }

    #[test]
    fn debug() {
        let lane = Lane::new(port("Busan"), port("Itajai"));
        assert_eq!(format!("{:?}", lane), "Lane(Busan -> Itajai)");
    }

    #[test]
    fn into_ports() {
        let lane = Lane::new(port("Busan"), port("Itajai"));
        let (origin, destination) = lane.into_ports();
        assert_eq!(origin.as_str(), "Busan");
        assert_eq!(destination.as_str(), "Itajai");
    }
}
