//! Location values and navigation events.
//!
//! A `Location` is the structured navigation address produced by the
//! history collaborator. It is an immutable value; navigating never
//! mutates a location, it produces a new one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of how a location was reached.
///
/// Serializes to the literal strings `"PUSH"`, `"REPLACE"` and `"POP"`,
/// which is the form any code observing dispatched messages sees.
///
/// # Example
///
/// ```rust
/// use routemirror::core::ActionKind;
///
/// let json = serde_json::to_string(&ActionKind::Push).unwrap();
/// assert_eq!(json, "\"PUSH\"");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionKind {
    /// A new entry was appended to the history stack.
    Push,
    /// The current entry was swapped in place.
    Replace,
    /// The history index moved to an existing entry.
    Pop,
}

impl ActionKind {
    /// Get the action kind's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Push => "PUSH",
            Self::Replace => "REPLACE",
            Self::Pop => "POP",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structured navigation address.
///
/// Equality covers exactly the four fields; two locations are the same
/// address if and only if `pathname`, `search`, `hash` and `state` all
/// match. Time-travel detection relies on this.
///
/// # Example
///
/// ```rust
/// use routemirror::core::Location;
///
/// let a = Location::new("/inbox");
/// let b = Location::new("/inbox").with_search("?page=2");
/// assert_ne!(a, b);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Location {
    /// Path portion of the address, e.g. `/inbox`.
    pub pathname: String,
    /// Query string including the leading `?`, or empty.
    #[serde(default)]
    pub search: String,
    /// Fragment including the leading `#`, or empty.
    #[serde(default)]
    pub hash: String,
    /// Opaque per-entry state attached by the navigator.
    #[serde(default)]
    pub state: Option<serde_json::Value>,
}

impl Location {
    /// Create a location with the given pathname and empty
    /// search/hash/state.
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: String::new(),
            hash: String::new(),
            state: None,
        }
    }

    /// Replace the query string.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Replace the fragment.
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    /// Attach opaque entry state.
    pub fn with_state(mut self, state: serde_json::Value) -> Self {
        self.state = Some(state);
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.pathname, self.search, self.hash)
    }
}

/// Notification emitted by the history collaborator on any navigation,
/// whatever the cause.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct NavigationEvent {
    /// The location navigated to.
    pub location: Location,
    /// How it was reached.
    pub kind: ActionKind,
}

impl NavigationEvent {
    /// Pair a location with the action kind that produced it.
    pub fn new(location: Location, kind: ActionKind) -> Self {
        Self { location, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn action_kind_serializes_to_wire_literals() {
        assert_eq!(serde_json::to_string(&ActionKind::Push).unwrap(), "\"PUSH\"");
        assert_eq!(
            serde_json::to_string(&ActionKind::Replace).unwrap(),
            "\"REPLACE\""
        );
        assert_eq!(serde_json::to_string(&ActionKind::Pop).unwrap(), "\"POP\"");
    }

    #[test]
    fn action_kind_name_matches_display() {
        for kind in [ActionKind::Push, ActionKind::Replace, ActionKind::Pop] {
            assert_eq!(kind.name(), kind.to_string());
        }
    }

    #[test]
    fn location_builder_fills_fields() {
        let location = Location::new("/inbox")
            .with_search("?page=2")
            .with_hash("#top")
            .with_state(json!({"scroll": 120}));

        assert_eq!(location.pathname, "/inbox");
        assert_eq!(location.search, "?page=2");
        assert_eq!(location.hash, "#top");
        assert_eq!(location.state, Some(json!({"scroll": 120})));
    }

    #[test]
    fn locations_differ_on_any_field() {
        let base = Location::new("/a");

        assert_ne!(base, Location::new("/b"));
        assert_ne!(base, Location::new("/a").with_search("?q=1"));
        assert_ne!(base, Location::new("/a").with_hash("#x"));
        assert_ne!(base, Location::new("/a").with_state(json!(1)));
        assert_eq!(base, Location::new("/a"));
    }

    #[test]
    fn location_displays_as_full_path() {
        let location = Location::new("/a").with_search("?q=1").with_hash("#x");
        assert_eq!(location.to_string(), "/a?q=1#x");
    }

    #[test]
    fn location_roundtrips_through_json() {
        let location = Location::new("/a").with_state(json!({"n": 3}));
        let json = serde_json::to_string(&location).unwrap();
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(location, back);
    }

    #[test]
    fn location_deserializes_with_missing_optional_fields() {
        let location: Location = serde_json::from_str(r#"{"pathname": "/a"}"#).unwrap();
        assert_eq!(location, Location::new("/a"));
    }

    #[test]
    fn navigation_event_pairs_location_and_kind() {
        let event = NavigationEvent::new(Location::new("/a"), ActionKind::Push);
        assert_eq!(event.location.pathname, "/a");
        assert_eq!(event.kind, ActionKind::Push);
    }
}
