//! The action vocabulary crossing the history/store boundary.
//!
//! Exactly two message kinds exist: a notification that the location
//! changed, and a command asking the history collaborator to navigate.
//! The serialized form is the wire contract for any code observing
//! dispatched messages, so the tags are fixed literal strings.

use super::location::{ActionKind, Location, NavigationEvent};
use serde::{Deserialize, Serialize};

/// Wire tag of the location-changed notification.
pub const ON_LOCATION_CHANGED: &str = "@@router/ON_LOCATION_CHANGED";

/// Wire tag of the navigation command.
pub const CALL_HISTORY_METHOD: &str = "@@router/CALL_HISTORY_METHOD";

/// An intent to mutate the history collaborator.
///
/// One variant per history operation, each carrying the arguments that
/// operation expects. Commands are resolved by exhaustive matching, so
/// adding an operation is a compile-time event, not a runtime lookup.
///
/// # Example
///
/// ```rust
/// use routemirror::core::NavCommand;
///
/// let command = NavCommand::Go(-2);
/// assert_eq!(command.method_name(), "go");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "method", content = "args", rename_all = "lowercase")]
pub enum NavCommand {
    /// Append a new entry.
    Push(Location),
    /// Swap the current entry in place.
    Replace(Location),
    /// Move the index by a signed delta.
    Go(i32),
    /// Move the index back by one.
    Back,
    /// Move the index forward by one.
    Forward,
}

impl NavCommand {
    /// The command's method name as it appears on the wire.
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::Push(_) => "push",
            Self::Replace(_) => "replace",
            Self::Go(_) => "go",
            Self::Back => "back",
            Self::Forward => "forward",
        }
    }
}

/// One of the two messages exchanged across the boundary.
///
/// `LocationChanged` flows history → store (dispatched by the
/// reconciler); `CallHistoryMethod` flows store → history (consumed by
/// the command middleware before it ever reaches a reducer).
///
/// # Example
///
/// ```rust
/// use routemirror::core::{Location, RouterAction};
///
/// let action = RouterAction::push(Location::new("/inbox"));
/// assert_eq!(action.type_tag(), "@@router/CALL_HISTORY_METHOD");
///
/// let json = serde_json::to_value(&action).unwrap();
/// assert_eq!(json["type"], "@@router/CALL_HISTORY_METHOD");
/// assert_eq!(json["payload"]["method"], "push");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum RouterAction {
    /// The history collaborator reported a real navigation.
    #[serde(rename = "@@router/ON_LOCATION_CHANGED")]
    LocationChanged {
        /// The location navigated to.
        location: Location,
        /// How it was reached.
        action: ActionKind,
    },
    /// Producer code wants to navigate.
    #[serde(rename = "@@router/CALL_HISTORY_METHOD")]
    CallHistoryMethod(NavCommand),
}

impl RouterAction {
    /// Notification for an observed navigation event.
    pub fn location_changed(location: Location, action: ActionKind) -> Self {
        Self::LocationChanged { location, action }
    }

    /// Command: append a new entry for `location`.
    pub fn push(location: Location) -> Self {
        Self::CallHistoryMethod(NavCommand::Push(location))
    }

    /// Command: swap the current entry for `location`.
    pub fn replace(location: Location) -> Self {
        Self::CallHistoryMethod(NavCommand::Replace(location))
    }

    /// Command: move the history index by `delta`.
    pub fn go(delta: i32) -> Self {
        Self::CallHistoryMethod(NavCommand::Go(delta))
    }

    /// Command: move the history index back by one.
    pub fn back() -> Self {
        Self::CallHistoryMethod(NavCommand::Back)
    }

    /// Command: move the history index forward by one.
    pub fn forward() -> Self {
        Self::CallHistoryMethod(NavCommand::Forward)
    }

    /// The literal tag this message carries on the wire.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::LocationChanged { .. } => ON_LOCATION_CHANGED,
            Self::CallHistoryMethod(_) => CALL_HISTORY_METHOD,
        }
    }
}

impl From<NavigationEvent> for RouterAction {
    fn from(event: NavigationEvent) -> Self {
        Self::location_changed(event.location, event.kind)
    }
}

/// Store action types that can carry router actions.
///
/// Applications rarely dispatch `RouterAction` directly; they embed it
/// in their own action enum. The reducer, middleware and reconciler are
/// generic over this trait, and any action that projects to `None` is
/// unknown to the router and left untouched.
///
/// # Example
///
/// ```rust
/// use routemirror::core::{RouterAction, RouterMessage};
///
/// #[derive(Clone, Debug)]
/// enum AppAction {
///     Router(RouterAction),
///     Tick,
/// }
///
/// impl RouterMessage for AppAction {
///     fn from_router(action: RouterAction) -> Self {
///         Self::Router(action)
///     }
///
///     fn as_router(&self) -> Option<&RouterAction> {
///         match self {
///             Self::Router(action) => Some(action),
///             _ => None,
///         }
///     }
/// }
///
/// assert!(AppAction::Tick.as_router().is_none());
/// ```
pub trait RouterMessage: Sized {
    /// Wrap a router action in the application's action type.
    fn from_router(action: RouterAction) -> Self;

    /// Project the router action out, if this message carries one.
    fn as_router(&self) -> Option<&RouterAction>;
}

impl RouterMessage for RouterAction {
    fn from_router(action: RouterAction) -> Self {
        action
    }

    fn as_router(&self) -> Option<&RouterAction> {
        Some(self)
    }
}
