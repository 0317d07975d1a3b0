//! The pure reducer folding navigation notifications into router state.
//!
//! The reducer is a pure function over `Rc<RouterState>`: a
//! location-changed message yields a fresh allocation, anything else
//! returns the input pointer unchanged so downstream code can use
//! shallow equality (`Rc::ptr_eq`) to skip work.

use super::action::{RouterAction, RouterMessage};
use super::location::{ActionKind, Location};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// The canonical mirrored pair held in the external store.
///
/// Created once from the history collaborator's current location and
/// action kind, thereafter replaced only by [`router_reducer`].
///
/// # Example
///
/// ```rust
/// use routemirror::core::{ActionKind, Location, RouterState};
///
/// let state = RouterState::new(Location::new("/"), ActionKind::Pop);
/// assert_eq!(state.location.pathname, "/");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RouterState {
    /// The most recently observed location.
    pub location: Location,
    /// The action kind that produced it.
    pub action: ActionKind,
}

impl RouterState {
    /// Pair a location with the action kind that produced it.
    pub fn new(location: Location, action: ActionKind) -> Self {
        Self { location, action }
    }
}

/// Names the router slice of a larger application state.
///
/// The reconciler's default selector reads this well-known slice; an
/// application whose store holds more than routing implements it on
/// its root state type.
///
/// # Example
///
/// ```rust
/// use routemirror::core::{ActionKind, HasRouterState, Location, RouterState};
///
/// struct AppState {
///     router: RouterState,
///     counter: u32,
/// }
///
/// impl HasRouterState for AppState {
///     fn router(&self) -> &RouterState {
///         &self.router
///     }
/// }
///
/// let app = AppState {
///     router: RouterState::new(Location::new("/"), ActionKind::Pop),
///     counter: 0,
/// };
/// assert_eq!(app.router().location.pathname, "/");
/// ```
pub trait HasRouterState {
    /// Borrow the mirrored router state.
    fn router(&self) -> &RouterState;
}

impl HasRouterState for RouterState {
    fn router(&self) -> &RouterState {
        self
    }
}

/// Fold one message into the router state.
///
/// On a location-changed message, returns a new state with `location`
/// and `action` replaced by the payload. On any other message, returns
/// the input `Rc` itself; unknown message types never mutate router
/// state and never reallocate.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use routemirror::core::{
///     router_reducer, ActionKind, Location, RouterAction, RouterState,
/// };
///
/// let state = Rc::new(RouterState::new(Location::new("/"), ActionKind::Pop));
///
/// let next = router_reducer(
///     state.clone(),
///     &RouterAction::location_changed(Location::new("/inbox"), ActionKind::Push),
/// );
/// assert_eq!(next.location.pathname, "/inbox");
///
/// // A command is not a notification; the state pointer is unchanged.
/// let same = router_reducer(next.clone(), &RouterAction::back());
/// assert!(Rc::ptr_eq(&next, &same));
/// ```
pub fn router_reducer<A: RouterMessage>(state: Rc<RouterState>, action: &A) -> Rc<RouterState> {
    match action.as_router() {
        Some(RouterAction::LocationChanged { location, action }) => Rc::new(RouterState {
            location: location.clone(),
            action: *action,
        }),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    enum AppAction {
        Router(RouterAction),
        Unrelated,
    }

    impl RouterMessage for AppAction {
        fn from_router(action: RouterAction) -> Self {
            Self::Router(action)
        }

        fn as_router(&self) -> Option<&RouterAction> {
            match self {
                Self::Router(action) => Some(action),
                Self::Unrelated => None,
            }
        }
    }

    fn initial() -> Rc<RouterState> {
        Rc::new(RouterState::new(Location::new("/"), ActionKind::Pop))
    }

    #[test]
    fn location_changed_replaces_location_and_action() {
        let state = initial();
        let next = router_reducer(
            state,
            &RouterAction::location_changed(Location::new("/inbox"), ActionKind::Push),
        );

        assert_eq!(next.location, Location::new("/inbox"));
        assert_eq!(next.action, ActionKind::Push);
    }

    #[test]
    fn unknown_message_returns_identical_pointer() {
        let state = initial();
        let next = router_reducer(state.clone(), &AppAction::Unrelated);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn command_message_returns_identical_pointer() {
        let state = initial();
        let next = router_reducer(state.clone(), &RouterAction::push(Location::new("/b")));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn wrapped_notification_is_folded() {
        let state = initial();
        let next = router_reducer(
            state,
            &AppAction::from_router(RouterAction::location_changed(
                Location::new("/b"),
                ActionKind::Replace,
            )),
        );

        assert_eq!(next.location, Location::new("/b"));
        assert_eq!(next.action, ActionKind::Replace);
    }

    #[test]
    fn reducer_is_pure() {
        let state = initial();
        let message =
            RouterAction::location_changed(Location::new("/b"), ActionKind::Push);

        let first = router_reducer(state.clone(), &message);
        let second = router_reducer(state.clone(), &message);

        assert_eq!(first, second);
        assert_eq!(state.location, Location::new("/"));
    }

    #[test]
    fn router_state_is_its_own_slice() {
        let state = RouterState::new(Location::new("/a"), ActionKind::Push);
        assert_eq!(state.router(), &state);
    }

    #[test]
    fn router_state_roundtrips_through_json() {
        let state = RouterState::new(Location::new("/a").with_hash("#x"), ActionKind::Replace);
        let json = serde_json::to_string(&state).unwrap();
        let back: RouterState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
