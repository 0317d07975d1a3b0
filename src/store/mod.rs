//! The state-store collaborator contract.
//!
//! Mirrors the usual subscribe/dispatch/getState shape. The store is
//! deliberately generic over both its state and its action type; the
//! router only asks that actions implement
//! [`RouterMessage`](crate::core::RouterMessage) where it needs to
//! inject or project router actions.

mod memory;

pub use memory::{MemoryStore, Reducer};

use crate::subscription::Subscription;
use std::rc::Rc;

/// Callback invoked after every reduced dispatch.
pub type StoreListener = Box<dyn Fn()>;

/// Contract for a state-store collaborator.
pub trait Store {
    /// Root state held by the store.
    type State;
    /// Action type flowing through dispatch.
    type Action;

    /// The current root state.
    fn get_state(&self) -> Rc<Self::State>;

    /// Send an action through middleware and, if it survives, the
    /// reducer. Subscribers are notified synchronously afterwards.
    fn dispatch(&self, action: Self::Action);

    /// Register a change listener; the returned handle removes it.
    fn subscribe(&self, listener: StoreListener) -> Subscription;
}

/// A dispatch interceptor consulted before the reducer.
///
/// Returning `Some` forwards an action (possibly transformed) to the
/// rest of the chain; returning `None` consumes it at the boundary,
/// so it never reaches the reducer and never triggers a notification.
///
/// # Example
///
/// ```rust
/// use routemirror::store::Middleware;
///
/// struct DropEven;
///
/// impl Middleware<u32> for DropEven {
///     fn handle(&self, action: u32) -> Option<u32> {
///         (action % 2 == 1).then_some(action)
///     }
/// }
///
/// assert_eq!(DropEven.handle(3), Some(3));
/// assert_eq!(DropEven.handle(4), None);
/// ```
pub trait Middleware<A> {
    /// Inspect one dispatched action.
    fn handle(&self, action: A) -> Option<A>;
}
