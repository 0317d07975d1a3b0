//! Routemirror: bidirectional reconciliation between a navigation
//! history and an external state store.
//!
//! Every real navigation is reflected into the store as a
//! `LocationChanged` message, and every store-driven reversion of the
//! location (a debugging "time travel" rewind) is replayed back into
//! the history, with a guard flag preventing the two from feeding into
//! each other.
//!
//! # Core Concepts
//!
//! - **Vocabulary**: two messages cross the boundary, a navigation
//!   notification and a navigation command ([`core::RouterAction`])
//! - **Reducer**: pure fold of notifications into mirrored router
//!   state ([`core::router_reducer`])
//! - **Middleware**: consumes outbound commands at the dispatch
//!   boundary and applies them to the history
//!   ([`bridge::RouterMiddleware`])
//! - **Reconciler**: owns both subscriptions, detects time travel and
//!   suppresses the echoed notification ([`bridge::Reconciler`])
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use routemirror::bridge::{Reconciler, RouterMiddleware};
//! use routemirror::core::{
//!     router_reducer, ActionKind, Location, RouterAction, RouterState,
//! };
//! use routemirror::history::{History, MemoryHistory};
//! use routemirror::store::{MemoryStore, Store};
//!
//! let history = Rc::new(MemoryHistory::new(Location::new("/")));
//! let store = Rc::new(MemoryStore::<RouterState, RouterAction>::new(
//!     history.router_state(),
//!     Box::new(router_reducer),
//! ));
//! store.add_middleware(Rc::new(RouterMiddleware::new(history.clone())));
//!
//! let reconciler = Reconciler::builder()
//!     .history(history.clone())
//!     .store(store.clone())
//!     .enable_time_travelling(true)
//!     .build()
//!     .unwrap();
//!
//! // Navigate through the store; the history follows and the store
//! // hears about the resulting navigation exactly once.
//! store.dispatch(RouterAction::push(Location::new("/inbox")));
//! assert_eq!(history.location().pathname, "/inbox");
//! assert_eq!(store.get_state().location.pathname, "/inbox");
//! assert_eq!(store.get_state().action, ActionKind::Push);
//!
//! // Rewind the store out-of-band; the history is replayed once.
//! store.replace_state(RouterState::new(Location::new("/"), ActionKind::Push));
//! assert_eq!(history.location().pathname, "/");
//! ```

pub mod bridge;
pub mod builder;
pub mod core;
pub mod history;
pub mod store;
pub mod subscription;

// Re-export commonly used types
pub use self::core::{
    router_reducer, ActionKind, HasRouterState, Location, NavCommand, NavigationEvent,
    RouterAction, RouterMessage, RouterState,
};
pub use bridge::{Reconciler, RouterMiddleware, RouterSelector};
pub use builder::{BuildError, ReconcilerBuilder};
pub use history::{History, MemoryHistory};
pub use store::{MemoryStore, Middleware, Store};
pub use subscription::Subscription;
