//! Pure core of the reconciliation engine.
//!
//! This module contains the side-effect-free half of the crate:
//! - Location values and navigation events
//! - The two-message action vocabulary and its wire codec
//! - The reducer folding notifications into mirrored router state
//!
//! Everything imperative (subscriptions, the guard flag, command
//! translation) lives in the `bridge` module.

mod action;
mod location;
mod reducer;

pub use action::{
    NavCommand, RouterAction, RouterMessage, CALL_HISTORY_METHOD, ON_LOCATION_CHANGED,
};
pub use location::{ActionKind, Location, NavigationEvent};
pub use reducer::{router_reducer, HasRouterState, RouterState};
