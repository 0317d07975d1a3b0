//! Imperative shell wiring the collaborators together.
//!
//! [`RouterMiddleware`] translates dispatched navigation commands into
//! history operations; [`Reconciler`] owns the live subscriptions in
//! both directions and the loop-prevention guard.

mod middleware;
mod reconciler;

pub use middleware::RouterMiddleware;
pub use reconciler::{Reconciler, RouterSelector};
