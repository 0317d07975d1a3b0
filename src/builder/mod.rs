//! Builder API for wiring up a reconciler.
//!
//! The configuration surface is explicit: no environment flags, no
//! ambient defaults beyond the build profile. Time travelling defaults
//! to on in debug builds and off in release builds, and the default
//! selector reads the well-known router slice named by
//! [`HasRouterState`](crate::core::HasRouterState).

pub mod error;

pub use error::BuildError;

use crate::bridge::{Reconciler, RouterSelector};
use crate::core::{HasRouterState, RouterMessage, RouterState};
use crate::history::History;
use crate::store::Store;
use std::rc::Rc;

/// Fluent configuration for a [`Reconciler`].
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use routemirror::bridge::{Reconciler, RouterMiddleware};
/// use routemirror::core::{router_reducer, Location, RouterAction, RouterState};
/// use routemirror::history::{History, MemoryHistory};
/// use routemirror::store::MemoryStore;
///
/// let history = Rc::new(MemoryHistory::new(Location::new("/")));
/// let store = Rc::new(MemoryStore::<RouterState, RouterAction>::new(
///     history.router_state(),
///     Box::new(router_reducer),
/// ));
/// store.add_middleware(Rc::new(RouterMiddleware::new(history.clone())));
///
/// let reconciler = Reconciler::builder()
///     .history(history)
///     .store(store)
///     .enable_time_travelling(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(reconciler.current().location.pathname, "/");
/// ```
pub struct ReconcilerBuilder<H, S>
where
    H: History + 'static,
    S: Store + 'static,
    S::Action: RouterMessage,
{
    history: Option<Rc<H>>,
    store: Option<Rc<S>>,
    selector: Option<RouterSelector<S::State>>,
    enable_time_travelling: bool,
    basename: Option<String>,
}

impl<H, S> ReconcilerBuilder<H, S>
where
    H: History + 'static,
    S: Store + 'static,
    S::Action: RouterMessage,
{
    /// Start with defaults: time travelling follows the build profile,
    /// no basename, selector resolved at build time.
    pub fn new() -> Self {
        Self {
            history: None,
            store: None,
            selector: None,
            enable_time_travelling: cfg!(debug_assertions),
            basename: None,
        }
    }

    /// The history collaborator to bridge. Required.
    pub fn history(mut self, history: Rc<H>) -> Self {
        self.history = Some(history);
        self
    }

    /// The store collaborator to bridge. Required.
    pub fn store(mut self, store: Rc<S>) -> Self {
        self.store = Some(store);
        self
    }

    /// Override how the mirrored router state is read from the root
    /// state. Defaults to the [`HasRouterState`] slice.
    pub fn selector(
        mut self,
        selector: impl Fn(&S::State) -> RouterState + 'static,
    ) -> Self {
        self.selector = Some(Rc::new(selector));
        self
    }

    /// Turn time-travel detection on or off explicitly.
    pub fn enable_time_travelling(mut self, enabled: bool) -> Self {
        self.enable_time_travelling = enabled;
        self
    }

    /// Base path handed through to rendering untouched.
    pub fn basename(mut self, basename: impl Into<String>) -> Self {
        self.basename = Some(basename.into());
        self
    }

    /// Activate the reconciler: capture the initial mirror and take
    /// both subscriptions.
    pub fn build(self) -> Result<Reconciler<H, S>, BuildError>
    where
        S::State: HasRouterState,
    {
        let history = self.history.ok_or(BuildError::MissingHistory)?;
        let store = self.store.ok_or(BuildError::MissingStore)?;
        let selector = self
            .selector
            .unwrap_or_else(|| Rc::new(|state: &S::State| state.router().clone()));

        Ok(Reconciler::connect(
            history,
            store,
            selector,
            self.enable_time_travelling,
            self.basename,
        ))
    }
}

impl<H, S> Default for ReconcilerBuilder<H, S>
where
    H: History + 'static,
    S: Store + 'static,
    S::Action: RouterMessage,
{
    fn default() -> Self {
        Self::new()
    }
}
