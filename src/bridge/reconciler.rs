//! The reconciler bridging history and store.

use crate::builder::ReconcilerBuilder;
use crate::core::{ActionKind, RouterAction, RouterMessage, RouterState};
use crate::history::History;
use crate::store::Store;
use crate::subscription::Subscription;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, trace};

/// Selector reading the mirrored router state out of the root state.
pub type RouterSelector<T> = Rc<dyn Fn(&T) -> RouterState>;

/// Bridges the history and store collaborators.
///
/// The reconciler enforces the single source of truth: every real
/// navigation becomes a `LocationChanged` dispatch, and every
/// store-driven reversion of location (time travel) is replayed into
/// the history exactly once, with a guard flag suppressing the echoed
/// notification so the two never feed back into each other.
///
/// Built through [`ReconcilerBuilder`]; see the crate docs for a wired
/// example. All callbacks run synchronously on the caller's stack;
/// nothing here is `Send`.
pub struct Reconciler<H, S>
where
    H: History + 'static,
    S: Store + 'static,
    S::Action: RouterMessage,
{
    history: Rc<H>,
    store: Rc<S>,
    mirrored: Rc<RefCell<RouterState>>,
    replaying: Rc<Cell<bool>>,
    basename: Option<String>,
    history_sub: Option<Subscription>,
    store_sub: Option<Subscription>,
}

impl<H, S> Reconciler<H, S>
where
    H: History + 'static,
    S: Store + 'static,
    S::Action: RouterMessage,
{
    /// Start configuring a reconciler.
    pub fn builder() -> ReconcilerBuilder<H, S> {
        ReconcilerBuilder::new()
    }

    pub(crate) fn connect(
        history: Rc<H>,
        store: Rc<S>,
        selector: RouterSelector<S::State>,
        enable_time_travelling: bool,
        basename: Option<String>,
    ) -> Self {
        let mirrored = Rc::new(RefCell::new(history.router_state()));
        let replaying = Rc::new(Cell::new(false));

        // Watch the store only when time travel is on; the selector and
        // the guard are the whole detection apparatus.
        let store_sub = enable_time_travelling.then(|| {
            let weak_history = Rc::downgrade(&history);
            let weak_store = Rc::downgrade(&store);
            let selector = selector.clone();
            let replaying = replaying.clone();

            store.subscribe(Box::new(move || {
                let (Some(history), Some(store)) =
                    (weak_history.upgrade(), weak_store.upgrade())
                else {
                    return;
                };

                let in_store = selector(&store.get_state()).location;
                let in_history = history.location();

                // Only a discrepancy on top of a PUSH is treated as
                // time travel; REPLACE/POP discrepancies are left
                // alone. Known limitation.
                if history.action() == ActionKind::Push && in_store != in_history {
                    debug!(
                        store = %in_store,
                        history = %in_history,
                        "store location diverged from history, replaying"
                    );
                    // Set the guard before the push: the navigation
                    // event arrives re-entrantly, on this same stack.
                    replaying.set(true);
                    history.push(in_store);
                }
            }))
        });

        let history_sub = {
            let weak_store = Rc::downgrade(&store);
            let replaying = replaying.clone();
            let mirrored = mirrored.clone();

            history.listen(Box::new(move |event| {
                if replaying.get() {
                    // Echo of our own corrective push; swallow it.
                    replaying.set(false);
                } else if let Some(store) = weak_store.upgrade() {
                    trace!(location = %event.location, kind = %event.kind, "navigation observed");
                    store.dispatch(S::Action::from_router(RouterAction::location_changed(
                        event.location.clone(),
                        event.kind,
                    )));
                }
                *mirrored.borrow_mut() = RouterState::new(event.location.clone(), event.kind);
            }))
        };

        Self {
            history,
            store,
            mirrored,
            replaying,
            basename,
            history_sub: Some(history_sub),
            store_sub,
        }
    }

    /// The mirrored location/action pair kept current for rendering.
    pub fn current(&self) -> RouterState {
        self.mirrored.borrow().clone()
    }

    /// The history collaborator this reconciler is bridging.
    pub fn history(&self) -> &Rc<H> {
        &self.history
    }

    /// The store collaborator this reconciler is bridging.
    pub fn store(&self) -> &Rc<S> {
        &self.store
    }

    /// Base path handed through to rendering; never interpreted here.
    pub fn basename(&self) -> Option<&str> {
        self.basename.as_deref()
    }

    /// Drop both subscriptions and reset the guard flag.
    ///
    /// Idempotent, and safe even when the collaborators have already
    /// been torn down; the unsubscribe closures hold weak references.
    pub fn disconnect(&mut self) {
        if let Some(sub) = self.history_sub.take() {
            sub.unsubscribe();
        }
        if let Some(sub) = self.store_sub.take() {
            sub.unsubscribe();
        }
        self.replaying.set(false);
    }
}

impl<H, S> Drop for Reconciler<H, S>
where
    H: History + 'static,
    S: Store + 'static,
    S::Action: RouterMessage,
{
    fn drop(&mut self) {
        self.disconnect();
    }
}
