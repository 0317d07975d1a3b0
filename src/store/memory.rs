//! In-memory store with a middleware chain.

use super::{Middleware, Store, StoreListener};
use crate::subscription::Subscription;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type SubscriberList = Rc<RefCell<Vec<(usize, Rc<dyn Fn()>)>>>;

/// Reducer signature: fold an action into the root state.
///
/// Returning the input `Rc` unchanged signals "nothing happened" to
/// anyone comparing pointers, though subscribers are notified either
/// way, as a store is expected to do.
pub type Reducer<T, A> = Box<dyn Fn(Rc<T>, &A) -> Rc<T>>;

/// Single-threaded store holding `Rc<T>` state.
///
/// Dispatch walks the middleware chain in registration order; an
/// action consumed by middleware never reaches the reducer and never
/// notifies subscribers. Listeners are notified over a snapshot, so a
/// listener may dispatch re-entrantly within the same synchronous
/// turn.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use routemirror::core::{router_reducer, ActionKind, Location, RouterAction, RouterState};
/// use routemirror::store::{MemoryStore, Store};
///
/// let store = MemoryStore::<RouterState, RouterAction>::new(
///     RouterState::new(Location::new("/"), ActionKind::Pop),
///     Box::new(router_reducer),
/// );
///
/// store.dispatch(RouterAction::location_changed(
///     Location::new("/inbox"),
///     ActionKind::Push,
/// ));
/// assert_eq!(store.get_state().location.pathname, "/inbox");
/// ```
pub struct MemoryStore<T, A> {
    state: RefCell<Rc<T>>,
    reducer: Reducer<T, A>,
    middleware: RefCell<Vec<Rc<dyn Middleware<A>>>>,
    subscribers: SubscriberList,
    next_subscriber_id: Cell<usize>,
}

impl<T, A> MemoryStore<T, A> {
    /// Create a store with an initial state and a reducer.
    pub fn new(initial: T, reducer: Reducer<T, A>) -> Self {
        Self {
            state: RefCell::new(Rc::new(initial)),
            reducer,
            middleware: RefCell::new(Vec::new()),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_subscriber_id: Cell::new(0),
        }
    }

    /// Append a middleware to the chain.
    ///
    /// Order matters: middleware registered first sees actions first.
    pub fn add_middleware(&self, middleware: Rc<dyn Middleware<A>>) {
        self.middleware.borrow_mut().push(middleware);
    }

    /// Overwrite the state out-of-band and notify subscribers.
    ///
    /// This is the hook debugging tools use to rewind state without a
    /// dispatch; the reconciler observes the change like any other.
    pub fn replace_state(&self, state: T) {
        *self.state.borrow_mut() = Rc::new(state);
        self.notify();
    }

    fn notify(&self) {
        // Snapshot so listeners can dispatch or unsubscribe mid-walk.
        let snapshot: Vec<Rc<dyn Fn()>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in snapshot {
            listener();
        }
    }
}

impl<T, A> Store for MemoryStore<T, A> {
    type State = T;
    type Action = A;

    fn get_state(&self) -> Rc<T> {
        self.state.borrow().clone()
    }

    fn dispatch(&self, action: A) {
        let chain: Vec<Rc<dyn Middleware<A>>> = self.middleware.borrow().clone();

        let mut action = action;
        for middleware in chain {
            match middleware.handle(action) {
                Some(forwarded) => action = forwarded,
                // Consumed at the boundary; nothing reduces, nobody
                // is notified.
                None => return,
            }
        }

        let next = (self.reducer)(self.get_state(), &action);
        *self.state.borrow_mut() = next;
        self.notify();
    }

    fn subscribe(&self, listener: StoreListener) -> Subscription {
        let id = self.next_subscriber_id.get();
        self.next_subscriber_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::from(listener)));

        let subscribers = Rc::downgrade(&self.subscribers);
        Subscription::new(move || {
            if let Some(subscribers) = subscribers.upgrade() {
                subscribers.borrow_mut().retain(|(entry, _)| *entry != id);
            }
        })
    }
}
