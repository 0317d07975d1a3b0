//! In-memory navigation history.

use super::{History, HistoryListener};
use crate::core::{ActionKind, Location, NavigationEvent};
use crate::subscription::Subscription;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type ListenerList = Rc<RefCell<Vec<(usize, Rc<dyn Fn(&NavigationEvent)>)>>>;

struct Entries {
    entries: Vec<Location>,
    index: usize,
    action: ActionKind,
}

/// In-memory history: an entry stack plus a cursor.
///
/// Behaves like the in-memory history used where no browser is
/// available: `push` discards the forward branch before appending,
/// `go` clamps the target index into range and always reports a
/// `Pop`, and the initial entry is reported as reached via `Pop`.
///
/// Listeners are notified synchronously from inside each operation,
/// over a snapshot of the listener list, so a listener may re-enter
/// the history (or unsubscribe) while being notified.
///
/// # Example
///
/// ```rust
/// use routemirror::core::{ActionKind, Location};
/// use routemirror::history::{History, MemoryHistory};
///
/// let history = MemoryHistory::new(Location::new("/"));
/// history.push(Location::new("/inbox"));
///
/// assert_eq!(history.location().pathname, "/inbox");
/// assert_eq!(history.action(), ActionKind::Push);
///
/// history.back();
/// assert_eq!(history.location().pathname, "/");
/// assert_eq!(history.action(), ActionKind::Pop);
/// ```
pub struct MemoryHistory {
    inner: RefCell<Entries>,
    listeners: ListenerList,
    next_listener_id: Cell<usize>,
}

impl MemoryHistory {
    /// Create a history holding a single initial entry.
    pub fn new(initial: Location) -> Self {
        Self {
            inner: RefCell::new(Entries {
                entries: vec![initial],
                index: 0,
                action: ActionKind::Pop,
            }),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_listener_id: Cell::new(0),
        }
    }

    /// Number of entries on the stack.
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Always false; a history holds at least its initial entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Current cursor position on the stack.
    pub fn index(&self) -> usize {
        self.inner.borrow().index
    }

    fn notify(&self, event: NavigationEvent) {
        // Snapshot so listeners can re-enter or unsubscribe mid-walk.
        let snapshot: Vec<Rc<dyn Fn(&NavigationEvent)>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in snapshot {
            listener(&event);
        }
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(Location::new("/"))
    }
}

impl History for MemoryHistory {
    fn location(&self) -> Location {
        let inner = self.inner.borrow();
        inner.entries[inner.index].clone()
    }

    fn action(&self) -> ActionKind {
        self.inner.borrow().action
    }

    fn push(&self, location: Location) {
        {
            let mut inner = self.inner.borrow_mut();
            let keep = inner.index + 1;
            inner.entries.truncate(keep);
            inner.entries.push(location.clone());
            inner.index += 1;
            inner.action = ActionKind::Push;
        }
        self.notify(NavigationEvent::new(location, ActionKind::Push));
    }

    fn replace(&self, location: Location) {
        {
            let mut inner = self.inner.borrow_mut();
            let index = inner.index;
            inner.entries[index] = location.clone();
            inner.action = ActionKind::Replace;
        }
        self.notify(NavigationEvent::new(location, ActionKind::Replace));
    }

    fn go(&self, delta: i32) {
        let location = {
            let mut inner = self.inner.borrow_mut();
            let last = inner.entries.len() as i64 - 1;
            let target = (inner.index as i64 + i64::from(delta)).clamp(0, last);
            inner.index = target as usize;
            inner.action = ActionKind::Pop;
            inner.entries[inner.index].clone()
        };
        self.notify(NavigationEvent::new(location, ActionKind::Pop));
    }

    fn listen(&self, listener: HistoryListener) -> Subscription {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::from(listener)));

        let listeners = Rc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().retain(|(entry, _)| *entry != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn record_events(history: &MemoryHistory) -> (Rc<RefCell<Vec<NavigationEvent>>>, Subscription) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let sub = history.listen(Box::new(move |event| sink.borrow_mut().push(event.clone())));
        (events, sub)
    }

    #[test]
    fn starts_at_initial_entry_with_pop() {
        let history = MemoryHistory::new(Location::new("/start"));

        assert_eq!(history.location(), Location::new("/start"));
        assert_eq!(history.action(), ActionKind::Pop);
        assert_eq!(history.len(), 1);
        assert_eq!(history.index(), 0);
    }

    #[test]
    fn push_appends_and_moves_cursor() {
        let history = MemoryHistory::default();
        history.push(Location::new("/a"));
        history.push(Location::new("/b"));

        assert_eq!(history.location(), Location::new("/b"));
        assert_eq!(history.action(), ActionKind::Push);
        assert_eq!(history.len(), 3);
        assert_eq!(history.index(), 2);
    }

    #[test]
    fn push_discards_forward_branch() {
        let history = MemoryHistory::default();
        history.push(Location::new("/a"));
        history.push(Location::new("/b"));
        history.back();
        history.push(Location::new("/c"));

        assert_eq!(history.len(), 3);
        assert_eq!(history.location(), Location::new("/c"));

        // The /b branch is gone; forward stays put.
        history.forward();
        assert_eq!(history.location(), Location::new("/c"));
    }

    #[test]
    fn replace_swaps_entry_without_growing_stack() {
        let history = MemoryHistory::default();
        history.push(Location::new("/a"));
        history.replace(Location::new("/a2"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.location(), Location::new("/a2"));
        assert_eq!(history.action(), ActionKind::Replace);

        history.back();
        assert_eq!(history.location(), Location::new("/"));
    }

    #[test]
    fn go_moves_by_delta_and_reports_pop() {
        let history = MemoryHistory::default();
        history.push(Location::new("/a"));
        history.push(Location::new("/b"));

        history.go(-2);
        assert_eq!(history.location(), Location::new("/"));
        assert_eq!(history.action(), ActionKind::Pop);

        history.go(1);
        assert_eq!(history.location(), Location::new("/a"));
    }

    #[test]
    fn go_clamps_out_of_range_deltas() {
        let history = MemoryHistory::default();
        history.push(Location::new("/a"));

        history.go(-10);
        assert_eq!(history.index(), 0);

        history.go(10);
        assert_eq!(history.index(), 1);
    }

    #[test]
    fn back_at_start_stays_put() {
        let history = MemoryHistory::default();
        history.back();

        assert_eq!(history.index(), 0);
        assert_eq!(history.action(), ActionKind::Pop);
    }

    #[test]
    fn every_operation_notifies_listeners() {
        let history = MemoryHistory::default();
        let (events, _sub) = record_events(&history);

        history.push(Location::new("/a"));
        history.replace(Location::new("/a2"));
        history.back();
        history.forward();
        history.go(0);

        let kinds: Vec<ActionKind> = events.borrow().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ActionKind::Push,
                ActionKind::Replace,
                ActionKind::Pop,
                ActionKind::Pop,
                ActionKind::Pop,
            ]
        );
    }

    #[test]
    fn notification_carries_resulting_location() {
        let history = MemoryHistory::default();
        let (events, _sub) = record_events(&history);

        history.push(Location::new("/a").with_search("?q=1"));

        let event = events.borrow()[0].clone();
        assert_eq!(event.location, Location::new("/a").with_search("?q=1"));
    }

    #[test]
    fn unsubscribed_listener_stops_receiving() {
        let history = MemoryHistory::default();
        let (events, sub) = record_events(&history);

        history.push(Location::new("/a"));
        sub.unsubscribe();
        history.push(Location::new("/b"));

        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn listener_may_reenter_history() {
        let history = Rc::new(MemoryHistory::default());
        let reentered = Rc::new(Cell::new(false));

        let inner = history.clone();
        let flag = reentered.clone();
        let _sub = history.listen(Box::new(move |event| {
            if event.kind == ActionKind::Push && !flag.get() {
                flag.set(true);
                inner.replace(event.location.clone().with_hash("#seen"));
            }
        }));

        history.push(Location::new("/a"));

        assert!(reentered.get());
        assert_eq!(history.location().hash, "#seen");
    }

    #[test]
    fn router_state_mirrors_current_pair() {
        let history = MemoryHistory::default();
        history.push(Location::new("/a"));

        let state = history.router_state();
        assert_eq!(state.location, Location::new("/a"));
        assert_eq!(state.action, ActionKind::Push);
    }

    #[test]
    fn subscription_outliving_history_is_safe() {
        let history = MemoryHistory::default();
        let (_events, sub) = record_events(&history);

        drop(history);
        sub.unsubscribe();
    }
}
