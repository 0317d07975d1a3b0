//! The navigation-history collaborator contract.
//!
//! The reconciler does not own a history implementation; it consumes
//! anything exposing the operations below. [`MemoryHistory`] is the
//! in-process reference implementation, used standalone and by the
//! test suites.

mod memory;

pub use memory::MemoryHistory;

use crate::core::{ActionKind, Location, NavigationEvent, RouterState};
use crate::subscription::Subscription;

/// Callback invoked with every navigation event.
pub type HistoryListener = Box<dyn Fn(&NavigationEvent)>;

/// Contract for a navigation-history collaborator.
///
/// Implementations must notify listeners synchronously from within the
/// operation that caused the navigation, and must tolerate listeners
/// that re-enter the history during notification.
pub trait History {
    /// The current location.
    fn location(&self) -> Location;

    /// How the current location was reached.
    fn action(&self) -> ActionKind;

    /// Append a new entry, discarding any forward entries.
    fn push(&self, location: Location);

    /// Swap the current entry in place.
    fn replace(&self, location: Location);

    /// Move the index by a signed delta, clamped into range.
    fn go(&self, delta: i32);

    /// Move the index back by one.
    fn back(&self) {
        self.go(-1);
    }

    /// Move the index forward by one.
    fn forward(&self) {
        self.go(1);
    }

    /// Register a navigation listener; the returned handle removes it.
    fn listen(&self, listener: HistoryListener) -> Subscription;

    /// The current location/action pair as mirrored router state.
    fn router_state(&self) -> RouterState {
        RouterState::new(self.location(), self.action())
    }
}
