//! Command middleware translating navigation intents into history
//! operations.

use crate::core::{NavCommand, RouterAction, RouterMessage};
use crate::history::History;
use crate::store::Middleware;
use std::rc::Rc;
use tracing::trace;

/// Intercepts `CallHistoryMethod` actions at the dispatch boundary.
///
/// A navigation command is applied to the history collaborator and
/// consumed; the store never reduces it. What the store eventually
/// sees is the `LocationChanged` notification produced by the
/// resulting navigation event. Every other action passes through
/// unchanged.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use routemirror::bridge::RouterMiddleware;
/// use routemirror::core::{Location, RouterAction};
/// use routemirror::history::{History, MemoryHistory};
/// use routemirror::store::Middleware;
///
/// let history = Rc::new(MemoryHistory::default());
/// let middleware = RouterMiddleware::new(history.clone());
///
/// let consumed = middleware.handle(RouterAction::push(Location::new("/inbox")));
/// assert!(consumed.is_none());
/// assert_eq!(history.location().pathname, "/inbox");
/// ```
pub struct RouterMiddleware<H> {
    history: Rc<H>,
}

impl<H: History> RouterMiddleware<H> {
    /// Wrap the history collaborator the commands should act on.
    pub fn new(history: Rc<H>) -> Self {
        Self { history }
    }

    fn apply(&self, command: &NavCommand) {
        trace!(method = command.method_name(), "applying navigation command");
        match command {
            NavCommand::Push(location) => self.history.push(location.clone()),
            NavCommand::Replace(location) => self.history.replace(location.clone()),
            NavCommand::Go(delta) => self.history.go(*delta),
            NavCommand::Back => self.history.back(),
            NavCommand::Forward => self.history.forward(),
        }
    }
}

impl<H: History, A: RouterMessage> Middleware<A> for RouterMiddleware<H> {
    fn handle(&self, action: A) -> Option<A> {
        match action.as_router() {
            Some(RouterAction::CallHistoryMethod(command)) => {
                let command = command.clone();
                self.apply(&command);
                None
            }
            _ => Some(action),
        }
    }
}
