//! Disposer handles for listener subscriptions.

/// Handle returned by a subscribe operation.
///
/// Dropping the handle (or calling [`unsubscribe`](Self::unsubscribe))
/// removes the callback from its source. The disposer runs exactly
/// once, and the handle is safe to hold after the source itself has
/// been torn down.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use routemirror::subscription::Subscription;
///
/// let disposed = Rc::new(Cell::new(false));
/// let flag = disposed.clone();
/// let sub = Subscription::new(move || flag.set(true));
///
/// sub.unsubscribe();
/// assert!(disposed.get());
/// ```
pub struct Subscription {
    disposer: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a disposer closure.
    pub fn new(disposer: impl FnOnce() + 'static) -> Self {
        Self {
            disposer: Some(Box::new(disposer)),
        }
    }

    /// A handle that does nothing when dropped.
    pub fn noop() -> Self {
        Self { disposer: None }
    }

    /// Remove the callback now instead of at drop time.
    pub fn unsubscribe(mut self) {
        self.dispose();
    }

    fn dispose(&mut self) {
        if let Some(disposer) = self.disposer.take() {
            disposer();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("live", &self.disposer.is_some())
            .finish()
    }
}
