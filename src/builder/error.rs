//! Build errors for the reconciler builder.

use thiserror::Error;

/// Errors that can occur when building a reconciler.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("History collaborator not specified. Call .history(history) before .build()")]
    MissingHistory,

    #[error("Store collaborator not specified. Call .store(store) before .build()")]
    MissingStore,
}
