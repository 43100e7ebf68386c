//! Error types for the metadata store surface.
//!
//! The render path is infallible by design: shortcode parameters are
//! optional strings with empty defaults, and custom-field lookups collapse
//! to empty strings on any failure. The only fallible surface the crate
//! exposes is the host's metadata store, used by the save-time guard.

use thiserror::Error;

/// Error raised by a [`MetadataStore`](crate::host::MetadataStore)
/// implementation.
///
/// Expanders never propagate this: a failed `read` is logged and treated as
/// an absent value. The save path does propagate it, since a flag that
/// cannot be written or cleared is a host-visible condition.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store rejected or could not complete the operation.
    #[error("metadata backend error: {reason}")]
    Backend {
        /// Backend-provided description of the failure.
        reason: String,
    },

    /// An I/O failure from a file- or socket-backed store.
    #[error("metadata store I/O error")]
    Io(#[from] std::io::Error),
}
