//! Core types shared across the crate.
//!
//! This module holds the identifier type for content items and the error
//! type for the host's metadata store surface. Everything else in the crate
//! is built in terms of these.

pub mod error;

pub use error::StoreError;

/// Identifier of a content item (post) in the host platform.
///
/// The host assigns these; the crate only threads them through to the
/// metadata store and stringifies one when a shortcode asks for the current
/// item id as link target.
pub type ItemId = u64;
