//! Companion document handling

pub mod marker;
pub mod sync;

pub use marker::{MarkerMatch, VersionMarker};
pub use sync::{DocumentSync, sync_document};
