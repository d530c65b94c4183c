//! Keeping the companion document's version marker in sync

use super::marker::VersionMarker;
use crate::error::VerbumpError;
use crate::types::SemVer;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Outcome of writing a version into the companion document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSync {
    /// The marker was rewritten; holds the version text it displayed before
    Updated { previous: String },
    /// The document exists but has no well-formed marker; it was left as is
    MarkerNotFound,
    /// The document does not exist; nothing was created
    DocumentMissing,
}

/// Rewrites the version marker in the document at `path`
///
/// All bytes outside the marker's version text are preserved. The file is
/// only written when a marker was found.
pub fn sync_document(
    path: &Path,
    marker: &VersionMarker,
    version: SemVer,
) -> Result<DocumentSync, VerbumpError> {
    let io_err = |source| VerbumpError::Document {
        path: path.to_path_buf(),
        source,
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "companion document not found");
            return Ok(DocumentSync::DocumentMissing);
        }
        Err(e) => return Err(io_err(e)),
    };

    let Some(found) = marker.locate(&content) else {
        tracing::warn!(path = %path.display(), "no version marker found; document left unchanged");
        return Ok(DocumentSync::MarkerNotFound);
    };

    let previous = found.value.to_string();
    fs::write(path, found.replace_in(&content, version)).map_err(io_err)?;
    tracing::debug!(path = %path.display(), %previous, %version, "updated version marker");

    Ok(DocumentSync::Updated { previous })
}
