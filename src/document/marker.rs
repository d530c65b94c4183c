//! Locating the version marker inside the companion document
//!
//! The marker looks like:
//!
//! ```text
//! Version: <span id="app-version">1.4.2</span>
//! ```
//!
//! Only the text between the opening and closing tags is ever rewritten.

use crate::types::SemVer;
use std::ops::Range;

/// Text that precedes the marker's opening tag
pub const MARKER_LABEL: &str = "Version: ";

const CLOSING_TAG: &str = "</span>";

/// Describes the version marker to look for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMarker {
    opening: String,
}

/// A marker found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMatch<'a> {
    /// Byte range of the version text inside the document
    pub value_range: Range<usize>,
    /// The version text currently displayed
    pub value: &'a str,
}

impl VersionMarker {
    /// Creates a marker locator for a span with the given id
    pub fn new(id: &str) -> Self {
        VersionMarker {
            opening: format!("{MARKER_LABEL}<span id=\"{id}\">"),
        }
    }

    /// Finds the first well-formed marker in `text`
    ///
    /// A candidate must be followed by at least one character from `[0-9.]`
    /// and then the closing tag. Malformed candidates are skipped.
    pub fn locate<'a>(&self, text: &'a str) -> Option<MarkerMatch<'a>> {
        let mut search_from = 0;

        while let Some(offset) = text[search_from..].find(&self.opening) {
            let value_start = search_from + offset + self.opening.len();
            let rest = &text[value_start..];

            let value_len = rest
                .bytes()
                .take_while(|b| b.is_ascii_digit() || *b == b'.')
                .count();

            if value_len > 0 && rest[value_len..].starts_with(CLOSING_TAG) {
                let value_range = value_start..value_start + value_len;
                return Some(MarkerMatch {
                    value: &text[value_range.clone()],
                    value_range,
                });
            }

            search_from = value_start;
        }

        None
    }

    /// Returns `text` with the marker's version replaced, or None if no
    /// marker was found
    pub fn rewrite(&self, text: &str, version: SemVer) -> Option<String> {
        self.locate(text).map(|found| found.replace_in(text, version))
    }
}

impl MarkerMatch<'_> {
    /// Returns `text` with this match's version text replaced
    ///
    /// `text` must be the document this match was located in.
    pub fn replace_in(&self, text: &str, version: SemVer) -> String {
        let version = version.to_string();

        let mut out = String::with_capacity(text.len() - self.value.len() + version.len());
        out.push_str(&text[..self.value_range.start]);
        out.push_str(&version);
        out.push_str(&text[self.value_range.end..]);
        out
    }
}

impl Default for VersionMarker {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MARKER_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<html>\n<footer>Version: <span id=\"app-version\">1.2.3</span></footer>\n</html>\n";

    #[test]
    fn test_locate_marker() {
        let marker = VersionMarker::default();
        let found = marker.locate(PAGE).unwrap();
        assert_eq!(found.value, "1.2.3");
        assert_eq!(&PAGE[found.value_range], "1.2.3");
    }

    #[test]
    fn test_rewrite_only_touches_version() {
        let marker = VersionMarker::default();
        let updated = marker.rewrite(PAGE, SemVer::new(1, 3, 0)).unwrap();
        assert_eq!(
            updated,
            "<html>\n<footer>Version: <span id=\"app-version\">1.3.0</span></footer>\n</html>\n"
        );
    }

    #[test]
    fn test_rewrite_handles_longer_and_shorter_versions() {
        let marker = VersionMarker::default();
        let longer = marker.rewrite(PAGE, SemVer::new(10, 20, 30)).unwrap();
        assert!(longer.contains(">10.20.30</span>"));

        let shorter = marker.rewrite(&longer, SemVer::new(2, 0, 0)).unwrap();
        assert_eq!(shorter.len(), longer.len() - 3);
        assert!(shorter.contains(">2.0.0</span>"));
    }

    #[test]
    fn test_missing_marker() {
        let marker = VersionMarker::default();
        assert!(marker.locate("<html></html>").is_none());
        assert!(marker.rewrite("<html></html>", SemVer::new(1, 0, 0)).is_none());
    }

    #[test]
    fn test_malformed_markers_are_not_matched() {
        let marker = VersionMarker::default();
        // Empty value
        assert!(marker.locate("Version: <span id=\"app-version\"></span>").is_none());
        // Non-numeric value
        assert!(marker.locate("Version: <span id=\"app-version\">v1.0</span>").is_none());
        // Missing closing tag
        assert!(marker.locate("Version: <span id=\"app-version\">1.0.0").is_none());
        // Missing label
        assert!(marker.locate("<span id=\"app-version\">1.0.0</span>").is_none());
    }

    #[test]
    fn test_skips_malformed_candidate_before_valid_one() {
        let marker = VersionMarker::default();
        let text = "Version: <span id=\"app-version\">TBD</span>\nVersion: <span id=\"app-version\">0.9.1</span>";
        let found = marker.locate(text).unwrap();
        assert_eq!(found.value, "0.9.1");
        assert!(found.value_range.start > text.find('\n').unwrap());
    }

    #[test]
    fn test_only_first_marker_is_rewritten() {
        let marker = VersionMarker::default();
        let text = "Version: <span id=\"app-version\">1.0.0</span> Version: <span id=\"app-version\">1.0.0</span>";
        let updated = marker.rewrite(text, SemVer::new(1, 0, 1)).unwrap();
        assert_eq!(
            updated,
            "Version: <span id=\"app-version\">1.0.1</span> Version: <span id=\"app-version\">1.0.0</span>"
        );
    }

    #[test]
    fn test_custom_marker_id() {
        let marker = VersionMarker::new("build-version");
        assert!(marker.locate(PAGE).is_none());

        let text = "Version: <span id=\"build-version\">3.1.4</span>";
        assert_eq!(marker.locate(text).unwrap().value, "3.1.4");
    }

    #[test]
    fn test_non_ascii_surroundings() {
        let marker = VersionMarker::default();
        let text = "Été — Version: <span id=\"app-version\">1.0.0</span> ✓";
        let updated = marker.rewrite(text, SemVer::new(1, 1, 0)).unwrap();
        assert_eq!(updated, "Été — Version: <span id=\"app-version\">1.1.0</span> ✓");
    }
}
