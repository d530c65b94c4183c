//! Settings file parsing and validation

pub mod settings;

pub use settings::{
    DEFAULT_DOCUMENT_PATH, DEFAULT_MARKER_ID, DEFAULT_RECORD_PATH, DEFAULT_SETTINGS_FILE,
    MarkerConfig, PathsConfig, Settings,
};
