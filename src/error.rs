//! Error types for layout edits and document restore
//!
//! Layout edits that cannot apply are rejected with a `LayoutError` and leave the tree
//! untouched. Document-level rejections and host payload failures surface as `CodecError`;
//! smaller schema problems inside a tree never become errors (see `codec::decode`).

use serde_json::Value;
use thiserror::Error;

use crate::model::{AreaPath, WidgetPath};

/// Boxed error produced by a host widget deserializer
pub type HostError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors from structural edits and maximize requests
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// No area exists at the given path
    #[error("no area at {0}")]
    NoSuchArea(AreaPath),

    /// The area at the given path is a split area, a tab area was expected
    #[error("area at {0} is not a tab area")]
    NotATabArea(AreaPath),

    /// The area at the given path is a tab area, a split area was expected
    #[error("area at {0} is not a split area")]
    NotASplitArea(AreaPath),

    /// A widget index was outside the tab area
    #[error("index {index} out of range for {len} widgets")]
    IndexOutOfRange { index: usize, len: usize },

    /// The widget path does not resolve in the active tree
    #[error("no widget at {0}")]
    NoSuchWidget(WidgetPath),

    /// Split weights did not match the child count
    #[error("expected {expected} sizes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// The dock instance has no layout tree
    #[error("dock has no layout")]
    EmptyDock,

    /// The dock instance is locked against structural edits
    #[error("dock is locked")]
    Locked,

    /// The dock instance is showing a single maximized widget
    #[error("dock is maximized")]
    Maximized,

    /// No dashboard exists at the given index
    #[error("no dashboard at index {0}")]
    NoSuchDashboard(usize),
}

/// Errors that abort decoding of a whole document or subtree
#[derive(Error, Debug)]
pub enum CodecError {
    /// The document's `type` tag is missing or not `application`
    #[error("attempted to deserialize unknown type: {found}")]
    UnknownType { found: String },

    /// The document's `version` is missing or not supported
    #[error("attempted to deserialize unknown version: {found} (supported: {expected})")]
    UnsupportedVersion { found: Value, expected: u32 },

    /// The document has the right tag and version but an unusable shape
    #[error("malformed document: {0}")]
    Malformed(String),

    /// The host deserializer rejected a widget payload
    #[error("failed to restore widget {title:?}")]
    Widget {
        title: String,
        #[source]
        source: HostError,
    },
}

/// Result type alias for layout edits
pub type LayoutResult<T> = Result<T, LayoutError>;
