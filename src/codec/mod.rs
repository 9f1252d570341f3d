//! Layout codec - dock layouts to and from portable JSON documents
//!
//! Encoding is total and order-preserving. Decoding treats its input as foreign data:
//! every field is checked before it is trusted, broken subtrees are dropped rather than
//! failing the whole load, and only a document-level tag/version mismatch or a host
//! payload failure aborts.
//!
//! Widget payloads never pass through this module uninspected by the host: a
//! `WidgetCodec` supplied per call turns payloads into `configuration` values and back.

mod decode;
mod document;
mod encode;

use std::marker::PhantomData;

use serde_json::Value;

use crate::error::HostError;

pub use decode::{decode_area, Decoder, Diagnostic};
pub use document::{
    ApplicationDoc, AreaDoc, DashboardDoc, WidgetDoc, DOCUMENT_VERSION, TYPE_APPLICATION,
    TYPE_DASHBOARD, TYPE_SPLIT_AREA, TYPE_TAB_AREA,
};
pub use encode::{encode_area, encode_dashboard, encode_root, encode_workspace};

/// Host-provided conversion between widget payloads and document `configuration` values
pub trait WidgetCodec {
    type Widget;
    type Error: Into<HostError>;

    fn serialize_widget(&self, widget: &Self::Widget) -> Value;

    fn deserialize_widget(&self, configuration: &Value) -> Result<Self::Widget, Self::Error>;
}

/// A `WidgetCodec` built from a pair of closures
pub struct FnCodec<W, E, S, D> {
    serialize: S,
    deserialize: D,
    _marker: PhantomData<fn(&Value) -> Result<W, E>>,
}

/// Build a `WidgetCodec` from a serialize and a deserialize closure
pub fn from_fns<W, E, S, D>(serialize: S, deserialize: D) -> FnCodec<W, E, S, D>
where
    S: Fn(&W) -> Value,
    D: Fn(&Value) -> Result<W, E>,
    E: Into<HostError>,
{
    FnCodec {
        serialize,
        deserialize,
        _marker: PhantomData,
    }
}

impl<W, E, S, D> WidgetCodec for FnCodec<W, E, S, D>
where
    S: Fn(&W) -> Value,
    D: Fn(&Value) -> Result<W, E>,
    E: Into<HostError>,
{
    type Widget = W;
    type Error = E;

    fn serialize_widget(&self, widget: &W) -> Value {
        (self.serialize)(widget)
    }

    fn deserialize_widget(&self, configuration: &Value) -> Result<W, E> {
        (self.deserialize)(configuration)
    }
}

/// Keeps each widget's `configuration` value as its payload, unchanged.
///
/// Useful for tools that inspect or rewrite documents without knowing the widgets.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPassthrough;

impl WidgetCodec for JsonPassthrough {
    type Widget = Value;
    type Error = std::convert::Infallible;

    fn serialize_widget(&self, widget: &Value) -> Value {
        widget.clone()
    }

    fn deserialize_widget(&self, configuration: &Value) -> Result<Value, Self::Error> {
        Ok(configuration.clone())
    }
}
