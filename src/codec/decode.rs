//! Decoding: untrusted document values back into layout trees
//!
//! Documents may come from a hand-edited file or a third-party store, so nothing is
//! assumed about their shape. Problems are handled at the smallest safe scope:
//! - an unrecognized area (bad `type`, not an object) is dropped, siblings survive
//! - an out-of-range `currentIndex` is quietly reset to the first tab
//! - a document with the wrong `type` or `version` is rejected as a whole
//! - a failing host deserializer is propagated, since no fallback widget exists
//!
//! Every dropped or repaired piece is logged and recorded as a `Diagnostic`.

use std::fmt;

use serde_json::{Map, Value};

use super::document::{
    DOCUMENT_VERSION, TYPE_APPLICATION, TYPE_DASHBOARD, TYPE_SPLIT_AREA, TYPE_TAB_AREA,
};
use super::WidgetCodec;
use crate::error::CodecError;
use crate::model::{
    AreaNode, DashboardEntry, Orientation, SplitArea, TabArea, WidgetRef, WorkspaceDocument,
};

static NULL: Value = Value::Null;

/// A piece of a document that was dropped or repaired during decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Location in the document, e.g. `$.dashboards[0].config.children[1]`
    pub path: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Decode a single layout tree. `null` and unrecognized areas decode to `None`.
pub fn decode_area<C: WidgetCodec>(
    value: &Value,
    codec: &C,
) -> Result<Option<AreaNode<C::Widget>>, CodecError> {
    Decoder::new(codec).decode_area(value)
}

/// Tolerant document decoder collecting diagnostics as it goes
pub struct Decoder<'a, C> {
    codec: &'a C,
    diagnostics: Vec<Diagnostic>,
}

impl<'a, C: WidgetCodec> Decoder<'a, C> {
    pub fn new(codec: &'a C) -> Self {
        Self {
            codec,
            diagnostics: Vec::new(),
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Decode a single layout tree rooted at `value`
    pub fn decode_area(&mut self, value: &Value) -> Result<Option<AreaNode<C::Widget>>, CodecError> {
        self.area(value, "$")
    }

    /// Decode and validate a whole workspace document
    pub fn decode_workspace(
        &mut self,
        value: &Value,
    ) -> Result<WorkspaceDocument<C::Widget>, CodecError> {
        let Some(object) = value.as_object() else {
            return Err(CodecError::UnknownType {
                found: "unknown".to_string(),
            });
        };

        let kind = type_tag(object).unwrap_or("unknown");
        if kind != TYPE_APPLICATION {
            return Err(CodecError::UnknownType {
                found: kind.to_string(),
            });
        }

        let version = object.get("version").unwrap_or(&NULL);
        if version.as_u64() != Some(u64::from(DOCUMENT_VERSION)) {
            return Err(CodecError::UnsupportedVersion {
                found: version.clone(),
                expected: DOCUMENT_VERSION,
            });
        }

        let Some(entries) = object.get("dashboards").and_then(Value::as_array) else {
            return Err(CodecError::Malformed(
                "`dashboards` is missing or not an array".to_string(),
            ));
        };

        let mut dashboards = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let path = format!("$.dashboards[{}]", i);
            dashboards.push(self.dashboard(entry, &path)?);
        }

        Ok(WorkspaceDocument {
            version: DOCUMENT_VERSION,
            dashboards,
        })
    }

    /// Every entry keeps its slot: one that cannot be read becomes an empty dashboard
    fn dashboard(
        &mut self,
        value: &Value,
        path: &str,
    ) -> Result<DashboardEntry<C::Widget>, CodecError> {
        let Some(object) = value.as_object() else {
            self.warn(path, "dashboard entry is not an object, left empty");
            return Ok(DashboardEntry {
                label: String::new(),
                root: None,
            });
        };

        let label = self.title(object, path);
        match object.get("type") {
            None => {}
            Some(Value::String(kind)) if kind == TYPE_DASHBOARD => {}
            Some(other) => {
                self.warn(path, format!("unknown dashboard type {}, left empty", other));
                return Ok(DashboardEntry { label, root: None });
            }
        }

        let root = match object.get("config") {
            None | Some(Value::Null) => None,
            Some(config) => {
                let root = self.area(config, &format!("{}.config", path))?;
                if root.is_none() {
                    self.warn(path, "layout could not be restored, dashboard left empty");
                }
                root
            }
        };

        Ok(DashboardEntry { label, root })
    }

    fn area(
        &mut self,
        value: &Value,
        path: &str,
    ) -> Result<Option<AreaNode<C::Widget>>, CodecError> {
        if value.is_null() {
            return Ok(None);
        }
        let Some(object) = value.as_object() else {
            self.warn(path, "area is not an object, dropped");
            return Ok(None);
        };

        match type_tag(object) {
            Some(TYPE_TAB_AREA) => Ok(Some(AreaNode::Tab(self.tab_area(object, path)?))),
            Some(TYPE_SPLIT_AREA) => Ok(Some(AreaNode::Split(self.split_area(object, path)?))),
            other => {
                self.warn(
                    path,
                    format!(
                        "attempted to deserialize unknown type: {}, dropped",
                        other.unwrap_or("unknown")
                    ),
                );
                Ok(None)
            }
        }
    }

    fn tab_area(
        &mut self,
        object: &Map<String, Value>,
        path: &str,
    ) -> Result<TabArea<C::Widget>, CodecError> {
        let entries = self.array(object, "widgets", path);

        let mut widgets = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let widget_path = format!("{}.widgets[{}]", path, i);
            let Some(entry) = entry.as_object() else {
                self.warn(&widget_path, "widget entry is not an object, skipped");
                continue;
            };

            let title = self.title(entry, &widget_path);
            let configuration = entry.get("configuration").unwrap_or(&NULL);
            let payload = match self.codec.deserialize_widget(configuration) {
                Ok(payload) => payload,
                Err(e) => {
                    return Err(CodecError::Widget {
                        title,
                        source: e.into(),
                    })
                }
            };
            widgets.push(WidgetRef { title, payload });
        }

        let requested = object.get("currentIndex").and_then(tab_index);
        let area = TabArea::new(widgets, requested);
        if !area.is_empty() && area.current() != requested {
            tracing::debug!(
                "{}: currentIndex {:?} out of range for {} widgets, using 0",
                path,
                object.get("currentIndex"),
                area.len()
            );
        }
        Ok(area)
    }

    fn split_area(
        &mut self,
        object: &Map<String, Value>,
        path: &str,
    ) -> Result<SplitArea<C::Widget>, CodecError> {
        let orientation = match object
            .get("orientation")
            .and_then(Value::as_str)
            .and_then(Orientation::parse)
        {
            Some(orientation) => orientation,
            None => {
                self.warn(path, "missing or unknown orientation, using horizontal");
                Orientation::Horizontal
            }
        };

        let raw_children = self.array(object, "children", path);
        let raw_sizes: Option<Vec<f64>> = match object.get("sizes") {
            Some(Value::Array(sizes)) => sizes.iter().map(Value::as_f64).collect(),
            _ => None,
        };
        match &raw_sizes {
            Some(sizes) if sizes.len() == raw_children.len() => {}
            Some(sizes) => self.warn(
                path,
                format!(
                    "{} sizes for {} children, using equal weights",
                    sizes.len(),
                    raw_children.len()
                ),
            ),
            None if raw_children.is_empty() => {}
            None => self.warn(path, "missing or non-numeric sizes, using equal weights"),
        }

        // Children and their weights are kept or dropped together so that index `i`
        // of `sizes` keeps describing index `i` of `children`.
        let mut children = Vec::with_capacity(raw_children.len());
        let mut sizes = Vec::with_capacity(raw_children.len());
        for (i, child) in raw_children.iter().enumerate() {
            let child_path = format!("{}.children[{}]", path, i);
            if let Some(node) = self.area(child, &child_path)? {
                children.push(node);
                if let Some(size) = raw_sizes.as_ref().and_then(|sizes| sizes.get(i)) {
                    sizes.push(*size);
                }
            }
        }

        Ok(SplitArea::new(orientation, children, sizes))
    }

    fn title(&mut self, object: &Map<String, Value>, path: &str) -> String {
        match object.get("title") {
            Some(Value::String(title)) => title.clone(),
            None | Some(Value::Null) => String::new(),
            Some(other) => {
                self.warn(path, format!("title {} is not a string, using \"\"", other));
                String::new()
            }
        }
    }

    /// An optional array field; anything other than an array or null is reported and
    /// treated as empty
    fn array<'v>(&mut self, object: &'v Map<String, Value>, key: &str, path: &str) -> &'v [Value] {
        match object.get(key) {
            Some(Value::Array(items)) => items,
            None | Some(Value::Null) => &[],
            Some(_) => {
                self.warn(path, format!("`{}` is not an array, treated as empty", key));
                &[]
            }
        }
    }

    fn warn(&mut self, path: &str, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{}: {}", path, message);
        self.diagnostics.push(Diagnostic {
            path: path.to_string(),
            message,
        });
    }
}

fn type_tag(object: &Map<String, Value>) -> Option<&str> {
    object.get("type").and_then(Value::as_str)
}

/// A non-negative integral index; JS hosts may write `1.0` for `1`
fn tab_index(value: &Value) -> Option<usize> {
    if let Some(index) = value.as_u64() {
        return usize::try_from(index).ok();
    }
    let index = value.as_f64()?;
    if index >= 0.0 && index.fract() == 0.0 && index <= u32::MAX as f64 {
        Some(index as usize)
    } else {
        None
    }
}
