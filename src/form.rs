//! The page side of the application: form fields, sections, result area and
//! clipboard.
//!
//! The DOM stays in JS. Everything the controller reads or writes goes through
//! [`FormRenderer`], and [`FormState`] is the plain-data implementation that is
//! shipped across the wasm boundary with `serde-wasm-bindgen`: JS collects the
//! current field values, calls into the app, then applies the returned state.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Field id of the shared seed input.
pub const SEED_FIELD: &str = "seed";

/// A value pushed into a form field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldValue {
    /// `<input type="number">` with validation limits.
    Number { min: i64, max: i64, value: i64 },
    /// Free text, e.g. a textarea.
    Text { value: String },
}

/// External form the controller synchronizes with.
pub trait FormRenderer {
    /// Raw text of field `id`, or `None` if the page has no such field.
    fn read_field(&self, id: &str) -> Option<String>;
    fn write_field(&mut self, id: &str, value: FieldValue);
    fn set_section_visible(&mut self, section: &str, visible: bool);
    fn set_shared_controls_visible(&mut self, visible: bool);
    /// Set the generator selector; the empty string is the default option.
    fn set_selector(&mut self, section: &str);
    fn set_result(&mut self, html: &str);
}

/// Receives the shareable URL. Writes are fire-and-forget.
pub trait Clipboard {
    fn write_text(&mut self, text: &str);
}

/// Snapshot of the page form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormState {
    /// Raw text per field id.
    pub fields: BTreeMap<String, String>,
    /// Validation limits per numeric field id.
    pub bounds: BTreeMap<String, (i64, i64)>,
    pub visible_sections: BTreeSet<String>,
    pub shared_controls_visible: bool,
    pub selector: String,
    pub result: String,
}

impl FormState {
    /// Form holding only the given raw field values.
    pub fn with_fields<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|(id, value)| (id.to_string(), value.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    /// Set the raw text of a field, as a user typing into it would.
    pub fn set_field(&mut self, id: &str, value: &str) {
        self.fields.insert(id.to_string(), value.to_string());
    }
}

impl FormRenderer for FormState {
    fn read_field(&self, id: &str) -> Option<String> {
        self.fields.get(id).cloned()
    }

    fn write_field(&mut self, id: &str, value: FieldValue) {
        match value {
            FieldValue::Number { min, max, value } => {
                self.bounds.insert(id.to_string(), (min, max));
                self.fields.insert(id.to_string(), value.to_string());
            }
            FieldValue::Text { value } => {
                self.bounds.remove(id);
                self.fields.insert(id.to_string(), value);
            }
        }
    }

    fn set_section_visible(&mut self, section: &str, visible: bool) {
        if visible {
            self.visible_sections.insert(section.to_string());
        } else {
            self.visible_sections.remove(section);
        }
    }

    fn set_shared_controls_visible(&mut self, visible: bool) {
        self.shared_controls_visible = visible;
    }

    fn set_selector(&mut self, section: &str) {
        self.selector = section.to_string();
    }

    fn set_result(&mut self, html: &str) {
        self.result = html.to_string();
    }
}

/// Clipboard that keeps every written text, newest last.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub writes: Vec<String>,
}

impl RecordingClipboard {
    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, text: &str) {
        self.writes.push(text.to_string());
    }
}
