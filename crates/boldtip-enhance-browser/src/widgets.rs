//! Extern bindings to the embedded widget libraries.
//!
//! The widget libraries are opaque external collaborators loaded by the
//! host page; web-sys has no bindings for them, so this module declares
//! custom `wasm_bindgen` imports the same way web-sys gaps are usually
//! papered over. Every call that can throw is declared `catch`, so a widget
//! in an inconsistent state surfaces as an `Err` instead of a wasm trap.

use wasm_bindgen::prelude::*;

use boldtip_enhance_core::{
    DocumentSource, EditorConfig, ExportError, MetadataSource,
};

// === Rich-text widget (Quill) ===

#[wasm_bindgen]
extern "C" {
    /// A rich-text editor instance owning its in-memory document.
    #[derive(Clone)]
    pub type Quill;

    /// `new Quill(selector, options)` - mounts the editor onto the element
    /// matched by `selector`.
    #[wasm_bindgen(constructor, catch)]
    pub fn new(selector: &str, options: &JsValue) -> Result<Quill, JsValue>;

    /// Subscribe to a widget event. `text-change` handlers receive
    /// `(delta, oldDelta, source)` where `source` is the origin tag.
    #[wasm_bindgen(method)]
    pub fn on(this: &Quill, event: &str, handler: &js_sys::Function);

    /// The editor's content element; its `innerHTML` is the canonical
    /// serialized export of the document.
    #[wasm_bindgen(method, getter, catch)]
    pub fn root(this: &Quill) -> Result<web_sys::HtmlElement, JsValue>;
}

// === Metadata widget ===

#[wasm_bindgen]
extern "C" {
    /// A schema-driven structured editor owned by the host page.
    #[derive(Clone)]
    pub type MetadataEditor;

    /// Current structured value, serializable to JSON.
    #[wasm_bindgen(method, catch, js_name = getValue)]
    pub fn get_value(this: &MetadataEditor) -> Result<JsValue, JsValue>;
}

// === Date-picker widget (flatpickr) ===

#[wasm_bindgen]
extern "C" {
    /// `flatpickr(element, options)` - attaches a calendar/time picker that
    /// writes directly into the input's value.
    #[wasm_bindgen(catch)]
    pub fn flatpickr(input: &web_sys::Element, options: &JsValue) -> Result<JsValue, JsValue>;
}

// === DocumentSource / MetadataSource implementations ===

/// `DocumentSource` backed by a live rich-text widget instance.
#[derive(Clone)]
pub struct QuillDocument {
    widget: Quill,
}

impl QuillDocument {
    /// Wrap a mounted widget instance.
    pub fn new(widget: Quill) -> Self {
        Self { widget }
    }
}

impl DocumentSource for QuillDocument {
    fn export_html(&self) -> Result<String, ExportError> {
        let root = self
            .widget
            .root()
            .map_err(|err| ExportError::new(js_reason(&err)))?;
        Ok(root.inner_html())
    }
}

/// `MetadataSource` backed by the host page's structured editor.
#[derive(Clone)]
pub struct MetadataDocument {
    widget: MetadataEditor,
}

impl MetadataDocument {
    /// Wrap the host-owned widget instance.
    pub fn new(widget: MetadataEditor) -> Self {
        Self { widget }
    }
}

impl MetadataSource for MetadataDocument {
    fn export_json(&self) -> Result<String, ExportError> {
        let value = self
            .widget
            .get_value()
            .map_err(|err| ExportError::new(js_reason(&err)))?;
        let json = js_sys::JSON::stringify(&value)
            .map_err(|err| ExportError::new(js_reason(&err)))?;
        // JSON.stringify(undefined) yields undefined rather than text.
        json.as_string()
            .ok_or_else(|| ExportError::new("metadata value has no JSON form"))
    }
}

// === Option objects ===

/// Build the rich-text widget's options object from the typed config.
///
/// The toolbar serializes straight through serde; keyboard bindings need a
/// real JS handler function per entry, so they are assembled with `Reflect`.
pub fn quill_options(config: &EditorConfig) -> Result<JsValue, JsValue> {
    use js_sys::{Function, Object, Reflect};

    let toolbar = serde_wasm_bindgen::to_value(&config.toolbar)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let bindings = Object::new();
    for binding in &config.keyboard.passthrough {
        let entry = Object::new();
        Reflect::set(
            &entry,
            &JsValue::from_str("key"),
            &JsValue::from_f64(f64::from(binding.key)),
        )?;
        // Returning true tells the widget to let the browser handle the key.
        Reflect::set(
            &entry,
            &JsValue::from_str("handler"),
            &Function::new_no_args("return true;"),
        )?;
        Reflect::set(&bindings, &JsValue::from_str(binding.name), &entry)?;
    }
    let keyboard = Object::new();
    Reflect::set(&keyboard, &JsValue::from_str("bindings"), &bindings)?;

    let modules = Object::new();
    Reflect::set(&modules, &JsValue::from_str("toolbar"), &toolbar)?;
    Reflect::set(&modules, &JsValue::from_str("keyboard"), &keyboard)?;

    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("modules"), &modules)?;
    Reflect::set(
        &options,
        &JsValue::from_str("theme"),
        &JsValue::from_str(config.theme.as_str()),
    )?;

    Ok(options.into())
}

/// Display form of a thrown JS value, for error reporting.
pub(crate) fn js_reason(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
