//! `MirrorSink` over real form controls.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use boldtip_enhance_core::MirrorSink;

/// A text-bearing form control that can act as a mirror field.
///
/// The progressive-enhancement baseline uses a textarea, but nothing stops
/// a page from mirroring into a plain input.
#[derive(Debug, Clone)]
pub enum FormControl {
    TextArea(HtmlTextAreaElement),
    Input(HtmlInputElement),
}

impl FormControl {
    /// Downcast an element to a supported form control.
    ///
    /// Returns `None` for anything without a `value` the enhancement layer
    /// can write.
    pub fn from_element(element: Element) -> Option<Self> {
        match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(textarea) => Some(FormControl::TextArea(textarea)),
            Err(element) => element
                .dyn_into::<HtmlInputElement>()
                .ok()
                .map(FormControl::Input),
        }
    }

    /// The form owning this control, if any.
    pub fn form(&self) -> Option<HtmlFormElement> {
        match self {
            FormControl::TextArea(el) => el.form(),
            FormControl::Input(el) => el.form(),
        }
    }

    /// The control's element id.
    pub fn id(&self) -> String {
        match self {
            FormControl::TextArea(el) => el.id(),
            FormControl::Input(el) => el.id(),
        }
    }
}

/// `MirrorSink` writing through to a real form control's value.
#[derive(Debug, Clone)]
pub struct FieldMirror {
    control: FormControl,
}

impl FieldMirror {
    /// Wrap a form control.
    pub fn new(control: FormControl) -> Self {
        Self { control }
    }

    /// The wrapped control.
    pub fn control(&self) -> &FormControl {
        &self.control
    }
}

impl MirrorSink for FieldMirror {
    fn write(&self, value: &str) {
        match &self.control {
            FormControl::TextArea(el) => el.set_value(value),
            FormControl::Input(el) => el.set_value(value),
        }
    }

    fn value(&self) -> String {
        match &self.control {
            FormControl::TextArea(el) => el.value(),
            FormControl::Input(el) => el.value(),
        }
    }
}
