//! The sibling date-field enhancer.
//!
//! No synchronization contract here: the picker writes directly into the
//! native input's value, so attachment is the whole job.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use boldtip_enhance_core::DatePickerConfig;

use crate::widgets::{flatpickr, js_reason};

/// Marker class on the ancestor of date/time inputs.
pub const DATETIME_MARKER_CLASS: &str = "boldtip-field-datetime";

/// Attach a calendar/time picker to every input under a marker ancestor.
///
/// Returns the number of pickers attached. Inputs outside the marker are
/// untouched; a page without marked fields is a no-op.
pub fn enhance_date_fields(document: &Document, config: &DatePickerConfig) -> usize {
    let selector = format!(".{DATETIME_MARKER_CLASS} input");
    let inputs = match document.query_selector_all(&selector) {
        Ok(inputs) => inputs,
        Err(err) => {
            tracing::error!(error = %js_reason(&err), "date input query failed");
            return 0;
        }
    };
    if inputs.length() == 0 {
        return 0;
    }

    let options = match serde_wasm_bindgen::to_value(config) {
        Ok(options) => options,
        Err(err) => {
            tracing::error!(error = %err, "date picker options construction failed");
            return 0;
        }
    };

    let mut attached = 0;
    for index in 0..inputs.length() {
        let Some(node) = inputs.get(index) else {
            continue;
        };
        let Some(input) = node.dyn_ref::<Element>() else {
            continue;
        };

        match flatpickr(input, &options) {
            Ok(_) => attached += 1,
            Err(err) => {
                tracing::error!(
                    input = %input.id(),
                    error = %js_reason(&err),
                    "date picker attachment failed"
                );
            }
        }
    }

    tracing::debug!(attached, "date field enhancement finished");
    attached
}
