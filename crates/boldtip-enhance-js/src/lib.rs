//! WASM entry point for boldtip's progressive form enhancement.
//!
//! The host page loads this module and calls one of the exported enhancers
//! once at page load. The plain HTML baseline keeps working without it;
//! everything here only layers widgets on top.

use wasm_bindgen::prelude::*;

use boldtip_enhance_browser::{enhance_date_fields, enhance_rich_text, MetadataEditor, PageRoles, RoleIds};
use boldtip_enhance_core::{DatePickerConfig, EditorConfig};

/// Initialize panic reporting and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    init_tracing();
}

/// Set up the tracing subscriber with console output.
fn init_tracing() {
    use tracing::subscriber::set_global_default;
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::Registry;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    let _ = set_global_default(Registry::default().with(wasm_layer));
}

/// Enhance every marked rich-text container on the page.
///
/// Resolves the page's metadata roles once, wires the mirror-sync and
/// submit-reconciliation contract for each container, and returns the
/// number of bindings created. Pass the host page's structured-metadata
/// widget instance when it has one; its serialized value is then written to
/// the metadata mirror field on every submission.
#[wasm_bindgen(js_name = enhanceForms)]
pub fn enhance_forms(metadata_widget: Option<MetadataEditor>) -> u32 {
    let document = gloo_utils::document();
    let roles = PageRoles::resolve(&document, &RoleIds::default());
    enhance_rich_text(&document, &EditorConfig::default(), &roles, metadata_widget) as u32
}

/// Attach a time-enabled, ISO-8601-formatted picker to every marked date
/// input. Returns the number of pickers attached.
#[wasm_bindgen(js_name = enhanceDateFields)]
pub fn enhance_date_fields_entry() -> u32 {
    enhance_date_fields(&gloo_utils::document(), &DatePickerConfig::default()) as u32
}

/// Run both enhancers once at page load. Returns the total number of
/// widgets attached.
#[wasm_bindgen(js_name = enhanceAll)]
pub fn enhance_all(metadata_widget: Option<MetadataEditor>) -> u32 {
    enhance_forms(metadata_widget) + enhance_date_fields_entry()
}
