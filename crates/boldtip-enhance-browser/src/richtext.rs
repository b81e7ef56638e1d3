//! The rich-text enhancer: widget attachment, live sync, and submit-time
//! reconciliation wiring.
//!
//! Runs once at page load over a static snapshot of the DOM. Containers are
//! processed independently, in document order; a configuration error in one
//! aborts only that binding. Widget instances, change handlers, and submit
//! listeners all live for the page lifetime, so closures are intentionally
//! leaked after registration.

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement};

use boldtip_enhance_core::{
    ChangeNotice, ChangeOrigin, EditorBinding, EditorConfig, EnhanceError, FormBinding,
    MetadataBinding,
};

use crate::discover::{mark_enhanced_form, plan_container, ContainerPlan, RICHTEXT_MARKER_CLASS};
use crate::mirror::FieldMirror;
use crate::roles::PageRoles;
use crate::widgets::{js_reason, quill_options, MetadataDocument, MetadataEditor, Quill, QuillDocument};

/// Widget event carrying document mutations and their origin tag.
const TEXT_CHANGE_EVENT: &str = "text-change";

type BrowserMetadataBinding = MetadataBinding<MetadataDocument, FieldMirror>;

/// Enhance every marked rich-text container in the document.
///
/// Returns the number of bindings created. A page without containers is a
/// no-op; containers that fail to resolve are logged and skipped without
/// affecting their siblings.
pub fn enhance_rich_text(
    document: &Document,
    config: &EditorConfig,
    roles: &PageRoles,
    metadata_widget: Option<MetadataEditor>,
) -> usize {
    let containers = document.get_elements_by_class_name(RICHTEXT_MARKER_CLASS);
    if containers.length() == 0 {
        return 0;
    }

    let options = match quill_options(config) {
        Ok(options) => options,
        Err(err) => {
            tracing::error!(error = %js_reason(&err), "editor options construction failed");
            return 0;
        }
    };

    // The metadata binding is handed to the first container whose owner
    // form matches, so the metadata mirror is written once per submission.
    let mut metadata = metadata_pair(roles, metadata_widget);

    let mut enhanced = 0;
    for index in 0..containers.length() {
        let Some(container) = containers.item(index) else {
            continue;
        };

        match plan_container(document, &container) {
            Ok(plan) => match attach_editor(&plan, &options, &mut metadata) {
                Ok(()) => enhanced += 1,
                Err(err) => {
                    tracing::error!(error = %err, "rich-text widget attachment failed");
                }
            },
            Err(err) => {
                tracing::error!(error = %err, "skipping misconfigured rich-text container");
            }
        }
    }

    tracing::debug!(enhanced, "rich-text enhancement finished");
    enhanced
}

/// Attach one widget to a resolved container and wire both sync paths.
fn attach_editor(
    plan: &ContainerPlan,
    options: &JsValue,
    metadata: &mut Option<(BrowserMetadataBinding, HtmlFormElement)>,
) -> Result<(), EnhanceError> {
    mark_enhanced_form(&plan.form);

    let selector = format!("#{}", plan.container_id);
    let widget = Quill::new(&selector, options).map_err(|err| EnhanceError::WidgetConstruction {
        container: plan.container_id.clone(),
        reason: js_reason(&err),
    })?;

    // Live sync: best-effort mirror updates on user-originated changes.
    let live = EditorBinding::new(
        QuillDocument::new(widget.clone()),
        FieldMirror::new(plan.control.clone()),
    );
    let on_change = Closure::<dyn FnMut(JsValue, JsValue, JsValue)>::new(
        move |_delta: JsValue, _old_delta: JsValue, source: JsValue| {
            let tag = source.as_string().unwrap_or_default();
            let outcome = live.on_change(ChangeNotice {
                origin: ChangeOrigin::from_source_tag(&tag),
            });
            tracing::trace!(?outcome, "text-change processed");
        },
    );
    widget.on(TEXT_CHANGE_EVENT, on_change.as_ref().unchecked_ref());
    on_change.forget();

    // Submit-time reconciliation: the authority over the mirror's value.
    let owns_metadata = matches!(metadata.as_ref(), Some((_, meta_form)) if *meta_form == plan.form);
    let metadata_binding = if owns_metadata {
        metadata.take().map(|(binding, _)| binding)
    } else {
        None
    };
    let form_binding = FormBinding {
        editor: EditorBinding::new(
            QuillDocument::new(widget),
            FieldMirror::new(plan.control.clone()),
        ),
        metadata: metadata_binding,
    };
    let container_id = plan.container_id.clone();
    let listener = EventListener::new(&plan.form, "submit", move |_event: &Event| {
        // Never prevents default: only amends field values before the
        // browser's native submission proceeds.
        let report = form_binding.reconcile_all();
        tracing::debug!(
            container = %container_id,
            clean = report.is_clean(),
            "submit reconciliation ran"
        );
    });
    listener.forget();

    Ok(())
}

/// Resolve the optional metadata binding, once, from the role map and the
/// host-provided widget handle.
fn metadata_pair(
    roles: &PageRoles,
    widget: Option<MetadataEditor>,
) -> Option<(BrowserMetadataBinding, HtmlFormElement)> {
    let widget = widget?;

    if roles.metadata_editor.is_none() {
        tracing::debug!("metadata widget provided but page declares no metadata editor; skipping");
        return None;
    }

    let Some(control) = roles.metadata_target.clone() else {
        tracing::warn!("metadata editor declared but no metadata mirror field; skipping");
        return None;
    };

    let Some(form) = control.form() else {
        tracing::warn!(
            target_id = %control.id(),
            "metadata mirror field does not belong to a form; skipping"
        );
        return None;
    };

    let binding = MetadataBinding::new(MetadataDocument::new(widget), FieldMirror::new(control));
    Some((binding, form))
}
