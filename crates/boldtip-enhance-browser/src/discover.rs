//! Marker-class discovery and fallible target resolution.
//!
//! A rich-text container declares its mirror field through a `data-target`
//! attribute naming the field's id. Every step of dereferencing that
//! declaration can dangle on a miswired page, so resolution returns
//! `Result` and a failure aborts only the offending container's binding.

use web_sys::{Document, Element, HtmlFormElement};

use boldtip_enhance_core::EnhanceError;

use crate::mirror::FormControl;

/// Marker class identifying rich-text containers.
pub const RICHTEXT_MARKER_CLASS: &str = "boldtip-richtext-editor";

/// Attribute on a container naming its mirror field's id.
pub const TARGET_ATTR: &str = "data-target";

/// Class added to a form that renders its content through a visual editor.
pub const FORM_CLASS_USE_VISUAL_EDITOR: &str = "use-visual-editor";

/// Class added to a form that carries at least one editor binding.
pub const FORM_CLASS_HAS_EDITOR: &str = "has-editor";

/// A fully resolved container: everything needed to attach a widget.
#[derive(Debug, Clone)]
pub struct ContainerPlan {
    /// Id of the container element (the widget mount point).
    pub container_id: String,
    /// The mirror field the container declared.
    pub control: FormControl,
    /// The form owning the mirror field.
    pub form: HtmlFormElement,
}

/// Resolve one marked container to its mirror field and owning form.
pub fn plan_container(document: &Document, container: &Element) -> Result<ContainerPlan, EnhanceError> {
    let container_id = container
        .get_attribute("id")
        .filter(|id| !id.is_empty())
        .ok_or(EnhanceError::MissingContainerId)?;

    let target_id = container.get_attribute(TARGET_ATTR).ok_or_else(|| {
        EnhanceError::MissingTargetAttribute {
            container: container_id.clone(),
        }
    })?;

    let target = document
        .get_element_by_id(&target_id)
        .ok_or_else(|| EnhanceError::MissingTarget {
            container: container_id.clone(),
            target: target_id.clone(),
        })?;

    let control =
        FormControl::from_element(target).ok_or_else(|| EnhanceError::TargetNotFormControl {
            target: target_id.clone(),
        })?;

    let form = control
        .form()
        .ok_or(EnhanceError::TargetOutsideForm { target: target_id })?;

    Ok(ContainerPlan {
        container_id,
        control,
        form,
    })
}

/// Flag the owning form as enhanced.
///
/// One-way, idempotent markers; presentation logic elsewhere on the page
/// keys off these to distinguish enhanced forms from plain ones.
pub fn mark_enhanced_form(form: &HtmlFormElement) {
    let classes = form.class_list();
    let _ = classes.add_1(FORM_CLASS_USE_VISUAL_EDITOR);
    let _ = classes.add_1(FORM_CLASS_HAS_EDITOR);
}
