//! Error types for enhancement setup and document export.

use thiserror::Error;

/// Errors raised while wiring a discovered container to its mirror field.
///
/// Every variant is a per-binding configuration error: the affected
/// container is skipped and logged, and bootstrap continues with the
/// remaining containers.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EnhanceError {
    /// The container carries the marker class but no `id` attribute.
    #[error("rich-text container has no id attribute")]
    MissingContainerId,

    /// The container does not declare which field mirrors its content.
    #[error("container `{container}` has no data-target attribute")]
    MissingTargetAttribute {
        /// Id of the offending container.
        container: String,
    },

    /// The declared target id does not resolve to any element.
    #[error("container `{container}` targets `{target}`, which does not exist")]
    MissingTarget {
        /// Id of the offending container.
        container: String,
        /// The dangling target id.
        target: String,
    },

    /// The declared target resolved to something without a `value`.
    #[error("target `{target}` is not a text-bearing form control")]
    TargetNotFormControl {
        /// Id of the resolved element.
        target: String,
    },

    /// The mirror field does not belong to any form, so there is no
    /// submission to reconcile against.
    #[error("target `{target}` does not belong to a form")]
    TargetOutsideForm {
        /// Id of the orphaned mirror field.
        target: String,
    },

    /// The widget library refused to construct an editor instance.
    #[error("editor widget construction failed for `{container}`: {reason}")]
    WidgetConstruction {
        /// Id of the container being enhanced.
        container: String,
        /// Display form of the widget's error.
        reason: String,
    },
}

/// A document failed to serialize out of its widget.
///
/// Carries only the display form of the underlying failure; the widget's
/// error value itself never crosses the policy boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("document export failed: {reason}")]
pub struct ExportError {
    /// Display form of the widget's error.
    pub reason: String,
}

impl ExportError {
    /// Wrap a widget failure's display form.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
