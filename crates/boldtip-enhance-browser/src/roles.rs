//! Page-level role configuration.
//!
//! The page may carry optional companion elements next to the rich-text
//! containers: a schema descriptor, a structured-metadata editor mount, and
//! the metadata mirror field. Rather than reaching for those by fixed id
//! wherever they happen to be needed, the role map is resolved exactly once
//! at bootstrap and threaded through the enhancer.

use web_sys::{Document, Element};

use crate::mirror::FormControl;

/// Element ids the page uses for each logical role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleIds<'a> {
    /// Schema descriptor for the metadata editor.
    pub metadata_schema: &'a str,
    /// Mount element of the structured-metadata editor.
    pub metadata_editor: &'a str,
    /// Mirror field receiving the serialized metadata.
    pub metadata_target: &'a str,
}

impl Default for RoleIds<'static> {
    fn default() -> Self {
        Self {
            metadata_schema: "metadata-schema",
            metadata_editor: "metadata-editor",
            metadata_target: "target-metadata",
        }
    }
}

/// Elements resolved from the role map, each optional.
#[derive(Debug, Clone)]
pub struct PageRoles {
    /// Schema descriptor element. Host-owned; resolved only so bootstrap
    /// can log what the page declared.
    pub metadata_schema: Option<Element>,
    /// Metadata editor mount element.
    pub metadata_editor: Option<Element>,
    /// Metadata mirror field.
    pub metadata_target: Option<FormControl>,
}

impl PageRoles {
    /// Resolve every role against the live document, once.
    pub fn resolve(document: &Document, ids: &RoleIds<'_>) -> Self {
        let metadata_schema = document.get_element_by_id(ids.metadata_schema);
        let metadata_editor = document.get_element_by_id(ids.metadata_editor);

        let metadata_target = match document.get_element_by_id(ids.metadata_target) {
            None => None,
            Some(element) => {
                let control = FormControl::from_element(element);
                if control.is_none() {
                    tracing::warn!(
                        target_id = ids.metadata_target,
                        "metadata target is not a text-bearing form control; ignoring"
                    );
                }
                control
            }
        };

        tracing::debug!(
            has_schema = metadata_schema.is_some(),
            has_editor = metadata_editor.is_some(),
            has_target = metadata_target.is_some(),
            "resolved page roles"
        );

        Self {
            metadata_schema,
            metadata_editor,
            metadata_target,
        }
    }

    /// Roles for a page without metadata companions.
    pub fn empty() -> Self {
        Self {
            metadata_schema: None,
            metadata_editor: None,
            metadata_target: None,
        }
    }
}
