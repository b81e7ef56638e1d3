//! Browser DOM layer for boldtip's form enhancement.
//!
//! This crate wires the widget-agnostic policy in `boldtip-enhance-core` to
//! the real page: extern bindings to the widget libraries, discovery of
//! marked containers, and event registration. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `widgets`: extern bindings to the rich-text, date-picker, and metadata
//!   widgets, plus their option-object construction
//! - `mirror`: `MirrorSink` over real form controls
//! - `discover`: marker-class discovery and fallible target resolution
//! - `roles`: page-level role configuration, resolved once at bootstrap
//! - `richtext`: the core enhancer - widget attachment, live sync, and
//!   submit-time reconciliation wiring
//! - `datetime`: the sibling date-field enhancer
//!
//! # Re-exports
//!
//! This crate re-exports `boldtip-enhance-core` for convenience, so
//! consumers only need to depend on `boldtip-enhance-browser`.

// Re-export core crate
pub use boldtip_enhance_core;
pub use boldtip_enhance_core::*;

pub mod datetime;
pub mod discover;
pub mod mirror;
pub mod richtext;
pub mod roles;
pub mod widgets;

pub use datetime::{enhance_date_fields, DATETIME_MARKER_CLASS};
pub use discover::{
    mark_enhanced_form, plan_container, ContainerPlan, FORM_CLASS_HAS_EDITOR,
    FORM_CLASS_USE_VISUAL_EDITOR, RICHTEXT_MARKER_CLASS, TARGET_ATTR,
};
pub use mirror::{FieldMirror, FormControl};
pub use richtext::enhance_rich_text;
pub use roles::{PageRoles, RoleIds};
pub use widgets::{quill_options, MetadataDocument, MetadataEditor, Quill, QuillDocument};
