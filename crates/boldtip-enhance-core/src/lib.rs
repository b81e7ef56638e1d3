//! Widget-agnostic policy layer for boldtip's form enhancement.
//!
//! A boldtip page keeps every rich document in two places at once: the
//! widget's live in-memory document, and a plain form field holding its
//! serialized export so the form still round-trips without JavaScript.
//! This crate owns the contract between the two:
//!
//! - `change`: tagged change notifications (user vs. programmatic origin)
//! - `binding`: the document/mirror pairing, live sync, and submit-time
//!   reconciliation
//! - `config`: static widget configuration (toolbar, keyboard, date picker)
//! - `error`: configuration and export error types
//!
//! Everything here is generic over the `DocumentSource` / `MetadataSource` /
//! `MirrorSink` traits, so the policy compiles and tests on native targets.
//! The browser crate supplies implementations backed by real widgets and
//! real form controls.

pub mod binding;
pub mod change;
pub mod config;
pub mod error;

pub use binding::{
    DocumentSource, EditorBinding, FormBinding, MetadataBinding, MetadataSource, MirrorSink,
    ReconcileReport, SyncOutcome,
};
pub use change::{ChangeNotice, ChangeOrigin};
pub use config::{
    DatePickerConfig, EditorConfig, HeaderOption, KeyPassthrough, KeyboardConfig, ListKind,
    TextDirection, Theme, ToolbarButton, ToolbarConfig, ToolbarItem,
};
pub use error::{EnhanceError, ExportError};
