//! Document/mirror bindings and the reconciliation contract.
//!
//! An [`EditorBinding`] pairs one live rich-text document with the plain
//! form field mirroring it. Two paths write the mirror:
//!
//! - [`EditorBinding::on_change`] - best-effort live sync, driven by the
//!   widget's change notifications. May lag the true document state and may
//!   skip updates; it only keeps the field reasonably fresh for consumers
//!   that read it between submissions.
//! - [`EditorBinding::reconcile`] - the authority. Runs on form submission
//!   and unconditionally overwrites the mirror from a fresh export, so the
//!   submitted value is correct even if no change notification ever fired.
//!
//! [`FormBinding`] groups the editor binding with an optional metadata
//! binding for the same form and reconciles them independently: a failure
//! in one never prevents the other, and neither ever blocks submission.

use crate::change::{ChangeNotice, ChangeOrigin};
use crate::error::ExportError;

// === Trait seams ===

/// A live rich-text document that can export itself as HTML.
///
/// Implementations wrap a widget instance. The export is the widget's
/// canonical serialized form and is the only way the enhancement layer
/// observes document content.
pub trait DocumentSource {
    /// Serialize the full current document to its canonical HTML export.
    fn export_html(&self) -> Result<String, ExportError>;
}

/// A structured side document that can export itself as JSON text.
pub trait MetadataSource {
    /// Serialize the current structured value to JSON text.
    fn export_json(&self) -> Result<String, ExportError>;
}

/// A plain text-bearing form control acting as a document's mirror.
pub trait MirrorSink {
    /// Overwrite the control's value.
    fn write(&self, value: &str);

    /// Read the control's current value.
    fn value(&self) -> String;
}

// === Editor binding ===

/// What the live-sync path did with a change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// User-originated change, mirror overwritten.
    Written,
    /// Programmatic change, mirror deliberately untouched.
    SkippedProgrammatic,
    /// Export failed; this single update was dropped.
    SkippedExportFailure,
}

/// One document paired with the form field that mirrors it.
#[derive(Debug, Clone)]
pub struct EditorBinding<D, M> {
    document: D,
    mirror: M,
}

impl<D: DocumentSource, M: MirrorSink> EditorBinding<D, M> {
    /// Pair a document with its mirror field.
    pub fn new(document: D, mirror: M) -> Self {
        Self { document, mirror }
    }

    /// Live sync: push the document into the mirror on user-originated
    /// changes only.
    ///
    /// Last-writer-wins, no diffing. Export failures are swallowed here:
    /// an error thrown out of a change handler could break unrelated
    /// listeners sharing the event loop tick, and the submit-time
    /// [`reconcile`](Self::reconcile) pass will repair the value anyway.
    pub fn on_change(&self, notice: ChangeNotice) -> SyncOutcome {
        match notice.origin {
            ChangeOrigin::Programmatic => SyncOutcome::SkippedProgrammatic,
            ChangeOrigin::User => match self.document.export_html() {
                Ok(html) => {
                    self.mirror.write(&html);
                    SyncOutcome::Written
                }
                Err(err) => {
                    tracing::debug!(%err, "dropping live mirror update");
                    SyncOutcome::SkippedExportFailure
                }
            },
        }
    }

    /// Reconciliation: force the mirror to match a fresh export, regardless
    /// of any dirty/clean state the live path tracked.
    ///
    /// On export failure the mirror keeps its last successfully written
    /// value; the caller decides how to surface the error. Never blocks
    /// anything: repeated calls without intervening edits are idempotent.
    pub fn reconcile(&self) -> Result<(), ExportError> {
        let html = self.document.export_html()?;
        self.mirror.write(&html);
        Ok(())
    }
}

// === Metadata binding ===

/// Optional structured side document paired with its own mirror field.
///
/// Resolved once at bootstrap; submit-time code only ever sees it as
/// `Option<MetadataBinding>`, never as an ad-hoc truthiness check.
#[derive(Debug, Clone)]
pub struct MetadataBinding<S, M> {
    source: S,
    mirror: M,
}

impl<S: MetadataSource, M: MirrorSink> MetadataBinding<S, M> {
    /// Pair a metadata source with its mirror field.
    pub fn new(source: S, mirror: M) -> Self {
        Self { source, mirror }
    }

    /// Force the metadata mirror to match a fresh JSON export.
    ///
    /// Same unconditional-overwrite policy as the rich-text mirror.
    pub fn reconcile(&self) -> Result<(), ExportError> {
        let json = self.source.export_json()?;
        self.mirror.write(&json);
        Ok(())
    }
}

// === Form binding ===

/// Per-binding outcomes of a submit-time reconciliation pass.
#[derive(Debug, Clone)]
pub struct ReconcileReport {
    /// Outcome for the rich-text mirror.
    pub editor: Result<(), ExportError>,
    /// Outcome for the metadata mirror, when a metadata binding exists.
    pub metadata: Option<Result<(), ExportError>>,
}

impl ReconcileReport {
    /// True when every present binding reconciled cleanly.
    pub fn is_clean(&self) -> bool {
        self.editor.is_ok() && self.metadata.as_ref().is_none_or(|m| m.is_ok())
    }
}

/// Everything bound to one owning form: the rich-text binding, plus the
/// metadata binding when the page declares one.
#[derive(Debug, Clone)]
pub struct FormBinding<D, M, S, N> {
    /// The rich-text document/mirror pair.
    pub editor: EditorBinding<D, M>,
    /// The structured metadata pair, when present.
    pub metadata: Option<MetadataBinding<S, N>>,
}

impl<D, M, S, N> FormBinding<D, M, S, N>
where
    D: DocumentSource,
    M: MirrorSink,
    S: MetadataSource,
    N: MirrorSink,
{
    /// Reconcile every mirror bound to this form, independently.
    ///
    /// Failures are logged and reported but never propagated: the native
    /// submission must proceed with whatever was last successfully written.
    pub fn reconcile_all(&self) -> ReconcileReport {
        let editor = self.editor.reconcile();
        if let Err(err) = &editor {
            tracing::error!(%err, "rich-text reconciliation failed; submitting last mirrored value");
        }

        let metadata = self.metadata.as_ref().map(|binding| {
            let outcome = binding.reconcile();
            if let Err(err) = &outcome {
                tracing::error!(%err, "metadata reconciliation failed; submitting last mirrored value");
            }
            outcome
        });

        ReconcileReport { editor, metadata }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeDocument {
        html: Rc<RefCell<String>>,
        fail: Rc<Cell<bool>>,
    }

    impl FakeDocument {
        fn with_content(html: &str) -> Self {
            let doc = Self::default();
            *doc.html.borrow_mut() = html.to_string();
            doc
        }

        fn set_content(&self, html: &str) {
            *self.html.borrow_mut() = html.to_string();
        }

        fn break_export(&self) {
            self.fail.set(true);
        }
    }

    impl DocumentSource for FakeDocument {
        fn export_html(&self) -> Result<String, ExportError> {
            if self.fail.get() {
                return Err(ExportError::new("widget in inconsistent state"));
            }
            Ok(self.html.borrow().clone())
        }
    }

    #[derive(Clone, Default)]
    struct FakeMetadata {
        json: Rc<RefCell<String>>,
        fail: Rc<Cell<bool>>,
    }

    impl MetadataSource for FakeMetadata {
        fn export_json(&self) -> Result<String, ExportError> {
            if self.fail.get() {
                return Err(ExportError::new("schema violation"));
            }
            Ok(self.json.borrow().clone())
        }
    }

    #[derive(Clone, Default)]
    struct FakeField {
        value: Rc<RefCell<String>>,
        writes: Rc<Cell<usize>>,
    }

    impl FakeField {
        fn seeded(value: &str) -> Self {
            let field = Self::default();
            *field.value.borrow_mut() = value.to_string();
            field
        }

        fn writes(&self) -> usize {
            self.writes.get()
        }
    }

    impl MirrorSink for FakeField {
        fn write(&self, value: &str) {
            *self.value.borrow_mut() = value.to_string();
            self.writes.set(self.writes.get() + 1);
        }

        fn value(&self) -> String {
            self.value.borrow().clone()
        }
    }

    // === Live sync ===

    #[test]
    fn test_user_change_overwrites_mirror() {
        let doc = FakeDocument::with_content("<p>hello</p>");
        let field = FakeField::default();
        let binding = EditorBinding::new(doc.clone(), field.clone());

        let outcome = binding.on_change(ChangeNotice::user());
        assert_eq!(outcome, SyncOutcome::Written);
        assert_eq!(field.value(), "<p>hello</p>");
    }

    #[test]
    fn test_programmatic_change_leaves_mirror_untouched() {
        let doc = FakeDocument::with_content("<p>loaded</p>");
        let field = FakeField::seeded("stale");
        let binding = EditorBinding::new(doc, field.clone());

        let outcome = binding.on_change(ChangeNotice::programmatic());
        assert_eq!(outcome, SyncOutcome::SkippedProgrammatic);
        assert_eq!(field.value(), "stale");
        assert_eq!(field.writes(), 0);
    }

    #[test]
    fn test_live_sync_export_failure_is_swallowed() {
        let doc = FakeDocument::with_content("<p>x</p>");
        doc.break_export();
        let field = FakeField::seeded("last good");
        let binding = EditorBinding::new(doc, field.clone());

        let outcome = binding.on_change(ChangeNotice::user());
        assert_eq!(outcome, SyncOutcome::SkippedExportFailure);
        assert_eq!(field.value(), "last good");
    }

    #[test]
    fn test_live_sync_is_last_writer_wins() {
        let doc = FakeDocument::with_content("<p>one</p>");
        let field = FakeField::default();
        let binding = EditorBinding::new(doc.clone(), field.clone());

        binding.on_change(ChangeNotice::user());
        doc.set_content("<p>two</p>");
        binding.on_change(ChangeNotice::user());
        assert_eq!(field.value(), "<p>two</p>");
        assert_eq!(field.writes(), 2);
    }

    // === Submit-time reconciliation ===

    #[test]
    fn test_reconcile_writes_even_without_prior_changes() {
        // Editor loaded with initial content, never edited, then submitted:
        // the mirror must equal the export, not stay empty.
        let doc = FakeDocument::with_content("<p>A</p>");
        let field = FakeField::default();
        let binding = EditorBinding::new(doc, field.clone());

        binding.reconcile().unwrap();
        assert_eq!(field.value(), "<p>A</p>");
    }

    #[test]
    fn test_reconcile_overrides_stale_mirror() {
        let doc = FakeDocument::with_content("<p>current</p>");
        let field = FakeField::seeded("<p>stale</p>");
        let binding = EditorBinding::new(doc, field.clone());

        binding.reconcile().unwrap();
        assert_eq!(field.value(), "<p>current</p>");
    }

    #[test]
    fn test_reconcile_failure_preserves_last_value() {
        let doc = FakeDocument::with_content("<p>x</p>");
        let field = FakeField::default();
        let binding = EditorBinding::new(doc.clone(), field.clone());

        binding.on_change(ChangeNotice::user());
        doc.break_export();
        assert!(binding.reconcile().is_err());
        assert_eq!(field.value(), "<p>x</p>");
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let doc = FakeDocument::with_content("<p>same</p>");
        let field = FakeField::default();
        let binding = EditorBinding::new(doc, field.clone());

        binding.reconcile().unwrap();
        let first = field.value();
        binding.reconcile().unwrap();
        assert_eq!(field.value(), first);
    }

    // === Form-level reconciliation ===

    fn form_binding(
        doc: FakeDocument,
        field: FakeField,
        metadata: Option<(FakeMetadata, FakeField)>,
    ) -> FormBinding<FakeDocument, FakeField, FakeMetadata, FakeField> {
        FormBinding {
            editor: EditorBinding::new(doc, field),
            metadata: metadata.map(|(source, mirror)| MetadataBinding::new(source, mirror)),
        }
    }

    #[test]
    fn test_metadata_is_written_at_reconcile_time() {
        let meta = FakeMetadata::default();
        *meta.json.borrow_mut() = r#"{"title":"hello"}"#.to_string();
        let meta_field = FakeField::default();

        let binding = form_binding(
            FakeDocument::with_content("<p>body</p>"),
            FakeField::default(),
            Some((meta, meta_field.clone())),
        );

        let report = binding.reconcile_all();
        assert!(report.is_clean());
        assert_eq!(meta_field.value(), r#"{"title":"hello"}"#);
    }

    #[test]
    fn test_metadata_failure_does_not_stop_editor_reconcile() {
        let meta = FakeMetadata::default();
        meta.fail.set(true);
        let meta_field = FakeField::seeded("last meta");
        let field = FakeField::default();

        let binding = form_binding(
            FakeDocument::with_content("<p>body</p>"),
            field.clone(),
            Some((meta, meta_field.clone())),
        );

        let report = binding.reconcile_all();
        assert!(report.editor.is_ok());
        assert!(matches!(report.metadata, Some(Err(_))));
        assert!(!report.is_clean());
        assert_eq!(field.value(), "<p>body</p>");
        assert_eq!(meta_field.value(), "last meta");
    }

    #[test]
    fn test_editor_failure_does_not_stop_metadata_reconcile() {
        let doc = FakeDocument::with_content("<p>body</p>");
        doc.break_export();
        let meta = FakeMetadata::default();
        *meta.json.borrow_mut() = "{}".to_string();
        let meta_field = FakeField::default();

        let binding = form_binding(doc, FakeField::default(), Some((meta, meta_field.clone())));

        let report = binding.reconcile_all();
        assert!(report.editor.is_err());
        assert!(matches!(report.metadata, Some(Ok(()))));
        assert_eq!(meta_field.value(), "{}");
    }

    #[test]
    fn test_absent_metadata_reports_none() {
        let binding = form_binding(
            FakeDocument::with_content("<p>solo</p>"),
            FakeField::default(),
            None,
        );

        let report = binding.reconcile_all();
        assert!(report.is_clean());
        assert!(report.metadata.is_none());
    }
}
