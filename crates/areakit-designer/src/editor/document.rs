//! Area description text and its error state.

use areakit_core::DocumentError;

use super::AreaEditor;
use crate::area_text::parse_document;

/// Summary of a successful document apply.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentReport {
    /// Areas now in the store.
    pub areas: usize,
    /// Non-blank lines that failed to parse and were skipped.
    pub skipped_lines: usize,
}

impl AreaEditor {
    /// Current description text.
    pub fn document_text(&self) -> &str {
        &self.document_text
    }

    /// Records an edit of the description text without applying it.
    ///
    /// Errors from the last apply are kept until the next successful apply or
    /// area edit.
    pub fn set_document_text(&mut self, text: impl Into<String>) {
        self.document_text = text.into();
    }

    /// Messages from the last failed or partial apply (at most four).
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Parses the description text and replaces the whole store with it.
    ///
    /// Lines that fail are skipped and reported. When no line parses the store
    /// is left untouched and the document error is returned.
    pub fn apply_document(&mut self) -> Result<DocumentReport, DocumentError> {
        let parsed = match parse_document(&self.document_text) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Area description rejected: {}", e);
                self.errors = e.messages();
                return Err(e);
            }
        };

        let report = DocumentReport {
            areas: parsed.areas.len(),
            skipped_lines: parsed.errors.len(),
        };
        self.session.end_drag();
        self.store.replace_all(parsed.areas);
        self.session.prune(&self.store);

        self.errors = DocumentError::new(parsed.errors).messages();
        for message in &self.errors {
            tracing::warn!("Skipped {}", message);
        }
        tracing::info!(
            areas = report.areas,
            skipped = report.skipped_lines,
            "Applied area description"
        );
        Ok(report)
    }

    /// Regenerates the description text from the store and clears errors.
    pub fn sync_document(&mut self) {
        self.document_text = self.store.to_document();
        self.errors.clear();
    }
}
