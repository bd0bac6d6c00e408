//! Wiring between the buffer source, the session and the renderer sink.

use std::io;
use std::ops::RangeInclusive;
use std::pin::pin;

use futures::{Stream, StreamExt};

use crate::classify::{self, HighlightInstruction};
use crate::document::DocId;
use crate::session::{ChangeOutcome, OpenOutcome, Session, Update};
use crate::settings::Settings;

/// Where buffer lines come from. Implemented by the embedding editor layer.
pub trait BufferSource {
    async fn read_lines(&self, id: DocId) -> io::Result<Vec<String>>;
}

/// Where highlight instructions go. Implemented by the embedding editor
/// layer; typically forwards to the host's highlight API.
pub trait HighlightSink {
    /// Clears previously applied highlights, for the given rows or for the
    /// whole document when `rows` is `None`.
    async fn clear_highlights(&self, id: DocId, rows: Option<RangeInclusive<usize>>)
    -> io::Result<()>;

    async fn add_highlight(&self, id: DocId, instruction: &HighlightInstruction)
    -> io::Result<()>;
}

/// A buffer event as delivered by the editor host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentEvent {
    Opened(DocId),
    Changed(DocId),
    Closed(DocId),
}

/// Drives the diff → reparse → classify pipeline for every document event.
pub struct Engine<S, R> {
    session: Session,
    source: S,
    sink: R,
    settings: Settings,
}

impl<S: BufferSource, R: HighlightSink> Engine<S, R> {
    pub fn new(session: Session, source: S, sink: R) -> Self {
        Self::with_settings(session, source, sink, Settings::default())
    }

    pub fn with_settings(session: Session, source: S, sink: R, settings: Settings) -> Self {
        Self { session, source, sink, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Full parse and, unless configured off, a whole-document repaint.
    pub async fn document_opened(&self, id: DocId) -> Result<(), String> {
        let lines = self.read_lines(id).await?;
        match self.session.open(id, lines).await? {
            OpenOutcome::Opened(update) if self.settings.highlight_on_open => {
                self.repaint(id, &update, None).await
            }
            _ => Ok(()),
        }
    }

    /// Diffs, reparses and repaints only the affected rows; falls back to a
    /// whole-document repaint when the diff forced a resync.
    pub async fn document_changed(&self, id: DocId) -> Result<(), String> {
        let lines = self.read_lines(id).await?;
        match self.session.change(id, lines).await? {
            ChangeOutcome::Edited(update) => {
                let rows = if self.settings.scope_to_edit {
                    update.rows()
                } else {
                    None
                };
                self.repaint(id, &update, rows).await
            }
            ChangeOutcome::Reparsed(update) => self.repaint(id, &update, None).await,
            ChangeOutcome::Unchanged | ChangeOutcome::Ignored => Ok(()),
        }
    }

    pub fn document_closed(&self, id: DocId) {
        self.session.close(id);
    }

    /// Consumes document events until the stream ends. Events are handled in
    /// order; a failure on one document does not stop the loop.
    pub async fn run(&self, events: impl Stream<Item = DocumentEvent>) -> Vec<String> {
        let mut events = pin!(events);
        let mut errors = Vec::new();
        while let Some(event) = events.next().await {
            let result = match event {
                DocumentEvent::Opened(id) => self.document_opened(id).await,
                DocumentEvent::Changed(id) => self.document_changed(id).await,
                DocumentEvent::Closed(id) => {
                    self.document_closed(id);
                    Ok(())
                }
            };
            if let Err(error) = result {
                errors.push(error);
            }
        }
        errors
    }

    async fn read_lines(&self, id: DocId) -> Result<Vec<String>, String> {
        self.source
            .read_lines(id)
            .await
            .map_err(|e| format!("failed to read document {id}: {e}"))
    }

    async fn repaint(
        &self,
        id: DocId,
        update: &Update,
        rows: Option<RangeInclusive<usize>>,
    ) -> Result<(), String> {
        let instructions = classify::classify(&update.tree, rows.as_ref());
        self.sink
            .clear_highlights(id, rows)
            .await
            .map_err(|e| format!("failed to clear highlights for document {id}: {e}"))?;
        for instruction in &instructions {
            self.sink
                .add_highlight(id, instruction)
                .await
                .map_err(|e| format!("failed to add highlight for document {id}: {e}"))?;
        }
        Ok(())
    }
}
