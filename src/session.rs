//! Per-document parse state and update serialization.
//!
//! A [`Session`] owns one record per open document id: the line sequence,
//! the canonical joined text and the current parse tree. Updates for one id
//! are applied strictly in arrival order through a per-document slot;
//! updates for different ids proceed independently. An `open` discards
//! whatever is queued or in flight for that id and restarts from a fresh
//! full parse.

use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::Mutex as AsyncMutex;
use tree_sitter::{Parser, Tree};

use crate::diff::{self, DiffOutcome};
use crate::document::{DocId, Document};
use crate::edit::EditDescriptor;

pub struct Session {
    language: tree_sitter::Language,
    // Guards only the id -> slot map; never held across an await.
    docs: Mutex<HashMap<DocId, Arc<DocSlot>>>,
}

struct DocSlot {
    /// Bumped by open and close. An update that captured an older value
    /// abandons when it finally acquires the state lock.
    generation: AtomicU64,
    /// The one pending-operation slot for this document. Tokio's mutex wakes
    /// waiters in FIFO order, which is the ordering guarantee callers get.
    state: AsyncMutex<Option<DocState>>,
}

impl DocSlot {
    fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            state: AsyncMutex::new(None),
        }
    }
}

struct DocState {
    parser: Parser,
    doc: Document,
    tree: Tree,
}

/// Immutable snapshot handed to the classifier once an update completed.
/// The session's own record may move on afterwards; this pair does not.
#[derive(Clone)]
pub struct Update {
    /// The applied edit; `None` for a full parse (open or resync).
    pub edit: Option<EditDescriptor>,
    /// Tree before the update, for callers that diff tree generations.
    pub previous_tree: Option<Tree>,
    pub tree: Tree,
    pub content: String,
}

impl Update {
    /// Row restriction for the re-highlight pass; `None` means the whole
    /// document must be repainted.
    pub fn rows(&self) -> Option<RangeInclusive<usize>> {
        self.edit.as_ref().map(EditDescriptor::rows)
    }
}

pub enum OpenOutcome {
    Opened(Update),
    /// A newer open for the same id overtook this one while it waited.
    Superseded,
}

pub enum ChangeOutcome {
    /// No record for the id (a change before an open is ignored) or the
    /// update was superseded by an open or close while queued.
    Ignored,
    /// The buffers are identical; an explicit no-op.
    Unchanged,
    /// Incremental edit applied and reparsed with subtree reuse.
    Edited(Update),
    /// The diff could not place a boundary (one version is an exact prefix
    /// of the other); reparsed from scratch instead of dropping the update.
    Reparsed(Update),
}

impl Session {
    pub fn new(language: tree_sitter::Language) -> Self {
        Self {
            language,
            docs: Mutex::new(HashMap::new()),
        }
    }

    /// Session for the JavaScript grammar the classifier rules target.
    pub fn javascript() -> Self {
        Self::new(tree_sitter_javascript::LANGUAGE.into())
    }

    pub fn is_open(&self, id: DocId) -> bool {
        self.docs.lock().unwrap().contains_key(&id)
    }

    /// Parses `lines` from scratch and stores the record, replacing any
    /// previous state for the id. Queued updates from before this call see
    /// the generation bump and abandon.
    pub async fn open(&self, id: DocId, lines: Vec<String>) -> Result<OpenOutcome, String> {
        let slot = {
            let mut docs = self.docs.lock().unwrap();
            docs.entry(id).or_insert_with(|| Arc::new(DocSlot::new())).clone()
        };
        let generation = slot.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let mut state = slot.state.lock().await;
        if slot.generation.load(Ordering::SeqCst) != generation {
            return Ok(OpenOutcome::Superseded);
        }

        let doc = Document::new(lines);
        let mut parser = Parser::new();
        let tree = parser
            .set_language(&self.language)
            .map_err(|e| format!("failed to set parser language: {e}"))
            .and_then(|()| {
                parser
                    .parse(doc.content(), None)
                    .ok_or_else(|| format!("initial parse failed for document {id}"))
            });
        let tree = match tree {
            Ok(tree) => tree,
            Err(error) => {
                self.discard_failed_open(id, &slot, generation, &state);
                return Err(error);
            }
        };

        let update = Update {
            edit: None,
            previous_tree: None,
            tree: tree.clone(),
            content: doc.content().to_string(),
        };
        *state = Some(DocState { parser, doc, tree });
        Ok(OpenOutcome::Opened(update))
    }

    /// An `open` that created the slot and then failed to parse must not
    /// leave the document looking open. The slot stays when a record from an
    /// earlier open exists (stale but consistent, the same rule `change`
    /// follows) or when a newer open has already claimed the slot.
    fn discard_failed_open(
        &self,
        id: DocId,
        slot: &DocSlot,
        generation: u64,
        state: &Option<DocState>,
    ) {
        if state.is_none() && slot.generation.load(Ordering::SeqCst) == generation {
            self.docs.lock().unwrap().remove(&id);
        }
    }

    /// Diffs the stored lines against `lines`, applies the edit to the
    /// previous tree and reparses with reuse.
    ///
    /// The stored record is replaced only after a successful reparse; on
    /// failure it stays untouched (stale but consistent) and the error is
    /// returned. The edit is applied to a clone of the stored tree for the
    /// same reason.
    pub async fn change(&self, id: DocId, lines: Vec<String>) -> Result<ChangeOutcome, String> {
        let Some(slot) = self.docs.lock().unwrap().get(&id).cloned() else {
            return Ok(ChangeOutcome::Ignored);
        };
        let generation = slot.generation.load(Ordering::SeqCst);

        let mut state = slot.state.lock().await;
        if slot.generation.load(Ordering::SeqCst) != generation {
            return Ok(ChangeOutcome::Ignored);
        }
        let Some(record) = state.as_mut() else {
            return Ok(ChangeOutcome::Ignored);
        };

        let next = Document::new(lines);
        match diff::locate(&record.doc, &next) {
            DiffOutcome::Unchanged => Ok(ChangeOutcome::Unchanged),
            DiffOutcome::Edit(edit) => {
                let previous_tree = record.tree.clone();
                let mut edited = record.tree.clone();
                edited.edit(&edit.to_input_edit());
                let tree = record
                    .parser
                    .parse(next.content(), Some(&edited))
                    .ok_or_else(|| format!("reparse failed for document {id}"))?;

                let update = Update {
                    edit: Some(edit),
                    previous_tree: Some(previous_tree),
                    tree: tree.clone(),
                    content: next.content().to_string(),
                };
                record.doc = next;
                record.tree = tree;
                Ok(ChangeOutcome::Edited(update))
            }
            DiffOutcome::Resync => {
                let previous_tree = record.tree.clone();
                let tree = record
                    .parser
                    .parse(next.content(), None)
                    .ok_or_else(|| format!("full reparse failed for document {id}"))?;

                let update = Update {
                    edit: None,
                    previous_tree: Some(previous_tree),
                    tree: tree.clone(),
                    content: next.content().to_string(),
                };
                record.doc = next;
                record.tree = tree;
                Ok(ChangeOutcome::Reparsed(update))
            }
        }
    }

    /// Discards the record and cancels anything queued for the id.
    pub fn close(&self, id: DocId) {
        if let Some(slot) = self.docs.lock().unwrap().remove(&id) {
            slot.generation.fetch_add(1, Ordering::SeqCst);
        }
    }
}
