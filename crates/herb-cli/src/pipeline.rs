//! Result ingestion pipeline: session gate → knowledge resolve → history
//! append, plus the workflow driver for one identification round.
//!
//! The pipeline requires a signed-in session. Without one the classification
//! result is still reported to the caller but nothing is persisted — that is
//! the `Skipped` outcome, a signal rather than an error. A `Recorded`
//! outcome doubles as the completion signal: the identify command consumes
//! it to re-read the owner's history.
//!
//! No retries anywhere: classification failures resolve the workflow to
//! `Failed` and persist nothing; only a successful raw label reaches the
//! ingestion step.

use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use herb_core::entities::{IdentificationRecord, NewIdentification};
use herb_core::enums::{Category, IdentifyPhase};
use herb_core::knowledge;
use herb_store::{HistoryStore, SessionContext};

use crate::context::AppContext;
use crate::progress::Progress;

/// Outcome of one ingestion attempt.
#[derive(Debug)]
pub enum IngestOutcome {
    /// The enriched record was persisted for the signed-in account.
    Recorded(IdentificationRecord),
    /// No signed-in session; the result was not persisted.
    Skipped,
}

/// Turn a raw classifier label into an enriched, persisted record.
///
/// Resolves the knowledge base entry for `raw_label`, binds the record to
/// the signed-in account, and appends it to the history. With no signed-in
/// session this is a no-op returning [`IngestOutcome::Skipped`].
#[must_use]
pub fn ingest(
    session: &SessionContext,
    history: &HistoryStore,
    raw_label: &str,
    image_name: &str,
    image_preview_ref: &str,
) -> IngestOutcome {
    let Some(account) = session.current() else {
        tracing::debug!("no signed-in account; result shown but not recorded");
        return IngestOutcome::Skipped;
    };

    let entry = knowledge::lookup(raw_label);
    let record = history.append(NewIdentification {
        owner_id: account.id,
        image_name: image_name.to_string(),
        image_preview_ref: image_preview_ref.to_string(),
        predicted_label: raw_label.to_string(),
        category: entry.category,
        description: entry.description,
    });
    IngestOutcome::Recorded(record)
}

/// Workflow phases around one upload.
///
/// Wraps [`IdentifyPhase`] so every phase change goes through the allowed
/// transition table.
#[derive(Debug)]
pub struct IdentifyWorkflow {
    phase: IdentifyPhase,
}

impl Default for IdentifyWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifyWorkflow {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: IdentifyPhase::Idle,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> IdentifyPhase {
        self.phase
    }

    /// Move to `next`.
    ///
    /// # Errors
    ///
    /// Returns an error if `next` is not reachable from the current phase.
    pub fn advance(&mut self, next: IdentifyPhase) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.phase.can_transition_to(next),
            "invalid workflow transition: {} -> {}",
            self.phase,
            next
        );
        self.phase = next;
        Ok(())
    }

    /// Explicit reset back to idle from a terminal phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the current phase does not allow resetting.
    pub fn reset(&mut self) -> anyhow::Result<()> {
        self.advance(IdentifyPhase::Idle)
    }
}

/// What one identification round produced, in render-ready form.
#[derive(Debug, Serialize)]
pub struct IdentifyReport {
    pub phase: IdentifyPhase,
    pub predicted_label: Option<String>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub record: Option<IdentificationRecord>,
    pub recorded: bool,
    pub error: Option<String>,
}

/// Drive one identification round: read the image, submit it to the
/// classifier, and on success feed the raw label through [`ingest`].
///
/// A classification failure is part of the report (`phase: failed`), not an
/// `Err` — it is displayed inline and persists nothing.
///
/// # Errors
///
/// Returns an error only when the image file itself cannot be read.
pub async fn run_identification(
    ctx: &AppContext,
    image: &Path,
    quiet: bool,
) -> anyhow::Result<IdentifyReport> {
    let mut workflow = IdentifyWorkflow::new();
    workflow.advance(IdentifyPhase::FileSelected)?;

    let image_name = image.file_name().map_or_else(
        || image.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );
    let image_bytes = std::fs::read(image)
        .with_context(|| format!("failed to read image '{}'", image.display()))?;
    let image_preview_ref = format!("file:{}", image.display());

    workflow.advance(IdentifyPhase::Submitting)?;
    let spinner = Progress::spinner(!quiet, "analyzing leaf image...");
    let outcome = ctx.classifier.classify(&image_name, image_bytes).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(label) => {
            workflow.advance(IdentifyPhase::Succeeded)?;
            let entry = knowledge::lookup(&label);
            let (record, recorded) =
                match ingest(&ctx.session, &ctx.history, &label, &image_name, &image_preview_ref) {
                    IngestOutcome::Recorded(record) => (Some(record), true),
                    IngestOutcome::Skipped => (None, false),
                };
            Ok(IdentifyReport {
                phase: workflow.phase(),
                predicted_label: Some(label),
                category: Some(entry.category),
                description: Some(entry.description),
                record,
                recorded,
                error: None,
            })
        }
        Err(error) => {
            workflow.advance(IdentifyPhase::Failed)?;
            tracing::debug!(%error, "classification failed; nothing recorded");
            Ok(IdentifyReport {
                phase: workflow.phase(),
                predicted_label: None,
                category: None,
                description: None,
                record: None,
                recorded: false,
                error: Some(error.to_string()),
            })
        }
    }
}
