use std::path::Path;

use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::pipeline::{self, IdentifyReport};

#[derive(Serialize)]
struct IdentifyResponse {
    #[serde(flatten)]
    report: IdentifyReport,
    /// Size of the owner's history after ingestion — the refresh the
    /// completion signal triggers.
    history_count: Option<usize>,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags, image: &Path) -> anyhow::Result<()> {
    let report = pipeline::run_identification(ctx, image, flags.quiet).await?;

    let history_count = report
        .recorded
        .then(|| ctx.session.current())
        .flatten()
        .map(|account| ctx.history.history_for(&account.id).len());

    output(
        &IdentifyResponse {
            report,
            history_count,
        },
        flags.format,
    )
}
