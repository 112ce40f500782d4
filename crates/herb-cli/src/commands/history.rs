use anyhow::bail;
use serde::Serialize;

use herb_core::entities::IdentificationRecord;

use crate::cli::{GlobalFlags, HistoryAction};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct HistoryListResponse {
    owner_id: String,
    records: Vec<IdentificationRecord>,
}

#[derive(Serialize)]
struct HistoryDeleteResponse {
    deleted: String,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags, action: &HistoryAction) -> anyhow::Result<()> {
    match action {
        HistoryAction::List => list(ctx, flags),
        HistoryAction::Delete { id } => delete(ctx, flags, id),
    }
}

fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(account) = ctx.session.current() else {
        bail!("not signed in — run `hrb register` or `hrb login` first");
    };

    let records = ctx.history.history_for(&account.id);
    output(
        &HistoryListResponse {
            owner_id: account.id,
            records,
        },
        flags.format,
    )
}

fn delete(ctx: &AppContext, flags: &GlobalFlags, id: &str) -> anyhow::Result<()> {
    // Deletion is by id alone and does not re-check ownership; an absent id
    // is a no-op either way.
    ctx.history.delete_by_id(id);
    output(
        &HistoryDeleteResponse {
            deleted: id.to_string(),
        },
        flags.format,
    )
}
