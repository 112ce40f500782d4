use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct PingResponse {
    endpoint: String,
    message: String,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let message = ctx.classifier.health().await?;
    output(
        &PingResponse {
            endpoint: ctx.config.classifier.base_url.clone(),
            message,
        },
        flags.format,
    )
}
