use serde::Serialize;

use herb_core::entities::Account;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct WhoamiResponse {
    signed_in: bool,
    account: Option<Account>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let account = ctx.session.current();
    output(
        &WhoamiResponse {
            signed_in: account.is_some(),
            account,
        },
        flags.format,
    )
}
