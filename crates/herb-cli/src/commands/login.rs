use serde::Serialize;

use herb_core::entities::Account;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LoginResponse {
    account: Account,
}

pub fn handle(
    ctx: &AppContext,
    flags: &GlobalFlags,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    let account = ctx.accounts.login(&ctx.session, email, password)?;
    output(&LoginResponse { account }, flags.format)
}
