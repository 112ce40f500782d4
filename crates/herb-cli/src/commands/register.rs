use serde::Serialize;

use herb_core::entities::Account;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct RegisterResponse {
    account: Account,
    signed_in: bool,
}

pub fn handle(
    ctx: &AppContext,
    flags: &GlobalFlags,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    let account = ctx.accounts.register(&ctx.session, name, email, password)?;
    output(
        &RegisterResponse {
            account,
            signed_in: true,
        },
        flags.format,
    )
}
