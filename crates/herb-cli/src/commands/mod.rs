//! Command handlers for the `hrb` binary.

pub mod history;
pub mod identify;
pub mod login;
pub mod logout;
pub mod lookup;
pub mod ping;
pub mod register;
pub mod whoami;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Register {
            name,
            email,
            password,
        } => register::handle(ctx, flags, &name, &email, &password),
        Commands::Login { email, password } => login::handle(ctx, flags, &email, &password),
        Commands::Logout => logout::handle(ctx, flags),
        Commands::Whoami => whoami::handle(ctx, flags),
        Commands::Identify { image } => identify::handle(ctx, flags, &image).await,
        Commands::History { action } => history::handle(ctx, flags, &action),
        Commands::Lookup { label } => lookup::handle(flags, &label),
        Commands::Ping => ping::handle(ctx, flags).await,
    }
}
