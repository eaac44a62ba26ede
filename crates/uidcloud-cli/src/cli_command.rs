use crate::cli_args::Command;
use crate::modules::groups::handle_group;
use crate::modules::shared::CommandContext;
use crate::modules::users::handle_user;

pub(crate) async fn handle_command(
    command: Command,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match command {
        Command::Group(args) => handle_group(args, ctx).await?,
        Command::User(args) => handle_user(args, ctx).await?,
    }

    Ok(())
}
