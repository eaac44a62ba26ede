use crate::cli_args::*;
use crate::modules::shared::{print_json, CommandContext};

pub(crate) async fn handle_user(args: UserArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    match args.command {
        UserCommand::Groups(args) => {
            let groups = ctx.client.find_user_groups(ctx.realm, &args.user_id).await?;
            print_json(&groups)?;
        }
        UserCommand::AddGroup(args) => {
            ctx.client
                .add_user_to_group(ctx.realm, &args.user_id, &args.group_id)
                .await?;
            println!("User added to group");
        }
        UserCommand::RemoveGroup(args) => {
            ctx.client
                .remove_user_from_group(ctx.realm, &args.user_id, &args.group_id)
                .await?;
            println!("User removed from group");
        }
    }
    Ok(())
}
