use uidcloud_admin_client::{CreateGroupOptions, GroupQuery, GroupRepresentation};

use crate::cli_args::*;
use crate::modules::shared::{parse_attributes, print_json, CommandContext};

pub(crate) async fn handle_group(
    args: GroupArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        GroupCommand::List(args) => {
            let query = GroupQuery {
                search: args.search,
                exact: args.exact.then_some(true),
                brief_representation: args.brief.then_some(true),
                first: args.first,
                max: args.max,
            };
            let groups = ctx.client.find_groups(ctx.realm, &query).await?;
            print_json(&groups)?;
        }
        GroupCommand::Get(args) => {
            let group = ctx.client.find_group(ctx.realm, &args.group_id).await?;
            print_json(&group)?;
        }
        GroupCommand::Create(args) => {
            let mut group = GroupRepresentation::named(args.name);
            if !args.attributes.is_empty() {
                group.attributes = Some(parse_attributes(&args.attributes)?);
            }
            let options = CreateGroupOptions {
                parent_id: args.parent_id,
            };
            let created = ctx.client.create_group(ctx.realm, &group, &options).await?;
            print_json(&created)?;
        }
        GroupCommand::Delete(args) => {
            ctx.client.remove_group(ctx.realm, &args.group_id).await?;
            println!("Group deleted");
        }
    }
    Ok(())
}
