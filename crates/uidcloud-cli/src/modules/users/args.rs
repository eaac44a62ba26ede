use clap::{Args, Subcommand};

#[derive(Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand)]
pub enum UserCommand {
    #[command(about = "List the groups a user belongs to")]
    Groups(UserGroupsArgs),
    AddGroup(UserGroupMembershipArgs),
    RemoveGroup(UserGroupMembershipArgs),
}

#[derive(Args)]
pub struct UserGroupsArgs {
    pub user_id: String,
}

#[derive(Args)]
pub struct UserGroupMembershipArgs {
    pub user_id: String,
    pub group_id: String,
}
