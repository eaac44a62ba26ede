use clap::{Args, Subcommand};

#[derive(Args)]
pub struct GroupArgs {
    #[command(subcommand)]
    pub command: GroupCommand,
}

#[derive(Subcommand)]
pub enum GroupCommand {
    List(GroupListArgs),
    Get(GroupGetArgs),
    Create(GroupCreateArgs),
    Delete(GroupDeleteArgs),
}

#[derive(Args)]
pub struct GroupListArgs {
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub exact: bool,
    #[arg(long, help = "Return names and ids only")]
    pub brief: bool,
    #[arg(long)]
    pub first: Option<i32>,
    #[arg(long)]
    pub max: Option<i32>,
}

#[derive(Args)]
pub struct GroupGetArgs {
    pub group_id: String,
}

#[derive(Args)]
pub struct GroupCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, help = "Create as a child of this group")]
    pub parent_id: Option<String>,
    #[arg(long = "attribute", value_name = "KEY=VALUE")]
    pub attributes: Vec<String>,
}

#[derive(Args)]
pub struct GroupDeleteArgs {
    pub group_id: String,
}
