use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::groups::args::*;
pub use crate::modules::users::args::*;

#[derive(Parser)]
#[command(name = "uidcloud")]
#[command(about = "Admin CLI for the uidcloud identity service")]
pub struct Cli {
    #[arg(long, env = "UIDCLOUD_SERVER_URL")]
    pub addr: Option<String>,
    #[arg(
        long,
        env = "UIDCLOUD_REALM",
        default_value = "master",
        help = "Realm name (not the realm id)"
    )]
    pub realm: String,
    #[arg(long, env = "UIDCLOUD_TOKEN")]
    pub token: Option<String>,
    #[arg(long, env = "UIDCLOUD_TOKEN_FILE")]
    pub token_file: Option<String>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, help = "Allow http:// and invalid TLS certificates")]
    pub insecure: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Group(GroupArgs),
    User(UserArgs),
}
