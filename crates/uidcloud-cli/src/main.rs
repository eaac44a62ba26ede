use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use uidcloud_admin_client::AdminClient;

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::Cli;
use crate::cli_command::handle_command;
use crate::modules::shared::{ensure_secure_addr, CommandContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    if cli.token.is_some() && cli.token_file.is_some() {
        anyhow::bail!("use --token or --token-file, not both");
    }
    let addr = cli
        .addr
        .ok_or_else(|| anyhow::anyhow!("server address required (--addr or UIDCLOUD_SERVER_URL)"))?;
    ensure_secure_addr(&addr, cli.insecure)?;

    let token = match cli.token {
        Some(token) => token,
        None => {
            let path = cli.token_file.ok_or_else(|| {
                anyhow::anyhow!("token required (--token, --token-file, or UIDCLOUD_TOKEN)")
            })?;
            read_token_file(&path)?
        }
    };

    debug!(addr = %addr, realm = %cli.realm, "resolved server context");
    let http = reqwest::Client::builder()
        .danger_accept_invalid_certs(cli.insecure)
        .build()?;
    let client = AdminClient::with_http_client(http, addr, token);
    let ctx = CommandContext {
        client: &client,
        realm: &cli.realm,
    };

    handle_command(cli.command, &ctx).await
}

fn read_token_file(path: &str) -> anyhow::Result<String> {
    let contents = std::fs::read_to_string(path)?;
    let token = contents.trim();
    if token.is_empty() {
        anyhow::bail!("token file is empty: {}", path);
    }
    Ok(token.to_string())
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .init();
    Ok(())
}
