use std::collections::HashMap;

use serde_json::Value;
use uidcloud_admin_client::AdminClient;

pub(crate) struct CommandContext<'a> {
    pub client: &'a AdminClient,
    pub realm: &'a str,
}

pub(crate) fn ensure_secure_addr(addr: &str, allow_insecure: bool) -> anyhow::Result<()> {
    if addr.starts_with("http://") && !allow_insecure {
        anyhow::bail!("refusing to use http:// without --insecure");
    }
    Ok(())
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let body: Value = serde_json::to_value(value)?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

/// Parses repeated `--attribute key=value` flags into the multi-valued
/// attribute map the admin API expects. Repeating a key appends a value.
pub(crate) fn parse_attributes(pairs: &[String]) -> anyhow::Result<HashMap<String, Vec<String>>> {
    let mut attributes: HashMap<String, Vec<String>> = HashMap::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            anyhow::bail!("invalid attribute '{}', expected key=value", pair);
        };
        if key.is_empty() {
            anyhow::bail!("invalid attribute '{}', key is empty", pair);
        }
        attributes
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }
    Ok(attributes)
}
