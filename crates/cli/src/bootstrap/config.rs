use dnscodec_domain::{CliOverrides, Config};
use tracing::debug;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    debug!(
        transport = %config.query.transport,
        max_response_size = ?config.query.max_response_size,
        dnssec = ?config.query.dnssec,
        padding = ?config.query.padding,
        "Configuration loaded"
    );

    Ok(config)
}
