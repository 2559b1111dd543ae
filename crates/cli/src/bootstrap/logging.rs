use dnscodec_domain::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins when set; otherwise our crates log at the configured
/// level and everything else stays at `warn`.
fn filter_spec(level: &str) -> String {
    match std::env::var("RUST_LOG") {
        Ok(spec) if !spec.is_empty() => spec,
        _ => format!("warn,dnscodec={level},dnscodec_domain={level},dnscodec_cli={level}"),
    }
}

pub fn init_logging(config: &Config) {
    let spec = filter_spec(&config.logging.level);
    let filter = EnvFilter::try_new(&spec).unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
