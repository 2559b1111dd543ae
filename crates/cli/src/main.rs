use clap::{Parser, Subcommand};
use dnscodec_domain::{CliOverrides, RecordType, Transport};

mod bootstrap;
mod commands;

use commands::{run_parse, run_query, ParseArgs, QueryArgs};

#[derive(Parser)]
#[command(name = "dnscodec")]
#[command(version)]
#[command(about = "Build DNS queries and validate DNS responses offline")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a query message and print it with its wire bytes
    Query {
        /// Domain name, Unicode or ASCII
        name: String,

        /// Record type (A, AAAA, MX, TYPE65280, ...)
        #[arg(short = 't', long = "type", default_value = "A")]
        record_type: RecordType,

        /// Transport preset (udp, tcp, tls, https, quic)
        #[arg(long)]
        transport: Option<Transport>,

        /// Fixed query ID instead of a random one
        #[arg(long)]
        id: Option<u16>,

        /// Advertised EDNS(0) payload size
        #[arg(long)]
        max_size: Option<u16>,

        /// Set the DNSSEC OK bit
        #[arg(long)]
        dnssec: bool,

        /// Pad the query to a 128-byte block
        #[arg(long)]
        padding: bool,
    },

    /// Validate a response against its query, both given as hex
    Parse {
        #[arg(long, value_name = "HEX")]
        query_hex: String,

        #[arg(long, value_name = "HEX")]
        response_hex: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        ..Default::default()
    };
    if let Command::Query {
        transport,
        max_size,
        dnssec,
        padding,
        ..
    } = &cli.command
    {
        cli_overrides.transport = *transport;
        cli_overrides.max_response_size = *max_size;
        cli_overrides.dnssec = *dnssec;
        cli_overrides.padding = *padding;
    }

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    match cli.command {
        Command::Query {
            name,
            record_type,
            id,
            ..
        } => run_query(
            QueryArgs {
                name,
                record_type,
                id,
            },
            &config,
        ),
        Command::Parse {
            query_hex,
            response_hex,
        } => run_parse(ParseArgs {
            query_hex,
            response_hex,
        }),
    }
}
