//! Protocol-independent types for building DNS queries and classifying
//! the outcome of validating their responses.
pub mod config;
pub mod dns_query;
pub mod errors;
pub mod query_id;
pub mod record_type;

pub use config::{CliOverrides, Config, ConfigError, QueryConfig, Transport};
pub use dns_query::{
    DnsQuery, QueryFlags, MAX_RESPONSE_SIZE_TCP, MAX_RESPONSE_SIZE_UDP, MIN_RESPONSE_SIZE,
};
pub use errors::CodecError;
pub use query_id::{FixedQueryId, QueryIdGenerator, RandomQueryId};
pub use record_type::RecordType;
