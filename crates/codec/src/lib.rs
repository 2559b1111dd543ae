//! DNS query construction and response validation over `hickory-proto`
//! messages.
//!
//! [`MessageBuilder`] turns a [`DnsQuery`](dnscodec_domain::DnsQuery) into a
//! query message. [`ResponseParser`] checks a response against the query
//! that produced it and keeps only the records on the query's CNAME chain.
//! Neither touches the network.
pub mod message_builder;
pub mod name;
pub mod record_type_map;
pub mod response;

pub use message_builder::MessageBuilder;
pub use name::{canonical_name, equal_ascii_name};
pub use record_type_map::RecordTypeMapper;
pub use response::{
    error_from_rcode, extract_valid_answers, validate_response_for_query, DnsResponse,
    ResponseParser,
};
