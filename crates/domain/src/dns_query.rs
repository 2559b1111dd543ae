use super::query_id::{QueryIdGenerator, RandomQueryId};
use super::RecordType;
use bitflags::bitflags;
use std::sync::Arc;

/// EDNS(0) payload size that avoids IP fragmentation on UDP.
pub const MAX_RESPONSE_SIZE_UDP: u16 = 1232;

/// EDNS(0) payload size for stream transports.
pub const MAX_RESPONSE_SIZE_TCP: u16 = 4096;

/// Smallest payload size a requestor may advertise (RFC 6891 §6.2.5).
pub const MIN_RESPONSE_SIZE: u16 = 512;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct QueryFlags: u16 {
        /// Pad the encoded query to a multiple of 128 octets (RFC 8467).
        const BLOCK_LENGTH_PADDING = 1 << 0;
        /// Set the DNSSEC OK bit in the EDNS(0) pseudo-record.
        const DNSSEC = 1 << 1;
    }
}

/// A query waiting to be turned into a message.
///
/// Plain value: cloning yields a fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub id: u16,
    /// Advertised EDNS(0) payload size. Values below
    /// [`MIN_RESPONSE_SIZE`] are sent as [`MIN_RESPONSE_SIZE`].
    pub max_size: u16,
    pub flags: QueryFlags,
}

impl DnsQuery {
    /// Random ID, no flags, UDP-safe payload size.
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self::with_id_generator(name, record_type, &RandomQueryId)
    }

    pub fn with_id_generator(
        name: impl Into<Arc<str>>,
        record_type: RecordType,
        ids: &impl QueryIdGenerator,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            id: ids.next_id(),
            max_size: MAX_RESPONSE_SIZE_UDP,
            flags: QueryFlags::empty(),
        }
    }

    pub fn wants_padding(&self) -> bool {
        self.flags.contains(QueryFlags::BLOCK_LENGTH_PADDING)
    }

    pub fn wants_dnssec(&self) -> bool {
        self.flags.contains(QueryFlags::DNSSEC)
    }
}
