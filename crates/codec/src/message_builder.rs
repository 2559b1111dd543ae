//! DNS Message Builder
//!
//! Turns a [`DnsQuery`] into a `hickory-proto` query message ready to be
//! packed for any transport: IDNA-encoded fully-qualified name, recursion
//! desired, EDNS(0) payload size and DO bit, and optional RFC 8467
//! block-length padding.

use super::record_type_map::RecordTypeMapper;
use dnscodec_domain::{CodecError, DnsQuery, MIN_RESPONSE_SIZE};
use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::opt::{EdnsCode, EdnsOption};
use hickory_proto::rr::{DNSClass, Name};
use tracing::trace;

/// RFC 8467 §4.1: clients pad queries to the closest multiple of 128 octets.
pub const PADDING_BLOCK_SIZE: usize = 128;

/// OPTION-CODE plus OPTION-LENGTH of the padding option itself.
const PADDING_OPTION_HEADER: usize = 4;

/// Builds DNS query messages
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build the query message for `query`.
    ///
    /// Fails with [`CodecError::EncodingFailed`] when the name is not a
    /// valid internationalized domain name. The query itself is never
    /// modified.
    ///
    /// A `max_size` below [`MIN_RESPONSE_SIZE`] is advertised as
    /// [`MIN_RESPONSE_SIZE`], the RFC 6891 floor.
    pub fn build(query: &DnsQuery) -> Result<Message, CodecError> {
        let name = Self::encode_name(&query.name)?;

        let mut question = Query::query(name, RecordTypeMapper::to_hickory(query.record_type));
        question.set_query_class(DNSClass::IN);

        let mut message = Message::new();
        message
            .set_id(query.id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true)
            .add_query(question);

        let mut edns = Edns::new();
        edns.set_version(0);
        edns.set_max_payload(query.max_size.max(MIN_RESPONSE_SIZE));
        edns.set_dnssec_ok(query.wants_dnssec());
        message.set_edns(edns);

        let mut padding = 0;
        if query.wants_padding() {
            let unpadded = Self::pack(&message)?.len();
            padding = Self::padding_len(unpadded);
            if let Some(edns) = message.extensions_mut() {
                edns.options_mut().insert(EdnsOption::Unknown(
                    u16::from(EdnsCode::Padding),
                    vec![0; padding],
                ));
            }
        }

        trace!(
            name = %query.name,
            record_type = %query.record_type,
            id = query.id,
            max_size = query.max_size,
            dnssec = query.wants_dnssec(),
            padding,
            "DNS query message built"
        );

        Ok(message)
    }

    /// Build and serialize in one step.
    pub fn build_wire(query: &DnsQuery) -> Result<Vec<u8>, CodecError> {
        Self::pack(&Self::build(query)?)
    }

    /// Serialize a Message to wire format bytes
    pub fn pack(message: &Message) -> Result<Vec<u8>, CodecError> {
        message.to_vec().map_err(|e| {
            CodecError::EncodingFailed(format!("failed to serialize DNS message: {}", e))
        })
    }

    /// Number of zero bytes the padding option must carry so that a message
    /// currently `unpadded_len` octets long ends on a block boundary once
    /// the option (header included) is appended.
    pub fn padding_len(unpadded_len: usize) -> usize {
        let with_header = unpadded_len + PADDING_OPTION_HEADER;
        (PADDING_BLOCK_SIZE - with_header % PADDING_BLOCK_SIZE) % PADDING_BLOCK_SIZE
    }

    /// IDNA-encode to ASCII and force the fully-qualified form.
    ///
    /// Underscore-led labels such as `_sip._tcp` are accepted for SRV and
    /// similar owner names.
    fn encode_name(domain: &str) -> Result<Name, CodecError> {
        let mut name = Name::from_utf8(domain).map_err(|e| {
            CodecError::EncodingFailed(format!("invalid domain '{}': {}", domain, e))
        })?;
        name.set_fqdn(true);
        Ok(name)
    }
}
