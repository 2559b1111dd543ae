use crate::name::equal_ascii_name;
use dnscodec_domain::CodecError;
use hickory_proto::op::{Message, MessageType, Query};

/// Checks that `response` actually answers `query`.
///
/// Checks run in order and the first failure wins. On success the single
/// question is returned from the query side, the response copy having
/// been proven equivalent.
pub fn validate_response_for_query<'q>(
    query: &'q Message,
    response: &Message,
) -> Result<&'q Query, CodecError> {
    if response.message_type() != MessageType::Response {
        return Err(CodecError::InvalidResponse);
    }

    if response.id() != query.id() {
        return Err(CodecError::InvalidResponse);
    }

    let [query_question] = query.queries() else {
        return Err(CodecError::InvalidQuery);
    };
    let [response_question] = response.queries() else {
        return Err(CodecError::InvalidResponse);
    };

    if !equal_ascii_name(
        &response_question.name().to_ascii(),
        &query_question.name().to_ascii(),
    ) {
        return Err(CodecError::InvalidResponse);
    }
    if response_question.query_class() != query_question.query_class() {
        return Err(CodecError::InvalidResponse);
    }
    if response_question.query_type() != query_question.query_type() {
        return Err(CodecError::InvalidResponse);
    }

    Ok(query_question)
}
