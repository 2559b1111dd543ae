use dnscodec_domain::CodecError;
use hickory_proto::op::{Message, ResponseCode};

/// Maps the result code of an already-validated response to an error.
///
/// Returns `None` when the caller may go on extracting answers.
pub fn error_from_rcode(response: &Message) -> Option<CodecError> {
    let rcode = response.response_code();

    if rcode == ResponseCode::NXDomain {
        return Some(CodecError::NoSuchName);
    }

    // Lame referral: a "success" that is neither authoritative nor
    // recursive and carries no answers holds nothing usable.
    if rcode == ResponseCode::NoError
        && !response.authoritative()
        && !response.recursion_available()
        && response.answers().is_empty()
    {
        return Some(CodecError::NoData);
    }

    match rcode {
        ResponseCode::NoError => None,
        ResponseCode::ServFail => Some(CodecError::ServerTemporarilyMisbehaving),
        _ => Some(CodecError::ServerMisbehaving),
    }
}
