use thiserror::Error;

/// Failures produced while building queries or validating responses.
///
/// The display strings reuse the suffixes that system resolvers have
/// historically returned, so callers can match on either the variant or
/// the message. `ServerMisbehaving` and `ServerTemporarilyMisbehaving`
/// intentionally share the same text; only the variant tells them apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid query")]
    InvalidQuery,

    #[error("invalid DNS response")]
    InvalidResponse,

    #[error("no such host")]
    NoSuchName,

    #[error("server misbehaving")]
    ServerMisbehaving,

    #[error("server misbehaving")]
    ServerTemporarilyMisbehaving,

    #[error("no answer from DNS server")]
    NoData,

    #[error("cannot encode DNS query: {0}")]
    EncodingFailed(String),

    #[error("cannot unmarshal DNS message: {0}")]
    CannotUnmarshal(String),
}

impl CodecError {
    /// Legitimate negative outcome: the name or the data does not exist.
    pub fn is_negative_answer(&self) -> bool {
        matches!(self, CodecError::NoSuchName | CodecError::NoData)
    }

    pub fn is_server_failure(&self) -> bool {
        matches!(
            self,
            CodecError::ServerMisbehaving | CodecError::ServerTemporarilyMisbehaving
        )
    }

    /// The exchange itself cannot be trusted: malformed or mismatched messages.
    pub fn is_protocol_violation(&self) -> bool {
        matches!(
            self,
            CodecError::InvalidQuery | CodecError::InvalidResponse | CodecError::CannotUnmarshal(_)
        )
    }
}
