use crate::dns_query::{DnsQuery, QueryFlags, MAX_RESPONSE_SIZE_TCP, MAX_RESPONSE_SIZE_UDP};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transport the query is meant for. Each one implies a set of defaults.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    #[default]
    Udp,

    Tcp,

    Tls,

    Https,

    Quic,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Udp => "udp",
            Self::Tcp => "tcp",
            Self::Tls => "tls",
            Self::Https => "https",
            Self::Quic => "quic",
        }
    }

    pub fn max_response_size(&self) -> u16 {
        match self {
            Self::Udp => MAX_RESPONSE_SIZE_UDP,
            Self::Tcp | Self::Tls | Self::Https | Self::Quic => MAX_RESPONSE_SIZE_TCP,
        }
    }

    /// Encrypted transports pad queries and ask for signatures.
    pub fn default_flags(&self) -> QueryFlags {
        match self {
            Self::Udp | Self::Tcp => QueryFlags::empty(),
            Self::Tls | Self::Https | Self::Quic => {
                QueryFlags::BLOCK_LENGTH_PADDING | QueryFlags::DNSSEC
            }
        }
    }

    /// DoH (RFC 8484 §4.1) and DoQ (RFC 9250 §4.2.1) send ID 0.
    pub fn requires_zero_id(&self) -> bool {
        matches!(self, Self::Https | Self::Quic)
    }

    pub fn apply(&self, query: &mut DnsQuery) {
        query.max_size = self.max_response_size();
        query.flags = self.default_flags();
        if self.requires_zero_id() {
            query.id = 0;
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "udp" => Ok(Self::Udp),
            "tcp" => Ok(Self::Tcp),
            "tls" | "dot" => Ok(Self::Tls),
            "https" | "doh" => Ok(Self::Https),
            "quic" | "doq" => Ok(Self::Quic),
            _ => Err(format!("Unknown transport: {}", s)),
        }
    }
}

/// `[query]` section: a transport preset plus optional overrides.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QueryConfig {
    #[serde(default)]
    pub transport: Transport,

    #[serde(default)]
    pub max_response_size: Option<u16>,

    #[serde(default)]
    pub dnssec: Option<bool>,

    #[serde(default)]
    pub padding: Option<bool>,
}

impl QueryConfig {
    /// Applies the transport preset, then every explicit override.
    pub fn apply(&self, query: &mut DnsQuery) {
        self.transport.apply(query);

        if let Some(size) = self.max_response_size {
            query.max_size = size;
        }
        if let Some(dnssec) = self.dnssec {
            query.flags.set(QueryFlags::DNSSEC, dnssec);
        }
        if let Some(padding) = self.padding {
            query.flags.set(QueryFlags::BLOCK_LENGTH_PADDING, padding);
        }
    }
}
