use super::answers::extract_valid_answers;
use super::rcode::error_from_rcode;
use super::validator::validate_response_for_query;
use dnscodec_domain::CodecError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use tracing::debug;

/// A response proven to answer its query.
///
/// Only built by [`ResponseParser`]; the record list is never empty.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    query: Message,
    response: Message,
    valid_records: Vec<Record>,
}

impl DnsResponse {
    pub fn query(&self) -> &Message {
        &self.query
    }

    pub fn response(&self) -> &Message {
        &self.response
    }

    /// Records on the query's answer chain, in answer-section order.
    pub fn valid_records(&self) -> &[Record] {
        &self.valid_records
    }

    /// IPv4 addresses, in order.
    pub fn records_a(&self) -> Result<Vec<String>, CodecError> {
        self.project(|rdata| match rdata {
            RData::A(a) => Some(a.0.to_string()),
            _ => None,
        })
    }

    /// IPv6 addresses, in order.
    pub fn records_aaaa(&self) -> Result<Vec<String>, CodecError> {
        self.project(|rdata| match rdata {
            RData::AAAA(aaaa) => Some(aaaa.0.to_string()),
            _ => None,
        })
    }

    /// Every CNAME target on the chain, in order.
    pub fn records_cname(&self) -> Result<Vec<String>, CodecError> {
        self.project(|rdata| match rdata {
            RData::CNAME(cname) => Some(cname.0.to_ascii()),
            _ => None,
        })
    }

    pub fn first_cname(&self) -> Result<String, CodecError> {
        self.valid_records
            .iter()
            .find_map(|record| match record.data() {
                Some(RData::CNAME(cname)) => Some(cname.0.to_ascii()),
                _ => None,
            })
            .ok_or(CodecError::NoData)
    }

    fn project<F>(&self, select: F) -> Result<Vec<String>, CodecError>
    where
        F: Fn(&RData) -> Option<String>,
    {
        let out: Vec<String> = self
            .valid_records
            .iter()
            .filter_map(|record| record.data().and_then(&select))
            .collect();

        if out.is_empty() {
            return Err(CodecError::NoData);
        }
        Ok(out)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Validate `response` against `query` and keep the records on the
    /// answer chain.
    ///
    /// Runs the structural checks, the result-code mapping and the chain
    /// extraction in that order, returning the first error unchanged.
    pub fn parse(query: Message, response: Message) -> Result<DnsResponse, CodecError> {
        let question = validate_response_for_query(&query, &response).map_err(|e| {
            debug!(id = response.id(), error = %e, "DNS response failed structural validation");
            e
        })?;

        if let Some(e) = error_from_rcode(&response) {
            debug!(
                id = response.id(),
                rcode = Self::rcode_to_status(response.response_code()),
                error = ?e,
                "DNS response carries an error"
            );
            return Err(e);
        }

        let valid_records = extract_valid_answers(question, &response).map_err(|e| {
            debug!(
                id = response.id(),
                answers = response.answers().len(),
                "No answer on the query chain"
            );
            e
        })?;

        debug!(
            id = response.id(),
            rcode = Self::rcode_to_status(response.response_code()),
            answers = response.answers().len(),
            valid = valid_records.len(),
            "DNS response validated"
        );

        Ok(DnsResponse {
            query,
            response,
            valid_records,
        })
    }

    /// Decode raw response bytes, then [`parse`](Self::parse) them.
    pub fn parse_wire(query: Message, response_bytes: &[u8]) -> Result<DnsResponse, CodecError> {
        let response = Message::from_vec(response_bytes)
            .map_err(|e| CodecError::CannotUnmarshal(e.to_string()))?;
        Self::parse(query, response)
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
