use crate::name::{canonical_name, equal_ascii_name};
use dnscodec_domain::CodecError;
use hickory_proto::op::{Message, Query};
use hickory_proto::rr::{RData, Record};
use std::collections::HashSet;

/// Returns the answer records that belong to the question's answer chain.
///
/// RFC 1034 §4.3.1: an answer may be prefaced by CNAME records naming the
/// aliases met on the way. A CNAME extends the chain only when it
/// continues it in answer order, matching the current tip and the
/// question class. Every answer whose owner is a chain member and whose
/// class matches is then kept, whatever its type, in answer order.
///
/// Fails with [`CodecError::NoData`] when nothing qualifies.
pub fn extract_valid_answers(
    question: &Query,
    response: &Message,
) -> Result<Vec<Record>, CodecError> {
    let class = question.query_class();

    let mut valid_names = HashSet::new();
    valid_names.insert(canonical_name(question.name()));

    let mut tip = question.name().to_ascii();
    for record in response.answers() {
        let Some(RData::CNAME(target)) = record.data() else {
            continue;
        };
        if record.dns_class() == class && equal_ascii_name(&tip, &record.name().to_ascii()) {
            tip = canonical_name(&target.0);
            valid_names.insert(tip.clone());
        }
    }

    let valid: Vec<Record> = response
        .answers()
        .iter()
        .filter(|record| record.dns_class() == class)
        .filter(|record| valid_names.contains(&canonical_name(record.name())))
        .cloned()
        .collect();

    if valid.is_empty() {
        return Err(CodecError::NoData);
    }
    Ok(valid)
}
