//! Mapping between `dnscodec_domain::RecordType` and `hickory_proto::rr::RecordType`.
//!
//! Both sides agree on the IANA code, so the conversion goes through the
//! raw `u16` and never loses an unknown type.

use dnscodec_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Domain → hickory (for building queries)
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    /// Hickory → domain (for reporting questions and records)
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_u16(u16::from(hickory_type))
    }
}
