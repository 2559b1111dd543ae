#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr};

pub const QUERY_ID: u16 = 0x1234;

/// Case is preserved exactly; no IDNA mapping.
pub fn name(s: &str) -> Name {
    Name::from_ascii(s).expect("valid test name")
}

pub fn question(qname: &str, record_type: RecordType) -> Query {
    Query::query(name(qname), record_type)
}

pub fn query_message(qname: &str, record_type: RecordType) -> Message {
    let mut message = Message::new();
    message
        .set_id(QUERY_ID)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true)
        .add_query(question(qname, record_type));
    message
}

/// Response skeleton echoing the query's ID and questions, with no flags
/// beyond QR and RD.
pub fn reply_to(query: &Message) -> Message {
    let mut message = Message::new();
    message
        .set_id(query.id())
        .set_message_type(MessageType::Response)
        .set_op_code(query.op_code())
        .set_recursion_desired(query.recursion_desired())
        .set_response_code(ResponseCode::NoError)
        .add_queries(query.queries().to_vec());
    message
}

/// Same as [`reply_to`] but carrying `question` instead of the query's own.
pub fn reply_with_question(query: &Message, question: Query) -> Message {
    let mut message = Message::new();
    message
        .set_id(query.id())
        .set_message_type(MessageType::Response)
        .set_op_code(query.op_code())
        .set_recursion_desired(query.recursion_desired())
        .add_query(question);
    message
}

/// Recursive resolver answer: RA set, so an empty answer is not lame.
pub fn recursive_reply_to(query: &Message, answers: Vec<Record>) -> Message {
    let mut message = reply_to(query);
    message.set_recursion_available(true);
    message.add_answers(answers);
    message
}

pub fn a_record(owner: &str, ip: Ipv4Addr) -> Record {
    Record::from_rdata(name(owner), 300, RData::A(A(ip)))
}

pub fn aaaa_record(owner: &str, ip: Ipv6Addr) -> Record {
    Record::from_rdata(name(owner), 300, RData::AAAA(AAAA(ip)))
}

pub fn cname_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::CNAME(CNAME(name(target))))
}

pub fn txt_record(owner: &str, text: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::TXT(TXT::new(vec![text.to_string()])))
}

pub fn in_class(mut record: Record, class: DNSClass) -> Record {
    record.set_dns_class(class);
    record
}

pub fn localhost() -> Ipv4Addr {
    Ipv4Addr::new(127, 0, 0, 1)
}
