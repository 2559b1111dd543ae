use dnscodec::extract_valid_answers;
use dnscodec_domain::CodecError;
use hickory_proto::op::Message;
use hickory_proto::rr::{DNSClass, Record, RecordType};
use std::net::Ipv4Addr;

mod helpers;
use helpers::builders::*;

fn extract(qname: &str, answers: Vec<Record>) -> Result<Vec<Record>, CodecError> {
    let query = query_message(qname, RecordType::A);
    let mut response = reply_to(&query);
    response.add_answers(answers);
    extract_valid_answers(&query.queries()[0], &response)
}

fn owners(records: &[Record]) -> Vec<String> {
    records.iter().map(|r| r.name().to_ascii()).collect()
}

#[test]
fn test_valid_answer_without_cname() {
    let answers = extract("example.com.", vec![a_record("example.com.", localhost())]).unwrap();
    assert_eq!(answers.len(), 1);
}

#[test]
fn test_valid_answer_with_cname_chain() {
    let answers = extract(
        "example.co.uk.",
        vec![
            cname_record("example.co.uk.", "example.com."),
            cname_record("example.com.", "example.org."),
            a_record("example.org.", localhost()),
        ],
    )
    .unwrap();

    assert_eq!(
        owners(&answers),
        vec!["example.co.uk.", "example.com.", "example.org."]
    );
}

#[test]
fn test_valid_answer_with_cname_chain_mixed_case() {
    let answers = extract(
        "Example.CO.UK.",
        vec![
            cname_record("eXample.co.uk.", "ExamPle.com."),
            cname_record("example.COM.", "Example.ORG."),
            a_record("eXaMpLe.org.", localhost()),
        ],
    )
    .unwrap();

    assert_eq!(answers.len(), 3);
    assert_eq!(answers[0].record_type(), RecordType::CNAME);
    assert_eq!(answers[1].record_type(), RecordType::CNAME);
    assert_eq!(answers[2].record_type(), RecordType::A);
}

#[test]
fn test_no_answers() {
    let result = extract("example.com.", vec![]);
    assert_eq!(result, Err(CodecError::NoData));
}

#[test]
fn test_mismatched_name() {
    let result = extract("example.com.", vec![a_record("example.org.", localhost())]);
    assert_eq!(result, Err(CodecError::NoData));
}

#[test]
fn test_mismatched_class() {
    let result = extract(
        "example.com.",
        vec![in_class(a_record("example.com.", localhost()), DNSClass::CH)],
    );
    assert_eq!(result, Err(CodecError::NoData));
}

#[test]
fn test_unrelated_records_are_dropped() {
    let answers = extract(
        "example.com.",
        vec![
            a_record("tracker.example.net.", Ipv4Addr::new(10, 0, 0, 1)),
            a_record("example.com.", localhost()),
            a_record("evil.example.", Ipv4Addr::new(10, 0, 0, 2)),
        ],
    )
    .unwrap();

    assert_eq!(owners(&answers), vec!["example.com."]);
}

#[test]
fn test_cname_with_mismatched_class_does_not_extend_chain() {
    let result = extract(
        "example.com.",
        vec![
            in_class(cname_record("example.com.", "cdn.example.net."), DNSClass::CH),
            a_record("cdn.example.net.", localhost()),
        ],
    );
    assert_eq!(result, Err(CodecError::NoData));
}

#[test]
fn test_out_of_order_cname_is_not_followed() {
    // The second hop appears before the first, so the chain stops at
    // example.com. and example.org. never becomes valid.
    let answers = extract(
        "example.co.uk.",
        vec![
            cname_record("example.com.", "example.org."),
            cname_record("example.co.uk.", "example.com."),
            a_record("example.org.", localhost()),
        ],
    )
    .unwrap();

    assert_eq!(owners(&answers), vec!["example.com.", "example.co.uk."]);
}

#[test]
fn test_cname_not_matching_tip_is_ignored() {
    let result = extract(
        "example.com.",
        vec![
            cname_record("other.example.", "example.org."),
            a_record("example.org.", localhost()),
        ],
    );
    assert_eq!(result, Err(CodecError::NoData));
}

#[test]
fn test_all_types_on_chain_are_kept_in_order() {
    let answers = extract(
        "www.example.com.",
        vec![
            cname_record("www.example.com.", "edge.example.net."),
            aaaa_record("edge.example.net.", "2001:db8::1".parse().unwrap()),
            txt_record("edge.example.net.", "v=test"),
            a_record("edge.example.net.", localhost()),
        ],
    )
    .unwrap();

    let types: Vec<RecordType> = answers.iter().map(|r| r.record_type()).collect();
    assert_eq!(
        types,
        vec![
            RecordType::CNAME,
            RecordType::AAAA,
            RecordType::TXT,
            RecordType::A
        ]
    );
}

#[test]
fn test_question_class_drives_filter() {
    let query = {
        let mut q = question("version.bind.", RecordType::TXT);
        q.set_query_class(DNSClass::CH);
        let mut m = Message::new();
        m.add_query(q);
        m
    };
    let mut response = reply_to(&query);
    response.add_answers(vec![
        in_class(txt_record("version.bind.", "9.18"), DNSClass::CH),
        txt_record("version.bind.", "ignored"),
    ]);

    let answers = extract_valid_answers(&query.queries()[0], &response).unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].dns_class(), DNSClass::CH);
}
