use anyhow::Context;
use dnscodec::{MessageBuilder, RecordTypeMapper};
use dnscodec_domain::{Config, DnsQuery, FixedQueryId, RandomQueryId, RecordType};
use hickory_proto::op::Message;
use hickory_proto::rr::rdata::opt::{EdnsCode, EdnsOption};
use std::fmt::Write;
use tracing::info;

pub struct QueryArgs {
    pub name: String,
    pub record_type: RecordType,
    pub id: Option<u16>,
}

pub fn run_query(args: QueryArgs, config: &Config) -> anyhow::Result<()> {
    let mut query = match args.id {
        Some(id) => DnsQuery::with_id_generator(args.name.as_str(), args.record_type, &FixedQueryId(id)),
        None => DnsQuery::with_id_generator(args.name.as_str(), args.record_type, &RandomQueryId),
    };
    config.query.apply(&mut query);
    // An explicit ID beats the transport's zero-ID rule.
    if let Some(id) = args.id {
        query.id = id;
    }

    let message = MessageBuilder::build(&query)
        .with_context(|| format!("Failed to build query for '{}'", args.name))?;
    let wire = MessageBuilder::pack(&message)?;

    info!(
        name = %query.name,
        transport = %config.query.transport,
        bytes = wire.len(),
        "Query built"
    );

    print!("{}", render_query(&message, wire.len()));
    println!("{}", hex::encode(&wire));
    Ok(())
}

fn render_query(message: &Message, wire_len: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        ";; ->>HEADER<<- opcode: {:?}, id: {}",
        message.op_code(),
        message.id()
    );
    let _ = writeln!(
        out,
        ";; flags:{}; QUERY: {}, ANSWER: 0, AUTHORITY: 0, ADDITIONAL: {}",
        if message.recursion_desired() { " rd" } else { "" },
        message.queries().len(),
        u16::from(message.extensions().is_some())
    );

    if let Some(edns) = message.extensions() {
        let padding = match edns.options().get(EdnsCode::Padding) {
            Some(EdnsOption::Unknown(_, data)) => data.len(),
            _ => 0,
        };
        let _ = writeln!(out);
        let _ = writeln!(out, ";; OPT PSEUDOSECTION:");
        let _ = writeln!(
            out,
            "; EDNS: version: {}, flags:{}; udp: {}",
            edns.version(),
            if edns.dnssec_ok() { " do" } else { "" },
            edns.max_payload()
        );
        if padding > 0 {
            let _ = writeln!(out, "; PADDING: {} bytes", padding);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, ";; QUESTION SECTION:");
    for question in message.queries() {
        let _ = writeln!(
            out,
            ";{}\t\t{}\t{}",
            question.name(),
            question.query_class(),
            RecordTypeMapper::from_hickory(question.query_type())
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, ";; MSG SIZE: {} bytes", wire_len);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnscodec_domain::QueryFlags;

    #[test]
    fn test_render_query_shows_padding_and_do_bit() {
        let mut query = DnsQuery::with_id_generator("www.example.com", RecordType::A, &FixedQueryId(1));
        query.flags = QueryFlags::BLOCK_LENGTH_PADDING | QueryFlags::DNSSEC;
        let message = MessageBuilder::build(&query).unwrap();
        let wire = MessageBuilder::pack(&message).unwrap();

        let text = render_query(&message, wire.len());

        assert!(text.contains("id: 1"));
        assert!(text.contains("flags: rd;"));
        assert!(text.contains("flags: do; udp: 1232"));
        assert!(text.contains("; PADDING: 80 bytes"));
        assert!(text.contains(";www.example.com."));
        assert!(text.contains(";; MSG SIZE: 128 bytes"));
    }

    #[test]
    fn test_render_query_without_padding() {
        let query = DnsQuery::with_id_generator("example.org", RecordType::AAAA, &FixedQueryId(9));
        let message = MessageBuilder::build(&query).unwrap();

        let text = render_query(&message, 0);

        assert!(!text.contains("PADDING"));
        assert!(text.contains("flags:; udp: 1232"));
        assert!(text.contains("AAAA"));
    }

    #[test]
    fn test_render_query_names_unknown_type() {
        let query =
            DnsQuery::with_id_generator("example.org", RecordType::Other(65280), &FixedQueryId(3));
        let message = MessageBuilder::build(&query).unwrap();

        let text = render_query(&message, 0);

        assert!(text.contains(";example.org.\t\tIN\tTYPE65280"));
    }
}
