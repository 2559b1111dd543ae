use anyhow::Context;
use dnscodec::{DnsResponse, ResponseParser};
use dnscodec_domain::CodecError;
use hickory_proto::op::Message;
use std::fmt::Write;
use tracing::warn;

pub struct ParseArgs {
    pub query_hex: String,
    pub response_hex: String,
}

pub fn run_parse(args: ParseArgs) -> anyhow::Result<()> {
    let query_bytes = decode_hex(&args.query_hex).context("Invalid --query-hex")?;
    let response_bytes = decode_hex(&args.response_hex).context("Invalid --response-hex")?;

    let query = Message::from_vec(&query_bytes)
        .map_err(|e| anyhow::anyhow!("Query bytes are not a DNS message: {}", e))?;

    match ResponseParser::parse_wire(query, &response_bytes) {
        Ok(response) => {
            print!("{}", render_response(&response));
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, kind = classify(&e), "Response rejected");
            anyhow::bail!("{} ({})", e, classify(&e))
        }
    }
}

fn decode_hex(input: &str) -> anyhow::Result<Vec<u8>> {
    let cleaned: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(hex::decode(cleaned)?)
}

fn classify(error: &CodecError) -> &'static str {
    if error.is_negative_answer() {
        "negative answer"
    } else if error.is_server_failure() {
        "server failure"
    } else if error.is_protocol_violation() {
        "protocol violation"
    } else {
        "encoding failure"
    }
}

fn render_response(response: &DnsResponse) -> String {
    let mut out = String::new();
    let message = response.response();

    let _ = writeln!(
        out,
        ";; ->>HEADER<<- opcode: {:?}, status: {}, id: {}",
        message.op_code(),
        ResponseParser::rcode_to_status(message.response_code()),
        message.id()
    );
    let _ = writeln!(
        out,
        ";; ANSWER: {}, VALID: {}",
        message.answers().len(),
        response.valid_records().len()
    );

    let _ = writeln!(out);
    let _ = writeln!(out, ";; VALID ANSWER SECTION:");
    for record in response.valid_records() {
        let _ = writeln!(out, "{}", record);
    }

    let _ = writeln!(out);
    write_projection(&mut out, "A", response.records_a());
    write_projection(&mut out, "AAAA", response.records_aaaa());
    write_projection(&mut out, "CNAME", response.records_cname());
    if let Ok(first) = response.first_cname() {
        let _ = writeln!(out, ";; first CNAME: {}", first);
    }
    out
}

fn write_projection(out: &mut String, label: &str, values: Result<Vec<String>, CodecError>) {
    match values {
        Ok(values) => {
            let _ = writeln!(out, ";; {}: {}", label, values.join(", "));
        }
        Err(e) => {
            let _ = writeln!(out, ";; {}: ({})", label, e);
        }
    }
}
