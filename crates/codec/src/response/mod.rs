pub mod answers;
pub mod parser;
pub mod rcode;
pub mod validator;

pub use answers::extract_valid_answers;
pub use parser::{DnsResponse, ResponseParser};
pub use rcode::error_from_rcode;
pub use validator::validate_response_for_query;
