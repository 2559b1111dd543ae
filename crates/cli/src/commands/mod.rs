mod parse;
mod query;

pub use parse::{run_parse, ParseArgs};
pub use query::{run_query, QueryArgs};
