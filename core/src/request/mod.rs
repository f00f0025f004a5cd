pub mod parser;
pub mod types;

pub use parser::{parse_json_body, parse_json_payload, parse_query_string, required_param};
pub use types::RequestContext;
