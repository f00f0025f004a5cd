pub use crate::config::ResponseConfig;
pub use crate::errors::EnvelopeError;
pub use crate::fault::{Fault, FaultKind, FaultTranslator};
pub use crate::registry::ServiceCode;
pub use crate::request::{parse_json_body, parse_query_string, required_param, RequestContext};
pub use crate::response::{
    build, build_for_code, respond, respond_for_code, BuildOptions, Envelope, EnvelopeResponse,
    FileUploadResult, HttpResponse, MessageStatusResult, SubError,
};
pub use crate::routing::HttpMethod;
pub use crate::types::{HttpInfo, HttpStatus};
pub use crate::validation::{aggregate, FieldError, ViolationKind};
