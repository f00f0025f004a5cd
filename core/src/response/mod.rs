pub mod builder;
pub mod envelope;
pub mod serializer;
pub mod types;

pub use builder::{
    build, build_for_code, respond, respond_for_code, BuildOptions, UNEXPECTED_ERROR_MESSAGE,
    VALIDATION_ERROR_MESSAGE,
};
pub use envelope::{ApiInfo, Envelope, FileUploadResult, MessageStatusResult, SubError, TIMESTAMP_FORMAT};
pub use serializer::{create_response, serialize_response_body, APPLICATION_JSON, CONTENT_TYPE};
pub use types::{EnvelopeResponse, HttpResponse};

#[cfg(test)]
mod tests;
