pub mod types;

pub use types::HttpMethod;
