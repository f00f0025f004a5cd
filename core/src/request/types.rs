use crate::config::ResponseConfig;
use crate::routing::HttpMethod;

/// **REQUEST CONTEXT**
///
/// **PURPOSE**: The slice of the in-flight request the fault translator needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub method: HttpMethod,
    /// Deployment prefix, e.g. `/api`. Empty when mounted at the root.
    pub context_path: String,
    /// Path relative to the context path. `None` when the framework could not resolve one.
    pub path_within_mapping: Option<String>,
}

impl RequestContext {
    /// **CONSTRUCTOR** - No context path
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            context_path: String::new(),
            path_within_mapping: Some(path.into()),
        }
    }

    /// **CONSTRUCTOR** - Context path taken from `config`
    pub fn from_config(config: &ResponseConfig, method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            context_path: config.context_path.clone(),
            ..Self::new(method, path)
        }
    }

    /// Request whose path is unknown.
    pub fn without_path(method: HttpMethod) -> Self {
        Self {
            method,
            context_path: String::new(),
            path_within_mapping: None,
        }
    }

    /// **FULL URI PATH** - Context path followed by the path within the mapping
    pub fn uri_path(&self) -> Option<String> {
        self.path_within_mapping
            .as_ref()
            .map(|path| format!("{}{}", self.context_path, path))
    }
}
