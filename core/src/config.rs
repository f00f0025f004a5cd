//! # RESPONSE CONFIGURATION
//!
//! Knobs for the fault translator. Defaults match a development deployment:
//! debug text exposed, no context path, `http` section included.

/// **RESPONSE CONFIG**
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseConfig {
    /// **EXPOSE DEBUG TEXT** - When false, translated envelopes never carry `debug_message`
    pub expose_debug_messages: bool,

    /// **CONTEXT PATH** - Prefix of every request path, e.g. `/api`
    pub context_path: String,

    /// **DUPLICATE TRANSPORT STATUS** - Adds the `http` section to translated envelopes
    pub include_http_info: bool,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            expose_debug_messages: true,
            context_path: String::new(),
            include_http_info: true,
        }
    }
}

impl ResponseConfig {
    /// **CONSTRUCTOR** - Same as `Default`
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug_messages(mut self, expose: bool) -> Self {
        self.expose_debug_messages = expose;
        self
    }

    pub fn with_context_path(mut self, context_path: impl Into<String>) -> Self {
        self.context_path = context_path.into();
        self
    }

    pub fn with_http_info(mut self, include: bool) -> Self {
        self.include_http_info = include;
        self
    }
}
