//! Server configuration.

use std::path::PathBuf;

use axum::http::header::{
    CONTENT_SECURITY_POLICY, STRICT_TRANSPORT_SECURITY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
    X_XSS_PROTECTION,
};
use axum::http::{HeaderName, HeaderValue};
use ut_table::DEFAULT_TABLE;

/// Configuration for the HTTP service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub bind: String,
    /// Port to listen on.
    pub port: u16,
    /// Path of the table document.
    pub table_file: PathBuf,
    /// Table to read from the document.
    pub table_name: String,
    /// Headers set on every response.
    pub security_headers: Vec<(HeaderName, HeaderValue)>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 3000,
            table_file: PathBuf::from("data/universal_table.json"),
            table_name: DEFAULT_TABLE.to_string(),
            security_headers: default_security_headers(),
        }
    }
}

impl ServerConfig {
    /// Set the bind address.
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.bind = bind.into();
        self
    }

    /// Set the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the table document path.
    pub fn with_table_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.table_file = path.into();
        self
    }

    /// Set the table name.
    pub fn with_table_name(mut self, name: impl Into<String>) -> Self {
        self.table_name = name.into();
        self
    }

    /// Replace the security headers.
    pub fn with_security_headers(mut self, headers: Vec<(HeaderName, HeaderValue)>) -> Self {
        self.security_headers = headers;
        self
    }

    /// The `host:port` string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

fn default_security_headers() -> Vec<(HeaderName, HeaderValue)> {
    vec![
        (
            CONTENT_SECURITY_POLICY,
            HeaderValue::from_static("default-src 'self'"),
        ),
        (X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        (
            STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        ),
        (X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
        (X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block")),
    ]
}
