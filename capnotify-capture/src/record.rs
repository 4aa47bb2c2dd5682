//! Captured record types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One token captured for a domain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieToken {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub http_only: bool,
}

impl CookieToken {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: "/".to_string(),
            http_only: false,
        }
    }
}

/// A completed capture, as handed out by a [`RecordStore`](crate::RecordStore).
///
/// Collections are key-sorted maps, so anything derived from a record
/// (reports in particular) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapturedRecord {
    /// Record identifier
    pub id: String,

    /// Label of the source that produced the capture
    pub source: String,

    /// Principal / username
    pub principal: String,

    /// Credential, empty when none was captured
    pub secret: String,

    /// Remote network address
    pub origin_address: String,

    /// Client descriptor (user agent)
    pub client_descriptor: String,

    /// Landing reference (URL)
    pub landing_reference: String,

    /// Completion time, seconds since the Unix epoch
    pub completed_at: i64,

    /// Tokens grouped by domain, then by token name
    pub cookie_tokens: BTreeMap<String, BTreeMap<String, CookieToken>>,

    /// Values captured from request bodies
    pub body_tokens: BTreeMap<String, String>,

    /// Values captured from HTTP headers
    pub http_tokens: BTreeMap<String, String>,

    /// Free-form values attached by the host
    pub custom: BTreeMap<String, String>,
}

impl CapturedRecord {
    /// Create an empty record with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_principal(mut self, principal: impl Into<String>) -> Self {
        self.principal = principal.into();
        self
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = secret.into();
        self
    }

    pub fn with_origin_address(mut self, address: impl Into<String>) -> Self {
        self.origin_address = address.into();
        self
    }

    pub fn with_client_descriptor(mut self, descriptor: impl Into<String>) -> Self {
        self.client_descriptor = descriptor.into();
        self
    }

    pub fn with_landing_reference(mut self, reference: impl Into<String>) -> Self {
        self.landing_reference = reference.into();
        self
    }

    pub fn with_completed_at(mut self, seconds: i64) -> Self {
        self.completed_at = seconds;
        self
    }

    /// Add a token under a domain
    pub fn with_cookie(mut self, domain: impl Into<String>, token: CookieToken) -> Self {
        self.cookie_tokens
            .entry(domain.into())
            .or_default()
            .insert(token.name.clone(), token);
        self
    }

    pub fn with_body_token(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.body_tokens.insert(key.into(), value.into());
        self
    }

    pub fn with_http_token(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.http_tokens.insert(key.into(), value.into());
        self
    }

    pub fn with_custom(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom.insert(key.into(), value.into());
        self
    }

    /// Whether a credential was captured
    pub fn has_secret(&self) -> bool {
        !self.secret.is_empty()
    }

    /// Number of tokens captured per domain
    pub fn cookie_counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.cookie_tokens
            .iter()
            .map(|(domain, tokens)| (domain.as_str(), tokens.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let record = CapturedRecord::new("17")
            .with_source("demo")
            .with_principal("alice")
            .with_cookie("example.com", CookieToken::new("sid", "a"))
            .with_cookie("example.com", CookieToken::new("csrf", "b"))
            .with_cookie("login.example.com", CookieToken::new("sid", "c"));

        assert_eq!(record.id, "17");
        assert!(!record.has_secret());

        let counts: Vec<_> = record.cookie_counts().collect();
        assert_eq!(counts, vec![("example.com", 2), ("login.example.com", 1)]);
    }

    #[test]
    fn test_same_cookie_name_replaces() {
        let record = CapturedRecord::new("1")
            .with_cookie("example.com", CookieToken::new("sid", "old"))
            .with_cookie("example.com", CookieToken::new("sid", "new"));

        assert_eq!(record.cookie_tokens["example.com"].len(), 1);
        assert_eq!(record.cookie_tokens["example.com"]["sid"].value, "new");
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let record: CapturedRecord =
            serde_json::from_str(r#"{"id": "3", "principal": "bob"}"#).unwrap();

        assert_eq!(record.principal, "bob");
        assert!(record.secret.is_empty());
        assert!(record.cookie_tokens.is_empty());
        assert_eq!(record.completed_at, 0);
    }
}
