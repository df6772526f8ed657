//! Resolver Options Value Object
//!
//! Construction-time options for a `TreeMenuResolver`.

use serde::{Deserialize, Serialize};

/// Options applied while flattening a menu.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolverOptions {
    /// Payload field that receives each node's generated identifier.
    /// `None` leaves payloads untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inject_id_key: Option<String>,
}

impl ResolverOptions {
    pub fn with_inject_id_key(mut self, key: impl Into<String>) -> Self {
        self.inject_id_key = Some(key.into());
        self
    }

    /// Fill unset fields from `fallback`.
    pub fn or(self, fallback: ResolverOptions) -> Self {
        Self {
            inject_id_key: self.inject_id_key.or(fallback.inject_id_key),
        }
    }
}
