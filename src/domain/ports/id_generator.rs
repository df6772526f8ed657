//! Identifier Generator Port
//!
//! The flattener asks this port for a fresh identifier per node. Production
//! code uses random UUIDs; tests inject a deterministic sequence.

use crate::domain::entities::NodeId;

/// Source of unique node identifiers.
///
/// Implementations must never hand out the same identifier twice.
pub trait IdGenerator {
    fn next_id(&mut self) -> NodeId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> NodeId {
        (**self).next_id()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> NodeId {
        (**self).next_id()
    }
}

/// Deterministic `"<prefix>-<n>"` identifiers, starting at 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("node")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> NodeId {
        let id = NodeId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}
