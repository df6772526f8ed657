//! Random identifier generation.

use uuid::Uuid;

use crate::domain::entities::NodeId;
use crate::domain::ports::IdGenerator;

/// UUID v4 identifiers. Collisions are not a practical concern.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> NodeId {
        NodeId::new(Uuid::new_v4().to_string())
    }
}
