//! Common types and traits for all entities

pub mod entity;
pub mod entity_ref;
pub mod lenient;
pub mod record;
pub mod record_id;

// Re-exports
pub use entity::{EditableEntity, Entity, FormPayload};
pub use entity_ref::EntityRef;
pub use record::{Record, SubmitAction};
pub use record_id::RecordId;
pub mod validation;
